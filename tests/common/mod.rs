//! Common test utilities and fixtures
#![allow(dead_code)]

use surebet_calculator::config::SolverSettings;
use surebet_calculator::{CalculatorEvent, CalculatorState, OddsPair};

/// Tolerance for "equal up to floating-point rounding"
pub const TOLERANCE: f64 = 1e-9;

/// Odds used across the property checks; covers heavy favourites,
/// coin flips and long shots
pub const ODDS_GRID: &[f64] = &[1.01, 1.25, 1.5, 1.8, 1.95, 2.0, 2.1, 2.5, 3.3, 5.0, 10.0, 51.0];

/// Total stakes used across the property checks
pub const STAKE_GRID: &[f64] = &[0.01, 1.0, 10.0, 100.0, 2500.0, 12345.67];

pub fn odds(odd1: f64, odd2: f64) -> OddsPair {
    OddsPair::new(odd1, odd2).expect("test odds must be positive")
}

/// Fresh form with the three primary fields typed in
pub fn filled(odd1: &str, odd2: &str, total_stake: &str) -> CalculatorState {
    CalculatorState::with_inputs(SolverSettings::default(), odd1, odd2, total_stake)
}

/// Form after pressing Calculate
pub fn solved(odd1: &str, odd2: &str, total_stake: &str) -> CalculatorState {
    filled(odd1, odd2, total_stake).apply(CalculatorEvent::Calculate)
}

/// Same as `solved`, but typed field by field as a user would
pub fn typed_and_solved(odd1: &str, odd2: &str, total_stake: &str) -> CalculatorState {
    use surebet_calculator::Leg;

    CalculatorState::default().apply_all([
        CalculatorEvent::EditOdd(Leg::One, odd1.to_string()),
        CalculatorEvent::EditOdd(Leg::Two, odd2.to_string()),
        CalculatorEvent::EditTotalStake(total_stake.to_string()),
        CalculatorEvent::Calculate,
    ])
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

/// Relative comparison for values whose magnitude varies across the grids
pub fn assert_close_rel(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert_close(actual, expected, TOLERANCE * scale);
}
