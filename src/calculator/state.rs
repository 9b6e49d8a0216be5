//! Calculator state and its transitions
//!
//! [`CalculatorState`] is the single record a front end keeps. Every user
//! interaction is a [`CalculatorEvent`]; [`CalculatorState::apply`] consumes
//! the prior state and returns the next one. Transitions never fail: bad input
//! either lands in the error set (Calculate, total-stake edits) or clears the
//! result and falls back to `Auto` (leg-stake edits).

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::solver::{LegSolve, SolveResult, Solver};
use super::validator::{check_field, validate, ErrorSet, ValidatedInputs};
use crate::common::numeric::{format_fixed, parse_decimal_input};
use crate::common::types::{Field, Leg, OddsPair, StakeField};
use crate::config::SolverSettings;

/// A single user interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum CalculatorEvent {
    /// Odds text changed; stored as-is
    EditOdd(Leg, String),
    /// Total stake text changed
    EditTotalStake(String),
    /// A leg stake was overwritten by hand
    EditStake(Leg, String),
    /// Explicit validate-and-solve
    Calculate,
    /// Back to an empty form
    Reset,
    /// Field gained focus; drop its error message
    ClearError(Field),
}

/// Everything the form shows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalculatorState {
    pub odd1: String,
    pub odd2: String,
    pub total_stake: String,
    pub stake1: StakeField,
    pub stake2: StakeField,
    pub errors: ErrorSet,
    pub result: Option<SolveResult>,
    #[serde(skip)]
    solver: Solver,
}

impl CalculatorState {
    pub fn new(settings: SolverSettings) -> Self {
        Self {
            solver: Solver::new(settings),
            ..Default::default()
        }
    }

    /// Form pre-filled with the three primary inputs, not yet calculated
    pub fn with_inputs(
        settings: SolverSettings,
        odd1: impl Into<String>,
        odd2: impl Into<String>,
        total_stake: impl Into<String>,
    ) -> Self {
        Self {
            odd1: odd1.into(),
            odd2: odd2.into(),
            total_stake: total_stake.into(),
            ..Self::new(settings)
        }
    }

    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    /// A full solve has happened and is still current
    pub fn is_calculated(&self) -> bool {
        self.result.is_some()
    }

    /// All primary inputs have something typed in
    ///
    /// Only a hint for enabling a Calculate button; Calculate itself always
    /// validates.
    pub fn can_calculate(&self) -> bool {
        [&self.odd1, &self.odd2, &self.total_stake]
            .iter()
            .all(|s| !s.trim().is_empty())
    }

    pub fn odd_text(&self, leg: Leg) -> &str {
        match leg {
            Leg::One => &self.odd1,
            Leg::Two => &self.odd2,
        }
    }

    pub fn stake(&self, leg: Leg) -> &StakeField {
        match leg {
            Leg::One => &self.stake1,
            Leg::Two => &self.stake2,
        }
    }

    /// Text a leg stake field shows, amounts rendered with `amount_decimals`
    pub fn stake_text(&self, leg: Leg) -> String {
        self.stake(leg)
            .display_with(self.solver.settings().amount_decimals)
    }

    fn stake_mut(&mut self, leg: Leg) -> &mut StakeField {
        match leg {
            Leg::One => &mut self.stake1,
            Leg::Two => &mut self.stake2,
        }
    }

    /// Current odds, if both are valid
    pub fn odds(&self) -> Option<OddsPair> {
        let odd1 = check_field(Field::Odd1, &self.odd1).ok()?;
        let odd2 = check_field(Field::Odd2, &self.odd2).ok()?;
        OddsPair::new(odd1, odd2)
    }

    /// Apply one event
    pub fn apply(self, event: CalculatorEvent) -> Self {
        trace!(?event, "Applying event");
        match event {
            CalculatorEvent::EditOdd(leg, raw) => self.edit_odd(leg, raw),
            CalculatorEvent::EditTotalStake(raw) => self.edit_total_stake(raw),
            CalculatorEvent::EditStake(leg, raw) => self.edit_stake(leg, raw),
            CalculatorEvent::Calculate => self.calculate(),
            CalculatorEvent::Reset => self.reset(),
            CalculatorEvent::ClearError(field) => self.clear_error(field),
        }
    }

    /// Apply events in order
    pub fn apply_all(self, events: impl IntoIterator<Item = CalculatorEvent>) -> Self {
        events.into_iter().fold(self, Self::apply)
    }

    fn edit_odd(mut self, leg: Leg, raw: String) -> Self {
        match leg {
            Leg::One => self.odd1 = raw,
            Leg::Two => self.odd2 = raw,
        }
        self
    }

    fn calculate(mut self) -> Self {
        let validation = validate(&self.odd1, &self.odd2, &self.total_stake);
        self.errors = validation.errors;
        match validation.inputs {
            Some(inputs) => self.solve_total(inputs),
            None => {
                debug!(errors = %self.errors, "Calculate blocked by invalid input");
                self.result = None;
                self
            }
        }
    }

    fn solve_total(mut self, inputs: ValidatedInputs) -> Self {
        match self.solver.solve_from_total(inputs.odds, inputs.total_stake) {
            Ok(result) => {
                self.stake1 = StakeField::Value(result.stake1);
                self.stake2 = StakeField::Value(result.stake2);
                self.result = Some(result);
            }
            Err(err) => {
                warn!(%err, "Full solve aborted");
                self.stake1 = StakeField::Auto;
                self.stake2 = StakeField::Auto;
                self.result = None;
            }
        }
        self
    }

    fn edit_total_stake(mut self, raw: String) -> Self {
        match check_field(Field::TotalStake, &raw) {
            Ok(_) => {
                self.total_stake = raw;
                self.errors.clear(Field::TotalStake);
                if self.is_calculated() {
                    debug!(total_stake = %self.total_stake, "Re-solving for new total stake");
                    return self.calculate();
                }
                self
            }
            Err(err) => {
                debug!(%err, "Rejected total stake edit");
                self.errors.record(Field::TotalStake, Some(err));
                self.total_stake.clear();
                self.result = None;
                self
            }
        }
    }

    fn edit_stake(mut self, leg: Leg, raw: String) -> Self {
        let Some(value) = parse_decimal_input(&raw).filter(|v| *v >= 0.0) else {
            // Keep the text on screen, recompute nothing
            debug!(%leg, raw = %raw, "Leg stake is not a non-negative number");
            *self.stake_mut(leg) = StakeField::Entered(raw);
            return self;
        };

        let odds = self.odds();
        match self
            .solver
            .solve_from_leg(leg, value, odds, self.result.as_ref())
        {
            LegSolve::Rescaled {
                result,
                total_stake,
                other_stake,
            } => {
                *self.stake_mut(leg) = StakeField::Entered(raw);
                *self.stake_mut(leg.other()) = StakeField::Value(other_stake);
                let decimals = self.solver.settings().amount_decimals;
                self.total_stake = format_fixed(total_stake, decimals);
                self.result = Some(result);
            }
            LegSolve::Degraded => {
                self.total_stake = raw.clone();
                *self.stake_mut(leg) = StakeField::Entered(raw);
                *self.stake_mut(leg.other()) = StakeField::Auto;
                self.result = None;
            }
        }
        self
    }

    fn reset(self) -> Self {
        debug!("Resetting calculator");
        Self::new(*self.solver.settings())
    }

    fn clear_error(mut self, field: Field) -> Self {
        self.errors.clear(field);
        self
    }
}
