//! Sure bet calculation core
//!
//! # Architecture
//!
//! ```text
//! CalculatorState.apply(event)
//!
//!   Calculate ────────► validate() ──ok──► Solver::solve_from_total()
//!                          │                     │
//!                          └─errors──► ErrorSet  └─stake ≈ 0──► legs = Auto
//!
//!   EditTotalStake ───► check_field() ──ok, already solved──► Calculate
//!                          └─error──► ErrorSet, result cleared
//!
//!   EditStake ────────► number >= 0? ──► Solver::solve_from_leg()
//!                                            │        (sticky ratio)
//!                                            └─degraded──► sibling = Auto
//! ```
//!
//! # Components
//!
//! - [`validate`]: checks odd1, odd2 and total stake, producing an [`ErrorSet`]
//! - [`Solver`]: equal-payout split anchored on the total or on one leg
//! - [`CalculatorState`]: the form record, advanced by [`CalculatorEvent`]s
//! - [`Summary`]: what a results card shows
//!
//! # Example
//!
//! ```
//! use surebet_calculator::calculator::{CalculatorEvent, CalculatorState};
//! use surebet_calculator::common::types::Leg;
//! use surebet_calculator::config::SolverSettings;
//!
//! let state = CalculatorState::with_inputs(SolverSettings::default(), "2.0", "2.0", "100")
//!     .apply(CalculatorEvent::Calculate)
//!     .apply(CalculatorEvent::EditStake(Leg::One, "80".into()));
//!
//! assert_eq!(state.total_stake, "160.00");
//! assert_eq!(state.result.unwrap().stake2, 80.0);
//! ```

mod report;
mod solver;
mod state;
mod validator;

pub use validator::{check_field, validate, ErrorSet, ValidatedInputs, Validation};

pub use solver::{solve_from_leg, solve_from_total, LegSolve, SolveResult, Solver};

pub use state::{CalculatorEvent, CalculatorState};

pub use report::{LegSummary, ProfitTone, Summary};
