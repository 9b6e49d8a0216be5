//! SureBet Calculator Library
//!
//! Two-outcome arbitrage stake calculator: given two decimal odds and a
//! total stake (or one hand-edited leg stake) it finds the equal-payout
//! split, the resulting profit and the return on investment.

pub mod calculator;
pub mod common;
pub mod config;

// Re-export commonly used types
pub use common::errors::{CalcError, InputError, Result};
pub use common::types::{Field, Leg, OddsPair, StakeField};
pub use config::types::AppConfig;

// Calculator types
pub use calculator::{
    solve_from_leg, solve_from_total, validate, CalculatorEvent, CalculatorState, ErrorSet,
    LegSolve, SolveResult, Solver, Summary, Validation,
};
