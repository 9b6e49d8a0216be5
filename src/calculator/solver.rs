//! Equal-payout stake solver
//!
//! Two ways to anchor a solve:
//!
//! - **Total stake**: split the capital by implied probability so both
//!   outcomes pay the same, and remember the split ratio.
//! - **One leg stake**: scale the whole position from the ratio remembered
//!   by the last total-stake solve. The ratio is not recomputed from the
//!   odds, so dragging one leg moves the other proportionally.
//!
//! Profit is always measured against a single leg's payout: leg 1 for a
//! total-stake solve, the edited leg for a leg-anchored solve.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::errors::{CalcError, Result};
use crate::common::numeric::round_dp;
use crate::common::types::{Leg, OddsPair};
use crate::config::SolverSettings;

/// Result snapshot of a solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    pub stake1: f64,
    pub stake2: f64,
    pub payout1: f64,
    pub payout2: f64,
    pub profit: f64,
    /// profit / total stake × 100, already rounded
    pub profit_percentage: f64,
    /// stake1 / total stake at the last total-stake solve
    pub ratio1: f64,
    /// stake2 / total stake at the last total-stake solve
    pub ratio2: f64,
}

impl SolveResult {
    pub fn stake(&self, leg: Leg) -> f64 {
        match leg {
            Leg::One => self.stake1,
            Leg::Two => self.stake2,
        }
    }

    pub fn payout(&self, leg: Leg) -> f64 {
        match leg {
            Leg::One => self.payout1,
            Leg::Two => self.payout2,
        }
    }

    pub fn ratio(&self, leg: Leg) -> f64 {
        match leg {
            Leg::One => self.ratio1,
            Leg::Two => self.ratio2,
        }
    }

    /// Sum of both leg stakes
    pub fn total_stake(&self) -> f64 {
        self.stake1 + self.stake2
    }

    pub fn is_profitable(&self) -> bool {
        self.profit > 0.0
    }
}

/// Outcome of a leg-anchored solve
#[derive(Debug, Clone, PartialEq)]
pub enum LegSolve {
    /// Position rescaled from the sticky ratio
    Rescaled {
        result: SolveResult,
        total_stake: f64,
        other_stake: f64,
    },
    /// Nothing computable: odds invalid, no prior solve, or a zero position
    Degraded,
}

impl LegSolve {
    pub fn is_degraded(&self) -> bool {
        matches!(self, LegSolve::Degraded)
    }
}

/// Stateless solver parameterised by [`SolverSettings`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Solver {
    settings: SolverSettings,
}

impl Solver {
    pub fn new(settings: SolverSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// True when a stake is too small (or not a number) to solve for
    pub fn is_effectively_zero(&self, stake: f64) -> bool {
        stake.is_nan() || stake <= self.settings.zero_stake_epsilon
    }

    fn percentage(&self, profit: f64, total_stake: f64) -> f64 {
        round_dp(
            profit / total_stake * 100.0,
            self.settings.percentage_decimals,
        )
    }

    /// Split `total_stake` so both outcomes pay the same
    ///
    /// Odds are assumed valid. Returns [`CalcError::DegenerateStake`] when the
    /// total is effectively zero.
    pub fn solve_from_total(&self, odds: OddsPair, total_stake: f64) -> Result<SolveResult> {
        if self.is_effectively_zero(total_stake) {
            warn!(total_stake, "Total stake is effectively zero, skipping solve");
            return Err(CalcError::DegenerateStake(total_stake));
        }

        let inv1 = 1.0 / odds.odd1;
        let inv2 = 1.0 / odds.odd2;
        let denom = inv1 + inv2;

        let stake1 = inv1 / denom * total_stake;
        let stake2 = inv2 / denom * total_stake;
        let payout1 = stake1 * odds.odd1;
        let payout2 = stake2 * odds.odd2;
        let profit = payout1 - total_stake;

        let result = SolveResult {
            stake1,
            stake2,
            payout1,
            payout2,
            profit,
            profit_percentage: self.percentage(profit, total_stake),
            ratio1: stake1 / total_stake,
            ratio2: stake2 / total_stake,
        };

        debug!(
            odd1 = odds.odd1,
            odd2 = odds.odd2,
            total_stake,
            implied_sum = denom,
            stake1,
            stake2,
            profit,
            "Solved from total stake"
        );
        Ok(result)
    }

    /// Re-derive the position after the user typed `new_value` into `leg`
    ///
    /// `new_value` is assumed already checked to be a finite number >= 0.
    pub fn solve_from_leg(
        &self,
        leg: Leg,
        new_value: f64,
        odds: Option<OddsPair>,
        prior: Option<&SolveResult>,
    ) -> LegSolve {
        let (odds, prior) = match (odds, prior) {
            (Some(odds), Some(prior)) => (odds, prior),
            (odds, prior) => {
                debug!(
                    %leg,
                    odds_valid = odds.is_some(),
                    has_prior = prior.is_some(),
                    "Leg edit cannot be solved"
                );
                return LegSolve::Degraded;
            }
        };

        let other = leg.other();
        let ratio = prior.ratio(leg);
        if !(ratio.is_finite() && ratio > 0.0) {
            warn!(%leg, ratio, "Unusable split ratio on prior result");
            return LegSolve::Degraded;
        }

        let total_stake = new_value / ratio;
        if self.is_effectively_zero(total_stake) {
            debug!(%leg, total_stake, "Leg edit leaves an empty position");
            return LegSolve::Degraded;
        }
        let other_stake = total_stake * prior.ratio(other);

        let (stake1, stake2) = match leg {
            Leg::One => (new_value, other_stake),
            Leg::Two => (other_stake, new_value),
        };
        let payout1 = stake1 * odds.odd1;
        let payout2 = stake2 * odds.odd2;
        let reference_payout = match leg {
            Leg::One => payout1,
            Leg::Two => payout2,
        };
        let profit = reference_payout - total_stake;

        let result = SolveResult {
            stake1,
            stake2,
            payout1,
            payout2,
            profit,
            profit_percentage: self.percentage(profit, total_stake),
            ratio1: prior.ratio1,
            ratio2: prior.ratio2,
        };

        debug!(%leg, new_value, total_stake, other_stake, profit, "Solved from leg stake");
        LegSolve::Rescaled {
            result,
            total_stake,
            other_stake,
        }
    }
}

/// [`Solver::solve_from_total`] with default settings
pub fn solve_from_total(odds: OddsPair, total_stake: f64) -> Result<SolveResult> {
    Solver::default().solve_from_total(odds, total_stake)
}

/// [`Solver::solve_from_leg`] with default settings
pub fn solve_from_leg(
    leg: Leg,
    new_value: f64,
    odds: Option<OddsPair>,
    prior: Option<&SolveResult>,
) -> LegSolve {
    Solver::default().solve_from_leg(leg, new_value, odds, prior)
}
