//! Results summary for display
//!
//! Numbers only; currency symbols and layout belong to the front end.

use serde::Serialize;

use super::state::CalculatorState;
use crate::common::numeric::{format_fixed, parse_decimal_input, round_dp};
use crate::common::types::{Leg, OddsPair};

/// Whether the position makes or loses money
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitTone {
    Gain,
    Loss,
}

impl ProfitTone {
    pub fn from_profit(profit: f64) -> Self {
        if profit > 0.0 {
            ProfitTone::Gain
        } else {
            ProfitTone::Loss
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegSummary {
    pub leg: Leg,
    pub odds: f64,
    pub stake: f64,
    pub payout: f64,
}

/// Snapshot of a solved calculator, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub legs: [LegSummary; 2],
    pub total_stake: f64,
    /// Total stake plus the rounded profit
    pub total_payout: f64,
    pub profit: f64,
    /// Return on investment in percent
    pub roi: f64,
    pub tone: ProfitTone,
    /// 1/odd1 + 1/odd2
    pub implied_probability_sum: f64,
    pub is_arbitrage: bool,
    #[serde(skip)]
    decimals: u32,
}

impl Summary {
    /// Build from a state; `None` unless the state holds a result and valid odds
    pub fn from_state(state: &CalculatorState) -> Option<Self> {
        let result = state.result.as_ref()?;
        let odds: OddsPair = state.odds()?;
        let decimals = state.solver().settings().amount_decimals;

        let total_stake =
            parse_decimal_input(&state.total_stake).unwrap_or_else(|| result.total_stake());
        let total_payout = total_stake + round_dp(result.profit, decimals);

        let leg = |leg: Leg| LegSummary {
            leg,
            odds: odds.get(leg),
            stake: result.stake(leg),
            payout: result.payout(leg),
        };

        Some(Self {
            legs: [leg(Leg::One), leg(Leg::Two)],
            total_stake,
            total_payout,
            profit: result.profit,
            roi: result.profit_percentage,
            tone: ProfitTone::from_profit(result.profit),
            implied_probability_sum: odds.implied_probability_sum(),
            is_arbitrage: odds.is_arbitrage(),
            decimals,
        })
    }

    fn amount(&self, value: f64) -> String {
        format_fixed(value, self.decimals)
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for leg in &self.legs {
            writeln!(
                f,
                "Stake {} @ {} : {} (payout {})",
                leg.leg,
                leg.odds,
                self.amount(leg.stake),
                self.amount(leg.payout)
            )?;
        }
        writeln!(f, "Total Stake : {}", self.amount(self.total_stake))?;
        writeln!(f, "Total Payout : {}", self.amount(self.total_payout))?;
        writeln!(f, "Total Profit : {}", self.amount(self.profit))?;
        write!(f, "ROI (Return on Investment): {}%", self.roi)
    }
}
