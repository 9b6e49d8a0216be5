//! Shared types used by the validator, solver and state machine

use serde::{Deserialize, Serialize};

use super::numeric::{format_fixed, parse_decimal_input};

/// One of the two outcomes of a sure bet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leg {
    One,
    Two,
}

impl Leg {
    /// The sibling leg
    pub fn other(self) -> Self {
        match self {
            Leg::One => Leg::Two,
            Leg::Two => Leg::One,
        }
    }
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Leg::One => write!(f, "1"),
            Leg::Two => write!(f, "2"),
        }
    }
}

/// Primary input field checked by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Odd1,
    Odd2,
    TotalStake,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Odd1, Field::Odd2, Field::TotalStake];

    /// The odds field of a leg
    pub fn odd(leg: Leg) -> Self {
        match leg {
            Leg::One => Field::Odd1,
            Leg::Two => Field::Odd2,
        }
    }

    pub fn is_odd(self) -> bool {
        matches!(self, Field::Odd1 | Field::Odd2)
    }

    /// Label used in "Please enter a valid number for ..."
    pub fn parse_label(self) -> &'static str {
        match self {
            Field::Odd1 => "Odd 1",
            Field::Odd2 => "Odd 2",
            Field::TotalStake => "Stake",
        }
    }

    /// Label used in "Enter valid ... (> 0)"
    pub fn range_label(self) -> &'static str {
        match self {
            Field::Odd1 => "Odd 1",
            Field::Odd2 => "Odd 2",
            Field::TotalStake => "Total Stake",
        }
    }
}

/// Content of a leg stake field
///
/// `Auto` means "not currently computable"; the presentation layer renders
/// it as a placeholder instead of a number.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum StakeField {
    #[default]
    Auto,
    /// Text exactly as the user typed it
    Entered(String),
    /// Amount derived by the solver
    Value(f64),
}

impl StakeField {
    pub const PLACEHOLDER: &'static str = "Auto";

    pub fn is_auto(&self) -> bool {
        matches!(self, StakeField::Auto)
    }

    /// Numeric amount, if the field holds one
    pub fn amount(&self) -> Option<f64> {
        match self {
            StakeField::Auto => None,
            StakeField::Entered(text) => parse_decimal_input(text),
            StakeField::Value(value) => Some(*value),
        }
    }

    /// Text to show in the field, rendering solver amounts with `decimals`
    pub fn display_with(&self, decimals: u32) -> String {
        match self {
            StakeField::Auto => Self::PLACEHOLDER.to_string(),
            StakeField::Entered(text) => text.clone(),
            StakeField::Value(value) => format_fixed(*value, decimals),
        }
    }
}

/// Fixed 2-decimal rendering; front ends honouring configured precision go
/// through [`StakeField::display_with`] instead
impl std::fmt::Display for StakeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_with(2))
    }
}

/// Validated pair of decimal odds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsPair {
    pub odd1: f64,
    pub odd2: f64,
}

impl OddsPair {
    /// Finite, strictly positive, and with a finite implied probability
    pub fn is_usable_odd(odd: f64) -> bool {
        odd.is_finite() && odd > 0.0 && (1.0 / odd).is_finite()
    }

    /// Returns None unless both odds pass [`OddsPair::is_usable_odd`]
    pub fn new(odd1: f64, odd2: f64) -> Option<Self> {
        if Self::is_usable_odd(odd1) && Self::is_usable_odd(odd2) {
            Some(Self { odd1, odd2 })
        } else {
            None
        }
    }

    /// Odds for a leg
    pub fn get(&self, leg: Leg) -> f64 {
        match leg {
            Leg::One => self.odd1,
            Leg::Two => self.odd2,
        }
    }

    /// Sum of implied probabilities, 1/odd1 + 1/odd2
    ///
    /// Below 1.0 the pair is a true arbitrage.
    pub fn implied_probability_sum(&self) -> f64 {
        1.0 / self.odd1 + 1.0 / self.odd2
    }

    pub fn is_arbitrage(&self) -> bool {
        self.implied_probability_sum() < 1.0
    }
}
