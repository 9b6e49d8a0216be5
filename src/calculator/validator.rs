//! Input validation for the Calculate action
//!
//! All three primary fields are re-checked together on every call, so the
//! returned [`ErrorSet`] fully replaces any previous one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::errors::InputError;
use crate::common::numeric::parse_decimal_input;
use crate::common::types::{Field, OddsPair};

/// Per-field error messages; an empty string means "no error"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSet {
    pub odd1_error: String,
    pub odd2_error: String,
    pub total_stake_error: String,
}

impl ErrorSet {
    /// Message for a field ("" when the field is fine)
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Odd1 => &self.odd1_error,
            Field::Odd2 => &self.odd2_error,
            Field::TotalStake => &self.total_stake_error,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Odd1 => &mut self.odd1_error,
            Field::Odd2 => &mut self.odd2_error,
            Field::TotalStake => &mut self.total_stake_error,
        }
    }

    /// Store the outcome of checking one field
    pub fn record(&mut self, field: Field, error: Option<InputError>) {
        *self.slot(field) = error.map(|e| e.to_string()).unwrap_or_default();
    }

    pub fn clear(&mut self, field: Field) {
        self.slot(field).clear();
    }

    pub fn has_error(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| !self.has_error(*f))
    }
}

impl std::fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = Field::ALL
            .iter()
            .map(|field| self.get(*field))
            .filter(|m| !m.is_empty())
            .collect();
        f.write_str(&messages.join("; "))
    }
}

/// Parsed inputs, present only when every field passed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInputs {
    pub odds: OddsPair,
    pub total_stake: f64,
}

/// Outcome of [`validate`]
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub is_valid: bool,
    pub errors: ErrorSet,
    pub inputs: Option<ValidatedInputs>,
}

/// Check a single primary field: must parse and be strictly positive
///
/// Odds must also have a finite reciprocal, which rules out subnormal values
/// such as `1e-310`.
pub fn check_field(field: Field, raw: &str) -> Result<f64, InputError> {
    let value = parse_decimal_input(raw).ok_or(InputError::Unparseable(field))?;
    if value <= 0.0 {
        return Err(InputError::NonPositive(field));
    }
    if field.is_odd() && !OddsPair::is_usable_odd(value) {
        return Err(InputError::NonPositive(field));
    }
    Ok(value)
}

/// Validate odd1, odd2 and total stake as typed
pub fn validate(odd1_raw: &str, odd2_raw: &str, total_stake_raw: &str) -> Validation {
    let odd1 = check_field(Field::Odd1, odd1_raw);
    let odd2 = check_field(Field::Odd2, odd2_raw);
    let total_stake = check_field(Field::TotalStake, total_stake_raw);

    let mut errors = ErrorSet::default();
    errors.record(Field::Odd1, odd1.err());
    errors.record(Field::Odd2, odd2.err());
    errors.record(Field::TotalStake, total_stake.err());

    let inputs = match (odd1, odd2, total_stake) {
        (Ok(odd1), Ok(odd2), Ok(total_stake)) => {
            OddsPair::new(odd1, odd2).map(|odds| ValidatedInputs { odds, total_stake })
        }
        _ => None,
    };
    let is_valid = inputs.is_some();

    debug!(is_valid, %errors, "Validated inputs");

    Validation {
        is_valid,
        errors,
        inputs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd1_messages() {
        assert_eq!(
            validate("abc", "2", "100").errors.odd1_error,
            "Please enter a valid number for Odd 1"
        );
        assert_eq!(
            validate("-1", "2", "100").errors.odd1_error,
            "Enter valid Odd 1 (> 0)"
        );
        assert_eq!(validate("1.8", "2", "100").errors.odd1_error, "");
    }

    #[test]
    fn test_trailing_text_after_number_is_ignored() {
        let v = validate("1.8x", "2", "100 EUR");
        assert!(v.is_valid);
        assert!(v.errors.is_empty());
        let inputs = v.inputs.unwrap();
        assert_eq!(inputs.odds.odd1, 1.8);
        assert_eq!(inputs.total_stake, 100.0);
    }

    #[test]
    fn test_subnormal_odds_are_out_of_range() {
        let v = validate("1e-310", "2", "100");
        assert!(!v.is_valid);
        assert!(v.inputs.is_none());
        assert_eq!(v.errors.odd1_error, "Enter valid Odd 1 (> 0)");
        assert_eq!(
            check_field(Field::Odd2, "5e-324"),
            Err(InputError::NonPositive(Field::Odd2))
        );
        // Tiny stakes are the solver's concern, not the validator's
        assert!(check_field(Field::TotalStake, "1e-310").is_ok());
    }

    #[test]
    fn test_all_valid() {
        let v = validate("1.80", "2.10", "100");
        assert!(v.is_valid);
        assert!(v.errors.is_empty());
        let inputs = v.inputs.unwrap();
        assert_eq!(inputs.odds.odd1, 1.8);
        assert_eq!(inputs.odds.odd2, 2.1);
        assert_eq!(inputs.total_stake, 100.0);
    }

    #[test]
    fn test_each_field_checked_independently() {
        let v = validate("", "0", "x");
        assert!(!v.is_valid);
        assert!(v.inputs.is_none());
        assert_eq!(v.errors.odd1_error, "Please enter a valid number for Odd 1");
        assert_eq!(v.errors.odd2_error, "Enter valid Odd 2 (> 0)");
        assert_eq!(
            v.errors.total_stake_error,
            "Please enter a valid number for Stake"
        );
    }

    #[test]
    fn test_single_bad_field_invalidates() {
        let v = validate("2", "2", "-5");
        assert!(!v.is_valid);
        assert!(v.errors.has_error(Field::TotalStake));
        assert!(!v.errors.has_error(Field::Odd1));
        assert_eq!(v.errors.total_stake_error, "Enter valid Total Stake (> 0)");
    }

    #[test]
    fn test_non_finite_is_unparseable() {
        let v = validate("inf", "2", "100");
        assert_eq!(v.errors.odd1_error, "Please enter a valid number for Odd 1");
    }

    #[test]
    fn test_check_field() {
        assert_eq!(check_field(Field::Odd2, " 3.5 "), Ok(3.5));
        assert_eq!(
            check_field(Field::Odd2, "0"),
            Err(InputError::NonPositive(Field::Odd2))
        );
        assert_eq!(
            check_field(Field::TotalStake, "ten"),
            Err(InputError::Unparseable(Field::TotalStake))
        );
    }

    #[test]
    fn test_error_set_display_and_clear() {
        let mut errors = validate("abc", "-2", "100").errors;
        assert_eq!(
            errors.to_string(),
            "Please enter a valid number for Odd 1; Enter valid Odd 2 (> 0)"
        );
        errors.clear(Field::Odd1);
        assert_eq!(errors.to_string(), "Enter valid Odd 2 (> 0)");
        errors.clear(Field::Odd2);
        assert!(errors.is_empty());
    }
}
