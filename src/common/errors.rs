//! Error types for the calculator

use thiserror::Error;

use crate::calculator::ErrorSet;
use crate::common::types::Field;

/// Result type alias using our CalcError
pub type Result<T> = std::result::Result<T, CalcError>;

/// Per-field input validation failure
///
/// The `Display` output is the exact message shown next to the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Text could not be read as a finite decimal number
    #[error("Please enter a valid number for {}", .0.parse_label())]
    Unparseable(Field),

    /// Number parsed but is zero or negative
    #[error("Enter valid {} (> 0)", .0.range_label())]
    NonPositive(Field),
}

impl InputError {
    /// Field the error belongs to
    pub fn field(&self) -> Field {
        match self {
            InputError::Unparseable(field) | InputError::NonPositive(field) => *field,
        }
    }
}

/// Main error type for calculator operations
#[derive(Error, Debug)]
pub enum CalcError {
    /// One or more primary inputs failed validation
    #[error("Invalid input: {0}")]
    Validation(ErrorSet),

    /// Total stake at or below the effective-zero threshold
    #[error("Stake {0} is effectively zero")]
    DegenerateStake(f64),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for CalcError {
    fn from(err: config::ConfigError) -> Self {
        CalcError::Configuration(err.to_string())
    }
}
