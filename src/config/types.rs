//! Configuration types

use serde::{Deserialize, Serialize};

use crate::common::errors::{CalcError, Result};

/// Upper bound for any configured number of decimal places
pub const MAX_DECIMALS: u32 = 10;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Solver tuning
    #[serde(default)]
    pub solver: SolverSettings,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

impl AppConfig {
    /// Reject settings the solver cannot work with
    pub fn validate(&self) -> Result<()> {
        let eps = self.solver.zero_stake_epsilon;
        if !eps.is_finite() || eps < 0.0 {
            return Err(CalcError::Configuration(format!(
                "solver.zero_stake_epsilon must be a finite number >= 0, got {}",
                eps
            )));
        }
        for (name, decimals) in [
            ("solver.percentage_decimals", self.solver.percentage_decimals),
            ("solver.amount_decimals", self.solver.amount_decimals),
        ] {
            if decimals > MAX_DECIMALS {
                return Err(CalcError::Configuration(format!(
                    "{} must be at most {}, got {}",
                    name, MAX_DECIMALS, decimals
                )));
            }
        }
        Ok(())
    }
}

/// Solver tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Total stakes at or below this are treated as zero and not solved
    #[serde(default = "default_zero_stake_epsilon")]
    pub zero_stake_epsilon: f64,
    /// Decimal places kept in the stored profit percentage
    #[serde(default = "default_decimals")]
    pub percentage_decimals: u32,
    /// Decimal places used when rendering stake and payout amounts
    #[serde(default = "default_decimals")]
    pub amount_decimals: u32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            zero_stake_epsilon: default_zero_stake_epsilon(),
            percentage_decimals: default_decimals(),
            amount_decimals: default_decimals(),
        }
    }
}

fn default_zero_stake_epsilon() -> f64 {
    1e-6
}

fn default_decimals() -> u32 {
    2
}

/// Output encoding for logs and results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log line encoding
    #[serde(default)]
    pub log_format: OutputFormat,
    /// Result encoding on stdout
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: OutputFormat::default(),
            output: OutputFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.solver.zero_stake_epsilon, 1e-6);
        assert_eq!(config.solver.percentage_decimals, 2);
        assert_eq!(config.solver.amount_decimals, 2);
        assert_eq!(config.settings.log_level, "info");
        assert_eq!(config.settings.output, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_epsilon() {
        let mut config = AppConfig::default();
        config.solver.zero_stake_epsilon = -1.0;
        assert!(matches!(
            config.validate(),
            Err(CalcError::Configuration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_nan_epsilon() {
        let mut config = AppConfig::default();
        config.solver.zero_stake_epsilon = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_too_many_decimals() {
        let mut config = AppConfig::default();
        config.solver.amount_decimals = 11;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("solver.amount_decimals"));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"solver": {"percentage_decimals": 4}}"#).unwrap();
        assert_eq!(config.solver.percentage_decimals, 4);
        assert_eq!(config.solver.amount_decimals, 2);
        assert_eq!(config.settings, AppSettings::default());
    }
}
