//! Integration tests for configuration loading
//!
//! Each test writes its own TOML file under the system temp directory.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use surebet_calculator::config::{load_config, OutputFormat, SolverSettings};
use surebet_calculator::{CalcError, CalculatorEvent, CalculatorState};

fn write_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "surebet_{}_{}.toml",
        name,
        std::process::id()
    ));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test_log::test]
fn test_missing_file_uses_defaults() {
    let config = load_config(Some("/definitely/not/here/surebet.toml")).unwrap();
    assert_eq!(config.solver, SolverSettings::default());
    assert_eq!(config.settings.output, OutputFormat::Text);
}

#[test_log::test]
fn test_file_overrides_defaults() {
    let path = write_config(
        "overrides",
        r#"
[solver]
zero_stake_epsilon = 0.5
amount_decimals = 3

[settings]
log_level = "debug"
output = "json"
"#,
    );

    let config = load_config(path.to_str()).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.solver.zero_stake_epsilon, 0.5);
    assert_eq!(config.solver.amount_decimals, 3);
    assert_eq!(config.solver.percentage_decimals, 2);
    assert_eq!(config.settings.log_level, "debug");
    assert_eq!(config.settings.output, OutputFormat::Json);
}

#[test_log::test]
fn test_invalid_file_values_are_rejected() {
    let path = write_config(
        "invalid",
        r#"
[solver]
zero_stake_epsilon = -1.0
"#,
    );

    let result = load_config(path.to_str());
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(CalcError::Configuration(_))));
}

#[test_log::test]
fn test_loaded_settings_drive_the_calculator() {
    let path = write_config(
        "drive",
        r#"
[solver]
zero_stake_epsilon = 5.0
amount_decimals = 1
"#,
    );
    let config = load_config(path.to_str()).unwrap();
    fs::remove_file(&path).ok();

    let state = CalculatorState::with_inputs(config.solver, "2", "2", "4")
        .apply(CalculatorEvent::Calculate);
    assert!(!state.is_calculated());

    let state = state.apply(CalculatorEvent::EditTotalStake("10".into()));
    assert!(!state.is_calculated());

    let state = state
        .apply(CalculatorEvent::Calculate)
        .apply(CalculatorEvent::EditStake(surebet_calculator::Leg::One, "6".into()));
    assert!(state.is_calculated());
    assert_eq!(state.total_stake, "12.0");
}
