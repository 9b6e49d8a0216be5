//! SureBet Calculator - Main Entry Point
//!
//! Computes the equal-payout stake split for a two-outcome bet from the
//! command line.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use surebet_calculator::common::numeric::parse_decimal_input;
use surebet_calculator::config::{load_config, OutputFormat};
use surebet_calculator::{CalcError, CalculatorEvent, CalculatorState, Leg, Summary};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Decimal odds of outcome 1
    #[arg(long, allow_hyphen_values = true)]
    odd1: String,

    /// Decimal odds of outcome 2
    #[arg(long, allow_hyphen_values = true)]
    odd2: String,

    /// Capital to split across both outcomes
    #[arg(long, allow_hyphen_values = true)]
    total_stake: String,

    /// Override stake 1 after solving; the position is rescaled around it
    #[arg(long, allow_hyphen_values = true, conflicts_with = "stake2")]
    stake1: Option<String>,

    /// Override stake 2 after solving; the position is rescaled around it
    #[arg(long, allow_hyphen_values = true)]
    stake2: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "surebet.toml", env = "SUREBET_CONFIG")]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn init_logging(level: Level, format: OutputFormat) -> Result<()> {
    // stdout carries the result, logs go to stderr
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    match format {
        OutputFormat::Text => tracing::subscriber::set_global_default(builder.finish())?,
        OutputFormat::Json => {
            tracing::subscriber::set_global_default(builder.json().finish())?
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    // Log level and format come from the config, so the subscriber is
    // installed after loading it
    let config = load_config(Some(&args.config))?;

    let level = parse_level(
        args.log_level
            .as_deref()
            .unwrap_or(&config.settings.log_level),
    );
    init_logging(level, config.settings.log_format)?;

    info!("Starting SureBet calculator");
    info!("Configuration file: {}", args.config);
    debug!(?config, "Effective configuration");
    debug!(?args, "Parsed arguments");

    let mut events = vec![CalculatorEvent::Calculate];
    if let Some(stake) = args.stake1 {
        events.push(CalculatorEvent::EditStake(Leg::One, stake));
    } else if let Some(stake) = args.stake2 {
        events.push(CalculatorEvent::EditStake(Leg::Two, stake));
    }

    let state = CalculatorState::with_inputs(config.solver, args.odd1, args.odd2, args.total_stake)
        .apply_all(events);

    let Some(summary) = Summary::from_state(&state) else {
        if !state.errors.is_empty() {
            return Err(CalcError::Validation(state.errors).into());
        }
        let stake = parse_decimal_input(&state.total_stake).unwrap_or(0.0);
        return Err(CalcError::DegenerateStake(stake).into());
    };

    let output = if args.json {
        OutputFormat::Json
    } else {
        config.settings.output
    };
    match output {
        OutputFormat::Text => println!("{}", summary),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&summary).map_err(CalcError::from)?
        ),
    }

    info!(profit = summary.profit, roi = summary.roi, "Calculation complete");
    Ok(())
}
