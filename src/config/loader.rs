//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;
use tracing::{debug, info};

use super::types::AppConfig;
use crate::common::errors::Result;

/// Prefix for environment overrides, e.g. `SUREBET__SOLVER__AMOUNT_DECIMALS`
pub const ENV_PREFIX: &str = "SUREBET";

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with SUREBET)
/// 2. Configuration file (TOML format)
/// 3. Default values
///
/// A missing file is not an error; the result is validated before returning.
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            info!("Loading configuration from {}", path);
            builder = builder.add_source(File::with_name(path).required(false));
        } else {
            debug!("Configuration file {} not found, using defaults", path);
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config: AppConfig = builder.build()?.try_deserialize()?;
    config.validate()?;

    debug!(?config, "Configuration loaded");
    Ok(config)
}
