//! Configuration management for the RAX credential store
//!
//! Values come from built-in defaults, an optional `config.toml`, and
//! `RAX_AUTH_*` environment variables, in increasing order of precedence.

use config::{Config, ConfigError, Environment, File};
use log::LevelFilter;
use serde::Deserialize;
use std::path::Path;

/// bcrypt rejects work factors outside this range
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const DEFAULT_LOG_LEVEL: &str = "info";

const DEFAULT_CONFIG_PATH: &str = "config";
const ENV_PREFIX: &str = "RAX_AUTH";

/// Credential store configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// bcrypt work factor used for new password hashes.
    /// Environment: RAX_AUTH_BCRYPT_COST
    pub bcrypt_cost: u32,

    /// Log level used when RUST_LOG is unset.
    /// Environment: RAX_AUTH_LOG_LEVEL
    pub log_level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from ./config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from the given file (extension optional, file optional)
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_string_lossy();

        let settings = Config::builder()
            .set_default("bcrypt_cost", i64::from(DEFAULT_BCRYPT_COST))?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(File::with_name(&path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::Message(format!(
                "bcrypt_cost must be between {} and {}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }

        self.level_filter()?;
        Ok(())
    }

    /// Parsed log level
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::Message(format!("Unknown log_level: {}", self.log_level)))
    }
}
