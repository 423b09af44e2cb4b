//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;
use log::LevelFilter;

/// Setup logging. `RUST_LOG` wins over `default_level` when set.
pub fn setup_logging(default_level: LevelFilter) {
    let env = Env::default().default_filter_or(default_level.as_str());

    // Ignore the error when a logger is already installed (tests, embedding apps)
    let _ = env_logger::Builder::from_env(env).try_init();
}
