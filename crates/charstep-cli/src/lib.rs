//! Shared plumbing for the `range-printer` and `echo-calc` binaries.
//!
//! Each binary parses its (empty) command line, calls [`init`], and hands the
//! resulting configuration to its command.

pub mod commands;
pub mod logging;
pub mod style;

use charstep_config::{CharstepConfig, ConfigLoader};
use tracing::warn;

/// Installs logging, loads configuration and applies the colour settings.
pub fn init() -> CharstepConfig {
    logging::init();

    let config = load_config(ConfigLoader::new());
    style::configure(&config.output);

    config
}

/// Loads configuration, falling back to the built-in defaults when any
/// source is unreadable or invalid.
pub fn load_config(loader: ConfigLoader) -> CharstepConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            warn!("unable to load config, using defaults: {e:#}");
            CharstepConfig::default()
        }
    }
}
