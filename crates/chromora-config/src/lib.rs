//! Chromora configuration system.
//!
//! TOML-based configuration for the command defaults, the palette
//! generator's step magnitudes and logging. All sections use serde
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chromora_config::{load_config, set_value, ConfigStore};
//!
//! let config = load_config().expect("failed to load config");
//! let config = set_value(&config, "defaults.count", "8").expect("invalid value");
//! ConfigStore::platform_default()
//!     .and_then(|store| store.save(&config))
//!     .expect("failed to save config");
//! ```

pub mod edit;
pub mod schema;
pub mod store;
pub mod validation;

pub use edit::set_value;
pub use schema::{ChromoraConfig, LogLevel};
pub use store::{ConfigStore, InitOutcome};

use chromora_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<ChromoraConfig, ConfigError> {
    ConfigStore::platform_default()?.load_or_init()
}

/// Load config from `path` when given, otherwise from the default path.
///
/// An explicit path is never created; a missing file is
/// [`ConfigError::FileNotFound`].
pub fn load_config_from(path: Option<&Path>) -> Result<ChromoraConfig, ConfigError> {
    match path {
        Some(path) => ConfigStore::new(path).load(),
        None => load_config(),
    }
}
