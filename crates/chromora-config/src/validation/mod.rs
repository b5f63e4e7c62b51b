//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod defaults;
mod harmony;
mod helpers;


use crate::schema::ChromoraConfig;
use chromora_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ChromoraConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    defaults::validate_defaults(&mut errors, config);
    harmony::validate_harmony(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
