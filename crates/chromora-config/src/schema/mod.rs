//! Configuration schema types for Chromora.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod defaults;
mod system;

pub use defaults::*;
pub use system::*;

pub use chromora_color::HarmonySteps;

use serde::{Deserialize, Serialize};

/// Root configuration for Chromora.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromoraConfig {
    pub defaults: DefaultsConfig,
    /// Step magnitudes for the palette generator.
    pub harmony: HarmonySteps,
    pub logging: LoggingConfig,
}
