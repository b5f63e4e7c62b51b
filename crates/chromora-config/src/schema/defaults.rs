//! Defaults applied when a command omits an argument.

use chromora_color::{ColorFormat, PALETTE_SIZE};
use serde::{Deserialize, Serialize};

/// Fallback base color, palette size and output format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Any accepted color input (valid: parses).
    pub base_color: String,
    /// Colors per palette (valid range: 1-20).
    pub count: u32,
    pub format: ColorFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            base_color: "#a855f7".into(),
            count: PALETTE_SIZE as u32,
            format: ColorFormat::Hex,
        }
    }
}
