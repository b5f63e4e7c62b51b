//! Human-facing encodings of a color.

use chromora_common::{Color, ColorError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{names, space};

/// A color expanded into every string form the UI can copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorInfo {
    pub hex: String,
    pub rgb: String,
    pub rgba: String,
    pub hsl: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ColorInfo {
    /// The encoding for a given format.
    pub fn get(&self, format: ColorFormat) -> &str {
        match format {
            ColorFormat::Hex => &self.hex,
            ColorFormat::Rgb => &self.rgb,
            ColorFormat::Rgba => &self.rgba,
            ColorFormat::Hsl => &self.hsl,
        }
    }
}

/// Describe a color. Alpha is not tracked; `rgba` always reports `1`.
pub fn describe(color: Color) -> ColorInfo {
    let color = color.opaque();
    ColorInfo {
        hex: color.to_hex(),
        rgb: color.to_rgb_string(),
        rgba: color.to_rgba_string(),
        hsl: hsl_string(color),
        name: names::name_of(color).map(str::to_string),
    }
}

fn hsl_string(color: Color) -> String {
    let hsl = space::to_hsl(color);
    let h = (space::hsl_hue(&hsl).round() as u32) % 360;
    let s = (hsl.saturation * 100.0).round() as u32;
    let l = (hsl.lightness * 100.0).round() as u32;
    format!("hsl({h}, {s}%, {l}%)")
}

/// Black or white, whichever reads better on top of `color`.
pub fn contrast_color(color: Color) -> Color {
    if space::relative_luminance(color) > 0.5 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

// =============================================================================
// FORMATS
// =============================================================================

/// One of the four string encodings in [`ColorInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Rgba,
    Hsl,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 4] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Rgba,
        ColorFormat::Hsl,
    ];

    /// The format after this one, cycling `hex -> rgb -> rgba -> hsl -> hex`.
    pub fn next(self) -> Self {
        match self {
            ColorFormat::Hex => ColorFormat::Rgb,
            ColorFormat::Rgb => ColorFormat::Rgba,
            ColorFormat::Rgba => ColorFormat::Hsl,
            ColorFormat::Hsl => ColorFormat::Hex,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
            ColorFormat::Hsl => "hsl",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorFormat::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::InvalidColorInput(format!("unknown color format: {s}")))
    }
}
