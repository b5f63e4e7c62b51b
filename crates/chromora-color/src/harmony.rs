//! Harmonic palette generation.
//!
//! Six classical schemes, five colors each, derived from one base color.
//! Hue offsets are applied in HSL; lightness and saturation steps go
//! through Lab/LCh (see [`ColorAdjust`]).

use chromora_common::{Color, ColorError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::adjust::ColorAdjust;
use crate::scale;

/// Colors per palette as generated, before any resizing.
pub const PALETTE_SIZE: usize = 5;

// =============================================================================
// PALETTE KINDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaletteKind {
    Monochromatic,
    Analogous,
    Complementary,
    Triadic,
    SplitComplementary,
    Tetradic,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 6] = [
        PaletteKind::Monochromatic,
        PaletteKind::Analogous,
        PaletteKind::Complementary,
        PaletteKind::Triadic,
        PaletteKind::SplitComplementary,
        PaletteKind::Tetradic,
    ];

    /// Wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            PaletteKind::Monochromatic => "monochromatic",
            PaletteKind::Analogous => "analogous",
            PaletteKind::Complementary => "complementary",
            PaletteKind::Triadic => "triadic",
            PaletteKind::SplitComplementary => "splitComplementary",
            PaletteKind::Tetradic => "tetradic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaletteKind::Monochromatic => "Monochromatic",
            PaletteKind::Analogous => "Analogous",
            PaletteKind::Complementary => "Complementary",
            PaletteKind::Triadic => "Triadic",
            PaletteKind::SplitComplementary => "Split complementary",
            PaletteKind::Tetradic => "Tetradic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PaletteKind::Monochromatic => "Tints and shades of the base hue",
            PaletteKind::Analogous => "Neighbouring hues on the color wheel",
            PaletteKind::Complementary => "Base and its opposite hue",
            PaletteKind::Triadic => "Three hues evenly spaced around the wheel",
            PaletteKind::SplitComplementary => "Base plus the two hues beside its complement",
            PaletteKind::Tetradic => "Four hues forming a rectangle on the wheel",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteKind {
    type Err = ColorError;

    /// Accepts the wire name, case-insensitively, with `-`/`_` ignored
    /// (`split-complementary`, `split_complementary`, `splitComplementary`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        PaletteKind::ALL
            .into_iter()
            .find(|k| k.as_str().to_lowercase() == folded)
            .ok_or_else(|| ColorError::InvalidColorInput(format!("unknown palette kind: {s}")))
    }
}

// =============================================================================
// STEPS
// =============================================================================

/// Step magnitudes for the lightness and saturation transforms.
///
/// Amounts are in [`crate::adjust::LAB_STEP`] units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonySteps {
    pub mono_light_brighten: f64,
    pub mono_light_saturate: f64,
    pub mono_soft_brighten: f64,
    pub mono_soft_saturate: f64,
    pub mono_shade_darken: f64,
    pub mono_shade_desaturate: f64,
    pub mono_deep_darken: f64,
    pub mono_deep_desaturate: f64,
    /// Brighten/darken used by complementary, triadic and split-complementary.
    pub accent_brighten: f64,
    pub accent_darken: f64,
    pub tetradic_brighten: f64,
}

impl Default for HarmonySteps {
    fn default() -> Self {
        Self {
            mono_light_brighten: 2.5,
            mono_light_saturate: 0.5,
            mono_soft_brighten: 1.5,
            mono_soft_saturate: 0.3,
            mono_shade_darken: 1.0,
            mono_shade_desaturate: 0.2,
            mono_deep_darken: 2.0,
            mono_deep_desaturate: 0.4,
            accent_brighten: 1.0,
            accent_darken: 1.0,
            tetradic_brighten: 1.5,
        }
    }
}

// =============================================================================
// PALETTES
// =============================================================================

/// One named palette and the base it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub kind: PaletteKind,
    pub base: Color,
    pub colors: Vec<Color>,
}

/// All six harmonic palettes for one base color.
///
/// Serializes as `{ "monochromatic": ["#..", ..], "analogous": [..], .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteSet {
    #[serde(skip)]
    pub base: Color,
    pub monochromatic: Vec<Color>,
    pub analogous: Vec<Color>,
    pub complementary: Vec<Color>,
    pub triadic: Vec<Color>,
    pub split_complementary: Vec<Color>,
    pub tetradic: Vec<Color>,
}

impl PaletteSet {
    pub fn get(&self, kind: PaletteKind) -> &[Color] {
        match kind {
            PaletteKind::Monochromatic => &self.monochromatic,
            PaletteKind::Analogous => &self.analogous,
            PaletteKind::Complementary => &self.complementary,
            PaletteKind::Triadic => &self.triadic,
            PaletteKind::SplitComplementary => &self.split_complementary,
            PaletteKind::Tetradic => &self.tetradic,
        }
    }

    /// Palettes in their fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteKind, &[Color])> + '_ {
        PaletteKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    pub fn palette(&self, kind: PaletteKind) -> Palette {
        Palette {
            kind,
            base: self.base,
            colors: self.get(kind).to_vec(),
        }
    }

    /// Every palette resampled to `count` colors.
    pub fn resized(&self, count: usize) -> PaletteSet {
        PaletteSet {
            base: self.base,
            monochromatic: scale::resize(&self.monochromatic, count),
            analogous: scale::resize(&self.analogous, count),
            complementary: scale::resize(&self.complementary, count),
            triadic: scale::resize(&self.triadic, count),
            split_complementary: scale::resize(&self.split_complementary, count),
            tetradic: scale::resize(&self.tetradic, count),
        }
    }
}

/// Derive all six palettes from `base`.
pub fn generate(base: Color, steps: &HarmonySteps) -> PaletteSet {
    PaletteSet {
        base,
        monochromatic: monochromatic(base, steps),
        analogous: analogous(base),
        complementary: complementary(base, steps),
        triadic: triadic(base, steps),
        split_complementary: split_complementary(base, steps),
        tetradic: tetradic(base, steps),
    }
}

fn monochromatic(base: Color, steps: &HarmonySteps) -> Vec<Color> {
    vec![
        base.brighten(steps.mono_light_brighten)
            .saturate(steps.mono_light_saturate),
        base.brighten(steps.mono_soft_brighten)
            .saturate(steps.mono_soft_saturate),
        base,
        base.darken(steps.mono_shade_darken)
            .desaturate(steps.mono_shade_desaturate),
        base.darken(steps.mono_deep_darken)
            .desaturate(steps.mono_deep_desaturate),
    ]
}

fn analogous(base: Color) -> Vec<Color> {
    vec![
        base.rotate_hue(-45.0),
        base.rotate_hue(-22.5),
        base,
        base.rotate_hue(22.5),
        base.rotate_hue(45.0),
    ]
}

fn complementary(base: Color, steps: &HarmonySteps) -> Vec<Color> {
    let complement = base.rotate_hue(180.0);
    vec![
        base,
        complement,
        base.brighten(steps.accent_brighten),
        complement.brighten(steps.accent_brighten),
        base.darken(steps.accent_darken),
    ]
}

fn triadic(base: Color, steps: &HarmonySteps) -> Vec<Color> {
    let second = base.rotate_hue(120.0);
    vec![
        base,
        second,
        base.rotate_hue(240.0),
        base.brighten(steps.accent_brighten),
        second.brighten(steps.accent_brighten),
    ]
}

fn split_complementary(base: Color, steps: &HarmonySteps) -> Vec<Color> {
    vec![
        base,
        base.rotate_hue(150.0),
        base.rotate_hue(210.0),
        base.brighten(steps.accent_brighten),
        base.darken(steps.accent_darken),
    ]
}

fn tetradic(base: Color, steps: &HarmonySteps) -> Vec<Color> {
    vec![
        base,
        base.rotate_hue(90.0),
        base.rotate_hue(180.0),
        base.rotate_hue(270.0),
        base.brighten(steps.tetradic_brighten),
    ]
}
