//! Color-space projections of [`Color`], backed by the `palette` crate.
//!
//! HSL drives hue rotation, CIE Lab drives lightness steps, and CIE LCh
//! drives saturation steps and scale interpolation. Lab and LCh use the D65
//! white point. Conversions back to [`Color`] clamp out-of-gamut channels.

use chromora_common::Color;
use palette::convert::FromColorUnclamped;
use palette::encoding;
use palette::white_point::D65;
use palette::{FromColor, Srgb, Xyz};

pub type Hsl = palette::Hsl<encoding::Srgb, f64>;
pub type Lab = palette::Lab<D65, f64>;
pub type Lch = palette::Lch<D65, f64>;

/// Below this chroma a color is treated as achromatic and has no hue.
const ACHROMATIC_CHROMA: f64 = 1e-4;

/// Wrap any hue into `[0, 360)`.
pub fn wrap_hue(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

fn to_srgb(color: Color) -> Srgb<f64> {
    Srgb::new(color.r, color.g, color.b).into_format()
}

fn from_srgb(rgb: Srgb<f64>) -> Color {
    let rgb: Srgb<u8> = rgb.into_format();
    Color::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// =============================================================================
// HSL
// =============================================================================

/// Build an HSL value. `h` in degrees (wrapped), `s` and `l` in `[0, 1]`.
pub fn hsl(h: f64, s: f64, l: f64) -> Hsl {
    Hsl::new(wrap_hue(h), s, l)
}

pub fn to_hsl(color: Color) -> Hsl {
    Hsl::from_color_unclamped(to_srgb(color))
}

pub fn from_hsl(hsl: Hsl) -> Color {
    from_srgb(Srgb::from_color(hsl))
}

/// HSL hue in `[0, 360)`, `0.0` for achromatic colors.
pub fn hsl_hue(hsl: &Hsl) -> f64 {
    if hsl.saturation <= 0.0 {
        0.0
    } else {
        wrap_hue(hsl.hue.into_positive_degrees())
    }
}

// =============================================================================
// LAB / LCH
// =============================================================================

pub fn to_lab(color: Color) -> Lab {
    Lab::from_color_unclamped(to_srgb(color))
}

pub fn from_lab(lab: Lab) -> Color {
    from_srgb(Srgb::from_color(lab))
}

pub fn to_lch(color: Color) -> Lch {
    Lch::from_color_unclamped(to_lab(color))
}

pub fn from_lch(lch: Lch) -> Color {
    from_srgb(Srgb::from_color(lch))
}

pub fn is_achromatic(lch: &Lch) -> bool {
    lch.chroma < ACHROMATIC_CHROMA
}

/// LCh hue in `[0, 360)`, or `None` for achromatic colors.
pub fn lch_hue(lch: &Lch) -> Option<f64> {
    (!is_achromatic(lch)).then(|| wrap_hue(lch.hue.into_positive_degrees()))
}

/// WCAG 2 relative luminance in `[0, 1]`: the Y of linear-light sRGB.
pub fn relative_luminance(color: Color) -> f64 {
    Xyz::<D65, f64>::from_color_unclamped(to_srgb(color)).y
}
