//! Color input parsing.
//!
//! Accepts, in order of precedence:
//! - a CSS or Spanish color name (`dodgerblue`, `azul`)
//! - `#RGB` or `#RRGGBB`
//! - `rgb(r,g,b)` / `rgba(r,g,b,a)` with integer channels and `a` in 0.0-1.0
//! - `hsl(h,s%,l%)` / `hsla(h,s%,l%,a)` with `h` in `[0, 360)`
//!
//! Input is trimmed and lowercased first. Alpha is validated but discarded.

use chromora_common::{Color, ColorError};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::names;
use crate::space;

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
});

static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*([0-9]*\.?[0-9]+)\s*\)$",
    )
    .unwrap()
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsl\(\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)%\s*,\s*([0-9]*\.?[0-9]+)%\s*\)$",
    )
    .unwrap()
});

static HSLA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla\(\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)%\s*,\s*([0-9]*\.?[0-9]+)%\s*,\s*([0-9]*\.?[0-9]+)\s*\)$",
    )
    .unwrap()
});

/// Parse a free-form color string into a [`Color`].
///
/// Returns [`ColorError::InvalidColorInput`] when no grammar accepts the
/// input, including empty and whitespace-only strings.
pub fn parse(input: &str) -> Result<Color, ColorError> {
    let s = input.trim().to_lowercase();

    if s.is_empty() {
        return Err(reject(&s, "empty color string"));
    }

    if let Some(color) = names::lookup(&s) {
        return Ok(color);
    }

    if s.starts_with('#') {
        return parse_hex(&s).ok_or_else(|| reject(&s, "invalid hex color"));
    }

    if s.starts_with("rgb") {
        return parse_rgb(&s).ok_or_else(|| reject(&s, "invalid rgb color"));
    }

    if s.starts_with("hsl") {
        return parse_hsl(&s).ok_or_else(|| reject(&s, "invalid hsl color"));
    }

    Err(reject(&s, "unrecognized color format"))
}

/// Whether any grammar accepts `input`.
pub fn is_valid(input: &str) -> bool {
    parse(input).is_ok()
}

fn reject(input: &str, reason: &str) -> ColorError {
    debug!(input, reason, "color input rejected");
    if input.is_empty() {
        ColorError::InvalidColorInput(reason.to_string())
    } else {
        ColorError::InvalidColorInput(format!("{reason}: {input}"))
    }
}

/// Parse `#RGB` or `#RRGGBB`.
fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            // Expand #RGB to #RRGGBB
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Color::from_rgb(r * 17, g * 17, b * 17))
        }
        6 => Color::from_hex(hex),
        _ => None,
    }
}

/// Parse `rgb(r,g,b)` or `rgba(r,g,b,a)`.
fn parse_rgb(s: &str) -> Option<Color> {
    let caps = RGB_RE.captures(s).or_else(|| RGBA_RE.captures(s))?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;

    if let Some(alpha) = caps.get(4) {
        parse_alpha(alpha.as_str())?;
    }

    Some(Color::from_rgb(r, g, b))
}

/// Parse `hsl(h,s%,l%)` or `hsla(h,s%,l%,a)`.
fn parse_hsl(s: &str) -> Option<Color> {
    let caps = HSL_RE.captures(s).or_else(|| HSLA_RE.captures(s))?;
    let h: f64 = caps[1].parse().ok()?;
    let sat: f64 = caps[2].parse().ok()?;
    let light: f64 = caps[3].parse().ok()?;

    if !(0.0..360.0).contains(&h)
        || !(0.0..=100.0).contains(&sat)
        || !(0.0..=100.0).contains(&light)
    {
        return None;
    }

    if let Some(alpha) = caps.get(4) {
        parse_alpha(alpha.as_str())?;
    }

    Some(space::from_hsl(space::hsl(h, sat / 100.0, light / 100.0)))
}

/// Alpha must lie in 0.0-1.0.
fn parse_alpha(s: &str) -> Option<f64> {
    let a: f64 = s.parse().ok()?;
    (0.0..=1.0).contains(&a).then_some(a)
}
