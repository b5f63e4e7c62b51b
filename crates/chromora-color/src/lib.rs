//! Chromora color engine.
//!
//! Parses free-form color input, describes colors in every CSS encoding,
//! derives harmonic palettes from a base color, and resizes palettes by
//! sampling a perceptual LCh scale. Everything here is a pure function over
//! immutable [`Color`] values.
//!
//! # Quick Start
//!
//! ```rust
//! use chromora_color::{generate_palette, parse_color, resize_palette};
//!
//! assert_eq!(parse_color("rgb(30,144,255)").as_deref(), Some("#1e90ff"));
//! assert_eq!(parse_color("xyz123"), None);
//!
//! let palettes = generate_palette("#a855f7", None).unwrap();
//! assert_eq!(palettes.monochromatic[2].to_hex(), "#a855f7");
//!
//! let resized = resize_palette(&["#ff0000", "#00ff00", "#0000ff"], 5).unwrap();
//! assert_eq!(resized.len(), 5);
//! ```

pub mod adjust;
pub mod export;
pub mod harmony;
pub mod info;
pub mod names;
pub mod parse;
pub mod scale;
pub mod space;

pub use adjust::ColorAdjust;
pub use chromora_common::{Color, ColorError};
pub use export::{css_variables, CompactExport, PaletteDocument, PaletteExport, PaletteResponse};
pub use harmony::{generate, HarmonySteps, Palette, PaletteKind, PaletteSet, PALETTE_SIZE};
pub use info::{contrast_color, describe, ColorFormat, ColorInfo};
pub use parse::parse;
pub use scale::{resize, LchScale};

/// Normalize color input to `#rrggbb`, or `None` if no grammar accepts it.
pub fn parse_color(input: &str) -> Option<String> {
    parse::parse(input).ok().map(|c| c.to_hex())
}

pub fn is_valid_color(input: &str) -> bool {
    parse::is_valid(input)
}

/// Describe a color given in any accepted input format.
pub fn get_color_info(color: &str) -> Result<ColorInfo, ColorError> {
    parse::parse(color).map(describe)
}

/// `#000000` or `#ffffff`, whichever contrasts better with `color`.
pub fn get_contrast_color(color: &str) -> Result<String, ColorError> {
    parse::parse(color).map(|c| contrast_color(c).to_hex())
}

/// Generate all six harmonic palettes with the default step magnitudes.
///
/// With `count` other than [`PALETTE_SIZE`], every palette is resized.
pub fn generate_palette(base: &str, count: Option<usize>) -> Result<PaletteSet, ColorError> {
    generate_palette_with(base, count, &HarmonySteps::default())
}

pub fn generate_palette_with(
    base: &str,
    count: Option<usize>,
    steps: &HarmonySteps,
) -> Result<PaletteSet, ColorError> {
    let base = parse::parse(base)?;
    let set = harmony::generate(base, steps);
    Ok(match count {
        Some(n) if n != PALETTE_SIZE => set.resized(n),
        _ => set,
    })
}

/// Resize a palette of color strings to exactly `count` colors.
///
/// When `count` already equals the input length the strings are returned
/// verbatim and are not validated. Otherwise every input must parse.
pub fn resize_palette<S: AsRef<str>>(colors: &[S], count: usize) -> Result<Vec<String>, ColorError> {
    if colors.is_empty() || count == 0 {
        return Ok(Vec::new());
    }
    if colors.len() == count {
        return Ok(colors.iter().map(|c| c.as_ref().to_string()).collect());
    }

    let parsed = colors
        .iter()
        .map(|c| parse::parse(c.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(scale::resize(&parsed, count)
        .iter()
        .map(Color::to_hex)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_examples() {
        assert_eq!(parse_color("#1e90ff").as_deref(), Some("#1e90ff"));
        assert_eq!(parse_color("rgb(30,144,255)").as_deref(), Some("#1e90ff"));
        assert_eq!(parse_color("azul").as_deref(), Some("#0000ff"));
        assert_eq!(parse_color("xyz123"), None);
        assert_eq!(parse_color("not a color"), None);
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("#zzzzzz"), None);
    }

    #[test]
    fn is_valid_color_examples() {
        assert!(is_valid_color("hsl(120, 50%, 50%)"));
        assert!(!is_valid_color("hsl(120, 50, 50)"));
    }

    #[test]
    fn get_color_info_is_idempotent() {
        let first = get_color_info("rgba(12, 200, 99, 0.4)").unwrap();
        let second = get_color_info(&first.hex).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn get_color_info_rejects_invalid() {
        assert!(matches!(
            get_color_info("nope"),
            Err(ColorError::InvalidColorInput(_))
        ));
    }

    #[test]
    fn get_contrast_color_examples() {
        assert_eq!(get_contrast_color("white").unwrap(), "#000000");
        assert_eq!(get_contrast_color("navy").unwrap(), "#ffffff");
    }

    #[test]
    fn generate_palette_shape() {
        let set = generate_palette("#a855f7", None).unwrap();
        assert_eq!(set.base.to_hex(), "#a855f7");
        for (_, colors) in set.iter() {
            assert_eq!(colors.len(), 5);
            for c in colors {
                let hex = c.to_hex();
                assert_eq!(hex.len(), 7);
                assert_eq!(parse_color(&hex).as_deref(), Some(hex.as_str()));
            }
        }
    }

    #[test]
    fn generate_palette_with_count() {
        let set = generate_palette("tomato", Some(7)).unwrap();
        assert!(set.iter().all(|(_, colors)| colors.len() == 7));

        let same = generate_palette("tomato", Some(5)).unwrap();
        assert_eq!(same, generate_palette("tomato", None).unwrap());
    }

    #[test]
    fn generate_palette_invalid_base() {
        assert!(generate_palette("#12", None).is_err());
    }

    #[test]
    fn resize_palette_examples() {
        let out = resize_palette(&["#ff0000", "#00ff00", "#0000ff"], 5).unwrap();
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|h| h.len() == 7 && h.starts_with('#')));
        assert_eq!(out[0], "#ff0000");
        assert_eq!(out[4], "#0000ff");
    }

    #[test]
    fn resize_palette_identity_is_verbatim() {
        let input = vec!["RED".to_string(), "#ABC".to_string()];
        assert_eq!(resize_palette(&input, 2).unwrap(), input);
    }

    #[test]
    fn resize_palette_identity_skips_validation() {
        let out = resize_palette(&["bogus", "x"], 2).unwrap();
        assert_eq!(out, vec!["bogus", "x"]);
        assert!(resize_palette(&["bogus", "x"], 3).is_err());
    }

    #[test]
    fn resize_palette_empty_cases() {
        let empty: [&str; 0] = [];
        assert!(resize_palette(&empty, 4).unwrap().is_empty());
        assert!(resize_palette(&["#fff"], 0).unwrap().is_empty());
    }

    #[test]
    fn resize_palette_rejects_invalid_member() {
        assert!(resize_palette(&["#fff", "bogus"], 4).is_err());
    }
}
