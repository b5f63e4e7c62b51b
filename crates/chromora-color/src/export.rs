//! Palette documents and export formats.
//!
//! - [`PaletteDocument`]: every palette described color-by-color, plus the base.
//! - [`PaletteExport`]: a single palette as a downloadable JSON document.
//! - [`CompactExport`]: a single palette as hex strings only.
//! - [`css_variables`]: a `:root { ... }` block of CSS custom properties.

use chrono::{DateTime, SecondsFormat, Utc};
use chromora_common::Color;
use serde::Serialize;

use crate::harmony::{PaletteKind, PaletteSet};
use crate::info::{describe, ColorInfo};

/// Written into every [`PaletteExport`].
pub const EXPORT_SOURCE: &str = "Chromora Color Generator";

/// Palette type used when the colors did not come from a harmony rule.
pub const CUSTOM_PALETTE_TYPE: &str = "custom";

// =============================================================================
// PALETTE DOCUMENT
// =============================================================================

/// All palettes for a base color, each color fully described.
///
/// Fields serialize in harmony order, with `baseColor` last.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteDocument {
    pub monochromatic: Vec<ColorInfo>,
    pub analogous: Vec<ColorInfo>,
    pub complementary: Vec<ColorInfo>,
    pub triadic: Vec<ColorInfo>,
    pub split_complementary: Vec<ColorInfo>,
    pub tetradic: Vec<ColorInfo>,
    pub base_color: ColorInfo,
}

impl PaletteDocument {
    pub fn new(set: &PaletteSet) -> Self {
        let described = |colors: &[Color]| -> Vec<ColorInfo> {
            colors.iter().copied().map(describe).collect()
        };
        Self {
            monochromatic: described(&set.monochromatic),
            analogous: described(&set.analogous),
            complementary: described(&set.complementary),
            triadic: described(&set.triadic),
            split_complementary: described(&set.split_complementary),
            tetradic: described(&set.tetradic),
            base_color: describe(set.base),
        }
    }
}

/// Success envelope around a [`PaletteDocument`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteResponse {
    pub success: bool,
    pub data: PaletteDocument,
    pub base_color: Color,
}

impl PaletteResponse {
    pub fn new(set: &PaletteSet) -> Self {
        Self {
            success: true,
            data: PaletteDocument::new(set),
            base_color: set.base,
        }
    }
}

// =============================================================================
// SINGLE-PALETTE EXPORTS
// =============================================================================

/// A single palette with metadata, ready to save as `.json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteExport {
    pub name: String,
    pub base_color: Color,
    pub palette_type: String,
    pub colors: Vec<ColorInfo>,
    pub generated_at: String,
    pub source: String,
}

impl PaletteExport {
    /// `kind` of `None` marks the palette as [`CUSTOM_PALETTE_TYPE`].
    pub fn new(
        base: Color,
        kind: Option<PaletteKind>,
        colors: &[Color],
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: format!(
                "Chromora palette - {}",
                generated_at.format("%Y-%m-%d %H:%M:%S")
            ),
            base_color: base,
            palette_type: palette_type(kind),
            colors: colors.iter().copied().map(describe).collect(),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            source: EXPORT_SOURCE.to_string(),
        }
    }

    /// Suggested file name, e.g. `chromora-palette-1700000000000.json`.
    pub fn file_name(generated_at: DateTime<Utc>) -> String {
        format!("chromora-palette-{}.json", generated_at.timestamp_millis())
    }
}

/// A single palette as bare hex strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactExport {
    pub colors: Vec<Color>,
    pub base_color: Color,
    #[serde(rename = "type")]
    pub palette_type: String,
}

impl CompactExport {
    pub fn new(base: Color, kind: Option<PaletteKind>, colors: &[Color]) -> Self {
        Self {
            colors: colors.to_vec(),
            base_color: base,
            palette_type: palette_type(kind),
        }
    }
}

fn palette_type(kind: Option<PaletteKind>) -> String {
    kind.map_or(CUSTOM_PALETTE_TYPE, PaletteKind::as_str).to_string()
}

// =============================================================================
// CSS
// =============================================================================

/// Generate a CSS `:root { ... }` block naming each color `--{prefix}-{n}`.
///
/// `n` is 1-based. The prefix is lowercased and reduced to `[a-z0-9-]`;
/// an empty result falls back to `color`.
pub fn css_variables(prefix: &str, colors: &[Color]) -> String {
    let prefix = css_ident(prefix);
    let mut css = String::from(":root {\n");
    for (i, color) in colors.iter().enumerate() {
        css.push_str(&format!("  --{prefix}-{}: {};\n", i + 1, color.opaque().to_hex()));
    }
    css.push('}');
    css
}

fn css_ident(raw: &str) -> String {
    let mut ident = String::with_capacity(raw.len());
    let mut prev_upper = false;
    for ch in raw.trim().chars() {
        if ch.is_ascii_uppercase() {
            // splitComplementary -> split-complementary
            if !ident.is_empty() && !prev_upper && !ident.ends_with('-') {
                ident.push('-');
            }
            ident.push(ch.to_ascii_lowercase());
            prev_upper = true;
            continue;
        }
        prev_upper = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            ident.push(ch);
        } else if !ident.is_empty() && !ident.ends_with('-') {
            ident.push('-');
        }
    }
    let ident = ident.trim_end_matches('-');
    if ident.is_empty() {
        "color".to_string()
    } else {
        ident.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmony::{generate, HarmonySteps};
    use chrono::TimeZone;

    const PURPLE: Color = Color::from_rgb(168, 85, 247);

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn palette_document_describes_every_palette() {
        let set = generate(PURPLE, &HarmonySteps::default());
        let json = serde_json::to_value(PaletteDocument::new(&set)).unwrap();
        for kind in PaletteKind::ALL {
            let colors = json[kind.as_str()].as_array().unwrap();
            assert_eq!(colors.len(), 5);
            assert!(colors[0]["hex"].as_str().unwrap().starts_with('#'));
            assert!(colors[0]["rgba"].as_str().unwrap().ends_with(", 1)"));
        }
        assert_eq!(json["baseColor"]["hex"], "#a855f7");
    }

    #[test]
    fn palette_document_keys_follow_harmony_order() {
        let set = generate(PURPLE, &HarmonySteps::default());
        let text = serde_json::to_string(&PaletteDocument::new(&set)).unwrap();
        let positions: Vec<usize> = PaletteKind::ALL
            .iter()
            .map(|kind| format!("\"{}\":", kind.as_str()))
            .chain(std::iter::once("\"baseColor\":".to_string()))
            .map(|key| text.find(&key).unwrap())
            .collect();
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1], "keys out of order: {text}");
        }
    }

    #[test]
    fn palette_response_envelope() {
        let set = generate(PURPLE, &HarmonySteps::default());
        let json = serde_json::to_value(PaletteResponse::new(&set)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["baseColor"], "#a855f7");
        assert_eq!(json["data"]["monochromatic"][2]["hex"], "#a855f7");
    }

    #[test]
    fn palette_export_fields() {
        let set = generate(PURPLE, &HarmonySteps::default());
        let export = PaletteExport::new(
            PURPLE,
            Some(PaletteKind::SplitComplementary),
            &set.split_complementary,
            fixed_time(),
        );
        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["name"], "Chromora palette - 2024-03-01 12:30:00");
        assert_eq!(json["baseColor"], "#a855f7");
        assert_eq!(json["paletteType"], "splitComplementary");
        assert_eq!(json["colors"].as_array().unwrap().len(), 5);
        assert_eq!(json["generatedAt"], "2024-03-01T12:30:00.000Z");
        assert_eq!(json["source"], EXPORT_SOURCE);
    }

    #[test]
    fn palette_export_custom_type() {
        let export = PaletteExport::new(PURPLE, None, &[PURPLE], fixed_time());
        assert_eq!(export.palette_type, "custom");
    }

    #[test]
    fn export_file_name_uses_millis() {
        assert_eq!(
            PaletteExport::file_name(fixed_time()),
            "chromora-palette-1709296200000.json"
        );
    }

    #[test]
    fn compact_export_shape() {
        let export = CompactExport::new(
            PURPLE,
            Some(PaletteKind::Triadic),
            &[PURPLE, Color::WHITE],
        );
        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["colors"], serde_json::json!(["#a855f7", "#ffffff"]));
        assert_eq!(json["baseColor"], "#a855f7");
        assert_eq!(json["type"], "triadic");
    }

    #[test]
    fn css_variables_basic() {
        let css = css_variables("analogous", &[PURPLE, Color::WHITE]);
        assert_eq!(
            css,
            ":root {\n  --analogous-1: #a855f7;\n  --analogous-2: #ffffff;\n}"
        );
    }

    #[test]
    fn css_variables_sanitizes_prefix() {
        let css = css_variables("splitComplementary", &[PURPLE]);
        assert!(css.contains("--split-complementary-1: #a855f7;"));

        let css = css_variables("My Palette!}", &[PURPLE]);
        assert!(css.contains("--my-palette-1:"), "{css}");
        assert!(!css.contains('!'));

        let css = css_variables("***", &[PURPLE]);
        assert!(css.contains("--color-1:"));
    }

    #[test]
    fn css_variables_empty_palette() {
        assert_eq!(css_variables("x", &[]), ":root {\n}");
    }
}
