//! Validation for the `[harmony]` step magnitudes.

use crate::schema::ChromoraConfig;

use super::helpers::validate_range_f64;

const LIGHTNESS_RANGE: (f64, f64) = (0.1, 5.0);
const CHROMA_RANGE: (f64, f64) = (0.0, 2.0);

/// Validate step ranges and the ordering of the monochromatic ramp.
pub(crate) fn validate_harmony(errors: &mut Vec<String>, config: &ChromoraConfig) {
    let h = &config.harmony;

    let lightness = [
        ("harmony.mono_light_brighten", h.mono_light_brighten),
        ("harmony.mono_soft_brighten", h.mono_soft_brighten),
        ("harmony.mono_shade_darken", h.mono_shade_darken),
        ("harmony.mono_deep_darken", h.mono_deep_darken),
        ("harmony.accent_brighten", h.accent_brighten),
        ("harmony.accent_darken", h.accent_darken),
        ("harmony.tetradic_brighten", h.tetradic_brighten),
    ];
    for (name, value) in lightness {
        validate_range_f64(errors, name, value, LIGHTNESS_RANGE.0, LIGHTNESS_RANGE.1);
    }

    let chroma = [
        ("harmony.mono_light_saturate", h.mono_light_saturate),
        ("harmony.mono_soft_saturate", h.mono_soft_saturate),
        ("harmony.mono_shade_desaturate", h.mono_shade_desaturate),
        ("harmony.mono_deep_desaturate", h.mono_deep_desaturate),
    ];
    for (name, value) in chroma {
        validate_range_f64(errors, name, value, CHROMA_RANGE.0, CHROMA_RANGE.1);
    }

    // The ramp must run lightest to darkest.
    if h.mono_light_brighten <= h.mono_soft_brighten {
        errors.push(format!(
            "harmony.mono_light_brighten ({}) must be greater than harmony.mono_soft_brighten ({})",
            h.mono_light_brighten, h.mono_soft_brighten
        ));
    }
    if h.mono_deep_darken <= h.mono_shade_darken {
        errors.push(format!(
            "harmony.mono_deep_darken ({}) must be greater than harmony.mono_shade_darken ({})",
            h.mono_deep_darken, h.mono_shade_darken
        ));
    }
}
