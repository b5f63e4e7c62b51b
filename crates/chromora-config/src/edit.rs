//! Single-value edits addressed by dotted key, e.g. `defaults.count`.

use chromora_common::ConfigError;
use toml::Value;

use crate::schema::ChromoraConfig;
use crate::validation;

/// Return a copy of `config` with `key` set to `raw`.
///
/// `raw` is read as the type the key already holds (integer, float,
/// boolean or string). The edited config must deserialize and validate.
pub fn set_value(config: &ChromoraConfig, key: &str, raw: &str) -> Result<ChromoraConfig, ConfigError> {
    let mut tree = Value::try_from(config)
        .map_err(|e| ConfigError::ParseError(format!("cannot encode config: {e}")))?;

    let unknown = || ConfigError::ValidationError(format!("unknown config key '{key}'"));
    let (section, field) = key.split_once('.').ok_or_else(unknown)?;
    let slot = tree
        .get_mut(section)
        .and_then(|fields| fields.get_mut(field))
        .ok_or_else(unknown)?;
    *slot = coerce(slot, key, raw.trim())?;

    let updated = tree
        .try_into::<ChromoraConfig>()
        .map_err(|e| ConfigError::ValidationError(format!("{key}: {e}")))?;
    validation::validate(&updated)?;
    Ok(updated)
}

/// Every key [`set_value`] accepts, sorted within each section.
pub fn keys(config: &ChromoraConfig) -> Vec<String> {
    let Ok(Value::Table(sections)) = Value::try_from(config) else {
        return Vec::new();
    };
    sections
        .iter()
        .filter_map(|(section, fields)| Some((section, fields.as_table()?)))
        .flat_map(|(section, fields)| fields.keys().map(move |field| format!("{section}.{field}")))
        .collect()
}

fn coerce(current: &Value, key: &str, raw: &str) -> Result<Value, ConfigError> {
    let mismatch = |expected: &str| {
        ConfigError::ValidationError(format!("{key} expects {expected}, got '{raw}'"))
    };
    match current {
        Value::Integer(_) => raw.parse().map(Value::Integer).map_err(|_| mismatch("an integer")),
        Value::Float(_) => raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Value::Float)
            .ok_or_else(|| mismatch("a number")),
        Value::Boolean(_) => raw.parse().map(Value::Boolean).map_err(|_| mismatch("true or false")),
        _ => Ok(Value::String(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LogLevel;
    use chromora_color::ColorFormat;

    #[test]
    fn sets_each_value_type() {
        let config = ChromoraConfig::default();

        let config = set_value(&config, "defaults.count", "8").unwrap();
        assert_eq!(config.defaults.count, 8);

        let config = set_value(&config, "defaults.base_color", " tomato ").unwrap();
        assert_eq!(config.defaults.base_color, "tomato");

        let config = set_value(&config, "defaults.format", "rgba").unwrap();
        assert_eq!(config.defaults.format, ColorFormat::Rgba);

        let config = set_value(&config, "harmony.accent_darken", "2").unwrap();
        assert_eq!(config.harmony.accent_darken, 2.0);

        let config = set_value(&config, "logging.level", "DEBUG").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn leaves_the_input_untouched() {
        let config = ChromoraConfig::default();
        let _ = set_value(&config, "defaults.count", "12").unwrap();
        assert_eq!(config.defaults.count, 5);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let config = ChromoraConfig::default();
        for key in ["count", "defaults.size", "colors.count", ""] {
            let err = set_value(&config, key, "1").unwrap_err();
            assert!(err.to_string().contains("unknown config key"), "{key}: {err}");
        }
    }

    #[test]
    fn wrong_type_is_rejected() {
        let config = ChromoraConfig::default();
        assert!(set_value(&config, "defaults.count", "many").is_err());
        assert!(set_value(&config, "harmony.accent_brighten", "NaN").is_err());
        assert!(set_value(&config, "defaults.format", "cmyk").is_err());
        assert!(set_value(&config, "logging.level", "loud").is_err());
    }

    #[test]
    fn invalid_values_fail_validation() {
        let config = ChromoraConfig::default();
        for (key, value) in [
            ("defaults.count", "0"),
            ("defaults.count", "21"),
            ("defaults.base_color", "not a color"),
            ("harmony.mono_light_brighten", "1.0"),
        ] {
            assert!(
                matches!(set_value(&config, key, value), Err(ConfigError::ValidationError(_))),
                "{key} = {value}"
            );
        }
    }

    #[test]
    fn keys_cover_every_section() {
        let keys = keys(&ChromoraConfig::default());
        assert!(keys.contains(&"defaults.base_color".to_string()));
        assert!(keys.contains(&"harmony.mono_deep_desaturate".to_string()));
        assert!(keys.contains(&"logging.level".to_string()));
        for key in &keys {
            assert!(key.split_once('.').is_some(), "{key}");
        }
    }
}
