//! Validation for the `[defaults]` section.

use crate::schema::ChromoraConfig;

use super::helpers::validate_range;

pub(crate) fn validate_defaults(errors: &mut Vec<String>, config: &ChromoraConfig) {
    validate_range(errors, "defaults.count", config.defaults.count, 1, 20);

    if let Err(e) = chromora_color::parse(&config.defaults.base_color) {
        errors.push(format!("defaults.base_color: {e}"));
    }
}
