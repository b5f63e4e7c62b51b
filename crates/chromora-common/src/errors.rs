use std::path::PathBuf;

/// The single failure of the color core: input that no grammar accepts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color input: {0}")]
    InvalidColorInput(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ChromoraError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_display() {
        let err = ColorError::InvalidColorInput("xyz123".into());
        assert_eq!(err.to_string(), "invalid color input: xyz123");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("defaults.count = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: defaults.count = 0"
        );
    }

    #[test]
    fn chromora_error_from_color() {
        let color_err = ColorError::InvalidColorInput("#zzzzzz".into());
        let err: ChromoraError = color_err.into();
        assert!(matches!(err, ChromoraError::Color(_)));
        assert!(err.to_string().contains("#zzzzzz"));
    }

    #[test]
    fn chromora_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ChromoraError = config_err.into();
        assert!(matches!(err, ChromoraError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn chromora_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ChromoraError = io_err.into();
        assert!(matches!(err, ChromoraError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn chromora_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ChromoraError = json_err.into();
        assert!(matches!(err, ChromoraError::Json(_)));
        assert!(err.to_string().starts_with("json error:"));
    }

    #[test]
    fn chromora_error_other() {
        let err = ChromoraError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
