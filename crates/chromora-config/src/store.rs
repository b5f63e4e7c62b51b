//! The config file on disk.
//!
//! A [`ConfigStore`] is bound to one path and owns every read and write of
//! it. Saves go through `<name>.tmp` and a rename so readers never see a
//! half-written file.

use std::io;
use std::path::{Path, PathBuf};

use chromora_common::ConfigError;
use tracing::{debug, info, warn};

use crate::schema::ChromoraConfig;
use crate::validation;


/// Commented starter file, every value at its default.
pub const STARTER_TOML: &str = include_str!("store/starter.toml");

/// Result of [`ConfigStore::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Replaced,
    /// A file was already there and `force` was not set.
    Kept,
}

impl InitOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            InitOutcome::Created => "created",
            InitOutcome::Replaced => "replaced",
            InitOutcome::Kept => "kept",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<platform config dir>/chromora/config.toml`, e.g.
    /// `~/.config/chromora/config.toml` on Linux.
    pub fn platform_default() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::ParseError("no config directory on this platform".into())
        })?;
        Ok(Self::new(dir.join("chromora").join("config.toml")))
    }

    /// `path` when given, the platform default otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => Self::platform_default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the file.
    ///
    /// A file whose values fail validation is reported with a warning and
    /// replaced by the defaults; unreadable or malformed TOML is an error.
    pub fn load(&self) -> Result<ChromoraConfig, ConfigError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::FileNotFound(self.path.clone()));
            }
            Err(e) => return Err(self.io_error("read", &e)),
        };

        let config = parse(&text)?;
        if let Err(e) = validation::validate(&config) {
            warn!(path = %self.path.display(), "{e}; using defaults");
            return Ok(ChromoraConfig::default());
        }

        info!(path = %self.path.display(), "config loaded");
        Ok(config)
    }

    /// [`load`](Self::load), writing the starter file first if none exists.
    pub fn load_or_init(&self) -> Result<ChromoraConfig, ConfigError> {
        match self.load() {
            Err(ConfigError::FileNotFound(_)) => {
                self.init(false)?;
                Ok(ChromoraConfig::default())
            }
            loaded => loaded,
        }
    }

    /// Write [`STARTER_TOML`]. An existing file is only replaced with `force`.
    pub fn init(&self, force: bool) -> Result<InitOutcome, ConfigError> {
        let existed = self.exists();
        if existed && !force {
            debug!(path = %self.path.display(), "config exists, not replacing");
            return Ok(InitOutcome::Kept);
        }

        self.write(STARTER_TOML)?;
        let outcome = if existed {
            InitOutcome::Replaced
        } else {
            InitOutcome::Created
        };
        info!(path = %self.path.display(), "starter config {}", outcome.as_str());
        Ok(outcome)
    }

    /// Replace the file with `config` rendered as TOML. Comments are lost.
    pub fn save(&self, config: &ChromoraConfig) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(config)
            .map_err(|e| ConfigError::ParseError(format!("cannot encode config: {e}")))?;
        self.write(&text)?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    fn write(&self, contents: &str) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| self.io_error("create the directory of", &e))?;
        }

        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, contents).map_err(|e| self.io_error("write", &e))?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            // Windows will not rename over an existing file.
            warn!("rename into place failed ({e}), writing directly");
            let _ = std::fs::remove_file(&tmp);
            std::fs::write(&self.path, contents).map_err(|e| self.io_error("write", &e))?;
        }
        Ok(())
    }

    fn io_error(&self, action: &str, err: &io::Error) -> ConfigError {
        ConfigError::ParseError(format!("cannot {action} {}: {err}", self.path.display()))
    }
}

/// Parse config TOML. Absent sections and keys take their defaults.
pub fn parse(text: &str) -> Result<ChromoraConfig, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))
}
