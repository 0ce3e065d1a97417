//! Runtime configuration for board front-ends.
//!
//! # Responsibility
//! - Resolve log level and log directory from the environment.
//! - Normalize values once so logging init sees canonical input.
//!
//! # Invariants
//! - Unset variables fall back to build-mode defaults.
//! - A configured log directory is always absolute.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const LOG_LEVEL_ENV: &str = "PROJBOARD_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "PROJBOARD_LOG_DIR";

/// Configuration resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error"
            ),
            Self::RelativeLogDir(path) => write!(
                f,
                "log directory must be an absolute path, got `{}`",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {}

/// Resolved board configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Canonical level name (`trace|debug|info|warn|error`).
    pub log_level: &'static str,
    /// File logging directory; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl BoardConfig {
    /// Reads `PROJBOARD_LOG_LEVEL` and `PROJBOARD_LOG_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(level) = non_blank(lookup(LOG_LEVEL_ENV)) {
            config = config.with_level(&level)?;
        }
        if let Some(dir) = non_blank(lookup(LOG_DIR_ENV)) {
            config = config.with_log_dir(dir)?;
        }
        Ok(config)
    }

    /// Overrides the log level.
    pub fn with_level(mut self, level: &str) -> Result<Self, ConfigError> {
        self.log_level =
            normalize_level(level).map_err(|_| ConfigError::InvalidLevel(level.trim().to_string()))?;
        Ok(self)
    }

    /// Overrides the log directory.
    pub fn with_log_dir(mut self, dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        if !dir.is_absolute() {
            return Err(ConfigError::RelativeLogDir(dir.to_path_buf()));
        }
        self.log_dir = Some(dir.to_path_buf());
        Ok(self)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
