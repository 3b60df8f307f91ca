//! Runtime configuration for storylist hosts.
//!
//! # Responsibility
//! - Resolve storage location, logging and session settings from the
//!   environment with stable defaults.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Resolution never touches the file system.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Storage key holding the persisted search term.
pub const SEARCH_STORAGE_KEY: &str = "search";
/// Search term used when nothing is stored yet.
pub const DEFAULT_SEARCH_TERM: &str = "React";

const DB_FILE_NAME: &str = "storylist.sqlite3";

pub const ENV_DB_PATH: &str = "STORYLIST_DB_PATH";
pub const ENV_LOG_DIR: &str = "STORYLIST_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "STORYLIST_LOG_LEVEL";
pub const ENV_DEFAULT_SEARCH: &str = "STORYLIST_DEFAULT_SEARCH";

/// Configuration resolution error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
            Self::RelativeLogDir(path) => write!(
                f,
                "{ENV_LOG_DIR} must be an absolute path, got `{}`",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {}

/// Settings consumed by `CatalogSession`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Storage key for the search term.
    pub search_key: String,
    /// Fallback when no search term is stored.
    pub default_search_term: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            search_key: SEARCH_STORAGE_KEY.to_string(),
            default_search_term: DEFAULT_SEARCH_TERM.to_string(),
        }
    }
}

/// Host-level configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file backing the key/value store.
    pub db_path: PathBuf,
    /// Directory for rolling log files; logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
    pub log_level: &'static str,
    pub session: SessionSettings,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DB_FILE_NAME),
            log_dir: None,
            log_level: default_log_level(),
            session: SessionSettings::default(),
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidLogLevel`] for unknown level names.
    /// - [`ConfigError::RelativeLogDir`] when the log dir is not absolute.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(path) = read(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }

        if let Some(dir) = read(ENV_LOG_DIR) {
            let dir = PathBuf::from(dir);
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir));
            }
            config.log_dir = Some(dir);
        }

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level).map_err(ConfigError::InvalidLogLevel)?;
        }

        if let Some(term) = read(ENV_DEFAULT_SEARCH) {
            config.session.default_search_term = term;
        }

        Ok(config)
    }
}
