//! Unified error type for all sluglog operations.

use std::path::PathBuf;

/// Error type for sluglog operations.
#[derive(Debug)]
pub enum Error {
    /// Invalid configuration value (level, time zone, rotation hour, log root).
    Configuration(String),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// A log directory or file could not be created, opened, renamed, or written.
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },
    /// I/O error without a file path attached (console streams).
    Io(std::io::Error),
}

impl Error {
    /// Storage failures are only useful with the offending path attached.
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "configuration error: {msg}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::Storage { path, source } => {
                write!(f, "storage error at {}: {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Storage { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Configuration(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
