//! Configuration struct definitions.

use crate::rotation::DEFAULT_RETENTION;
use serde::Deserialize;

/// Settings shared by every logger.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum level; everything is logged by default.
    pub level: String,
    /// Root directory for log files. Platform state directory when unset.
    pub log_root: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            log_root: None,
        }
    }
}

/// Daily rotation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// `utc` or `local`; also the zone of rendered timestamps.
    pub timezone: String,
    /// Hour of day (0-23) at which segments roll over.
    pub hour: u32,
    /// Retired segments to keep; 0 keeps all of them.
    pub retention: usize,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            timezone: "utc".to_string(),
            hour: 0,
            retention: DEFAULT_RETENTION,
        }
    }
}

/// Console sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub enabled: bool,
    pub colors: bool,
    /// `stdout` or `stderr`.
    pub stream: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
            stream: "stdout".to_string(),
        }
    }
}

/// File sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub enabled: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
