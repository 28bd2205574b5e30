//! TOML configuration loading and environment overrides.
//!
//! Precedence, lowest first: built-in defaults, the TOML file, environment
//! variables. Values stay as strings here and are validated by the `parse_*`
//! helpers when a registry is built, so one bad value is reported with context.

mod structs;

pub use structs::{ConsoleConfig, FileConfig, GeneralConfig, RotationConfig};

use crate::error::Error;
use crate::internal;
use crate::level::Level;
use crate::output::ConsoleTarget;
use crate::rotation::{RotationPolicy, Zone};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform config and state directories.
const APP_DIR: &str = "sluglog";

/// Full configuration. Every section is `#[serde(default)]`, so an empty file
/// or no file at all yields a working setup.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub rotation: RotationConfig,
    pub console: ConsoleConfig,
    pub file: FileConfig,
}

impl Config {
    /// Default config file plus environment overrides.
    ///
    /// # Errors
    /// Fails on unreadable or malformed TOML, or an unparsable numeric env value.
    pub fn load() -> Result<Self, Error> {
        let mut config = match Self::get_config_path() {
            Some(path) => Self::load_from(&path)?,
            None => {
                internal::debug("CONFIG", "No config directory on this platform, using defaults");
                Self::default()
            }
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Loads only the TOML file at `path`; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| Error::storage(path, e))?;
        let config = Self::parse(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// Returns [`Error::ConfigParse`] on malformed TOML.
    pub fn parse(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Defaults plus environment overrides, ignoring any config file.
    ///
    /// # Errors
    /// Fails on an unparsable numeric env value.
    pub fn from_env() -> Result<Self, Error> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Applies overrides from the process environment.
    ///
    /// # Errors
    /// Fails on an unparsable numeric env value.
    pub fn apply_env(&mut self) -> Result<(), Error> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`:
    /// `LOG_ROOT` (wins over `LOG_DIR`), `LOG_DIR`, `LOG_LEVEL`, `LOG_TIMEZONE`,
    /// `LOG_ROTATE_HOUR`, `LOG_RETENTION`, and `NO_COLOR`.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if `LOG_ROTATE_HOUR` or `LOG_RETENTION`
    /// is not a number.
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), Error> {
        if let Some(root) = lookup("LOG_ROOT").or_else(|| lookup("LOG_DIR")) {
            self.general.log_root = Some(root);
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.general.level = level;
        }
        if let Some(zone) = lookup("LOG_TIMEZONE") {
            self.rotation.timezone = zone;
        }
        if let Some(hour) = lookup("LOG_ROTATE_HOUR") {
            self.rotation.hour = parse_number("LOG_ROTATE_HOUR", &hour)?;
        }
        if let Some(retention) = lookup("LOG_RETENTION") {
            self.rotation.retention = parse_number("LOG_RETENTION", &retention)?;
        }
        // https://no-color.org: any non-empty value disables color.
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.console.colors = false;
        }
        Ok(())
    }

    /// `<config_dir>/sluglog/sluglog.toml`, `None` where the platform has no config dir.
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        directories::BaseDirs::new().map(|dirs| {
            dirs.config_dir()
                .join(APP_DIR)
                .join(format!("{APP_DIR}.toml"))
        })
    }

    /// # Errors
    /// Returns [`Error::Configuration`] for an unknown level name.
    pub fn parse_level(&self) -> Result<Level, Error> {
        self.general
            .level
            .parse()
            .map_err(|e| Error::Configuration(format!("{e}")))
    }

    /// # Errors
    /// Returns [`Error::Configuration`] for an unknown zone name.
    pub fn parse_zone(&self) -> Result<Zone, Error> {
        self.rotation.timezone.parse()
    }

    /// # Errors
    /// Returns [`Error::Configuration`] if the hour is out of range.
    pub fn rotation_policy(&self) -> Result<RotationPolicy, Error> {
        RotationPolicy::new(self.rotation.hour, self.rotation.retention)
    }

    /// # Errors
    /// Returns [`Error::Configuration`] for anything but `stdout` or `stderr`.
    pub fn console_target(&self) -> Result<ConsoleTarget, Error> {
        match self.console.stream.trim().to_lowercase().as_str() {
            "stdout" | "out" => Ok(ConsoleTarget::Stdout),
            "stderr" | "err" => Ok(ConsoleTarget::Stderr),
            other => Err(Error::Configuration(format!(
                "unknown console stream: '{other}'"
            ))),
        }
    }

    /// Configured root with `~` expanded, else the platform state directory,
    /// else `./logs`. Whichever default is picked is reported as a warning, and
    /// [`Registry::root`](crate::Registry::root) exposes it afterwards.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] when the configured root is blank.
    pub fn log_root(&self) -> Result<PathBuf, Error> {
        if let Some(root) = &self.general.log_root {
            let trimmed = root.trim();
            if trimmed.is_empty() {
                return Err(Error::Configuration("log root is empty".to_string()));
            }
            return Ok(PathBuf::from(shellexpand::tilde(trimmed).as_ref()));
        }

        if let Some(dirs) = directories::ProjectDirs::from("", "", APP_DIR) {
            let root = dirs
                .state_dir()
                .unwrap_or_else(|| dirs.data_dir())
                .join("logs");
            internal::warn(
                "CONFIG",
                &format!("No log root configured, using {}", root.display()),
            );
            return Ok(root);
        }

        internal::warn(
            "CONFIG",
            "No log root configured and no platform data directory, falling back to ./logs",
        );
        Ok(PathBuf::from("logs"))
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, Error> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Configuration(format!("{key} must be a number, got '{value}'")))
}
