//! One logger per `(name, file)` pair for as long as the registry lives.
//!
//! The registry is an ordinary value owned by the application's composition root
//! and handed to whoever needs loggers. Lookups hold the registry lock while a
//! new logger is wired, so two threads asking for the same key at once still get
//! the same `Arc` and the sinks are opened only once.

use crate::config::Config;
use crate::error::Error;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::ConsoleTarget;
use crate::path::{PathResolver, ResolvedName};
use crate::rotation::{Clock, RotationPolicy, SystemClock, Zone};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Settings applied to every logger the registry builds, parsed and validated up front.
#[derive(Debug, Clone)]
struct Settings {
    level: Level,
    zone: Zone,
    policy: RotationPolicy,
    console: bool,
    colors: bool,
    file: bool,
}

pub struct Registry {
    settings: Settings,
    resolver: PathResolver,
    clock: Arc<dyn Clock>,
    console_target: ConsoleTarget,
    loggers: Mutex<HashMap<ResolvedName, Arc<Logger>>>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("root", &self.resolver.root())
            .field("settings", &self.settings)
            .field("loggers", &self.len())
            .finish_non_exhaustive()
    }
}

impl Registry {
    /// Validates `config` and resolves the log root. No directory is created until
    /// the first logger with a file sink is requested.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] for an invalid level, zone, rotation hour,
    /// console stream, or an empty log root.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let settings = Settings {
            level: config.parse_level()?,
            zone: config.parse_zone()?,
            policy: config.rotation_policy()?,
            console: config.console.enabled,
            colors: config.console.colors,
            file: config.file.enabled,
        };
        let root = config.log_root()?;
        internal::debug("REGISTRY", &format!("Log root: {}", root.display()));

        Ok(Self {
            settings,
            resolver: PathResolver::new(root),
            clock: Arc::new(SystemClock),
            console_target: config.console_target()?,
            loggers: Mutex::new(HashMap::new()),
        })
    }

    /// Registry configured from the default config file and the environment.
    ///
    /// # Errors
    /// Propagates config loading and validation errors.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(&Config::load()?)
    }

    /// Clock handed to every logger built afterwards.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Console target for every logger built afterwards.
    #[must_use]
    pub fn with_console(mut self, target: ConsoleTarget) -> Self {
        self.console_target = target;
        self
    }

    /// Returns the logger for `(name, file_override)`, wiring it on first use.
    ///
    /// Both parts are slugified before lookup; an absent or empty name means
    /// `default`, and an absent override means the file is named after the logger.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] when the log directory or file cannot be
    /// created. Nothing is cached in that case, so a later call retries.
    pub fn get_logger(
        &self,
        name: Option<&str>,
        file_override: Option<&str>,
    ) -> Result<Arc<Logger>, Error> {
        self.get_logger_with_level(name, file_override, None)
    }

    /// Like [`get_logger`](Self::get_logger), with `level` replacing the
    /// configured minimum level for this logger.
    ///
    /// The level only applies when this call wires the logger. A logger that
    /// already exists is returned unchanged.
    ///
    /// # Errors
    /// Same as [`get_logger`](Self::get_logger).
    pub fn get_logger_with_level(
        &self,
        name: Option<&str>,
        file_override: Option<&str>,
        level: Option<Level>,
    ) -> Result<Arc<Logger>, Error> {
        let key = ResolvedName::new(name, file_override);
        let mut loggers = self.lock();

        if let Some(logger) = loggers.get(&key) {
            if level.is_some_and(|l| l != logger.min_level()) {
                internal::debug(
                    "REGISTRY",
                    &format!(
                        "Logger '{}' already exists at {}, ignoring requested level",
                        key.logger,
                        logger.min_level()
                    ),
                );
            }
            return Ok(Arc::clone(logger));
        }

        let logger = Arc::new(self.build(&key, level.unwrap_or(self.settings.level))?);
        internal::debug(
            "REGISTRY",
            &format!("Created logger '{}' ({})", key.logger, key.file_base),
        );
        loggers.insert(key, Arc::clone(&logger));
        Ok(logger)
    }

    /// Shorthand for `get_logger(Some(name), None)`.
    ///
    /// # Errors
    /// Same as [`get_logger`](Self::get_logger).
    pub fn logger(&self, name: &str) -> Result<Arc<Logger>, Error> {
        self.get_logger(Some(name), None)
    }

    fn build(&self, key: &ResolvedName, level: Level) -> Result<Logger, Error> {
        let s = &self.settings;
        let mut builder = Logger::builder(&key.logger)
            .level(level)
            .zone(s.zone)
            .clock(Arc::clone(&self.clock));

        if s.console {
            builder = builder
                .terminal()
                .colors(s.colors)
                .target(self.console_target.clone())
                .done();
        }

        if s.file {
            let path = self.resolver.resolve_name(key)?;
            builder = builder.file(path).policy(s.policy.clone()).done()?;
        }

        Ok(builder.build())
    }

    /// Flushes every cached logger.
    ///
    /// # Errors
    /// Returns the first flush error; every logger is still flushed.
    pub fn flush_all(&self) -> Result<(), Error> {
        let loggers: Vec<_> = self.lock().values().cloned().collect();
        let mut first = None;
        for logger in loggers {
            if let Err(e) = logger.flush() {
                first.get_or_insert(e);
            }
        }
        first.map_or(Ok(()), Err)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.resolver.root()
    }

    #[must_use]
    pub const fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ResolvedName, Arc<Logger>>> {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
