//! Stepwise construction of a [`Logger`](super::Logger) and its sinks.
//!
//! Attaching is idempotent per sink kind: a second terminal or file sink is
//! skipped, so a logger can never print the same line twice to one place.

use super::Logger;
use crate::error::Error;
use crate::internal;
use crate::level::Level;
use crate::output::{ConsoleTarget, FileOutput, Output, OutputKind, TerminalOutput};
use crate::rotation::{Clock, RotationPolicy, SystemClock, Zone};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub struct LoggerBuilder {
    name: String,
    min_level: Level,
    zone: Zone,
    clock: Arc<dyn Clock>,
    file_path: Option<PathBuf>,
    outputs: Vec<Box<dyn Output>>,
}

impl LoggerBuilder {
    /// Everything from DEBUG up, UTC, system clock, no sinks.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: Level::Debug,
            zone: Zone::Utc,
            clock: Arc::new(SystemClock),
            file_path: None,
            outputs: Vec::new(),
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub const fn zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    /// Must be set before [`file`](Self::file): the initial rotation window is taken from it.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn terminal(self) -> TerminalBuilder {
        TerminalBuilder {
            parent: self,
            output: TerminalOutput::new(),
        }
    }

    #[must_use]
    pub fn file(self, path: impl Into<PathBuf>) -> FileBuilder {
        FileBuilder {
            parent: self,
            path: path.into(),
            policy: RotationPolicy::default(),
        }
    }

    /// Attaches any sink. Built-in kinds already present are skipped.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.attach(Box::new(output));
        self
    }

    #[must_use]
    pub fn has_output(&self, kind: OutputKind) -> bool {
        kind != OutputKind::Custom && self.outputs.iter().any(|o| o.kind() == kind)
    }

    fn attach(&mut self, output: Box<dyn Output>) -> bool {
        let kind = output.kind();
        if self.has_output(kind) {
            internal::debug(
                "LOGGER",
                &format!("Logger '{}' already has a {kind:?} sink, skipping", self.name),
            );
            return false;
        }
        self.outputs.push(output);
        true
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            name: self.name,
            min_level: self.min_level,
            zone: self.zone,
            clock: self.clock,
            file_path: self.file_path,
            outputs: Mutex::new(self.outputs),
            failures_reported: Default::default(),
        }
    }
}

/// Console-specific settings.
pub struct TerminalBuilder {
    parent: LoggerBuilder,
    output: TerminalOutput,
}

impl TerminalBuilder {
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.output = self.output.colors(enabled);
        self
    }

    #[must_use]
    pub fn target(mut self, target: ConsoleTarget) -> Self {
        self.output = self.output.target(target);
        self
    }

    /// Attaches the console sink and returns to the parent builder.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.attach(Box::new(self.output));
        self.parent
    }
}

/// File-specific settings. The file is only opened in [`done`](Self::done).
pub struct FileBuilder {
    parent: LoggerBuilder,
    path: PathBuf,
    policy: RotationPolicy,
}

impl FileBuilder {
    #[must_use]
    pub fn policy(mut self, policy: RotationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Opens the active segment and attaches the sink. When the logger already
    /// has a file sink nothing is opened.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] when the file cannot be opened or a stale
    /// segment cannot be retired.
    pub fn done(mut self) -> Result<LoggerBuilder, Error> {
        if self.parent.has_output(OutputKind::File) {
            internal::debug(
                "LOGGER",
                &format!(
                    "Logger '{}' already has a file sink, not opening {}",
                    self.parent.name,
                    self.path.display()
                ),
            );
            return Ok(self.parent);
        }

        let now = self.parent.zone.convert(self.parent.clock.now());
        let output = FileOutput::open(&self.path, self.policy, &now)?;
        self.parent.attach(Box::new(output));
        self.parent.file_path = Some(self.path);
        Ok(self.parent)
    }
}
