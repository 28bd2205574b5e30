//! Console sink, colored by level unless disabled.

use super::{Output, OutputKind};
use crate::fmt::{LogEvent, render};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory console, shared between the sink and whoever reads it back.
pub type SharedBuffer = Arc<Mutex<Vec<u8>>>;

/// Where console lines go.
#[derive(Debug, Clone, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
    /// Captures lines in memory (tests, embedding in a UI).
    Buffer(SharedBuffer),
}

impl ConsoleTarget {
    /// New empty buffer target plus the handle to read it.
    #[must_use]
    pub fn buffer() -> (Self, SharedBuffer) {
        let buf = SharedBuffer::default();
        (Self::Buffer(Arc::clone(&buf)), buf)
    }
}

#[derive(Debug, Clone)]
pub struct TerminalOutput {
    /// Piped output and `NO_COLOR` environments can't use ANSI escape codes.
    colors_enabled: bool,
    target: ConsoleTarget,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOutput {
    /// Colors on, stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors_enabled: true,
            target: ConsoleTarget::Stdout,
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub fn target(mut self, target: ConsoleTarget) -> Self {
        self.target = target;
        self
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        match &self.target {
            ConsoleTarget::Stdout => io::stdout().lock().write_all(line.as_bytes()),
            ConsoleTarget::Stderr => io::stderr().lock().write_all(line.as_bytes()),
            ConsoleTarget::Buffer(buf) => {
                buf.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .extend_from_slice(line.as_bytes());
                Ok(())
            }
        }
    }
}

impl Output for TerminalOutput {
    fn kind(&self) -> OutputKind {
        OutputKind::Terminal
    }

    fn write(&mut self, event: &LogEvent<'_>) -> Result<(), crate::Error> {
        let mut line = render(event, self.colors_enabled);
        line.push('\n');
        self.write_line(&line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        match self.target {
            ConsoleTarget::Stdout => io::stdout().flush()?,
            ConsoleTarget::Stderr => io::stderr().flush()?,
            ConsoleTarget::Buffer(_) => {}
        }
        Ok(())
    }
}
