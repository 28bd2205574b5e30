//! Sinks that receive rendered lines. The console and the rotating file are built
//! in; the `Output` trait lets applications add their own.

mod file;
mod terminal;

pub use file::FileOutput;
pub use terminal::{ConsoleTarget, SharedBuffer, TerminalOutput};

use crate::fmt::LogEvent;

/// Used to recognize an already-attached sink so it is never attached twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Terminal,
    File,
    /// Application-provided sinks are never deduplicated.
    Custom,
}

impl OutputKind {
    pub(crate) const COUNT: usize = 3;

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Terminal => 0,
            Self::File => 1,
            Self::Custom => 2,
        }
    }
}

/// A logger holds its outputs behind one lock, so implementations get `&mut self`
/// and never see two writes at once.
pub trait Output: Send {
    fn kind(&self) -> OutputKind {
        OutputKind::Custom
    }

    /// Renders and writes one event as a single line.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&mut self, event: &LogEvent<'_>) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&mut self) -> Result<(), crate::Error>;
}
