//! Plain-text file sink on top of a rotating segment.

use super::{Output, OutputKind};
use crate::error::Error;
use crate::fmt::{LogEvent, render_file};
use crate::internal;
use crate::rotation::{RollingFile, RotationPolicy};
use chrono::{DateTime, FixedOffset};
use std::path::Path;

#[derive(Debug)]
pub struct FileOutput {
    file: RollingFile,
}

impl FileOutput {
    /// Opens (or creates) the active segment at `path`.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] if the file cannot be opened.
    pub fn open(
        path: &Path,
        policy: RotationPolicy,
        now: &DateTime<FixedOffset>,
    ) -> Result<Self, Error> {
        let file = RollingFile::open(path, policy, now)?;
        internal::debug("FILE", &format!("Opened {}", path.display()));
        Ok(Self { file })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    #[must_use]
    pub const fn rolling(&self) -> &RollingFile {
        &self.file
    }
}

impl Output for FileOutput {
    fn kind(&self) -> OutputKind {
        OutputKind::File
    }

    fn write(&mut self, event: &LogEvent<'_>) -> Result<(), Error> {
        self.file.write_line(&event.timestamp, &render_file(event))
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.file.flush()
    }
}
