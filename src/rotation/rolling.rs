//! The active segment of one log file. Callers serialize access (the logger holds
//! its lock across a write), so a segment swap is never observed half-done.

use super::RotationPolicy;
use crate::error::Error;
use crate::internal;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct RollingFile {
    path: PathBuf,
    policy: RotationPolicy,
    window: NaiveDate,
    /// `None` after a failed reopen; the next write retries.
    file: Option<File>,
}

impl RollingFile {
    /// Opens `path` for appending, first retiring a leftover active segment whose
    /// last modification falls in an earlier window than `now`.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] if the file cannot be opened or retired.
    pub fn open(
        path: impl Into<PathBuf>,
        policy: RotationPolicy,
        now: &DateTime<FixedOffset>,
    ) -> Result<Self, Error> {
        let path = path.into();
        let window = policy.window_of(now);

        if let Some(stale) = stale_window(&path, &policy, now) {
            if stale < window {
                internal::info(
                    "ROTATION",
                    &format!("Retiring stale segment {} from {stale}", path.display()),
                );
                retire(&path, &policy, stale)?;
                policy.prune(&path)?;
            }
        }

        let file = open_append(&path)?;
        Ok(Self {
            path,
            policy,
            window,
            file: Some(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn window(&self) -> NaiveDate {
        self.window
    }

    #[must_use]
    pub const fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    /// Appends `line` plus a newline in a single write, rotating first when
    /// `timestamp` lies in a later window than the active segment.
    ///
    /// A timestamp from an earlier window (clock stepped back) is written to the
    /// active segment rather than reopening a retired one. If the active segment
    /// cannot be retired, rotation is skipped for that window and the line is
    /// still written.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] on rotation or write failure.
    pub fn write_line(&mut self, timestamp: &DateTime<FixedOffset>, line: &str) -> Result<(), Error> {
        let window = self.policy.window_of(timestamp);
        if window > self.window {
            self.rotate(window)?;
        }

        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        if self.file.is_none() {
            self.file = Some(open_append(&self.path)?);
        }
        match self.file.as_mut() {
            Some(file) => file
                .write_all(buf.as_bytes())
                .map_err(|e| Error::storage(&self.path, e)),
            None => Ok(()),
        }
    }

    /// # Errors
    /// Returns [`Error::Storage`] if the OS flush fails.
    pub fn flush(&mut self) -> Result<(), Error> {
        match self.file.as_mut() {
            Some(file) => file.flush().map_err(|e| Error::storage(&self.path, e)),
            None => Ok(()),
        }
    }

    fn rotate(&mut self, next: NaiveDate) -> Result<(), Error> {
        // Closed before the rename so the swap also works where open files can't be moved.
        if let Some(mut file) = self.file.take() {
            let _ = file.flush();
        }

        let previous = std::mem::replace(&mut self.window, next);
        match retire(&self.path, &self.policy, previous) {
            Ok(retired) => {
                internal::debug(
                    "ROTATION",
                    &format!(
                        "Rotated {} -> {} ({previous} -> {next})",
                        self.path.display(),
                        retired.display(),
                    ),
                );
                if let Err(e) = self.policy.prune(&self.path) {
                    internal::warn("ROTATION", &format!("Retention pass failed: {e}"));
                }
            }
            // Rotation is skipped for this window; lines stay in the active segment.
            Err(e) => internal::error(
                "ROTATION",
                &format!("Could not retire window {previous}, continuing in the active segment: {e}"),
            ),
        }

        self.file = Some(open_append(&self.path)?);
        Ok(())
    }
}

fn open_append(path: &Path) -> Result<File, Error> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::storage(path, e))
}

/// Renames the active segment to its retired name. A missing active file is not an error.
fn retire(path: &Path, policy: &RotationPolicy, window: NaiveDate) -> Result<PathBuf, Error> {
    let retired = policy.retired_path(path, window);
    match fs::rename(path, &retired) {
        Ok(()) => Ok(retired),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(retired),
        Err(e) => Err(Error::storage(path, e)),
    }
}

/// Window of an existing non-empty active segment, judged by its modification time.
fn stale_window(
    path: &Path,
    policy: &RotationPolicy,
    now: &DateTime<FixedOffset>,
) -> Option<NaiveDate> {
    let meta = fs::metadata(path).ok()?;
    if meta.len() == 0 {
        return None;
    }
    let modified: DateTime<Utc> = meta.modified().ok()?.into();
    Some(policy.window_of(&modified.with_timezone(now.offset())))
}
