//! When a segment is retired, what it is called, and how many are kept.

use crate::error::Error;
use crate::internal;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Retired segments kept by default.
pub const DEFAULT_RETENTION: usize = 14;

/// Date suffix of retired segments.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Daily time-boundary rotation.
///
/// The rotation window of an instant is the calendar date of `instant - hour`
/// in the instant's own offset, so with `hour = 0` the boundary is midnight.
/// Retired segments are named `<active>.YYYY-MM-DD` after the window they
/// covered, with `.1`, `.2`, ... appended if that name is already taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    hour: u32,
    retention: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            hour: 0,
            retention: DEFAULT_RETENTION,
        }
    }
}

impl RotationPolicy {
    /// `retention = 0` keeps every retired segment.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] when `hour` is not in `0..24`.
    pub fn new(hour: u32, retention: usize) -> Result<Self, Error> {
        if hour > 23 {
            return Err(Error::Configuration(format!(
                "rotation hour must be between 0 and 23, got {hour}"
            )));
        }
        Ok(Self { hour, retention })
    }

    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    #[must_use]
    pub const fn retention(&self) -> usize {
        self.retention
    }

    /// Rotation window containing `instant`.
    #[must_use]
    pub fn window_of(&self, instant: &DateTime<FixedOffset>) -> NaiveDate {
        (instant.naive_local() - TimeDelta::hours(i64::from(self.hour))).date()
    }

    /// Free name for the segment that covered `window`.
    #[must_use]
    pub fn retired_path(&self, active: &Path, window: NaiveDate) -> PathBuf {
        let base = format!("{}.{}", active.display(), window.format(DATE_FORMAT));
        let candidate = PathBuf::from(&base);
        if !candidate.exists() {
            return candidate;
        }
        (1u32..)
            .map(|n| PathBuf::from(format!("{base}.{n}")))
            .find(|p| !p.exists())
            .unwrap_or(candidate)
    }

    /// Retired segments of `active`, oldest first.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] when the directory cannot be listed.
    pub fn retired_segments(&self, active: &Path) -> Result<Vec<PathBuf>, Error> {
        let (Some(dir), Some(file_name)) = (active.parent(), active.file_name()) else {
            return Ok(Vec::new());
        };
        let file_name = file_name.to_string_lossy();
        let pattern = format!(
            r"^{}\.(\d{{4}}-\d{{2}}-\d{{2}})(?:\.(\d+))?$",
            regex::escape(&file_name)
        );
        let re = Regex::new(&pattern)
            .map_err(|e| Error::Configuration(format!("invalid segment pattern: {e}")))?;

        let mut segments = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| Error::storage(dir, e))? {
            let entry = entry.map_err(|e| Error::storage(dir, e))?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            let Some(caps) = re.captures(&name) else {
                continue;
            };
            let Ok(date) = NaiveDate::parse_from_str(&caps[1], DATE_FORMAT) else {
                continue;
            };
            let seq: u32 = caps.get(2).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
            segments.push((date, seq, entry.path()));
        }

        segments.sort();
        Ok(segments.into_iter().map(|(_, _, path)| path).collect())
    }

    /// Deletes the oldest retired segments beyond the retention count and returns them.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] when listing or deleting fails.
    pub fn prune(&self, active: &Path) -> Result<Vec<PathBuf>, Error> {
        if self.retention == 0 {
            return Ok(Vec::new());
        }

        let segments = self.retired_segments(active)?;
        let excess = segments.len().saturating_sub(self.retention);
        let mut removed = Vec::with_capacity(excess);

        for path in segments.into_iter().take(excess) {
            fs::remove_file(&path).map_err(|e| Error::storage(&path, e))?;
            internal::debug("ROTATION", &format!("Pruned segment: {}", path.display()));
            removed.push(path);
        }

        Ok(removed)
    }
}
