//! The facade application code calls. One logger owns its sinks behind a single
//! lock: stamping the time, rotating, and writing both sinks happen inside it, so
//! lines from one caller stay in program order in both sinks and no line is ever
//! torn across segments.

mod builder;
mod macros;

pub use builder::{FileBuilder, LoggerBuilder, TerminalBuilder};

use crate::fmt::{CallSite, Fields, LogEvent};
use crate::internal;
use crate::level::Level;
use crate::output::{Output, OutputKind};
use crate::rotation::{Clock, Zone};
use std::future::Future;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub struct Logger {
    name: String,
    min_level: Level,
    zone: Zone,
    clock: Arc<dyn Clock>,
    file_path: Option<PathBuf>,
    outputs: Mutex<Vec<Box<dyn Output>>>,
    /// Write failures are reported once per sink kind, then suppressed.
    failures_reported: [AtomicBool; OutputKind::COUNT],
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("min_level", &self.min_level)
            .field("zone", &self.zone)
            .field("file_path", &self.file_path)
            .field("outputs", &self.output_count())
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// `name` is rendered as-is in every line; the registry passes the slug.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    /// Core dispatch. Never fails: a sink error is reported once through the
    /// internal channel and the line is dropped for that sink.
    pub fn emit(&self, level: Level, msg: &str, fields: Fields, call_site: CallSite) {
        if level < self.min_level {
            return;
        }

        let mut outputs = self.lock_outputs();
        let event = LogEvent {
            timestamp: self.zone.convert(self.clock.now()),
            level,
            logger: &self.name,
            call_site,
            message: msg,
            fields: &fields,
        };

        for output in outputs.iter_mut() {
            if let Err(e) = output.write(&event) {
                self.report_failure(output.kind(), &e);
            }
        }
    }

    /// Emits at `level`, recording the caller's file and line.
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str, fields: Fields) {
        self.emit(level, msg, fields, CallSite::from_location(Location::caller()));
    }

    #[track_caller]
    pub fn debug(&self, msg: &str, fields: Fields) {
        self.log(Level::Debug, msg, fields);
    }

    #[track_caller]
    pub fn info(&self, msg: &str, fields: Fields) {
        self.log(Level::Info, msg, fields);
    }

    #[track_caller]
    pub fn success(&self, msg: &str, fields: Fields) {
        self.log(Level::Success, msg, fields);
    }

    #[track_caller]
    pub fn warning(&self, msg: &str, fields: Fields) {
        self.log(Level::Warning, msg, fields);
    }

    #[track_caller]
    pub fn error(&self, msg: &str, fields: Fields) {
        self.log(Level::Error, msg, fields);
    }

    #[track_caller]
    pub fn critical(&self, msg: &str, fields: Fields) {
        self.log(Level::Critical, msg, fields);
    }

    /// Awaitable form of [`log`](Self::log) for async call sites.
    ///
    /// The call site is captured here; the write happens inline on first poll and
    /// the future completes without suspending, so awaited calls keep program order.
    #[track_caller]
    pub fn alog<'a>(
        &'a self,
        level: Level,
        msg: &'a str,
        fields: Fields,
    ) -> impl Future<Output = ()> + Send + 'a {
        let call_site = CallSite::from_location(Location::caller());
        async move { self.emit(level, msg, fields, call_site) }
    }

    #[track_caller]
    pub fn adebug<'a>(&'a self, msg: &'a str, fields: Fields) -> impl Future<Output = ()> + Send + 'a {
        self.alog(Level::Debug, msg, fields)
    }

    #[track_caller]
    pub fn ainfo<'a>(&'a self, msg: &'a str, fields: Fields) -> impl Future<Output = ()> + Send + 'a {
        self.alog(Level::Info, msg, fields)
    }

    #[track_caller]
    pub fn asuccess<'a>(&'a self, msg: &'a str, fields: Fields) -> impl Future<Output = ()> + Send + 'a {
        self.alog(Level::Success, msg, fields)
    }

    #[track_caller]
    pub fn awarning<'a>(&'a self, msg: &'a str, fields: Fields) -> impl Future<Output = ()> + Send + 'a {
        self.alog(Level::Warning, msg, fields)
    }

    #[track_caller]
    pub fn aerror<'a>(&'a self, msg: &'a str, fields: Fields) -> impl Future<Output = ()> + Send + 'a {
        self.alog(Level::Error, msg, fields)
    }

    #[track_caller]
    pub fn acritical<'a>(&'a self, msg: &'a str, fields: Fields) -> impl Future<Output = ()> + Send + 'a {
        self.alog(Level::Critical, msg, fields)
    }

    /// Flushes every sink.
    ///
    /// # Errors
    /// Returns the first error encountered; later sinks are still flushed.
    pub fn flush(&self) -> Result<(), crate::Error> {
        let mut first = None;
        for output in self.lock_outputs().iter_mut() {
            if let Err(e) = output.flush() {
                first.get_or_insert(e);
            }
        }
        first.map_or(Ok(()), Err)
    }

    /// Slug the logger renders under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    #[must_use]
    pub const fn zone(&self) -> Zone {
        self.zone
    }

    /// Active segment path, when a file sink is attached.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    #[must_use]
    pub fn output_count(&self) -> usize {
        self.lock_outputs().len()
    }

    /// Number of attached sinks of `kind`.
    #[must_use]
    pub fn outputs_of(&self, kind: OutputKind) -> usize {
        self.lock_outputs()
            .iter()
            .filter(|o| o.kind() == kind)
            .count()
    }

    /// A panic inside a custom sink must not disable the logger for everyone else.
    fn lock_outputs(&self) -> MutexGuard<'_, Vec<Box<dyn Output>>> {
        self.outputs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a write failure of a `kind` sink has already been reported.
    #[must_use]
    pub fn failure_reported(&self, kind: OutputKind) -> bool {
        self.failures_reported[kind.index()].load(Ordering::Relaxed)
    }

    fn report_failure(&self, kind: OutputKind, err: &crate::Error) {
        if !self.failures_reported[kind.index()].swap(true, Ordering::Relaxed) {
            internal::error(
                "LOGGER",
                &format!(
                    "Logger '{}' failed to write to {kind:?} sink: {err}; further write failures are suppressed",
                    self.name
                ),
            );
        }
    }
}
