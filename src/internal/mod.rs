//! sluglog's own diagnostics: root fallbacks, directory creation, rotations, and
//! write failures. They are rendered with the same plain layout as file lines and
//! go to stderr, which stays usable when a logger's own sinks are what failed.
//!
//! The threshold is read once from `SLUGLOG_INTERNAL_LEVEL` (default `warning`)
//! unless [`init`] sets it first.

use crate::fmt::{CallSite, Fields, LogEvent, render_file};
use crate::level::Level;
use chrono::Utc;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::OnceLock;

/// Name under which internal diagnostics are rendered.
pub const INTERNAL_NAME: &str = "sluglog";

static THRESHOLD: OnceLock<Level> = OnceLock::new();

/// Sets the internal threshold. Only the first call (or the first log) takes effect.
pub fn init(level: Level) {
    let _ = THRESHOLD.set(level);
}

fn threshold() -> Level {
    *THRESHOLD.get_or_init(|| {
        std::env::var("SLUGLOG_INTERNAL_LEVEL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Level::Warning)
    })
}

/// Whether a message at `level` would be written.
#[must_use]
pub fn enabled(level: Level) -> bool {
    level >= threshold()
}

#[track_caller]
fn log(level: Level, scope: &'static str, msg: &str) {
    if !enabled(level) {
        return;
    }

    let location = Location::caller();
    let fields = Fields::new();
    let event = LogEvent {
        timestamp: Utc::now().fixed_offset(),
        level,
        logger: INTERNAL_NAME,
        call_site: CallSite {
            function: Some(scope),
            ..CallSite::from_location(location)
        },
        message: msg,
        fields: &fields,
    };

    // stderr may itself be closed; there is nowhere left to report that.
    let _ = writeln!(io::stderr().lock(), "{}", render_file(&event));
}

#[track_caller]
pub fn debug(scope: &'static str, msg: &str) {
    log(Level::Debug, scope, msg);
}

#[track_caller]
pub fn info(scope: &'static str, msg: &str) {
    log(Level::Info, scope, msg);
}

#[track_caller]
pub fn warn(scope: &'static str, msg: &str) {
    log(Level::Warning, scope, msg);
}

#[track_caller]
pub fn error(scope: &'static str, msg: &str) {
    log(Level::Error, scope, msg);
}
