//! Both sinks share one line layout; the console variant only adds a level color
//! around the whole line.
//!
//! `2024-05-01 12:00:00.123 | INFO     | app:main.rs:run:42 - ready | build=42`

use super::color::{Color, colorize};
use super::event::LogEvent;
use std::fmt::Write;

/// Millisecond precision, no zone suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// The level column is left-justified to this width.
pub const LEVEL_WIDTH: usize = 8;

/// Renders `event` with or without the level color.
#[must_use]
pub fn render(event: &LogEvent<'_>, colored: bool) -> String {
    let mut line = String::with_capacity(96 + event.message.len());

    // Writing into a String cannot fail.
    let _ = write!(
        line,
        "{} | {:<width$} | {}:{}:{}:{} - {}",
        event.timestamp.format(TIMESTAMP_FORMAT),
        event.level.as_str(),
        event.logger,
        event.call_site.file_name(),
        event.call_site.function_name(),
        event
            .call_site
            .line
            .map_or_else(|| "?".to_string(), |l| l.to_string()),
        event.message,
        width = LEVEL_WIDTH,
    );

    if !event.fields.is_empty() {
        let _ = write!(line, " | {}", event.fields);
    }

    if colored {
        colorize(&line, Color::for_level(event.level))
    } else {
        line
    }
}

/// Colored console line.
#[must_use]
pub fn render_console(event: &LogEvent<'_>) -> String {
    render(event, true)
}

/// Plain file line, greppable and free of escape codes.
#[must_use]
pub fn render_file(event: &LogEvent<'_>) -> String {
    render(event, false)
}
