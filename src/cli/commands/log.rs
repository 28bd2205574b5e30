//! Emits a single line into the same files the application writes, for shell scripts.

use crate::cli::util::parse_fields;
use crate::fmt::CallSite;
use crate::internal;
use crate::level::Level;
use crate::registry::Registry;
use std::process::ExitCode;

#[must_use]
pub fn cmd_log(
    registry: &Registry,
    name: &str,
    file: Option<&str>,
    level: Level,
    message: &[String],
    raw_fields: &[String],
) -> ExitCode {
    let fields = match parse_fields(raw_fields) {
        Ok(fields) => fields,
        Err(bad) => {
            internal::error("CLI", &format!("Invalid field (expected key=value): {bad}"));
            return ExitCode::FAILURE;
        }
    };

    let logger = match registry.get_logger(Some(name), file) {
        Ok(logger) => logger,
        Err(e) => {
            internal::error("CLI", &format!("Cannot set up logger '{name}': {e}"));
            return ExitCode::FAILURE;
        }
    };

    logger.emit(
        level,
        &message.join(" "),
        fields,
        CallSite::new("cli", "log", 0),
    );

    match logger.flush() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLI", &format!("Flush failed: {e}"));
            ExitCode::FAILURE
        }
    }
}
