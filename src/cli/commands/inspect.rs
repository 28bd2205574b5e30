//! Read-only helpers for finding where a logger writes.

use crate::internal;
use crate::path::ResolvedName;
use crate::registry::Registry;
use crate::slug::slugify;
use std::process::ExitCode;

/// Prints the active segment path without creating anything.
#[must_use]
pub fn cmd_path(registry: &Registry, name: &str, file: Option<&str>) -> ExitCode {
    let resolved = ResolvedName::new(Some(name), file);
    println!("{}", registry.resolver().path_for(&resolved).display());
    ExitCode::SUCCESS
}

#[must_use]
pub fn cmd_slug(text: &[String]) -> ExitCode {
    let slug = slugify(&text.join(" "));
    if slug.is_empty() {
        internal::warn("CLI", "Input has no usable characters; loggers would use 'default'");
        return ExitCode::FAILURE;
    }
    println!("{slug}");
    ExitCode::SUCCESS
}
