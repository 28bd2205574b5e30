//! Utility functions for the CLI.

use crate::config::Config;
use crate::error::Error;
use crate::fmt::Fields;
use crate::registry::Registry;
use std::path::Path;

/// Config file plus environment, with `--root` taking precedence over both.
///
/// # Errors
/// Propagates config loading and validation errors.
pub fn build_registry(root: Option<&Path>) -> Result<Registry, Error> {
    let mut config = Config::load()?;
    if let Some(root) = root {
        config.general.log_root = Some(root.display().to_string());
    }
    Registry::new(&config)
}

/// Splits `key=value` at the first `=`; the value may itself contain `=`.
#[must_use]
pub fn parse_field(raw: &str) -> Option<(&str, &str)> {
    let (key, value) = raw.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Collects `key=value` arguments in order, returning the first malformed one on failure.
///
/// # Errors
/// Returns the offending argument when it has no `=` or an empty key.
pub fn parse_fields(raw: &[String]) -> Result<Fields, String> {
    let mut fields = Fields::new();
    for arg in raw {
        let (key, value) = parse_field(arg).ok_or_else(|| arg.clone())?;
        fields.push(key, value);
    }
    Ok(fields)
}
