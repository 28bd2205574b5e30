//! Every logger gets its own directory under the log root so rotation state
//! (active segment plus retired segments) never mixes between loggers.

use crate::error::Error;
use crate::internal;
use crate::slug::segment_or_default;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the active segment.
pub const LOG_EXTENSION: &str = "log";

/// Logger name and file base after slugification and default substitution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedName {
    /// Slug of the logger name, also the directory name.
    pub logger: String,
    /// Slug of the file override, or the logger slug when none was given.
    pub file_base: String,
}

impl ResolvedName {
    #[must_use]
    pub fn new(name: Option<&str>, file_override: Option<&str>) -> Self {
        let logger = segment_or_default(name);
        let file_base = match file_override {
            Some(raw) => segment_or_default(Some(raw)),
            None => logger.clone(),
        };
        Self { logger, file_base }
    }
}

/// Maps logical names to `<root>/<logger>/<file_base>.log`.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Pure path computation, no filesystem access.
    #[must_use]
    pub fn path_for(&self, name: &ResolvedName) -> PathBuf {
        self.root
            .join(&name.logger)
            .join(format!("{}.{LOG_EXTENSION}", name.file_base))
    }

    /// Computes the log path and makes sure its directory exists.
    ///
    /// Relative roots are anchored at the current directory so the returned path is absolute.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] when the directory cannot be created.
    pub fn resolve(&self, name: Option<&str>, file_override: Option<&str>) -> Result<PathBuf, Error> {
        self.resolve_name(&ResolvedName::new(name, file_override))
    }

    /// Same as [`resolve`](Self::resolve) for an already-sanitized name.
    ///
    /// # Errors
    /// Returns [`Error::Storage`] when the directory cannot be created.
    pub fn resolve_name(&self, name: &ResolvedName) -> Result<PathBuf, Error> {
        let path = absolute(&self.path_for(name))?;

        if let Some(dir) = path.parent() {
            if !dir.is_dir() {
                fs::create_dir_all(dir).map_err(|e| {
                    internal::error(
                        "PATH",
                        &format!("Failed to create directory {}: {e}", dir.display()),
                    );
                    Error::storage(dir, e)
                })?;
                internal::debug("PATH", &format!("Created directory: {}", dir.display()));
            }
        }

        Ok(path)
    }
}

fn absolute(path: &Path) -> Result<PathBuf, Error> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|e| Error::storage(path, e))
}
