//! `sluglog` - per-name loggers with a colored console and rotating log files.
//!
//! A [`Registry`] hands out one [`Logger`] per `(name, file)` pair. Each logger
//! writes every line to the console (colored by level) and to
//! `<root>/<name-slug>/<file-slug>.log` (plain), rotating that file daily and
//! keeping a bounded number of retired segments.
//!
//! # Example
//!
//! ```
//! use sluglog::{Config, Registry, fields};
//!
//! # let tmp = tempfile::TempDir::new().unwrap();
//! let mut config = Config::default();
//! config.general.log_root = Some(tmp.path().display().to_string());
//! config.console.enabled = false;
//!
//! let registry = Registry::new(&config).unwrap();
//! let logger = registry.get_logger(Some("Café Logger"), None).unwrap();
//!
//! logger.info("ready", fields! { build = 42 });
//! sluglog::warning!(logger, "disk almost full"; used_pct = 93);
//!
//! assert!(logger.file_path().unwrap().ends_with("cafe_logger/cafe_logger.log"));
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `sluglog` command-line tool

pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod path;
pub mod registry;
pub mod rotation;
pub mod slug;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use fmt::{CallSite, Color, Fields, LogEvent, render_console, render_file};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use output::{ConsoleTarget, FileOutput, Output, OutputKind, TerminalOutput};
pub use path::{PathResolver, ResolvedName};
pub use registry::Registry;
pub use rotation::{Clock, ManualClock, RollingFile, RotationPolicy, SystemClock, Zone};
pub use slug::slugify;
