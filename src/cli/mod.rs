//! CLI module for sluglog.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;
pub mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Success,
    #[value(alias = "warn")]
    Warning,
    Error,
    Critical,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Success => Self::Success,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
            LogLevel::Critical => Self::Critical,
        }
    }
}

/// sluglog - Write leveled log lines to the console and rotating files.
#[derive(Parser)]
#[command(name = "sluglog", version, about = "Write leveled log lines to the console and rotating files")]
pub struct Cli {
    /// Root directory for log files (overrides config and LOG_ROOT/LOG_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log a message.
    Log {
        /// Logger name
        name: String,
        /// Log level
        #[arg(value_enum)]
        level: LogLevel,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
        /// File name override (defaults to the logger name)
        #[arg(short, long)]
        file: Option<String>,
        /// Context field as key=value (repeatable, order preserved)
        #[arg(long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },
    /// Print the log file path for a logger.
    Path {
        /// Logger name
        name: String,
        /// File name override
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Print the slug of a name.
    Slug {
        /// Text to slugify
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Emit a fixed set of sync and async lines at every level.
    Demo {
        /// Logger name
        #[arg(default_value = "test_logger")]
        name: String,
    },
}

pub use commands::{cmd_demo, cmd_log, cmd_path, cmd_slug};
pub use util::{build_registry, parse_field};
