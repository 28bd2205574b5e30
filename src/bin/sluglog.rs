//! `sluglog` command-line tool.
//!
//! Usage:
//!   sluglog log <name> <level> <message...> [--file F] [--field k=v]...
//!   sluglog path <name> [--file F]
//!   sluglog slug <text...>
//!   sluglog demo [name]
//!
//! `--root <dir>` overrides the log root for any command.

use clap::Parser;
use sluglog::cli::{Cli, Command, build_registry, cmd_demo, cmd_log, cmd_path, cmd_slug};
use sluglog::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Slugging needs no configuration at all.
    if let Command::Slug { text } = &cli.command {
        return cmd_slug(text);
    }

    let registry = match build_registry(cli.root.as_deref()) {
        Ok(registry) => registry,
        Err(e) => {
            internal::error("CLI", &format!("Error loading config: {e}"));
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Log {
            name,
            level,
            message,
            file,
            fields,
        } => cmd_log(&registry, &name, file.as_deref(), level.into(), &message, &fields),
        Command::Path { name, file } => cmd_path(&registry, &name, file.as_deref()),
        Command::Demo { name } => cmd_demo(&registry, &name),
        Command::Slug { text } => cmd_slug(&text),
    }
}
