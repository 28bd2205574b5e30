//! Console lines are tinted as a whole by level. The basic 8-color SGR palette is
//! used so the output reads correctly on any terminal theme, including ones without
//! true-color support.

use crate::level::Level;
use std::fmt;

/// Foreground colors from the standard ANSI palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    #[default]
    White,
}

impl Color {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// SGR foreground code (30-37 range).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
        }
    }

    /// Foreground escape sequence, `\x1b[3Nm`.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[{}m", self.code())
    }

    /// DEBUG=blue, INFO=green, SUCCESS=cyan, WARNING=yellow, ERROR=red, CRITICAL=magenta.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Debug => Self::Blue,
            Level::Info => Self::Green,
            Level::Success => Self::Cyan,
            Level::Warning => Self::Yellow,
            Level::Error => Self::Red,
            Level::Critical => Self::Magenta,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wraps `text` in `color` and a trailing reset.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}
