//! One log call, captured just long enough to be rendered for both sinks.

use super::Fields;
use crate::level::Level;
use chrono::{DateTime, FixedOffset};
use std::panic::Location;
use std::path::Path;

/// Where the emit call was made. Every part is best-effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallSite {
    pub file: Option<&'static str>,
    pub function: Option<&'static str>,
    pub line: Option<u32>,
}

impl CallSite {
    #[must_use]
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file: Some(file),
            function: Some(function),
            line: Some(line),
        }
    }

    /// `#[track_caller]` knows file and line but not the enclosing function.
    #[must_use]
    pub const fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: Some(location.file()),
            function: None,
            line: Some(location.line()),
        }
    }

    /// Only the basename is rendered; full source paths make lines too long to scan.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.file
            .map(|f| {
                Path::new(f)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or(f)
            })
            .unwrap_or("?")
    }

    /// `a::b::handler` renders as `handler`.
    #[must_use]
    pub fn function_name(&self) -> &str {
        self.function
            .map(|f| f.rsplit("::").next().unwrap_or(f))
            .unwrap_or("?")
    }
}

/// A single event: timestamp already converted to the display zone.
#[derive(Debug, Clone)]
pub struct LogEvent<'a> {
    pub timestamp: DateTime<FixedOffset>,
    pub level: Level,
    pub logger: &'a str,
    pub call_site: CallSite,
    pub message: &'a str,
    pub fields: &'a Fields,
}

/// Name of the function enclosing the macro invocation, without the helper suffix.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Full call site of the macro invocation.
#[doc(hidden)]
#[macro_export]
macro_rules! __call_site {
    () => {
        $crate::fmt::CallSite::new(file!(), $crate::__function_name!(), line!())
    };
}
