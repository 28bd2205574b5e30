//! Level macros. Unlike the methods they also capture the enclosing function name.
//!
//! ```
//! # let logger = sluglog::Logger::builder("app").build();
//! sluglog::info!(logger, "ready"; build = 42, mode = "fast");
//! sluglog::warning!(logger, format!("retry {}", 3));
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:ident, $logger:expr, $msg:expr $(; $($key:ident = $value:expr),+ $(,)?)?) => {
        $logger.emit(
            $crate::Level::$level,
            ::core::convert::AsRef::<str>::as_ref(&$msg),
            $crate::fields!($($($key = $value),+)?),
            $crate::__call_site!(),
        )
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::__log!(Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__log!(Info, $($arg)+) };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => { $crate::__log!(Success, $($arg)+) };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => { $crate::__log!(Warning, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__log!(Error, $($arg)+) };
}

#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => { $crate::__log!(Critical, $($arg)+) };
}
