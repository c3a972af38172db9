//! Logging macros for the default logger
//!
//! The plain macros take a message followed by flat `key, value` pairs; the
//! `f`-suffixed macros take `format!`-style arguments. Every macro reports
//! the file and line where it is invoked.
//!
//! # Examples
//!
//! ```
//! use vlog::{info, infof, warn};
//!
//! info!("server started", "port", 8080);
//!
//! let retries = 3;
//! warn!("upstream slow", "retries", retries, "host", "db-1");
//!
//! infof!("processed {} items in {}ms", 100, 42);
//! ```

/// Log at an explicit level with flat attribute pairs.
///
/// # Examples
///
/// ```
/// use vlog::{log, LogLevel};
/// log!(LogLevel::NOTICE, "config reloaded", "version", 7);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $msg:expr $(, $arg:expr)*) => {
        $crate::facade::log($level, $msg, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($msg:expr $(, $arg:expr)*) => {
        $crate::log!($crate::LogLevel::TRACE, $msg $(, $arg)*)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// use vlog::debug;
/// debug!("cache miss", "key", "user:42");
/// ```
#[macro_export]
macro_rules! debug {
    ($msg:expr $(, $arg:expr)*) => {
        $crate::log!($crate::LogLevel::DEBUG, $msg $(, $arg)*)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($msg:expr $(, $arg:expr)*) => {
        $crate::log!($crate::LogLevel::INFO, $msg $(, $arg)*)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($msg:expr $(, $arg:expr)*) => {
        $crate::log!($crate::LogLevel::NOTICE, $msg $(, $arg)*)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($msg:expr $(, $arg:expr)*) => {
        $crate::log!($crate::LogLevel::WARN, $msg $(, $arg)*)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// use vlog::error;
/// error!("payment failed", "order", 1042, "code", "card_declined");
/// ```
#[macro_export]
macro_rules! error {
    ($msg:expr $(, $arg:expr)*) => {
        $crate::log!($crate::LogLevel::ERROR, $msg $(, $arg)*)
    };
}

/// Log a fatal-level message. Does not terminate the process.
#[macro_export]
macro_rules! fatal {
    ($msg:expr $(, $arg:expr)*) => {
        $crate::log!($crate::LogLevel::FATAL, $msg $(, $arg)*)
    };
}

/// Log a formatted trace-level message.
#[macro_export]
macro_rules! tracef {
    ($($arg:tt)+) => {
        $crate::facade::tracef(::std::format_args!($($arg)+))
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::facade::debugf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted info-level message.
///
/// # Examples
///
/// ```
/// use vlog::infof;
/// infof!("listening on {}:{}", "0.0.0.0", 8080);
/// ```
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::facade::infof(::std::format_args!($($arg)+))
    };
}

/// Log a formatted notice-level message.
#[macro_export]
macro_rules! noticef {
    ($($arg:tt)+) => {
        $crate::facade::noticef(::std::format_args!($($arg)+))
    };
}

/// Log a formatted warning-level message.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::facade::warnf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted error-level message.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::facade::errorf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted fatal-level message.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::facade::fatalf(::std::format_args!($($arg)+))
    };
}
