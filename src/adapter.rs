//! Level mapping for host logging frameworks
//!
//! A host framework's level enum maps onto [`LogLevel`] totally: every host
//! level lands on exactly one core level and anything unknown becomes WARN.

use crate::core::LogLevel;

/// Map a host framework ordinal to a core level
///
/// Host ordinals follow the common seven-step scale:
/// 0 trace, 1 debug, 2 info, 3 notice, 4 warn, 5 error, 6 fatal.
pub fn level_from_host_ordinal(ordinal: i32) -> LogLevel {
    match ordinal {
        0 => LogLevel::TRACE,
        1 => LogLevel::DEBUG,
        2 => LogLevel::INFO,
        3 => LogLevel::NOTICE,
        4 => LogLevel::WARN,
        5 => LogLevel::ERROR,
        6 => LogLevel::FATAL,
        _ => LogLevel::WARN,
    }
}

#[cfg(feature = "log-bridge")]
pub use bridge::LogBridge;

#[cfg(feature = "log-bridge")]
mod bridge {
    use crate::core::{Attr, LogLevel, Record};
    use crate::facade;
    use chrono::Local;

    impl From<log::Level> for LogLevel {
        fn from(level: log::Level) -> Self {
            match level {
                log::Level::Error => LogLevel::ERROR,
                log::Level::Warn => LogLevel::WARN,
                log::Level::Info => LogLevel::INFO,
                log::Level::Debug => LogLevel::DEBUG,
                log::Level::Trace => LogLevel::TRACE,
            }
        }
    }

    /// Routes records from the `log` crate into the default logger
    ///
    /// Records keep the `log` call site when it is known statically and carry
    /// their target as a `target` attribute.
    pub struct LogBridge;

    static BRIDGE: LogBridge = LogBridge;

    impl LogBridge {
        /// Install the bridge as the `log` crate's global logger
        pub fn init() -> Result<(), log::SetLoggerError> {
            log::set_logger(&BRIDGE).map(|()| log::set_max_level(log::LevelFilter::Trace))
        }

        pub(crate) fn convert(record: &log::Record<'_>) -> Record {
            let mut converted = Record::new(
                Local::now(),
                record.level().into(),
                record.args().to_string(),
                None,
            )
            .with_attrs([Attr::new("target", record.target())]);
            if let (Some(file), Some(line)) = (record.file_static(), record.line()) {
                converted = converted.with_static_source(file, line);
            }
            converted
        }
    }

    impl log::Log for LogBridge {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            facade::default_logger().enabled(metadata.level().into())
        }

        fn log(&self, record: &log::Record<'_>) {
            let logger = facade::default_logger();
            if !logger.enabled(record.level().into()) {
                return;
            }
            if let Err(e) = logger.handle(&LogBridge::convert(record)) {
                eprintln!("[LOGGER ERROR] log bridge failed: {}", e);
            }
        }

        fn flush(&self) {
            let _ = facade::flush();
        }
    }
}
