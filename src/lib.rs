//! # vlog
//!
//! A structured-logging facade. Records carry a timestamp, a level, a message,
//! the call site and ordered key/value attributes, and are routed through
//! composable handlers.
//!
//! ## Features
//!
//! - **Pretty console output**: one colorized line per record on stderr
//! - **Structured output**: line-delimited JSON to any writer or file
//! - **Fan-out**: `MultiHandler` combines sinks with independent thresholds
//! - **Scoping**: `with_attrs` / `with_group` derive handlers without mutating
//! - **Runtime level control**: `LevelVar` changes take effect immediately
//!
//! ## Example
//!
//! ```
//! use vlog::prelude::*;
//!
//! let logger = Logger::builder()
//!     .handler(PrettyHandler::new())
//!     .build()
//!     .with(&[&"service", &"billing"]);
//!
//! logger.info("invoice created", &[&"id", &1042]);
//! ```

pub mod adapter;
pub mod core;
pub mod facade;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Attr, Handler, HandlerOptions, HandlerRef, LevelVar, Leveler, LogLevel, Logger,
        LoggerBuilder, LoggerError, LoggerMetrics, Record, Result, SharedWriter, Source,
        TimestampFormat, Value,
    };
    pub use crate::handlers::{JsonHandler, MultiHandler, PrettyHandler};
}

#[cfg(feature = "log-bridge")]
pub use adapter::LogBridge;
pub use adapter::level_from_host_ordinal;
pub use core::{
    attrs_from_pairs, make_record, Attr, Handler, HandlerOptions, HandlerRef, LevelVar, Leveler,
    LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics, MultiWriter, Record, ReplaceAttr,
    Result, SharedWriter, Source, TimestampFormat, Value,
};
pub use facade::{
    configure_default, configure_file, debugf, default_logger, errorf, fatalf, infof, level,
    level_var, noticef, reset, set_default, set_level, tracef, warnf,
};
pub use handlers::{JsonHandler, MultiHandler, PrettyHandler};
