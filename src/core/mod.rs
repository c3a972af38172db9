//! Core types: levels, records, attributes and the handler contract

pub mod attr;
pub mod error;
pub mod handler;
pub mod level_var;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod record;
pub mod timestamp;
pub mod writer;

pub use attr::{attrs_from_pairs, Attr, Value};
pub use error::{LoggerError, Result};
pub use handler::{Handler, HandlerRef};
pub use level_var::{LevelVar, Leveler};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use options::{HandlerOptions, ReplaceAttr};
pub use record::{make_record, Record, Source};
pub use timestamp::TimestampFormat;
pub use writer::{MultiWriter, SharedWriter};
