//! Handler trait for log output sinks

use super::{attr::Attr, error::Result, log_level::LogLevel, record::Record};
use std::sync::Arc;

pub type HandlerRef = Arc<dyn Handler>;

/// A sink that filters and renders records
///
/// Handlers are immutable with respect to their scoping state:
/// `with_attrs` and `with_group` return a new handler that shares the
/// underlying destination and leave the receiver untouched.
///
/// Callers check `enabled` before `handle`. A handler that receives a record
/// below its threshold may render it anyway.
pub trait Handler: Send + Sync {
    fn enabled(&self, level: LogLevel) -> bool;

    /// Render and emit a record, returning the first write failure
    fn handle(&self, record: &Record) -> Result<()>;

    fn with_attrs(&self, attrs: &[Attr]) -> HandlerRef;

    fn with_group(&self, name: &str) -> HandlerRef;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
