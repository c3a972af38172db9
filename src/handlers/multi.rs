//! Fan-out handler

use crate::core::{Attr, Handler, HandlerRef, LogLevel, Record, Result};
use std::sync::Arc;

/// Sends each record to an ordered list of child handlers
///
/// - `enabled` is the conjunction of the children: one restrictive child
///   silences the whole group for that level. An empty list is enabled.
/// - `with_attrs` / `with_group` apply element-wise and keep child order.
/// - `handle` re-checks each child's `enabled` and skips disabled ones.
///
/// Known limitation: `handle` stops at the first child that fails and
/// returns its error. Children after it do not see the record, and children
/// before it have already written theirs.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use vlog::core::{Handler, HandlerOptions, LogLevel};
/// use vlog::handlers::{MultiHandler, PrettyHandler};
///
/// let multi = MultiHandler::new(vec![
///     Arc::new(PrettyHandler::with_options(HandlerOptions::new().level(LogLevel::INFO))),
///     Arc::new(PrettyHandler::with_options(HandlerOptions::new().level(LogLevel::WARN))),
/// ]);
/// assert!(!multi.enabled(LogLevel::INFO));
/// assert!(multi.enabled(LogLevel::WARN));
/// ```
#[derive(Clone, Default)]
pub struct MultiHandler {
    handlers: Vec<HandlerRef>,
}

impl MultiHandler {
    pub fn new(handlers: Vec<HandlerRef>) -> Self {
        Self { handlers }
    }

    pub fn handlers(&self) -> &[HandlerRef] {
        &self.handlers
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Handler for MultiHandler {
    fn enabled(&self, level: LogLevel) -> bool {
        self.handlers.iter().all(|h| h.enabled(level))
    }

    fn handle(&self, record: &Record) -> Result<()> {
        for handler in &self.handlers {
            if !handler.enabled(record.level()) {
                continue;
            }
            handler.handle(record)?;
        }
        Ok(())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> HandlerRef {
        Arc::new(MultiHandler {
            handlers: self.handlers.iter().map(|h| h.with_attrs(attrs)).collect(),
        })
    }

    fn with_group(&self, name: &str) -> HandlerRef {
        Arc::new(MultiHandler {
            handlers: self.handlers.iter().map(|h| h.with_group(name)).collect(),
        })
    }

    /// Flushes every child, returning the first failure after trying all
    fn flush(&self) -> Result<()> {
        let mut first_err = None;
        for handler in &self.handlers {
            if let Err(e) = handler.flush() {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    fn name(&self) -> &str {
        "multi"
    }
}
