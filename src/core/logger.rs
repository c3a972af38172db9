//! Logger value
//!
//! A `Logger` pairs a root handler with shared metrics. It is cheap to
//! clone and every convenience call checks `enabled` before building the
//! record, so a disabled call costs one level comparison per handler.

use super::{
    attr::{attrs_from_pairs, Attr},
    error::Result,
    handler::{Handler, HandlerRef},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    record::{make_record, Record},
};
use crate::handlers::{MultiHandler, PrettyHandler};
use chrono::Local;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

#[derive(Clone)]
pub struct Logger {
    handler: HandlerRef,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    #[must_use]
    pub fn new(handler: HandlerRef) -> Self {
        Self {
            handler,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    #[must_use]
    pub fn from_handler<H: Handler + 'static>(handler: H) -> Self {
        Self::new(Arc::new(handler))
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use vlog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .handler(PrettyHandler::new())
    ///     .handler(PrettyHandler::with_options(HandlerOptions::new().level(LogLevel::WARN)))
    ///     .build();
    /// assert!(!logger.enabled(LogLevel::INFO));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn handler(&self) -> &HandlerRef {
        &self.handler
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.handler.enabled(level)
    }

    /// Log a message with flat `key, value, ...` attribute pairs
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
        if !self.enabled(level) {
            return;
        }
        let record = make_record(level, message, pairs);
        self.dispatch(&record);
    }

    /// Log a message with typed attributes
    #[track_caller]
    pub fn log_attrs(&self, level: LogLevel, message: impl Into<String>, attrs: Vec<Attr>) {
        if !self.enabled(level) {
            return;
        }
        let record =
            Record::new(Local::now(), level, message, Some(Location::caller())).with_attrs(attrs);
        self.dispatch(&record);
    }

    /// Log a preformatted message; formatting only happens when enabled
    #[track_caller]
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let record = make_record(level, fmt::format(args), &[]);
        self.dispatch(&record);
    }

    /// Hand a record to the root handler, returning its error
    pub fn handle(&self, record: &Record) -> Result<()> {
        match self.handler.handle(record) {
            Ok(()) => {
                self.metrics.record_handled();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_failed();
                Err(e)
            }
        }
    }

    fn dispatch(&self, record: &Record) {
        if let Err(e) = self.handle(record) {
            eprintln!("[LOGGER ERROR] handler '{}' failed: {}", self.handler.name(), e);
        }
    }

    #[track_caller]
    pub fn trace(&self, message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
        self.log(LogLevel::TRACE, message, pairs);
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
        self.log(LogLevel::DEBUG, message, pairs);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
        self.log(LogLevel::INFO, message, pairs);
    }

    #[track_caller]
    pub fn notice(&self, message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
        self.log(LogLevel::NOTICE, message, pairs);
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
        self.log(LogLevel::WARN, message, pairs);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
        self.log(LogLevel::ERROR, message, pairs);
    }

    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
        self.log(LogLevel::FATAL, message, pairs);
    }

    /// Derive a logger whose records carry the given pairs
    #[must_use]
    pub fn with(&self, pairs: &[&dyn fmt::Display]) -> Logger {
        self.with_attrs(&attrs_from_pairs(pairs))
    }

    #[must_use]
    pub fn with_attrs(&self, attrs: &[Attr]) -> Logger {
        if attrs.is_empty() {
            return self.clone();
        }
        Logger {
            handler: self.handler.with_attrs(attrs),
            metrics: Arc::clone(&self.metrics),
        }
    }

    /// Derive a logger whose later attributes nest under `name`
    #[must_use]
    pub fn with_group(&self, name: &str) -> Logger {
        if name.is_empty() {
            return self.clone();
        }
        Logger {
            handler: self.handler.with_group(name),
            metrics: Arc::clone(&self.metrics),
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.handler.flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_handler(PrettyHandler::new())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("handler", &self.handler.name())
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Builder for Logger
///
/// No handler yields a pretty handler on stderr; one handler is used as is;
/// two or more are combined in a `MultiHandler` in the order given.
#[derive(Default)]
pub struct LoggerBuilder {
    handlers: Vec<HandlerRef>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    pub fn build(mut self) -> Logger {
        match self.handlers.len() {
            0 => Logger::default(),
            1 => Logger::new(self.handlers.remove(0)),
            _ => Logger::from_handler(MultiHandler::new(self.handlers)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HandlerOptions, LevelVar, LoggerError, SharedWriter};
    use crate::handlers::testing::Capture;
    use crate::handlers::JsonHandler;

    fn pretty_logger(level: impl Into<crate::core::Leveler>) -> (Logger, Capture) {
        let capture = Capture::default();
        let handler = PrettyHandler::with_options(HandlerOptions::new().level(level))
            .with_writer(SharedWriter::new(capture.clone()))
            .with_colors(false);
        (Logger::from_handler(handler), capture)
    }

    struct Failing;

    impl Handler for Failing {
        fn enabled(&self, _level: LogLevel) -> bool {
            true
        }

        fn handle(&self, _record: &Record) -> Result<()> {
            Err(LoggerError::handler("failing", "refused"))
        }

        fn with_attrs(&self, _attrs: &[Attr]) -> HandlerRef {
            Arc::new(Failing)
        }

        fn with_group(&self, _name: &str) -> HandlerRef {
            Arc::new(Failing)
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_disabled_levels_produce_nothing() {
        let (logger, capture) = pretty_logger(LogLevel::WARN);
        logger.info("hidden", &[]);
        logger.warn("shown", &[]);
        assert_eq!(capture.lines().len(), 1);
        assert!(capture.contents().contains("shown"));
        assert_eq!(logger.metrics().total_handled(), 1);
    }

    #[test]
    fn test_dynamic_level_applies_immediately() {
        let var = LevelVar::new(LogLevel::INFO);
        let (logger, capture) = pretty_logger(&var);

        var.set(LogLevel::ERROR);
        logger.info("quiet", &[]);
        logger.error("loud", &[]);

        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("loud"));
    }

    #[test]
    fn test_with_derives_without_touching_parent() {
        let (logger, capture) = pretty_logger(LogLevel::DEBUG);
        let child = logger.with(&[&"req", &42]).with_group("db");
        child.info("query", &[&"rows", &3]);
        logger.info("plain", &[]);

        let lines = capture.lines();
        assert!(lines[0].ends_with("query req = 42 db.rows = 3"));
        assert!(lines[1].ends_with("plain"));
        assert_eq!(logger.metrics().total_handled(), 2);
    }

    #[test]
    fn test_log_fmt_formats_message() {
        let (logger, capture) = pretty_logger(LogLevel::DEBUG);
        logger.log_fmt(LogLevel::NOTICE, format_args!("{} of {}", 3, 5));
        assert!(capture.contents().contains("NOTICE 3 of 5"));
    }

    #[test]
    fn test_log_attrs_keeps_typed_values() {
        let capture = Capture::default();
        let logger = Logger::from_handler(JsonHandler::new(
            SharedWriter::new(capture.clone()),
            HandlerOptions::new(),
        ));
        logger.log_attrs(LogLevel::INFO, "typed", vec![Attr::new("n", 5), Attr::new("ok", true)]);

        let value: serde_json::Value = serde_json::from_str(&capture.contents()).unwrap();
        assert_eq!(value["n"], 5);
        assert_eq!(value["ok"], true);
    }

    #[test]
    fn test_handler_failure_is_counted() {
        let logger = Logger::from_handler(Failing);
        logger.error("dropped", &[]);
        assert_eq!(logger.metrics().failed_count(), 1);

        let record = make_record(LogLevel::ERROR, "direct", &[]);
        assert!(logger.handle(&record).is_err());
        assert_eq!(logger.metrics().failed_count(), 2);
    }

    #[test]
    fn test_builder_combines_handlers() {
        let logger = Logger::builder()
            .handler(PrettyHandler::with_options(HandlerOptions::new().level(LogLevel::INFO)))
            .handler(PrettyHandler::with_options(HandlerOptions::new().level(LogLevel::WARN)))
            .build();
        assert_eq!(logger.handler().name(), "multi");
        assert!(!logger.enabled(LogLevel::INFO));

        let single = Logger::builder().handler(Failing).build();
        assert_eq!(single.handler().name(), "failing");

        assert_eq!(Logger::builder().build().handler().name(), "pretty");
    }
}
