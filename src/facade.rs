//! Process-wide default logger
//!
//! The default logger starts as a pretty handler on stderr whose threshold is
//! the global [`LevelVar`] (initially INFO). [`configure_default`] and
//! [`configure_file`] replace it with a pretty + JSON fan-out; a failed
//! reconfiguration leaves the previous logger in place.
//!
//! The per-level functions check `enabled` before a record is built, so a
//! disabled call reads the level holder and returns without allocating.
//!
//! # Example
//!
//! ```
//! use vlog::facade;
//! use vlog::LogLevel;
//!
//! facade::set_level(LogLevel::WARN);
//! facade::info("not shown", &[]);
//! facade::warn("disk almost full", &[&"free_mb", &512]);
//! facade::set_level(LogLevel::INFO);
//! ```

use crate::core::{
    HandlerOptions, LevelVar, LogLevel, Logger, LoggerError, MultiWriter, Result, SharedWriter,
};
use crate::handlers::{JsonHandler, PrettyHandler};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt;
use std::path::Path;

static LEVEL: Lazy<LevelVar> = Lazy::new(|| LevelVar::new(LogLevel::INFO));

static DEFAULT: Lazy<RwLock<Logger>> = Lazy::new(|| RwLock::new(initial_logger()));

fn console_handler() -> PrettyHandler {
    PrettyHandler::with_options(HandlerOptions::new().level(&*LEVEL))
}

fn initial_logger() -> Logger {
    Logger::from_handler(console_handler())
}

/// Options used for the structured sink when none are given
pub fn default_structured_options() -> HandlerOptions {
    HandlerOptions::new().level(LogLevel::DEBUG).add_source(true)
}

/// Shared holder read by the default console handler
pub fn level_var() -> LevelVar {
    LEVEL.clone()
}

pub fn level() -> LogLevel {
    LEVEL.level()
}

pub fn set_level(level: LogLevel) {
    LEVEL.set(level);
}

pub fn default_logger() -> Logger {
    DEFAULT.read().clone()
}

pub fn set_default(logger: Logger) {
    *DEFAULT.write() = logger;
}

/// Restore the start-up configuration: console only, INFO threshold
pub fn reset() {
    LEVEL.set(LogLevel::INFO);
    set_default(initial_logger());
}

/// Install console + JSON output to `writers`
///
/// With more than one writer every JSON line goes to each of them in order.
/// Requires at least one writer; on error the current logger stays active.
pub fn configure_default(
    writers: Vec<SharedWriter>,
    options: Option<HandlerOptions>,
) -> Result<()> {
    let mut writers = writers;
    let writer = match writers.len() {
        0 => {
            return Err(LoggerError::config(
                "facade",
                "at least one writer is required",
            ))
        }
        1 => writers.remove(0),
        _ => SharedWriter::new(MultiWriter::new(writers)),
    };
    let options = options.unwrap_or_else(default_structured_options);
    install(JsonHandler::new(writer, options));
    Ok(())
}

/// Install console + JSON output appended to the file at `path`
pub fn configure_file<P: AsRef<Path>>(path: P, options: Option<HandlerOptions>) -> Result<()> {
    let options = options.unwrap_or_else(default_structured_options);
    let json = JsonHandler::open(path, options)?;
    install(json);
    Ok(())
}

fn install(json: JsonHandler) {
    let logger = Logger::builder()
        .handler(console_handler())
        .handler(json)
        .build();
    set_default(logger);
}

/// Flush every handler of the default logger
pub fn flush() -> Result<()> {
    default_logger().flush()
}

#[inline]
fn enabled_logger(level: LogLevel) -> Option<Logger> {
    let guard = DEFAULT.read();
    if !guard.enabled(level) {
        return None;
    }
    Some(guard.clone())
}

#[track_caller]
pub fn log(level: LogLevel, message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
    if let Some(logger) = enabled_logger(level) {
        logger.log(level, message, pairs);
    }
}

#[track_caller]
pub fn log_fmt(level: LogLevel, args: fmt::Arguments<'_>) {
    if let Some(logger) = enabled_logger(level) {
        logger.log_fmt(level, args);
    }
}

#[track_caller]
pub fn trace(message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
    log(LogLevel::TRACE, message, pairs);
}

#[track_caller]
pub fn debug(message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
    log(LogLevel::DEBUG, message, pairs);
}

#[track_caller]
pub fn info(message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
    log(LogLevel::INFO, message, pairs);
}

#[track_caller]
pub fn notice(message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
    log(LogLevel::NOTICE, message, pairs);
}

#[track_caller]
pub fn warn(message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
    log(LogLevel::WARN, message, pairs);
}

#[track_caller]
pub fn error(message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
    log(LogLevel::ERROR, message, pairs);
}

#[track_caller]
pub fn fatal(message: impl Into<String>, pairs: &[&dyn fmt::Display]) {
    log(LogLevel::FATAL, message, pairs);
}

#[track_caller]
pub fn tracef(args: fmt::Arguments<'_>) {
    log_fmt(LogLevel::TRACE, args);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    log_fmt(LogLevel::DEBUG, args);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    log_fmt(LogLevel::INFO, args);
}

#[track_caller]
pub fn noticef(args: fmt::Arguments<'_>) {
    log_fmt(LogLevel::NOTICE, args);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    log_fmt(LogLevel::WARN, args);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    log_fmt(LogLevel::ERROR, args);
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) {
    log_fmt(LogLevel::FATAL, args);
}
