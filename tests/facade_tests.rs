//! Tests for the process-wide default logger
//!
//! The default logger is global state, so every test holds `SERIAL` and
//! resets the facade before returning.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use tempfile::TempDir;
use vlog::facade;
use vlog::prelude::*;

static SERIAL: Mutex<()> = Mutex::new(());

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Replace the default logger with a console handler on the global level
fn install_capture() -> Capture {
    let capture = Capture::default();
    let handler = PrettyHandler::with_options(HandlerOptions::new().level(facade::level_var()))
        .with_writer(SharedWriter::new(capture.clone()))
        .with_colors(false);
    facade::set_default(Logger::from_handler(handler));
    capture
}

#[test]
fn test_initial_level_is_info() {
    let _guard = SERIAL.lock();
    facade::reset();

    assert_eq!(facade::level(), LogLevel::INFO);
    assert!(facade::default_logger().enabled(LogLevel::INFO));
    assert!(!facade::default_logger().enabled(LogLevel::DEBUG));
}

#[test]
fn test_set_level_applies_immediately() {
    let _guard = SERIAL.lock();
    facade::reset();
    let capture = install_capture();

    facade::set_level(LogLevel::ERROR);
    facade::info("quiet", &[]);
    facade::error("loud", &[]);

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("ERROR loud"));

    facade::set_level(LogLevel::TRACE);
    facade::trace("now visible", &[]);
    assert_eq!(capture.lines().len(), 2);

    facade::reset();
}

#[test]
fn test_level_functions_use_their_level() {
    let _guard = SERIAL.lock();
    facade::reset();
    let capture = install_capture();
    facade::set_level(LogLevel::TRACE);

    facade::trace("t", &[]);
    facade::debug("d", &[]);
    facade::info("i", &[]);
    facade::notice("n", &[]);
    facade::warn("w", &[]);
    facade::error("e", &[]);
    facade::fatal("f", &[]);

    let labels: Vec<String> = capture
        .lines()
        .iter()
        .map(|line| line.split_whitespace().nth(1).unwrap_or_default().to_string())
        .collect();
    assert_eq!(labels, ["TRACE", "DEBUG", "INFO", "NOTICE", "WARN", "ERROR", "FATAL"]);

    facade::reset();
}

#[test]
fn test_macros_report_call_site() {
    let _guard = SERIAL.lock();
    facade::reset();
    let capture = install_capture();
    facade::set_level(LogLevel::DEBUG);

    vlog::debug!("from macro", "user", "ann", "attempt", 2);
    let line_no = line!() - 1;

    let line = capture.contents();
    assert!(line.contains(&format!("[{}:{}]", file!(), line_no)));
    assert!(line.trim_end().ends_with("from macro user = ann attempt = 2"));

    facade::reset();
}

#[test]
fn test_format_macros() {
    let _guard = SERIAL.lock();
    facade::reset();
    let capture = install_capture();

    vlog::infof!("processed {} items in {}ms", 100, 42);
    vlog::debugf!("hidden {}", 1);

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("INFO processed 100 items in 42ms"));

    facade::reset();
}

#[test]
fn test_configure_default_writes_json() {
    let _guard = SERIAL.lock();
    facade::reset();
    let structured = Capture::default();

    facade::configure_default(vec![SharedWriter::new(structured.clone())], None)
        .expect("configure with one writer");
    facade::debug("below console threshold", &[]);
    facade::info("configured", &[&"mode", &"json"]);
    let line_no = line!() - 1;

    let lines = structured.lines();
    assert_eq!(lines.len(), 1);
    let value: serde_json::Value = serde_json::from_str(&lines[0]).expect("json line");
    assert_eq!(value["level"], "INFO");
    assert_eq!(value["message"], "configured");
    assert_eq!(value["mode"], "json");
    assert_eq!(value["source"]["file"], file!());
    assert_eq!(value["source"]["line"], line_no);

    facade::reset();
}

#[test]
fn test_configure_default_duplicates_to_every_writer() {
    let _guard = SERIAL.lock();
    facade::reset();
    let a = Capture::default();
    let b = Capture::default();

    facade::configure_default(
        vec![SharedWriter::new(a.clone()), SharedWriter::new(b.clone())],
        Some(HandlerOptions::new().level(LogLevel::INFO)),
    )
    .expect("configure with two writers");
    facade::warn("twice", &[]);

    assert_eq!(a.lines().len(), 1);
    assert_eq!(a.contents(), b.contents());

    facade::reset();
}

#[test]
fn test_configure_default_without_writers_keeps_previous() {
    let _guard = SERIAL.lock();
    facade::reset();
    let capture = install_capture();

    let result = facade::configure_default(Vec::new(), None);
    assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));

    facade::info("still here", &[]);
    assert!(capture.contents().contains("still here"));

    facade::reset();
}

#[test]
fn test_configure_file_bad_path_keeps_previous() {
    let _guard = SERIAL.lock();
    facade::reset();
    let capture = install_capture();
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("no_such_dir").join("app.jsonl");

    let result = facade::configure_file(&path, None);
    assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));

    facade::info("still here", &[]);
    assert!(capture.contents().contains("still here"));

    facade::reset();
}

#[test]
fn test_configure_file_appends_json() {
    let _guard = SERIAL.lock();
    facade::reset();
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("app.jsonl");

    facade::configure_file(&path, None).expect("configure file");
    facade::warn("to file", &[&"attempt", &3]);
    facade::flush().expect("flush");

    let content = std::fs::read_to_string(&path).expect("read log file");
    let value: serde_json::Value = serde_json::from_str(content.trim_end()).expect("json line");
    assert_eq!(value["level"], "WARN");
    assert_eq!(value["attempt"], "3");

    facade::reset();
}

#[test]
fn test_reset_restores_console_only() {
    let _guard = SERIAL.lock();
    facade::set_level(LogLevel::FATAL);
    let structured = Capture::default();
    facade::configure_default(vec![SharedWriter::new(structured.clone())], None)
        .expect("configure");

    facade::reset();

    assert_eq!(facade::level(), LogLevel::INFO);
    assert_eq!(facade::default_logger().handler().name(), "pretty");
}
