//! Line-delimited JSON handler for structured logging
//!
//! Each record becomes one JSON object on its own line:
//!
//! ```text
//! {"time":"2025-01-08T10:30:45.123+00:00","level":"INFO","source":{"file":"src/main.rs","line":12},"message":"started","port":8080}
//! ```
//!
//! Attributes keep their order and duplicate keys are written as-is, so the
//! JSON text is streamed rather than built from a map.

use crate::core::{
    Attr, Handler, HandlerOptions, HandlerRef, LogLevel, LoggerError, Record, Result,
    SharedWriter, Value,
};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

const TIME_KEY: &str = "time";
const LEVEL_KEY: &str = "level";
const SOURCE_KEY: &str = "source";
const MESSAGE_KEY: &str = "message";

/// JSON text under construction
#[derive(Clone, Default)]
struct JsonBuf {
    out: Vec<u8>,
    needs_comma: bool,
}

impl JsonBuf {
    fn key(&mut self, key: &str) -> Result<()> {
        if self.needs_comma {
            self.out.push(b',');
        }
        serde_json::to_writer(&mut self.out, key)?;
        self.out.push(b':');
        Ok(())
    }

    fn field(&mut self, key: &str, value: &Value) -> Result<()> {
        self.key(key)?;
        serde_json::to_writer(&mut self.out, &value.to_json_value())?;
        self.needs_comma = true;
        Ok(())
    }

    fn open_group(&mut self, name: &str) -> Result<()> {
        self.key(name)?;
        self.out.push(b'{');
        self.needs_comma = false;
        Ok(())
    }

    fn close_group(&mut self) {
        self.out.push(b'}');
        self.needs_comma = true;
    }

    fn append(&mut self, fragment: &JsonBuf) {
        if fragment.out.is_empty() {
            return;
        }
        if self.needs_comma {
            self.out.push(b',');
        }
        self.out.extend_from_slice(&fragment.out);
        self.needs_comma = fragment.needs_comma;
    }
}

/// Structured handler writing line-delimited JSON
///
/// `with_group` nests later attributes in an object named after the group.
/// A group is only opened once something is written into it. `with_attrs`
/// attributes are rendered once, when the derived handler is created.
///
/// Write failures are returned from `handle`.
#[derive(Clone)]
pub struct JsonHandler {
    writer: SharedWriter,
    options: HandlerOptions,
    preformatted: JsonBuf,
    groups: Vec<String>,
    open_groups: usize,
}

impl JsonHandler {
    pub fn new(writer: SharedWriter, options: HandlerOptions) -> Self {
        Self {
            writer,
            options,
            preformatted: JsonBuf::default(),
            groups: Vec::new(),
            open_groups: 0,
        }
    }

    /// JSON handler appending to a file, created if missing
    pub fn open<P: AsRef<Path>>(path: P, options: HandlerOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::config(
                    "JsonHandler",
                    format!("cannot open '{}': {}", path.display(), e),
                )
            })?;
        Ok(Self::new(SharedWriter::new(file), options))
    }

    /// Render a record into one JSON line, newline included
    pub fn render(&self, record: &Record) -> Result<Vec<u8>> {
        let mut buf = JsonBuf::default();
        buf.out.reserve(256);
        buf.out.push(b'{');

        let format = &self.options.timestamp_format;
        let time = if format.is_numeric() {
            Value::Int(record.time().timestamp_millis())
        } else {
            Value::String(format.format(record.time()))
        };
        self.builtin(&mut buf, Attr::new(TIME_KEY, time))?;
        self.builtin(&mut buf, Attr::new(LEVEL_KEY, record.level().to_str()))?;
        if self.options.source_enabled() {
            if let Some(source) = record.source() {
                let fields = vec![Attr::new("file", source.file), Attr::new("line", source.line)];
                self.builtin(&mut buf, Attr::group(SOURCE_KEY, fields))?;
            }
        }
        self.builtin(&mut buf, Attr::new(MESSAGE_KEY, record.message()))?;

        buf.append(&self.preformatted);

        let mut body = JsonBuf::default();
        if record.has_attrs() {
            let mut path = self.groups.clone();
            for attr in record.attrs() {
                self.append_attr(&mut body, &mut path, attr)?;
            }
        }

        let mut opened = self.open_groups;
        if !body.out.is_empty() {
            for name in &self.groups[self.open_groups..] {
                buf.open_group(name)?;
            }
            opened = self.groups.len();
            buf.append(&body);
        }
        for _ in 0..opened {
            buf.close_group();
        }

        buf.out.extend_from_slice(b"}\n");
        Ok(buf.out)
    }

    fn builtin(&self, buf: &mut JsonBuf, attr: Attr) -> Result<()> {
        match self.options.replace(&[], attr) {
            Some(attr) => buf.field(&attr.key, &attr.value),
            None => Ok(()),
        }
    }

    fn append_attr(&self, buf: &mut JsonBuf, path: &mut Vec<String>, attr: &Attr) -> Result<()> {
        match &attr.value {
            Value::Group(children) => {
                if children.is_empty() {
                    return Ok(());
                }
                if attr.key.is_empty() {
                    for child in children {
                        self.append_attr(buf, path, child)?;
                    }
                    return Ok(());
                }
                let mut inner = JsonBuf::default();
                path.push(attr.key.clone());
                for child in children {
                    self.append_attr(&mut inner, path, child)?;
                }
                path.pop();
                if inner.out.is_empty() {
                    return Ok(());
                }
                buf.open_group(&attr.key)?;
                buf.append(&inner);
                buf.close_group();
                Ok(())
            }
            value => {
                if self.options.replace_attr.is_none() {
                    return buf.field(&attr.key, value);
                }
                match self.options.replace(path, attr.clone()) {
                    Some(replaced) => buf.field(&replaced.key, &replaced.value),
                    None => Ok(()),
                }
            }
        }
    }

    fn scoped_with_attrs(&self, attrs: &[Attr]) -> Result<JsonHandler> {
        let mut body = JsonBuf::default();
        let mut path = self.groups.clone();
        for attr in attrs {
            self.append_attr(&mut body, &mut path, attr)?;
        }

        let mut scoped = self.clone();
        if body.out.is_empty() {
            return Ok(scoped);
        }

        let mut fragment = self.preformatted.clone();
        for name in &self.groups[self.open_groups..] {
            fragment.open_group(name)?;
        }
        fragment.append(&body);
        scoped.preformatted = fragment;
        scoped.open_groups = self.groups.len();
        Ok(scoped)
    }
}

impl Handler for JsonHandler {
    fn enabled(&self, level: LogLevel) -> bool {
        self.options.leveler().enabled(level)
    }

    fn handle(&self, record: &Record) -> Result<()> {
        let line = self.render(record)?;
        self.writer.write_record(&line).map_err(|e| {
            LoggerError::io_operation("writing json record", "destination rejected the write", e)
        })
    }

    fn with_attrs(&self, attrs: &[Attr]) -> HandlerRef {
        if attrs.is_empty() {
            return Arc::new(self.clone());
        }
        match self.scoped_with_attrs(attrs) {
            Ok(scoped) => Arc::new(scoped),
            Err(e) => {
                eprintln!("[LOGGER ERROR] json handler could not render attributes: {}", e);
                Arc::new(self.clone())
            }
        }
    }

    fn with_group(&self, name: &str) -> HandlerRef {
        let mut scoped = self.clone();
        if !name.is_empty() {
            scoped.groups.push(name.to_string());
        }
        Arc::new(scoped)
    }

    fn flush(&self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing json writer", "flush failed", e))
    }

    fn name(&self) -> &str {
        "json"
    }
}
