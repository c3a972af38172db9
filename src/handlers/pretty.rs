//! Colorized single-line console handler

use crate::core::{
    Attr, Handler, HandlerOptions, HandlerRef, LogLevel, Record, Result, SharedWriter,
    TimestampFormat, Value,
};
use colored::{Color, Colorize};
use std::borrow::Cow;
use std::sync::Arc;

const COLOR_TIME: Color = Color::BrightBlack;
const COLOR_SOURCE: Color = Color::Green;
const COLOR_MESSAGE: Color = Color::BrightWhite;
const COLOR_ATTRS: Color = Color::Blue;

/// Human-oriented handler writing one line per record
///
/// Line layout: `[HH:MM:SS.mmm] LEVEL [file:line] message k = v ...`.
/// The call site is shown for DEBUG records, or for every record when the
/// options enable `add_source`. Group scoping flattens into dotted keys.
///
/// Write failures on the console are swallowed: `handle` always succeeds.
///
/// # Example
///
/// ```
/// use vlog::handlers::PrettyHandler;
/// use vlog::core::{Handler, LogLevel};
///
/// let handler = PrettyHandler::new();
/// assert!(handler.enabled(LogLevel::DEBUG));
/// assert!(!handler.enabled(LogLevel::TRACE));
/// ```
#[derive(Clone)]
pub struct PrettyHandler {
    writer: SharedWriter,
    options: HandlerOptions,
    use_colors: bool,
    prefix: String,
    preformatted: String,
}

impl PrettyHandler {
    /// Pretty handler on stderr accepting DEBUG and above
    pub fn new() -> Self {
        Self::with_options(HandlerOptions::new().level(LogLevel::DEBUG))
    }

    pub fn with_options(options: HandlerOptions) -> Self {
        Self {
            writer: SharedWriter::stderr(),
            options,
            use_colors: true,
            prefix: String::new(),
            preformatted: String::new(),
        }
    }

    #[must_use]
    pub fn with_writer(mut self, writer: SharedWriter) -> Self {
        self.writer = writer;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Render a record into its output line, newline included
    pub fn render(&self, record: &Record) -> String {
        let mut line = String::with_capacity(128);
        let level = record.level();

        let stamp = format!("[{}]", TimestampFormat::Clock.format(record.time()));
        line.push_str(&self.paint(&stamp, Some(COLOR_TIME)));
        line.push(' ');

        line.push_str(&self.paint(level.to_str(), level.color_code()));
        line.push(' ');

        if self.options.source_enabled() || level == LogLevel::DEBUG {
            if let Some(source) = record.source() {
                line.push_str(&self.paint(&format!("[{}]", source), Some(COLOR_SOURCE)));
                line.push(' ');
            }
        }

        line.push_str(&self.paint(&escape_control(record.message()), Some(COLOR_MESSAGE)));

        let mut block = self.preformatted.clone();
        for attr in record.attrs() {
            append_flat(&mut block, &self.prefix, attr);
        }
        if !block.is_empty() {
            line.push_str(&self.paint(&escape_control(&block), Some(COLOR_ATTRS)));
        }

        line.push('\n');
        line
    }

    fn paint(&self, text: &str, color: Option<Color>) -> String {
        match color {
            Some(color) if self.use_colors => text.color(color).to_string(),
            _ => text.to_string(),
        }
    }
}

impl Default for PrettyHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for PrettyHandler {
    fn enabled(&self, level: LogLevel) -> bool {
        self.options.leveler().enabled(level)
    }

    fn handle(&self, record: &Record) -> Result<()> {
        let line = self.render(record);
        let _ = self.writer.write_record(line.as_bytes());
        Ok(())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> HandlerRef {
        let mut scoped = self.clone();
        for attr in attrs {
            append_flat(&mut scoped.preformatted, &scoped.prefix, attr);
        }
        Arc::new(scoped)
    }

    fn with_group(&self, name: &str) -> HandlerRef {
        let mut scoped = self.clone();
        if !name.is_empty() {
            scoped.prefix.push_str(name);
            scoped.prefix.push('.');
        }
        Arc::new(scoped)
    }

    fn flush(&self) -> Result<()> {
        let _ = self.writer.flush();
        Ok(())
    }

    fn name(&self) -> &str {
        "pretty"
    }
}

/// Append ` key = value` pieces, descending into groups with dotted keys
fn append_flat(out: &mut String, prefix: &str, attr: &Attr) {
    match &attr.value {
        Value::Group(children) => {
            if children.is_empty() {
                return;
            }
            let nested = if attr.key.is_empty() {
                prefix.to_string()
            } else {
                format!("{}{}.", prefix, attr.key)
            };
            for child in children {
                append_flat(out, &nested, child);
            }
        }
        value => {
            out.push(' ');
            out.push_str(prefix);
            out.push_str(&attr.key);
            out.push_str(" = ");
            out.push_str(&value.to_string());
        }
    }
}

/// Keep one record on one line and terminal escape sequences inert
fn escape_control(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.extend(c.escape_unicode()),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
