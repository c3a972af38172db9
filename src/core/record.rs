//! Log record

use super::attr::{attrs_from_pairs, Attr};
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::fmt;
use std::panic::Location;

/// Resolved call-site location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub file: &'static str,
    pub line: u32,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[derive(Debug, Clone, Copy)]
enum CallSite {
    Tracked(&'static Location<'static>),
    Static(Source),
}

/// One log event
///
/// The call site is kept as the compiler-provided location token and only
/// turned into a [`Source`] when a handler asks for it.
#[derive(Debug, Clone)]
pub struct Record {
    time: DateTime<Local>,
    level: LogLevel,
    message: String,
    call_site: Option<CallSite>,
    attrs: Vec<Attr>,
}

impl Record {
    pub fn new(
        time: DateTime<Local>,
        level: LogLevel,
        message: impl Into<String>,
        location: Option<&'static Location<'static>>,
    ) -> Self {
        Self {
            time,
            level,
            message: message.into(),
            call_site: location.map(CallSite::Tracked),
            attrs: Vec::new(),
        }
    }

    /// Set the call site from a file/line pair reported by another facade
    #[must_use]
    pub fn with_static_source(mut self, file: &'static str, line: u32) -> Self {
        self.call_site = Some(CallSite::Static(Source { file, line }));
        self
    }

    /// Append attributes while the record is still being built
    #[must_use]
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    pub fn time(&self) -> &DateTime<Local> {
        &self.time
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn has_attrs(&self) -> bool {
        !self.attrs.is_empty()
    }

    pub fn source(&self) -> Option<Source> {
        self.call_site.map(|site| match site {
            CallSite::Tracked(loc) => Source {
                file: loc.file(),
                line: loc.line(),
            },
            CallSite::Static(source) => source,
        })
    }
}

/// Build a record stamped with the current time and the caller's location
///
/// `pairs` is a flat `key, value, ...` sequence; an odd trailing element is
/// dropped. Callers that forward through `#[track_caller]` functions keep
/// the location pointing at the original call site.
#[track_caller]
pub fn make_record(
    level: LogLevel,
    message: impl Into<String>,
    pairs: &[&dyn fmt::Display],
) -> Record {
    Record::new(Local::now(), level, message, Some(Location::caller()))
        .with_attrs(attrs_from_pairs(pairs))
}
