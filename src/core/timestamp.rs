//! Timestamp formatting utilities
//!
//! Records carry a local wall-clock time. Handlers pick how to render it.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use std::fmt::Write;

const ISO8601: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use vlog::core::TimestampFormat;
/// use chrono::Local;
///
/// let stamp = TimestampFormat::Clock.format(&Local::now());
/// assert_eq!(stamp.len(), "15:04:05.000".len());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// Time of day with milliseconds: `10:30:45.123`
    Clock,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    ///
    /// Default for structured output.
    #[default]
    Iso8601,

    /// RFC 3339 with full precision: `2025-01-08T10:30:45.123456789+01:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// Prefer [`TimestampFormat::custom`], which rejects invalid patterns. A
    /// pattern chrono cannot render falls back to `Iso8601`.
    Custom(String),
}

impl TimestampFormat {
    /// Custom strftime format, validated up front
    pub fn custom(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "TimestampFormat",
                format!("invalid strftime pattern '{}'", pattern),
            ));
        }
        Ok(TimestampFormat::Custom(pattern))
    }

    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Clock => datetime.format("%H:%M:%S%.3f").to_string(),
            TimestampFormat::Iso8601 => datetime.format(ISO8601).to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(pattern)).is_err() {
                    return datetime.format(ISO8601).to_string();
                }
                out
            }
        }
    }

    /// Check if this is a numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::UnixMillis)
    }
}
