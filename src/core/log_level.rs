//! Severity scale
//!
//! Levels are signed ordinals with gaps between the standard points so that
//! new levels can be slotted in without renumbering. Any `i32` is a valid
//! level; ordinals that are not one of the named points render as `WARN`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogLevel(i32);

impl LogLevel {
    pub const TRACE: LogLevel = LogLevel(-8);
    pub const DEBUG: LogLevel = LogLevel(-4);
    pub const INFO: LogLevel = LogLevel(0);
    pub const NOTICE: LogLevel = LogLevel(2);
    pub const WARN: LogLevel = LogLevel(4);
    pub const ERROR: LogLevel = LogLevel(8);
    pub const FATAL: LogLevel = LogLevel(12);

    /// All named levels in ascending order
    pub const ALL: [LogLevel; 7] = [
        LogLevel::TRACE,
        LogLevel::DEBUG,
        LogLevel::INFO,
        LogLevel::NOTICE,
        LogLevel::WARN,
        LogLevel::ERROR,
        LogLevel::FATAL,
    ];

    #[must_use]
    pub const fn from_i32(ordinal: i32) -> Self {
        LogLevel(ordinal)
    }

    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Whether a record at `self` passes a `threshold`
    #[inline]
    #[must_use]
    pub fn passes(self, threshold: LogLevel) -> bool {
        self >= threshold
    }

    pub fn to_str(&self) -> &'static str {
        match *self {
            LogLevel::TRACE => "TRACE",
            LogLevel::DEBUG => "DEBUG",
            LogLevel::INFO => "INFO",
            LogLevel::NOTICE => "NOTICE",
            LogLevel::WARN => "WARN",
            LogLevel::ERROR => "ERROR",
            LogLevel::FATAL => "FATAL",
            _ => "WARN",
        }
    }

    /// Display color for the level label
    ///
    /// Only the four conventional levels carry a color. Every other level,
    /// including unrecognized ordinals labelled WARN, renders uncolored.
    pub fn color_code(&self) -> Option<colored::Color> {
        use colored::Color::*;
        match *self {
            LogLevel::DEBUG => Some(BrightMagenta),
            LogLevel::INFO => Some(BrightCyan),
            LogLevel::WARN => Some(BrightYellow),
            LogLevel::ERROR => Some(BrightRed),
            _ => None,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::INFO
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::TRACE),
            "DEBUG" => Ok(LogLevel::DEBUG),
            "INFO" => Ok(LogLevel::INFO),
            "NOTICE" => Ok(LogLevel::NOTICE),
            "WARN" | "WARNING" => Ok(LogLevel::WARN),
            "ERROR" => Ok(LogLevel::ERROR),
            "FATAL" => Ok(LogLevel::FATAL),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
