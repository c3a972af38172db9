//! Dynamic level control
//!
//! A `LevelVar` is a shared cell holding the current minimum level. Clones
//! share the cell, so a handler built from one clone observes `set` calls
//! made through any other clone immediately.

use super::log_level::LogLevel;
use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub struct LevelVar {
    level: Arc<AtomicI32>,
}

impl LevelVar {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: Arc::new(AtomicI32::new(level.as_i32())),
        }
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_i32(self.level.load(Ordering::Relaxed))
    }

    pub fn set(&self, level: LogLevel) {
        self.level.store(level.as_i32(), Ordering::Relaxed);
    }
}

impl Default for LevelVar {
    fn default() -> Self {
        Self::new(LogLevel::INFO)
    }
}

impl fmt::Debug for LevelVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelVar({})", self.level())
    }
}

/// Where a handler reads its threshold from
#[derive(Debug, Clone)]
pub enum Leveler {
    /// Threshold frozen at construction
    Fixed(LogLevel),
    /// Threshold read from a shared holder on every check
    Dynamic(LevelVar),
}

impl Leveler {
    #[inline]
    pub fn level(&self) -> LogLevel {
        match self {
            Leveler::Fixed(level) => *level,
            Leveler::Dynamic(var) => var.level(),
        }
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.passes(self.level())
    }
}

impl Default for Leveler {
    fn default() -> Self {
        Leveler::Fixed(LogLevel::INFO)
    }
}

impl From<LogLevel> for Leveler {
    fn from(level: LogLevel) -> Self {
        Leveler::Fixed(level)
    }
}

impl From<LevelVar> for Leveler {
    fn from(var: LevelVar) -> Self {
        Leveler::Dynamic(var)
    }
}

impl From<&LevelVar> for Leveler {
    fn from(var: &LevelVar) -> Self {
        Leveler::Dynamic(var.clone())
    }
}
