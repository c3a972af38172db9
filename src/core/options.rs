//! Handler configuration

use super::attr::Attr;
use super::level_var::Leveler;
use super::timestamp::TimestampFormat;
use std::fmt;
use std::sync::Arc;

/// Rewrites or drops an attribute before it is emitted
///
/// Receives the group path the attribute lives under. Returning `None`
/// drops the attribute.
pub type ReplaceAttr = Arc<dyn Fn(&[String], Attr) -> Option<Attr> + Send + Sync>;

/// Options shared by the provided handlers
///
/// # Example
///
/// ```
/// use vlog::core::{HandlerOptions, LogLevel};
///
/// let opts = HandlerOptions::new()
///     .level(LogLevel::DEBUG)
///     .add_source(true);
/// assert!(opts.source_enabled());
/// ```
#[derive(Clone, Default)]
pub struct HandlerOptions {
    pub(crate) level: Leveler,
    pub(crate) add_source: bool,
    pub(crate) replace_attr: Option<ReplaceAttr>,
    pub(crate) timestamp_format: TimestampFormat,
}

impl HandlerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum level, fixed or read from a shared `LevelVar`
    #[must_use]
    pub fn level(mut self, level: impl Into<Leveler>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn add_source(mut self, add_source: bool) -> Self {
        self.add_source = add_source;
        self
    }

    #[must_use]
    pub fn replace_attr<F>(mut self, replace: F) -> Self
    where
        F: Fn(&[String], Attr) -> Option<Attr> + Send + Sync + 'static,
    {
        self.replace_attr = Some(Arc::new(replace));
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn leveler(&self) -> &Leveler {
        &self.level
    }

    pub fn source_enabled(&self) -> bool {
        self.add_source
    }

    pub(crate) fn replace(&self, groups: &[String], attr: Attr) -> Option<Attr> {
        match &self.replace_attr {
            Some(replace) => replace(groups, attr),
            None => Some(attr),
        }
    }
}

impl fmt::Debug for HandlerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerOptions")
            .field("level", &self.level)
            .field("add_source", &self.add_source)
            .field("replace_attr", &self.replace_attr.is_some())
            .field("timestamp_format", &self.timestamp_format)
            .finish()
    }
}
