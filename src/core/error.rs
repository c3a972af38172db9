//! Error types for the logging core
//!
//! Handlers return these from `handle` and `flush`; configuration functions
//! return them when a destination cannot be set up.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A destination failed while a record was being written or flushed
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A record could not be encoded as JSON
    #[error("JSON encoding error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A destination or option was rejected at setup time
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A handler refused a record for a reason of its own
    #[error("Handler '{handler}' failed: {message}")]
    HandlerFailed { handler: String, message: String },

    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn handler(handler: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::HandlerFailed {
            handler: handler.into(),
            message: message.into(),
        }
    }

    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// Whether the failure came from the output destination
    pub fn is_io(&self) -> bool {
        matches!(self, LoggerError::IoOperation { .. } | LoggerError::IoError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_error_names_component() {
        let err = LoggerError::config("facade", "at least one writer is required");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid configuration for facade: at least one writer is required"
        );
        assert!(!err.is_io());
    }

    #[test]
    fn test_handler_error_display() {
        let err = LoggerError::handler("json", "closed");
        assert_eq!(err.to_string(), "Handler 'json' failed: closed");
        assert_eq!(LoggerError::other("boom").to_string(), "boom");
    }

    #[test]
    fn test_io_operation_keeps_source() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::io_operation(
            "writing json record",
            "destination rejected the write",
            io_err,
        );

        assert!(err.is_io());
        assert!(err.to_string().contains("writing json record"));
        let source = std::error::Error::source(&err).expect("io source");
        assert_eq!(source.to_string(), "pipe closed");
    }

    #[test]
    fn test_conversions() {
        let err: LoggerError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(err.is_io());

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LoggerError = json_err.into();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }
}
