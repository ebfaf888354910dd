//! Error handling for strata-log
//!
//! Every fallible setup operation returns [`LogResult<T>`]. Logging itself
//! never fails; only building and installing a logger can.

/// Errors raised while configuring or installing a logger
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filter directives that do not parse
    #[error("Invalid filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed
    #[error("Logger initialization failed: {0}")]
    Init(String),
}

impl LogError {
    /// Create a filter parsing error
    pub fn filter(filter: impl AsRef<str>, reason: impl std::fmt::Display) -> Self {
        Self::Filter(format!("'{}': {reason}", filter.as_ref()))
    }
}

/// Result type for logger setup operations
pub type LogResult<T> = Result<T, LogError>;
