//! Engine error types.

use crate::guard::{ErrorKind, GuardError};

/// Boxed cause carried by resolution errors
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for reflective operations
pub type ReflectResult<T> = Result<T, ReflectError>;

/// Errors raised by the reflection engine
#[derive(Debug, thiserror::Error)]
pub enum ReflectError {
    /// A constructor or method could not be found, is not accessible, or
    /// reflective dispatch failed (the cause is kept when there is one)
    #[error("Resolution error: {message}")]
    Resolution {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Failure raised by an invoked method body, passed through untouched
    #[error("{0}")]
    Thrown(anyhow::Error),

    /// An absent value was classified
    #[error("Null value: {0}")]
    NullValue(String),

    /// A type definition was rejected by the registry
    #[error("Registration error: {0}")]
    Registration(String),

    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl ReflectError {
    /// Resolution error without an underlying cause
    pub fn resolution(message: impl Into<String>) -> Self {
        ReflectError::Resolution {
            message: message.into(),
            source: None,
        }
    }

    /// Resolution error wrapping the failure that caused it
    pub fn resolution_caused_by(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        ReflectError::Resolution {
            message: message.into(),
            source: Some(cause.into()),
        }
    }

    /// Error kind descriptor for raising resolution errors through the guard
    pub fn resolution_kind() -> ErrorKind<ReflectError> {
        ErrorKind::new("ResolutionError")
            .with_message(|message| ReflectError::resolution(message))
            .with_default(|| ReflectError::resolution("reflective resolution failed"))
    }

    pub fn is_resolution(&self) -> bool {
        matches!(self, ReflectError::Resolution { .. })
    }
}

impl From<GuardError<ReflectError>> for ReflectError {
    fn from(err: GuardError<ReflectError>) -> Self {
        err.into_inner()
    }
}
