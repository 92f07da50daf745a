//! Runtime error types.

use reflet_engine::ReflectError;

/// Errors raised while resolving or executing commands
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The command could not be constructed
    #[error("{0}")]
    Reflect(#[from] ReflectError),

    /// The container does not support the requested resolution
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The resolved instance is not a command for the requested parameter type
    #[error("Not a command: {0}")]
    NotACommand(String),

    /// Failure raised by the command itself, passed through untouched
    #[error("{0}")]
    Execution(anyhow::Error),
}

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;
