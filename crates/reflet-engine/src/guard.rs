//! Precondition guard
//!
//! Raises a caller-chosen error kind when a condition fails or a value is
//! absent. Error kinds are described by [`ErrorKind`], a named pair of
//! factory functions: one taking a message and one taking nothing. A kind
//! that lacks the factory a call needs cannot be raised; the guard then
//! reports [`GuardError::KindUnavailable`] instead of the requested error.

use std::fmt;

use crate::error::ReflectError;

/// Descriptor of an error kind the guard can raise
pub struct ErrorKind<E> {
    name: &'static str,
    from_message: Option<fn(String) -> E>,
    from_default: Option<fn() -> E>,
}

impl<E> ErrorKind<E> {
    /// A kind with no factories yet
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            from_message: None,
            from_default: None,
        }
    }

    /// Set the factory used when a message is supplied
    pub fn with_message(mut self, factory: fn(String) -> E) -> Self {
        self.from_message = Some(factory);
        self
    }

    /// Set the factory used when no message is supplied
    pub fn with_default(mut self, factory: fn() -> E) -> Self {
        self.from_default = Some(factory);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Build an instance of this kind
    pub fn construct(&self, message: Option<&str>) -> Result<E, ReflectError> {
        let built = match message {
            Some(message) => self.from_message.map(|factory| factory(message.to_string())),
            None => self.from_default.map(|factory| factory()),
        };
        built.ok_or_else(|| {
            let shape = if message.is_some() { "message" } else { "no-argument" };
            ReflectError::resolution(format!(
                "No such constructor found: {}.ctor ({} form)",
                self.name, shape
            ))
        })
    }
}

impl<E> Clone for ErrorKind<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            from_message: self.from_message,
            from_default: self.from_default,
        }
    }
}

impl<E> fmt::Debug for ErrorKind<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorKind")
            .field("name", &self.name)
            .field("from_message", &self.from_message.is_some())
            .field("from_default", &self.from_default.is_some())
            .finish()
    }
}

/// Outcome of a failed guard
#[derive(Debug)]
pub enum GuardError<E> {
    /// The requested error kind was raised
    Raised(E),
    /// The requested error kind could not be built
    KindUnavailable(ReflectError),
}

impl<E> GuardError<E> {
    /// The raised error, if the kind could be built
    pub fn raised(self) -> Option<E> {
        match self {
            GuardError::Raised(err) => Some(err),
            GuardError::KindUnavailable(_) => None,
        }
    }

    pub fn is_kind_unavailable(&self) -> bool {
        matches!(self, GuardError::KindUnavailable(_))
    }
}

impl GuardError<ReflectError> {
    /// Collapse to a single error when the requested kind is itself a
    /// reflection error
    pub fn into_inner(self) -> ReflectError {
        match self {
            GuardError::Raised(err) | GuardError::KindUnavailable(err) => err,
        }
    }
}

impl<E: fmt::Display> fmt::Display for GuardError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardError::Raised(err) => fmt::Display::fmt(err, f),
            GuardError::KindUnavailable(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GuardError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GuardError::Raised(err) => Some(err),
            GuardError::KindUnavailable(err) => Some(err),
        }
    }
}

/// Raise `kind` when `fail_condition` holds
pub fn against<E>(
    fail_condition: bool,
    kind: &ErrorKind<E>,
    message: Option<&str>,
) -> Result<(), GuardError<E>> {
    if fail_condition {
        Err(raise(kind, message))
    } else {
        Ok(())
    }
}

/// Unwrap `candidate`, raising `kind` when it is absent
pub fn require_non_null<T, E>(
    candidate: Option<T>,
    kind: &ErrorKind<E>,
    message: Option<&str>,
) -> Result<T, GuardError<E>> {
    match candidate {
        Some(value) => Ok(value),
        None => Err(raise(kind, message)),
    }
}

fn raise<E>(kind: &ErrorKind<E>, message: Option<&str>) -> GuardError<E> {
    match kind.construct(message) {
        Ok(err) => GuardError::Raised(err),
        Err(meta) => GuardError::KindUnavailable(meta),
    }
}
