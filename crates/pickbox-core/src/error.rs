//! Error types for Pickbox.

use std::fmt;

/// The main error type for Pickbox operations.
///
/// Normal widget operation never fails: invalid or missing inputs degrade
/// to defined fallback states instead of erroring. What remains are the
/// misuse cases of the signal layer.
#[derive(Debug)]
pub enum PickboxError {
    /// Signal-related error.
    Signal(SignalError),
}

impl fmt::Display for PickboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signal(err) => write!(f, "Signal error: {err}"),
        }
    }
}

impl std::error::Error for PickboxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Signal(err) => Some(err),
        }
    }
}

impl From<SignalError> for PickboxError {
    fn from(err: SignalError) -> Self {
        Self::Signal(err)
    }
}

/// Signal-specific errors, produced by
/// [`Signal::try_disconnect`](crate::Signal::try_disconnect).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    InvalidConnection,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection => write!(f, "Invalid or disconnected connection ID"),
        }
    }
}

impl std::error::Error for SignalError {}

/// A specialized Result type for Pickbox operations.
pub type Result<T> = std::result::Result<T, PickboxError>;
