//! Runtime error payloads.

use std::fmt;

/// What went wrong. Errors are ordinary values; nothing here panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The receiver has no response to the message.
    DoesNotUnderstand,
    /// A reference was not bound in any enclosing scope.
    UnboundSymbol,
    /// The evaluation's cancel token was set.
    Cancelled,
    /// Raised by host code.
    Other,
}

/// Payload of `Value::Error`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorValue {
    kind: ErrorKind,
    message: String,
}

impl ErrorValue {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ErrorValue {
            kind,
            message: message.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Display form used by `Show`.
    pub fn show(&self) -> String {
        format!("ERROR: {}", self.message)
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
