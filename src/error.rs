//! Error types for parsing operations.

use thiserror::Error;

/// Errors that can occur while parsing JSON text.
///
/// Every variant carries the byte offset into the input at which the failure
/// was detected, so callers can point at the offending position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// The input violated a required structural shape (unquoted object key,
    /// unexpected character, missing delimiter under strict mode, ...).
    #[error("syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// The input ended before the current construct was complete.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// A scanned numeric token failed integer/float conversion.
    #[error("invalid number `{text}` at offset {offset}")]
    InvalidNumber { offset: usize, text: String },

    /// Container nesting exceeded the configured depth limit.
    #[error("nesting depth limit of {limit} exceeded at offset {offset}")]
    TooDeep { offset: usize, limit: usize },
}

impl JsonError {
    /// Byte offset into the input at which the error was detected.
    pub fn offset(&self) -> usize {
        match *self {
            JsonError::Syntax { offset, .. }
            | JsonError::UnexpectedEof { offset }
            | JsonError::InvalidNumber { offset, .. }
            | JsonError::TooDeep { offset, .. } => offset,
        }
    }
}

/// Convenience alias used throughout ordjson.
pub type Result<T> = std::result::Result<T, JsonError>;
