//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

use super::Kind;

/// Malformed payload for a literal whose kind has a strict grammar.
///
/// Raised by the extractor for Float and Integer-Set literals and by the
/// encoder when the wide-value policy rejects a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} literal `{literal}`: {message}")]
pub struct ParseError {
    pub kind: Kind,
    pub literal: String,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: Kind, literal: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
            message: message.into(),
        }
    }
}

/// Failure while lexing, parsing, or evaluating a boolean expression.
///
/// Never escapes the pipeline: the extractor captures it into the value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character `{ch}` at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("unexpected token `{token}` at position {pos}")]
    UnexpectedToken { token: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unclosed parenthesis opened at position {pos}")]
    UnclosedParen { pos: usize },

    #[error("operand `{value}` of `{op}` is not a boolean")]
    NonBooleanOperand { op: &'static str, value: i64 },

    #[error("expression did not evaluate to a boolean value")]
    NonBooleanResult,

    #[error("integer literal `{text}` is out of range")]
    NumberOutOfRange { text: String },
}

/// A value the `reject` wide-value policy refuses to encode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value} does not fit in a single byte")]
pub struct WideValueError {
    pub value: String,
}

/// Failures of the standalone utilities (`xor`, `hex-float`, `table`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("strings must be of the same length ({left} vs {right} bytes)")]
    LengthMismatch { left: usize, right: usize },

    #[error("invalid hex string length for IEEE 754 float conversion: {len} (expected 8 or 16)")]
    InvalidHexLength { len: usize },

    #[error("invalid hex digit in `{input}`")]
    InvalidHex { input: String },
}

/// Main error type for blox operations
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of literals on the command line
    #[error("expected 1 to {max} literals, got {count}")]
    Usage { count: usize, max: usize },

    /// Malformed literal payload
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Tool input errors
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Configuration errors
    #[error("Configuration error in {path}: {message}")]
    Configuration { path: PathBuf, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error with path context
    pub fn configuration(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Configuration {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the error is a command-line usage error
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_kind_and_literal() {
        let err = ParseError::new(Kind::Float, "%1.2.3", "expected exactly one `.`");
        assert_eq!(
            err.to_string(),
            "Float literal `%1.2.3`: expected exactly one `.`"
        );
    }

    #[test]
    fn usage_error_reports_count() {
        let err = Error::Usage { count: 0, max: 243 };
        assert!(err.is_usage());
        assert_eq!(err.to_string(), "expected 1 to 243 literals, got 0");
    }

    #[test]
    fn parse_error_converts_into_error() {
        let err: Error = ParseError::new(Kind::IntegerSet, "()", "empty set").into();
        assert!(matches!(err, Error::Parse(_)));
        assert!(!err.is_usage());
    }
}
