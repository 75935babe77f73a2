//! Data model shared by every stage of the literal pipeline.
//!
//! A [`Record`] is built once per command-line literal and never mutated:
//! the classifier picks a [`Kind`], the extractor produces a [`TypedValue`],
//! and the encoder derives an [`Encoding`] from it.

pub mod errors;

pub use errors::{Error, ExpressionError, ParseError, Result, ToolError, WideValueError};

use serde::Serialize;
use std::fmt;

/// Most literals a single invocation accepts.
pub const MAX_LITERALS: usize = 243;

/// Semantic category of a literal, decided by its delimiters alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Kind {
    String,
    Float,
    #[serde(rename = "Boolean-Expression")]
    BooleanExpression,
    #[serde(rename = "Integer-Set")]
    IntegerSet,
}

impl Kind {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Float => "Float",
            Self::BooleanExpression => "Boolean-Expression",
            Self::IntegerSet => "Integer-Set",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single-precision value together with the shape of its decimal text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloatValue {
    pub value: f32,
    /// Characters before the `.` in the source text (sign included).
    pub int_len: usize,
    /// Characters after the `.` in the source text.
    pub frac_len: usize,
}

/// Outcome of evaluating a boolean expression.
///
/// Evaluation failures are data, not errors: the message is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanValue {
    Value(bool),
    Error(String),
}

impl BooleanValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Value(b) => Some(*b),
            Self::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Value(_) => None,
            Self::Error(message) => Some(message),
        }
    }
}

impl From<std::result::Result<bool, ExpressionError>> for BooleanValue {
    fn from(result: std::result::Result<bool, ExpressionError>) -> Self {
        match result {
            Ok(b) => Self::Value(b),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

/// Ordered, non-empty sequence of signed integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegerSet {
    values: Vec<i64>,
}

impl IntegerSet {
    /// Returns `None` for an empty sequence.
    pub fn new(values: Vec<i64>) -> Option<Self> {
        (!values.is_empty()).then_some(Self { values })
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn cardinality(&self) -> usize {
        self.values.len()
    }

    pub fn is_signed(&self) -> bool {
        self.values.iter().any(|v| *v < 0)
    }
}

/// Decoded payload of a literal; the variant always matches the literal's kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypedValue {
    Text(String),
    Float(FloatValue),
    Boolean(BooleanValue),
    Integers(IntegerSet),
}

impl TypedValue {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Text(_) => Kind::String,
            Self::Float(_) => Kind::Float,
            Self::Boolean(_) => Kind::BooleanExpression,
            Self::Integers(_) => Kind::IntegerSet,
        }
    }
}

/// Canonical bit and hex renderings of a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Encoding {
    pub bits: String,
    pub hex: String,
}

/// How the encoder treats integers outside 0..=255 and code points >= 256.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidePolicy {
    /// Encode with the shortest big-endian byte sequence.
    #[default]
    MultiByte,
    /// Fail with a parse error.
    Reject,
}

/// What a Float or Integer-Set parse failure does to the rest of the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Keep the error in the literal's record and continue.
    #[default]
    Report,
    /// Stop at the first failing literal.
    Abort,
}

/// Result of running one literal through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub literal: String,
    pub kind: Kind,
    pub outcome: std::result::Result<Decoded, ParseError>,
}

/// A successfully extracted and encoded value.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub value: TypedValue,
    pub encoding: Encoding,
}

impl Record {
    pub fn value(&self) -> Option<&TypedValue> {
        self.outcome.as_ref().ok().map(|d| &d.value)
    }

    pub fn encoding(&self) -> Option<&Encoding> {
        self.outcome.as_ref().ok().map(|d| &d.encoding)
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.outcome.as_ref().err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_match_report_labels() {
        assert_eq!(Kind::BooleanExpression.to_string(), "Boolean-Expression");
        assert_eq!(Kind::IntegerSet.to_string(), "Integer-Set");
        assert_eq!(Kind::String.name(), "String");
    }

    #[test]
    fn integer_set_rejects_empty() {
        assert!(IntegerSet::new(Vec::new()).is_none());
    }

    #[test]
    fn integer_set_signedness_and_cardinality() {
        let set = IntegerSet::new(vec![1, -2, 3]).unwrap();
        assert_eq!(set.cardinality(), 3);
        assert!(set.is_signed());

        let unsigned = IntegerSet::new(vec![10, 20, 30]).unwrap();
        assert!(!unsigned.is_signed());
    }

    #[test]
    fn boolean_value_from_result() {
        let ok: BooleanValue = Ok(true).into();
        assert_eq!(ok.as_bool(), Some(true));
        assert_eq!(ok.error(), None);

        let err: BooleanValue = Err(ExpressionError::Empty).into();
        assert_eq!(err.as_bool(), None);
        assert_eq!(err.error(), Some("empty expression"));
    }

    #[test]
    fn typed_value_reports_kind() {
        assert_eq!(TypedValue::Text("x".into()).kind(), Kind::String);
        assert_eq!(
            TypedValue::Boolean(BooleanValue::Value(false)).kind(),
            Kind::BooleanExpression
        );
    }
}
