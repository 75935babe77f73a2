//! Literal classification by delimiter syntax.

use crate::core::Kind;

/// Tag a literal with its kind. Total: every input yields a kind.
///
/// Rules are checked in order and the first match wins:
/// quoted (`'...'`) is a boolean expression, a `%` prefix is a float,
/// parenthesised (`(...)`) is an integer set, anything else is a string.
pub fn classify(literal: &str) -> Kind {
    if literal.starts_with('\'') && literal.ends_with('\'') {
        Kind::BooleanExpression
    } else if literal.starts_with('%') {
        Kind::Float
    } else if literal.starts_with('(') && literal.ends_with(')') {
        Kind::IntegerSet
    } else {
        Kind::String
    }
}

/// Text between the first and last character of a delimited literal.
///
/// A one-character literal such as `'` or `(` has an empty interior.
pub(crate) fn interior(literal: &str) -> &str {
    let mut chars = literal.chars();
    match (chars.next(), chars.next_back()) {
        (Some(_), Some(_)) => chars.as_str(),
        _ => "",
    }
}
