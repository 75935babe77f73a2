//! Payload extraction: turns a classified literal into a typed value.

use crate::classify::interior;
use crate::core::{BooleanValue, FloatValue, IntegerSet, Kind, ParseError, TypedValue};
use crate::expr;
use tracing::debug;

/// Decode the payload of `literal` according to `kind`.
///
/// Float and Integer-Set payloads fail with a [`ParseError`]. Boolean
/// expressions never fail here: evaluation errors are kept in the value.
pub fn extract(literal: &str, kind: Kind) -> Result<TypedValue, ParseError> {
    match kind {
        Kind::String => Ok(TypedValue::Text(literal.to_string())),
        Kind::Float => extract_float(literal).map(TypedValue::Float),
        Kind::BooleanExpression => Ok(TypedValue::Boolean(extract_boolean(literal))),
        Kind::IntegerSet => extract_integers(literal).map(TypedValue::Integers),
    }
}

fn extract_float(literal: &str) -> Result<FloatValue, ParseError> {
    let fail = |message: &str| ParseError::new(Kind::Float, literal, message);
    let text = literal.strip_prefix('%').unwrap_or(literal);

    let (int_part, frac_part) = match text.split_once('.') {
        Some((_, rest)) if rest.contains('.') => {
            return Err(fail("expected exactly one `.`, found several"))
        }
        Some(parts) => parts,
        None => return Err(fail("expected exactly one `.`, found none")),
    };

    let value: f32 = text
        .parse()
        .map_err(|_| fail(&format!("`{}` is not a decimal number", text)))?;
    if !value.is_finite() {
        return Err(fail("value is out of range for single precision"));
    }

    Ok(FloatValue {
        value,
        int_len: int_part.chars().count(),
        frac_len: frac_part.chars().count(),
    })
}

fn extract_boolean(literal: &str) -> BooleanValue {
    let text = interior(literal);
    let result = expr::evaluate(text);
    if let Err(ref e) = result {
        debug!(expression = text, error = %e, "boolean expression failed");
    }
    result.into()
}

fn extract_integers(literal: &str) -> Result<IntegerSet, ParseError> {
    let values = interior(literal)
        .split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|e| {
                ParseError::new(
                    Kind::IntegerSet,
                    literal,
                    format!("`{}` is not a signed integer ({})", token, e),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    IntegerSet::new(values).ok_or_else(|| ParseError::new(Kind::IntegerSet, literal, "empty set"))
}
