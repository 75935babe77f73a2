//! Classify → extract → encode, once per literal.

use crate::classify::classify;
use crate::core::{
    Decoded, Error, ErrorPolicy, ParseError, Record, Result, WidePolicy, MAX_LITERALS,
};
use crate::encode::encode;
use crate::extract::extract;
use tracing::{debug, info, info_span};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    pub wide_policy: WidePolicy,
    pub on_parse_error: ErrorPolicy,
}

/// Rejects an empty literal list or one longer than [`MAX_LITERALS`].
pub fn validate_count(count: usize) -> Result<()> {
    if (1..=MAX_LITERALS).contains(&count) {
        Ok(())
    } else {
        Err(Error::Usage {
            count,
            max: MAX_LITERALS,
        })
    }
}

/// Run a single literal through every stage. Never fails: a parse error
/// ends up in the record.
pub fn process_literal(literal: &str, wide_policy: WidePolicy) -> Record {
    let kind = classify(literal);
    let _span = info_span!("literal", %kind).entered();

    let outcome = extract(literal, kind).and_then(|value| {
        let encoding = encode(&value, wide_policy)
            .map_err(|e| ParseError::new(kind, literal, e.to_string()))?;
        Ok(Decoded { value, encoding })
    });

    match &outcome {
        Ok(decoded) => debug!(bits = decoded.encoding.bits.len(), "encoded literal"),
        Err(e) => info!(error = %e, "literal failed to parse"),
    }

    Record {
        literal: literal.to_string(),
        kind,
        outcome,
    }
}

/// Process every literal in input order.
///
/// With [`ErrorPolicy::Abort`] the first parse error ends the run.
pub fn process_all<S: AsRef<str>>(literals: &[S], options: PipelineOptions) -> Result<Vec<Record>> {
    validate_count(literals.len())?;

    literals
        .iter()
        .map(|literal| {
            let record = process_literal(literal.as_ref(), options.wide_policy);
            match (&record.outcome, options.on_parse_error) {
                (Err(e), ErrorPolicy::Abort) => Err(Error::Parse(e.clone())),
                _ => Ok(record),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Kind, TypedValue};

    #[test]
    fn count_bounds() {
        assert!(validate_count(0).unwrap_err().is_usage());
        assert!(validate_count(1).is_ok());
        assert!(validate_count(243).is_ok());
        assert!(validate_count(244).unwrap_err().is_usage());
    }

    #[test]
    fn processes_each_kind() {
        let record = process_literal("(10 20 30)", WidePolicy::MultiByte);
        assert_eq!(record.kind, Kind::IntegerSet);
        assert_eq!(record.encoding().unwrap().hex, "a 14 1e");

        let record = process_literal("hello", WidePolicy::MultiByte);
        assert_eq!(record.value(), Some(&TypedValue::Text("hello".into())));
    }

    #[test]
    fn wide_rejection_becomes_parse_error() {
        let record = process_literal("(300)", WidePolicy::Reject);
        let err = record.error().unwrap();
        assert_eq!(err.kind, Kind::IntegerSet);
        assert_eq!(err.message, "integer 300 does not fit in a single byte");
    }

    #[test]
    fn report_policy_keeps_going() {
        let records = process_all(&["(x)", "%1.5"], PipelineOptions::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].error().is_some());
        assert!(records[1].error().is_none());
    }

    #[test]
    fn abort_policy_stops_at_first_failure() {
        let options = PipelineOptions {
            on_parse_error: ErrorPolicy::Abort,
            ..PipelineOptions::default()
        };
        let err = process_all(&["abc", "%nope", "(1)"], options).unwrap_err();
        assert!(matches!(err, Error::Parse(ref e) if e.literal == "%nope"));
    }

    #[test]
    fn boolean_errors_never_abort() {
        let options = PipelineOptions {
            on_parse_error: ErrorPolicy::Abort,
            ..PipelineOptions::default()
        };
        let records = process_all(&["'1 +'"], options).unwrap();
        assert!(records[0].error().is_none());
    }
}
