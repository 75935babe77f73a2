//! Human-readable rendering of pipeline records.

use crate::core::{BooleanValue, Record, TypedValue};
use std::fmt::Write;

/// Indentation applied to every field after the first.
const FIELD_INDENT: &str = "\n  ";

/// Render one record as an indented multi-line block (no trailing newline).
pub fn format_record(record: &Record) -> String {
    let mut fields = vec![
        format!("Original Input: {}", record.literal),
        format!("Data Type: {}", record.kind),
    ];

    match &record.outcome {
        Err(e) => fields.push(format!("Error: {}", e.message)),
        Ok(decoded) => {
            fields.push(format!("String: {}", value_text(&decoded.value)));
            fields.push(format!("Bit Field: {}", decoded.encoding.bits));
            fields.push(format!("Hex Field: {}", decoded.encoding.hex));
            push_kind_fields(&mut fields, &decoded.value);
        }
    }

    fields.join(FIELD_INDENT)
}

fn push_kind_fields(fields: &mut Vec<String>, value: &TypedValue) {
    match value {
        TypedValue::Text(_) => {}
        TypedValue::Float(f) => {
            fields.push(format!("Float Value: {:?}", f.value));
            fields.push(format!("Left Side Length: {}", f.int_len));
            fields.push(format!("Right Side Length: {}", f.frac_len));
        }
        TypedValue::Boolean(b) => {
            let shown = b.as_bool().map_or("none".to_string(), |v| v.to_string());
            fields.push(format!("Boolean Value: {}", shown));
            if let Some(error) = b.error() {
                fields.push(format!("Error: {}", error));
            }
        }
        TypedValue::Integers(set) => {
            match set.values() {
                [single] => fields.push(format!("Int Value: {}", single)),
                values => fields.push(format!("Int Value: {:?}", values)),
            }
            fields.push(format!("Is Signed: {}", set.is_signed()));
            fields.push(format!("Set Size: {}", set.cardinality()));
        }
    }
}

/// The value as plain text, as shown on the `String:` line.
pub fn value_text(value: &TypedValue) -> String {
    match value {
        TypedValue::Text(text) => text.clone(),
        TypedValue::Float(f) => format!("{:?}", f.value),
        TypedValue::Boolean(BooleanValue::Value(b)) => b.to_string(),
        TypedValue::Boolean(BooleanValue::Error(_)) => "error".to_string(),
        TypedValue::Integers(set) => set
            .values()
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Render all records in input order, numbered from 1.
pub fn render_report(records: &[Record]) -> String {
    let mut out = String::from("\n");
    for (i, record) in records.iter().enumerate() {
        let _ = writeln!(out, "Input {}:", i + 1);
        let _ = writeln!(out, "  {}", format_record(record));
        out.push('\n');
    }
    out
}
