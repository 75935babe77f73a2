//! Bit-string and hex-string encodings of typed values.
//!
//! Every encoding is a pure function of the value and the [`WidePolicy`]:
//! encoding the same value twice yields identical strings.

use crate::core::{BooleanValue, Encoding, TypedValue, WidePolicy, WideValueError};
use std::fmt::Write;

/// Derive the bit and hex renderings of `value`.
pub fn encode(value: &TypedValue, policy: WidePolicy) -> Result<Encoding, WideValueError> {
    match value {
        TypedValue::Text(text) => encode_text(text, policy),
        TypedValue::Float(f) => {
            let bytes = f.value.to_be_bytes();
            Ok(Encoding {
                bits: to_bits(&bytes),
                hex: to_hex(&bytes),
            })
        }
        TypedValue::Boolean(BooleanValue::Value(b)) => {
            let byte = u8::from(*b);
            Ok(Encoding {
                bits: format!("{:08b}", byte),
                hex: format!("{:x}", byte),
            })
        }
        TypedValue::Boolean(BooleanValue::Error(_)) => Ok(Encoding::default()),
        TypedValue::Integers(set) => {
            let mut bits = String::new();
            let mut hex = Vec::with_capacity(set.cardinality());
            for &v in set.values() {
                let bytes = integer_bytes(v, policy)?;
                bits.push_str(&to_bits(&bytes));
                hex.push(trim_hex(&to_hex(&bytes)));
            }
            Ok(Encoding {
                bits,
                hex: hex.join(" "),
            })
        }
    }
}

fn encode_text(text: &str, policy: WidePolicy) -> Result<Encoding, WideValueError> {
    let mut encoding = Encoding::default();
    for c in text.chars() {
        let bytes = code_point_bytes(c, policy)?;
        encoding.bits.push_str(&to_bits(&bytes));
        encoding.hex.push_str(&to_hex(&bytes));
    }
    Ok(encoding)
}

/// One byte for code points below 256, otherwise the minimal big-endian bytes.
fn code_point_bytes(c: char, policy: WidePolicy) -> Result<Vec<u8>, WideValueError> {
    let cp = u32::from(c);
    if let Ok(byte) = u8::try_from(cp) {
        return Ok(vec![byte]);
    }
    if policy == WidePolicy::Reject {
        return Err(WideValueError {
            value: format!("code point U+{:04X} (`{}`)", cp, c),
        });
    }
    let bytes = cp.to_be_bytes();
    let skip = bytes.iter().take_while(|b| **b == 0).count();
    Ok(bytes[skip..].to_vec())
}

/// One byte for 0..=255. Wider values take the shortest of 1, 2, 4 or 8
/// bytes: unsigned when non-negative, two's complement when negative.
fn integer_bytes(v: i64, policy: WidePolicy) -> Result<Vec<u8>, WideValueError> {
    if let Ok(byte) = u8::try_from(v) {
        return Ok(vec![byte]);
    }
    if policy == WidePolicy::Reject {
        return Err(WideValueError {
            value: format!("integer {}", v),
        });
    }
    let width = [1, 2, 4]
        .into_iter()
        .find(|&w| fits_in(v, w))
        .unwrap_or(8);
    Ok(v.to_be_bytes()[8 - width..].to_vec())
}

fn fits_in(v: i64, width: usize) -> bool {
    let bits = (width * 8) as u32;
    if v >= 0 {
        (v as u64) < (1u64 << bits)
    } else {
        v >= -(1i64 << (bits - 1))
    }
}

/// Concatenated 8-bit binary form of each byte, most significant bit first.
pub fn to_bits(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 8), |mut s, b| {
        let _ = write!(s, "{:08b}", b);
        s
    })
}

/// Concatenated two-digit lowercase hex form of each byte.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Inverse of [`to_bits`]. `None` unless the input is whole bytes of `0`/`1`.
pub fn bits_to_bytes(bits: &str) -> Option<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return None;
    }
    bits.as_bytes()
        .chunks(8)
        .map(|chunk| {
            let chunk = std::str::from_utf8(chunk).ok()?;
            u8::from_str_radix(chunk, 2).ok()
        })
        .collect()
}

fn trim_hex(hex: &str) -> String {
    let trimmed = hex.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
