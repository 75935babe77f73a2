//! Big-endian IEEE-754 decoding of hex strings.

use crate::core::ToolError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HexFloat {
    Single(f32),
    Double(f64),
}

impl fmt::Display for HexFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(v) => write!(f, "{:?}", v),
            Self::Double(v) => write!(f, "{:?}", v),
        }
    }
}

/// 8 hex digits decode as `f32`, 16 as `f64`.
pub fn hex_to_float(hex: &str) -> Result<HexFloat, ToolError> {
    let hex = hex.trim();
    let invalid = || ToolError::InvalidHex {
        input: hex.to_string(),
    };
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match hex.len() {
        8 => u32::from_str_radix(hex, 16)
            .map(|bits| HexFloat::Single(f32::from_bits(bits)))
            .map_err(|_| invalid()),
        16 => u64::from_str_radix(hex, 16)
            .map(|bits| HexFloat::Double(f64::from_bits(bits)))
            .map_err(|_| invalid()),
        len => Err(ToolError::InvalidHexLength { len }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_precision() {
        assert_eq!(hex_to_float("40200000"), Ok(HexFloat::Single(2.5)));
        assert_eq!(
            hex_to_float("40490fdb"),
            Ok(HexFloat::Single(std::f32::consts::PI))
        );
        assert_eq!(hex_to_float("C0490FDB").unwrap().to_string(), "-3.1415927");
    }

    #[test]
    fn decodes_double_precision() {
        assert_eq!(hex_to_float("3ff0000000000000"), Ok(HexFloat::Double(1.0)));
        assert_eq!(hex_to_float("3ff0000000000000").unwrap().to_string(), "1.0");
    }

    #[test]
    fn rejects_bad_lengths_and_digits() {
        assert_eq!(
            hex_to_float("4020000"),
            Err(ToolError::InvalidHexLength { len: 7 })
        );
        assert_eq!(
            hex_to_float("4020000g"),
            Err(ToolError::InvalidHex {
                input: "4020000g".to_string()
            })
        );
        assert!(hex_to_float("").is_err());
    }
}
