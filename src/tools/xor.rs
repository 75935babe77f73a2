//! Byte-pair XOR of two equal-length strings.

use crate::core::ToolError;
use crate::encode::{to_bits, to_hex};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorResult {
    pub left: Vec<u8>,
    pub right: Vec<u8>,
    pub xored: Vec<u8>,
}

/// XOR the UTF-8 bytes of `a` and `b` pairwise. Lengths must match.
pub fn xor_strings(a: &str, b: &str) -> Result<XorResult, ToolError> {
    let (left, right) = (a.as_bytes(), b.as_bytes());
    if left.len() != right.len() {
        return Err(ToolError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    let xored = left.iter().zip(right).map(|(l, r)| l ^ r).collect();
    Ok(XorResult {
        left: left.to_vec(),
        right: right.to_vec(),
        xored,
    })
}

impl XorResult {
    pub fn bits(&self) -> String {
        to_bits(&self.xored)
    }

    pub fn hex(&self) -> String {
        to_hex(&self.xored)
    }

    /// Each result byte as a character, escaped when not printable.
    pub fn text(&self) -> String {
        self.xored
            .iter()
            .flat_map(|&b| char::from(b).escape_debug())
            .collect()
    }
}

fn spaced_bits(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:08b}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for XorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "string a in bits: {}", spaced_bits(&self.left))?;
        writeln!(f, "string b in bits: {}", spaced_bits(&self.right))?;
        writeln!(f, "XOR result      : {}", self.bits())?;
        writeln!(f, "XOR result (hex): {}", self.hex())?;
        write!(f, "XOR result (txt): {}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_strings_cancel_out() {
        let result = xor_strings("abc", "abc").unwrap();
        assert_eq!(result.xored, vec![0, 0, 0]);
        assert_eq!(result.bits(), "0".repeat(24));
        assert_eq!(result.text(), "\\0\\0\\0");
    }

    #[test]
    fn xors_each_byte() {
        let result = xor_strings("A", " ").unwrap();
        assert_eq!(result.xored, vec![0x61]);
        assert_eq!(result.hex(), "61");
        assert_eq!(result.text(), "a");
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert_eq!(
            xor_strings("ab", "abc"),
            Err(ToolError::LengthMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn display_lists_inputs_and_result() {
        let text = xor_strings("a", "b").unwrap().to_string();
        assert!(text.starts_with("string a in bits: 01100001\n"));
        assert!(text.contains("XOR result      : 00000011\n"));
        assert!(text.contains("XOR result (hex): 03\n"));
    }
}
