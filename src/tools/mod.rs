//! Standalone utilities that share the binary but not the literal pipeline.

pub mod hex_float;
pub mod table;
pub mod xor;

pub use hex_float::{hex_to_float, HexFloat};
pub use table::FormulaTable;
pub use xor::{xor_strings, XorResult};
