// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod config;
pub mod core;
pub mod encode;
pub mod expr;
pub mod extract;
pub mod formatting;
pub mod io;
pub mod pipeline;
pub mod report;
pub mod tools;

// Re-export commonly used types
pub use crate::core::{
    BooleanValue, Decoded, Encoding, Error, ErrorPolicy, ExpressionError, FloatValue,
    IntegerSet, Kind, ParseError, Record, Result, ToolError, TypedValue, WidePolicy,
    MAX_LITERALS,
};

pub use crate::classify::classify;
pub use crate::encode::encode;
pub use crate::extract::extract;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::pipeline::{process_all, process_literal, validate_count, PipelineOptions};
pub use crate::report::{format_record, render_report};
