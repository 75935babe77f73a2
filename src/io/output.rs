use crate::core::{Kind, Record, TypedValue};
use crate::report::{render_report, value_text};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented text records
    #[default]
    Terminal,
    /// A JSON array with one object per literal
    Json,
}

pub trait OutputWriter {
    fn write_records(&mut self, records: &[Record]) -> anyhow::Result<()>;
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_records(&mut self, records: &[Record]) -> anyhow::Result<()> {
        self.writer.write_all(render_report(records).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

/// Flattened view of a record for JSON output.
#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    input: usize,
    literal: &'a str,
    kind: Kind,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a TypedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bits: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hex: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> JsonRecord<'a> {
    fn new(index: usize, record: &'a Record) -> Self {
        Self {
            input: index + 1,
            literal: &record.literal,
            kind: record.kind,
            text: record.value().map(value_text),
            value: record.value(),
            bits: record.encoding().map(|e| e.bits.as_str()),
            hex: record.encoding().map(|e| e.hex.as_str()),
            error: record.error().map(|e| e.message.as_str()),
        }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_records(&mut self, records: &[Record]) -> anyhow::Result<()> {
        let view: Vec<_> = records
            .iter()
            .enumerate()
            .map(|(i, r)| JsonRecord::new(i, r))
            .collect();
        let json = serde_json::to_string_pretty(&view)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}
