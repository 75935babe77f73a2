//! Literal command handler
//!
//! Resolves options from the CLI and config file, runs the pipeline and
//! writes the report.

use crate::cli::args::Cli;
use crate::config::{load_config, BloxConfig};
use crate::core::{ErrorPolicy, WidePolicy};
use crate::io::open_destination;
use crate::io::output::{create_writer, OutputFormat};
use crate::pipeline::{process_all, PipelineOptions};
use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

/// Options for one literal run after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeConfig {
    pub literals: Vec<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub pipeline: PipelineOptions,
}

impl EncodeConfig {
    /// CLI flags win; unset flags fall back to the config file.
    pub fn resolve(cli: Cli, config: &BloxConfig) -> Self {
        let mut pipeline = config.pipeline_options();
        if cli.strict {
            pipeline.on_parse_error = ErrorPolicy::Abort;
        }
        if cli.reject_wide {
            pipeline.wide_policy = WidePolicy::Reject;
        }

        Self {
            literals: cli.literals,
            format: cli.format.unwrap_or_else(|| config.output_format()),
            output: cli.output,
            pipeline,
        }
    }
}

pub fn handle_encode_command(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let encode_config = EncodeConfig::resolve(cli, &config);
    debug!(
        pipeline = ?encode_config.pipeline,
        format = ?encode_config.format,
        "resolved options"
    );
    run_encode(&encode_config)
}

pub fn run_encode(config: &EncodeConfig) -> Result<()> {
    let records = process_all(config.literals.as_slice(), config.pipeline)?;

    let destination = open_destination(config.output.as_deref())?;
    let mut writer = create_writer(config.format, destination);
    writer.write_records(&records)
}
