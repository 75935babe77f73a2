use serde::{Deserialize, Serialize};

use crate::core::{ErrorPolicy, WidePolicy};
use crate::io::output::OutputFormat;
use crate::pipeline::PipelineOptions;

/// Root configuration structure for blox
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BloxConfig {
    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Error and encoding policies
    #[serde(default)]
    pub policy: Option<PolicyConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// `report` keeps going after a malformed literal, `abort` stops the run
    #[serde(default)]
    pub on_parse_error: Option<ErrorPolicy>,

    /// `multi-byte` widens out-of-range values, `reject` fails on them
    #[serde(default)]
    pub wide_values: Option<WidePolicy>,
}

impl BloxConfig {
    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        let policy = self.policy.clone().unwrap_or_default();
        PipelineOptions {
            wide_policy: policy.wide_values.unwrap_or_default(),
            on_parse_error: policy.on_parse_error.unwrap_or_default(),
        }
    }
}
