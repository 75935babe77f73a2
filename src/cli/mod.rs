//! CLI module for blox
//!
//! This module provides the command-line interface, including:
//! - Argument parsing (`args`)
//! - Command handlers (`commands`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod commands;
pub mod setup;

// Re-export commonly used types for convenience
pub use args::{usage_message, Cli, Commands};
pub use commands::{dispatch, handle_encode_command, handle_tool_command};
pub use setup::{formatting_config, init_logging};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Result<Cli, clap::Error> {
    args::parse_args()
}
