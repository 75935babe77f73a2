//! Command handlers for the CLI
//!
//! The literal run is the default command; the utilities are subcommands.

mod encode;
mod tools;

pub use encode::{handle_encode_command, run_encode, EncodeConfig};
pub use tools::handle_tool_command;

use crate::cli::args::Cli;
use anyhow::Result;

/// Dispatch to the subcommand, or to the literal run when there is none.
pub fn dispatch(mut cli: Cli) -> Result<()> {
    match cli.command.take() {
        Some(command) => handle_tool_command(&command, &mut std::io::stdout().lock()),
        None => handle_encode_command(cli),
    }
}
