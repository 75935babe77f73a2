//! Handlers for the standalone utility subcommands.

use crate::cli::args::Commands;
use crate::tools::{hex_to_float, xor_strings, FormulaTable};
use anyhow::Result;
use std::io::Write;

/// Run a utility subcommand, writing its output to `out`.
pub fn handle_tool_command(command: &Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Xor { a, b } => {
            let result = xor_strings(a, b)?;
            writeln!(out)?;
            writeln!(out, "{}", result)?;
            writeln!(out)?;
        }
        Commands::HexFloat { hex } => {
            let value = hex_to_float(hex)?;
            writeln!(out, "The float value is: {}", value)?;
        }
        Commands::Table { n, p, q } => {
            let table = FormulaTable::new(*n, *p, *q);
            writeln!(out, "{}", table)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ToolError;

    fn run(command: Commands) -> Result<String> {
        let mut buf = Vec::new();
        handle_tool_command(&command, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn hex_float_prints_value() {
        let out = run(Commands::HexFloat {
            hex: "3ff0000000000000".into(),
        })
        .unwrap();
        assert_eq!(out, "The float value is: 1.0\n");
    }

    #[test]
    fn xor_mismatch_surfaces_tool_error() {
        let err = run(Commands::Xor {
            a: "a".into(),
            b: "bc".into(),
        })
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ToolError>(),
            Some(&ToolError::LengthMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn table_prints_max_line() {
        let out = run(Commands::Table {
            n: 3,
            p: 1.0,
            q: 1.0,
        })
        .unwrap();
        assert!(out.contains("Max a_n:"));
        assert!(out.contains("for n >= 23"));
    }
}
