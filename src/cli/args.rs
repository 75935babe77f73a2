use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::core::MAX_LITERALS;
use crate::io::output::OutputFormat;

const LONG_ABOUT: &str = "\
Classify tagged literals and print their bit and hex encodings.

Literal syntax:
  'EXPR'      boolean expression over 0/1 with AND, OR, XOR (^), NOT (!)
  %DEC.IMAL   single-precision float (exactly one '.')
  (1 -2 3)    set of whitespace-separated signed integers
  anything    plain string

Pass 1 to 243 literals. Quote them for your shell. Put options before the
literals, or use `--` to pass literals that look like options.

A first literal named xor, hex-float or table runs that tool. When the
tool's arguments are missing the words are taken as literals instead, so
`blox xor` encodes the string \"xor\". `blox -- xor a b` always encodes.";

#[derive(Parser, Debug)]
#[command(name = "blox")]
#[command(about = "Classify tagged literals and print their bit and hex encodings")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(disable_help_subcommand = true)]
#[command(override_usage = "blox [OPTIONS] <LITERAL>...\n       blox <COMMAND>")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Literals to classify and encode
    #[arg(value_name = "LITERAL", allow_hyphen_values = true)]
    pub literals: Vec<String>,

    /// Output format (defaults to the config file, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Abort on the first malformed Float or Integer-Set literal
    #[arg(long)]
    pub strict: bool,

    /// Fail on integers outside 0..=255 and code points above U+00FF
    #[arg(long = "reject-wide")]
    pub reject_wide: bool,

    /// Configuration file (skips .blox.toml discovery)
    #[arg(short, long, env = "BLOX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored diagnostics
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// XOR two equal-length strings byte by byte
    Xor {
        /// First string
        a: String,

        /// Second string (same byte length as the first)
        b: String,
    },

    /// Decode 8 or 16 hex digits as a big-endian IEEE-754 float
    HexFloat {
        /// Hex digits, without a 0x prefix
        hex: String,
    },

    /// Print a_n = (2n)^p + (3n)^q for n in 0..=N
    Table {
        /// Max n value for the formula
        n: u32,

        /// p value for the formula
        #[arg(allow_negative_numbers = true)]
        p: f64,

        /// q value for the formula
        #[arg(allow_negative_numbers = true)]
        q: f64,
    },
}

/// Usage line printed for a wrong number of literals.
pub fn usage_message() -> String {
    format!(
        "Usage: blox [OPTIONS] <LITERAL>...  (1 to {} literals; see --help)",
        MAX_LITERALS
    )
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Result<Cli, clap::Error> {
    parse_args_from(std::env::args_os())
}

/// Parse `args` (program name first).
///
/// A tool name whose required arguments are missing is retried as a
/// literal, as if `--` preceded it.
pub fn parse_args_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match Cli::try_parse_from(args.clone()) {
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            literal_fallback(&args).ok_or(e)
        }
        parsed => parsed,
    }
}

fn literal_fallback(args: &[OsString]) -> Option<Cli> {
    let command = Cli::command();
    let is_tool = |arg: &OsStr| {
        command
            .get_subcommands()
            .any(|sub| arg.to_str() == Some(sub.get_name()))
    };

    args.iter()
        .enumerate()
        .skip(1)
        .take_while(|(_, arg)| arg.as_os_str() != "--")
        .filter(|(_, arg)| is_tool(arg.as_os_str()))
        .find_map(|(i, _)| {
            let mut retry = args.to_vec();
            retry.insert(i, OsString::from("--"));
            Cli::try_parse_from(retry).ok()
        })
}
