//! Setup and initialization functions for CLI
//!
//! Logging goes to stderr so reports on stdout stay clean.

use tracing_subscriber::EnvFilter;

use crate::formatting::FormattingConfig;

/// Log level directive for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        // Already configured - this is fine, just ignore
        eprintln!("Note: Logging already configured: {}", e);
    }
}

/// Formatting for stderr diagnostics, honoring `--plain` and the color env vars.
pub fn formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::ColorMode;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(3), "trace");
        assert_eq!(level_for_verbosity(9), "trace");
    }

    #[test]
    fn plain_forces_no_color() {
        assert_eq!(formatting_config(true).color, ColorMode::Never);
    }
}
