//! Color handling for diagnostics written to stderr.
//!
//! Reports on stdout are never colored so their bytes stay stable.

use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Applies NO_COLOR, CLICOLOR and CLICOLOR_FORCE, in that order.
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if var("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if var("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        if var("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// Create a plain output configuration (no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

/// Styles stderr messages according to a [`FormattingConfig`].
pub struct Diagnostics {
    use_color: bool,
}

impl Diagnostics {
    pub fn new(config: FormattingConfig) -> Self {
        let use_color = config.color.should_use_color();
        // Set colored control based on configuration
        colored::control::set_override(use_color);
        Self { use_color }
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |s| s.red().bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |s| s.dimmed())
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.use_color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> FormattingConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        FormattingConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn no_color_disables_color() {
        assert_eq!(config_with(&[("NO_COLOR", "1")]).color, ColorMode::Never);
        assert_eq!(config_with(&[("CLICOLOR", "0")]).color, ColorMode::Never);
    }

    #[test]
    fn clicolor_force_wins() {
        let config = config_with(&[("NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")]);
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn defaults_to_auto() {
        assert_eq!(config_with(&[]).color, ColorMode::Auto);
    }

    #[test]
    fn plain_diagnostics_are_unstyled() {
        let diag = Diagnostics::new(FormattingConfig::plain());
        assert_eq!(diag.error("Error:"), "Error:");
        assert_eq!(diag.dim("caused by:"), "caused by:");
    }
}
