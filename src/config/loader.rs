use std::fs;
use std::path::{Path, PathBuf};

use super::core::BloxConfig;
use crate::core::{Error, Result};

/// File name searched for in the current directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".blox.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from TOML string
pub fn parse_config(contents: &str) -> std::result::Result<BloxConfig, String> {
    toml::from_str::<BloxConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Load an explicitly named config file. Any failure is fatal.
pub fn load_config_file(path: &Path) -> Result<BloxConfig> {
    let contents =
        fs::read_to_string(path).map_err(|e| Error::configuration(path, e.to_string()))?;
    let config = parse_config(&contents).map_err(|e| Error::configuration(path, e))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading config from a specific path
fn try_load_config_from_path(config_path: &Path) -> Option<BloxConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the nearest valid config file.
pub fn discover_config(start: PathBuf) -> BloxConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            BloxConfig::default()
        })
}

/// Explicit path if given, otherwise discovery from the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<BloxConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(BloxConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorPolicy, WidePolicy};
    use crate::io::output::OutputFormat;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn parses_full_config() {
        let config = parse_config(indoc! {r#"
            [output]
            format = "json"

            [policy]
            on_parse_error = "abort"
            wide_values = "reject"
        "#})
        .unwrap();

        assert_eq!(config.output_format(), OutputFormat::Json);
        let options = config.pipeline_options();
        assert_eq!(options.on_parse_error, ErrorPolicy::Abort);
        assert_eq!(options.wide_policy, WidePolicy::Reject);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, BloxConfig::default());
        assert_eq!(config.output_format(), OutputFormat::Terminal);
        assert_eq!(config.pipeline_options().wide_policy, WidePolicy::MultiByte);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(parse_config("[policy]\nwide_values = \"squash\"").is_err());
        assert!(parse_config("[colors]\nenabled = true").is_err());
    }

    #[test]
    fn directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn discovers_config_in_parent_directory() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("one").join("two");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[policy]\non_parse_error = \"abort\"\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert_eq!(config.pipeline_options().on_parse_error, ErrorPolicy::Abort);
    }

    #[test]
    fn invalid_discovered_config_is_skipped() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();
        let config = discover_config(root.path().to_path_buf());
        // Falls back to defaults unless an ancestor of the temp dir has a config.
        assert_eq!(config.pipeline_options().on_parse_error, ErrorPolicy::Report);
    }

    #[test]
    fn explicit_config_errors_are_fatal() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("missing.toml");
        let err = load_config(Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));

        let bad = root.path().join("bad.toml");
        fs::write(&bad, "[output]\nformat = 3").unwrap();
        assert!(load_config_file(&bad).is_err());
    }
}
