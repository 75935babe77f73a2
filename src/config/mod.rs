// Core configuration types
mod core;
mod loader;

pub use self::core::{BloxConfig, OutputConfig, PolicyConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_file, parse_config,
    CONFIG_FILE_NAME,
};
