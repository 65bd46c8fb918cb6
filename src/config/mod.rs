//! Configuration loaded from `.hailstats.toml`.

mod core;
mod loader;

pub use self::core::{HailstatsConfig, InputConfig, LabelKeys, OutputConfig};
pub use loader::{
    default_config_toml, directory_ancestors, discover_config, load_config,
    load_config_from_path, parse_config, CONFIG_FILE_NAME,
};
