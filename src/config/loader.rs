use std::fs;
use std::path::{Path, PathBuf};

use super::core::HailstatsConfig;
use crate::core::errors::{Error, Result};
use tracing::{debug, warn};

/// Config file name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".hailstats.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from TOML string
pub fn parse_config(contents: &str) -> std::result::Result<HailstatsConfig, String> {
    toml::from_str::<HailstatsConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Load an explicitly requested config file. Any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<HailstatsConfig> {
    let contents =
        fs::read_to_string(path).map_err(|e| Error::config(path, format!("cannot read: {e}")))?;
    let config = parse_config(&contents).map_err(|message| Error::config(path, message))?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading a discovered config file; problems are logged and skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<HailstatsConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(
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
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
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

/// Search `start` and its ancestors for a config file, falling back to
/// defaults.
pub fn discover_config(start: PathBuf) -> HailstatsConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            HailstatsConfig::default()
        })
}

/// Load the explicit config file if given, otherwise discover one from the
/// current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<HailstatsConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }
    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(HailstatsConfig::default())
        }
    }
}

/// Commented default config written by `hailstats init`
pub fn default_config_toml() -> &'static str {
    r#"# hailstats configuration

# from_name keys of the labeling interface
[labels]
hail_present = "hail_present"
primary_panel = "primary_panel"
method = "method"
hail_grid_present_in_photo = "hail_grid_present_in_photo"
hail_grid_type = "hail_grid_type"
dent_boxes = "dent_boxes"

[output]
# csv | summary | json
default_format = "csv"
csv_filename = "hail_damage_stats.csv"

[input]
require_json_extension = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::output::OutputFormat;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn default_config_text_parses_to_defaults() {
        let config = parse_config(default_config_toml()).unwrap();
        assert_eq!(config, HailstatsConfig::default());
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config = parse_config(indoc! {r#"
            [labels]
            hail_present = "damage_visible"

            [output]
            default_format = "summary"
        "#})
        .unwrap();

        assert_eq!(config.labels.hail_present, "damage_visible");
        assert_eq!(config.labels.dent_boxes, "dent_boxes");
        assert_eq!(config.output.default_format, OutputFormat::Summary);
        assert_eq!(config.output.csv_filename, "hail_damage_stats.csv");
        assert!(config.input.require_json_extension);
    }

    #[test]
    fn invalid_toml_is_reported() {
        let err = parse_config("[output]\ndefault_format = \"xml\"").unwrap_err();
        assert!(err.starts_with("Failed to parse .hailstats.toml"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");

        let err = load_config(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn discovery_walks_up_to_ancestor_config() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[input]\nrequire_json_extension = false\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert!(!config.input.require_json_extension);
    }

    #[test]
    fn broken_config_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = try_load_config_from_path(&temp.path().join(CONFIG_FILE_NAME));
        assert!(config.is_none());
    }
}
