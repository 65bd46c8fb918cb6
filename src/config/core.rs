use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};

/// Root configuration structure for hailstats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HailstatsConfig {
    /// `from_name` keys used to locate fields in annotation results
    pub labels: LabelKeys,

    /// Output configuration
    pub output: OutputConfig,

    /// Input validation configuration
    pub input: InputConfig,
}

/// Label keys (`from_name` values) for each semantic field.
///
/// The defaults match the hail damage labeling interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelKeys {
    pub hail_present: String,
    pub primary_panel: String,
    pub method: String,
    pub hail_grid_present_in_photo: String,
    pub hail_grid_type: String,
    pub dent_boxes: String,
}

impl Default for LabelKeys {
    fn default() -> Self {
        Self {
            hail_present: "hail_present".to_string(),
            primary_panel: "primary_panel".to_string(),
            method: "method".to_string(),
            hail_grid_present_in_photo: "hail_grid_present_in_photo".to_string(),
            hail_grid_type: "hail_grid_type".to_string(),
            dent_boxes: "dent_boxes".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: OutputFormat,
    /// File name used when `--out` points at a directory
    pub csv_filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Csv,
            csv_filename: "hail_damage_stats.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Reject input paths that do not end in `.json`
    pub require_json_extension: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            require_json_extension: true,
        }
    }
}
