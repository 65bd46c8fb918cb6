// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{
    aggregate, aggregate_with_keys, normalize, normalize_with_keys, DatasetStats, DentCounts,
    DentSize, DentSizeStat, Distribution, Error, HailPresent, ProcessedTask, Result,
};

pub use crate::config::{HailstatsConfig, LabelKeys};

pub use crate::io::{
    create_writer, load_tasks, parse_tasks, to_csv, to_summary, OutputFormat, OutputWriter,
};
