//! CLI command implementations.
//!
//! Available commands:
//! - **stats**: Compute statistics from a Label Studio export and write CSV,
//!   a text digest or JSON
//! - **init**: Initialize a new `.hailstats.toml` configuration file

pub mod init;
pub mod stats;

pub use init::init_config;
pub use stats::{handle_stats, StatsConfig, StatsOutcome};
