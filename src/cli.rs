use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hailstats")]
#[command(about = "Hail damage statistics from Label Studio annotation exports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored status output
    #[arg(long = "plain", global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute dataset statistics from a Label Studio JSON export
    Stats {
        /// Label Studio JSON export (array of tasks)
        #[arg(long = "in", value_name = "FILE")]
        input: PathBuf,

        /// Output file or directory (defaults to stdout)
        #[arg(long = "out", value_name = "PATH")]
        output: Option<PathBuf>,

        /// Output format (defaults to the configured format, normally csv)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Also print the text digest to stderr
        #[arg(long)]
        summary: bool,

        /// Configuration file (defaults to the nearest .hailstats.toml)
        #[arg(long, value_name = "FILE", env = "HAILSTATS_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Initialize a .hailstats.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
