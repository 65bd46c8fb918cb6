use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use hailstats::cli::{Cli, Commands};
use hailstats::commands::{self, StatsConfig};
use hailstats::observability::{init_logging, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_logging(cli.verbosity);
    if cli.plain {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Stats {
            input,
            output,
            format,
            summary,
            config,
        } => {
            let outcome = commands::handle_stats(StatsConfig {
                input,
                output,
                format,
                summary,
                config,
            })?;
            if let Some(digest) = &outcome.summary {
                eprintln!("{digest}");
            }
            eprintln!(
                "{} Wrote {} tasks to {}",
                "✓".green().bold(),
                outcome.task_count,
                outcome.destination
            );
        }
        Commands::Init { force } => {
            let path = commands::init_config(force)?;
            println!("Created {} configuration file", path.display());
        }
    }

    Ok(())
}
