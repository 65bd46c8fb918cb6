use crate::config::{self, OutputConfig};
use crate::core::errors::Error;
use crate::core::{aggregate_with_keys, DatasetStats};
use crate::io::{self, create_writer, to_summary, OutputFormat};
use crate::observability::{set_current_input, set_phase, PipelinePhase};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub struct StatsConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub summary: bool,
    pub config: Option<PathBuf>,
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsOutcome {
    pub task_count: usize,
    pub format: OutputFormat,
    pub destination: String,
    /// Text digest, when requested
    pub summary: Option<String>,
}

/// Load an export, aggregate it, and write the requested artifact.
///
/// All-or-nothing: any boundary error aborts before output is written.
pub fn handle_stats(options: StatsConfig) -> Result<StatsOutcome> {
    let settings = {
        let _phase = set_phase(PipelinePhase::Configuration);
        config::load_config(options.config.as_deref())?
    };

    let _input = set_current_input(&options.input);
    let tasks = {
        let _phase = set_phase(PipelinePhase::Loading);
        io::load_tasks(&options.input, settings.input.require_json_extension)?
    };

    let stats = {
        let _phase = set_phase(PipelinePhase::Aggregation);
        aggregate_with_keys(&tasks, &settings.labels)
    };

    let _phase = set_phase(PipelinePhase::OutputGeneration);
    let format = options.format.unwrap_or(settings.output.default_format);
    let destination = match &options.output {
        Some(path) => {
            let path = resolve_output_path(path, format, &settings.output);
            write_to_file(&path, format, &stats)?;
            path.display().to_string()
        }
        None => {
            write_to_stdout(format, &stats)?;
            "stdout".to_string()
        }
    };

    info!(
        tasks = stats.total_tasks,
        format = ?format,
        destination = %destination,
        "wrote statistics"
    );

    Ok(StatsOutcome {
        task_count: stats.total_tasks,
        format,
        destination,
        summary: options.summary.then(|| to_summary(&stats)),
    })
}

/// A directory destination gets the configured file name, with the
/// extension adjusted to the format.
pub fn resolve_output_path(path: &Path, format: OutputFormat, output: &OutputConfig) -> PathBuf {
    if !path.is_dir() {
        return path.to_path_buf();
    }
    let file_name = Path::new(&output.csv_filename);
    match format {
        OutputFormat::Csv => path.join(file_name),
        other => path.join(file_name.with_extension(other.extension())),
    }
}

fn write_to_file(path: &Path, format: OutputFormat, stats: &DatasetStats) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::write(path.display().to_string(), e))?;
    let mut writer = BufWriter::new(file);
    create_writer(format, &mut writer)
        .write_stats(stats)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer
        .flush()
        .map_err(|e| Error::write(path.display().to_string(), e))?;
    Ok(())
}

fn write_to_stdout(format: OutputFormat, stats: &DatasetStats) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    create_writer(format, &mut lock).write_stats(stats)?;
    writeln!(lock)?;
    lock.flush()?;
    Ok(())
}
