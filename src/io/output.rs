use crate::core::DatasetStats;
use crate::io::writers::{CsvWriter, JsonWriter, SummaryWriter};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One row per task (default)
    #[default]
    Csv,
    /// Paste-ready text digest
    Summary,
    /// Full dataset statistics as JSON
    Json,
}

impl OutputFormat {
    /// File extension used when deriving an output file name
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Summary => "txt",
            OutputFormat::Json => "json",
        }
    }
}

pub trait OutputWriter {
    fn write_stats(&mut self, stats: &DatasetStats) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Csv => Box::new(CsvWriter::new(writer)),
        OutputFormat::Summary => Box::new(SummaryWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate;
    use serde_json::json;

    fn render(format: OutputFormat) -> String {
        let tasks = vec![json!({ "id": 1, "data": { "image": "a.jpg" }, "annotations": [] })];
        let stats = aggregate(&tasks);
        let mut buffer = Vec::new();
        create_writer(format, &mut buffer).write_stats(&stats).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn each_format_dispatches_to_its_writer() {
        assert!(render(OutputFormat::Csv).starts_with("task_id,image,hail_present"));
        assert!(render(OutputFormat::Summary).contains("*Summary:*"));
        assert!(render(OutputFormat::Json).contains("\"totalTasks\": 1"));
    }

    #[test]
    fn extensions_match_formats() {
        assert_eq!(OutputFormat::Csv.extension(), "csv");
        assert_eq!(OutputFormat::Summary.extension(), "txt");
        assert_eq!(OutputFormat::Json.extension(), "json");
    }
}
