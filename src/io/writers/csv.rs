//! Flat per-task CSV export.
//!
//! Fixed 18-column schema, `\n` line terminator and no trailing newline.
//! A field is quoted (with inner quotes doubled) only when it contains a
//! comma, a double quote or a newline.

use crate::core::{DatasetStats, ProcessedTask};
use crate::io::output::OutputWriter;
use std::borrow::Cow;
use std::io::Write;

pub const CSV_HEADERS: [&str; 18] = [
    "task_id",
    "image",
    "hail_present",
    "has_damage",
    "primary_panel",
    "method",
    "hail_grid_present_in_photo",
    "hail_grid_type",
    "dent_boxes_count_total",
    "dent_boxes_count_by_size",
    "final_total_dents",
    "final_dime_count",
    "final_nickel_count",
    "final_quarter_count",
    "final_half_dollar_count",
    "final_oversized_count",
    "updated_at",
    "annotator",
];

/// Render the header row plus one row per task, in input order.
pub fn to_csv(tasks: &[ProcessedTask]) -> String {
    std::iter::once(CSV_HEADERS.join(","))
        .chain(tasks.iter().map(|task| {
            csv_fields(task)
                .iter()
                .map(|field| escape_csv_value(field))
                .collect::<Vec<_>>()
                .join(",")
        }))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Unescaped field values for one task, in header order.
pub fn csv_fields(task: &ProcessedTask) -> [String; 18] {
    let by_size = serde_json::to_string(&task.dent_boxes_count_by_size).unwrap_or_default();
    [
        task.task_id.map(|id| id.to_string()).unwrap_or_default(),
        task.image.clone(),
        task.hail_present.to_string(),
        task.has_damage.to_string(),
        task.primary_panel.clone(),
        task.method.clone(),
        task.hail_grid_present_in_photo.clone(),
        task.hail_grid_type.clone(),
        task.dent_boxes_count_total.to_string(),
        by_size,
        task.final_total_dents.to_string(),
        task.final_dime_count.to_string(),
        task.final_nickel_count.to_string(),
        task.final_quarter_count.to_string(),
        task.final_half_dollar_count.to_string(),
        task.final_oversized_count.to_string(),
        task.updated_at.clone(),
        task.annotator.clone(),
    ]
}

pub fn escape_csv_value(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_stats(&mut self, stats: &DatasetStats) -> anyhow::Result<()> {
        self.writer
            .write_all(to_csv(&stats.processed_tasks).as_bytes())?;
        Ok(())
    }
}
