//! Task normalization: one raw export task -> one [`ProcessedTask`].
//!
//! Normalization is total. Missing annotations, missing results and
//! unrecognized label values all resolve to defaults (empty strings,
//! `PENDING`, zero counts) so that a single malformed task cannot abort a
//! batch.

use super::fields::{RawAnnotation, RawResult, RawTask};
use super::types::{DentCounts, DentSize, HailPresent, ProcessedTask, TaskLabels};
use crate::config::LabelKeys;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use tracing::debug;

/// Normalize a task using the default label keys.
pub fn normalize(task: &Value) -> ProcessedTask {
    normalize_with_keys(task, &LabelKeys::default())
}

/// Normalize a task, locating fields by the given `from_name` keys.
pub fn normalize_with_keys(task: &Value, keys: &LabelKeys) -> ProcessedTask {
    let task = RawTask::new(task);
    let annotation = latest_annotation(task.annotations());
    let results: Vec<RawResult<'_>> = annotation
        .map(|annotation| annotation.results().collect())
        .unwrap_or_default();

    let hail_present = HailPresent::from_choice(&extract_choice(&results, &keys.hail_present));
    let labels = TaskLabels {
        primary_panel: extract_choice(&results, &keys.primary_panel),
        method: extract_choice(&results, &keys.method),
        hail_grid_present_in_photo: extract_choice(&results, &keys.hail_grid_present_in_photo),
        hail_grid_type: extract_choice(&results, &keys.hail_grid_type),
    };
    let dent_counts = count_dent_boxes(&results, &keys.dent_boxes);

    let updated_at = annotation
        .and_then(|annotation| annotation.effective_timestamp())
        .unwrap_or_default()
        .to_string();
    let annotator = annotation
        .and_then(|annotation| annotation.completed_by())
        .map(|user| user.display_name())
        .unwrap_or_default();

    debug!(
        task_id = ?task.id(),
        annotated = annotation.is_some(),
        hail_present = %hail_present,
        dents = dent_counts.total(),
        "normalized task"
    );

    ProcessedTask::new(
        task.id(),
        task.image().unwrap_or_default().to_string(),
        hail_present,
        labels,
        dent_counts,
        updated_at,
        annotator,
    )
}

/// Select the annotation with the most recent effective timestamp.
///
/// Comparison is strict, so on ties the earliest annotation in iteration
/// order wins. A comparison involving an unparseable timestamp is false:
/// such an annotation never displaces the current pick, and once picked
/// (by being first) is never displaced either.
pub fn latest_annotation<'a>(
    annotations: impl IntoIterator<Item = RawAnnotation<'a>>,
) -> Option<RawAnnotation<'a>> {
    annotations.into_iter().reduce(|latest, current| {
        if is_newer(&current, &latest) {
            current
        } else {
            latest
        }
    })
}

fn is_newer(candidate: &RawAnnotation<'_>, current: &RawAnnotation<'_>) -> bool {
    let instant = |annotation: &RawAnnotation<'_>| {
        annotation.effective_timestamp().and_then(parse_timestamp)
    };
    match (instant(candidate), instant(current)) {
        (Some(candidate), Some(current)) => candidate > current,
        _ => false,
    }
}

/// Parse an export timestamp as a UTC instant.
///
/// Accepts RFC 3339 (`2024-05-01T12:00:00.123456Z`), naive date-times
/// without an offset (read as UTC) and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// First choice of the first result tagged `from_name`, or `""`.
fn extract_choice(results: &[RawResult<'_>], from_name: &str) -> String {
    results
        .iter()
        .find(|result| result.from_name() == Some(from_name))
        .and_then(RawResult::first_choice)
        .unwrap_or_default()
        .to_string()
}

/// Tally rectangle labels across every result tagged `from_name`.
fn count_dent_boxes(results: &[RawResult<'_>], from_name: &str) -> DentCounts {
    let mut counts = DentCounts::default();
    results
        .iter()
        .filter(|result| result.from_name() == Some(from_name))
        .flat_map(RawResult::rectangle_labels)
        .filter_map(DentSize::from_label)
        .for_each(|size| counts.increment(size));
    counts
}
