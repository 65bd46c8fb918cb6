//! Dataset aggregation: fold normalized tasks into [`DatasetStats`].

use super::normalize::normalize_with_keys;
use super::types::{
    DatasetStats, DentSize, DentSizeStat, Distribution, HailPresent, ProcessedTask,
};
use crate::config::LabelKeys;
use serde_json::Value;
use tracing::info;

/// Aggregate raw tasks using the default label keys.
pub fn aggregate(tasks: &[Value]) -> DatasetStats {
    aggregate_with_keys(tasks, &LabelKeys::default())
}

/// Normalize every task (preserving input order) and aggregate the results.
pub fn aggregate_with_keys(tasks: &[Value], keys: &LabelKeys) -> DatasetStats {
    let processed = tasks
        .iter()
        .map(|task| normalize_with_keys(task, keys))
        .collect();
    aggregate_processed(processed)
}

/// Aggregate already-normalized tasks.
///
/// Classification counts partition every task. Dent, panel, method and grid
/// type distributions are computed over damage tasks only.
pub fn aggregate_processed(processed_tasks: Vec<ProcessedTask>) -> DatasetStats {
    let count_of = |status: HailPresent| {
        processed_tasks
            .iter()
            .filter(|task| task.hail_present == status)
            .count()
    };
    let damage_count = count_of(HailPresent::Yes);
    let no_damage_count = count_of(HailPresent::No);
    let pending_count = count_of(HailPresent::Pending);

    let damage_tasks: Vec<&ProcessedTask> =
        processed_tasks.iter().filter(|task| task.has_damage).collect();

    let stats = DatasetStats {
        total_tasks: processed_tasks.len(),
        damage_count,
        no_damage_count,
        pending_count,
        dent_size_distribution: dent_size_distribution(&damage_tasks),
        primary_panel_distribution: distribution(&damage_tasks, |task| &task.primary_panel),
        method_distribution: distribution(&damage_tasks, |task| &task.method),
        hail_grid_type_distribution: distribution(&damage_tasks, |task| &task.hail_grid_type),
        processed_tasks,
    };

    info!(
        total = stats.total_tasks,
        damage = stats.damage_count,
        no_damage = stats.no_damage_count,
        pending = stats.pending_count,
        "aggregated dataset"
    );
    stats
}

/// One entry per dent size, in fixed category order, zero-filled.
fn dent_size_distribution(damage_tasks: &[&ProcessedTask]) -> Vec<DentSizeStat> {
    DentSize::ALL
        .iter()
        .map(|&size| {
            let per_task = damage_tasks
                .iter()
                .map(|task| task.dent_boxes_count_by_size.get(size));
            DentSizeStat {
                size,
                total_boxes: per_task.clone().map(u64::from).sum(),
                image_count: per_task.filter(|&count| count > 0).count(),
            }
        })
        .collect()
}

/// Count non-empty label values in first-seen order.
fn distribution<F>(damage_tasks: &[&ProcessedTask], field: F) -> Distribution
where
    F: Fn(&ProcessedTask) -> &String,
{
    let mut counts = Distribution::new();
    for label in damage_tasks.iter().map(|&task| field(task)) {
        if !label.is_empty() {
            *counts.entry(label.clone()).or_insert(0) += 1;
        }
    }
    counts
}
