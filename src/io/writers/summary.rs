//! Paste-ready text digest of a dataset (Slack markdown flavour).

use crate::core::{DatasetStats, Distribution};
use crate::io::output::OutputWriter;
use std::io::Write;

/// Build the multi-line digest.
///
/// The dent size block always lists all five categories. Panel, method and
/// grid type blocks are emitted only for non-empty distributions, sorted by
/// descending count with ties in first-seen order.
pub fn to_summary(stats: &DatasetStats) -> String {
    let mut lines: Vec<String> = vec![
        "📊 *Hail Damage Dataset Statistics*".to_string(),
        String::new(),
        "*Summary:*".to_string(),
        format!("• Total tasks: {}", stats.total_tasks),
        format!("• ✅ Damage (hail_present=YES): {}", stats.damage_count),
        format!("• ❌ No damage (hail_present=NO): {}", stats.no_damage_count),
        format!("• ⏳ Pending/unlabeled: {}", stats.pending_count),
        String::new(),
        "*Dent Size Distribution (damage images only):*".to_string(),
    ];

    lines.extend(stats.dent_size_distribution.iter().map(|entry| {
        format!(
            "• {}: {} boxes across {} images",
            entry.size, entry.total_boxes, entry.image_count
        )
    }));

    push_distribution(
        &mut lines,
        "*Primary Panel Distribution:*",
        &stats.primary_panel_distribution,
    );
    push_distribution(&mut lines, "*Method Distribution:*", &stats.method_distribution);
    push_distribution(
        &mut lines,
        "*Hail Grid Type Distribution:*",
        &stats.hail_grid_type_distribution,
    );

    lines.join("\n")
}

fn push_distribution(lines: &mut Vec<String>, title: &str, distribution: &Distribution) {
    if distribution.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(title.to_string());
    lines.extend(
        sorted_by_count(distribution)
            .into_iter()
            .map(|(label, count)| format!("• {label}: {count}")),
    );
}

/// Entries by descending count; `sort_by` is stable so ties keep insertion order.
pub fn sorted_by_count(distribution: &Distribution) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = distribution
        .iter()
        .map(|(label, &count)| (label.as_str(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

pub struct SummaryWriter<W: Write> {
    writer: W,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for SummaryWriter<W> {
    fn write_stats(&mut self, stats: &DatasetStats) -> anyhow::Result<()> {
        self.writer.write_all(to_summary(stats).as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn damage_task(panel: &str, method: &str, dents: &[&str]) -> Value {
        json!({
            "id": 1,
            "annotations": [{
                "created_at": "2024-01-01",
                "result": [
                    { "from_name": "hail_present", "value": { "choices": ["YES"] } },
                    { "from_name": "primary_panel", "value": { "choices": [panel] } },
                    { "from_name": "method", "value": { "choices": [method] } },
                    { "from_name": "dent_boxes", "value": { "rectanglelabels": dents } }
                ]
            }]
        })
    }

    #[test]
    fn empty_dataset_lists_all_sizes_and_no_distributions() {
        let summary = to_summary(&aggregate(&[]));

        assert_eq!(
            summary,
            indoc! {"
                📊 *Hail Damage Dataset Statistics*

                *Summary:*
                • Total tasks: 0
                • ✅ Damage (hail_present=YES): 0
                • ❌ No damage (hail_present=NO): 0
                • ⏳ Pending/unlabeled: 0

                *Dent Size Distribution (damage images only):*
                • DIME: 0 boxes across 0 images
                • NICKEL: 0 boxes across 0 images
                • QUARTER: 0 boxes across 0 images
                • HALF_DOLLAR: 0 boxes across 0 images
                • OVERSIZED: 0 boxes across 0 images"}
        );
    }

    #[test]
    fn distributions_sorted_by_descending_count() {
        let tasks = vec![
            damage_task("ROOF", "PDR", &["dime"]),
            damage_task("HOOD", "PDR", &["dime", "quarter"]),
            damage_task("HOOD", "", &[]),
            json!({ "id": 2, "annotations": [] }),
        ];
        let summary = to_summary(&aggregate(&tasks));

        assert!(summary.contains("• ⏳ Pending/unlabeled: 1"));
        assert!(summary.contains("• DIME: 2 boxes across 2 images"));
        assert!(summary.contains("• QUARTER: 1 boxes across 1 images"));
        assert!(summary.ends_with(indoc! {"
            *Primary Panel Distribution:*
            • HOOD: 2
            • ROOF: 1

            *Method Distribution:*
            • PDR: 2"}));
        assert!(!summary.contains("*Hail Grid Type Distribution:*"));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let mut distribution = Distribution::new();
        distribution.insert("B".to_string(), 1);
        distribution.insert("A".to_string(), 3);
        distribution.insert("C".to_string(), 1);

        assert_eq!(
            sorted_by_count(&distribution),
            vec![("A", 3), ("B", 1), ("C", 1)]
        );
    }
}
