//! Common type definitions used across the codebase

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved hail classification for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HailPresent {
    Yes,
    No,
    Pending,
}

impl HailPresent {
    /// Map an extracted `hail_present` choice. Only the exact literals
    /// `YES` and `NO` are recognized; everything else is pending.
    pub fn from_choice(choice: &str) -> Self {
        match choice {
            "YES" => HailPresent::Yes,
            "NO" => HailPresent::No,
            _ => HailPresent::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HailPresent::Yes => "YES",
            HailPresent::No => "NO",
            HailPresent::Pending => "PENDING",
        }
    }
}

impl fmt::Display for HailPresent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dent size categories, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DentSize {
    Dime,
    Nickel,
    Quarter,
    HalfDollar,
    Oversized,
}

impl DentSize {
    pub const ALL: [DentSize; 5] = [
        DentSize::Dime,
        DentSize::Nickel,
        DentSize::Quarter,
        DentSize::HalfDollar,
        DentSize::Oversized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DentSize::Dime => "DIME",
            DentSize::Nickel => "NICKEL",
            DentSize::Quarter => "QUARTER",
            DentSize::HalfDollar => "HALF_DOLLAR",
            DentSize::Oversized => "OVERSIZED",
        }
    }

    /// Case-insensitive lookup of a rectangle label.
    pub fn from_label(label: &str) -> Option<Self> {
        let upper = label.to_uppercase();
        DentSize::ALL
            .into_iter()
            .find(|size| size.as_str() == upper)
    }
}

impl fmt::Display for DentSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dent box counts per size category.
///
/// Serializes as `{"DIME":..,"NICKEL":..,"QUARTER":..,"HALF_DOLLAR":..,"OVERSIZED":..}`
/// in category order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DentCounts {
    pub dime: u32,
    pub nickel: u32,
    pub quarter: u32,
    pub half_dollar: u32,
    pub oversized: u32,
}

impl DentCounts {
    pub fn get(&self, size: DentSize) -> u32 {
        match size {
            DentSize::Dime => self.dime,
            DentSize::Nickel => self.nickel,
            DentSize::Quarter => self.quarter,
            DentSize::HalfDollar => self.half_dollar,
            DentSize::Oversized => self.oversized,
        }
    }

    pub fn increment(&mut self, size: DentSize) {
        let slot = match size {
            DentSize::Dime => &mut self.dime,
            DentSize::Nickel => &mut self.nickel,
            DentSize::Quarter => &mut self.quarter,
            DentSize::HalfDollar => &mut self.half_dollar,
            DentSize::Oversized => &mut self.oversized,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u32 {
        DentSize::ALL.iter().map(|size| self.get(*size)).sum()
    }
}

/// One flattened record per input task.
///
/// `dent_boxes_count_total` and `final_total_dents` always equal the sum of
/// the per-size counts; the `final_*` fields mirror `dent_boxes_count_by_size`
/// for CSV compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedTask {
    pub task_id: Option<i64>,
    pub image: String,
    pub hail_present: HailPresent,
    pub has_damage: bool,
    pub primary_panel: String,
    pub method: String,
    pub hail_grid_present_in_photo: String,
    pub hail_grid_type: String,
    pub dent_boxes_count_total: u32,
    pub dent_boxes_count_by_size: DentCounts,
    pub final_total_dents: u32,
    pub final_dime_count: u32,
    pub final_nickel_count: u32,
    pub final_quarter_count: u32,
    pub final_half_dollar_count: u32,
    pub final_oversized_count: u32,
    pub updated_at: String,
    pub annotator: String,
}

/// Categorical fields extracted from the governing annotation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskLabels {
    pub primary_panel: String,
    pub method: String,
    pub hail_grid_present_in_photo: String,
    pub hail_grid_type: String,
}

impl ProcessedTask {
    /// Assemble a record, deriving `has_damage` and every dent total from
    /// the classification and per-size counts.
    pub fn new(
        task_id: Option<i64>,
        image: String,
        hail_present: HailPresent,
        labels: TaskLabels,
        dent_counts: DentCounts,
        updated_at: String,
        annotator: String,
    ) -> Self {
        let total = dent_counts.total();
        Self {
            task_id,
            image,
            hail_present,
            has_damage: hail_present == HailPresent::Yes,
            primary_panel: labels.primary_panel,
            method: labels.method,
            hail_grid_present_in_photo: labels.hail_grid_present_in_photo,
            hail_grid_type: labels.hail_grid_type,
            dent_boxes_count_total: total,
            dent_boxes_count_by_size: dent_counts,
            final_total_dents: total,
            final_dime_count: dent_counts.dime,
            final_nickel_count: dent_counts.nickel,
            final_quarter_count: dent_counts.quarter,
            final_half_dollar_count: dent_counts.half_dollar,
            final_oversized_count: dent_counts.oversized,
            updated_at,
            annotator,
        }
    }
}

/// Per-category dent totals across damage tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DentSizeStat {
    pub size: DentSize,
    pub total_boxes: u64,
    pub image_count: usize,
}

/// Label -> occurrence count, in first-seen order
pub type Distribution = IndexMap<String, usize>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub total_tasks: usize,
    pub damage_count: usize,
    pub no_damage_count: usize,
    pub pending_count: usize,
    pub dent_size_distribution: Vec<DentSizeStat>,
    pub primary_panel_distribution: Distribution,
    pub method_distribution: Distribution,
    pub hail_grid_type_distribution: Distribution,
    pub processed_tasks: Vec<ProcessedTask>,
}

impl DatasetStats {
    /// Tasks classified as damage (`hail_present == YES`)
    pub fn damage_tasks(&self) -> impl Iterator<Item = &ProcessedTask> {
        self.processed_tasks.iter().filter(|task| task.has_damage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hail_present_only_accepts_exact_literals() {
        assert_eq!(HailPresent::from_choice("YES"), HailPresent::Yes);
        assert_eq!(HailPresent::from_choice("NO"), HailPresent::No);
        assert_eq!(HailPresent::from_choice("yes"), HailPresent::Pending);
        assert_eq!(HailPresent::from_choice("MAYBE"), HailPresent::Pending);
        assert_eq!(HailPresent::from_choice(""), HailPresent::Pending);
    }

    #[test]
    fn dent_size_label_lookup_is_case_insensitive() {
        assert_eq!(DentSize::from_label("dime"), Some(DentSize::Dime));
        assert_eq!(DentSize::from_label("Half_Dollar"), Some(DentSize::HalfDollar));
        assert_eq!(DentSize::from_label("OVERSIZED"), Some(DentSize::Oversized));
        assert_eq!(DentSize::from_label("half dollar"), None);
        assert_eq!(DentSize::from_label("penny"), None);
    }

    #[test]
    fn dent_counts_serialize_in_category_order() {
        let mut counts = DentCounts::default();
        counts.increment(DentSize::Quarter);
        counts.increment(DentSize::Quarter);
        counts.increment(DentSize::HalfDollar);

        assert_eq!(
            serde_json::to_string(&counts).unwrap(),
            r#"{"DIME":0,"NICKEL":0,"QUARTER":2,"HALF_DOLLAR":1,"OVERSIZED":0}"#
        );
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn processed_task_mirrors_dent_totals() {
        let counts = DentCounts {
            dime: 1,
            nickel: 2,
            quarter: 3,
            half_dollar: 4,
            oversized: 5,
        };
        let task = ProcessedTask::new(
            Some(7),
            "img.jpg".into(),
            HailPresent::Yes,
            TaskLabels::default(),
            counts,
            String::new(),
            String::new(),
        );

        assert!(task.has_damage);
        assert_eq!(task.dent_boxes_count_total, 15);
        assert_eq!(task.final_total_dents, 15);
        assert_eq!(task.final_half_dollar_count, 4);
        assert_eq!(task.final_oversized_count, 5);
    }
}
