//! Core pipeline: raw export views, normalization and aggregation.
//!
//! Every stage here is a pure function of its input. Errors only exist at
//! the I/O boundary (see [`crate::io`]).

pub mod aggregate;
pub mod errors;
pub mod fields;
pub mod normalize;
pub mod types;

pub use aggregate::{aggregate, aggregate_processed, aggregate_with_keys};
pub use errors::{Error, Result};
pub use fields::{RawAnnotation, RawAnnotator, RawResult, RawTask};
pub use normalize::{latest_annotation, normalize, normalize_with_keys, parse_timestamp};
pub use types::{
    DatasetStats, DentCounts, DentSize, DentSizeStat, Distribution, HailPresent, ProcessedTask,
    TaskLabels,
};
