pub mod csv;
pub mod json;
pub mod summary;

pub use csv::{to_csv, CsvWriter};
pub use json::JsonWriter;
pub use summary::{to_summary, SummaryWriter};
