pub mod input;
pub mod output;
pub mod writers;

pub use input::{load_tasks, parse_tasks};
pub use output::{create_writer, OutputFormat, OutputWriter};
pub use writers::{to_csv, to_summary};
