use crate::core::DatasetStats;
use crate::io::output::OutputWriter;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_stats(&mut self, stats: &DatasetStats) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(stats)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}
