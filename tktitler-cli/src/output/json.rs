//! JSON output formatter

use super::{AliasReport, FormattedReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs results as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<serde_json::Value>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_alias(&mut self, report: &AliasReport) -> Result<()> {
        self.records.push(serde_json::to_value(report)?);
        Ok(())
    }

    fn write_formatted(&mut self, report: &FormattedReport) -> Result<()> {
        self.records.push(serde_json::to_value(report)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
