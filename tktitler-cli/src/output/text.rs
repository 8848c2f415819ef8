//! Plain text output formatter

use super::{AliasReport, FormattedReport, Outcome, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one tab-separated line per result
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_alias(&mut self, report: &AliasReport) -> Result<()> {
        match &report.outcome {
            Outcome::Title(title) => {
                writeln!(self.writer, "{}\t{}\t{}", report.alias, title.root, title.period)?
            }
            Outcome::Relative(relative) => {
                let year = relative
                    .absolute_year
                    .map_or_else(|| "-".to_string(), |year| year.to_string());
                writeln!(
                    self.writer,
                    "{}\t{}\t{}\t{}",
                    report.alias, relative.age, relative.root, year
                )?
            }
            Outcome::Error { message, .. } => {
                writeln!(self.writer, "{}\terror: {}", report.alias, message)?
            }
        }
        Ok(())
    }

    fn write_formatted(&mut self, report: &FormattedReport) -> Result<()> {
        writeln!(self.writer, "{}", report.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
