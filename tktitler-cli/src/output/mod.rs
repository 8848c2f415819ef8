//! Output formatting module

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tktitler_core::{Diagnostic, ErrorKind, RelativeAlias, Title, TitleError};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Output the outcome of parsing one alias
    fn write_alias(&mut self, report: &AliasReport) -> Result<()>;

    /// Output one formatted title
    fn write_formatted(&mut self, report: &FormattedReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated plain text, one line per result
    #[default]
    Text,
    /// JSON array of results with their warnings
    Json,
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}

/// What became of one alias
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Resolved to an absolute title
    Title(Title),
    /// Resolved relative to an unknown reference year
    Relative(RelativeAlias),
    /// Could not be resolved
    Error {
        /// Coarse error class
        kind: String,
        /// Human-readable message
        message: String,
    },
}

impl Outcome {
    /// Whether the alias failed to resolve
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }
}

impl From<TitleError> for Outcome {
    fn from(err: TitleError) -> Self {
        let kind = match err.kind() {
            ErrorKind::InvalidArgumentType => "invalid_argument_type",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::AmbiguousAlias => "ambiguous_alias",
            ErrorKind::ContextUnset => "context_unset",
        };
        Outcome::Error {
            kind: kind.to_string(),
            message: err.to_string(),
        }
    }
}

/// One parsed alias with the warnings raised while parsing it
#[derive(Debug, Clone, Serialize)]
pub struct AliasReport {
    /// The alias as given
    pub alias: String,
    /// The resolved title, or why it could not be resolved
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Diagnostics emitted while parsing
    pub warnings: Vec<Diagnostic>,
}

/// One formatted title with the warnings raised while formatting it
#[derive(Debug, Clone, Serialize)]
pub struct FormattedReport {
    /// The title that was formatted
    pub title: Title,
    /// Which formatter produced `text`
    pub kind: String,
    /// The formatted title
    pub text: String,
    /// Diagnostics emitted while formatting
    pub warnings: Vec<Diagnostic>,
}
