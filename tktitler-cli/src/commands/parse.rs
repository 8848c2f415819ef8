//! Parse command implementation

use crate::error::CliError;
use crate::output::{create_formatter, AliasReport, Outcome, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::io;
use tktitler_core::diagnostics::capture;
use tktitler_core::{parse_gfyear, Titler};

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Aliases to resolve
    #[arg(value_name = "ALIAS", required = true)]
    pub aliases: Vec<String>,

    /// Reference year for aliases without a postfix
    #[arg(short, long, value_name = "YEAR", env = "TKTITLER_GFYEAR")]
    pub gfyear: Option<String>,

    /// Report the age relative to the reference year instead of a title
    #[arg(short, long)]
    pub relative: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self, titler: &Titler) -> Result<()> {
        let gfyear = self.gfyear.as_deref().map(parse_gfyear).transpose()?;

        let stdout = io::stdout();
        let mut formatter = create_formatter(self.format, stdout.lock());
        let reports = self.resolve_all(titler, gfyear);
        for report in &reports {
            formatter.write_alias(report)?;
        }
        formatter.finish()?;

        let failed = reports.iter().filter(|r| r.outcome.is_error()).count();
        if failed > 0 {
            return Err(CliError::ParseFailed {
                failed,
                total: reports.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Resolve every alias, collecting the warnings each one raises
    pub fn resolve_all(&self, titler: &Titler, gfyear: Option<i32>) -> Vec<AliasReport> {
        self.aliases
            .iter()
            .map(|alias| {
                let (outcome, warnings) = capture(|| self.resolve(titler, alias, gfyear));
                AliasReport {
                    alias: alias.clone(),
                    outcome,
                    warnings,
                }
            })
            .collect()
    }

    fn resolve(&self, titler: &Titler, alias: &str, gfyear: Option<i32>) -> Outcome {
        let resolved = if self.relative {
            titler.parse_relative(alias).map(Outcome::Relative)
        } else {
            titler.parse(alias, gfyear).map(Outcome::Title)
        };
        resolved.unwrap_or_else(Outcome::from)
    }
}
