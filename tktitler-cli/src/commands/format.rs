//! Format command implementation

use crate::error::CliError;
use crate::output::{create_formatter, FormattedReport, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::io;
use tktitler_core::diagnostics::capture;
use tktitler_core::{parse_gfyear, EmailStyle, PostfixStyle, PrefixStyle, Title, Titler};

/// Which rendering of a title to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatKind {
    /// Relative prefix, e.g. T2OCERM
    Prefix,
    /// Prefix of the cohort one older than its K, e.g. KGCERM
    Kprefix,
    /// Absolute postfix, e.g. CERM1617
    Postfix,
    /// Prefix followed by the period, e.g. GCERM 2016/17
    Prepostfix,
    /// Email-safe form, e.g. FUHOE11
    Email,
}

impl FormatKind {
    fn as_str(&self) -> &'static str {
        match self {
            FormatKind::Prefix => "prefix",
            FormatKind::Kprefix => "kprefix",
            FormatKind::Postfix => "postfix",
            FormatKind::Prepostfix => "prepostfix",
            FormatKind::Email => "email",
        }
    }
}

/// Arguments for the format command
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Root of the title, e.g. CERM
    #[arg(value_name = "ROOT")]
    pub root: String,

    /// Period of the title, e.g. 2016
    #[arg(value_name = "PERIOD")]
    pub period: String,

    /// Renderings to produce, in order
    #[arg(short, long, value_enum, default_value = "prefix", num_args = 1..)]
    pub kind: Vec<FormatKind>,

    /// Reference year for relative forms
    #[arg(short, long, value_name = "YEAR", env = "TKTITLER_GFYEAR")]
    pub gfyear: Option<String>,

    /// Prefix style: normal, unicode or tex
    #[arg(long, value_name = "STYLE", default_value = "normal")]
    pub prefix_style: PrefixStyle,

    /// Postfix style: single, double, slash, longsingle or longslash
    #[arg(long, value_name = "STYLE", default_value = "single")]
    pub postfix_style: PostfixStyle,

    /// Email style: postfix or prefix
    #[arg(long, value_name = "STYLE", default_value = "postfix")]
    pub email_style: EmailStyle,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl FormatArgs {
    /// Execute the format command
    pub fn execute(&self, titler: &Titler) -> Result<()> {
        let title = Title::from_raw(&self.root, &self.period)?;
        let gfyear = self.gfyear.as_deref().map(parse_gfyear).transpose()?;

        let reports = self.render_all(titler, &title, gfyear)?;

        let stdout = io::stdout();
        let mut formatter = create_formatter(self.format, stdout.lock());
        for report in &reports {
            formatter.write_formatted(report)?;
        }
        formatter.finish()
    }

    /// Render `title` in every requested form
    pub fn render_all(
        &self,
        titler: &Titler,
        title: &Title,
        gfyear: Option<i32>,
    ) -> Result<Vec<FormattedReport>> {
        self.kind
            .iter()
            .map(|&kind| -> Result<FormattedReport> {
                let (text, warnings) = capture(|| self.render(titler, kind, title, gfyear));
                let text = text.map_err(|e| CliError::FormatFailed(e.to_string()))?;
                Ok(FormattedReport {
                    title: title.clone(),
                    kind: kind.as_str().to_string(),
                    text,
                    warnings,
                })
            })
            .collect()
    }

    fn render(
        &self,
        titler: &Titler,
        kind: FormatKind,
        title: &Title,
        gfyear: Option<i32>,
    ) -> tktitler_core::Result<String> {
        match kind {
            FormatKind::Prefix => titler.prefix(title, gfyear, self.prefix_style),
            FormatKind::Kprefix => titler.kprefix(title, gfyear, self.prefix_style),
            FormatKind::Postfix => titler.postfix(title, self.postfix_style),
            FormatKind::Prepostfix => {
                titler.prepostfix(title, gfyear, self.prefix_style, self.postfix_style)
            }
            FormatKind::Email => titler.email(title, gfyear, self.email_style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Cli, Commands};
    use clap::Parser;
    use tktitler_core::Diagnostic;

    fn format_args(argv: &[&str]) -> FormatArgs {
        let argv = ["tktitler", "format"].iter().chain(argv);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Format(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    fn texts(args: &FormatArgs, gfyear: Option<i32>) -> Vec<String> {
        let title = Title::from_raw(&args.root, &args.period).unwrap();
        args.render_all(Titler::shared(), &title, gfyear)
            .unwrap()
            .into_iter()
            .map(|report| report.text)
            .collect()
    }

    #[test]
    fn test_defaults_to_prefix() {
        let args = format_args(&["CERM", "2011"]);
        assert_eq!(args.kind, vec![FormatKind::Prefix]);
        assert_eq!(texts(&args, Some(2016)), vec!["T2OCERM"]);
    }

    #[test]
    fn test_several_kinds_and_styles() {
        let args = format_args(&[
            "FUHØ",
            "2011",
            "--kind",
            "prefix",
            "kprefix",
            "postfix",
            "email",
            "--prefix-style",
            "unicode",
            "--postfix-style",
            "longslash",
        ]);
        assert_eq!(
            texts(&args, Some(2016)),
            vec!["T²OFUHØ", "KT³OFUHØ", "FUHØ 2011/12", "FUHOE11"]
        );
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        let argv = ["tktitler", "format", "CERM", "2011", "--prefix-style", "fancy"];
        let err = Cli::try_parse_from(argv).unwrap_err();
        assert!(err.to_string().contains("'fancy' is not a valid prefix type"));
    }

    #[test]
    fn test_missing_gfyear_fails() {
        let args = format_args(&["CERM", "2011"]);
        let title = Title::new("CERM", 2011);
        let err = args.render_all(Titler::shared(), &title, None).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_warnings_are_attached() {
        let args = format_args(&["EFUIT", "2011", "--kind", "postfix"]);
        let title = Title::new("EFUIT", 2011);
        let reports = args.render_all(Titler::shared(), &title, None).unwrap();
        assert_eq!(reports[0].warnings, vec![Diagnostic::EfuitPostfix]);
    }
}
