//! CLI command implementations

use crate::error::CliError;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tktitler_core::{with_gfyear, GfyearGuard, GrammarConfig, Titler};

pub mod format;
pub mod generate_config;
pub mod parse;
pub mod validate;

/// Parse and format TÅGEKAMMER titles
#[derive(Debug, Parser)]
#[command(name = "tktitler", version, about, long_about = None)]
pub struct Cli {
    /// Grammar configuration file (default: the built-in grammar)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve aliases such as GFORM or CERM16/17 to titles
    Parse(parse::ParseArgs),

    /// Render a title in prefix, postfix or email form
    Format(format::FormatArgs),

    /// Validate a grammar configuration file
    Validate(validate::ValidateArgs),

    /// Write the built-in grammar configuration as a starting point
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Cli {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        match &self.command {
            Commands::Parse(args) => {
                let (titler, _scope) = self.load_titler()?;
                args.execute(&titler)
            }
            Commands::Format(args) => {
                let (titler, _scope) = self.load_titler()?;
                args.execute(&titler)
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }

    /// Build the titler for the selected grammar
    ///
    /// A `[reference_year]` section in the configuration is installed as
    /// the outermost gfyear scope for the rest of the command.
    fn load_titler(&self) -> Result<(Titler, Option<GfyearGuard>)> {
        let config = match &self.config {
            Some(path) => {
                log::info!("Loading grammar configuration from {}", path.display());
                GrammarConfig::from_file(path)
                    .map_err(|e| CliError::ConfigError(e.to_string()))?
            }
            None => GrammarConfig::embedded().clone(),
        };

        let scope = config
            .reference_year
            .map(|reference| with_gfyear(reference.default))
            .transpose()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        if let Some(scope) = &scope {
            log::info!("Using reference year {} from configuration", scope.year());
        }

        let titler =
            Titler::from_config(&config).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok((titler, scope))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second initialization (e.g. from tests) is harmless
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tktitler", "parse", "GFORM", "-vv", "-q"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Parse(_)));
    }

    #[test]
    fn test_config_flag() {
        let cli =
            Cli::try_parse_from(["tktitler", "-c", "grammar.toml", "format", "CERM", "2016"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("grammar.toml")));
        assert!(matches!(cli.command, Commands::Format(_)));
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Cli::try_parse_from(["tktitler"]).is_err());
    }
}
