//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tktitler_core::config::DEFAULT_CONFIG_TOML;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let Some(output) = &self.output else {
            print!("{DEFAULT_CONFIG_TOML}");
            return Ok(());
        };

        std::fs::write(output, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Failed to write to {}", output.display()))?;

        println!("✓ Grammar configuration written to {}", output.display());
        println!();
        println!("Next steps:");
        println!("1. Add your own roots under [roots] known");
        println!("2. Validate your configuration:");
        println!("   tktitler validate {}", output.display());
        println!("3. Use it for parsing:");
        println!("   tktitler -c {} parse GFORM", output.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tktitler_core::GrammarConfig;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: Some(PathBuf::from("grammar.toml")),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("grammar.toml"));
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("grammar.toml");

        let args = GenerateConfigArgs {
            output: Some(output_path.clone()),
        };

        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        // The written file must load back as the built-in grammar
        let written = GrammarConfig::from_file(&output_path).unwrap();
        assert_eq!(&written, GrammarConfig::embedded());
    }
}
