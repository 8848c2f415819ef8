//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tktitler_core::{GrammarConfig, Titler};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to grammar configuration file to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating grammar configuration: {}", self.file.display());

        // Compiling the grammar also catches tables that only fail as regexes
        let checked = GrammarConfig::from_file(&self.file)
            .and_then(|config| Titler::from_config(&config).map(|_| config));
        match checked {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Known roots: {}", config.roots.known.join(", "));
                if let Some(reference) = config.reference_year {
                    println!("  Reference year: {}", reference.default);
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            file: PathBuf::from("grammar.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("grammar.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[roots]
known = ["CERM", "FORM", "KASS"]

[display]
substitutions = { KASS = "KA$$" }

[reference_year]
default = 2016
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            file: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let toml_content = r#"
[roots]
known = ["cerm"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            file: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }
}
