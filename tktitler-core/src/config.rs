//! Grammar configuration
//!
//! The data tables of the alias grammar live in TOML so organizations can
//! extend the root vocabulary without touching code. The default tables
//! are embedded from `configs/default.toml`.

use crate::error::{Result, TitleError};
use crate::title::is_four_digit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

/// The embedded default configuration, verbatim
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../configs/default.toml");

/// Root grammar configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarConfig {
    pub roots: Roots,
    #[serde(default)]
    pub display: Display,
    #[serde(default)]
    pub normalize: Normalize,
    #[serde(default)]
    pub reference_year: Option<ReferenceYear>,
}

/// Root vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roots {
    pub known: Vec<String>,
}

/// Root display substitutions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Display {
    #[serde(default)]
    pub substitutions: BTreeMap<String, String>,
}

/// Normalization tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Normalize {
    #[serde(default)]
    pub replacements: BTreeMap<String, String>,
    #[serde(default)]
    pub lookalikes: BTreeMap<String, String>,
}

/// Fallback reference year for front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceYear {
    pub default: i32,
}

impl GrammarConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: GrammarConfig = toml::from_str(toml_str)
            .map_err(|e| TitleError::Config(format!("failed to parse grammar config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TitleError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// The embedded default configuration
    pub fn embedded() -> &'static GrammarConfig {
        static EMBEDDED: OnceLock<GrammarConfig> = OnceLock::new();
        EMBEDDED.get_or_init(|| {
            GrammarConfig::from_toml_str(DEFAULT_CONFIG_TOML)
                .expect("Failed to load embedded grammar config")
        })
    }

    /// Look-alike table as characters; valid after [`validate`](Self::validate)
    pub fn lookalike_chars(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.normalize
            .lookalikes
            .iter()
            .filter_map(|(from, to)| Some((single_char(from)?, single_char(to)?)))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.roots.known.is_empty() {
            return Err(TitleError::Config("no known roots defined".to_string()));
        }

        for root in &self.roots.known {
            if root.is_empty() {
                return Err(TitleError::Config("empty known root".to_string()));
            }
            if !root.chars().all(char::is_alphanumeric) || *root != root.to_uppercase() {
                return Err(TitleError::Config(format!(
                    "known root {root:?} must be upper-case letters and digits"
                )));
            }
            if root.chars().all(|ch| "KGBOT".contains(ch)) {
                return Err(TitleError::Config(format!(
                    "known root {root:?} would be read as a prefix"
                )));
            }
        }

        if self.display.substitutions.keys().any(String::is_empty) {
            return Err(TitleError::Config("empty display substitution".to_string()));
        }

        for needle in self.normalize.replacements.keys() {
            if needle.is_empty()
                || *needle != needle.to_uppercase()
                || needle.chars().any(char::is_whitespace)
            {
                return Err(TitleError::Config(format!(
                    "replacement {needle:?} must be non-empty, upper-case and without whitespace"
                )));
            }
        }

        for (from, to) in &self.normalize.lookalikes {
            if single_char(from).is_none() || single_char(to).is_none() {
                return Err(TitleError::Config(format!(
                    "look-alike {from:?} = {to:?} must map one character to one character"
                )));
            }
        }

        if let Some(ReferenceYear { default }) = self.reference_year {
            if !is_four_digit(default) {
                return Err(TitleError::Config(format!(
                    "reference year {default} must have four digits"
                )));
            }
        }

        Ok(())
    }
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self::embedded().clone()
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
