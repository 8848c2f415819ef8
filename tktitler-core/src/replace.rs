//! Simultaneous literal replacement

use crate::error::{Result, TitleError};
use regex::{Captures, Regex};
use std::collections::HashMap;

/// Replaces any of a set of literal substrings in one pass
///
/// Longer needles win over shorter ones that start at the same place, so
/// `{"AB": "x", "ABC": "y"}` turns `ABC` into `y`, never `xC`.
#[derive(Debug, Clone)]
pub struct MultiReplace {
    pattern: Option<Regex>,
    table: HashMap<String, String>,
}

impl MultiReplace {
    /// Build from `(needle, replacement)` pairs
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();

        if table.is_empty() {
            return Ok(Self {
                pattern: None,
                table,
            });
        }

        let mut needles: Vec<&String> = table.keys().collect();
        needles.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = needles
            .iter()
            .map(|needle| regex::escape(needle))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&alternation)
            .map_err(|e| TitleError::Config(format!("invalid replacement table: {e}")))?;

        Ok(Self {
            pattern: Some(pattern),
            table,
        })
    }

    /// Apply every replacement to `text`
    pub fn apply(&self, text: &str) -> String {
        match &self.pattern {
            None => text.to_string(),
            Some(pattern) => pattern
                .replace_all(text, |caps: &Captures<'_>| {
                    self.table
                        .get(&caps[0])
                        .cloned()
                        .unwrap_or_else(|| caps[0].to_string())
                })
                .into_owned(),
        }
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_needle_wins() {
        let replace = MultiReplace::new([("ab", "AB"), ("abc", "ABC")]).unwrap();
        assert_eq!(replace.apply("hey abc"), "hey ABC");
        assert_eq!(replace.apply("hey abd"), "hey ABd");
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let replace = MultiReplace::new([("KA$$", "KASS"), ("BEST/FU", "BESTFU")]).unwrap();
        assert_eq!(replace.apply("GKA$$"), "GKASS");
        assert_eq!(replace.apply("BEST/FU16"), "BESTFU16");
    }

    #[test]
    fn test_empty_table_is_identity() {
        let replace = MultiReplace::new(Vec::<(String, String)>::new()).unwrap();
        assert!(replace.is_empty());
        assert_eq!(replace.apply("CERM"), "CERM");
    }
}
