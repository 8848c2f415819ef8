//! Alias grammar
//!
//! An alias is `prefix root postfix` after normalization. Three patterns
//! are tried in order, each splitting the normalized alias losslessly:
//!
//! 1. `E?FU` followed by two letters, where a letter may be spelled as a
//!    digraph (`FUOEAE` is FUØÆ). The two letters must have exactly one
//!    reading, otherwise the alias is ambiguous.
//! 2. One of the configured known roots.
//! 3. Anything at all, taking as little as possible as root.
//!
//! The prefix is greedy, so an unknown root starting with a step letter
//! loses that letter to the prefix. Known roots are listed precisely to
//! prevent that for KASS and BEST.

use crate::config::GrammarConfig;
use crate::digraph::{self, DIGRAPHS, NATIVE_UPPER};
use crate::error::{Result, TitleError};
use crate::normalize::Normalizer;
use crate::postfix::parse_postfix;
use crate::prefix::parse_prefix;
use crate::replace::MultiReplace;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

const PREFIX_PATTERN: &str = r"(?P<pre>(?:[KGBOT][KGBOT0-9]*)?)";
const POSTFIX_PATTERN: &str = r"(?P<post>(?:[0-9]{2}|[0-9]{4})(?:/(?:[0-9]{2}|[0-9]{4}))?)?";

/// Which pattern split an alias
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootKind {
    /// `E?FU` plus two letters
    Digraph,
    /// A configured known root
    Known,
    /// Anything else
    Other,
}

/// A normalized alias split into its three parts
///
/// `prefix + root + postfix` is exactly the normalized alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasParts {
    /// Leading step letters and exponents, possibly empty
    pub prefix: String,
    /// The root between prefix and postfix, possibly empty
    pub root: String,
    /// Trailing period digits, possibly empty
    pub postfix: String,
    /// Which grammar branch matched the root
    pub kind: RootKind,
}

/// An alias resolved relative to an unknown reference year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelativeAlias {
    /// Years before the reference year (negative: after)
    pub age: i32,
    /// The root as typed, normalized
    pub root: String,
    /// The root with digraphs contracted to native letters
    pub native_root: String,
    /// Year given by the postfix, if any
    pub absolute_year: Option<i32>,
}

impl RelativeAlias {
    /// `(age, root, absolute_year)`
    pub fn as_tuple(&self) -> (i32, &str, Option<i32>) {
        (self.age, &self.root, self.absolute_year)
    }
}

#[derive(Debug, Clone)]
struct Branch {
    kind: RootKind,
    pattern: Regex,
}

/// Compiled alias grammar
#[derive(Debug, Clone)]
pub struct AliasGrammar {
    normalizer: Normalizer,
    branches: Vec<Branch>,
}

fn letter_pattern() -> String {
    let natives = NATIVE_UPPER.iter().map(|ch| ch.to_string());
    let digraphs = DIGRAPHS
        .iter()
        .filter(|(native, _)| native.is_uppercase())
        .map(|(_, spelled)| spelled.to_string());
    std::iter::once("[A-Z]".to_string())
        .chain(natives)
        .chain(digraphs)
        .collect::<Vec<_>>()
        .join("|")
}

fn compile(kind: RootKind, root_pattern: &str) -> Result<Branch> {
    let full = format!("^{PREFIX_PATTERN}(?P<root>{root_pattern}){POSTFIX_PATTERN}$");
    let pattern = Regex::new(&full)
        .map_err(|e| TitleError::Config(format!("invalid {kind:?} root pattern: {e}")))?;
    Ok(Branch { kind, pattern })
}

impl AliasGrammar {
    /// Compile the grammar described by `config`
    pub fn from_config(config: &GrammarConfig) -> Result<Self> {
        config.validate()?;

        let replacements = MultiReplace::new(
            config
                .normalize
                .replacements
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        )?;
        let lookalikes: HashMap<char, char> = config.lookalike_chars().collect();
        let normalizer = Normalizer::new(replacements, lookalikes);

        let letter = letter_pattern();
        let digraph_root = format!("E?FU(?:{letter})(?:{letter})");

        let mut known: Vec<&String> = config.roots.known.iter().collect();
        known.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        known.dedup();
        let known_root = known
            .iter()
            .map(|root| regex::escape(root))
            .collect::<Vec<_>>()
            .join("|");

        let branches = vec![
            compile(RootKind::Digraph, &digraph_root)?,
            compile(RootKind::Known, &known_root)?,
            compile(RootKind::Other, "(?s:.*?)")?,
        ];

        Ok(Self {
            normalizer,
            branches,
        })
    }

    /// The grammar compiled from the embedded configuration
    pub fn default_grammar() -> &'static AliasGrammar {
        static DEFAULT: OnceLock<AliasGrammar> = OnceLock::new();
        DEFAULT.get_or_init(|| {
            AliasGrammar::from_config(GrammarConfig::embedded())
                .expect("embedded grammar config must compile")
        })
    }

    /// The normalizer in front of this grammar
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Normalize `alias` and split it into prefix, root and postfix
    pub fn split(&self, alias: &str) -> Result<AliasParts> {
        let normalized = self.normalizer.normalize(alias);
        for branch in &self.branches {
            let Some(caps) = branch.pattern.captures(&normalized) else {
                continue;
            };
            let part = |name: &str| caps.name(name).map_or("", |m| m.as_str()).to_string();
            return Ok(AliasParts {
                prefix: part("pre"),
                root: part("root"),
                postfix: part("post"),
                kind: branch.kind,
            });
        }
        // The last branch matches every string
        Err(TitleError::InvalidPrefix(normalized))
    }

    /// Resolve an alias to `(age, root, absolute_year)`
    pub fn parse_relative(&self, alias: &str) -> Result<RelativeAlias> {
        let parts = self.split(alias)?;

        let native_root = match parts.kind {
            RootKind::Digraph => {
                contract_fu_root(&parts.root).ok_or_else(|| TitleError::AmbiguousAlias {
                    alias: alias.to_string(),
                    root: parts.root.clone(),
                })?
            }
            RootKind::Known | RootKind::Other => parts.root.clone(),
        };

        let age = parse_prefix(&parts.prefix)?;
        let absolute_year = parse_postfix(&parts.postfix)?;

        log::debug!(
            target: "tktitler",
            "alias {alias:?} split as {:?} + {:?} ({:?}) + {:?}",
            parts.prefix,
            parts.root,
            parts.kind,
            parts.postfix
        );

        Ok(RelativeAlias {
            age,
            root: parts.root,
            native_root,
            absolute_year,
        })
    }
}

/// Contract the two letters after `FU`/`EFU`; `None` if ambiguous
fn contract_fu_root(root: &str) -> Option<String> {
    let head_len = if root.starts_with("EFU") { 3 } else { 2 };
    let (head, tail) = root.split_at(head_len);
    let native = digraph::contract_unique(tail, 2)?;
    Some(format!("{head}{native}"))
}
