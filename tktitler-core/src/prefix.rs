//! Relative step prefixes
//!
//! A prefix encodes the age of a title, `gfyear - period`, as a run of step
//! letters: K = -1, G = 1, B = 2, O = 3 and T = 1, each optionally followed
//! by a decimal exponent. Formatting produces the canonical form (`T²O` for
//! five years back); parsing accepts any sum (`BTK` is two years back).

use crate::error::{Result, TitleError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Fixed prefixes for ages -1 through 3
const SHORT_PREFIXES: [&str; 5] = ["K", "", "G", "B", "O"];

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// How exponents are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixStyle {
    /// Plain digits: `T2O`
    #[default]
    Normal,
    /// Unicode superscript digits: `T²O`
    Unicode,
    /// A TeX superscript macro: `T\textsuperscript{2}O`
    Tex,
}

impl PrefixStyle {
    /// Keyword used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixStyle::Normal => "normal",
            PrefixStyle::Unicode => "unicode",
            PrefixStyle::Tex => "tex",
        }
    }
}

impl FromStr for PrefixStyle {
    type Err = TitleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "normal" => Ok(PrefixStyle::Normal),
            "unicode" => Ok(PrefixStyle::Unicode),
            "tex" => Ok(PrefixStyle::Tex),
            other => Err(TitleError::UnknownStyle {
                parameter: "prefix",
                keyword: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PrefixStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render an exponent; 1 is implied by a bare step letter
fn exponent(n: i64, style: PrefixStyle) -> String {
    if n == 1 {
        return String::new();
    }
    let digits = n.to_string();
    match style {
        PrefixStyle::Normal => digits,
        PrefixStyle::Unicode => digits
            .bytes()
            .map(|b| SUPERSCRIPT_DIGITS[usize::from(b - b'0')])
            .collect(),
        PrefixStyle::Tex => format!("\\textsuperscript{{{digits}}}"),
    }
}

/// The canonical prefix for `age = gfyear - period`
pub fn format_prefix(age: i32, style: PrefixStyle) -> String {
    let age = i64::from(age);
    if age < -1 {
        format!("K{}", exponent(-age, style))
    } else if age <= 3 {
        SHORT_PREFIXES[(age + 1) as usize].to_string()
    } else {
        format!("T{}O", exponent(age - 3, style))
    }
}

fn prefix_grammar() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(?:[KGBOT][0-9]*)*$").expect("prefix grammar is valid"))
}

fn term_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"([KGBOT])([0-9]*)").expect("prefix term pattern is valid"))
}

fn step_weight(step: &str) -> i64 {
    match step {
        "K" => -1,
        "G" | "T" => 1,
        "B" => 2,
        "O" => 3,
        _ => 0,
    }
}

/// Parse a prefix into the age it encodes
///
/// Expects normalized input (upper case, ASCII digits). The empty prefix
/// is age 0.
pub fn parse_prefix(text: &str) -> Result<i32> {
    if !prefix_grammar().is_match(text) {
        return Err(TitleError::InvalidPrefix(text.to_string()));
    }

    let overflow = || TitleError::InvalidPrefix(text.to_string());
    let mut age: i64 = 0;
    for term in term_pattern().captures_iter(text) {
        let exponent: i64 = match &term[2] {
            "" => 1,
            digits => digits.parse().map_err(|_| overflow())?,
        };
        let value = step_weight(&term[1])
            .checked_mul(exponent)
            .ok_or_else(overflow)?;
        age = age.checked_add(value).ok_or_else(overflow)?;
    }
    i32::try_from(age).map_err(|_| overflow())
}
