//! Absolute year postfixes
//!
//! A postfix names the period directly: `16`, `1617`, `16/17`, `2016`,
//! `2016/17` or `2016/2017`. Two-digit years are placed in a fixed
//! century window, and four digits without a slash are either two
//! consecutive short years or one full year.

use crate::diagnostics::{self, Diagnostic};
use crate::error::{Result, TitleError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Two-digit years below this are in the 2000s, the rest in the 1900s
pub const CENTURY_THRESHOLD: u32 = 56;

/// First period for which postfixes are meaningful
pub const FIRST_POSTFIX_PERIOD: i32 = 1959;

/// How a postfix is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostfixStyle {
    /// `16`
    #[default]
    Single,
    /// `1617`
    Double,
    /// `16/17`
    Slash,
    /// `2016`
    LongSingle,
    /// `2016/17`
    LongSlash,
}

impl PostfixStyle {
    /// Keyword used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            PostfixStyle::Single => "single",
            PostfixStyle::Double => "double",
            PostfixStyle::Slash => "slash",
            PostfixStyle::LongSingle => "longsingle",
            PostfixStyle::LongSlash => "longslash",
        }
    }

    /// Whether the postfix is set apart from a non-empty root by a space
    pub fn is_spaced(&self) -> bool {
        matches!(self, PostfixStyle::Slash | PostfixStyle::LongSlash)
    }
}

impl FromStr for PostfixStyle {
    type Err = TitleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "single" => Ok(PostfixStyle::Single),
            "double" => Ok(PostfixStyle::Double),
            "slash" => Ok(PostfixStyle::Slash),
            "longsingle" => Ok(PostfixStyle::LongSingle),
            "longslash" => Ok(PostfixStyle::LongSlash),
            other => Err(TitleError::UnknownStyle {
                parameter: "postfix",
                keyword: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PostfixStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn short_year(period: i32) -> String {
    format!("{:02}", period.rem_euclid(100))
}

/// The postfix for `period`, without any root or separating space
pub fn format_postfix(period: i32, style: PostfixStyle) -> String {
    match style {
        PostfixStyle::Single => short_year(period),
        PostfixStyle::Double => format!("{}{}", short_year(period), short_year(period + 1)),
        PostfixStyle::Slash => format!("{}/{}", short_year(period), short_year(period + 1)),
        PostfixStyle::LongSingle => period.to_string(),
        PostfixStyle::LongSlash => format!("{}/{}", period, short_year(period + 1)),
    }
}

/// Warn about postfixes that carry no meaning
pub(crate) fn check_postfix_meaningful(root: &str, period: i32) {
    if root == "EFUIT" {
        diagnostics::emit(Diagnostic::EfuitPostfix);
    }
    if period < FIRST_POSTFIX_PERIOD {
        diagnostics::emit(Diagnostic::PostfixBefore1959 { period });
    }
}

/// Place a two-digit year in its century
pub fn expand_short_year(year: u32) -> i32 {
    let year = (year % 100) as i32;
    if year < CENTURY_THRESHOLD as i32 {
        2000 + year
    } else {
        1900 + year
    }
}

fn follows(first: u32, second: u32) -> bool {
    (first + 1) % 100 == second
}

fn digits_value(text: &str) -> Option<u32> {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}

/// Parse a postfix into a period
///
/// Returns `Ok(None)` for the empty postfix, meaning the reference year
/// applies.
pub fn parse_postfix(text: &str) -> Result<Option<i32>> {
    if text.is_empty() {
        return Ok(None);
    }
    let invalid = || TitleError::InvalidPostfix(text.to_string());

    if let Some((left, right)) = text.split_once('/') {
        let first = digits_value(left).ok_or_else(invalid)?;
        let second = digits_value(right).ok_or_else(invalid)?;
        return match (left.len(), right.len()) {
            (2, 2) if follows(first, second) => Ok(Some(expand_short_year(first))),
            (4, 4) if first + 1 == second => Ok(Some(first as i32)),
            (4, 2) if follows(first, second) => Ok(Some(first as i32)),
            _ => Err(invalid()),
        };
    }

    let value = digits_value(text).ok_or_else(invalid)?;
    match text.len() {
        2 => Ok(Some(expand_short_year(value))),
        4 => {
            let (first, second) = (value / 100, value % 100);
            if text == "2021" {
                // Either 2020/21 or the year 2021; the former is far more
                // common in practice.
                diagnostics::emit(Diagnostic::AmbiguousPostfix2021);
                Ok(Some(2020))
            } else if follows(first, second) {
                Ok(Some(expand_short_year(first)))
            } else if first == 19 || first == 20 {
                Ok(Some(value as i32))
            } else {
                Err(invalid())
            }
        }
        _ => Err(invalid()),
    }
}
