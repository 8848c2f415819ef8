//! The title value type and its validation

use crate::error::{Result, TitleError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can present itself as a `(root, period)` pair
///
/// Implemented for [`Title`] and for plain tuples, so formatters accept
/// `("CERM", 2016)` as readily as a caller-defined record type.
pub trait HasTitleTuple {
    /// The `(root, period)` pair
    fn title_tuple(&self) -> (&str, i32);
}

/// A title: a root name held in a given period
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Title {
    /// Year-independent name, e.g. `CERM` or `FUHØ`
    pub root: String,
    /// The year the holder's cohort is associated with
    pub period: i32,
}

impl Title {
    /// Create a title without validation
    pub fn new(root: impl Into<String>, period: i32) -> Self {
        Self {
            root: root.into(),
            period,
        }
    }

    /// Build a title from externally supplied text
    ///
    /// The period must read as an integer; a decimal number or any other
    /// text is rejected as the wrong type before the four-digit check runs.
    pub fn from_raw(root: &str, period: &str) -> Result<Self> {
        let period = parse_integral("period", period)?;
        validate_title(Self::new(root, period))
    }
}

impl HasTitleTuple for Title {
    fn title_tuple(&self) -> (&str, i32) {
        (&self.root, self.period)
    }
}

impl HasTitleTuple for (&str, i32) {
    fn title_tuple(&self) -> (&str, i32) {
        (self.0, self.1)
    }
}

impl HasTitleTuple for (String, i32) {
    fn title_tuple(&self) -> (&str, i32) {
        (&self.0, self.1)
    }
}

impl<T: HasTitleTuple + ?Sized> HasTitleTuple for &T {
    fn title_tuple(&self) -> (&str, i32) {
        (**self).title_tuple()
    }
}

impl From<(&str, i32)> for Title {
    fn from((root, period): (&str, i32)) -> Self {
        Self::new(root, period)
    }
}

impl PartialEq<(&str, i32)> for Title {
    fn eq(&self, other: &(&str, i32)) -> bool {
        self.root == other.0 && self.period == other.1
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.root, self.period)
    }
}

/// Check that a period is a four-digit year
pub fn validate_period(period: i32) -> Result<i32> {
    if is_four_digit(period) {
        Ok(period)
    } else {
        Err(TitleError::InvalidPeriod(period))
    }
}

/// Validate a title-like value and return it as a [`Title`]
pub fn validate_title<T: HasTitleTuple>(title: T) -> Result<Title> {
    let (root, period) = title.title_tuple();
    validate_period(period)?;
    Ok(Title::new(root, period))
}

pub(crate) fn is_four_digit(year: i32) -> bool {
    (1000..=9999).contains(&year)
}

/// Read an integer parameter from text, classifying what was found on failure
pub(crate) fn parse_integral(name: &'static str, text: &str) -> Result<i32> {
    let text = text.trim();
    if let Ok(value) = text.parse::<i32>() {
        return Ok(value);
    }
    let found = if text.parse::<f64>().is_ok() {
        "float"
    } else {
        "str"
    };
    Err(TitleError::InvalidArgumentType {
        name,
        found: found.to_string(),
    })
}
