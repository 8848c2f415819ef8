//! Titles of TÅGEKAMMER officers, relative to a reference year
//!
//! A title is a root name and the period (year) its holder was elected
//! for. People write titles relative to the "gfyear", the year the
//! currently serving cohort took over: `GCERM` is last year's CERM,
//! `T²OCERM` the one five years back, `KCERM` next year's. Titles can
//! also carry the year itself: `CERM16`, `CERM 16/17`, `CERM2016/17`.
//!
//! This crate converts both ways:
//!
//! - **Formatting** ([`prefix`], [`kprefix`], [`postfix`],
//!   [`prepostfix`], [`email`]) turns `(root, period)` into text.
//! - **Parsing** ([`parse`], [`parse_relative`]) normalizes whatever a
//!   person typed and recovers `(root, period)`.
//!
//! # Architecture
//!
//! - [`normalize`]: folds case, whitespace and look-alike characters
//! - [`prefix`](mod@prefix) / [`postfix`](mod@postfix): the year codecs
//! - [`grammar`]: splits an alias into prefix, root and postfix
//! - [`titler`]: formatting and parsing behind one configured type
//! - [`context`]: the thread-local scoped reference year
//! - [`diagnostics`]: non-fatal warnings
//!
//! # Example
//!
//! ```rust
//! use tktitler_core::{parse, prefix, with_gfyear, PrefixStyle};
//!
//! assert_eq!(
//!     prefix(("CERM", 2011), Some(2016), PrefixStyle::Unicode).unwrap(),
//!     "T²OCERM"
//! );
//!
//! let _scope = with_gfyear(2013).unwrap();
//! assert_eq!(parse("GFORM", None).unwrap(), ("FORM", 2012));
//! ```

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod digraph;
pub mod error;
pub mod grammar;
pub mod normalize;
pub mod postfix;
pub mod prefix;
pub mod replace;
pub mod title;
pub mod titler;

pub use config::GrammarConfig;
pub use context::{
    current_gfyear, get_gfyear, parse_gfyear, scoped_gfyear, with_gfyear, with_gfyear_from,
    GfyearGuard,
};
pub use diagnostics::Diagnostic;
pub use error::{ErrorKind, Result, TitleError};
pub use grammar::{AliasGrammar, RelativeAlias, RootKind};
pub use postfix::PostfixStyle;
pub use prefix::PrefixStyle;
pub use title::{validate_title, HasTitleTuple, Title};
pub use titler::{EmailStyle, Titler, TitlerBuilder};

/// Prefix form of a title, e.g. `T2OCERM`
pub fn prefix<T: HasTitleTuple>(
    title: T,
    gfyear: Option<i32>,
    style: PrefixStyle,
) -> Result<String> {
    Titler::shared().prefix(title, gfyear, style)
}

/// Prefix form of the cohort one older than its K, e.g. `KGCERM`
pub fn kprefix<T: HasTitleTuple>(
    title: T,
    gfyear: Option<i32>,
    style: PrefixStyle,
) -> Result<String> {
    Titler::shared().kprefix(title, gfyear, style)
}

/// Postfix form of a title, e.g. `CERM1617`
pub fn postfix<T: HasTitleTuple>(title: T, style: PostfixStyle) -> Result<String> {
    Titler::shared().postfix(title, style)
}

/// Prefix form followed by the period, e.g. `GCERM 2016/17`
pub fn prepostfix<T: HasTitleTuple>(
    title: T,
    gfyear: Option<i32>,
    prefix_style: PrefixStyle,
    postfix_style: PostfixStyle,
) -> Result<String> {
    Titler::shared().prepostfix(title, gfyear, prefix_style, postfix_style)
}

/// Email-safe form of a title, e.g. `FUHOE11`
pub fn email<T: HasTitleTuple>(
    title: T,
    gfyear: Option<i32>,
    style: EmailStyle,
) -> Result<String> {
    Titler::shared().email(title, gfyear, style)
}

/// Resolve an alias to a title
pub fn parse(alias: &str, gfyear: Option<i32>) -> Result<Title> {
    Titler::shared().parse(alias, gfyear)
}

/// Resolve an alias to `(age, root, absolute_year)` without a reference year
pub fn parse_relative(alias: &str) -> Result<RelativeAlias> {
    Titler::shared().parse_relative(alias)
}
