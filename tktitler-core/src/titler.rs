//! Configured entry point for formatting and parsing

use crate::config::GrammarConfig;
use crate::context::get_gfyear;
use crate::diagnostics::{self, Diagnostic};
use crate::digraph::expand_digraphs;
use crate::error::{Result, TitleError};
use crate::grammar::{AliasGrammar, RelativeAlias};
use crate::postfix::{check_postfix_meaningful, format_postfix, PostfixStyle, FIRST_POSTFIX_PERIOD};
use crate::prefix::{format_prefix, PrefixStyle};
use crate::replace::MultiReplace;
use crate::title::{validate_title, HasTitleTuple, Title};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Where the year goes in an email address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailStyle {
    /// `FUHOE11`
    #[default]
    Postfix,
    /// `T2OFUHOE`
    Prefix,
}

impl EmailStyle {
    /// Keyword used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailStyle::Postfix => "postfix",
            EmailStyle::Prefix => "prefix",
        }
    }
}

impl FromStr for EmailStyle {
    type Err = TitleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "postfix" => Ok(EmailStyle::Postfix),
            "prefix" => Ok(EmailStyle::Prefix),
            other => Err(TitleError::UnknownStyle {
                parameter: "email",
                keyword: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for EmailStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats titles and parses aliases with one grammar
///
/// The free functions of this crate use a shared `Titler` built from the
/// embedded configuration. Build your own to use a different root
/// vocabulary or to pin the reference year instead of relying on the
/// thread's scoped override.
#[derive(Debug, Clone)]
pub struct Titler {
    grammar: AliasGrammar,
    display: MultiReplace,
    gfyear: Option<i32>,
}

impl Titler {
    /// Create a titler from a grammar configuration
    pub fn from_config(config: &GrammarConfig) -> Result<Self> {
        Self::builder().config(config.clone()).build()
    }

    /// Create a builder
    pub fn builder() -> TitlerBuilder {
        TitlerBuilder::default()
    }

    /// The titler behind the crate-level functions
    pub fn shared() -> &'static Titler {
        static SHARED: OnceLock<Titler> = OnceLock::new();
        SHARED.get_or_init(|| {
            Titler::from_config(GrammarConfig::embedded())
                .expect("embedded grammar config must compile")
        })
    }

    /// The grammar used for parsing
    pub fn grammar(&self) -> &AliasGrammar {
        &self.grammar
    }

    /// Reference year pinned on this titler, if any
    pub fn pinned_gfyear(&self) -> Option<i32> {
        self.gfyear
    }

    /// Resolve the reference year: explicit, then pinned, then scoped
    pub fn gfyear(&self, explicit: Option<i32>) -> Result<i32> {
        get_gfyear(explicit.or(self.gfyear))
    }

    fn display_root(&self, root: &str) -> String {
        self.display.apply(root)
    }

    /// Prefix form, e.g. `T²OCERM`
    pub fn prefix<T: HasTitleTuple>(
        &self,
        title: T,
        gfyear: Option<i32>,
        style: PrefixStyle,
    ) -> Result<String> {
        let Title { root, period } = validate_title(title)?;
        let gfyear = self.gfyear(gfyear)?;
        Ok(self.prefixed(format_prefix(gfyear - period, style), &root, style))
    }

    fn prefixed(&self, prefix: String, root: &str, style: PrefixStyle) -> String {
        let formatted = format!("{prefix}{}", self.display_root(root));
        match style {
            PrefixStyle::Tex => formatted.replace('$', "\\$"),
            PrefixStyle::Normal | PrefixStyle::Unicode => formatted,
        }
    }

    /// Prefix form of the cohort one older than its K, e.g. `KGCERM`
    ///
    /// Titles already in the future get their plain prefix.
    pub fn kprefix<T: HasTitleTuple>(
        &self,
        title: T,
        gfyear: Option<i32>,
        style: PrefixStyle,
    ) -> Result<String> {
        let Title { root, period } = validate_title(title)?;
        let gfyear = self.gfyear(gfyear)?;

        let age = gfyear - period;
        let prefix = if age <= -1 {
            format_prefix(age, style)
        } else {
            format!("K{}", format_prefix(age + 1, style))
        };
        Ok(self.prefixed(prefix, &root, style))
    }

    /// Postfix form, e.g. `CERM16` or `CERM 16/17`
    pub fn postfix<T: HasTitleTuple>(&self, title: T, style: PostfixStyle) -> Result<String> {
        let Title { root, period } = validate_title(title)?;
        check_postfix_meaningful(&root, period);

        let root = self.display_root(&root);
        let separator = if style.is_spaced() && !root.is_empty() {
            " "
        } else {
            ""
        };
        Ok(format!("{root}{separator}{}", format_postfix(period, style)))
    }

    /// Prefix form followed by the period, e.g. `GKA$$ 2016/17`
    pub fn prepostfix<T: HasTitleTuple>(
        &self,
        title: T,
        gfyear: Option<i32>,
        prefix_style: PrefixStyle,
        postfix_style: PostfixStyle,
    ) -> Result<String> {
        let title = validate_title(title)?;
        let prefixed = self.prefix(&title, gfyear, prefix_style)?;
        check_postfix_meaningful(&title.root, title.period);

        let postfix = format_postfix(title.period, postfix_style);
        Ok(if prefixed.is_empty() {
            postfix
        } else {
            format!("{prefixed} {postfix}")
        })
    }

    /// Email-safe form with native letters spelled as digraphs
    pub fn email<T: HasTitleTuple>(
        &self,
        title: T,
        gfyear: Option<i32>,
        style: EmailStyle,
    ) -> Result<String> {
        let Title { root, period } = validate_title(title)?;
        if root == "EFUIT" {
            diagnostics::emit(Diagnostic::EfuitEmail);
        }

        let root = expand_digraphs(&root);
        match style {
            EmailStyle::Postfix => {
                if period < FIRST_POSTFIX_PERIOD {
                    diagnostics::emit(Diagnostic::EmailBefore1959 { period });
                }
                Ok(format!(
                    "{root}{}",
                    format_postfix(period, PostfixStyle::Single)
                ))
            }
            EmailStyle::Prefix => {
                let gfyear = self.gfyear(gfyear)?;
                Ok(format!(
                    "{}{root}",
                    format_prefix(gfyear - period, PrefixStyle::Normal)
                ))
            }
        }
    }

    /// Resolve an alias to `(age, root, absolute_year)`
    pub fn parse_relative(&self, alias: &str) -> Result<RelativeAlias> {
        self.grammar.parse_relative(alias)
    }

    /// Resolve an alias to a title
    ///
    /// A postfix in the alias fixes the year; the reference year is only
    /// needed for prefix-only aliases.
    pub fn parse(&self, alias: &str, gfyear: Option<i32>) -> Result<Title> {
        let relative = self.parse_relative(alias)?;
        let base = match relative.absolute_year {
            Some(year) => year,
            None => self.gfyear(gfyear)?,
        };
        let period = base
            .checked_sub(relative.age)
            .ok_or_else(|| TitleError::InvalidPrefix(alias.to_string()))?;
        Ok(Title::new(relative.root, period))
    }
}

/// Builder for [`Titler`]
#[derive(Debug, Default)]
pub struct TitlerBuilder {
    config: Option<GrammarConfig>,
    gfyear: Option<i32>,
}

impl TitlerBuilder {
    /// Use a grammar configuration instead of the embedded one
    pub fn config(mut self, config: GrammarConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Pin the reference year
    pub fn gfyear(mut self, gfyear: i32) -> Self {
        self.gfyear = Some(gfyear);
        self
    }

    /// Build the titler
    pub fn build(self) -> Result<Titler> {
        let config = self.config.unwrap_or_default();
        let grammar = AliasGrammar::from_config(&config)?;
        let display = MultiReplace::new(
            config
                .display
                .substitutions
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        )?;
        let gfyear = self.gfyear.map(|year| get_gfyear(Some(year))).transpose()?;

        Ok(Titler {
            grammar,
            display,
            gfyear,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::capture;
    use crate::error::ErrorKind;

    fn titler() -> &'static Titler {
        Titler::shared()
    }

    #[test]
    fn test_prefix_with_substitution() {
        assert_eq!(
            titler()
                .prefix(("KASS", 2011), Some(2016), PrefixStyle::Normal)
                .unwrap(),
            "T2OKA$$"
        );
        assert_eq!(
            titler()
                .prefix(("KASS", 2016), Some(2016), PrefixStyle::Normal)
                .unwrap(),
            "KA$$"
        );
    }

    #[test]
    fn test_tex_escapes_dollar() {
        assert_eq!(
            titler()
                .prefix(("KASS", 2011), Some(2016), PrefixStyle::Tex)
                .unwrap(),
            "T\\textsuperscript{2}OKA\\$\\$"
        );
    }

    #[test]
    fn test_kprefix_at_earliest_period() {
        assert_eq!(
            titler()
                .prefix(("CERM", 1000), Some(1005), PrefixStyle::Normal)
                .unwrap(),
            "T2OCERM"
        );
        assert_eq!(
            titler()
                .kprefix(("CERM", 1000), Some(1005), PrefixStyle::Normal)
                .unwrap(),
            "KT3OCERM"
        );
        assert_eq!(
            titler()
                .kprefix(("KASS", 1000), Some(1000), PrefixStyle::Tex)
                .unwrap(),
            "KGKA\\$\\$"
        );
    }

    #[test]
    fn test_pinned_gfyear() {
        let pinned = Titler::builder().gfyear(2015).build().unwrap();
        assert_eq!(pinned.pinned_gfyear(), Some(2015));
        assert_eq!(
            pinned.prefix(("CERM", 2014), None, PrefixStyle::Normal).unwrap(),
            "GCERM"
        );
        assert_eq!(
            pinned
                .prefix(("CERM", 2014), Some(2016), PrefixStyle::Normal)
                .unwrap(),
            "BCERM"
        );
    }

    #[test]
    fn test_builder_rejects_bad_gfyear() {
        let err = Titler::builder().gfyear(15).build().unwrap_err();
        assert_eq!(err, TitleError::InvalidReferenceYear(15));
    }

    #[test]
    fn test_missing_gfyear() {
        let err = titler()
            .prefix(("CERM", 2014), None, PrefixStyle::Normal)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ContextUnset);
    }

    #[test]
    fn test_postfix_spacing() {
        assert_eq!(
            titler().postfix(("CERM", 2016), PostfixStyle::Slash).unwrap(),
            "CERM 16/17"
        );
        assert_eq!(
            titler().postfix(("", 2016), PostfixStyle::Slash).unwrap(),
            "16/17"
        );
        assert_eq!(
            titler().postfix(("KASS", 2016), PostfixStyle::Double).unwrap(),
            "KA$$1617"
        );
    }

    #[test]
    fn test_prepostfix() {
        assert_eq!(
            titler()
                .prepostfix(
                    ("KASS", 2016),
                    Some(2017),
                    PrefixStyle::Normal,
                    PostfixStyle::LongSlash
                )
                .unwrap(),
            "GKA$$ 2016/17"
        );
        assert_eq!(
            titler()
                .prepostfix(("", 2016), Some(2016), PrefixStyle::Normal, PostfixStyle::LongSlash)
                .unwrap(),
            "2016/17"
        );
    }

    #[test]
    fn test_email_warnings() {
        let (email, diagnostics) =
            capture(|| titler().email(("EFUIT", 1958), None, EmailStyle::Postfix));
        assert_eq!(email.unwrap(), "EFUIT58");
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::EfuitEmail,
                Diagnostic::EmailBefore1959 { period: 1958 }
            ]
        );
    }

    #[test]
    fn test_parse_uses_postfix_before_gfyear() {
        assert_eq!(titler().parse("OFORM2016", None).unwrap(), ("FORM", 2013));
        assert!(titler().parse("OFORM", None).is_err());
    }

    #[test]
    fn test_parse_rejects_overflowing_age() {
        let err = titler().parse("K2147483647FORM", Some(2016)).unwrap_err();
        assert!(matches!(err, TitleError::InvalidPrefix(_)));
    }

    #[test]
    fn test_email_style_keywords() {
        assert_eq!("prefix".parse::<EmailStyle>().unwrap(), EmailStyle::Prefix);
        assert_eq!(
            "suffix".parse::<EmailStyle>().unwrap_err().to_string(),
            "'suffix' is not a valid email type"
        );
    }
}
