//! Property-based tests: formatted titles parse back to themselves

use proptest::prelude::*;
use tktitler_core::*;

/// Roots that neither start with a step letter nor contain a known root
fn plain_root_strategy() -> impl Strategy<Value = String> {
    "[CDHLMNPRSVW][CDEHILMNPRSUVW]{0,5}"
}

fn root_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        plain_root_strategy(),
        prop::sample::select(GrammarConfig::embedded().roots.known.clone()),
        Just("FUHØ".to_string()),
        Just("FUÆÅ".to_string()),
    ]
}

fn prefix_style_strategy() -> impl Strategy<Value = PrefixStyle> {
    prop_oneof![
        Just(PrefixStyle::Normal),
        Just(PrefixStyle::Unicode),
        Just(PrefixStyle::Tex),
    ]
}

/// Styles whose output has exactly one reading for every period
fn unambiguous_postfix_style_strategy() -> impl Strategy<Value = PostfixStyle> {
    prop_oneof![
        Just(PostfixStyle::Single),
        Just(PostfixStyle::Double),
        Just(PostfixStyle::Slash),
        Just(PostfixStyle::LongSlash),
    ]
}

proptest! {
    #[test]
    fn prefix_round_trips(
        root in root_strategy(),
        gfyear in 1956i32..=2055,
        offset in -10i32..=60,
        style in prefix_style_strategy(),
    ) {
        let period = gfyear - offset;
        let alias = prefix((root.as_str(), period), Some(gfyear), style).unwrap();
        let parsed = parse(&alias, Some(gfyear)).unwrap();
        prop_assert_eq!(parsed, Title::new(root, period));
    }

    #[test]
    fn postfix_round_trips(
        root in root_strategy(),
        period in 1959i32..=2055,
        style in unambiguous_postfix_style_strategy(),
    ) {
        let alias = postfix((root.as_str(), period), style).unwrap();
        let parsed = parse(&alias, None).unwrap();
        prop_assert_eq!(parsed, Title::new(root, period));
    }

    #[test]
    fn long_single_round_trips_except_2021(
        root in plain_root_strategy(),
        period in 1959i32..=2055,
    ) {
        prop_assume!(period != 2021);
        let alias = postfix((root.as_str(), period), PostfixStyle::LongSingle).unwrap();
        prop_assert_eq!(parse(&alias, None).unwrap(), Title::new(root, period));
    }

    #[test]
    fn relative_age_matches_offset(
        root in plain_root_strategy(),
        age in -40i32..=40,
    ) {
        let alias = prefix((root.as_str(), 2000 - age), Some(2000), PrefixStyle::Normal).unwrap();
        let relative = parse_relative(&alias).unwrap();
        prop_assert_eq!(relative.age, age);
        prop_assert_eq!(relative.root, root);
        prop_assert_eq!(relative.absolute_year, None);
    }

    #[test]
    fn normalized_alias_is_upper_case_without_whitespace(alias in "\\PC{0,12}") {
        let normalizer = Titler::shared().grammar().normalizer();
        let normalized = normalizer.normalize(&alias);
        prop_assert!(!normalized
            .chars()
            .any(|ch| ch.is_whitespace() || ch.is_ascii_lowercase()));
    }

    #[test]
    fn parse_never_panics(alias in "\\PC{0,16}") {
        let _ = parse(&alias, Some(2016));
    }
}
