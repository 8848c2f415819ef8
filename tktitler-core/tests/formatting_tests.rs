//! Formatting of titles as prefix, postfix and email forms

use tktitler_core::*;

fn normal(root: &str, period: i32, gfyear: i32) -> String {
    prefix((root, period), Some(gfyear), PrefixStyle::Normal).unwrap()
}

fn unicode(root: &str, period: i32, gfyear: i32) -> String {
    prefix((root, period), Some(gfyear), PrefixStyle::Unicode).unwrap()
}

#[test]
fn test_prefix_past_years() {
    assert_eq!(normal("CERM", 2016, 2016), "CERM");
    assert_eq!(normal("CERM", 2015, 2016), "GCERM");
    assert_eq!(normal("CERM", 2014, 2016), "BCERM");
    assert_eq!(normal("CERM", 2013, 2016), "OCERM");
    assert_eq!(normal("CERM", 2012, 2016), "TOCERM");
    assert_eq!(normal("CERM", 2011, 2016), "T2OCERM");
    assert_eq!(normal("CERM", 2001, 2016), "T12OCERM");
    assert_eq!(normal("CERM", 1980, 2016), "T33OCERM");
}

#[test]
fn test_prefix_future_years() {
    assert_eq!(normal("CERM", 2017, 2016), "KCERM");
    assert_eq!(normal("CERM", 2018, 2016), "K2CERM");
    assert_eq!(normal("CERM", 2031, 2016), "K15CERM");
}

#[test]
fn test_prefix_roots() {
    assert_eq!(normal("KASS", 2016, 2016), "KA$$");
    assert_eq!(normal("FUSS", 2016, 2016), "FUSS");
    assert_eq!(normal("FUÆÆ", 2016, 2016), "FUÆÆ");
    assert_eq!(normal("FUØØ", 2016, 2016), "FUØØ");
    assert_eq!(normal("FUÅÅ", 2016, 2016), "FUÅÅ");
    assert_eq!(normal("", 2016, 2016), "");
    assert_eq!(normal("", 2012, 2016), "TO");
    assert_eq!(normal("", 2001, 2016), "T12O");
    assert_eq!(
        normal("This is a long string", 2012, 2016),
        "TOThis is a long string"
    );
}

#[test]
fn test_prefix_unicode() {
    assert_eq!(unicode("CERM", 2016, 2016), "CERM");
    assert_eq!(unicode("CERM", 2015, 2016), "GCERM");
    assert_eq!(unicode("CERM", 2011, 2016), "T²OCERM");
    assert_eq!(unicode("CERM", 2003, 2016), "T¹⁰OCERM");
    assert_eq!(unicode("CERM", 1980, 2016), "T³³OCERM");
    assert_eq!(unicode("CERM", 2017, 2016), "KCERM");
    assert_eq!(unicode("CERM", 2018, 2016), "K²CERM");
    assert_eq!(unicode("CERM", 2031, 2016), "K¹⁵CERM");
}

#[test]
fn test_prefix_tex() {
    assert_eq!(
        prefix(("CERM", 2011), Some(2016), PrefixStyle::Tex).unwrap(),
        "T\\textsuperscript{2}OCERM"
    );
    assert_eq!(
        prefix(("KASS", 2018), Some(2016), PrefixStyle::Tex).unwrap(),
        "K\\textsuperscript{2}KA\\$\\$"
    );
}

#[test]
fn test_prefix_validation() {
    let err = prefix(("CERM", 12), Some(2016), PrefixStyle::Normal).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    assert_eq!(err.to_string(), "'12' is not a valid period");

    let err = prefix(("CERM", 2012), Some(216), PrefixStyle::Normal).unwrap_err();
    assert_eq!(err, TitleError::InvalidReferenceYear(216));
}

#[test]
fn test_kprefix() {
    let k = |period: i32| kprefix(("CERM", period), Some(2016), PrefixStyle::Normal).unwrap();
    assert_eq!(k(2016), "KGCERM");
    assert_eq!(k(2015), "KBCERM");
    assert_eq!(k(2012), "KT2OCERM");
    assert_eq!(k(2011), "KT3OCERM");
    assert_eq!(k(2017), "KCERM");
    assert_eq!(k(2018), "K2CERM");
    assert_eq!(
        kprefix(("CERM", 2011), Some(2016), PrefixStyle::Unicode).unwrap(),
        "KT³OCERM"
    );
}

#[test]
fn test_postfix_styles() {
    let title = ("CERM", 2016);
    assert_eq!(postfix(title, PostfixStyle::default()).unwrap(), "CERM16");
    assert_eq!(postfix(title, PostfixStyle::Single).unwrap(), "CERM16");
    assert_eq!(postfix(title, PostfixStyle::Double).unwrap(), "CERM1617");
    assert_eq!(postfix(title, PostfixStyle::Slash).unwrap(), "CERM 16/17");
    assert_eq!(postfix(title, PostfixStyle::LongSingle).unwrap(), "CERM2016");
    assert_eq!(postfix(title, PostfixStyle::LongSlash).unwrap(), "CERM 2016/17");
}

#[test]
fn test_postfix_without_root() {
    assert_eq!(postfix(("", 2016), PostfixStyle::Double).unwrap(), "1617");
    assert_eq!(postfix(("", 2016), PostfixStyle::Slash).unwrap(), "16/17");
}

#[test]
fn test_postfix_rejects_bad_period() {
    let err = postfix(("CERM", 16), PostfixStyle::Single).unwrap_err();
    assert_eq!(err, TitleError::InvalidPeriod(16));
}

#[test]
fn test_prepostfix_defaults() {
    assert_eq!(
        prepostfix(
            ("CERM", 2011),
            Some(2016),
            PrefixStyle::Normal,
            PostfixStyle::LongSlash
        )
        .unwrap(),
        "T2OCERM 2011/12"
    );
    assert_eq!(
        prepostfix(
            ("CERM", 2011),
            Some(2016),
            PrefixStyle::Unicode,
            PostfixStyle::Single
        )
        .unwrap(),
        "T²OCERM 11"
    );
}

#[test]
fn test_email() {
    let mail = |root: &str| email((root, 2011), Some(2016), EmailStyle::Postfix).unwrap();
    assert_eq!(mail("CERM"), "CERM11");
    assert_eq!(mail("FUHÆ"), "FUHAE11");
    assert_eq!(mail("FUHØ"), "FUHOE11");
    assert_eq!(mail("FUÅÅ"), "FUAAAA11");
    assert_eq!(mail("fuhå"), "fuhaa11");
    assert_eq!(mail("KASS"), "KASS11");
    assert_eq!(
        email(("FUHØ", 2011), Some(2016), EmailStyle::Prefix).unwrap(),
        "T2OFUHOE"
    );
}

#[test]
fn test_email_postfix_needs_no_gfyear() {
    assert_eq!(
        email(("CERM", 2011), None, EmailStyle::Postfix).unwrap(),
        "CERM11"
    );
    assert_eq!(
        email(("CERM", 2011), None, EmailStyle::Prefix).unwrap_err(),
        TitleError::ContextUnset
    );
}

#[test]
fn test_title_values_and_custom_types() {
    let title = Title::new("FORM", 2010);
    assert_eq!(postfix(&title, PostfixStyle::Double).unwrap(), "FORM1011");
    assert_eq!(
        postfix(("FORM".to_string(), 2010), PostfixStyle::Double).unwrap(),
        "FORM1011"
    );

    struct Officer {
        title: String,
        elected: i32,
    }

    impl HasTitleTuple for Officer {
        fn title_tuple(&self) -> (&str, i32) {
            (&self.title, self.elected)
        }
    }

    let officer = Officer {
        title: "SEKR".to_string(),
        elected: 2014,
    };
    assert_eq!(
        prefix(&officer, Some(2016), PrefixStyle::Normal).unwrap(),
        "BSEKR"
    );
}
