//! Alias normalization
//!
//! Folds the many ways people type an alias onto one canonical spelling
//! before the grammar sees it: upper case, no whitespace, TeX markup from
//! the `tex` prefix style unwrapped, configured literal replacements, and
//! single look-alike characters mapped to ASCII. Never fails; whatever is
//! not recognized passes through for the grammar to reject.

use crate::digraph::NATIVE_UPPER;
use crate::replace::MultiReplace;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Code points of the digit zero in every Unicode 15 script with a
/// contiguous 0-9 block (general category Nd)
const DECIMAL_ZEROS: [u32; 67] = [
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6, 0x0D66,
    0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90,
    0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10,
    0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650,
    0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60, 0x16AC0,
    0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950,
    0x1FBF0,
];

fn tex_superscript() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\\TEXTSUPERSCRIPT\{([0-9]*)\}").expect("TeX superscript pattern is valid")
    })
}

/// Value of a non-ASCII decimal digit
fn decimal_digit_value(ch: char) -> Option<u8> {
    let code = ch as u32;
    DECIMAL_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .map(|&zero| (code - zero) as u8)
}

/// Configured alias normalizer
#[derive(Debug, Clone)]
pub struct Normalizer {
    replacements: MultiReplace,
    lookalikes: HashMap<char, char>,
}

impl Normalizer {
    /// Create a normalizer from its two tables
    pub fn new(replacements: MultiReplace, lookalikes: HashMap<char, char>) -> Self {
        Self {
            replacements,
            lookalikes,
        }
    }

    /// Normalize an alias
    pub fn normalize(&self, input: &str) -> String {
        let upper: String = input
            .to_uppercase()
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect();

        let unwrapped = tex_superscript().replace_all(&upper, "$1");
        let unescaped = unwrapped.replace("\\$", "$");
        let replaced = self.replacements.apply(&unescaped);

        let mut out = String::with_capacity(replaced.len());
        for ch in replaced.chars() {
            out.push(self.fold_char(ch));
        }
        out
    }

    fn fold_char(&self, ch: char) -> char {
        if let Some(&mapped) = self.lookalikes.get(&ch) {
            return mapped;
        }
        if ch.is_ascii() || NATIVE_UPPER.contains(&ch) {
            return ch;
        }
        if let Some(value) = decimal_digit_value(ch) {
            return char::from(b'0' + value);
        }

        // Compatibility forms: superscripts, double-struck and fullwidth
        // letters, the Ångström sign.
        let mut folded = std::iter::once(ch).nfkc();
        match (folded.next(), folded.next()) {
            (Some(single), None) if single.is_ascii_alphanumeric() => {
                single.to_ascii_uppercase()
            }
            (Some(single), None) if NATIVE_UPPER.contains(&single) => single,
            _ => ch,
        }
    }
}
