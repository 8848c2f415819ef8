//! Native letters and their two-letter ASCII spellings
//!
//! Æ, Ø and Å are written AE, OE and AA where only ASCII is available
//! (email addresses, hastily typed aliases). Expanding is always safe;
//! contracting is not, because a digraph may overlap a neighbouring single
//! letter: `AAE` is both `Å` + `E` and `A` + `Æ`.

/// Native letters with their digraphs, upper case first
pub const DIGRAPHS: [(char, &str); 6] = [
    ('Æ', "AE"),
    ('Ø', "OE"),
    ('Å', "AA"),
    ('æ', "ae"),
    ('ø', "oe"),
    ('å', "aa"),
];

/// Upper-case native letters as they appear after normalization
pub const NATIVE_UPPER: [char; 3] = ['Æ', 'Ø', 'Å'];

/// The digraph for a native letter
pub fn digraph_for(letter: char) -> Option<&'static str> {
    DIGRAPHS
        .iter()
        .find(|(native, _)| *native == letter)
        .map(|(_, digraph)| *digraph)
}

/// The native letter for a digraph
pub fn native_for(digraph: &str) -> Option<char> {
    DIGRAPHS
        .iter()
        .find(|(_, spelled)| *spelled == digraph)
        .map(|(native, _)| *native)
}

/// Replace every native letter with its digraph, keeping case
pub fn expand_digraphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        match digraph_for(ch) {
            Some(digraph) => out.push_str(digraph),
            None => out.push(ch),
        }
    }
    out
}

/// One letter of the normalized alias alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Letter {
    /// A single code point, ASCII or native
    Single(char),
    /// A two-letter spelling of a native letter
    Digraph(char),
}

impl Letter {
    /// The letter in its native form
    pub fn native(&self) -> char {
        match self {
            Letter::Single(ch) | Letter::Digraph(ch) => *ch,
        }
    }
}

/// Every reading of `tail` as exactly `count` upper-case letters
///
/// A letter is `A`-`Z`, one of Æ Ø Å, or one of the digraphs AE OE AA.
pub fn derivations(tail: &str, count: usize) -> Vec<Vec<Letter>> {
    let chars: Vec<char> = tail.chars().collect();
    let mut found = Vec::new();
    let mut current = Vec::with_capacity(count);
    derive(&chars, count, &mut current, &mut found);
    found
}

fn derive(
    rest: &[char],
    remaining: usize,
    current: &mut Vec<Letter>,
    found: &mut Vec<Vec<Letter>>,
) {
    if remaining == 0 {
        if rest.is_empty() {
            found.push(current.clone());
        }
        return;
    }
    let Some(&first) = rest.first() else {
        return;
    };

    if first.is_ascii_uppercase() || NATIVE_UPPER.contains(&first) {
        current.push(Letter::Single(first));
        derive(&rest[1..], remaining - 1, current, found);
        current.pop();
    }

    if rest.len() >= 2 {
        let pair: String = rest[..2].iter().collect();
        if let Some(native) = native_for(&pair).filter(|n| n.is_uppercase()) {
            current.push(Letter::Digraph(native));
            derive(&rest[2..], remaining - 1, current, found);
            current.pop();
        }
    }
}

/// Contract a tail of exactly `count` letters into native form
///
/// Returns `None` when the tail has no reading or more than one.
pub fn contract_unique(tail: &str, count: usize) -> Option<String> {
    let mut readings = derivations(tail, count).into_iter();
    let reading = readings.next()?;
    if readings.next().is_some() {
        return None;
    }
    Some(reading.iter().map(Letter::native).collect())
}
