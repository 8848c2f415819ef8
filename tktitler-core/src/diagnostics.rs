//! Advisory diagnostics
//!
//! Some inputs are accepted but suspicious: a postfix for a title that has
//! no period, or an alias whose year has two readings. These never fail the
//! call. They are logged through the `log` facade under the `tktitler`
//! target and can be collected per thread with [`capture`].

use serde::Serialize;
use std::cell::RefCell;
use std::fmt;

/// A non-fatal condition met while formatting or parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A postfix was formatted for EFUIT
    EfuitPostfix,
    /// A postfix was formatted for a period before postfixes were used
    PostfixBefore1959 {
        /// The period being formatted
        period: i32,
    },
    /// An email address was rendered for EFUIT
    EfuitEmail,
    /// An email address was rendered for a period before postfixes were used
    EmailBefore1959 {
        /// The period being rendered
        period: i32,
    },
    /// The postfix `2021` was read as 2020/21
    AmbiguousPostfix2021,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EfuitPostfix => write!(
                f,
                "EFUIT is not tied to a period, so a postfix for EFUIT does not make sense."
            ),
            Diagnostic::PostfixBefore1959 { period } => write!(
                f,
                "Postfixes were not in use before 1959, so the postfix for {period} is not well-defined."
            ),
            Diagnostic::EfuitEmail => write!(
                f,
                "EFUIT is not tied to a period, so an email address for EFUIT does not make sense."
            ),
            Diagnostic::EmailBefore1959 { period } => write!(
                f,
                "Postfixes were not in use before 1959, so the email address for {period} is not well-defined."
            ),
            Diagnostic::AmbiguousPostfix2021 => write!(
                f,
                "While parsing an alias, the technically ambiguous postfix 2021 was met. It it assumed it means 2020/2021."
            ),
        }
    }
}

thread_local! {
    static CAPTURES: RefCell<Vec<Vec<Diagnostic>>> = const { RefCell::new(Vec::new()) };
}

/// Report a diagnostic
pub(crate) fn emit(diagnostic: Diagnostic) {
    log::warn!(target: "tktitler", "{diagnostic}");
    CAPTURES.with(|captures| {
        if let Some(innermost) = captures.borrow_mut().last_mut() {
            innermost.push(diagnostic);
        }
    });
}

/// Run `work` and collect the diagnostics it raises on this thread
///
/// Nested captures are independent: a diagnostic goes to the innermost
/// active capture only.
pub fn capture<R, F>(work: F) -> (R, Vec<Diagnostic>)
where
    F: FnOnce() -> R,
{
    struct Frame {
        depth: usize,
    }

    impl Drop for Frame {
        fn drop(&mut self) {
            CAPTURES.with(|captures| captures.borrow_mut().truncate(self.depth));
        }
    }

    let frame = CAPTURES.with(|captures| {
        let mut captures = captures.borrow_mut();
        captures.push(Vec::new());
        Frame {
            depth: captures.len() - 1,
        }
    });

    let result = work();
    let collected = CAPTURES.with(|captures| {
        captures
            .borrow_mut()
            .get_mut(frame.depth)
            .map(std::mem::take)
            .unwrap_or_default()
    });
    drop(frame);
    (result, collected)
}
