//! Reference year ("gfyear") context
//!
//! The reference year is the year the currently serving cohort was
//! installed. It can be passed explicitly to every call, or installed for a
//! scope with [`with_gfyear`]. Scopes are thread-local and nest. Each guard
//! owns exactly one stack entry, tagged with a per-thread id, and removes
//! only that entry when dropped. Dropping guards out of order or unwinding
//! through a panic therefore never removes another live scope's year.

use crate::error::{Result, TitleError};
use crate::title::{is_four_digit, parse_integral};
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

thread_local! {
    static GFYEAR_STACK: RefCell<Vec<(u64, i32)>> = const { RefCell::new(Vec::new()) };
    static NEXT_SCOPE_ID: Cell<u64> = const { Cell::new(0) };
}

/// Guard for a scoped reference year override
///
/// Removes its own override when dropped, leaving any other live scope in
/// place. The guard is bound to the thread that created it.
#[must_use = "the override is removed as soon as the guard is dropped"]
#[derive(Debug)]
pub struct GfyearGuard {
    id: u64,
    year: i32,
    _not_send: PhantomData<*const ()>,
}

impl GfyearGuard {
    /// The reference year installed by this guard
    pub fn year(&self) -> i32 {
        self.year
    }
}

impl Drop for GfyearGuard {
    fn drop(&mut self) {
        GFYEAR_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(pos) = stack.iter().rposition(|&(id, _)| id == self.id) {
                stack.remove(pos);
            }
        });
        log::trace!(target: "tktitler", "gfyear scope {} left", self.id);
    }
}

/// Resolve the reference year
///
/// An explicit year wins; otherwise the innermost scoped override on this
/// thread is used. Fails with [`TitleError::ContextUnset`] when neither
/// exists.
pub fn get_gfyear(explicit: Option<i32>) -> Result<i32> {
    let year = match explicit {
        Some(year) => year,
        None => current_gfyear().ok_or(TitleError::ContextUnset)?,
    };
    validate_gfyear(year)
}

/// The innermost scoped override on this thread, if any
pub fn current_gfyear() -> Option<i32> {
    GFYEAR_STACK.with(|stack| stack.borrow().last().map(|&(_, year)| year))
}

/// Install `year` as the reference year until the guard is dropped
pub fn with_gfyear(year: i32) -> Result<GfyearGuard> {
    let year = validate_gfyear(year)?;
    let id = NEXT_SCOPE_ID.with(|next| {
        let id = next.get();
        next.set(id.wrapping_add(1));
        id
    });
    GFYEAR_STACK.with(|stack| stack.borrow_mut().push((id, year)));
    log::trace!(target: "tktitler", "gfyear scope {id} entered with {year}");
    Ok(GfyearGuard {
        id,
        year,
        _not_send: PhantomData,
    })
}

/// Like [`with_gfyear`], asking `supplier` for the year once, at entry
pub fn with_gfyear_from<F>(supplier: F) -> Result<GfyearGuard>
where
    F: FnOnce() -> i32,
{
    with_gfyear(supplier())
}

/// Run `work` with `year` installed as the reference year
///
/// The override covers exactly the call and is removed afterwards, even if
/// `work` panics.
pub fn scoped_gfyear<R, F>(year: i32, work: F) -> Result<R>
where
    F: FnOnce() -> R,
{
    let _guard = with_gfyear(year)?;
    Ok(work())
}

/// Read a reference year from externally supplied text
pub fn parse_gfyear(text: &str) -> Result<i32> {
    validate_gfyear(parse_integral("gfyear", text)?)
}

fn validate_gfyear(year: i32) -> Result<i32> {
    if is_four_digit(year) {
        Ok(year)
    } else {
        Err(TitleError::InvalidReferenceYear(year))
    }
}
