//! Extension for lifting plain values into successful outcomes.
//!
//! [`IntoOutcome::into_outcome`] replaces the implicit "any `T` is a
//! successful `OutcomeOf<T>`" conversion with a visible call. It never
//! inspects the value, so wrapping `None` still yields a success; use
//! [`crate::OutcomeOf::create`] when absence should mean failure.
//!
//! ```
//! use outcome::{IntoOutcome, OutcomeOf, Status};
//!
//! fn lookup(id: u32) -> OutcomeOf<String> {
//!     format!("user-{id}").into_outcome()
//! }
//!
//! assert_eq!(lookup(7).into_value().as_deref(), Some("user-7"));
//! ```

use crate::OutcomeOf;

/// Wrap `self` as a successful [`OutcomeOf`].
pub trait IntoOutcome: Sized {
    /// Wrap `self` as a successful outcome without inspecting it.
    fn into_outcome(self) -> OutcomeOf<Self>;
}

impl<T> IntoOutcome for T {
    fn into_outcome(self) -> OutcomeOf<Self> {
        OutcomeOf::success(self)
    }
}
