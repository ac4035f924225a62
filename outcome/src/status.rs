//! The pass/fail view shared by [`crate::Outcome`] and [`crate::OutcomeOf`].

use std::borrow::Cow;

use crate::Error;

/// Read-only access to an outcome's success flag and accumulated errors.
///
/// The flag is authoritative. Errors are advisory: a successful outcome may
/// still carry descriptors (see [`crate::Outcome::partial`]) and a failed one
/// may carry none.
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, Status};
///
/// let outcome = Outcome::errors(["bad input", "missing field"]);
/// assert!(outcome.failed());
/// assert_eq!(outcome.first_error_message(), "bad input");
/// ```
pub trait Status {
    /// Whether the operation succeeded.
    fn succeeded(&self) -> bool;

    /// The accumulated error descriptors, in insertion order.
    fn errors(&self) -> &[Error];

    /// Whether the operation failed.
    fn failed(&self) -> bool {
        !self.succeeded()
    }

    /// The first recorded error, or an empty-message error when none exist.
    fn first_error(&self) -> Cow<'_, Error> {
        self.errors()
            .first()
            .map_or_else(|| Cow::Owned(Error::empty()), Cow::Borrowed)
    }

    /// The rendered message of [`Status::first_error`].
    fn first_error_message(&self) -> &str {
        self.errors().first().map_or("", Error::as_str)
    }
}
