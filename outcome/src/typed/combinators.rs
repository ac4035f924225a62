//! Synchronous branching on an [`OutcomeOf`].

use super::OutcomeOf;
use crate::Error;

impl<T> OutcomeOf<T> {
    /// Run `action` with the value if the outcome succeeded.
    pub fn if_successful<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            action(value);
        }
    }

    /// Returns the value when the outcome succeeded.
    ///
    /// Intended for inline binding:
    ///
    /// ```
    /// use outcome::OutcomeOf;
    ///
    /// let outcome = OutcomeOf::success("ready");
    /// if let Some(state) = outcome.is_success() {
    ///     assert_eq!(*state, "ready");
    /// }
    /// ```
    #[must_use]
    pub const fn is_success(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns the errors when the outcome failed.
    ///
    /// A failed outcome has no value to bind, so the errors are offered
    /// instead.
    #[must_use]
    pub fn if_not_success(&self) -> Option<&[Error]> {
        self.value.is_none().then_some(self.errors.as_slice())
    }

    /// Apply `transform` to the value of a successful outcome.
    ///
    /// Yields `None` on failure, so a failure is never confused with a
    /// transform that legitimately produced a default value.
    pub fn if_successful_map<A, F>(&self, transform: F) -> Option<A>
    where
        F: FnOnce(&T) -> A,
    {
        self.value.as_ref().map(transform)
    }

    /// Invoke exactly one branch: `on_success` with the value, or
    /// `on_failure` with every recorded error.
    pub fn match_with<R, S, F>(&self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(&T) -> R,
        F: FnOnce(&[Error]) -> R,
    {
        match &self.value {
            Some(value) => on_success(value),
            None => on_failure(self.errors.as_slice()),
        }
    }

    /// Consuming form of [`OutcomeOf::match_with`].
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Vec<Error>) -> R,
    {
        match self.value {
            Some(value) => on_success(value),
            None => on_failure(self.errors),
        }
    }

    /// Side-effecting two-branch dispatch.
    pub fn if_successful_or_else<S, F>(&self, on_success: S, on_failure: F)
    where
        S: FnOnce(&T),
        F: FnOnce(&[Error]),
    {
        self.match_with(on_success, on_failure);
    }
}
