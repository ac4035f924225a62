//! The value-carrying outcome and its combinator surface.
//!
//! [`OutcomeOf<T>`] stores its value only when the operation succeeded, so a
//! failed outcome never exposes a placeholder value. Extraction is always
//! explicit: [`OutcomeOf::into_value`] returns an [`Option`], and the
//! `unwrap_or*` family demands a fallback.

mod combinators;
mod dispatch_async;

use crate::{Error, Failure, Outcome, Status};

/// Outcome of an operation that yields a `T` on success.
///
/// # Examples
///
/// ```
/// use outcome::{OutcomeOf, Status};
///
/// fn parse_port(raw: &str) -> OutcomeOf<u16> {
///     raw.parse::<u16>()
///         .map_or_else(|e| OutcomeOf::error(e.to_string()), OutcomeOf::success)
/// }
///
/// let port = parse_port("8080");
/// assert_eq!(port.value(), Some(&8080));
///
/// let rendered = parse_port("eighty").match_with(
///     |port| format!("listening on {port}"),
///     |errors| format!("{} error(s)", errors.len()),
/// );
/// assert_eq!(rendered, "1 error(s)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeOf<T> {
    value: Option<T>,
    errors: Vec<Error>,
}

impl<T> OutcomeOf<T> {
    /// A successful outcome carrying `value`, with no check on its contents.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self {
            value: Some(value),
            errors: Vec::new(),
        }
    }

    /// A successful outcome for `Some`, or a failure with no errors for
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{IntoOutcome, OutcomeOf, Status};
    ///
    /// let missing: Option<u32> = None;
    /// assert!(OutcomeOf::create(missing).failed());
    /// assert!(OutcomeOf::create(Some(3)).succeeded());
    ///
    /// // Wrapping the absent value itself is a success.
    /// assert!(missing.into_outcome().succeeded());
    /// ```
    #[must_use]
    pub fn create(value: Option<T>) -> Self {
        value.map_or_else(Self::fail, Self::success)
    }

    /// A failed outcome with no errors.
    #[must_use]
    pub const fn fail() -> Self {
        Self {
            value: None,
            errors: Vec::new(),
        }
    }

    /// A failed outcome carrying exactly one error.
    #[must_use]
    pub fn error(message: impl Into<Error>) -> Self {
        Self {
            value: None,
            errors: vec![message.into()],
        }
    }

    /// Alternate spelling of [`OutcomeOf::error`].
    #[must_use]
    pub fn errors_from(message: impl Into<Error>) -> Self {
        Self::error(message)
    }

    /// A failed outcome carrying `errors` in the given order.
    #[must_use]
    pub fn errors<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Error>,
    {
        Self {
            value: None,
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    /// A successful outcome that also reports non-fatal errors.
    #[must_use]
    pub fn partial<I>(value: T, errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Error>,
    {
        Self {
            value: Some(value),
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) const fn from_parts(value: Option<T>, errors: Vec<Error>) -> Self {
        Self { value, errors }
    }

    /// Borrow the value of a successful outcome.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume the outcome, returning the value only if it succeeded.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Consume the outcome, returning the value or `default` on failure.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Consume the outcome, computing a fallback from the errors on failure.
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(Vec<Error>) -> T,
    {
        match self.value {
            Some(value) => value,
            None => fallback(self.errors),
        }
    }

    /// Consume the outcome, returning the value or `T::default()` on failure.
    ///
    /// The fallback is indistinguishable from a legitimate default value, so
    /// it is logged at `debug` level.
    #[must_use]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.value.unwrap_or_else(|| {
            tracing::debug!(
                errors = self.errors.len(),
                "substituting default value for failed outcome"
            );
            T::default()
        })
    }

    /// Split the outcome into its value slot and errors.
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Vec<Error>) {
        (self.value, self.errors)
    }

    /// Convert into a standard [`Result`] so the outcome can feed `?`.
    ///
    /// # Errors
    ///
    /// Returns a [`Failure`] holding every recorded error when the outcome
    /// failed.
    pub fn into_result(self) -> Result<T, Failure> {
        self.value.ok_or_else(|| Failure::new(self.errors))
    }

    /// Transform the success value, keeping every recorded error.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> OutcomeOf<U>
    where
        F: FnOnce(T) -> U,
    {
        OutcomeOf {
            value: self.value.map(f),
            errors: self.errors,
        }
    }

    /// Chain a further fallible step onto a successful outcome.
    ///
    /// Errors from both steps are kept in order. A failed outcome skips `f`.
    #[must_use]
    pub fn and_then<U, F>(self, f: F) -> OutcomeOf<U>
    where
        F: FnOnce(T) -> OutcomeOf<U>,
    {
        let Self { value, mut errors } = self;
        match value {
            Some(value) => {
                let next = f(value);
                errors.extend(next.errors);
                OutcomeOf {
                    value: next.value,
                    errors,
                }
            }
            None => OutcomeOf {
                value: None,
                errors,
            },
        }
    }
}

impl<T: Default> OutcomeOf<T> {
    /// A successful outcome carrying `T::default()`.
    #[must_use]
    pub fn pass() -> Self {
        Self::success(T::default())
    }
}

impl<T> Status for OutcomeOf<T> {
    fn succeeded(&self) -> bool {
        self.value.is_some()
    }

    fn errors(&self) -> &[Error] {
        &self.errors
    }
}

impl<T: Default> From<bool> for OutcomeOf<T> {
    fn from(succeeded: bool) -> Self {
        if succeeded { Self::pass() } else { Self::fail() }
    }
}

impl<T> From<Error> for OutcomeOf<T> {
    fn from(error: Error) -> Self {
        Self::error(error)
    }
}

impl<T> From<Vec<Error>> for OutcomeOf<T> {
    fn from(errors: Vec<Error>) -> Self {
        Self {
            value: None,
            errors,
        }
    }
}

impl<T, E: Into<Error>> From<Result<T, E>> for OutcomeOf<T> {
    fn from(result: Result<T, E>) -> Self {
        result.map_or_else(Self::error, Self::success)
    }
}

/// Drop the value, keeping the flag and errors.
impl<T> From<OutcomeOf<T>> for Outcome {
    fn from(outcome: OutcomeOf<T>) -> Self {
        let OutcomeOf { value, errors } = outcome;
        if value.is_some() {
            Self::partial(errors)
        } else {
            Self::errors(errors)
        }
    }
}

#[cfg(test)]
mod tests;
