//! The value-less outcome: a pass/fail flag plus accumulated errors.

use serde::{Deserialize, Serialize};

use crate::{Error, Failure, OutcomeOf, Status};

/// Outcome of an operation that produces no value.
///
/// Built through the associated constructors or the `From` conversions from
/// `bool`, [`Error`] and `Vec<Error>`. Immutable once built.
///
/// # Examples
///
/// ```
/// use outcome::{Error, Outcome, Status};
///
/// fn check(name: &str) -> Outcome {
///     if name.is_empty() {
///         return Outcome::error("name is required");
///     }
///     Outcome::pass()
/// }
///
/// assert!(check("ada").succeeded());
/// assert_eq!(check("").first_error_message(), "name is required");
///
/// let from_flag: Outcome = false.into();
/// assert!(from_flag.failed());
/// let from_error: Outcome = Error::new("boom").into();
/// assert_eq!(from_error.errors(), ["boom"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(default)]
    succeeded: bool,
    #[serde(default)]
    errors: Vec<Error>,
}

impl Outcome {
    /// A successful outcome with no errors.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            succeeded: true,
            errors: Vec::new(),
        }
    }

    /// A failed outcome with no errors.
    #[must_use]
    pub const fn fail() -> Self {
        Self {
            succeeded: false,
            errors: Vec::new(),
        }
    }

    /// A failed outcome carrying exactly one error.
    #[must_use]
    pub fn error(message: impl Into<Error>) -> Self {
        Self {
            succeeded: false,
            errors: vec![message.into()],
        }
    }

    /// Alternate spelling of [`Outcome::error`] for call sites that read
    /// better in the plural.
    #[must_use]
    pub fn errors_from(message: impl Into<Error>) -> Self {
        Self::error(message)
    }

    /// A failed outcome carrying `errors` in the given order.
    ///
    /// An empty sequence is accepted and yields a failure with no errors.
    #[must_use]
    pub fn errors<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Error>,
    {
        Self {
            succeeded: false,
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    /// A successful outcome that still reports non-fatal errors.
    #[must_use]
    pub fn partial<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Error>,
    {
        Self {
            succeeded: true,
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    /// Wrap `value` as a successful outcome, treating `None` as a failure
    /// with no errors.
    ///
    /// Contrast with [`Outcome::success`], which never inspects its input.
    #[must_use]
    pub fn create<T>(value: Option<T>) -> OutcomeOf<T> {
        OutcomeOf::create(value)
    }

    /// Wrap `value` as a successful outcome unconditionally.
    #[must_use]
    pub const fn success<T>(value: T) -> OutcomeOf<T> {
        OutcomeOf::success(value)
    }

    /// Convert into a standard [`Result`] so the outcome can feed `?`.
    ///
    /// # Errors
    ///
    /// Returns a [`Failure`] holding every recorded error when the outcome
    /// failed.
    pub fn into_result(self) -> Result<(), Failure> {
        if self.succeeded {
            Ok(())
        } else {
            Err(Failure::new(self.errors))
        }
    }

    /// Consume the outcome, returning its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl Status for Outcome {
    fn succeeded(&self) -> bool {
        self.succeeded
    }

    fn errors(&self) -> &[Error] {
        &self.errors
    }
}

impl From<bool> for Outcome {
    fn from(succeeded: bool) -> Self {
        Self {
            succeeded,
            errors: Vec::new(),
        }
    }
}

impl From<Error> for Outcome {
    fn from(error: Error) -> Self {
        Self::error(error)
    }
}

impl From<Vec<Error>> for Outcome {
    fn from(errors: Vec<Error>) -> Self {
        Self {
            succeeded: false,
            errors,
        }
    }
}

impl<E: Into<Error>> From<Result<(), E>> for Outcome {
    fn from(result: Result<(), E>) -> Self {
        result.map_or_else(Self::error, |()| Self::pass())
    }
}
