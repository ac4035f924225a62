//! Aggregated errors handed to `?`-based code when an outcome is unwrapped.

use std::{error::Error as StdError, fmt};

use super::Error;

/// The errors of a failed outcome, packaged as a [`std::error::Error`].
///
/// Produced by `into_result` on both outcome types. Display output numbers
/// each descriptor in insertion order.
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// let failure = Outcome::errors(["bad input", "missing field"])
///     .into_result()
///     .unwrap_err();
/// assert_eq!(failure.len(), 2);
/// assert_eq!(failure.to_string(), "1: bad input\n2: missing field");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Failure(Vec<Error>);

impl Failure {
    /// Create a failure from the given descriptors.
    #[must_use]
    pub const fn new(errors: Vec<Error>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained descriptors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.0.iter()
    }

    /// Number of descriptors in the failure.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the failure carries no descriptors at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the descriptors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Error] {
        &self.0
    }

    /// Consume the failure, returning its descriptors.
    #[must_use]
    pub fn into_errors(self) -> Vec<Error> {
        self.0
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("operation failed");
        }
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl StdError for Failure {}

impl<'a> IntoIterator for &'a Failure {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Failure {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
