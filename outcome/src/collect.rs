//! Accumulating many outcomes into one.
//!
//! Collection never short-circuits: every input is visited so that all
//! errors are reported together, in input order.

use crate::{Outcome, OutcomeOf, Status};

/// Succeeds only if every input succeeded.
///
/// ```
/// use outcome::{Outcome, Status};
///
/// let combined: Outcome = [
///     Outcome::pass(),
///     Outcome::error("name is required"),
///     Outcome::error("age must be positive"),
/// ]
/// .into_iter()
/// .collect();
/// assert!(combined.failed());
/// assert_eq!(combined.errors(), ["name is required", "age must be positive"]);
/// ```
impl FromIterator<Outcome> for Outcome {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut succeeded = true;
        let mut errors = Vec::new();
        for outcome in iter {
            succeeded &= outcome.succeeded();
            errors.extend(outcome.into_errors());
        }
        if succeeded {
            Self::partial(errors)
        } else {
            Self::errors(errors)
        }
    }
}

/// Gathers every value when all inputs succeeded; otherwise fails with the
/// union of their errors.
impl<T> FromIterator<OutcomeOf<T>> for OutcomeOf<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = OutcomeOf<T>>>(iter: I) -> Self {
        let mut values = Some(Vec::new());
        let mut errors = Vec::new();
        for outcome in iter {
            let (value, more) = outcome.into_parts();
            errors.extend(more);
            match value {
                Some(item) => {
                    if let Some(collected) = values.as_mut() {
                        collected.push(item);
                    }
                }
                None => values = None,
            }
        }
        Self::from_parts(values, errors)
    }
}
