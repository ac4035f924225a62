//! Success/failure carriers that report errors as data.
//!
//! The crate offers two outcome types:
//!
//! - [`Outcome`]: a pass/fail flag plus an ordered list of [`Error`]
//!   descriptors.
//! - [`OutcomeOf<T>`]: the same, carrying a `T` when the operation succeeded.
//!
//! Both implement [`Status`] and round-trip through serde. Errors accumulate
//! in insertion order; the success flag alone decides which branch the
//! combinators take.
//!
//! # Example
//!
//! ```rust
//! use outcome::{Error, Outcome, OutcomeOf, Status};
//!
//! fn validate(name: &str, age: i32) -> OutcomeOf<(String, i32)> {
//!     let mut errors = Vec::new();
//!     if name.is_empty() {
//!         errors.push(Error::new("name is required"));
//!     }
//!     if age < 0 {
//!         errors.push(Error::new("age must not be negative"));
//!     }
//!     if errors.is_empty() {
//!         OutcomeOf::success((name.to_owned(), age))
//!     } else {
//!         errors.into()
//!     }
//! }
//!
//! let rejected = validate("", -1);
//! assert_eq!(rejected.errors().len(), 2);
//! assert_eq!(rejected.first_error_message(), "name is required");
//!
//! let accepted = validate("ada", 36);
//! accepted.if_successful(|(name, _)| assert_eq!(name, "ada"));
//!
//! let status: Outcome = accepted.into();
//! assert!(status.succeeded());
//! ```

mod collect;
mod error;
mod result_ext;
mod status;
mod typed;
mod untyped;
mod wire;

pub use error::{Error, Failure, OutcomeError, OutcomeResult};
pub use result_ext::IntoOutcome;
pub use status::Status;
pub use typed::OutcomeOf;
pub use untyped::Outcome;
