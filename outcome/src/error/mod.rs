//! Error descriptors carried by outcomes, plus the crate's own failure types.

mod aggregate;
mod conversions;
mod descriptor;
mod types;

pub use aggregate::Failure;
pub use descriptor::Error;
pub use types::{OutcomeError, OutcomeResult};
