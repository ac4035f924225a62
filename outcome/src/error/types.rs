//! Failures raised at the crate's own boundaries.

use thiserror::Error;

/// Errors produced while encoding or decoding outcomes and their payloads.
///
/// Outcomes never report their own failure through this type; it only covers
/// the places where the crate talks to serde.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutcomeError {
    /// A payload value could not be converted to JSON.
    #[error("failed to encode error payload: {0}")]
    PayloadEncode(#[source] serde_json::Error),

    /// A stored payload did not match the requested type.
    #[error("failed to decode error payload: {0}")]
    PayloadDecode(#[source] serde_json::Error),

    /// A successful outcome's value did not match the requested type.
    #[error("failed to decode outcome value: {0}")]
    ValueDecode(#[source] serde_json::Error),

    /// A serialised outcome claimed success but carried no value.
    #[error("successful outcome is missing its value")]
    MissingValue,
}

/// Result alias for the crate's fallible boundary operations.
pub type OutcomeResult<T> = Result<T, OutcomeError>;
