//! The immutable error descriptor stored inside every outcome.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{OutcomeError, OutcomeResult};

/// A single failure description: either a human-readable message or an
/// attached payload object.
///
/// Descriptors never change after construction. Rendering a descriptor (via
/// [`Error::as_str`] or [`std::fmt::Display`]) yields its message, or the
/// empty string when it was built from a payload alone.
///
/// # Examples
///
/// ```
/// use outcome::Error;
/// use serde_json::json;
///
/// let message = Error::new("disk full");
/// assert_eq!(message.as_str(), "disk full");
///
/// let payload = Error::from_payload(json!({"code": 28}));
/// assert_eq!(payload.as_str(), "");
/// assert_eq!(payload.payload(), Some(&json!({"code": 28})));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
}

impl Error {
    /// Build a descriptor from a human-readable message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            payload: None,
        }
    }

    /// Build a descriptor around an arbitrary payload object.
    #[must_use]
    pub const fn from_payload(payload: Value) -> Self {
        Self {
            message: None,
            payload: Some(payload),
        }
    }

    /// Serialise `payload` and wrap the result as a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::PayloadEncode`] when `payload` cannot be
    /// represented as JSON (for example, a map with non-string keys).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Error;
    ///
    /// #[derive(serde::Serialize)]
    /// struct Rejected { field: &'static str }
    ///
    /// let err = Error::try_from_serialize(&Rejected { field: "email" })?;
    /// assert_eq!(err.payload().and_then(|p| p["field"].as_str()), Some("email"));
    /// # Ok::<(), outcome::OutcomeError>(())
    /// ```
    pub fn try_from_serialize<P>(payload: &P) -> OutcomeResult<Self>
    where
        P: Serialize + ?Sized,
    {
        serde_json::to_value(payload)
            .map(Self::from_payload)
            .map_err(OutcomeError::PayloadEncode)
    }

    /// An error whose message is the empty string.
    pub(crate) const fn empty() -> Self {
        Self {
            message: Some(String::new()),
            payload: None,
        }
    }

    /// Returns the message, if this descriptor was built from one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the attached payload, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Decode the attached payload into `P`.
    ///
    /// Yields `Ok(None)` for message-only descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::PayloadDecode`] when the payload does not match
    /// the shape of `P`.
    pub fn payload_as<P: DeserializeOwned>(&self) -> OutcomeResult<Option<P>> {
        self.payload
            .as_ref()
            .map(|value| P::deserialize(value).map_err(OutcomeError::PayloadDecode))
            .transpose()
    }

    /// Renders the descriptor as its message, or `""` when none was supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}
