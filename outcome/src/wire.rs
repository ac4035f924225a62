//! Serde representation of [`OutcomeOf`].
//!
//! The wire shape is `{"succeeded": bool, "errors": [..], "value": T}`. The
//! value is written whenever the outcome succeeded, even if `T` renders as
//! `null`, and omitted otherwise. Every field defaults when absent, so `{}`
//! decodes to a failed outcome with no errors. The value is only decoded as
//! `T` once the flag says the outcome succeeded; anything a failed outcome
//! carries is dropped unread.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{Error, OutcomeError, OutcomeOf, OutcomeResult, Status};

#[derive(Serialize)]
struct WireRef<'a, T> {
    succeeded: bool,
    errors: &'a [Error],
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a T>,
}

#[derive(Deserialize)]
struct Wire {
    #[serde(default)]
    succeeded: bool,
    #[serde(default)]
    errors: Vec<Error>,
    #[serde(default, deserialize_with = "present")]
    value: Option<Value>,
}

/// Treat a present `value` field as `Some`, even when it holds `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn from_wire<T: DeserializeOwned>(wire: Wire) -> OutcomeResult<OutcomeOf<T>> {
    let Wire {
        succeeded,
        errors,
        value,
    } = wire;
    match (succeeded, value) {
        (true, Some(raw)) => {
            let value = T::deserialize(raw).map_err(OutcomeError::ValueDecode)?;
            Ok(OutcomeOf::from_parts(Some(value), errors))
        }
        (true, None) => {
            tracing::warn!(
                errors = errors.len(),
                "rejecting successful outcome without a value"
            );
            Err(OutcomeError::MissingValue)
        }
        (false, value) => {
            if value.is_some() {
                tracing::debug!("discarding value carried by a failed outcome");
            }
            Ok(OutcomeOf::from_parts(None, errors))
        }
    }
}

impl<T: Serialize> Serialize for OutcomeOf<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireRef {
            succeeded: self.succeeded(),
            errors: self.errors(),
            value: self.value(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for OutcomeOf<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Wire::deserialize(deserializer)?;
        from_wire(wire).map_err(serde::de::Error::custom)
    }
}
