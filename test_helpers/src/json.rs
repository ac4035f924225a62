//! JSON shortcuts for serialisation tests.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialises `value` to a JSON string and decodes it back.
///
/// # Errors
///
/// Returns an error if either direction fails; the context names the step.
///
/// # Examples
///
/// ```
/// let decoded: Vec<u8> = test_helpers::json::round_trip(&vec![1_u8, 2])?;
/// assert_eq!(decoded, vec![1, 2]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn round_trip<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let encoded = serde_json::to_string(value).context("serialise value to JSON")?;
    serde_json::from_str(&encoded).with_context(|| format!("deserialise JSON `{encoded}`"))
}

/// Serialises `value` into a [`serde_json::Value`] for shape assertions.
///
/// # Errors
///
/// Returns an error if serialisation fails.
pub fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).context("serialise value to a JSON tree")
}
