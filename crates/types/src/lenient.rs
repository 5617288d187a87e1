use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional field, treating a value of the wrong shape as absent.
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize an optional array. A non-array value is reported as absent.
pub(crate) fn optional_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(items_of(items))),
        _ => Ok(None),
    }
}

/// Entries that do not fit `T` keep their slot as `T::default()` so positions in the
/// sequence are preserved; consecutive-step pairing depends on them.
pub(crate) fn items_of<T>(items: Vec<Value>) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect()
}
