//! Lenient decoding for request payloads. Browser forms send `null` or `""`
//! for untouched fields; those decode to "missing" so validation can report
//! them by name.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// `null` decodes to the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Number(i64),
    Text(String),
}

/// Accepts a numeric id, a numeric string, or `null`/`""` for none.
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IdValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IdValue::Number(id)) => Ok(Some(id)),
        Some(IdValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid id `{text}`")))
        }
    }
}
