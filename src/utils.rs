use std::{fmt::Display, str::FromStr};

use serde::Deserialize;

/// Helper type for deserializing a string or an integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrI64 {
    I64(i64),
    String(String),
}

/// Deserializes an identifier the API sends either as a string or a number.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match StringOrI64::deserialize(deserializer)? {
        StringOrI64::I64(i) => i.to_string(),
        StringOrI64::String(s) => s,
    })
}

/// Deserializes a missing, null or empty string to `None`, and anything else
/// through `FromStr`.
pub(crate) fn deserialize_empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.is_empty() => s.parse().map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}
