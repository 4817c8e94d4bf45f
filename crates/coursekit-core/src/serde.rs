//! Lenient deserializers for payloads that come from HTML forms.
//!
//! Form inputs frequently send numbers as strings (`"19.99"`) and clear a
//! field by sending an empty string. These helpers accept both shapes and
//! treat blank strings as an absent value.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Deserializes an optional number that may arrive as a string.
pub fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<NumberOrString> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(NumberOrString::Int(n)) => Ok(Some(n as f64)),
        Some(NumberOrString::Float(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Deserializes an optional integer that may arrive as a string.
///
/// Whole floats (`3.0`) are accepted; fractional values are rejected.
pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<NumberOrString> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(NumberOrString::Int(n)) => Ok(Some(n)),
        Some(NumberOrString::Float(n)) if n.fract() == 0.0 => Ok(Some(n as i64)),
        Some(NumberOrString::Float(n)) => Err(serde::de::Error::custom(format!(
            "expected an integer, found {n}"
        ))),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
