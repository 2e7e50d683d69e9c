//! Common types used across the platform

use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};
use thiserror::Error;

/// Returned when a closed-set value (category, sort key, ...) is parsed from text
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Deserialize an optional filter value through `FromStr`.
///
/// Select boxes submit `""` for "all", so a blank value is read as `None`.
/// Use together with `#[serde(default)]`.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
