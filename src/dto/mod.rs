//! Request payloads and their validation.
//!
//! Bodies arrive as loose JSON and are checked field by field so that every problem
//! is reported as a [`DataValidationError`] naming the offending key.

pub mod items;
pub mod shopcarts;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::DataValidationError;

/// Maximum length of the short text columns.
pub const MAX_TEXT_LEN: usize = 63;

/// Typed access to the keys of one JSON object.
pub(crate) struct Fields<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn of(entity: &'static str, value: &'a Value) -> Result<Self, DataValidationError> {
        match value.as_object() {
            Some(map) => Ok(Self { entity, map }),
            None => Err(DataValidationError::new(format!(
                "Invalid {entity}: body of request contained bad or no data"
            ))),
        }
    }

    /// `None` for absent keys and explicit nulls.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn require(&self, key: &str) -> Result<&'a Value, DataValidationError> {
        self.get(key).ok_or_else(|| {
            DataValidationError::new(format!("Invalid {}: missing {key}", self.entity))
        })
    }

    pub(crate) fn required_i32(&self, key: &str) -> Result<i32, DataValidationError> {
        as_i32(key, self.require(key)?)
    }

    pub(crate) fn optional_i32(&self, key: &str) -> Result<Option<i32>, DataValidationError> {
        self.get(key).map(|v| as_i32(key, v)).transpose()
    }

    pub(crate) fn required_f64(&self, key: &str) -> Result<f64, DataValidationError> {
        self.require(key)?
            .as_f64()
            .ok_or_else(|| bad_attribute(key, "a number"))
    }

    pub(crate) fn required_text(&self, key: &str) -> Result<String, DataValidationError> {
        as_text(key, self.require(key)?)
    }

    pub(crate) fn optional_text(&self, key: &str) -> Result<Option<String>, DataValidationError> {
        self.get(key).map(|v| as_text(key, v)).transpose()
    }

    pub(crate) fn optional_timestamp(
        &self,
        key: &str,
    ) -> Result<Option<DateTime<Utc>>, DataValidationError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let raw = value
            .as_str()
            .ok_or_else(|| bad_attribute(key, "a timestamp string"))?;
        parse_timestamp(raw)
            .map(Some)
            .ok_or_else(|| bad_attribute(key, "an RFC 3339 or RFC 2822 timestamp"))
    }

    pub(crate) fn optional_list(
        &self,
        key: &str,
    ) -> Result<Option<&'a Vec<Value>>, DataValidationError> {
        self.get(key)
            .map(|v| v.as_array().ok_or_else(|| bad_attribute(key, "a list")))
            .transpose()
    }
}

fn bad_attribute(key: &str, expected: &str) -> DataValidationError {
    DataValidationError::new(format!("Invalid attribute: {key} must be {expected}"))
}

fn as_i32(key: &str, value: &Value) -> Result<i32, DataValidationError> {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| bad_attribute(key, "an integer"))
}

fn as_text(key: &str, value: &Value) -> Result<String, DataValidationError> {
    let text = value.as_str().ok_or_else(|| bad_attribute(key, "a string"))?;
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(bad_attribute(
            key,
            &format!("at most {MAX_TEXT_LEN} characters"),
        ));
    }
    Ok(text.to_string())
}

/// Accepts RFC 3339 and the RFC 2822 / HTTP-date form (`Tue, 01 Jan 2024 00:00:00 GMT`).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
