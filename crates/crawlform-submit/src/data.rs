//! Caller-supplied form data.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FormError;

/// A single form value: one string, or several strings submitted under the
/// same name (a multi-select contributes one entry per selected option).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Single(String),
    Many(Vec<String>),
}

impl FormValue {
    /// The entries this value expands to in the encoded payload.
    pub(crate) fn expand(&self) -> &[String] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for FormValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// Ordered caller overrides applied on top of scraped form fields.
///
/// An override fully replaces the scraped value for that name: the field is
/// skipped during enumeration and the override is appended after all scraped
/// pairs, in this sequence's own order. A name mapped to `None` suppresses
/// the field without appending anything in its place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, Option<FormValue>)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an override for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FormValue>) {
        self.entries.push((name.into(), Some(value.into())));
    }

    /// Suppress the field named `name`: it is dropped from the submission
    /// and nothing is appended in its place.
    pub fn suppress(&mut self, name: impl Into<String>) {
        self.entries.push((name.into(), None));
    }

    /// Whether `name` is overridden, including suppressed names.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// The overrides in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&FormValue>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Into<String>, V: Into<FormValue>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (name, value) in iter {
            data.insert(name, value);
        }
        data
    }
}

impl TryFrom<Value> for FormData {
    type Error = FormError;

    /// Convert loosely-typed data into ordered overrides.
    ///
    /// Accepts a JSON object (insertion order preserved) or an array of
    /// `[name, value]` pairs. Values must be strings, arrays of strings, or
    /// `null`; anything else is [`FormError::InvalidOverrideData`].
    fn try_from(value: Value) -> Result<Self, FormError> {
        let mut data = Self::new();
        match value {
            Value::Object(map) => {
                for (name, value) in map {
                    data.entries.push((name, override_value(value)?));
                }
            }
            Value::Array(items) => {
                for item in items {
                    let pair = match item {
                        Value::Array(pair) => pair,
                        other => {
                            return Err(FormError::InvalidOverrideData(format!(
                                "expected a [name, value] pair, got {}",
                                json_type(&other)
                            )));
                        }
                    };
                    if pair.len() != 2 {
                        return Err(FormError::InvalidOverrideData(format!(
                            "expected a [name, value] pair, got {} element(s)",
                            pair.len()
                        )));
                    }
                    let mut pair = pair.into_iter();
                    let name = match pair.next() {
                        Some(Value::String(name)) => name,
                        other => {
                            return Err(FormError::InvalidOverrideData(format!(
                                "pair names must be strings, got {}",
                                other.as_ref().map_or("nothing", json_type)
                            )));
                        }
                    };
                    let value = pair.next().unwrap_or(Value::Null);
                    data.entries.push((name, override_value(value)?));
                }
            }
            other => {
                return Err(FormError::InvalidOverrideData(format!(
                    "expected a map or a sequence, got {}",
                    json_type(&other)
                )));
            }
        }
        Ok(data)
    }
}

impl<'de> Deserialize<'de> for FormData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

fn override_value(value: Value) -> Result<Option<FormValue>, FormError> {
    match value {
        Value::Null => Ok(None),
        Value::String(value) => Ok(Some(FormValue::Single(value))),
        Value::Array(items) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(value) => values.push(value),
                    other => {
                        return Err(FormError::InvalidOverrideData(format!(
                            "value sequences may only contain strings, got {}",
                            json_type(&other)
                        )));
                    }
                }
            }
            Ok(Some(FormValue::Many(values)))
        }
        other => Err(FormError::InvalidOverrideData(format!(
            "values must be strings, sequences of strings, or null, got {}",
            json_type(&other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
