//! # Request Parameters
//!
//! Parameters are an ordered map from keys to values, where a value is either
//! a scalar or a one-level nested map. Before encoding, nested values are
//! flattened into bracketed keys:
//!
//! ```text
//! {"amount": "500", "client": {"email": "a@b.c"}}
//!   -> amount=500&client[email]=a@b.c
//! ```
//!
//! Only one level of nesting exists. `ParamValue::Nested` holds scalars, so
//! deeper structures cannot be built by hand, and `Params::from_json` rejects
//! them with `PaymillError::InvalidParams`.

use crate::error::{PaymillError, PaymillResult};
use serde::Serialize;
use serde_json::Value;

/// A single parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Scalar(String),
    Nested(Vec<(String, String)>),
}

impl ParamValue {
    pub fn is_nested(&self) -> bool {
        matches!(self, ParamValue::Nested(_))
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ParamValue::Scalar(s) => Some(s),
            ParamValue::Nested(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Scalar(value.clone())
    }
}

macro_rules! scalar_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_display!(i32, i64, u32, u64, usize, f64, bool);

/// Ordered parameter map sent with a request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, keeping the position of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder: add a scalar (or prebuilt) value
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder: add a nested map, flattened later to `key[field]`
    pub fn nested<K, V>(mut self, key: impl Into<String>, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.to_string()))
            .collect();
        self.insert(key, ParamValue::Nested(fields));
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Replace every nested value with one `key[field]` entry per field.
    ///
    /// Flattened entries take the position of the key they replace. A flat
    /// map comes back unchanged.
    pub fn flatten(self) -> Params {
        let mut entries = Vec::with_capacity(self.entries.len());
        for (key, value) in self.entries {
            match value {
                ParamValue::Scalar(_) => entries.push((key, value)),
                ParamValue::Nested(fields) => {
                    for (field, v) in fields {
                        entries.push((format!("{}[{}]", key, field), ParamValue::Scalar(v)));
                    }
                }
            }
        }
        Params { entries }
    }

    /// Flattened key/value pairs, ready for form encoding.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match value {
                ParamValue::Scalar(v) => pairs.push((key.clone(), v.clone())),
                ParamValue::Nested(fields) => {
                    for (field, v) in fields {
                        pairs.push((format!("{}[{}]", key, field), v.clone()));
                    }
                }
            }
        }
        pairs
    }

    /// `application/x-www-form-urlencoded` encoding of the flattened map.
    pub fn encode(&self) -> PaymillResult<String> {
        serde_urlencoded::to_string(self.to_pairs())
            .map_err(|e| PaymillError::Serialization(format!("Failed to encode parameters: {}", e)))
    }

    /// Build parameters from a JSON object.
    ///
    /// `null` maps to an empty string, objects and arrays map to one nested
    /// level (arrays keyed by index). Anything nested deeper is rejected.
    pub fn from_json(value: &Value) -> PaymillResult<Params> {
        let object = match value {
            Value::Object(map) => map,
            Value::Null => return Ok(Params::new()),
            other => {
                return Err(PaymillError::InvalidParams(format!(
                    "expected an object, got {}",
                    json_kind(other)
                )))
            }
        };

        let mut params = Params::new();
        for (key, value) in object {
            let param = match value {
                Value::Object(inner) => ParamValue::Nested(nested_fields(
                    key,
                    inner.iter().map(|(k, v)| (k.clone(), v)),
                )?),
                Value::Array(items) => ParamValue::Nested(nested_fields(
                    key,
                    items.iter().enumerate().map(|(i, v)| (i.to_string(), v)),
                )?),
                scalar => ParamValue::Scalar(scalar_text(scalar)),
            };
            params.entries.push((key.clone(), param));
        }
        Ok(params)
    }

    /// Build parameters from any serializable value via `from_json`.
    pub fn from_serialize<T: Serialize>(value: &T) -> PaymillResult<Params> {
        let json = serde_json::to_value(value)
            .map_err(|e| PaymillError::Serialization(format!("Failed to serialize parameters: {}", e)))?;
        Params::from_json(&json)
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

fn nested_fields<'a>(
    key: &str,
    fields: impl Iterator<Item = (String, &'a Value)>,
) -> PaymillResult<Vec<(String, String)>> {
    fields
        .map(|(field, v)| match v {
            Value::Object(_) | Value::Array(_) => Err(PaymillError::InvalidParams(format!(
                "{}[{}] is nested more than one level deep",
                key, field
            ))),
            scalar => Ok((field, scalar_text(scalar))),
        })
        .collect()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        // f64 Display drops the ".0" that JSON number formatting keeps
        Value::Number(n) if n.is_f64() => n.as_f64().map(|f| f.to_string()).unwrap_or_default(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
