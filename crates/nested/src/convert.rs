//! serde_json interop.
//!
//! Graphs import from [`serde_json::Value`] infallibly (object key order is
//! preserved) and export fallibly: a delegate node exports its plain
//! storage, while the tombstone marker has no JSON rendition and fails the
//! conversion.

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::value::{Storage, Value};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The graph contains a tombstone marker, which is not representable.
    #[error("TOMBSTONE")]
    Tombstone,
}

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => {
                let mut storage = Storage::with_capacity(map.len());
                for (k, v) in map {
                    storage.insert(k, Value::from(v));
                }
                Value::Map(storage)
            }
        }
    }
}

impl Value {
    /// Export this graph as a [`serde_json::Value`].
    ///
    /// # Example
    ///
    /// ```
    /// use nested::Value;
    /// use serde_json::json;
    ///
    /// let doc = Value::from(json!({"a": [1, null, "x"]}));
    /// assert_eq!(doc.to_json().unwrap(), json!({"a": [1, null, "x"]}));
    /// assert!(Value::Tombstone.to_json().is_err());
    /// ```
    pub fn to_json(&self) -> Result<JsonValue, ConvertError> {
        match self {
            Value::Null => Ok(JsonValue::Null),
            Value::Bool(b) => Ok(JsonValue::Bool(*b)),
            Value::Number(n) => Ok(JsonValue::Number(n.clone())),
            Value::String(s) => Ok(JsonValue::String(s.clone())),
            Value::List(list) => Ok(JsonValue::Array(
                list.iter()
                    .map(Value::to_json)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Value::Map(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (k, v) in map {
                    out.insert(k.clone(), v.to_json()?);
                }
                Ok(JsonValue::Object(out))
            }
            Value::Node(node) => {
                let storage = node.storage();
                let mut out = serde_json::Map::with_capacity(storage.len());
                for (k, v) in storage {
                    out.insert(k.clone(), v.to_json()?);
                }
                Ok(JsonValue::Object(out))
            }
            Value::Tombstone => Err(ConvertError::Tombstone),
        }
    }
}

impl TryFrom<&Value> for JsonValue {
    type Error = ConvertError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.to_json()
    }
}
