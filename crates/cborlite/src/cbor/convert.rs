//! Conversions between [`CborValue`] and `serde_json::Value`.

use serde_json::{Map, Value as JsonValue};

use super::error::CborError;
use crate::CborValue;

/// Accepts non-negative integers, strings, arrays and objects. Everything
/// else (null, booleans, negative or fractional numbers) has no
/// representation and fails with [`CborError::UnsupportedValue`].
impl TryFrom<&JsonValue> for CborValue {
    type Error = CborError;

    fn try_from(value: &JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Null => Err(unsupported("null")),
            JsonValue::Bool(_) => Err(unsupported("boolean")),
            JsonValue::Number(n) => match n.as_u64() {
                Some(u) => Ok(CborValue::UInt(u)),
                None if n.is_i64() => Err(unsupported("negative integer")),
                None => Err(unsupported("floating point number")),
            },
            JsonValue::String(s) => Ok(CborValue::Text(s.clone())),
            JsonValue::Array(items) => items
                .iter()
                .map(CborValue::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(CborValue::Array),
            JsonValue::Object(obj) => obj
                .iter()
                .map(|(k, v)| Ok((k.clone(), CborValue::try_from(v)?)))
                .collect::<Result<Vec<_>, CborError>>()
                .map(CborValue::Map),
        }
    }
}

impl TryFrom<JsonValue> for CborValue {
    type Error = CborError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        CborValue::try_from(&value)
    }
}

/// Duplicate map keys collapse: the value of the last occurrence wins.
impl From<&CborValue> for JsonValue {
    fn from(value: &CborValue) -> Self {
        match value {
            CborValue::UInt(n) => JsonValue::from(*n),
            CborValue::Text(s) => JsonValue::String(s.clone()),
            CborValue::Array(items) => JsonValue::Array(items.iter().map(JsonValue::from).collect()),
            CborValue::Map(entries) => {
                let mut obj = Map::with_capacity(entries.len());
                for (k, v) in entries {
                    obj.insert(k.clone(), JsonValue::from(v));
                }
                JsonValue::Object(obj)
            }
        }
    }
}

impl From<CborValue> for JsonValue {
    fn from(value: CborValue) -> Self {
        JsonValue::from(&value)
    }
}

fn unsupported(what: &str) -> CborError {
    CborError::UnsupportedValue(format!("{what} has no cbor representation"))
}
