//! Store-native attribute representation
//!
//! Items live in the store as maps of typed attribute values rather than
//! raw JSON. Strings, numbers, booleans, nulls, lists and nested maps are
//! representable; numbers are carried in their decimal string form so the
//! store never reinterprets them.

use std::collections::BTreeMap;

use serde_json::{Number, Value};

use super::errors::{StoreError, StoreResult};

/// A single typed attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// String value
    S(String),
    /// Numeric value, carried in decimal string form
    N(String),
    /// Boolean value
    Bool(bool),
    /// Explicit null
    Null,
    /// List of values
    L(Vec<AttributeValue>),
    /// Nested map
    M(AttributeMap),
}

/// An item as the store sees it: attribute name to typed value.
pub type AttributeMap = BTreeMap<String, AttributeValue>;

impl AttributeValue {
    /// Convert a JSON value into its attribute representation.
    pub fn from_json(value: Value) -> StoreResult<Self> {
        match value {
            Value::String(s) => Ok(AttributeValue::S(s)),
            Value::Number(n) => Ok(AttributeValue::N(n.to_string())),
            Value::Bool(b) => Ok(AttributeValue::Bool(b)),
            Value::Null => Ok(AttributeValue::Null),
            Value::Array(items) => {
                let converted = items
                    .into_iter()
                    .map(AttributeValue::from_json)
                    .collect::<StoreResult<Vec<_>>>()?;
                Ok(AttributeValue::L(converted))
            }
            Value::Object(fields) => {
                let mut map = AttributeMap::new();
                for (name, field) in fields {
                    map.insert(name, AttributeValue::from_json(field)?);
                }
                Ok(AttributeValue::M(map))
            }
        }
    }

    /// Convert back into a JSON value.
    pub fn into_json(self) -> StoreResult<Value> {
        match self {
            AttributeValue::S(s) => Ok(Value::String(s)),
            AttributeValue::N(n) => parse_number(&n),
            AttributeValue::Bool(b) => Ok(Value::Bool(b)),
            AttributeValue::Null => Ok(Value::Null),
            AttributeValue::L(items) => {
                let converted = items
                    .into_iter()
                    .map(AttributeValue::into_json)
                    .collect::<StoreResult<Vec<_>>>()?;
                Ok(Value::Array(converted))
            }
            AttributeValue::M(map) => map_into_json(map),
        }
    }

    /// Borrow the string payload, if this is a string value.
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttributeValue::S(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Convert a JSON object into an attribute map.
///
/// Only objects are representable as items; any other shape is rejected.
pub fn map_from_json(value: Value) -> StoreResult<AttributeMap> {
    match AttributeValue::from_json(value)? {
        AttributeValue::M(map) => Ok(map),
        other => Err(StoreError::UnsupportedValue(format!(
            "expected an object at the item root, got {:?}",
            other
        ))),
    }
}

/// Convert an attribute map back into a JSON object.
pub fn map_into_json(map: AttributeMap) -> StoreResult<Value> {
    let mut fields = serde_json::Map::new();
    for (name, value) in map {
        fields.insert(name, value.into_json()?);
    }
    Ok(Value::Object(fields))
}

fn parse_number(n: &str) -> StoreResult<Value> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Value::Number(Number::from(i)));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Value::Number(Number::from(u)));
    }
    if let Ok(f) = n.parse::<f64>() {
        if let Some(number) = Number::from_f64(f) {
            return Ok(Value::Number(number));
        }
    }
    Err(StoreError::UnsupportedValue(format!(
        "not a representable number: {}",
        n
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_round_trip() {
        let original = json!({
            "email": "alice@example.com",
            "firstName": "Alice",
            "lastName": "Liddell"
        });

        let map = map_from_json(original.clone()).unwrap();
        assert_eq!(
            map.get("email").and_then(AttributeValue::as_s),
            Some("alice@example.com")
        );

        let restored = map_into_json(map).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_nested_values_round_trip() {
        let original = json!({
            "name": "nested",
            "count": 3,
            "ratio": 0.5,
            "flags": [true, false],
            "inner": {"deep": null}
        });

        let map = map_from_json(original.clone()).unwrap();
        let restored = map_into_json(map).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_non_object_root_rejected() {
        let result = map_from_json(json!("just a string"));
        assert!(matches!(result, Err(StoreError::UnsupportedValue(_))));

        let result = map_from_json(json!([1, 2, 3]));
        assert!(matches!(result, Err(StoreError::UnsupportedValue(_))));
    }

    #[test]
    fn test_malformed_number_rejected() {
        let value = AttributeValue::N("not-a-number".to_string());
        assert!(matches!(
            value.into_json(),
            Err(StoreError::UnsupportedValue(_))
        ));
    }

    #[test]
    fn test_numbers_carried_as_strings() {
        let value = AttributeValue::from_json(json!(42)).unwrap();
        assert_eq!(value, AttributeValue::N("42".to_string()));
    }
}
