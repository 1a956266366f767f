//! Element values stored in piladb stacks
//!
//! A stack is indifferent to what it holds, but elements still need a closed
//! shape to be compared, cloned and put back on the wire. Equality is
//! structural and never crosses variants, so `Int(1) != Float(1.0)` and a
//! `String` never equals the `Bytes` of its UTF-8 encoding. Floats compare
//! the IEEE-754 way.
//!
//! Serialization goes through the canonical JSON mapping in [`crate::json`],
//! so a `Value` always appears on the wire as plain JSON.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

use crate::json::{json_to_value, value_to_json};

/// Opaque element value held by a stack frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON `null`
    Null,
    /// JSON boolean
    Bool(bool),
    /// JSON number without a fractional part
    Int(i64),
    /// Any other JSON number, plus NaN, infinities and -0.0
    Float(f64),
    /// JSON string
    String(String),
    /// Binary payload, `{"$bytes": ...}` on the wire
    Bytes(Vec<u8>),
    /// JSON array
    Array(Vec<Value>),
    /// JSON object
    Object(HashMap<String, Value>),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value_to_json(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = serde_json::Value::deserialize(deserializer)?;
        json_to_value(&json).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_never_crosses_variants() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::from("hello"), Value::from(b"hello".to_vec()));
        assert_ne!(Value::Null, Value::Bool(false));
    }

    #[test]
    fn float_equality_is_ieee() {
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_eq!(Value::Float(-0.0), Value::Float(0.0));
    }

    #[test]
    fn object_equality_ignores_insertion_order() {
        let a: HashMap<_, _> = [("x".to_string(), Value::Int(1)), ("y".to_string(), Value::Null)]
            .into_iter()
            .collect();
        let b: HashMap<_, _> = [("y".to_string(), Value::Null), ("x".to_string(), Value::Int(1))]
            .into_iter()
            .collect();
        assert_eq!(Value::Object(a), Value::Object(b));
    }

    #[test]
    fn serializes_as_plain_json() {
        let v = Value::Array(vec![Value::Int(1), Value::from("two"), Value::Null]);
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"[1,"two",null]"#);
    }

    #[test]
    fn deserializes_from_plain_json() {
        let v: Value = serde_json::from_str(r#"{"a":[true,2.5]}"#).unwrap();
        let expected: HashMap<_, _> = [(
            "a".to_string(),
            Value::Array(vec![Value::Bool(true), Value::Float(2.5)]),
        )]
        .into_iter()
        .collect();
        assert_eq!(v, Value::Object(expected));
    }
}
