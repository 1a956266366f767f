//! Canonical JSON mapping for element values.
//!
//! Stack elements travel as plain JSON. A few [`Value`] variants have no
//! standard JSON representation and get a single-key wrapper object:
//!
//! | Type | JSON Representation |
//! |------|---------------------|
//! | Bytes | `{"$bytes": "<base64>"}` |
//! | NaN | `{"$f64": "NaN"}` |
//! | +Infinity | `{"$f64": "+Inf"}` |
//! | -Infinity | `{"$f64": "-Inf"}` |
//! | -0.0 | `{"$f64": "-0.0"}` |
//! | Object whose only key is reserved | `{"$object": {...}}` |
//!
//! Both directions are lossless for every `Value`. An object with a single
//! `$bytes`, `$f64` or `$object` key is escaped on the way out, so a stored
//! object never reads back as one of the wrapper types.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::value::Value;

const BYTES_KEY: &str = "$bytes";
const FLOAT_KEY: &str = "$f64";
const OBJECT_KEY: &str = "$object";

fn is_reserved(key: &str) -> bool {
    matches!(key, BYTES_KEY | FLOAT_KEY | OBJECT_KEY)
}

/// Convert a Value to a JSON value with special encoding.
pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(i) => JsonValue::Number((*i).into()),
        Value::Float(f) => float_to_json(*f),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Bytes(b) => serde_json::json!({ BYTES_KEY: BASE64.encode(b) }),
        Value::Array(arr) => JsonValue::Array(arr.iter().map(value_to_json).collect()),
        Value::Object(map) => {
            let object = JsonValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), value_to_json(v)))
                    .collect(),
            );
            if map.len() == 1 && map.keys().all(|k| is_reserved(k)) {
                serde_json::json!({ OBJECT_KEY: object })
            } else {
                object
            }
        }
    }
}

/// Convert a JSON value to a Value, recognizing special encodings.
pub fn json_to_value(json: &JsonValue) -> Result<Value, String> {
    match json {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err("Invalid number".to_string())
            }
        }
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        JsonValue::Array(arr) => {
            let items: Result<Vec<Value>, String> = arr.iter().map(json_to_value).collect();
            Ok(Value::Array(items?))
        }
        JsonValue::Object(obj) => {
            let mut obj = obj;
            if obj.len() == 1 {
                if let Some(JsonValue::Object(escaped)) = obj.get(OBJECT_KEY) {
                    obj = escaped;
                } else if let Some(JsonValue::String(encoded)) = obj.get(BYTES_KEY) {
                    let decoded = BASE64
                        .decode(encoded)
                        .map_err(|e| format!("Invalid base64: {}", e))?;
                    return Ok(Value::Bytes(decoded));
                } else if let Some(JsonValue::String(s)) = obj.get(FLOAT_KEY) {
                    return special_float_from_str(s).map(Value::Float);
                }
            }

            let map: Result<HashMap<String, Value>, String> = obj
                .iter()
                .map(|(k, v)| json_to_value(v).map(|val| (k.clone(), val)))
                .collect();
            Ok(Value::Object(map?))
        }
    }
}

fn float_to_json(f: f64) -> JsonValue {
    if f.is_nan() {
        serde_json::json!({ FLOAT_KEY: "NaN" })
    } else if f.is_infinite() {
        if f.is_sign_positive() {
            serde_json::json!({ FLOAT_KEY: "+Inf" })
        } else {
            serde_json::json!({ FLOAT_KEY: "-Inf" })
        }
    } else if f == 0.0 && f.is_sign_negative() {
        serde_json::json!({ FLOAT_KEY: "-0.0" })
    } else {
        serde_json::Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or_else(|| serde_json::json!({ FLOAT_KEY: f.to_string() }))
    }
}

fn special_float_from_str(s: &str) -> Result<f64, String> {
    match s {
        "NaN" => Ok(f64::NAN),
        "+Inf" => Ok(f64::INFINITY),
        "-Inf" => Ok(f64::NEG_INFINITY),
        "-0.0" => Ok(-0.0_f64),
        other => other
            .parse::<f64>()
            .map_err(|e| format!("Invalid float: {}", e)),
    }
}
