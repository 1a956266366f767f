//! Element envelope: the `{"element": <value>}` payload
//!
//! Used both to submit a value for push/base and to return a popped,
//! peeked or swept value. Decoding is strict: the payload must be a JSON
//! object with exactly one key, `element`.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::json::{json_to_value, value_to_json};
use crate::value::Value;

const ELEMENT_KEY: &str = "element";

/// Payload of a single stack element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// The wrapped value
    pub element: Value,
}

impl Element {
    /// Wrap a value.
    pub fn new(value: impl Into<Value>) -> Self {
        Element {
            element: value.into(),
        }
    }

    /// Unwrap into the inner value.
    pub fn into_value(self) -> Value {
        self.element
    }

    /// Decode an element envelope from a raw payload.
    ///
    /// An absent payload, an empty payload and a malformed payload fail
    /// with distinct [`DecodeError`] variants.
    pub fn decode(payload: Option<&[u8]>) -> Result<Self, DecodeError> {
        let bytes = payload.ok_or(DecodeError::MissingPayload)?;
        if bytes.is_empty() {
            return Err(DecodeError::EmptyPayload);
        }

        let json: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| DecodeError::Malformed(e.to_string()))?;

        let mut object = match json {
            serde_json::Value::Object(object) => object,
            other => {
                return Err(DecodeError::Malformed(format!(
                    "expected an object, got {}",
                    json_kind(&other)
                )))
            }
        };

        if object.len() != 1 {
            return Err(DecodeError::Malformed(format!(
                "expected a single {:?} key, got {} keys",
                ELEMENT_KEY,
                object.len()
            )));
        }

        let raw = object
            .remove(ELEMENT_KEY)
            .ok_or_else(|| DecodeError::Malformed("missing element key".to_string()))?;
        let element = json_to_value(&raw).map_err(DecodeError::Malformed)?;

        Ok(Element { element })
    }

    /// Encode as a JSON document.
    pub fn to_json(&self) -> String {
        serde_json::json!({ ELEMENT_KEY: value_to_json(&self.element) }).to_string()
    }
}

impl From<Value> for Element {
    fn from(element: Value) -> Self {
        Element { element }
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
