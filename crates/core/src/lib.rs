//! Core types for piladb
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: closed sum type for opaque stack elements
//! - json: canonical JSON mapping for values (bytes, special floats)
//! - Element: the `{"element": ...}` envelope
//! - Identity: deterministic UUID v5 addresses derived from names
//! - policy: capacity / eviction decision for pushes
//! - timestamp: activity dates and their wire format
//! - Error: error taxonomy shared by every layer

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod error;
pub mod identity;
pub mod json;
pub mod policy;
pub mod timestamp;
pub mod value;

pub use element::Element;
pub use error::{DecodeError, PilaError, PilaResult};
pub use identity::{Identity, PILA_NAMESPACE};
pub use policy::{EvictionPolicy, PushDecision, StackCapacity, UNBOUNDED_SENTINEL};
pub use timestamp::Timestamp;
pub use value::Value;
