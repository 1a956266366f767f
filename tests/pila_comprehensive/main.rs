//! Pila Comprehensive Test Suite
//!
//! End-to-end coverage of the stack store through the public `piladb`
//! crate: entity scenarios, structural properties and request flows.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test pila_comprehensive
//!
//! # Run the property tests only
//! cargo test --test pila_comprehensive properties::
//! ```

use std::sync::Arc;

use piladb::engine::{Database, Pila, Stack};
use piladb::{Identity, Value};

pub mod commands;
pub mod properties;
pub mod scenarios;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// A Pila with database `db` holding an empty stack `s`.
pub fn pila_with_stack() -> (Arc<Pila>, Arc<Database>, Arc<Stack>) {
    let pila = Pila::new();
    let db_id = pila.create_database("db").expect("create database");
    let db = pila.database(&db_id).expect("database registered");
    let stack_id = db.create_stack("s").expect("create stack");
    let stack = db.stack(&stack_id).expect("stack registered");
    (pila, db, stack)
}

/// Identity text of `name`.
pub fn id_of(name: &str) -> String {
    Identity::new(name).to_string()
}

/// Values of mixed types.
pub fn sample_values() -> Vec<Value> {
    vec![
        Value::from("foo"),
        Value::Int(8),
        Value::Float(5.87),
        Value::Bool(true),
        Value::Null,
        Value::Bytes(vec![0, 1, 2]),
        Value::Array(vec![Value::Int(1), Value::from("two")]),
    ]
}
