//! Stack engine for piladb
//!
//! This crate builds the entity model on top of the storage layer:
//! - Stack: named, blockable wrapper around a `LinkedStack` with its own
//!   identity, back-reference and activity dates
//! - Database: owning collection of stacks keyed by identity
//! - Pila: root registry of databases
//! - status: snapshot types served to clients
//! - config: file/env settings and the runtime `_config` store
//!
//! Ownership flows downward (Pila → Database → Stack) through `Arc`;
//! back-references are `Weak`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod database;
pub mod pila;
pub mod stack;
pub mod status;

pub use config::{Config, PilaConfig};
pub use database::Database;
pub use pila::Pila;
pub use stack::Stack;
pub use status::{DatabaseStatus, PilaStatus, StackStatus, StacksKv, StacksStatus};
