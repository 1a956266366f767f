//! # piladb Executor
//!
//! Transport-agnostic command layer over the piladb engine.
//!
//! It provides:
//! - [`Command`]/[`Output`] - Serializable request and response types
//! - [`Executor`] - Dispatches commands against a Pila and its `_config` store
//! - [`Error`]/[`ErrorKind`] - Failures classified for transports
//!
//! ## Quick Start
//!
//! ```text
//! use piladb_executor::{Command, Executor, Output, Value};
//!
//! let executor = Executor::default();
//! executor.execute(Command::CreateDatabase { name: "db".into() })?;
//! executor.execute(Command::CreateStack { database: "db".into(), name: "s".into() })?;
//! executor.execute(Command::Push {
//!     database: "db".into(),
//!     stack: "s".into(),
//!     element: Value::from("foo"),
//! })?;
//! ```
//!
//! ## Addressing
//!
//! Databases and stacks are named by their identity or by their name. A
//! stack name is looked up within the named database.

#![warn(missing_docs)]

pub(crate) mod bridge;
mod command;
mod convert;
mod error;
mod executor;
mod output;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::Command;
pub use convert::decode_element;
pub use error::{Error, ErrorKind};
pub use executor::Executor;
pub use output::Output;

pub use piladb_core::Value;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
