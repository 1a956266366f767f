//! piladb - In-memory multi-tenant stack store
//!
//! A Pila holds databases, a database holds named stacks, and a stack holds
//! arbitrary JSON-like elements with push, pop, base, sweep and rotate.
//!
//! # Quick Start
//!
//! ```ignore
//! use piladb::{Command, Executor, Output, Value};
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
//! # Architecture
//!
//! All request-style operations go through the [`Executor`]. The entity
//! model (Pila, Database, Stack) and configuration live in [`engine`]; the
//! linked stack itself lives in [`storage`].

// Re-export the public API from piladb-executor
pub use piladb_executor::*;

pub use piladb_core::{
    DecodeError, Element, EvictionPolicy, Identity, PilaError, PilaResult, PushDecision,
    StackCapacity, Timestamp,
};

/// Entity model and configuration.
pub use piladb_engine as engine;
/// Frame arena and `LinkedStack`.
pub use piladb_storage as storage;
