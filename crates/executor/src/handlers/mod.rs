//! Command handlers organized by entity.
//!
//! | Module | Commands | Entity |
//! |--------|----------|--------|
//! | `database` | 5 | Pila, Database |
//! | `stack` | 17 | Stack |
//! | `config` | 3 | `_config` store |
//!
//! Handlers record stack activity the way a request layer does: a write
//! updates `UpdatedAt` and `ReadAt`, a read updates `ReadAt`.

pub mod config;
pub mod database;
pub mod stack;
