//! Command enum defining all piladb operations.
//!
//! Commands are the "instruction set" of piladb. Every operation that can be
//! performed against a Pila is represented as a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON for cross-language use
//! - **Addressed by text**: Databases and stacks are named by identity or name

use piladb_core::Value;
use serde::{Deserialize, Serialize};

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Pila | 5 | Ping and database lifecycle |
/// | Stacks | 3 | Stack creation and listings |
/// | Stack reads | 5 | Status, peek, size, empty, full |
/// | Stack writes | 9 | Push, base, pop, sweep, rotate, flush, block, unblock, delete |
/// | Config | 3 | Runtime configuration |
///
/// # Addressing
///
/// `database` accepts either the database identity or its name. `stack`
/// accepts either the stack identity or its name within `database`.
/// `element` and `value` carry the payload; `name` and `key` name what is
/// created or configured.
///
/// # Example
///
/// ```ignore
/// use piladb_executor::Command;
/// use piladb_core::Value;
///
/// let cmd = Command::Push {
///     database: "db".into(),
///     stack: "s".into(),
///     element: Value::Int(42),
/// };
/// ```
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Pila (5) ====================
    /// Liveness check.
    /// Returns: `Output::Pong`
    Ping,

    /// Summary of every database.
    /// Returns: `Output::Pila`
    PilaStatus,

    /// Create a database.
    /// Returns: `Output::Database`
    CreateDatabase { name: String },

    /// Status of a database.
    /// Returns: `Output::Database`
    DatabaseStatus { database: String },

    /// Delete a database and its stacks.
    /// Returns: `Output::Unit`
    DeleteDatabase { database: String },

    // ==================== Stacks (3) ====================
    /// Create a stack in a database.
    /// Returns: `Output::Stack`
    CreateStack { database: String, name: String },

    /// Status of every stack, sorted by name.
    /// Returns: `Output::Stacks`
    StacksStatus { database: String },

    /// Top element of every stack, keyed by stack name.
    /// Returns: `Output::StacksKv`
    StacksKv { database: String },

    // ==================== Stack reads (5) ====================
    /// Status of a stack.
    /// Returns: `Output::Stack`
    StackStatus { database: String, stack: String },

    /// Top element.
    /// Returns: `Output::Element` (`None` when empty)
    Peek { database: String, stack: String },

    /// Number of elements.
    /// Returns: `Output::Size`
    Size { database: String, stack: String },

    /// Whether the stack is empty.
    /// Returns: `Output::Bool`
    Empty { database: String, stack: String },

    /// Whether the stack reached `MAX_STACK_SIZE`.
    /// Returns: `Output::Bool`
    Full { database: String, stack: String },

    // ==================== Stack writes (9) ====================
    /// Push an element on top, under the configured capacity policy.
    /// Returns: `Output::Pushed`
    Push {
        database: String,
        stack: String,
        element: Value,
    },

    /// Insert an element at the bottom.
    /// Returns: `Output::Element`
    Base {
        database: String,
        stack: String,
        element: Value,
    },

    /// Remove the top element.
    /// Returns: `Output::Element`
    Pop { database: String, stack: String },

    /// Remove the bottom element.
    /// Returns: `Output::Element`
    Sweep { database: String, stack: String },

    /// Move the bottom element to the top.
    /// Returns: `Output::Element` holding the new top
    Rotate { database: String, stack: String },

    /// Drop every element.
    /// Returns: `Output::Stack`
    Flush { database: String, stack: String },

    /// Forbid mutations on a stack.
    /// Returns: `Output::Stack`
    Block { database: String, stack: String },

    /// Allow mutations on a stack again.
    /// Returns: `Output::Stack`
    Unblock { database: String, stack: String },

    /// Flush and remove a stack.
    /// Returns: `Output::Unit`
    DeleteStack { database: String, stack: String },

    // ==================== Config (3) ====================
    /// Every configuration key with its current value.
    /// Returns: `Output::StacksKv`
    ConfigList,

    /// Current value of a configuration key.
    /// Returns: `Output::Element`
    ConfigGet { key: String },

    /// Set a configuration key.
    /// Returns: `Output::Element`
    ConfigSet { key: String, value: Value },
}

impl Command {
    /// Name of the command, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ping => "Ping",
            Command::PilaStatus => "PilaStatus",
            Command::CreateDatabase { .. } => "CreateDatabase",
            Command::DatabaseStatus { .. } => "DatabaseStatus",
            Command::DeleteDatabase { .. } => "DeleteDatabase",
            Command::CreateStack { .. } => "CreateStack",
            Command::StacksStatus { .. } => "StacksStatus",
            Command::StacksKv { .. } => "StacksKv",
            Command::StackStatus { .. } => "StackStatus",
            Command::Peek { .. } => "Peek",
            Command::Size { .. } => "Size",
            Command::Empty { .. } => "Empty",
            Command::Full { .. } => "Full",
            Command::Push { .. } => "Push",
            Command::Base { .. } => "Base",
            Command::Pop { .. } => "Pop",
            Command::Sweep { .. } => "Sweep",
            Command::Rotate { .. } => "Rotate",
            Command::Flush { .. } => "Flush",
            Command::Block { .. } => "Block",
            Command::Unblock { .. } => "Unblock",
            Command::DeleteStack { .. } => "DeleteStack",
            Command::ConfigList => "ConfigList",
            Command::ConfigGet { .. } => "ConfigGet",
            Command::ConfigSet { .. } => "ConfigSet",
        }
    }

    /// Whether the command can change state.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::CreateDatabase { .. }
                | Command::DeleteDatabase { .. }
                | Command::CreateStack { .. }
                | Command::Push { .. }
                | Command::Base { .. }
                | Command::Pop { .. }
                | Command::Sweep { .. }
                | Command::Rotate { .. }
                | Command::Flush { .. }
                | Command::Block { .. }
                | Command::Unblock { .. }
                | Command::DeleteStack { .. }
                | Command::ConfigSet { .. }
        )
    }
}
