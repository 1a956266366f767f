//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. This mapping is deterministic:
//! the same command always produces the same output variant (though the values
//! may differ based on state).

use piladb_core::Value;
use piladb_engine::{DatabaseStatus, PilaStatus, StackStatus, StacksKv, StacksStatus};
use serde::{Deserialize, Serialize};

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
///
/// # Example
///
/// ```text
/// use piladb_executor::{Command, Output, Executor};
///
/// let result = executor.execute(Command::Peek { database, stack })?;
///
/// match result {
///     Output::Element(Some(v)) => println!("Top: {:?}", v),
///     Output::Element(None) => println!("Empty"),
///     _ => unreachable!("Peek always returns Element"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    // ==================== Primitive Results ====================
    /// Answer to `Ping`
    Pong,

    /// No return value (delete)
    Unit,

    /// Single element, `None` for an empty stack
    Element(Option<Value>),

    /// Pushed element and the bottom elements evicted to make room
    Pushed {
        /// Element now on top
        element: Value,
        /// Elements removed from the bottom, oldest first
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        evicted: Vec<Value>,
    },

    /// Element count
    Size(usize),

    /// Boolean result
    Bool(bool),

    // ==================== Snapshots ====================
    /// Summary of every database
    Pila(PilaStatus),

    /// Database status
    Database(DatabaseStatus),

    /// Stack status
    Stack(StackStatus),

    /// Status of several stacks
    Stacks(StacksStatus),

    /// Stack name to top element
    StacksKv(StacksKv),
}
