//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Classified**: [`Error::kind`] groups them the way a transport reports them

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Kind | Variants | Description |
/// |------|----------|-------------|
/// | Gone | `DatabaseNotFound`, `StackNotFound`, `ConfigKeyNotSet` | Addressed resource doesn't exist |
/// | NoContent | `StackEmpty` | Nothing to remove |
/// | Locked | `StackBlocked` | Stack refuses mutations |
/// | NotAcceptable | `CapacityExceeded` | Push rejected by the size policy |
/// | Conflict | `AlreadyExists`, `AlreadyOwned` | Name or ownership clash |
/// | BadRequest | `InvalidElement`, `InvalidInput` | Malformed input |
///
/// # Example
///
/// ```ignore
/// use piladb_executor::{Command, Error, Executor};
///
/// match executor.execute(cmd) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::StackEmpty) => { /* nothing to pop */ }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
///
/// Fields are named after the resource they describe and are not documented
/// one by one.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Gone ====================
    /// No database with that identity or name
    #[error("database {database} is Gone")]
    DatabaseNotFound { database: String },

    /// No stack with that identity or name in the database
    #[error("stack {stack} is Gone")]
    StackNotFound { stack: String },

    /// Configuration key was never set
    #[error("{key} is not set")]
    ConfigKeyNotSet { key: String },

    // ==================== Stack State ====================
    /// Stack has no element to remove
    #[error("Stack is empty")]
    StackEmpty,

    /// Stack is blocked
    #[error("Stack is blocked")]
    StackBlocked,

    /// Push rejected, stack reached MAX_STACK_SIZE
    #[error("MAX_STACK_SIZE value reached: {max}")]
    CapacityExceeded { max: usize },

    // ==================== Conflict ====================
    /// Name already taken in the container
    #[error("{entity} {name} already exists")]
    AlreadyExists { entity: String, name: String },

    /// Entity already belongs to another container
    #[error("{entity} {name} is already owned by {owner}")]
    AlreadyOwned {
        entity: String,
        name: String,
        owner: String,
    },

    // ==================== Bad Request ====================
    /// Element payload could not be decoded
    #[error("error on decoding element: {reason}")]
    InvalidElement { reason: String },

    /// Invalid input
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

/// Classification of an [`Error`] for transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Resource is gone
    Gone,
    /// Nothing to return
    NoContent,
    /// Resource is locked
    Locked,
    /// Request refused by policy
    NotAcceptable,
    /// Name or ownership clash
    Conflict,
    /// Malformed request
    BadRequest,
}

impl ErrorKind {
    /// HTTP status code piladb answers with for this kind.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::NoContent => 204,
            ErrorKind::BadRequest => 400,
            ErrorKind::NotAcceptable => 406,
            ErrorKind::Conflict => 409,
            ErrorKind::Gone => 410,
            ErrorKind::Locked => 423,
        }
    }
}

impl Error {
    /// Kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DatabaseNotFound { .. }
            | Error::StackNotFound { .. }
            | Error::ConfigKeyNotSet { .. } => ErrorKind::Gone,
            Error::StackEmpty => ErrorKind::NoContent,
            Error::StackBlocked => ErrorKind::Locked,
            Error::CapacityExceeded { .. } => ErrorKind::NotAcceptable,
            Error::AlreadyExists { .. } | Error::AlreadyOwned { .. } => ErrorKind::Conflict,
            Error::InvalidElement { .. } | Error::InvalidInput { .. } => ErrorKind::BadRequest,
        }
    }
}
