//! Error types for piladb
//!
//! Every failure in the core is per-call and leaves all entities in their
//! pre-call state. We use `thiserror` for `Display` and `Error` impls.

use thiserror::Error;

/// Result type alias for piladb operations
pub type PilaResult<T> = std::result::Result<T, PilaError>;

/// Errors raised by stacks, databases and the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PilaError {
    /// Pop, sweep, sweep-push or rotate on a stack with no elements
    #[error("Stack is empty")]
    StackEmpty,

    /// Mutating operation on a blocked stack
    #[error("Stack is blocked")]
    StackBlocked,

    /// The entity already belongs to another container
    #[error("{entity} {name} is already owned by {owner}")]
    AlreadyOwned {
        /// Kind of entity being added ("stack", "database")
        entity: &'static str,
        /// Name of the entity being added
        name: String,
        /// Name of the current owner
        owner: String,
    },

    /// An entity with the same identity already exists in the container
    #[error("{entity} {name} already exists")]
    IdentityCollision {
        /// Kind of entity being added
        entity: &'static str,
        /// Name of the entity being added
        name: String,
    },

    /// No entity with the requested identity
    #[error("{entity} {id} not found")]
    NotFound {
        /// Kind of entity looked up
        entity: &'static str,
        /// Identity or name looked up
        id: String,
    },

    /// Push rejected because the stack reached its configured maximum size
    #[error("MAX_STACK_SIZE value reached: {max}")]
    CapacityExceeded {
        /// Configured maximum size
        max: usize,
    },

    /// Element envelope could not be decoded
    #[error("error on decoding element: {0}")]
    Decode(#[from] DecodeError),

    /// Configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl PilaError {
    /// Build a `NotFound` error for a stack.
    pub fn stack_not_found(id: impl ToString) -> Self {
        PilaError::NotFound {
            entity: "stack",
            id: id.to_string(),
        }
    }

    /// Build a `NotFound` error for a database.
    pub fn database_not_found(id: impl ToString) -> Self {
        PilaError::NotFound {
            entity: "database",
            id: id.to_string(),
        }
    }

    /// Whether this error means "nothing to remove".
    pub fn is_empty(&self) -> bool {
        matches!(self, PilaError::StackEmpty)
    }

    /// Whether this error means the stack is locked against mutation.
    pub fn is_blocked(&self) -> bool {
        matches!(self, PilaError::StackBlocked)
    }
}

/// Failure decoding an `{"element": ...}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No payload at all
    #[error("payload is nil")]
    MissingPayload,

    /// Zero-length payload
    #[error("payload is empty")]
    EmptyPayload,

    /// Payload is not a single-key `{"element": ...}` object
    #[error("payload is malformed: {0}")]
    Malformed(String),
}
