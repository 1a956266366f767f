//! Content-derived identities
//!
//! Every addressable entity (Database, Stack) is identified by a UUID v5
//! computed from its name, and from its parent's name when it has one:
//!
//! - Database: `identity(database_name)`
//! - Stack inside a Database: `identity(database_name + stack_name)`
//! - Standalone Stack: `identity(stack_name)`
//!
//! The namespace is fixed forever. Changing it would change the address of
//! every entity, so treat [`PILA_NAMESPACE`] as part of the data format.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Namespace UUID for identity generation.
///
/// Derived once as `uuid_v5(NAMESPACE_OID, "bsa9phh6keet1ogh9ChoeNoK1jae8ro0")`.
pub const PILA_NAMESPACE: Uuid = Uuid::from_bytes([
    0x8c, 0xb1, 0xc4, 0xad, 0x7c, 0x69, 0x51, 0xa4,
    0xae, 0x6b, 0xb9, 0x35, 0x9d, 0xd5, 0x34, 0x86,
]);

/// Deterministic identifier of a Database or a Stack.
///
/// Rendered as a canonical lowercase hyphenated UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(Uuid);

impl Identity {
    /// Identity of a single name.
    pub fn new(name: &str) -> Self {
        Identity(Uuid::new_v5(&PILA_NAMESPACE, name.as_bytes()))
    }

    /// Identity of a child entity, formed by concatenating the parent name
    /// and the child name before hashing.
    pub fn composite(parent: &str, child: &str) -> Self {
        let mut joined = String::with_capacity(parent.len() + child.len());
        joined.push_str(parent);
        joined.push_str(child);
        Self::new(&joined)
    }

    /// Parse an identity from its canonical text form.
    ///
    /// Returns `None` for anything that is not a UUID, which lets callers
    /// fall back to treating the input as a name.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Identity)
    }

    /// Underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Identity> for String {
    fn from(id: Identity) -> Self {
        id.to_string()
    }
}
