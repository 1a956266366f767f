//! Bridge between executor addressing and engine entities.
//!
//! Commands address databases and stacks by text. This module turns that
//! text into engine handles:
//!
//! - Database: the text is parsed as an identity, otherwise hashed as a name
//! - Stack: the text is parsed as an identity, otherwise hashed together with
//!   the database name

use std::sync::Arc;

use piladb_core::Identity;
use piladb_engine::{Database, Pila, Stack};

use crate::{Error, Result};

/// Resolve a database by identity or name.
pub(crate) fn resolve_database(pila: &Pila, database: &str) -> Result<Arc<Database>> {
    let id = Identity::parse(database).unwrap_or_else(|| Identity::new(database));
    pila.database(&id).ok_or_else(|| Error::DatabaseNotFound {
        database: database.to_string(),
    })
}

/// Resolve a stack of `db` by identity or name.
pub(crate) fn resolve_stack(db: &Database, stack: &str) -> Result<Arc<Stack>> {
    let id = Identity::parse(stack).unwrap_or_else(|| Identity::composite(db.name(), stack));
    db.stack(&id).ok_or_else(|| Error::StackNotFound {
        stack: stack.to_string(),
    })
}

/// Resolve a database, then one of its stacks.
pub(crate) fn resolve(pila: &Pila, database: &str, stack: &str) -> Result<Arc<Stack>> {
    let db = resolve_database(pila, database)?;
    resolve_stack(&db, stack)
}

/// Reject empty names for new entities.
pub(crate) fn validate_name(entity: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidInput {
            reason: format!("{} name is empty", entity),
        });
    }
    Ok(())
}
