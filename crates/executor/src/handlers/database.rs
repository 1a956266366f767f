//! Pila and database command handlers.

use std::sync::Arc;

use piladb_engine::Pila;
use tracing::info;

use crate::bridge::{resolve_database, validate_name};
use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle PilaStatus command.
pub fn pila_status(pila: &Arc<Pila>) -> Result<Output> {
    Ok(Output::Pila(pila.status()))
}

/// Handle CreateDatabase command.
pub fn create_database(pila: &Arc<Pila>, name: String) -> Result<Output> {
    validate_name("database", &name)?;
    let id = convert_result(pila.create_database(&name))?;
    info!(target: "piladb::executor", database = %name, id = %id, "Database created");
    let db = resolve_database(pila, &id.to_string())?;
    Ok(Output::Database(db.status()))
}

/// Handle DatabaseStatus command.
pub fn database_status(pila: &Arc<Pila>, database: String) -> Result<Output> {
    let db = resolve_database(pila, &database)?;
    Ok(Output::Database(db.status()))
}

/// Handle DeleteDatabase command.
pub fn delete_database(pila: &Arc<Pila>, database: String) -> Result<Output> {
    let db = resolve_database(pila, &database)?;
    convert_result(pila.remove_database(&db.id()))?;
    info!(target: "piladb::executor", database = %db.name(), "Database deleted");
    Ok(Output::Unit)
}
