//! Pila: the root registry of databases
//!
//! Same ownership pattern as [`Database`] one level up: the Pila owns its
//! databases through `Arc`, each database points back through a `Weak`.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use piladb_core::{Identity, PilaError, PilaResult};
use tracing::{info, warn};

use crate::database::Database;
use crate::status::PilaStatus;

/// Registry of every database of a running piladb instance.
#[derive(Debug, Default)]
pub struct Pila {
    databases: DashMap<Identity, Arc<Database>>,
}

impl Pila {
    /// Create an empty registry.
    pub fn new() -> Arc<Self> {
        Arc::new(Pila::default())
    }

    /// Create a database named `name` and return its identity.
    pub fn create_database(self: &Arc<Self>, name: &str) -> PilaResult<Identity> {
        let db = Arc::new(Database::new(name));
        let id = db.id();
        self.add_database(db)?;
        Ok(id)
    }

    /// Add an existing database.
    ///
    /// Fails with `AlreadyOwned` if it belongs to a Pila, or with
    /// `IdentityCollision` if a database with the same name is registered.
    pub fn add_database(self: &Arc<Self>, db: Arc<Database>) -> PilaResult<()> {
        if db.is_owned() {
            warn!(target: "piladb::engine", database = %db.name(), "Database already owned");
            return Err(PilaError::AlreadyOwned {
                entity: "database",
                name: db.name().to_string(),
                owner: "pila".to_string(),
            });
        }

        match self.databases.entry(db.id()) {
            Entry::Occupied(_) => {
                warn!(target: "piladb::engine", database = %db.name(), "Database already exists");
                Err(PilaError::IdentityCollision {
                    entity: "database",
                    name: db.name().to_string(),
                })
            }
            Entry::Vacant(vacant) => {
                db.attach(self)?;
                info!(target: "piladb::engine", database = %db.name(), id = %db.id(), "Database added");
                vacant.insert(db);
                Ok(())
            }
        }
    }

    /// Remove the database at `id` and unlink it from this Pila.
    pub fn remove_database(&self, id: &Identity) -> PilaResult<Arc<Database>> {
        let (_, db) = self
            .databases
            .remove(id)
            .ok_or_else(|| PilaError::database_not_found(id))?;
        db.detach();
        info!(target: "piladb::engine", database = %db.name(), id = %id, "Database removed");
        Ok(db)
    }

    /// Database at `id`.
    pub fn database(&self, id: &Identity) -> Option<Arc<Database>> {
        self.databases.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Every database, sorted by name.
    pub fn databases(&self) -> Vec<Arc<Database>> {
        let mut databases: Vec<_> = self
            .databases
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        databases.sort_by(|a, b| a.name().cmp(b.name()));
        databases
    }

    /// Number of databases.
    pub fn number_of_databases(&self) -> usize {
        self.databases.len()
    }

    /// Summary of every database, sorted by name.
    pub fn status(&self) -> PilaStatus {
        let databases: Vec<_> = self.databases().iter().map(|db| db.status()).collect();
        PilaStatus {
            number_of_databases: databases.len(),
            databases,
        }
    }
}
