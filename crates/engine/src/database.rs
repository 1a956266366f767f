//! Database: an owning collection of stacks
//!
//! Stacks are keyed by their identity, `identity(database name + stack name)`.
//! The map is a `DashMap`, so `create_stack`, `add_stack` and `remove_stack`
//! may run concurrently against the same database. Insertion goes through
//! the entry API: the vacancy check and the insert happen under one shard
//! lock, so an identity is never assigned twice.

use std::sync::{Arc, Weak};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use piladb_core::{Identity, PilaError, PilaResult};
use tracing::{info, warn};

use crate::pila::Pila;
use crate::stack::Stack;
use crate::status::{DatabaseStatus, StacksKv, StacksStatus};

/// A named collection of stacks.
#[derive(Debug)]
pub struct Database {
    name: String,
    id: Identity,
    pila: RwLock<Option<Weak<Pila>>>,
    stacks: DashMap<Identity, Arc<Stack>>,
}

impl Database {
    /// Create an empty database not linked to any Pila.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Database {
            id: Identity::new(&name),
            name,
            pila: RwLock::new(None),
            stacks: DashMap::new(),
        }
    }

    /// Database name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Database identity, `identity(name)`.
    pub fn id(&self) -> Identity {
        self.id
    }

    /// Owning Pila, if any and still alive.
    pub fn pila(&self) -> Option<Arc<Pila>> {
        self.pila.read().as_ref().and_then(Weak::upgrade)
    }

    /// Whether a Pila back-reference is set.
    pub fn is_owned(&self) -> bool {
        self.pila.read().is_some()
    }

    pub(crate) fn attach(&self, pila: &Arc<Pila>) -> PilaResult<()> {
        let mut slot = self.pila.write();
        if slot.is_some() {
            return Err(PilaError::AlreadyOwned {
                entity: "database",
                name: self.name.clone(),
                owner: "pila".to_string(),
            });
        }
        *slot = Some(Arc::downgrade(pila));
        Ok(())
    }

    pub(crate) fn detach(&self) {
        *self.pila.write() = None;
    }

    /// Create a stack named `name` in this database and return its identity.
    ///
    /// Fails with `IdentityCollision` if a stack with that name exists.
    pub fn create_stack(self: &Arc<Self>, name: &str) -> PilaResult<Identity> {
        self.add_stack(Arc::new(Stack::new(name)))
    }

    /// Add an existing standalone stack to this database.
    ///
    /// Fails with `AlreadyOwned` if the stack belongs to a database, or with
    /// `IdentityCollision` if this database already holds that identity.
    /// Nothing changes on failure.
    pub fn add_stack(self: &Arc<Self>, stack: Arc<Stack>) -> PilaResult<Identity> {
        if stack.is_owned() {
            return Err(self.reject_owned(&stack));
        }

        let id = Identity::composite(&self.name, stack.name());
        match self.stacks.entry(id) {
            Entry::Occupied(_) => {
                warn!(target: "piladb::engine", database = %self.name, stack = %stack.name(), "Stack already exists");
                Err(PilaError::IdentityCollision {
                    entity: "stack",
                    name: stack.name().to_string(),
                })
            }
            Entry::Vacant(vacant) => {
                // a concurrent add_stack of the same stack elsewhere may win
                let attached = match stack.attach(self) {
                    Ok(attached) => attached,
                    Err(_) => return Err(self.reject_owned(&stack)),
                };
                debug_assert_eq!(attached, id);
                info!(target: "piladb::engine", database = %self.name, stack = %stack.name(), id = %id, "Stack added");
                vacant.insert(stack);
                Ok(id)
            }
        }
    }

    fn reject_owned(&self, stack: &Stack) -> PilaError {
        let owner = stack
            .database()
            .map(|d| d.name().to_string())
            .unwrap_or_default();
        warn!(target: "piladb::engine", database = %self.name, stack = %stack.name(), owner = %owner, "Stack already owned");
        PilaError::AlreadyOwned {
            entity: "stack",
            name: stack.name().to_string(),
            owner,
        }
    }

    /// Remove the stack at `id`.
    ///
    /// The stack loses its back-reference (its identity falls back to the
    /// bare name) and its elements are dropped. The detached stack is
    /// returned for callers still holding a handle.
    pub fn remove_stack(&self, id: &Identity) -> PilaResult<Arc<Stack>> {
        let (_, stack) = self
            .stacks
            .remove(id)
            .ok_or_else(|| PilaError::stack_not_found(id))?;
        stack.detach();
        stack.clear();
        info!(target: "piladb::engine", database = %self.name, stack = %stack.name(), id = %id, "Stack removed");
        Ok(stack)
    }

    /// Stack at `id`.
    pub fn stack(&self, id: &Identity) -> Option<Arc<Stack>> {
        self.stacks.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Stack named `name`.
    pub fn stack_by_name(&self, name: &str) -> Option<Arc<Stack>> {
        self.stack(&Identity::composite(&self.name, name))
    }

    /// Every stack, in no particular order.
    pub fn stacks(&self) -> Vec<Arc<Stack>> {
        self.stacks
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Number of stacks.
    pub fn number_of_stacks(&self) -> usize {
        self.stacks.len()
    }

    /// Summary with the sorted stack identities.
    pub fn status(&self) -> DatabaseStatus {
        let mut stacks: Vec<String> = self.stacks.iter().map(|e| e.key().to_string()).collect();
        stacks.sort();
        DatabaseStatus {
            id: self.id.to_string(),
            name: self.name.clone(),
            number_of_stacks: stacks.len(),
            stacks,
        }
    }

    /// Status of every stack, sorted by name.
    pub fn stacks_status(&self) -> StacksStatus {
        let mut status = StacksStatus {
            stacks: self.stacks().iter().map(|s| s.status()).collect(),
        };
        status.sort_by_name();
        status
    }

    /// Map of stack name to top element.
    pub fn stacks_kv(&self) -> StacksKv {
        StacksKv {
            stacks: self
                .stacks()
                .iter()
                .map(|s| (s.name().to_string(), s.peek()))
                .collect(),
        }
    }
}
