//! Stack entity: an addressable, blockable wrapper around a [`LinkedStack`]
//!
//! A `Stack` carries four independently guarded pieces of state:
//!
//! | Guard | Protects |
//! |-------|----------|
//! | data lock (inside `LinkedStack`) | elements, size, head/tail links |
//! | ownership lock | Identity + Database back-reference |
//! | blocked lock | Blocked flag |
//! | dates lock | CreatedAt / UpdatedAt / ReadAt |
//!
//! No method holds two of them at once. Mutating operations read the
//! Blocked flag, release its lock, then take the data lock.

use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use piladb_core::timestamp::{self, Timestamp};
use piladb_core::{EvictionPolicy, Identity, PilaError, PilaResult, Value};
use piladb_storage::{LinkedStack, PushOutcome};
use tracing::{debug, warn};

use crate::database::Database;
use crate::status::StackStatus;

#[derive(Debug)]
struct Ownership {
    id: Identity,
    database: Option<Weak<Database>>,
}

#[derive(Debug, Clone, Copy)]
struct Dates {
    created_at: Timestamp,
    updated_at: Timestamp,
    read_at: Timestamp,
}

/// A named stack of [`Value`]s.
#[derive(Debug)]
pub struct Stack {
    name: String,
    ownership: RwLock<Ownership>,
    blocked: RwLock<bool>,
    dates: Mutex<Dates>,
    data: LinkedStack<Value>,
}

impl Stack {
    /// Create a standalone stack created now.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_created_at(name, timestamp::now())
    }

    /// Create a standalone stack with an explicit creation date.
    ///
    /// UpdatedAt and ReadAt start at the creation date.
    pub fn with_created_at(name: impl Into<String>, created_at: Timestamp) -> Self {
        let name = name.into();
        Stack {
            ownership: RwLock::new(Ownership {
                id: Identity::new(&name),
                database: None,
            }),
            name,
            blocked: RwLock::new(false),
            dates: Mutex::new(Dates {
                created_at,
                updated_at: created_at,
                read_at: created_at,
            }),
            data: LinkedStack::new(),
        }
    }

    /// Stack name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current identity.
    pub fn id(&self) -> Identity {
        self.ownership.read().id
    }

    /// Owning database, if any and still alive.
    pub fn database(&self) -> Option<Arc<Database>> {
        self.ownership
            .read()
            .database
            .as_ref()
            .and_then(Weak::upgrade)
    }

    /// Whether a database back-reference is set.
    pub fn is_owned(&self) -> bool {
        self.ownership.read().database.is_some()
    }

    /// Link the stack to `db` and recompute its identity from the
    /// database name.
    pub fn set_database(&self, db: &Arc<Database>) {
        let mut ownership = self.ownership.write();
        ownership.id = Identity::composite(db.name(), &self.name);
        ownership.database = Some(Arc::downgrade(db));
    }

    /// Link to `db` only if currently unowned.
    pub(crate) fn attach(&self, db: &Arc<Database>) -> PilaResult<Identity> {
        let mut ownership = self.ownership.write();
        if let Some(owner) = &ownership.database {
            let owner = owner
                .upgrade()
                .map(|d| d.name().to_string())
                .unwrap_or_default();
            return Err(PilaError::AlreadyOwned {
                entity: "stack",
                name: self.name.clone(),
                owner,
            });
        }
        ownership.id = Identity::composite(db.name(), &self.name);
        ownership.database = Some(Arc::downgrade(db));
        Ok(ownership.id)
    }

    /// Clear the back-reference; identity falls back to the bare name.
    pub(crate) fn detach(&self) {
        let mut ownership = self.ownership.write();
        ownership.id = Identity::new(&self.name);
        ownership.database = None;
    }

    /// Drop every element regardless of the blocked flag.
    pub(crate) fn clear(&self) {
        self.data.flush();
    }

    fn ensure_unblocked(&self, op: &'static str) -> PilaResult<()> {
        if self.blocked() {
            warn!(target: "piladb::engine", stack = %self.name, op, "Rejected operation on blocked stack");
            return Err(PilaError::StackBlocked);
        }
        Ok(())
    }

    /// Push an element on top.
    pub fn push(&self, element: Value) -> PilaResult<()> {
        self.ensure_unblocked("push")?;
        self.data.push(element);
        debug!(target: "piladb::engine", stack = %self.name, "push");
        Ok(())
    }

    /// Push under a capacity policy.
    ///
    /// Returns the bottom elements evicted to make room, oldest first.
    pub fn push_with_policy(
        &self,
        element: Value,
        policy: &EvictionPolicy,
    ) -> PilaResult<Vec<Value>> {
        self.ensure_unblocked("push")?;
        match self.data.push_with_policy(element, policy) {
            Ok(PushOutcome::Pushed) => {
                debug!(target: "piladb::engine", stack = %self.name, "push");
                Ok(Vec::new())
            }
            Ok(PushOutcome::Evicted(evicted)) => {
                warn!(target: "piladb::engine", stack = %self.name, count = evicted.len(), "Stack full, evicted bottom elements");
                Ok(evicted)
            }
            Err(e) => {
                warn!(target: "piladb::engine", stack = %self.name, error = %e, "Push rejected");
                Err(e)
            }
        }
    }

    /// Remove and return the top element.
    pub fn pop(&self) -> PilaResult<Value> {
        self.ensure_unblocked("pop")?;
        let element = self.data.pop().ok_or(PilaError::StackEmpty)?;
        debug!(target: "piladb::engine", stack = %self.name, "pop");
        Ok(element)
    }

    /// Insert an element at the bottom.
    pub fn base(&self, element: Value) -> PilaResult<()> {
        self.ensure_unblocked("base")?;
        self.data.base(element);
        debug!(target: "piladb::engine", stack = %self.name, "base");
        Ok(())
    }

    /// Insert an element at the bottom under a capacity policy.
    ///
    /// A full stack rejects the insertion with `CapacityExceeded`.
    pub fn base_with_policy(&self, element: Value, policy: &EvictionPolicy) -> PilaResult<()> {
        self.ensure_unblocked("base")?;
        if let Err(e) = self.data.base_with_policy(element, policy) {
            warn!(target: "piladb::engine", stack = %self.name, error = %e, "Base rejected");
            return Err(e);
        }
        debug!(target: "piladb::engine", stack = %self.name, "base");
        Ok(())
    }

    /// Remove and return the bottom element.
    pub fn sweep(&self) -> PilaResult<Value> {
        self.ensure_unblocked("sweep")?;
        let element = self.data.sweep().ok_or(PilaError::StackEmpty)?;
        debug!(target: "piladb::engine", stack = %self.name, "sweep");
        Ok(element)
    }

    /// Atomically evict the bottom element and push `element` on top.
    pub fn sweep_push(&self, element: Value) -> PilaResult<Value> {
        self.ensure_unblocked("sweep_push")?;
        let evicted = self.data.sweep_push(element).ok_or(PilaError::StackEmpty)?;
        debug!(target: "piladb::engine", stack = %self.name, "sweep_push");
        Ok(evicted)
    }

    /// Move the bottom element to the top.
    pub fn rotate(&self) -> PilaResult<()> {
        self.ensure_unblocked("rotate")?;
        if !self.data.rotate() {
            return Err(PilaError::StackEmpty);
        }
        debug!(target: "piladb::engine", stack = %self.name, "rotate");
        Ok(())
    }

    /// Drop every element.
    pub fn flush(&self) -> PilaResult<()> {
        self.ensure_unblocked("flush")?;
        self.data.flush();
        debug!(target: "piladb::engine", stack = %self.name, "flush");
        Ok(())
    }

    /// Top element, if any.
    pub fn peek(&self) -> Option<Value> {
        self.data.peek()
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.data.size()
    }

    /// Whether the stack has no element.
    pub fn empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the stack has reached the policy's capacity.
    pub fn is_full(&self, policy: &EvictionPolicy) -> bool {
        policy.is_full(self.size())
    }

    /// Every element, top first, read under one lock acquisition.
    pub fn elements(&self) -> Vec<Value> {
        self.data.to_vec()
    }

    /// Validate the underlying link structure.
    pub fn check_invariants(&self) -> Result<(), String> {
        self.data.check_invariants()
    }

    /// Forbid mutations.
    pub fn block(&self) {
        *self.blocked.write() = true;
        debug!(target: "piladb::engine", stack = %self.name, "block");
    }

    /// Allow mutations again.
    pub fn unblock(&self) {
        *self.blocked.write() = false;
        debug!(target: "piladb::engine", stack = %self.name, "unblock");
    }

    /// Whether mutations are forbidden.
    pub fn blocked(&self) -> bool {
        *self.blocked.read()
    }

    /// Record a write at `t` (sets UpdatedAt and ReadAt).
    pub fn update(&self, t: Timestamp) {
        let mut dates = self.dates.lock();
        dates.updated_at = t;
        dates.read_at = t;
    }

    /// Record a read at `t`.
    pub fn read(&self, t: Timestamp) {
        self.dates.lock().read_at = t;
    }

    /// Creation date.
    pub fn created_at(&self) -> Timestamp {
        self.dates.lock().created_at
    }

    /// Last recorded write.
    pub fn updated_at(&self) -> Timestamp {
        self.dates.lock().updated_at
    }

    /// Last recorded read.
    pub fn read_at(&self) -> Timestamp {
        self.dates.lock().read_at
    }

    /// Snapshot of the stack. Does not touch the dates.
    pub fn status(&self) -> StackStatus {
        let dates = *self.dates.lock();
        StackStatus {
            id: self.id().to_string(),
            name: self.name.clone(),
            peek: self.peek(),
            size: self.size(),
            blocked: self.blocked(),
            created_at: dates.created_at,
            updated_at: dates.updated_at,
            read_at: dates.read_at,
        }
    }
}
