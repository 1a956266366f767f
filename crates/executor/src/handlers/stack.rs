//! Stack command handlers.
//!
//! Emptiness is checked before the blocked flag, so popping an empty
//! blocked stack reports `StackEmpty`.

use std::sync::Arc;

use piladb_core::{timestamp, Value};
use piladb_engine::{Config, Pila, Stack};
use tracing::{debug, info};

use crate::bridge::{resolve, resolve_database, resolve_stack, validate_name};
use crate::convert::convert_result;
use crate::{Error, Output, Result};

fn ensure_not_empty(stack: &Stack) -> Result<()> {
    if stack.empty() {
        return Err(Error::StackEmpty);
    }
    Ok(())
}

fn ensure_unblocked(stack: &Stack) -> Result<()> {
    if stack.blocked() {
        return Err(Error::StackBlocked);
    }
    Ok(())
}

/// Resolve a stack and record a read on it.
fn read(pila: &Pila, database: &str, stack: &str) -> Result<Arc<Stack>> {
    let stack = resolve(pila, database, stack)?;
    stack.read(timestamp::now());
    Ok(stack)
}

// =============================================================================
// Collection
// =============================================================================

/// Handle CreateStack command.
pub fn create_stack(pila: &Arc<Pila>, database: String, name: String) -> Result<Output> {
    validate_name("stack", &name)?;
    let db = resolve_database(pila, &database)?;
    let id = convert_result(db.create_stack(&name))?;
    let stack = db.stack(&id).ok_or_else(|| Error::StackNotFound {
        stack: id.to_string(),
    })?;
    stack.update(timestamp::now());
    info!(target: "piladb::executor", database = %db.name(), stack = %name, "Stack created");
    Ok(Output::Stack(stack.status()))
}

/// Handle StacksStatus command.
pub fn stacks_status(pila: &Arc<Pila>, database: String) -> Result<Output> {
    let db = resolve_database(pila, &database)?;
    Ok(Output::Stacks(db.stacks_status()))
}

/// Handle StacksKv command.
pub fn stacks_kv(pila: &Arc<Pila>, database: String) -> Result<Output> {
    let db = resolve_database(pila, &database)?;
    Ok(Output::StacksKv(db.stacks_kv()))
}

/// Handle DeleteStack command.
pub fn delete_stack(pila: &Arc<Pila>, database: String, stack: String) -> Result<Output> {
    let db = resolve_database(pila, &database)?;
    let stack = resolve_stack(&db, &stack)?;
    ensure_unblocked(&stack)?;
    convert_result(db.remove_stack(&stack.id()))?;
    info!(target: "piladb::executor", database = %db.name(), stack = %stack.name(), "Stack deleted");
    Ok(Output::Unit)
}

// =============================================================================
// Reads
// =============================================================================

/// Handle StackStatus command.
pub fn stack_status(pila: &Arc<Pila>, database: String, stack: String) -> Result<Output> {
    let stack = read(pila, &database, &stack)?;
    Ok(Output::Stack(stack.status()))
}

/// Handle Peek command.
pub fn peek(pila: &Arc<Pila>, database: String, stack: String) -> Result<Output> {
    let stack = read(pila, &database, &stack)?;
    Ok(Output::Element(stack.peek()))
}

/// Handle Size command.
pub fn size(pila: &Arc<Pila>, database: String, stack: String) -> Result<Output> {
    let stack = read(pila, &database, &stack)?;
    Ok(Output::Size(stack.size()))
}

/// Handle Empty command.
pub fn empty(pila: &Arc<Pila>, database: String, stack: String) -> Result<Output> {
    let stack = read(pila, &database, &stack)?;
    Ok(Output::Bool(stack.empty()))
}

/// Handle Full command.
pub fn full(pila: &Arc<Pila>, config: &Config, database: String, stack: String) -> Result<Output> {
    let stack = read(pila, &database, &stack)?;
    Ok(Output::Bool(stack.is_full(&config.eviction_policy())))
}

// =============================================================================
// Writes
// =============================================================================

/// Handle Push command.
///
/// `MAX_STACK_SIZE` and `PUSH_WHEN_FULL` are read once per push; the
/// resulting policy is applied under the stack's data lock.
pub fn push(
    pila: &Arc<Pila>,
    config: &Config,
    database: String,
    stack: String,
    element: Value,
) -> Result<Output> {
    let stack = resolve(pila, &database, &stack)?;
    let policy = config.eviction_policy();
    let evicted = convert_result(stack.push_with_policy(element.clone(), &policy))?;
    stack.update(timestamp::now());
    if !evicted.is_empty() {
        debug!(target: "piladb::executor", stack = %stack.name(), count = evicted.len(), "Pushed with eviction");
    }
    Ok(Output::Pushed { element, evicted })
}

/// Handle Base command.
///
/// A full stack rejects the insertion even when `PUSH_WHEN_FULL` is set.
pub fn base(
    pila: &Arc<Pila>,
    config: &Config,
    database: String,
    stack: String,
    element: Value,
) -> Result<Output> {
    let stack = resolve(pila, &database, &stack)?;
    let policy = config.eviction_policy();
    convert_result(stack.base_with_policy(element.clone(), &policy))?;
    stack.update(timestamp::now());
    Ok(Output::Element(Some(element)))
}

/// Handle Pop command.
pub fn pop(pila: &Arc<Pila>, database: String, stack: String) -> Result<Output> {
    let stack = resolve(pila, &database, &stack)?;
    ensure_not_empty(&stack)?;
    let element = convert_result(stack.pop())?;
    stack.update(timestamp::now());
    Ok(Output::Element(Some(element)))
}

/// Handle Sweep command.
pub fn sweep(pila: &Arc<Pila>, database: String, stack: String) -> Result<Output> {
    let stack = resolve(pila, &database, &stack)?;
    ensure_not_empty(&stack)?;
    let element = convert_result(stack.sweep())?;
    stack.update(timestamp::now());
    Ok(Output::Element(Some(element)))
}

/// Handle Rotate command.
pub fn rotate(pila: &Arc<Pila>, database: String, stack: String) -> Result<Output> {
    let stack = resolve(pila, &database, &stack)?;
    ensure_not_empty(&stack)?;
    convert_result(stack.rotate())?;
    stack.update(timestamp::now());
    Ok(Output::Element(stack.peek()))
}

/// Handle Flush command.
pub fn flush(pila: &Arc<Pila>, database: String, stack: String) -> Result<Output> {
    let stack = resolve(pila, &database, &stack)?;
    convert_result(stack.flush())?;
    stack.update(timestamp::now());
    Ok(Output::Stack(stack.status()))
}

/// Handle Block command.
pub fn block(pila: &Arc<Pila>, database: String, stack: String) -> Result<Output> {
    let stack = resolve(pila, &database, &stack)?;
    stack.block();
    stack.update(timestamp::now());
    Ok(Output::Stack(stack.status()))
}

/// Handle Unblock command.
pub fn unblock(pila: &Arc<Pila>, database: String, stack: String) -> Result<Output> {
    let stack = resolve(pila, &database, &stack)?;
    stack.unblock();
    stack.update(timestamp::now());
    Ok(Output::Stack(stack.status()))
}
