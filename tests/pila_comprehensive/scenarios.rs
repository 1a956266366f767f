//! Entity scenarios
//!
//! Fixed walkthroughs of the stack, database and ownership rules.

use super::*;
use piladb::{EvictionPolicy, PilaError, StackCapacity};

// =============================================================================
// STACK LIFECYCLE
// =============================================================================

#[test]
fn test_created_stack_is_empty_and_unblocked() {
    let (_pila, db, stack) = pila_with_stack();

    assert_eq!(stack.size(), 0);
    assert_eq!(stack.peek(), None);
    assert!(!stack.blocked());
    assert_eq!(stack.id().to_string(), id_of("dbs"));
    assert!(stack.database().is_some_and(|owner| Arc::ptr_eq(&owner, &db)));
}

#[test]
fn test_push_mixed_types_then_pop() {
    let (_pila, _db, stack) = pila_with_stack();

    stack.push(Value::from("foo")).unwrap();
    stack.push(Value::Int(8)).unwrap();
    stack.push(Value::Float(5.87)).unwrap();

    assert_eq!(stack.size(), 3);
    assert_eq!(stack.peek(), Some(Value::Float(5.87)));
    assert_eq!(stack.pop().unwrap(), Value::Float(5.87));
    assert_eq!(stack.pop().unwrap(), Value::Int(8));
    assert_eq!(stack.size(), 1);
    assert_eq!(stack.peek(), Some(Value::from("foo")));
}

#[test]
fn test_blocked_stack_refuses_push() {
    let (_pila, _db, stack) = pila_with_stack();
    stack.push(Value::Int(1)).unwrap();
    stack.block();

    assert_eq!(stack.push(Value::Int(2)), Err(PilaError::StackBlocked));
    assert_eq!(stack.size(), 1);
    assert_eq!(stack.peek(), Some(Value::Int(1)));

    stack.unblock();
    stack.push(Value::Int(2)).unwrap();
    assert_eq!(stack.size(), 2);
}

// =============================================================================
// CAPACITY
// =============================================================================

#[test]
fn test_full_stack_rejects_without_eviction() {
    let (_pila, _db, stack) = pila_with_stack();
    let policy = EvictionPolicy::new(StackCapacity::Bounded(1), false);
    stack.push_with_policy(Value::from("foo"), &policy).unwrap();

    assert_eq!(
        stack.push_with_policy(Value::from("bar"), &policy),
        Err(PilaError::CapacityExceeded { max: 1 })
    );
    assert_eq!(stack.size(), 1);
    assert_eq!(stack.peek(), Some(Value::from("foo")));
}

#[test]
fn test_full_stack_evicts_bottom_with_eviction() {
    let (_pila, _db, stack) = pila_with_stack();
    let policy = EvictionPolicy::new(StackCapacity::Bounded(1), true);
    stack.push_with_policy(Value::from("foo"), &policy).unwrap();

    assert_eq!(
        stack.push_with_policy(Value::from("bar"), &policy),
        Ok(vec![Value::from("foo")])
    );
    assert_eq!(stack.size(), 1);
    assert_eq!(stack.peek(), Some(Value::from("bar")));
}

#[test]
fn test_zero_capacity_rejects_even_with_eviction() {
    let (_pila, _db, stack) = pila_with_stack();
    let policy = EvictionPolicy::new(StackCapacity::Bounded(0), true);
    assert_eq!(
        stack.push_with_policy(Value::Int(1), &policy),
        Err(PilaError::CapacityExceeded { max: 0 })
    );
    assert!(stack.empty());
}

// =============================================================================
// OWNERSHIP
// =============================================================================

#[test]
fn test_stack_added_twice_keeps_first_owner() {
    let first = Arc::new(Database::new("d"));
    let second = Arc::new(Database::new("db"));
    let stack = Arc::new(Stack::new("s"));

    first.add_stack(Arc::clone(&stack)).unwrap();
    let err = second.add_stack(Arc::clone(&stack)).unwrap_err();

    assert!(matches!(err, PilaError::AlreadyOwned { .. }));
    assert!(stack.database().is_some_and(|owner| Arc::ptr_eq(&owner, &first)));
    assert_eq!(stack.id().to_string(), id_of("ds"));
    assert_eq!(second.number_of_stacks(), 0);
}

#[test]
fn test_removed_stack_is_detached_and_flushed() {
    let (_pila, db, stack) = pila_with_stack();
    stack.push(Value::Int(1)).unwrap();

    let removed = db.remove_stack(&stack.id()).unwrap();
    assert!(Arc::ptr_eq(&removed, &stack));
    assert!(!stack.is_owned());
    assert!(stack.empty());
    assert_eq!(stack.id().to_string(), id_of("s"));

    // a detached stack can join another database
    let other = Arc::new(Database::new("d"));
    other.add_stack(stack).unwrap();
    assert_eq!(other.number_of_stacks(), 1);
}

#[test]
fn test_removed_database_releases_its_name() {
    let (pila, db, _stack) = pila_with_stack();
    pila.remove_database(&db.id()).unwrap();
    assert!(db.pila().is_none());
    assert_eq!(pila.number_of_databases(), 0);

    pila.create_database("db").unwrap();
    assert_eq!(pila.number_of_databases(), 1);
}
