//! Structural and identity properties over the Stack entity.

use super::*;
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<bool>().prop_map(Value::Bool),
        "[a-z]{0,8}".prop_map(Value::String),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(Value::Bytes),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
    ]
}

fn filled(values: &[Value]) -> Stack {
    let stack = Stack::new("s");
    for v in values {
        stack.push(v.clone()).unwrap();
    }
    stack
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_push_then_pop_returns_element(
        initial in prop::collection::vec(value_strategy(), 0..16),
        element in value_strategy(),
    ) {
        let stack = filled(&initial);
        let before = stack.size();
        stack.push(element.clone()).unwrap();
        prop_assert_eq!(stack.pop().unwrap(), element);
        prop_assert_eq!(stack.size(), before);
        prop_assert!(stack.check_invariants().is_ok());
    }

    #[test]
    fn prop_reads_are_idempotent(initial in prop::collection::vec(value_strategy(), 0..16)) {
        let stack = filled(&initial);
        let first = (stack.peek(), stack.size());
        for _ in 0..3 {
            prop_assert_eq!((stack.peek(), stack.size()), first.clone());
        }
    }

    #[test]
    fn prop_sweep_push_replaces_bottom(
        initial in prop::collection::vec(any::<i64>(), 2..16),
        element in any::<i64>(),
    ) {
        let values: Vec<Value> = initial.iter().copied().map(Value::Int).collect();
        let stack = filled(&values);

        let evicted = stack.sweep_push(Value::Int(element)).unwrap();
        prop_assert_eq!(evicted, values[0].clone());
        prop_assert_eq!(stack.size(), values.len());
        prop_assert_eq!(stack.peek(), Some(Value::Int(element)));

        // top first: the new element, then everything above the old bottom
        let mut expected = vec![Value::Int(element)];
        expected.extend(values[1..].iter().rev().cloned());
        prop_assert_eq!(stack.elements(), expected);
    }

    #[test]
    fn prop_rotate_moves_bottom_to_top(initial in prop::collection::vec(any::<i64>(), 1..16)) {
        let values: Vec<Value> = initial.iter().copied().map(Value::Int).collect();
        let stack = filled(&values);

        stack.rotate().unwrap();
        let mut expected = vec![values[0].clone()];
        expected.extend(values[1..].iter().rev().cloned());
        prop_assert_eq!(stack.elements(), expected);
        prop_assert_eq!(stack.size(), values.len());
    }

    #[test]
    fn prop_identity_is_deterministic(name in "[a-zA-Z0-9_]{1,16}") {
        prop_assert_eq!(Identity::new(&name), Identity::new(&name));
        prop_assert_eq!(Identity::parse(&Identity::new(&name).to_string()), Some(Identity::new(&name)));
    }

    #[test]
    fn prop_reparenting_recomputes_identity(
        db_name in "[a-z]{1,8}",
        stack_name in "[a-z]{1,8}",
    ) {
        let stack = Stack::new(stack_name.clone());
        prop_assert_eq!(stack.id(), Identity::new(&stack_name));

        let db = Arc::new(Database::new(db_name.clone()));
        stack.set_database(&db);
        prop_assert_eq!(stack.id(), Identity::composite(&db_name, &stack_name));
    }
}

#[test]
fn test_rotate_three() {
    let stack = filled(&[Value::from("A"), Value::from("B"), Value::from("C")]);
    stack.rotate().unwrap();
    assert_eq!(
        stack.elements(),
        vec![Value::from("A"), Value::from("C"), Value::from("B")]
    );
}

#[test]
fn test_known_identities() {
    assert_eq!(id_of("test"), "b1a5fedd-fb30-5fd5-a205-fae957fe0eae");
    assert_eq!(id_of("foo"), "ba6d412a-c334-51f7-8fc8-e5dddd97cc1e");
    assert_ne!(id_of("foo"), id_of("bar"));
    assert_eq!(
        Identity::composite("d", "s").to_string(),
        "d5332313-ec32-55e4-94a2-6c897c218cc2"
    );
}

#[test]
fn test_mixed_values_survive_the_stack() {
    let values = sample_values();
    let stack = filled(&values);
    let popped: Vec<Value> = (0..values.len()).map(|_| stack.pop().unwrap()).collect();
    let expected: Vec<Value> = values.into_iter().rev().collect();
    assert_eq!(popped, expected);
    assert!(stack.empty());
}
