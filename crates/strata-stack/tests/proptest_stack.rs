//! Property-based tests for the stack laws

use std::sync::Arc;

use proptest::prelude::*;
use strata_stack::{ArrayStack, StackRegistry};
use strata_value::Number;

fn stack<T>() -> ArrayStack<T> {
    ArrayStack::with_registry(Arc::new(StackRegistry::new()))
}

proptest! {
    #[test]
    fn lifo_law(elements in proptest::collection::vec(any::<i64>(), 0..200)) {
        let mut stack = stack();
        for &e in &elements {
            stack.push(e);
        }
        let popped: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
        let mut expected = elements;
        expected.reverse();
        prop_assert_eq!(popped, expected);
    }

    #[test]
    fn peek_is_idempotent(elements in proptest::collection::vec(any::<i32>(), 1..50), probes in 1usize..10) {
        let mut stack = stack();
        for &e in &elements {
            stack.push(e);
        }
        let top = *elements.last().unwrap();
        for _ in 0..probes {
            prop_assert_eq!(stack.peek(), Some(&top));
        }
        prop_assert_eq!(stack.len(), elements.len());
    }

    #[test]
    fn live_total_tracks_pushes_minus_pops(
        pushes in 0usize..100,
        pops in 0usize..150,
    ) {
        let registry = Arc::new(StackRegistry::new());
        let mut stack = ArrayStack::with_registry(Arc::clone(&registry));
        for i in 0..pushes {
            stack.push(i);
        }
        let mut succeeded = 0u64;
        for _ in 0..pops {
            if stack.pop().is_some() {
                succeeded += 1;
            }
        }
        prop_assert_eq!(
            registry.stats().live_elements,
            pushes as u64 - succeeded
        );
    }

    #[test]
    fn fold_net_effect_is_minus_one(values in proptest::collection::vec(any::<i32>(), 2..40)) {
        let mut stack = stack();
        for &v in &values {
            stack.push(Number::from(v));
        }
        stack.add_top_two();
        prop_assert_eq!(stack.len(), values.len() - 1);
    }
}
