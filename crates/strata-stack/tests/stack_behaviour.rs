//! Integration tests: the full contract of the stack, its fold and its
//! registry accounting, exercised through the public API only.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use strata_stack::prelude::*;
use strata_stack::DEFAULT_CAPACITY;

fn registry() -> Arc<StackRegistry> {
    Arc::new(StackRegistry::new())
}

#[test]
fn push_then_pop_reverses_order() {
    let mut stack = ArrayStack::with_registry(registry());
    for i in 0..100 {
        stack.push(i);
    }
    let popped: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
    let expected: Vec<_> = (0..100).rev().collect();
    assert_eq!(popped, expected);
}

#[test]
fn is_empty_iff_len_is_zero() {
    let mut stack = ArrayStack::with_registry(registry());
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
    stack.push(1);
    assert!(!stack.is_empty());
    assert_eq!(stack.len(), 1);
    let _ = stack.pop();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
}

#[test]
fn growth_preserves_contents_and_order() {
    let mut stack = ArrayStack::with_registry(registry());
    let count = DEFAULT_CAPACITY + 1;
    for i in 0..count {
        stack.push(i);
    }
    assert!(stack.capacity() > DEFAULT_CAPACITY);
    assert_eq!(stack.len(), count);
    for i in (0..count).rev() {
        assert_eq!(stack.pop(), Some(i));
    }
}

#[test]
fn sequential_construction_yields_sequential_ids() {
    let registry = registry();
    let stacks: Vec<ArrayStack<i32>> = (0..5)
        .map(|_| ArrayStack::with_registry(Arc::clone(&registry)))
        .collect();
    let ids: Vec<_> = stacks.iter().map(ArrayStack::stack_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(registry.stats().stacks_created, 5);
}

#[test]
fn pushes_across_stacks_accumulate_in_the_live_total() {
    let registry = registry();
    let mut a = ArrayStack::with_registry(Arc::clone(&registry));
    let mut b = ArrayStack::with_registry(Arc::clone(&registry));
    let mut c = ArrayStack::with_registry(Arc::clone(&registry));
    for i in 0..4 {
        a.push(i);
        b.push(i);
    }
    c.push(0);
    assert_eq!(registry.stats().live_elements, 9);
}

#[test]
fn empty_pop_never_underflows_the_live_total() {
    let registry = registry();
    let mut stack: ArrayStack<u8> = ArrayStack::with_registry(Arc::clone(&registry));
    let _ = stack.pop();
    let _ = stack.pop();
    assert_eq!(stack.len(), 0);
    assert_eq!(registry.stats().live_elements, 0);
}

#[test]
fn fold_scenarios_from_the_contract() {
    // [3, 4] with 4 on top folds to [7].
    let mut ints = ArrayStack::with_registry(registry());
    ints.push(Number::from(3i64));
    ints.push(Number::from(4i64));
    ints.add_top_two();
    assert_eq!(ints.len(), 1);
    assert_eq!(ints.pop(), Some(Number::from(7i64)));

    // Same values as floats fold to the float sum.
    let mut floats = ArrayStack::with_registry(registry());
    floats.push(Number::from(3.0));
    floats.push(Number::from(4.0));
    floats.add_top_two();
    assert_eq!(floats.pop(), Some(Number::from(7.0)));

    // Fewer than two elements: no mutation at all.
    let mut short = ArrayStack::with_registry(registry());
    short.push(Number::from(1i64));
    short.add_top_two();
    assert_eq!(short.len(), 1);
}

#[test]
fn status_strings_render_like_the_reports() {
    let registry = registry();
    let mut stack = ArrayStack::with_registry(Arc::clone(&registry));
    stack.push(Number::from(1i64));
    stack.push(Number::from(2i64));
    assert_eq!(stack.stats().to_string(), "Stack #1: Size=2, Operations=2");
    assert_eq!(
        registry.stats().to_string(),
        "Total stacks: 1, Total elements: 2"
    );
}
