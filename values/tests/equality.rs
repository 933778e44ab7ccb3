use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rsexp_types::{Logical, NaSentinel, Primitive};
use rsexp_values::dynamic::Value;

fn digest(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn assert_same(a: &Value, b: &Value) {
    assert_eq!(a, b);
    assert_eq!(digest(a), digest(b), "{a} and {b} hash differently");
}

#[test]
fn scalar_equals_length_one_vector() {
    assert_same(&Value::int(4), &Value::int_vector([4]));
    assert_same(&Value::str("a"), &Value::str_vector(["a"]));
    assert_same(
        &Value::na_of(Primitive::Logical),
        &Value::logical_vector([Logical::Na]),
    );
}

#[test]
fn different_types_are_never_equal() {
    assert_ne!(Value::int(1), Value::double(1.0));
    assert_ne!(Value::int_vector([1, 0]), Value::logical_vector([true, false]));
    assert_ne!(Value::str("1"), Value::int(1));
    assert_ne!(Value::Null, Value::list([]));
    assert_ne!(Value::Na, Value::na_of(Primitive::Logical));

    // Empty vectors differ only by type, which the hash must see.
    assert_ne!(
        digest(&Value::int_vector([])),
        digest(&Value::double_vector([]))
    );
}

#[test]
fn element_order_matters() {
    assert_ne!(Value::int_vector([1, 2]), Value::int_vector([2, 1]));
    assert_ne!(
        digest(&Value::int_vector([1, 2])),
        digest(&Value::int_vector([2, 1]))
    );
}

#[test]
fn double_identity() {
    assert_same(&Value::double(f64::na()), &Value::double(f64::na()));
    assert_same(&Value::double(f64::NAN), &Value::double(-f64::NAN));
    assert_same(&Value::double(0.0), &Value::double(-0.0));
    assert_ne!(Value::double(f64::na()), Value::double(f64::NAN));
}

#[test]
fn attributes_ignored_by_hash() {
    let plain = Value::double_vector([1.0, 2.0]);
    let mut shaped = plain.clone();
    shaped
        .attributes_mut()
        .unwrap()
        .set_dim(&[2, 1])
        .unwrap();
    assert_same(&plain, &shaped);
}

#[test]
fn lists_compare_element_wise() {
    let a = Value::list([Value::int(1), Value::list([Value::str("x")])]);
    let b = Value::list([Value::int_vector([1]), Value::list([Value::str("x")])]);
    assert_same(&a, &b);
    assert_ne!(a, Value::list([Value::int(1)]));
}

#[test]
fn values_as_set_members() {
    let set: HashSet<Value> = [
        Value::int(1),
        Value::int_vector([1]),
        Value::double(1.0),
        Value::Null,
        Value::Na,
        Value::str("1"),
    ]
    .into_iter()
    .collect();

    assert_eq!(set.len(), 5);
    assert!(set.contains(&Value::double_vector([1.0])));
}
