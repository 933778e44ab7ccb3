use expect_test::{Expect, expect};
use rsexp_types::{Logical, NaSentinel};
use rsexp_values::{
    display::DisplayOptions,
    dynamic::{List, Value},
    shape::Matrix,
};

fn check(value: &Value, expected: Expect) {
    expected.assert_eq(&value.to_string());
}

#[test]
fn atomic_vectors() {
    check(&Value::int_vector([1, 2, 3]), expect!["c(1L, 2L, 3L)"]);
    check(
        &Value::double_vector([1.0, 2.5, f64::na(), f64::NAN, f64::INFINITY]),
        expect!["c(1, 2.5, NA, NaN, Inf)"],
    );
    check(
        &Value::str_vector(["a", "b c"]),
        expect![[r#"c("a", "b c")"#]],
    );
    check(
        &Value::logical_vector([Logical::True, Logical::Na, Logical::False]),
        expect!["c(TRUE, NA, FALSE)"],
    );
    check(&Value::str_vector([String::na()]), expect!["NA_character_"]);
}

#[test]
fn named_vector() {
    let mut v = Value::double_vector([1.0, 2.0, 3.0]);
    v.attributes_mut()
        .unwrap()
        .set_names(["a", "", "my name"]);
    check(&v, expect!["c(a = 1, 2, `my name` = 3)"]);

    let mut s = Value::int(7);
    s.attributes_mut().unwrap().set_names(["x"]);
    check(&s, expect!["c(x = 7L)"]);
}

#[test]
fn matrix_uses_structure() {
    let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    check(
        &Value::matrix(&m).unwrap(),
        expect!["structure(c(1L, 3L, 2L, 4L), dim = c(2L, 2L))"],
    );
}

#[test]
fn lists() {
    let mut list = List::named([("a", Value::int(1)), ("b", Value::Null)]);
    list.push_named("", Value::list([Value::str("x")]));
    check(
        &Value::List(list),
        expect![[r#"list(a = 1L, b = NULL, list("x"))"#]],
    );
    check(&Value::list([]), expect!["list()"]);
}

#[test]
fn truncation() {
    let v = Value::int_vector(1..=10);
    let options = DisplayOptions {
        max_elements: Some(3),
        ..DisplayOptions::default()
    };
    expect!["c(1L, 2L, 3L, ...)"].assert_eq(&v.display(options).to_string());

    let none = DisplayOptions {
        max_elements: Some(0),
        ..DisplayOptions::default()
    };
    expect!["c(...)"].assert_eq(&v.display(none).to_string());
}
