//! End-to-end use of the facade crate.

use expect_test::expect;
use pretty_assertions::assert_eq;
use rsexp::{
    Attributes, DIM, DisplayOptions, Error, ErrorKind, List, Logical, NaSentinel, Primitive,
    SexpKind, Value, ValueView,
};

/// A data-frame-like value: a named list of equally long columns.
fn data_frame() -> Value {
    let mut df = List::named([
        ("id", Value::int_vector([1, 2, 3])),
        ("score", Value::double_vector([0.5, f64::na(), 2.0])),
        ("ok", Value::logical_vector([true, false, true])),
    ]);
    let attributes = df.attributes_mut();
    attributes.set_class(["data.frame"]);
    attributes.set("row.names", Value::int_vector([1, 2, 3]));
    Value::List(df)
}

#[test]
fn data_frame_columns() {
    let df = data_frame();
    let columns = df.as_list().unwrap();

    assert!(df.inherits("data.frame"));
    assert_eq!(
        columns.get_by_name("id").unwrap().as_ints(),
        Ok(vec![1, 2, 3])
    );

    let score = columns.get_by_name("score").unwrap();
    assert_eq!(score.get(1).unwrap().is_na(), Ok(true));
    assert_eq!(score.get(1).unwrap().as_double(), Err(Error::NotAvailable));

    expect![[r#"structure(list(id = c(1L, 2L, 3L), score = c(0.5, NA, 2), ok = c(TRUE, FALSE, TRUE)), class = "data.frame", row.names = c(1L, 2L, 3L))"#]]
        .assert_eq(&df.to_string());
}

#[test]
fn matrix_scenario() {
    let mut m = Value::int_vector(1..=6);
    m.set_attribute(DIM, Value::int_vector([2, 3])).unwrap();

    assert_eq!(m.dims().unwrap().as_slice(), &[2, 3]);
    assert_eq!(
        m.as_matrix::<i32>().unwrap().into_rows(),
        vec![vec![1, 3, 5], vec![2, 4, 6]]
    );
    assert_eq!(m.get_at(&[1, 1]), Ok(Value::int(4)));
}

#[test]
fn error_kinds() {
    let v = Value::str_vector(["a", "b"]);
    let mut null = Value::Null;

    let cases = [
        (v.get(2).unwrap_err(), ErrorKind::OutOfRange),
        (v.as_string().unwrap_err(), ErrorKind::Coercion),
        (v.attribute("dim").unwrap_err(), ErrorKind::MissingAttribute),
        (null.attributes_mut().unwrap_err(), ErrorKind::Unsupported),
    ];
    for (err, kind) in cases {
        assert_eq!(err.kind(), kind, "{err}");
    }
}

#[test]
fn typed_na_kinds() {
    for primitive in [
        Primitive::Int,
        Primitive::Double,
        Primitive::Str,
        Primitive::Logical,
    ] {
        let na = Value::na_of(primitive);
        assert_eq!(na.kind(), SexpKind::Scalar(primitive));
        assert_eq!(na.is_na(), Ok(true));
    }
    assert_eq!(Value::na_of(Primitive::Logical).as_logicals(), Ok(vec![Logical::Na]));
}

#[test]
fn compact_display() {
    let mut v = Value::double_vector((0..20).map(f64::from));
    v.set_attribute("units", Value::str("cm")).unwrap();

    let options = DisplayOptions {
        max_elements: Some(2),
        show_attributes: false,
    };
    expect!["c(0, 1, ...)"].assert_eq(&v.display(options).to_string());
}

#[test]
fn attributes_collect() {
    let attributes: Attributes = [("a", Value::int(1)), ("b", Value::Null)]
        .into_iter()
        .collect();
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes.find("b"), Some(&Value::Null));
}
