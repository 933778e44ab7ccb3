//! Tests for column-major index mapping and the matrix view.

use pretty_assertions::assert_eq;

use crate::attributes::Attributes;
use crate::dynamic::Value;
use crate::error::Error;
use crate::shape::{Dims, Matrix, column_major_index, dims_of, unravel};

// ============================================================================
// Index mapping
// ============================================================================

#[test]
fn test_column_major_index_2d() {
    let dims = [2, 3];
    assert_eq!(column_major_index(&dims, &[0, 0]), Ok(0));
    assert_eq!(column_major_index(&dims, &[1, 0]), Ok(1));
    assert_eq!(column_major_index(&dims, &[0, 1]), Ok(2));
    assert_eq!(column_major_index(&dims, &[1, 2]), Ok(5));
}

#[test]
fn test_column_major_index_3d() {
    let dims = [2, 3, 4];
    // i0 + 2*i1 + 6*i2
    assert_eq!(column_major_index(&dims, &[1, 2, 3]), Ok(1 + 2 * 2 + 6 * 3));
    assert_eq!(column_major_index(&dims, &[0, 0, 1]), Ok(6));
}

#[test]
fn test_column_major_index_errors() {
    assert_eq!(
        column_major_index(&[2, 3], &[0, 0, 0]),
        Err(Error::RankMismatch {
            expected: 2,
            found: 3
        })
    );
    assert_eq!(
        column_major_index(&[2, 3], &[0, 3]),
        Err(Error::OutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn test_unravel_inverts_index() {
    let dims = [3, 2, 4];
    for flat in 0..24 {
        let coords = unravel(&dims, flat).unwrap();
        assert_eq!(column_major_index(&dims, &coords), Ok(flat));
    }
    assert_eq!(
        unravel(&dims, 24),
        Err(Error::OutOfRange { index: 24, len: 24 })
    );
}

#[test]
fn test_index_mapping_overflow() {
    let huge = [usize::MAX, 2];
    assert!(matches!(
        column_major_index(&huge, &[0, 0]),
        Err(Error::InvalidShape { .. })
    ));
    assert!(matches!(
        unravel(&huge, 0),
        Err(Error::InvalidShape { .. })
    ));
    // Bounds are checked before the shape.
    assert_eq!(
        column_major_index(&huge, &[0, 2]),
        Err(Error::OutOfRange { index: 2, len: 2 })
    );
}

#[test]
fn test_zero_extent_after_overflowing_prefix() {
    let dims = Dims::from_slice(&[usize::MAX, usize::MAX, 0]);
    assert_eq!(dims.element_count(), Some(0));
    assert!(dims.check_len(0).is_ok());
    assert_eq!(
        unravel(dims.as_slice(), 0),
        Err(Error::OutOfRange { index: 0, len: 0 })
    );
}

// ============================================================================
// Dims
// ============================================================================

#[test]
fn test_dims_from_value() {
    let dims = Dims::from_value(&Value::int_vector([2, 3])).unwrap();
    assert_eq!(dims.as_slice(), &[2, 3]);
    assert_eq!(dims.rank(), 2);
    assert_eq!(dims.element_count(), Some(6));

    // Doubles holding integers are fine.
    let dims = Dims::from_value(&Value::double_vector([4.0, 1.0])).unwrap();
    assert_eq!(dims.as_slice(), &[4, 1]);
}

#[test]
fn test_dims_from_bad_values() {
    for bad in [
        Value::int_vector([2, -1]),
        Value::int_vector([2, rsexp_types::NA_INTEGER]),
        Value::int_vector(Vec::<i32>::new()),
        Value::str_vector(["x"]),
        Value::double_vector([1.5]),
    ] {
        let err = Dims::from_value(&bad).unwrap_err();
        assert!(matches!(err, Error::InvalidShape { .. }), "{bad}: {err}");
    }
}

#[test]
fn test_dims_to_value() {
    let value = Dims::from_slice(&[2, 3]).to_value().unwrap();
    assert_eq!(value, Value::int_vector([2, 3]));
}

#[test]
fn test_dims_of_checks_length() {
    let mut attributes = Attributes::new();
    assert_eq!(
        dims_of(&attributes, 6),
        Err(Error::MissingAttribute { name: "dim".into() })
    );

    assert!(matches!(
        attributes.set_dim(&[]),
        Err(Error::InvalidShape { .. })
    ));
    assert!(!attributes.contains_key("dim"));

    attributes.set_dim(&[2, 3]).unwrap();
    assert!(dims_of(&attributes, 6).is_ok());
    assert!(matches!(
        dims_of(&attributes, 5),
        Err(Error::InvalidShape { .. })
    ));
}

#[test]
fn test_check_rank() {
    let dims = Dims::from_slice(&[2, 2, 2]);
    assert_eq!(
        dims.check_rank(2),
        Err(Error::RankMismatch {
            expected: 2,
            found: 3
        })
    );
    assert!(dims.check_rank(3).is_ok());
}

// ============================================================================
// Matrix
// ============================================================================

#[test]
fn test_matrix_from_column_major() {
    let m = Matrix::from_column_major(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert_eq!(m.row(0), Some(&[1, 3, 5][..]));
    assert_eq!(m.row(1), Some(&[2, 4, 6][..]));
    assert_eq!(m.row(2), None);
    assert_eq!(m[(1, 2)], 6);
    assert_eq!(m.get(2, 0), None);
}

#[test]
fn test_matrix_column_major_round_trip() {
    let flat = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    let m = Matrix::from_column_major(3, 4, &flat).unwrap();
    for r in 0..3 {
        for c in 0..4 {
            assert_eq!(m[(r, c)], flat[c * 3 + r]);
        }
    }
    assert_eq!(m.to_column_major(), flat);
}

#[test]
fn test_matrix_from_rows() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
    assert_eq!(m.rows(), 3);
    assert_eq!(m.cols(), 2);
    assert_eq!(m.to_column_major(), vec![1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
    assert_eq!(
        m.into_rows(),
        vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]
    );
}

#[test]
fn test_matrix_shape_errors() {
    assert!(Matrix::from_rows(vec![vec![1], vec![2, 3]]).is_err());
    assert!(Matrix::from_row_major(2, 2, vec![1, 2, 3]).is_err());
    assert!(Matrix::from_column_major(2, 2, &[1, 2, 3, 4, 5]).is_err());
}
