//! rsexp - R values as exchanged with an Rserve server
//!
//! # Overview
//!
//! Rserve transmits R objects (SEXPs) as typed, attributed values. This crate
//! models them in memory:
//!
//! - `NULL`, a bare NA, and scalars and vectors of integers, doubles,
//!   strings and logicals, each with its own NA sentinel
//! - generic lists of arbitrary values
//! - attributes on every value, including `dim` for column-major arrays
//!
//! Encoding and decoding the QAP1 wire format is left to the protocol layer;
//! the sentinels here are chosen to match it bit for bit.
//!
//! # Quick Start
//!
//! ```
//! use rsexp::{Primitive, Value, ValueView};
//!
//! let mut v = Value::double_vector([1.0, 2.5]);
//! v.as_array_mut().unwrap().push(&Value::int(4)).unwrap();
//! v.as_array_mut().unwrap().push(&Value::Na).unwrap();
//!
//! assert_eq!(v.len(), 4);
//! assert_eq!(v.get(2).unwrap().as_double(), Ok(4.0));
//! assert_eq!(v.get(3).unwrap().is_na(), Ok(true));
//! assert_eq!(v.to_string(), "c(1, 2.5, 4, NA)");
//!
//! // NA scalars refuse to produce a value.
//! assert!(Value::na_of(Primitive::Int).as_int().is_err());
//! ```
//!
//! # Arrays
//!
//! ```
//! use rsexp::{Matrix, Value};
//!
//! let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
//! let v = Value::matrix(&m).unwrap();
//! assert_eq!(v.to_string(), "structure(c(1L, 4L, 2L, 5L, 3L, 6L), dim = c(2L, 3L))");
//! assert_eq!(v.as_matrix::<i32>().unwrap(), m);
//! ```

mod error_renderer;

pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

pub use rsexp_types as types;
pub use rsexp_values as values;

pub use rsexp_types::{
    Logical, NA_INTEGER, NA_REAL, NA_REAL_BITS, NA_STRING, NaSentinel, Primitive, SexpKind,
};
pub use rsexp_values::{
    Attributes, Error, ErrorKind, List, Result, Value,
    attributes::{CLASS, DIM, DIMNAMES, NAMES},
    display::DisplayOptions,
    shape::{Dims, Matrix},
    traits::{ArrayMut, ArrayView, ValueView},
    typed::{Element, Scalar, Vector},
};
