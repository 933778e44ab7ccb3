//! In-memory model of R values as exchanged with an Rserve server.
//!
//! - [`dynamic::Value`]: the tagged value (`NULL`, NA, scalars, vectors,
//!   lists)
//! - [`typed`]: statically typed scalars and vectors behind the atomic
//!   variants, and the [`typed::Element`] coercion rules
//! - [`attributes`]: per-value metadata (`names`, `dim`, `class`, ...)
//! - [`shape`]: column-major reinterpretation through `dim`
//! - [`traits`]: the capabilities shared by every variant
//!
//! # Example
//!
//! ```
//! use rsexp_values::dynamic::Value;
//! use rsexp_values::traits::ValueView;
//!
//! let mut m = Value::int_vector(1..=6);
//! m.attributes_mut().unwrap().set_dim(&[2, 3]).unwrap();
//!
//! let matrix = m.as_matrix::<i32>().unwrap();
//! assert_eq!(matrix.into_rows(), vec![vec![1, 3, 5], vec![2, 4, 6]]);
//! assert_eq!(m.get_at(&[1, 2]).unwrap().as_int(), Ok(6));
//! ```

#![deny(unsafe_code)]

pub mod attributes;
pub mod display;
pub mod dynamic;
pub mod error;
mod hash;
pub mod shape;
pub mod traits;
pub mod typed;

#[cfg(test)]
mod shape_test;

pub use attributes::Attributes;
pub use dynamic::{List, Value};
pub use error::{Error, ErrorKind, Result};
pub use rsexp_types::{Logical, Primitive, SexpKind};
