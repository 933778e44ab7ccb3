//! Primitive building blocks of the R value model.
//!
//! This crate has no knowledge of values themselves. It defines:
//!
//! - [`SexpKind`] and [`Primitive`]: the discriminant carried by every value
//! - [`NaSentinel`]: the in-band "missing" marker reserved for each primitive
//! - [`Logical`]: R's three-valued boolean
//!
//! # Example
//!
//! ```
//! use rsexp_types::{NA_INTEGER, NaSentinel, Primitive, SexpKind};
//!
//! let kind = SexpKind::Vector(Primitive::Int);
//! assert_eq!(kind.primitive(), Some(Primitive::Int));
//! assert!(NA_INTEGER.is_na());
//! assert!(!0i32.is_na());
//! ```

#![no_std]
extern crate alloc;

mod kind;
mod logical;
pub mod na;

pub use kind::{Primitive, SexpKind};
pub use logical::Logical;
pub use na::{NA_INTEGER, NA_REAL, NA_REAL_BITS, NA_STRING, NaSentinel};
