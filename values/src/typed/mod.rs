//! Statically-typed atomic values.
//!
//! [`Scalar<T>`] and [`Vector<T>`] hold elements of one [`Element`] type
//! directly, with no per-element tags. [`Value`](crate::dynamic::Value) wraps
//! them in its atomic variants.

mod element;
mod scalar;
mod vector;

pub use element::Element;
pub(crate) use element::{convert, single};
pub use scalar::Scalar;
pub use vector::Vector;
