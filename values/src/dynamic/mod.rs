//! The dynamically typed value model.

mod list;
mod value;

pub use list::List;
pub(crate) use value::Contents;
pub use value::Value;
