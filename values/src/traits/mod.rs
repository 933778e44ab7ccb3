mod array_view;
mod value_view;

pub use array_view::{ArrayMut, ArrayView};
pub use value_view::ValueView;
