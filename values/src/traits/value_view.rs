use rsexp_types::{Logical, SexpKind};

use crate::attributes::Attributes;
use crate::error::{Error, Result};
use crate::typed::Element;

/// The capabilities every value supports, whatever its variant.
///
/// Scalar accessors follow R's convention that a length-1 vector *is* a
/// scalar: they succeed only for exactly one element, fail with
/// [`Error::NotScalar`] otherwise, and fail with [`Error::NotAvailable`] when
/// that element is NA. They never fall back to the first element.
pub trait ValueView {
    /// The variant discriminant.
    fn kind(&self) -> SexpKind;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Attributes, or `None` for variants that cannot carry any.
    fn attributes(&self) -> Option<&Attributes>;

    /// Whether the single element is NA.
    ///
    /// NA-ness is defined per element, so this fails with
    /// [`Error::NotScalar`] unless the value holds exactly one.
    fn is_na(&self) -> Result<bool>;

    /// The single element coerced to `T`.
    fn as_scalar<T: Element>(&self) -> Result<T>;

    /// Every element coerced to `T`, NA mapped to `T`'s NA, in storage order.
    fn as_vec<T: Element>(&self) -> Result<Vec<T>>;

    // --- Provided ---

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_null(&self) -> bool {
        self.kind() == SexpKind::Null
    }

    fn as_int(&self) -> Result<i32> {
        self.as_scalar()
    }

    fn as_double(&self) -> Result<f64> {
        self.as_scalar()
    }

    fn as_string(&self) -> Result<String> {
        self.as_scalar()
    }

    fn as_logical(&self) -> Result<Logical> {
        self.as_scalar()
    }

    /// Like [`ValueView::as_logical`], but a NaN double (which coerces to a
    /// logical NA) is reported as [`Error::NotAvailable`].
    fn as_bool(&self) -> Result<bool> {
        self.as_logical()?.to_bool().ok_or(Error::NotAvailable)
    }

    fn as_ints(&self) -> Result<Vec<i32>> {
        self.as_vec()
    }

    fn as_doubles(&self) -> Result<Vec<f64>> {
        self.as_vec()
    }

    fn as_strings(&self) -> Result<Vec<String>> {
        self.as_vec()
    }

    fn as_logicals(&self) -> Result<Vec<Logical>> {
        self.as_vec()
    }
}
