use core::hash::{Hash, Hasher};

use rsexp_types::{Logical, Primitive, SexpKind};

use crate::attributes::{self, Attributes, CLASS, DIM, NAMES};
use crate::error::{Error, Result, check_index};
use crate::hash::{elements_eq, hash_elements};
use crate::shape::{self, Dims, Matrix};
use crate::traits::{ArrayMut, ArrayView, ValueView};
use crate::typed::{Element, Scalar, Vector};

use super::List;

/// A dynamically typed R value.
///
/// Atomic data comes in a scalar and a vector flavour per primitive; both
/// behave the same through [`ValueView`], and a scalar compares equal to a
/// length-1 vector of the same type. Only vectors and lists can change
/// length (see [`Value::as_array_mut`]).
///
/// # Example
///
/// ```
/// use rsexp_values::dynamic::Value;
/// use rsexp_values::traits::ValueView;
///
/// let v = Value::int_vector([1, 2, 3]);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.get(1).unwrap().as_int(), Ok(2));
/// assert_eq!(v.as_doubles(), Ok(vec![1.0, 2.0, 3.0]));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// R's `NULL`: no elements, no attributes.
    Null,
    /// A bare NA of no particular type.
    Na,
    Int(Scalar<i32>),
    Double(Scalar<f64>),
    Str(Scalar<String>),
    Logical(Scalar<Logical>),
    IntVector(Vector<i32>),
    DoubleVector(Vector<f64>),
    StrVector(Vector<String>),
    LogicalVector(Vector<Logical>),
    List(List),
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);

/// Run `$body` with `$inner` bound to the payload of any variant that has
/// one; `Null` and `Na` take their own arms.
macro_rules! dispatch {
    ($value:expr, $inner:ident => $body:expr, null => $null:expr, na => $na:expr $(,)?) => {
        match $value {
            Value::Null => $null,
            Value::Na => $na,
            Value::Int($inner) => $body,
            Value::Double($inner) => $body,
            Value::Str($inner) => $body,
            Value::Logical($inner) => $body,
            Value::IntVector($inner) => $body,
            Value::DoubleVector($inner) => $body,
            Value::StrVector($inner) => $body,
            Value::LogicalVector($inner) => $body,
            Value::List($inner) => $body,
        }
    };
}

/// Borrowed contents of a value, with scalars and vectors folded together.
pub(crate) enum Contents<'a> {
    Null,
    Na,
    Int(&'a [i32]),
    Double(&'a [f64]),
    Str(&'a [String]),
    Logical(&'a [Logical]),
    List(&'a List),
}

impl Value {
    // =========================================================================
    // Construction
    // =========================================================================

    pub const fn null() -> Self {
        Value::Null
    }

    pub const fn na() -> Self {
        Value::Na
    }

    /// A typed NA scalar (`NA_integer_`, `NA_real_`, ...).
    pub fn na_of(primitive: Primitive) -> Self {
        match primitive {
            Primitive::Int => Value::Int(Scalar::na()),
            Primitive::Double => Value::Double(Scalar::na()),
            Primitive::Str => Value::Str(Scalar::na()),
            Primitive::Logical => Value::Logical(Scalar::na()),
        }
    }

    pub fn int(value: i32) -> Self {
        Value::Int(Scalar::new(value))
    }

    pub fn double(value: f64) -> Self {
        Value::Double(Scalar::new(value))
    }

    pub fn str(value: impl Into<String>) -> Self {
        Value::Str(Scalar::new(value.into()))
    }

    pub fn logical(value: impl Into<Logical>) -> Self {
        Value::Logical(Scalar::new(value.into()))
    }

    pub fn scalar<T: Element>(value: T) -> Self {
        T::scalar_into_value(Scalar::new(value))
    }

    pub fn vector<T: Element>(values: impl IntoIterator<Item = T>) -> Self {
        T::vector_into_value(values.into_iter().collect())
    }

    pub fn int_vector(values: impl IntoIterator<Item = i32>) -> Self {
        Self::vector(values)
    }

    pub fn double_vector(values: impl IntoIterator<Item = f64>) -> Self {
        Self::vector(values)
    }

    pub fn str_vector<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::vector(values.into_iter().map(Into::<String>::into))
    }

    pub fn logical_vector<L: Into<Logical>>(values: impl IntoIterator<Item = L>) -> Self {
        Self::vector(values.into_iter().map(Into::<Logical>::into))
    }

    pub fn list(values: impl IntoIterator<Item = Value>) -> Self {
        Value::List(List::from_values(values))
    }

    /// A column-major vector with `dim = c(rows, cols)`.
    pub fn matrix<T: Element>(matrix: &Matrix<T>) -> Result<Self> {
        Vector::from_matrix(matrix).map(T::vector_into_value)
    }

    /// Scalars become length-1 vectors (keeping their attributes) and a bare
    /// NA becomes `c(NA)`, so that the result can grow. Other values are
    /// returned unchanged.
    pub fn into_array(self) -> Self {
        match self {
            Value::Na => Value::vector([Logical::Na]),
            Value::Int(s) => Value::IntVector(s.into_vector()),
            Value::Double(s) => Value::DoubleVector(s.into_vector()),
            Value::Str(s) => Value::StrVector(s.into_vector()),
            Value::Logical(s) => Value::LogicalVector(s.into_vector()),
            other => other,
        }
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// Mutable attributes. `NULL` and a bare NA have none to mutate.
    pub fn attributes_mut(&mut self) -> Result<&mut Attributes> {
        dispatch!(self,
            inner => Ok(inner.attributes_mut()),
            null => Err(Self::no_attributes(SexpKind::Null)),
            na => Err(Self::no_attributes(SexpKind::Na)),
        )
    }

    fn no_attributes(kind: SexpKind) -> Error {
        let err = attributes::unsupported(kind);
        tracing::debug!(error = %err, "rejected attribute mutation");
        err
    }

    pub fn attribute(&self, name: &str) -> Result<&Value> {
        match self.attributes() {
            Some(attributes) => attributes.get(name),
            None => Err(Error::missing_attribute(name)),
        }
    }

    /// Set an attribute, returning the one it replaced.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: Value) -> Result<Option<Value>> {
        Ok(self.attributes_mut()?.set(name, value))
    }

    pub fn remove_attribute(&mut self, name: &str) -> Result<Option<Value>> {
        Ok(self.attributes_mut()?.remove(name))
    }

    pub fn names(&self) -> Result<Vec<String>> {
        self.attribute(NAMES)?.as_strings()
    }

    pub fn class(&self) -> Result<Vec<String>> {
        self.attribute(CLASS)?.as_strings()
    }

    pub fn inherits(&self, class: &str) -> bool {
        self.attributes().is_some_and(|a| a.inherits(class))
    }

    // =========================================================================
    // Element access
    // =========================================================================

    /// Element `index`: a scalar for atomic values, the stored value for
    /// lists. A bare NA is its own single element.
    pub fn get(&self, index: usize) -> Result<Value> {
        match self {
            Value::Null => Err(Error::OutOfRange { index, len: 0 }),
            Value::Na => check_index(index, 1).map(|()| Value::Na),
            Value::Int(s) => scalar_element(s, index),
            Value::Double(s) => scalar_element(s, index),
            Value::Str(s) => scalar_element(s, index),
            Value::Logical(s) => scalar_element(s, index),
            Value::IntVector(v) => v.get(index),
            Value::DoubleVector(v) => v.get(index),
            Value::StrVector(v) => v.get(index),
            Value::LogicalVector(v) => v.get(index),
            Value::List(l) => l.get(index),
        }
    }

    /// The validated `dim` attribute.
    pub fn dims(&self) -> Result<Dims> {
        let attributes = self
            .attributes()
            .ok_or_else(|| Error::missing_attribute(DIM))?;
        shape::dims_of(attributes, self.len())
    }

    /// Number of dimensions; 1 when there is no usable `dim`.
    pub fn rank(&self) -> usize {
        self.dims().map_or(1, |dims| dims.rank())
    }

    /// Extent along `axis`. Without `dim` the value is one-dimensional.
    pub fn dim_length(&self, axis: usize) -> Result<usize> {
        if self.attributes().is_none_or(|a| !a.contains_key(DIM)) {
            return if axis == 0 {
                Ok(self.len())
            } else {
                Err(Error::OutOfRange { index: axis, len: 1 })
            };
        }
        let dims = self.dims()?;
        dims.as_slice().get(axis).copied().ok_or(Error::OutOfRange {
            index: axis,
            len: dims.rank(),
        })
    }

    /// Element at N-dimensional `coords`.
    pub fn get_at(&self, coords: &[usize]) -> Result<Value> {
        let index = shape::column_major_index(self.dims()?.as_slice(), coords)?;
        self.get(index)
    }

    /// Row-major view of a two-dimensional value, elements coerced to `T`.
    pub fn as_matrix<T: Element>(&self) -> Result<Matrix<T>> {
        let dims = self.dims()?;
        let &[rows, cols] = dims.as_slice() else {
            return Err(Error::RankMismatch {
                expected: 2,
                found: dims.rank(),
            });
        };
        Matrix::from_column_major(rows, cols, &self.as_vec::<T>()?)
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Elements without coercion, for scalars and vectors of `T`.
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        T::slice_of(self)
    }

    pub fn as_vector<T: Element>(&self) -> Option<&Vector<T>> {
        T::vector_of(self)
    }

    pub fn as_vector_mut<T: Element>(&mut self) -> Option<&mut Vector<T>> {
        T::vector_of_mut(self)
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Read access to the elements of a vector or list.
    pub fn as_array(&self) -> Option<&dyn ArrayView> {
        match self {
            Value::IntVector(v) => Some(v),
            Value::DoubleVector(v) => Some(v),
            Value::StrVector(v) => Some(v),
            Value::LogicalVector(v) => Some(v),
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Structural mutation of a vector or list.
    ///
    /// Scalars, `NULL` and NA have fixed length and fail with
    /// [`Error::Unsupported`]; convert them with [`Value::into_array`] first.
    pub fn as_array_mut(&mut self) -> Result<&mut dyn ArrayMut> {
        match self {
            Value::IntVector(v) => Ok(v),
            Value::DoubleVector(v) => Ok(v),
            Value::StrVector(v) => Ok(v),
            Value::LogicalVector(v) => Ok(v),
            Value::List(l) => Ok(l),
            other => Err(Error::Unsupported {
                operation: "structural mutation",
                kind: other.kind(),
            }),
        }
    }

    pub(crate) fn contents(&self) -> Contents<'_> {
        match self {
            Value::Null => Contents::Null,
            Value::Na => Contents::Na,
            Value::Int(s) => Contents::Int(s.as_slice()),
            Value::IntVector(v) => Contents::Int(v.as_slice()),
            Value::Double(s) => Contents::Double(s.as_slice()),
            Value::DoubleVector(v) => Contents::Double(v.as_slice()),
            Value::Str(s) => Contents::Str(s.as_slice()),
            Value::StrVector(v) => Contents::Str(v.as_slice()),
            Value::Logical(s) => Contents::Logical(s.as_slice()),
            Value::LogicalVector(v) => Contents::Logical(v.as_slice()),
            Value::List(l) => Contents::List(l),
        }
    }
}

fn scalar_element<T: Element>(scalar: &Scalar<T>, index: usize) -> Result<Value> {
    check_index(index, 1)?;
    Ok(Value::scalar(scalar.value().clone()))
}

impl ValueView for Value {
    fn kind(&self) -> SexpKind {
        dispatch!(self,
            inner => inner.kind(),
            null => SexpKind::Null,
            na => SexpKind::Na,
        )
    }

    fn len(&self) -> usize {
        dispatch!(self,
            inner => ValueView::len(inner),
            null => 0,
            na => 1,
        )
    }

    fn attributes(&self) -> Option<&Attributes> {
        dispatch!(self,
            inner => inner.attributes(),
            null => None,
            na => None,
        )
    }

    fn is_na(&self) -> Result<bool> {
        dispatch!(self,
            inner => inner.is_na(),
            null => Err(Error::NotScalar { len: 0 }),
            na => Ok(true),
        )
    }

    fn as_scalar<T: Element>(&self) -> Result<T> {
        dispatch!(self,
            inner => inner.as_scalar(),
            null => Err(Error::NotScalar { len: 0 }),
            na => Err(Error::NotAvailable),
        )
    }

    fn as_vec<T: Element>(&self) -> Result<Vec<T>> {
        dispatch!(self,
            inner => inner.as_vec(),
            null => Ok(Vec::new()),
            na => Ok(vec![T::na()]),
        )
    }
}

// =============================================================================
// Equality
// =============================================================================

/// Structural equality of contents; attributes are ignored.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self.contents(), other.contents()) {
            (Contents::Null, Contents::Null) | (Contents::Na, Contents::Na) => true,
            (Contents::Int(a), Contents::Int(b)) => elements_eq(a, b),
            (Contents::Double(a), Contents::Double(b)) => elements_eq(a, b),
            (Contents::Str(a), Contents::Str(b)) => elements_eq(a, b),
            (Contents::Logical(a), Contents::Logical(b)) => elements_eq(a, b),
            (Contents::List(a), Contents::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.contents() {
            Contents::Null => state.write_u8(0),
            Contents::Na => state.write_u8(1),
            Contents::Int(a) => hash_elements(a, state),
            Contents::Double(a) => hash_elements(a, state),
            Contents::Str(a) => hash_elements(a, state),
            Contents::Logical(a) => hash_elements(a, state),
            Contents::List(l) => l.hash(state),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::double(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::str(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::logical(value)
    }
}

impl From<Logical> for Value {
    fn from(value: Logical) -> Self {
        Value::logical(value)
    }
}

impl<T: Element> From<Scalar<T>> for Value {
    fn from(scalar: Scalar<T>) -> Self {
        T::scalar_into_value(scalar)
    }
}

impl<T: Element> From<Vector<T>> for Value {
    fn from(vector: Vector<T>) -> Self {
        T::vector_into_value(vector)
    }
}

impl<T: Element> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        T::vector_into_value(Vector::from_vec(values))
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::List(list)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::list(iter)
    }
}
