use core::hash::{Hash, Hasher};
use core::slice;

use rsexp_types::{NaSentinel, SexpKind};

use crate::attributes::{Attributes, DIM};
use crate::dynamic::Value;
use crate::error::{Error, Result, check_index};
use crate::hash::{elements_eq, hash_elements};
use crate::shape::{self, Dims, Matrix};
use crate::traits::{ArrayMut, ArrayView, ValueView};

use super::{Element, Scalar, convert, single};

/// A homogeneous, ordered, growable sequence of `T`.
///
/// Every element is a valid `T` or `T`'s NA sentinel. Writes through the
/// generic [`Value`] interface store NA for missing inputs and coerce
/// everything else; a write that cannot be coerced fails and leaves the
/// vector as it was.
///
/// With a `dim` attribute the flat storage is read as a column-major array;
/// see [`crate::shape`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector<T> {
    values: Vec<T>,
    attributes: Attributes,
}

impl<T: Element> Vector<T> {
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    pub fn from_vec(values: Vec<T>) -> Self {
        Vector {
            values,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// A column-major vector with `dim = c(rows, cols)` holding `matrix`.
    pub fn from_matrix(matrix: &Matrix<T>) -> Result<Self> {
        let mut vector = Self::from_vec(matrix.to_column_major());
        vector
            .attributes
            .set_dim(&[matrix.rows(), matrix.cols()])?;
        Ok(vector)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    // --- Native access ---

    /// Storage order (column-major when shaped).
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// A copy of the backing sequence.
    pub fn as_native(&self) -> Vec<T> {
        self.values.clone()
    }

    pub fn into_native(self) -> Vec<T> {
        self.values
    }

    pub fn iter_native(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn get_native(&self, index: usize) -> Result<&T> {
        self.values.get(index).ok_or(Error::OutOfRange {
            index,
            len: self.values.len(),
        })
    }

    pub fn set_native(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.values.len())?;
        self.values[index] = value;
        Ok(())
    }

    pub fn push_native(&mut self, value: T) {
        self.values.push(value);
    }

    /// Whether the element at `index` is NA.
    pub fn is_na_at(&self, index: usize) -> Result<bool> {
        self.get_native(index).map(NaSentinel::is_na)
    }

    // --- Value access ---

    /// Element `index` as a scalar value.
    pub fn get(&self, index: usize) -> Result<Value> {
        let element = self.get_native(index)?;
        Ok(T::scalar_into_value(Scalar::new(element.clone())))
    }

    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.values
            .iter()
            .map(|e| T::scalar_into_value(Scalar::new(e.clone())))
    }

    pub fn set(&mut self, index: usize, item: &Value) -> Result<()> {
        check_index(index, self.values.len())
            .inspect_err(|e| tracing::debug!(error = %e, "rejected element write"))?;
        self.values[index] = Self::element_from(item)?;
        Ok(())
    }

    pub fn push(&mut self, item: &Value) -> Result<()> {
        let element = Self::element_from(item)?;
        self.values.push(element);
        Ok(())
    }

    pub fn insert(&mut self, index: usize, item: &Value) -> Result<()> {
        if index > self.values.len() {
            let err = Error::OutOfRange {
                index,
                len: self.values.len(),
            };
            tracing::debug!(error = %err, "rejected element insert");
            return Err(err);
        }
        let element = Self::element_from(item)?;
        self.values.insert(index, element);
        Ok(())
    }

    /// Remove element `index`, returning it as a scalar value.
    pub fn remove_at(&mut self, index: usize) -> Result<Value> {
        check_index(index, self.values.len())?;
        let element = self.values.remove(index);
        Ok(T::scalar_into_value(Scalar::new(element)))
    }

    pub fn remove(&mut self, item: &Value) -> Result<bool> {
        match self.index_of(item)? {
            Some(index) => {
                self.values.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn contains(&self, item: &Value) -> Result<bool> {
        Ok(self.index_of(item)?.is_some())
    }

    pub fn index_of(&self, item: &Value) -> Result<Option<usize>> {
        let probe = T::from_value(item)?;
        Ok(self.values.iter().position(|e| e.same(&probe)))
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    fn element_from(item: &Value) -> Result<T> {
        T::from_value(item).inspect_err(|e| {
            tracing::debug!(target_type = T::PRIMITIVE.type_name(), error = %e, "rejected element")
        })
    }

    // --- Shape ---

    /// The validated `dim` attribute.
    pub fn dims(&self) -> Result<Dims> {
        shape::dims_of(&self.attributes, self.values.len())
    }

    /// Number of dimensions; 1 when there is no usable `dim`.
    pub fn rank(&self) -> usize {
        self.dims().map_or(1, |dims| dims.rank())
    }

    /// Extent along `axis`. Without `dim` the vector is one-dimensional.
    pub fn dim_length(&self, axis: usize) -> Result<usize> {
        if !self.attributes.contains_key(DIM) {
            return if axis == 0 {
                Ok(self.values.len())
            } else {
                Err(Error::OutOfRange { index: axis, len: 1 })
            };
        }
        let dims = self.dims()?;
        dims.as_slice()
            .get(axis)
            .copied()
            .ok_or(Error::OutOfRange {
                index: axis,
                len: dims.rank(),
            })
    }

    /// Element at N-dimensional `coords` as a scalar value.
    pub fn get_at(&self, coords: &[usize]) -> Result<Value> {
        let index = shape::column_major_index(self.dims()?.as_slice(), coords)?;
        self.get(index)
    }

    pub fn get_native_at(&self, coords: &[usize]) -> Result<&T> {
        let index = shape::column_major_index(self.dims()?.as_slice(), coords)?;
        self.get_native(index)
    }

    /// Row-major view of a two-dimensional vector.
    ///
    /// Fails with [`Error::MissingAttribute`] without `dim`, with
    /// [`Error::InvalidShape`] when `dim` does not fit the length, and with
    /// [`Error::RankMismatch`] unless `dim` has exactly two extents.
    pub fn as_matrix(&self) -> Result<Matrix<T>> {
        let dims = self.dims()?;
        let &[rows, cols] = dims.as_slice() else {
            return Err(Error::RankMismatch {
                expected: 2,
                found: dims.rank(),
            });
        };
        Matrix::from_column_major(rows, cols, &self.values)
    }
}

impl<T: Element> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> ValueView for Vector<T> {
    fn kind(&self) -> SexpKind {
        SexpKind::Vector(T::PRIMITIVE)
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn attributes(&self) -> Option<&Attributes> {
        Some(&self.attributes)
    }

    fn is_na(&self) -> Result<bool> {
        match self.values.as_slice() {
            [element] => Ok(element.is_na()),
            other => Err(Error::NotScalar { len: other.len() }),
        }
    }

    fn as_scalar<U: Element>(&self) -> Result<U> {
        single(&self.values)
    }

    fn as_vec<U: Element>(&self) -> Result<Vec<U>> {
        self.values.iter().map(convert).collect()
    }
}

impl<T: Element> ArrayView for Vector<T> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn get(&self, index: usize) -> Result<Value> {
        Vector::get(self, index)
    }

    fn contains(&self, item: &Value) -> Result<bool> {
        Vector::contains(self, item)
    }

    fn index_of(&self, item: &Value) -> Result<Option<usize>> {
        Vector::index_of(self, item)
    }
}

impl<T: Element> ArrayMut for Vector<T> {
    fn set(&mut self, index: usize, item: &Value) -> Result<()> {
        Vector::set(self, index, item)
    }

    fn push(&mut self, item: &Value) -> Result<()> {
        Vector::push(self, item)
    }

    fn insert(&mut self, index: usize, item: &Value) -> Result<()> {
        Vector::insert(self, index, item)
    }

    fn remove_at(&mut self, index: usize) -> Result<Value> {
        Vector::remove_at(self, index)
    }

    fn remove(&mut self, item: &Value) -> Result<bool> {
        Vector::remove(self, item)
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

impl<T: Element> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Vector::from_vec(values)
    }
}

impl<T: Element> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T: Element> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

/// Equal iff the element sequences are; attributes are ignored.
impl<T: Element> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        elements_eq(&self.values, &other.values)
    }
}

impl<T: Element> Eq for Vector<T> {}

impl<T: Element> PartialEq<Scalar<T>> for Vector<T> {
    fn eq(&self, other: &Scalar<T>) -> bool {
        other == self
    }
}

impl<T: Element> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_elements(&self.values, state);
    }
}
