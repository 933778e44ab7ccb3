use core::hash::{Hash, Hasher};

use rsexp_types::{NaSentinel, SexpKind};

use crate::attributes::Attributes;
use crate::dynamic::Value;
use crate::error::Result;
use crate::hash::{elements_eq, hash_elements};
use crate::traits::ValueView;

use super::{Element, Vector, convert, single};

/// A single element of type `T`, possibly its NA sentinel.
///
/// Behaves as a length-1 [`Vector<T>`]: same accessors, same equality and
/// hash. It cannot grow; turn it into a vector with [`Scalar::into_vector`]
/// first.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scalar<T> {
    value: T,
    attributes: Attributes,
}

impl<T: Element> Scalar<T> {
    pub fn new(value: T) -> Self {
        Scalar {
            value,
            attributes: Attributes::new(),
        }
    }

    /// An explicitly missing scalar.
    pub fn na() -> Self {
        Self::new(T::na())
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// The element as a one-element slice, for code generic over scalars and
    /// vectors.
    pub fn as_slice(&self) -> &[T] {
        core::slice::from_ref(&self.value)
    }

    /// Overwrite the element, applying the NA/coercion rule.
    pub fn set(&mut self, value: &Value) -> Result<()> {
        self.value = T::from_value(value)?;
        Ok(())
    }

    pub fn set_native(&mut self, value: T) {
        self.value = value;
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// A length-1 vector holding the element, keeping the attributes.
    pub fn into_vector(self) -> Vector<T> {
        Vector::from_vec(vec![self.value]).with_attributes(self.attributes)
    }
}

impl<T: Element> ValueView for Scalar<T> {
    fn kind(&self) -> SexpKind {
        SexpKind::Scalar(T::PRIMITIVE)
    }

    fn len(&self) -> usize {
        1
    }

    fn attributes(&self) -> Option<&Attributes> {
        Some(&self.attributes)
    }

    fn is_na(&self) -> Result<bool> {
        Ok(self.value.is_na())
    }

    fn as_scalar<U: Element>(&self) -> Result<U> {
        single(self.as_slice())
    }

    fn as_vec<U: Element>(&self) -> Result<Vec<U>> {
        Ok(vec![convert(&self.value)?])
    }
}

impl<T: Element> From<T> for Scalar<T> {
    fn from(value: T) -> Self {
        Scalar::new(value)
    }
}

impl<T: Element> PartialEq for Scalar<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value.same(&other.value)
    }
}

impl<T: Element> Eq for Scalar<T> {}

impl<T: Element> PartialEq<Vector<T>> for Scalar<T> {
    fn eq(&self, other: &Vector<T>) -> bool {
        elements_eq(self.as_slice(), other.as_slice())
    }
}

impl<T: Element> Hash for Scalar<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_elements(self.as_slice(), state);
    }
}
