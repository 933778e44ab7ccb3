use core::hash::{Hash, Hasher};
use core::slice;

use indexmap::IndexMap;
use rsexp_types::{NA_STRING, SexpKind};

use crate::attributes::{Attributes, NAMES};
use crate::error::{Error, Result, check_index};
use crate::traits::{ArrayMut, ArrayView, ValueView};
use crate::typed::Element;

use super::Value;

/// A generic vector: an ordered sequence of arbitrary values.
///
/// Unlike atomic vectors, a list stores what it is given and never coerces.
/// Element labels live in the `names` attribute, as in R.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct List {
    values: Vec<Value>,
    attributes: Attributes,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        List {
            values: values.into_iter().collect(),
            attributes: Attributes::new(),
        }
    }

    /// A list with a `names` attribute built from `entries`.
    pub fn named<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        let (names, values): (Vec<String>, Vec<Value>) =
            entries.into_iter().map(|(k, v)| (k.into(), v)).unzip();
        let mut list = Self::from_values(values);
        list.attributes.set_names(names);
        list
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
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

    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Value> {
        self.values.iter_mut()
    }

    /// A copy of element `index`.
    pub fn get(&self, index: usize) -> Result<Value> {
        self.get_ref(index).cloned()
    }

    pub fn get_ref(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or(Error::OutOfRange {
            index,
            len: self.values.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Value> {
        let len = self.values.len();
        self.values
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Replace element `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: Value) -> Result<Value> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn insert(&mut self, index: usize, value: Value) -> Result<()> {
        if index > self.values.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.values.len(),
            });
        }
        self.values.insert(index, value);
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Value> {
        check_index(index, self.values.len())?;
        Ok(self.values.remove(index))
    }

    /// Remove the first element equal to `value`.
    pub fn remove(&mut self, value: &Value) -> bool {
        match self.index_of(value) {
            Some(index) => {
                self.values.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.values.contains(value)
    }

    pub fn index_of(&self, value: &Value) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    // --- Names ---

    /// Append `value` labelled `name`.
    ///
    /// A missing or short `names` attribute is first padded with empty
    /// names, so labels stay aligned with elements.
    pub fn push_named(&mut self, name: impl Into<String>, value: Value) {
        let mut names = self.attributes.names().unwrap_or_default();
        names.resize(self.values.len(), String::new());
        names.push(name.into());
        self.values.push(value);
        self.attributes.set_names(names);
    }

    /// The first element labelled `name`.
    pub fn get_by_name(&self, name: &str) -> Option<&Value> {
        let names = self.attributes.names().ok()?;
        names
            .iter()
            .zip(&self.values)
            .find_map(|(n, v)| (n == name).then_some(v))
    }

    /// Labelled elements keyed by name, in order. Unnamed and NA-named
    /// elements are skipped; for repeated names the first one wins.
    pub fn to_map(&self) -> IndexMap<String, Value> {
        let mut map = IndexMap::new();
        let Ok(names) = self.attributes.names() else {
            return map;
        };
        for (name, value) in names.into_iter().zip(&self.values) {
            if name.is_empty() || name == NA_STRING {
                continue;
            }
            map.entry(name).or_insert_with(|| value.clone());
        }
        map
    }

    pub fn has_names(&self) -> bool {
        self.attributes.contains_key(NAMES)
    }
}

/// Scalar accessors see through a single-element list to its element.
impl ValueView for List {
    fn kind(&self) -> SexpKind {
        SexpKind::List
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn attributes(&self) -> Option<&Attributes> {
        Some(&self.attributes)
    }

    fn is_na(&self) -> Result<bool> {
        match self.values.as_slice() {
            [value] => value.is_na(),
            other => Err(Error::NotScalar { len: other.len() }),
        }
    }

    fn as_scalar<T: Element>(&self) -> Result<T> {
        match self.values.as_slice() {
            [value] => value.as_scalar(),
            other => Err(Error::NotScalar { len: other.len() }),
        }
    }

    fn as_vec<T: Element>(&self) -> Result<Vec<T>> {
        self.values.iter().map(T::from_value).collect()
    }
}

impl ArrayView for List {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn get(&self, index: usize) -> Result<Value> {
        List::get(self, index)
    }

    fn contains(&self, item: &Value) -> Result<bool> {
        Ok(List::contains(self, item))
    }

    fn index_of(&self, item: &Value) -> Result<Option<usize>> {
        Ok(List::index_of(self, item))
    }
}

impl ArrayMut for List {
    fn set(&mut self, index: usize, item: &Value) -> Result<()> {
        List::set(self, index, item.clone()).map(drop)
    }

    fn push(&mut self, item: &Value) -> Result<()> {
        List::push(self, item.clone());
        Ok(())
    }

    fn insert(&mut self, index: usize, item: &Value) -> Result<()> {
        List::insert(self, index, item.clone())
    }

    fn remove_at(&mut self, index: usize) -> Result<Value> {
        List::remove_at(self, index)
    }

    fn remove(&mut self, item: &Value) -> Result<bool> {
        Ok(List::remove(self, item))
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        List::from_values(iter)
    }
}

impl Extend<Value> for List {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Element-wise equality; attributes are ignored.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for List {}

impl Hash for List {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(2);
        state.write_usize(self.values.len());
        for value in &self.values {
            value.hash(state);
        }
    }
}
