//! Attribute maps.
//!
//! Every value except `NULL` and the bare NA marker owns an [`Attributes`]
//! map from name to [`Value`]. Attributes are metadata: they never take part
//! in value equality, and the only ones the model interprets are the reserved
//! names below, and only when a shape or label accessor asks for them.

use indexmap::IndexMap;
use rsexp_types::{Primitive, SexpKind};

use crate::dynamic::{List, Value};
use crate::error::{Error, Result};
use crate::shape::Dims;
use crate::traits::ValueView;

/// Shape of an array (`c(rows, cols, ...)`).
pub const DIM: &str = "dim";

/// Element labels.
pub const NAMES: &str = "names";

/// S3 class vector.
pub const CLASS: &str = "class";

/// Per-dimension labels: a list with one entry (a character vector or
/// `NULL`) per dimension.
pub const DIMNAMES: &str = "dimnames";

/// Name → value metadata attached to a value.
///
/// Names are unique. Enumeration follows insertion order; overwriting a name
/// keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    entries: IndexMap<String, Value>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an attribute, failing with [`Error::MissingAttribute`].
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.entries
            .get(name)
            .ok_or_else(|| Error::missing_attribute(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Value> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| Error::missing_attribute(name))
    }

    /// Look up an attribute without treating absence as an error.
    pub fn find(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Set an attribute, returning the value it replaced.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let name = name.into();
        let previous = self.entries.insert(name, value);
        if previous.is_some() {
            tracing::trace!("attribute overwritten");
        }
        previous
    }

    /// Remove an attribute, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.shift_remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    // --- Reserved attributes ---

    /// The `names` attribute as strings.
    pub fn names(&self) -> Result<Vec<String>> {
        self.get(NAMES)?.as_strings()
    }

    pub fn set_names<S: Into<String>>(&mut self, names: impl IntoIterator<Item = S>) {
        self.set(NAMES, Value::str_vector(names));
    }

    /// The `class` attribute as strings.
    pub fn class(&self) -> Result<Vec<String>> {
        self.get(CLASS)?.as_strings()
    }

    pub fn set_class<S: Into<String>>(&mut self, classes: impl IntoIterator<Item = S>) {
        self.set(CLASS, Value::str_vector(classes));
    }

    /// Whether `class` lists `name`.
    pub fn inherits(&self, name: &str) -> bool {
        self.class().is_ok_and(|classes| classes.iter().any(|c| c == name))
    }

    /// The parsed `dim` attribute.
    ///
    /// Only the attribute itself is validated here; whether it fits the
    /// owner's length is checked by the shape accessors.
    pub fn dim(&self) -> Result<Dims> {
        Dims::from_value(self.get(DIM)?)
    }

    /// Store `dim`. Fails with [`Error::InvalidShape`] for an empty slice or an
    /// extent beyond the integer range.
    pub fn set_dim(&mut self, dims: &[usize]) -> Result<()> {
        if dims.is_empty() {
            return Err(Error::invalid_shape("no dimensions"));
        }
        let value = Dims::from_slice(dims).to_value()?;
        self.set(DIM, value);
        Ok(())
    }

    /// Row labels from `dimnames`; `None` when that component is `NULL`.
    pub fn row_names(&self) -> Result<Option<Vec<String>>> {
        self.dimnames_component(0)
    }

    /// Column labels from `dimnames`; `None` when that component is `NULL`.
    pub fn col_names(&self) -> Result<Option<Vec<String>>> {
        self.dimnames_component(1)
    }

    /// Set `dimnames` for a two-dimensional value.
    pub fn set_dimnames(&mut self, rows: Option<Vec<String>>, cols: Option<Vec<String>>) {
        let component = |labels: Option<Vec<String>>| match labels {
            Some(labels) => Value::str_vector(labels),
            None => Value::Null,
        };
        let list = List::from_values([component(rows), component(cols)]);
        self.set(DIMNAMES, Value::List(list));
    }

    fn dimnames_component(&self, axis: usize) -> Result<Option<Vec<String>>> {
        let dimnames = self.get(DIMNAMES)?;
        let Value::List(list) = dimnames else {
            return Err(Error::Coercion {
                from: dimnames.kind(),
                to: Primitive::Str,
                detail: "`dimnames` must be a list".into(),
            });
        };
        match list.get_ref(axis)? {
            Value::Null => Ok(None),
            labels => labels.as_strings().map(Some),
        }
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Attributes {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// The kind reported for values that cannot carry attributes.
pub(crate) fn unsupported(kind: SexpKind) -> Error {
    Error::Unsupported {
        operation: "attribute mutation",
        kind,
    }
}
