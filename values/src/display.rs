//! Deparse-style rendering of values.
//!
//! `Display` for [`Value`] writes R source that would rebuild the value:
//! `5L`, `c(1, NA, 3)`, `list(a = "x")`, `structure(1:6, dim = ...)` and so
//! on. It is meant for logs and test snapshots; the output is not parsed back.

use core::fmt;

use rsexp_types::{NaSentinel, Primitive};

use crate::attributes::NAMES;
use crate::dynamic::{Contents, List, Value};
use crate::traits::ValueView;
use crate::typed::Element;

/// Options for [`Value::display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Elements written per vector or list before the rest is elided as
    /// `...`. `None` writes everything.
    pub max_elements: Option<usize>,
    /// Whether attributes are written (as `structure(...)` and inline
    /// names). Off, only the elements are shown.
    pub show_attributes: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions::default()
    }
}

impl DisplayOptions {
    pub const fn default() -> Self {
        Self {
            max_elements: Some(99_999),
            show_attributes: true,
        }
    }
}

/// A value paired with display options; see [`Value::display`].
pub struct Deparse<'a> {
    value: &'a Value,
    options: DisplayOptions,
}

impl Value {
    /// Render with explicit options.
    ///
    /// ```
    /// use rsexp_values::display::DisplayOptions;
    /// use rsexp_values::dynamic::Value;
    ///
    /// let v = Value::int_vector(1..=5);
    /// let short = DisplayOptions { max_elements: Some(2), ..Default::default() };
    /// assert_eq!(v.display(short).to_string(), "c(1L, 2L, ...)");
    /// ```
    pub fn display(&self, options: DisplayOptions) -> Deparse<'_> {
        Deparse {
            value: self,
            options,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, &DisplayOptions::default())
    }
}

impl fmt::Display for Deparse<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.value, &self.options)
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, options: &DisplayOptions) -> fmt::Result {
    let attributes = value
        .attributes()
        .filter(|a| options.show_attributes && !a.is_empty());
    let Some(attributes) = attributes else {
        return write_contents(f, value, None, options);
    };

    // Names matching the length are written inline, the rest via structure().
    let names = attributes
        .find(NAMES)
        .and_then(|n| n.as_strings().ok())
        .filter(|n| n.len() == value.len() && !n.is_empty());
    let rest: Vec<_> = attributes
        .iter()
        .filter(|(k, _)| !(names.is_some() && *k == NAMES))
        .collect();

    if rest.is_empty() {
        return write_contents(f, value, names.as_deref(), options);
    }
    f.write_str("structure(")?;
    write_contents(f, value, names.as_deref(), options)?;
    for (name, attribute) in rest {
        f.write_str(", ")?;
        write_name(f, name)?;
        f.write_str(" = ")?;
        write_value(f, attribute, options)?;
    }
    f.write_str(")")
}

fn write_contents(
    f: &mut fmt::Formatter<'_>,
    value: &Value,
    names: Option<&[String]>,
    options: &DisplayOptions,
) -> fmt::Result {
    match value.contents() {
        Contents::Null => f.write_str("NULL"),
        Contents::Na => f.write_str("NA"),
        Contents::Int(elements) => write_atomic(f, elements, names, options),
        Contents::Double(elements) => write_atomic(f, elements, names, options),
        Contents::Str(elements) => write_atomic(f, elements, names, options),
        Contents::Logical(elements) => write_atomic(f, elements, names, options),
        Contents::List(list) => write_list(f, list, names, options),
    }
}

fn write_atomic<T: Element>(
    f: &mut fmt::Formatter<'_>,
    elements: &[T],
    names: Option<&[String]>,
    options: &DisplayOptions,
) -> fmt::Result {
    match (elements, names) {
        ([], _) => write!(f, "{}(0)", empty_constructor(T::PRIMITIVE)),
        ([element], None) if element.is_na() => f.write_str(typed_na(T::PRIMITIVE)),
        ([element], None) => element.deparse(f),
        _ => {
            f.write_str("c(")?;
            write_items(f, elements, names, options, |f, e| e.deparse(f))?;
            f.write_str(")")
        }
    }
}

fn write_list(
    f: &mut fmt::Formatter<'_>,
    list: &List,
    names: Option<&[String]>,
    options: &DisplayOptions,
) -> fmt::Result {
    f.write_str("list(")?;
    write_items(f, list.as_slice(), names, options, |f, v| {
        write_value(f, v, options)
    })?;
    f.write_str(")")
}

fn write_items<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    names: Option<&[String]>,
    options: &DisplayOptions,
    mut write_item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    let limit = options.max_elements.unwrap_or(usize::MAX);
    for (i, item) in items.iter().take(limit).enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        if let Some(name) = names.and_then(|n| n.get(i)).filter(|n| !n.is_empty()) {
            write_name(f, name)?;
            f.write_str(" = ")?;
        }
        write_item(f, item)?;
    }
    if items.len() > limit {
        f.write_str(if limit == 0 { "..." } else { ", ..." })?;
    }
    Ok(())
}

/// Syntactic names are written bare, anything else in backticks.
fn write_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    let mut chars = name.chars();
    let syntactic = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '.')
        && chars.all(|c| c.is_alphanumeric() || c == '.' || c == '_');
    if syntactic {
        f.write_str(name)
    } else {
        write!(f, "`{name}`")
    }
}

fn empty_constructor(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Int => "integer",
        Primitive::Double => "numeric",
        Primitive::Str => "character",
        Primitive::Logical => "logical",
    }
}

fn typed_na(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Int => "NA_integer_",
        Primitive::Double => "NA_real_",
        Primitive::Str => "NA_character_",
        Primitive::Logical => "NA",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(Value::int(5).to_string(), "5L");
        assert_eq!(Value::double(2.5).to_string(), "2.5");
        assert_eq!(Value::str("a\"b").to_string(), r#""a\"b""#);
        assert_eq!(Value::logical(true).to_string(), "TRUE");
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Na.to_string(), "NA");
    }

    #[test]
    fn test_typed_na() {
        assert_eq!(Value::na_of(Primitive::Int).to_string(), "NA_integer_");
        assert_eq!(Value::na_of(Primitive::Double).to_string(), "NA_real_");
        assert_eq!(Value::na_of(Primitive::Str).to_string(), "NA_character_");
        assert_eq!(Value::na_of(Primitive::Logical).to_string(), "NA");
    }

    #[test]
    fn test_empty_vectors() {
        assert_eq!(Value::int_vector([]).to_string(), "integer(0)");
        assert_eq!(Value::double_vector([]).to_string(), "numeric(0)");
        assert_eq!(Value::str_vector(Vec::<String>::new()).to_string(), "character(0)");
    }

    #[test]
    fn test_names() {
        assert_eq!(write_name_to_string("x.1"), "x.1");
        assert_eq!(write_name_to_string("my name"), "`my name`");
        assert_eq!(write_name_to_string("1x"), "`1x`");
    }

    fn write_name_to_string(name: &str) -> String {
        struct Name<'a>(&'a str);
        impl fmt::Display for Name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_name(f, self.0)
            }
        }
        Name(name).to_string()
    }

    #[test]
    fn test_hide_attributes() {
        let mut v = Value::int_vector([1, 2]);
        v.set_attribute("class", Value::str("foo")).unwrap();
        assert_eq!(v.to_string(), r#"structure(c(1L, 2L), class = "foo")"#);
        let plain = DisplayOptions {
            show_attributes: false,
            ..DisplayOptions::default()
        };
        assert_eq!(v.display(plain).to_string(), "c(1L, 2L)");
    }
}
