//! Element types of atomic values and the coercions between them.
//!
//! `Element` plays the role `Marshal` plays for typed arrays: it ties a Rust
//! type (`i32`, `f64`, `String`, [`Logical`]) to the [`Value`] variants that
//! store it, and defines how an element of one primitive converts into
//! another.
//!
//! # Coercion table
//!
//! | from \ to | int | double | string | logical |
//! |---|---|---|---|---|
//! | int | identity | exact | decimal | `!= 0` |
//! | double | integral and in range | identity | R style | NaN → NA, else `!= 0` |
//! | string | parse | parse | identity | `TRUE`/`T`/`true`/`True`, ... |
//! | logical | 0/1 | 0.0/1.0 | `TRUE`/`FALSE` | identity |
//!
//! NA never reaches these conversions: callers map NA to the target's NA
//! (array coercion) or fail with [`Error::NotAvailable`] (scalar accessors).

use core::fmt::{self, Debug};
use core::hash::Hasher;

use rsexp_types::{Logical, NaSentinel, Primitive, SexpKind};

use crate::dynamic::Value;
use crate::error::{Error, Result};
use crate::traits::ValueView;

use super::{Scalar, Vector};

/// A primitive element type.
///
/// Implemented for exactly the four element types R transmits; the trait is
/// sealed.
pub trait Element: NaSentinel + Clone + Debug + Send + Sync + 'static + sealed::Sealed {
    const PRIMITIVE: Primitive;

    // --- Storage ---

    /// Borrow the elements of a scalar or vector of this type.
    fn slice_of(value: &Value) -> Option<&[Self]>;

    fn vector_of(value: &Value) -> Option<&Vector<Self>>;

    fn vector_of_mut(value: &mut Value) -> Option<&mut Vector<Self>>;

    fn scalar_into_value(scalar: Scalar<Self>) -> Value;

    fn vector_into_value(vector: Vector<Self>) -> Value;

    // --- Conversions (never called on NA) ---

    fn to_int(&self) -> Result<i32>;

    fn to_double(&self) -> Result<f64>;

    fn to_text(&self) -> Result<String>;

    fn to_logical(&self) -> Result<Logical>;

    /// Convert a non-NA element of another type into this type.
    fn coerce_from<S: Element>(source: &S) -> Result<Self>;

    // --- Identity ---

    /// Element equality. NA equals NA.
    fn same(&self, other: &Self) -> bool;

    /// Hash consistent with [`Element::same`].
    fn hash_element<H: Hasher>(&self, state: &mut H);

    /// Write the element the way R deparses it inside `c(...)`.
    fn deparse(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    // --- Provided ---

    /// Store a value through the generic interface: NA becomes the sentinel,
    /// anything else goes through this type's scalar accessor.
    fn from_value(value: &Value) -> Result<Self> {
        if value.is_na()? {
            Ok(Self::na())
        } else {
            value.as_scalar::<Self>()
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for f64 {}
    impl Sealed for String {}
    impl Sealed for rsexp_types::Logical {}
}

/// Element-wise conversion preserving NA.
pub(crate) fn convert<S: Element, T: Element>(source: &S) -> Result<T> {
    if source.is_na() {
        Ok(T::na())
    } else {
        T::coerce_from(source)
    }
}

/// The single element of `elements` as a `T`.
///
/// Fails with [`Error::NotScalar`] unless there is exactly one element and
/// with [`Error::NotAvailable`] if that element is NA.
pub(crate) fn single<S: Element, T: Element>(elements: &[S]) -> Result<T> {
    let [element] = elements else {
        return Err(Error::NotScalar {
            len: elements.len(),
        });
    };
    if element.is_na() {
        return Err(Error::NotAvailable);
    }
    T::coerce_from(element)
}

fn not_representable<S: Element>(to: Primitive, detail: impl Into<String>) -> Error {
    Error::coercion(SexpKind::Scalar(S::PRIMITIVE), to, detail)
}

/// Format a double the way `as.character` does.
///
/// At most 15 significant digits are kept. Fixed notation is used unless the
/// scientific form (`1e+05`, `2.5e-07`) is strictly narrower.
pub(crate) fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Inf".into() } else { "-Inf".into() };
    }
    if value == 0.0 {
        return "0".into();
    }

    // Rounded to 15 significant digits: `d.dddddddddddddde<exp>`.
    let rounded = format!("{:.14e}", value.abs());
    let (mantissa, exponent) = rounded.split_once('e').unwrap_or((&rounded, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
    let significant = mantissa.chars().filter(char::is_ascii_digit).count() as i32;
    let sign = if value < 0.0 { "-" } else { "" };

    let decimals = (significant - exponent - 1).max(0);
    let fixed_width = if exponent >= 0 {
        exponent + 1 + if decimals > 0 { decimals + 1 } else { 0 }
    } else {
        2 + decimals
    };
    let exponent_width = if exponent.abs() >= 100 { 5 } else { 4 };
    let sci_width = significant + i32::from(significant > 1) + exponent_width;

    if fixed_width <= sci_width {
        format!("{sign}{:.*}", decimals as usize, value.abs())
    } else {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{sign}{mantissa}e{exp_sign}{:02}", exponent.abs())
    }
}

fn parse_logical(text: &str) -> Option<bool> {
    match text {
        "TRUE" | "true" | "True" | "T" => Some(true),
        "FALSE" | "false" | "False" | "F" => Some(false),
        _ => None,
    }
}

// =============================================================================
// i32 (integer)
// =============================================================================

impl Element for i32 {
    const PRIMITIVE: Primitive = Primitive::Int;

    fn slice_of(value: &Value) -> Option<&[Self]> {
        match value {
            Value::Int(s) => Some(s.as_slice()),
            Value::IntVector(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn vector_of(value: &Value) -> Option<&Vector<Self>> {
        match value {
            Value::IntVector(v) => Some(v),
            _ => None,
        }
    }

    fn vector_of_mut(value: &mut Value) -> Option<&mut Vector<Self>> {
        match value {
            Value::IntVector(v) => Some(v),
            _ => None,
        }
    }

    fn scalar_into_value(scalar: Scalar<Self>) -> Value {
        Value::Int(scalar)
    }

    fn vector_into_value(vector: Vector<Self>) -> Value {
        Value::IntVector(vector)
    }

    fn to_int(&self) -> Result<i32> {
        Ok(*self)
    }

    fn to_double(&self) -> Result<f64> {
        Ok(f64::from(*self))
    }

    fn to_text(&self) -> Result<String> {
        Ok(self.to_string())
    }

    fn to_logical(&self) -> Result<Logical> {
        Ok(Logical::from(*self != 0))
    }

    fn coerce_from<S: Element>(source: &S) -> Result<Self> {
        source.to_int()
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_element<H: Hasher>(&self, state: &mut H) {
        state.write_i32(*self);
    }

    fn deparse(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_na() {
            f.write_str("NA")
        } else {
            write!(f, "{self}L")
        }
    }
}

// =============================================================================
// f64 (double)
// =============================================================================

impl Element for f64 {
    const PRIMITIVE: Primitive = Primitive::Double;

    fn slice_of(value: &Value) -> Option<&[Self]> {
        match value {
            Value::Double(s) => Some(s.as_slice()),
            Value::DoubleVector(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn vector_of(value: &Value) -> Option<&Vector<Self>> {
        match value {
            Value::DoubleVector(v) => Some(v),
            _ => None,
        }
    }

    fn vector_of_mut(value: &mut Value) -> Option<&mut Vector<Self>> {
        match value {
            Value::DoubleVector(v) => Some(v),
            _ => None,
        }
    }

    fn scalar_into_value(scalar: Scalar<Self>) -> Value {
        Value::Double(scalar)
    }

    fn vector_into_value(vector: Vector<Self>) -> Value {
        Value::DoubleVector(vector)
    }

    fn to_int(&self) -> Result<i32> {
        let value = *self;
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(not_representable::<f64>(
                Primitive::Int,
                format!("{} is not an integer", format_double(value)),
            ));
        }
        // i32::MIN is NA_integer_ and cannot hold a real value.
        if value <= f64::from(i32::MIN) || value > f64::from(i32::MAX) {
            return Err(not_representable::<f64>(
                Primitive::Int,
                format!("{} is outside the integer range", format_double(value)),
            ));
        }
        Ok(value as i32)
    }

    fn to_double(&self) -> Result<f64> {
        Ok(*self)
    }

    fn to_text(&self) -> Result<String> {
        Ok(format_double(*self))
    }

    fn to_logical(&self) -> Result<Logical> {
        if self.is_nan() {
            Ok(Logical::Na)
        } else {
            Ok(Logical::from(*self != 0.0))
        }
    }

    fn coerce_from<S: Element>(source: &S) -> Result<Self> {
        source.to_double()
    }

    /// NA equals NA and any other NaN equals any other NaN, but NA and NaN
    /// differ. `0.0` equals `-0.0`.
    fn same(&self, other: &Self) -> bool {
        match (self.is_na(), other.is_na()) {
            (true, true) => true,
            (false, false) => self == other || (self.is_nan() && other.is_nan()),
            _ => false,
        }
    }

    fn hash_element<H: Hasher>(&self, state: &mut H) {
        if self.is_na() {
            state.write_u8(1);
        } else if self.is_nan() {
            state.write_u8(2);
        } else if *self == 0.0 {
            state.write_u64(0.0f64.to_bits());
        } else {
            state.write_u64(self.to_bits());
        }
    }

    fn deparse(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_na() {
            f.write_str("NA")
        } else {
            f.write_str(&format_double(*self))
        }
    }
}

// =============================================================================
// String (character)
// =============================================================================

impl Element for String {
    const PRIMITIVE: Primitive = Primitive::Str;

    fn slice_of(value: &Value) -> Option<&[Self]> {
        match value {
            Value::Str(s) => Some(s.as_slice()),
            Value::StrVector(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn vector_of(value: &Value) -> Option<&Vector<Self>> {
        match value {
            Value::StrVector(v) => Some(v),
            _ => None,
        }
    }

    fn vector_of_mut(value: &mut Value) -> Option<&mut Vector<Self>> {
        match value {
            Value::StrVector(v) => Some(v),
            _ => None,
        }
    }

    fn scalar_into_value(scalar: Scalar<Self>) -> Value {
        Value::Str(scalar)
    }

    fn vector_into_value(vector: Vector<Self>) -> Value {
        Value::StrVector(vector)
    }

    fn to_int(&self) -> Result<i32> {
        match self.trim().parse::<i32>() {
            Ok(value) if !value.is_na() => Ok(value),
            _ => Err(not_representable::<String>(
                Primitive::Int,
                format!("{self:?} is not an integer"),
            )),
        }
    }

    fn to_double(&self) -> Result<f64> {
        let text = self.trim();
        let parsed = match text {
            "Inf" => Ok(f64::INFINITY),
            "-Inf" => Ok(f64::NEG_INFINITY),
            _ => text.parse::<f64>(),
        };
        match parsed {
            Ok(value) if !value.is_na() => Ok(value),
            _ => Err(not_representable::<String>(
                Primitive::Double,
                format!("{self:?} is not a number"),
            )),
        }
    }

    fn to_text(&self) -> Result<String> {
        Ok(self.clone())
    }

    fn to_logical(&self) -> Result<Logical> {
        parse_logical(self.trim())
            .map(Logical::from)
            .ok_or_else(|| {
                not_representable::<String>(
                    Primitive::Logical,
                    format!("{self:?} is not a logical"),
                )
            })
    }

    fn coerce_from<S: Element>(source: &S) -> Result<Self> {
        source.to_text()
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_element<H: Hasher>(&self, state: &mut H) {
        state.write(self.as_bytes());
        state.write_u8(0xff);
    }

    fn deparse(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_na() {
            f.write_str("NA")
        } else {
            write!(f, "{self:?}")
        }
    }
}

// =============================================================================
// Logical
// =============================================================================

impl Element for Logical {
    const PRIMITIVE: Primitive = Primitive::Logical;

    fn slice_of(value: &Value) -> Option<&[Self]> {
        match value {
            Value::Logical(s) => Some(s.as_slice()),
            Value::LogicalVector(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn vector_of(value: &Value) -> Option<&Vector<Self>> {
        match value {
            Value::LogicalVector(v) => Some(v),
            _ => None,
        }
    }

    fn vector_of_mut(value: &mut Value) -> Option<&mut Vector<Self>> {
        match value {
            Value::LogicalVector(v) => Some(v),
            _ => None,
        }
    }

    fn scalar_into_value(scalar: Scalar<Self>) -> Value {
        Value::Logical(scalar)
    }

    fn vector_into_value(vector: Vector<Self>) -> Value {
        Value::LogicalVector(vector)
    }

    fn to_int(&self) -> Result<i32> {
        Ok(i32::from(*self == Logical::True))
    }

    fn to_double(&self) -> Result<f64> {
        Ok(if *self == Logical::True { 1.0 } else { 0.0 })
    }

    fn to_text(&self) -> Result<String> {
        Ok(self.to_string())
    }

    fn to_logical(&self) -> Result<Logical> {
        Ok(*self)
    }

    fn coerce_from<S: Element>(source: &S) -> Result<Self> {
        source.to_logical()
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_element<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.to_byte());
    }

    fn deparse(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_double() {
        assert_eq!(format_double(1.0), "1");
        assert_eq!(format_double(-3.0), "-3");
        assert_eq!(format_double(1.5), "1.5");
        assert_eq!(format_double(0.0), "0");
        assert_eq!(format_double(1e20), "1e+20");
        assert_eq!(format_double(2.5e-7), "2.5e-07");
        assert_eq!(format_double(1e-300), "1e-300");
        assert_eq!(format_double(-1.25e-5), "-1.25e-05");
        assert_eq!(format_double(0.1 + 0.2), "0.3");
        assert_eq!(format_double(1.0 / 3.0), "0.333333333333333");
        assert_eq!(format_double(100000.0), "1e+05");
        assert_eq!(format_double(123456.0), "123456");
        assert_eq!(format_double(10000.0), "10000");
        assert_eq!(format_double(0.0001), "1e-04");
        assert_eq!(format_double(0.00012), "0.00012");
        assert_eq!(format_double(100000.5), "100000.5");
        assert_eq!(format_double(f64::INFINITY), "Inf");
        assert_eq!(format_double(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_double(f64::NAN), "NaN");
    }

    #[test]
    fn test_double_to_int() {
        assert_eq!(2.0f64.to_int(), Ok(2));
        assert_eq!((-7.0f64).to_int(), Ok(-7));
        assert!(2.5f64.to_int().is_err());
        assert!(f64::INFINITY.to_int().is_err());
        assert!(f64::NAN.to_int().is_err());
        assert!(3e9f64.to_int().is_err());
        assert!(f64::from(i32::MIN).to_int().is_err());
        assert_eq!(f64::from(i32::MAX).to_int(), Ok(i32::MAX));
    }

    #[test]
    fn test_string_parsing() {
        assert_eq!(String::from(" 42 ").to_int(), Ok(42));
        assert!(String::from("4.2").to_int().is_err());
        assert!(String::from("-2147483648").to_int().is_err());
        assert_eq!(String::from("4.25").to_double(), Ok(4.25));
        assert_eq!(String::from("-Inf").to_double(), Ok(f64::NEG_INFINITY));
        assert_eq!(String::from("T").to_logical(), Ok(Logical::True));
        assert_eq!(String::from("false").to_logical(), Ok(Logical::False));
        assert!(String::from("yes").to_logical().is_err());
    }

    #[test]
    fn test_convert_preserves_na() {
        assert!(convert::<i32, f64>(&i32::na()).unwrap().is_na());
        assert!(convert::<f64, String>(&f64::na()).unwrap().is_na());
        assert_eq!(convert::<String, Logical>(&String::na()), Ok(Logical::Na));
        assert_eq!(convert::<Logical, i32>(&Logical::True), Ok(1));
    }

    #[test]
    fn test_single() {
        assert_eq!(single::<i32, f64>(&[4]), Ok(4.0));
        assert_eq!(single::<i32, i32>(&[1, 2]), Err(Error::NotScalar { len: 2 }));
        assert_eq!(single::<i32, i32>(&[]), Err(Error::NotScalar { len: 0 }));
        assert_eq!(single::<i32, i32>(&[i32::na()]), Err(Error::NotAvailable));
    }

    #[test]
    fn test_double_identity() {
        assert!(f64::na().same(&f64::na()));
        assert!(f64::NAN.same(&f64::NAN));
        assert!(!f64::na().same(&f64::NAN));
        assert!(0.0f64.same(&-0.0));
        assert!(!1.0f64.same(&2.0));
    }
}
