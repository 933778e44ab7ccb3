//! In-band missing-value sentinels.
//!
//! R has no out-of-band "missing" flag: each primitive type reserves one of
//! its own values to mean NA. An element is NA iff it equals that value, so
//! these constants must match the protocol bit for bit.

use alloc::string::String;

use crate::Logical;

/// `NA_integer_`: the smallest 32-bit integer.
pub const NA_INTEGER: i32 = i32::MIN;

/// Bit pattern of `NA_real_`: a NaN whose low word is 1954.
pub const NA_REAL_BITS: u64 = 0x7FF0_0000_0000_07A2;

/// `NA_real_`.
pub const NA_REAL: f64 = f64::from_bits(NA_REAL_BITS);

/// `NA_character_`.
///
/// U+FFFF is a Unicode noncharacter, so it never shows up in text received
/// from R. Rserve sends NA strings as a lone `0xFF` byte; the codec maps that
/// byte to and from this constant.
pub const NA_STRING: &str = "\u{FFFF}";

/// A type with a reserved NA value.
pub trait NaSentinel: Sized {
    /// The reserved value.
    fn na() -> Self;

    /// Whether `self` is the reserved value.
    fn is_na(&self) -> bool;
}

impl NaSentinel for i32 {
    fn na() -> Self {
        NA_INTEGER
    }

    fn is_na(&self) -> bool {
        *self == NA_INTEGER
    }
}

impl NaSentinel for f64 {
    fn na() -> Self {
        NA_REAL
    }

    /// Only R's NA payload counts; an ordinary NaN is a value.
    fn is_na(&self) -> bool {
        self.is_nan() && (self.to_bits() & 0xFFFF_FFFF) == 1954
    }
}

impl NaSentinel for String {
    fn na() -> Self {
        String::from(NA_STRING)
    }

    fn is_na(&self) -> bool {
        self == NA_STRING
    }
}

impl NaSentinel for Logical {
    fn na() -> Self {
        Logical::Na
    }

    fn is_na(&self) -> bool {
        *self == Logical::Na
    }
}
