use core::fmt;

/// Discriminant of a value.
///
/// Fixed when the value is constructed; only the payload and the attributes of
/// a value change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SexpKind {
    /// R's `NULL`.
    Null,

    /// The untyped missing marker (a bare `NA`).
    Na,

    /// A single element of a primitive type (possibly its NA sentinel).
    Scalar(Primitive),

    /// A homogeneous sequence of a primitive type.
    Vector(Primitive),

    /// A heterogeneous sequence of values (R's generic vector).
    List,
}

impl SexpKind {
    /// The element type of a scalar or vector, `None` for everything else.
    pub fn primitive(self) -> Option<Primitive> {
        match self {
            SexpKind::Scalar(p) | SexpKind::Vector(p) => Some(p),
            SexpKind::Null | SexpKind::Na | SexpKind::List => None,
        }
    }

    /// Whether the kind holds elements of a single primitive type.
    pub fn is_atomic(self) -> bool {
        self.primitive().is_some()
    }

    pub fn is_scalar(self) -> bool {
        matches!(self, SexpKind::Scalar(_) | SexpKind::Na)
    }
}

impl fmt::Display for SexpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SexpKind::Null => write!(f, "NULL"),
            SexpKind::Na => write!(f, "NA"),
            SexpKind::Scalar(p) => write!(f, "{p} scalar"),
            SexpKind::Vector(p) => write!(f, "{p} vector"),
            SexpKind::List => write!(f, "list"),
        }
    }
}

/// Element types of atomic values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    /// 32-bit signed integer (`integer`)
    Int,

    /// IEEE 754 double (`double`)
    Double,

    /// UTF-8 string (`character`)
    Str,

    /// Three-valued boolean (`logical`)
    Logical,
}

impl Primitive {
    /// R's `typeof()` name for the primitive.
    pub const fn type_name(self) -> &'static str {
        match self {
            Primitive::Int => "integer",
            Primitive::Double => "double",
            Primitive::Str => "character",
            Primitive::Logical => "logical",
        }
    }

    /// Salt mixed into hashes so equal element sequences of different types
    /// hash apart.
    pub const fn salt(self) -> u64 {
        match self {
            Primitive::Int => 0x5345_5850_494e_5453,
            Primitive::Double => 0x5345_5850_5245_414c,
            Primitive::Str => 0x5345_5850_5354_5253,
            Primitive::Logical => 0x5345_5850_4c47_4c53,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
