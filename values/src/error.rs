//! Errors raised by value operations.
//!
//! Every failure is scoped to the call that raised it. Mutating operations
//! check everything before writing, so a value is never left half-modified.

use miette::Diagnostic;
use rsexp_types::{Primitive, SexpKind};
use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum Error {
    #[diagnostic(code(rsexp::out_of_range))]
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[diagnostic(
        code(rsexp::not_scalar),
        help("only values of length 1 convert to a scalar; index the value first")
    )]
    #[error("expected a value of length 1, found length {len}")]
    NotScalar { len: usize },

    #[diagnostic(
        code(rsexp::not_available),
        help("check `is_na()` before reading the value")
    )]
    #[error("value is NA")]
    NotAvailable,

    #[diagnostic(code(rsexp::coercion))]
    #[error("cannot coerce {from} to {to}: {detail}")]
    Coercion {
        from: SexpKind,
        to: Primitive,
        detail: String,
    },

    #[diagnostic(code(rsexp::missing_attribute))]
    #[error("no such attribute `{name}`")]
    MissingAttribute { name: String },

    #[diagnostic(code(rsexp::rank_mismatch))]
    #[error("expected rank {expected}, found rank {found}")]
    RankMismatch { expected: usize, found: usize },

    #[diagnostic(
        code(rsexp::invalid_shape),
        help("`dim` must be a non-negative integer vector whose product is the length")
    )]
    #[error("invalid `dim` attribute: {reason}")]
    InvalidShape { reason: String },

    #[diagnostic(code(rsexp::unsupported))]
    #[error("{operation} is not supported on {kind}")]
    Unsupported {
        operation: &'static str,
        kind: SexpKind,
    },
}

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    OutOfRange,
    Coercion,
    MissingAttribute,
    RankMismatch,
    InvalidShape,
    Unsupported,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::NotScalar { .. } | Error::NotAvailable | Error::Coercion { .. } => {
                ErrorKind::Coercion
            }
            Error::MissingAttribute { .. } => ErrorKind::MissingAttribute,
            Error::RankMismatch { .. } => ErrorKind::RankMismatch,
            Error::InvalidShape { .. } => ErrorKind::InvalidShape,
            Error::Unsupported { .. } => ErrorKind::Unsupported,
        }
    }

    pub(crate) fn coercion(from: SexpKind, to: Primitive, detail: impl Into<String>) -> Self {
        Error::Coercion {
            from,
            to,
            detail: detail.into(),
        }
    }

    pub(crate) fn missing_attribute(name: impl Into<String>) -> Self {
        Error::MissingAttribute { name: name.into() }
    }

    pub(crate) fn invalid_shape(reason: impl Into<String>) -> Self {
        Error::InvalidShape {
            reason: reason.into(),
        }
    }
}

/// Fails with [`Error::OutOfRange`] unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::OutOfRange { index, len })
    }
}
