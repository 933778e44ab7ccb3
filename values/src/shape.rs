//! Shape reinterpretation of flat sequences.
//!
//! R stores every array flat, in column-major order (first dimension varies
//! fastest), and records the shape in the `dim` attribute. Nothing here owns
//! data: these helpers compute index mappings over a flat sequence and a
//! [`Dims`] read from the attribute, so shape has a single source of truth.
//!
//! For `dim = c(d0, d1, d2, ...)` the element at `(i0, i1, i2, ...)` lives at
//! flat index `i0 + d0*i1 + d0*d1*i2 + ...`.

use core::fmt;
use core::ops::Index;

use smallvec::SmallVec;

use crate::attributes::Attributes;
use crate::dynamic::Value;
use crate::error::{Error, Result};
use crate::traits::ValueView;

/// Array extents, one per dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dims(SmallVec<[usize; 4]>);

impl Dims {
    pub fn from_slice(dims: &[usize]) -> Self {
        Dims(SmallVec::from_slice(dims))
    }

    /// Parse a `dim` attribute value: a non-empty vector of non-negative,
    /// non-NA integers (doubles holding integers are accepted).
    pub fn from_value(value: &Value) -> Result<Self> {
        let raw = value
            .as_ints()
            .map_err(|e| Error::invalid_shape(format!("not an integer vector ({e})")))?;
        if raw.is_empty() {
            return Err(Error::invalid_shape("no dimensions"));
        }
        raw.iter()
            .map(|&d| {
                usize::try_from(d)
                    .map_err(|_| Error::invalid_shape(format!("extent {d} is negative or NA")))
            })
            .collect::<Result<SmallVec<_>>>()
            .map(Dims)
    }

    /// The `dim` attribute value for these extents.
    pub fn to_value(&self) -> Result<Value> {
        let extents = self
            .0
            .iter()
            .map(|&d| {
                i32::try_from(d)
                    .map_err(|_| Error::invalid_shape(format!("extent {d} exceeds integer range")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Value::int_vector(extents))
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of elements an array of this shape holds. `None` on overflow.
    pub fn element_count(&self) -> Option<usize> {
        element_count(&self.0)
    }

    /// Fails with [`Error::InvalidShape`] unless the extents multiply to `len`.
    pub fn check_len(&self, len: usize) -> Result<()> {
        match self.element_count() {
            Some(count) if count == len => Ok(()),
            _ => {
                tracing::debug!(dims = ?self.0, len, "dim attribute does not match length");
                Err(Error::invalid_shape(format!(
                    "extents {self} do not multiply to length {len}"
                )))
            }
        }
    }

    /// Fails with [`Error::RankMismatch`] unless the rank is `expected`.
    pub fn check_rank(&self, expected: usize) -> Result<()> {
        if self.rank() == expected {
            Ok(())
        } else {
            Err(Error::RankMismatch {
                expected,
                found: self.rank(),
            })
        }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" x ")?;
            }
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Dims of a value of length `len` carrying `attributes`.
///
/// Fails with [`Error::MissingAttribute`] without `dim` and with
/// [`Error::InvalidShape`] when `dim` is malformed or does not fit `len`.
pub fn dims_of(attributes: &Attributes, len: usize) -> Result<Dims> {
    let dims = attributes.dim()?;
    dims.check_len(len)?;
    Ok(dims)
}

/// Flat index of `coords` in a column-major array of shape `dims`.
pub fn column_major_index(dims: &[usize], coords: &[usize]) -> Result<usize> {
    if coords.len() != dims.len() {
        return Err(Error::RankMismatch {
            expected: dims.len(),
            found: coords.len(),
        });
    }
    if let Some((&coord, &extent)) = coords.iter().zip(dims).find(|(c, e)| c >= e) {
        return Err(Error::OutOfRange {
            index: coord,
            len: extent,
        });
    }
    // Every coordinate is in bounds, so no extent is zero and the index stays
    // below the element count.
    element_count(dims).ok_or_else(|| overflow(dims))?;
    let mut index = 0;
    let mut stride = 1;
    for (&coord, &extent) in coords.iter().zip(dims) {
        index += coord * stride;
        stride *= extent;
    }
    Ok(index)
}

/// Coordinates of flat index `index` in a column-major array of shape `dims`.
pub fn unravel(dims: &[usize], index: usize) -> Result<SmallVec<[usize; 4]>> {
    let len = element_count(dims).ok_or_else(|| overflow(dims))?;
    if index >= len {
        return Err(Error::OutOfRange { index, len });
    }
    let mut rest = index;
    Ok(dims
        .iter()
        .map(|&extent| {
            let coord = rest % extent;
            rest /= extent;
            coord
        })
        .collect())
}

/// Product of `dims`; any zero extent makes it zero even if a prefix overflows.
fn element_count(dims: &[usize]) -> Option<usize> {
    if dims.contains(&0) {
        return Some(0);
    }
    dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

fn overflow(dims: &[usize]) -> Error {
    Error::invalid_shape(format!(
        "extents {} overflow the index range",
        Dims::from_slice(dims)
    ))
}

// =============================================================================
// Matrix
// =============================================================================

/// A two-dimensional array in row-major order.
///
/// This is the reconstructed view handed out by `as_matrix`; the value it came
/// from keeps its own column-major storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Build from row-major data.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::invalid_shape(format!(
                "{rows} x {cols} matrix cannot hold {} elements",
                data.len()
            )));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Build from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(Error::invalid_shape(format!(
                "ragged rows: expected {cols} columns, found {}",
                bad.len()
            )));
        }
        let row_count = rows.len();
        Ok(Matrix {
            rows: row_count,
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Build from R's column-major layout: `(r, c)` is `flat[c * rows + r]`.
    pub fn from_column_major(rows: usize, cols: usize, flat: &[T]) -> Result<Self> {
        if rows.checked_mul(cols) != Some(flat.len()) {
            return Err(Error::invalid_shape(format!(
                "{rows} x {cols} matrix cannot hold {} elements",
                flat.len()
            )));
        }
        let mut data = Vec::with_capacity(flat.len());
        for r in 0..rows {
            for c in 0..cols {
                data.push(flat[c * rows + r].clone());
            }
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Flatten back into column-major order.
    pub fn to_column_major(&self) -> Vec<T> {
        let mut flat = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                flat.push(self.data[r * self.cols + c].clone());
            }
        }
        flat
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            Some(&self.data[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(move |r| &self.data[r * self.cols..(r + 1) * self.cols])
    }

    pub fn as_row_major(&self) -> &[T] {
        &self.data
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        let cols = self.cols;
        if cols == 0 {
            return (0..self.rows).map(|_| Vec::new()).collect();
        }
        let mut rows = Vec::with_capacity(self.rows);
        let mut data = self.data.into_iter();
        for _ in 0..self.rows {
            rows.push(data.by_ref().take(cols).collect());
        }
        rows
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({row}, {col}) out of bounds for {} x {}",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}
