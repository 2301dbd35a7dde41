//! # Dense matrix
//!
//! A rectangular grid of cells, stored row-major in a single contiguous buffer. The matrix owns
//! that buffer exclusively: copies are deep and moving a matrix out with `DenseMatrix::take`
//! leaves an empty matrix behind.
//!
//! Storage is acquired fallibly. When the allocator can't provide enough memory, the operation
//! returns `MatrixError::Allocation` and the matrix it was called on keeps its previous contents.
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use itertools::Itertools;
use log::{trace, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use error::{MatrixError, MatrixResult};

use crate::data::linear_algebra::traits::Element;

mod error;
mod macros;
#[cfg(feature = "serde")]
mod serialize;

/// Uses a `Vec` as underlying data structure, of length `nr_rows * nr_columns`.
///
/// Indices start at `0`. A matrix without rows is empty, even if it has a nonzero number of
/// columns.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "serialize::RawMatrix<T>"))]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<T> DenseMatrix<T> {
    /// Create a matrix without rows, columns or storage.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            nr_rows: 0,
            nr_columns: 0,
        }
    }

    /// Acquire (but don't fill) the storage for a matrix of the given dimensions.
    ///
    /// # Return value
    ///
    /// An empty `Vec` with capacity for exactly `nr_rows * nr_columns` cells, or an error if that
    /// product overflows or the allocator refuses.
    fn allocate(nr_rows: usize, nr_columns: usize) -> MatrixResult<Vec<T>> {
        let Some(len) = nr_rows.checked_mul(nr_columns) else {
            warn!("Dimensions {} x {} overflow, not allocating", nr_rows, nr_columns);
            return Err(MatrixError::DimensionOverflow { nr_rows, nr_columns });
        };

        trace!("Allocating storage for a {} x {} matrix", nr_rows, nr_columns);
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|source| {
            warn!("Allocation for a {} x {} matrix failed: {}", nr_rows, nr_columns, source);
            MatrixError::Allocation { nr_rows, nr_columns, source }
        })?;

        Ok(data)
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.nr_rows == 0
    }

    /// Number of cells stored.
    ///
    /// Always equal to `nr_rows() * nr_columns()`, also for a matrix with rows but no columns.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Validate a position and compute its offset in the buffer.
    ///
    /// The row is checked before the column.
    fn offset(&self, row: usize, column: usize) -> MatrixResult<usize> {
        if row >= self.nr_rows {
            return Err(MatrixError::RowOutOfRange { index: row, nr_rows: self.nr_rows });
        }
        if column >= self.nr_columns {
            return Err(MatrixError::ColumnOutOfRange { index: column, nr_columns: self.nr_columns });
        }

        Ok(row * self.nr_columns + column)
    }

    /// Get a reference to the cell at (`row`, `column`).
    ///
    /// # Errors
    ///
    /// `RowOutOfRange` or `ColumnOutOfRange` if the position is outside of the matrix.
    pub fn get(&self, row: usize, column: usize) -> MatrixResult<&T> {
        let offset = self.offset(row, column)?;
        Ok(&self.data[offset])
    }

    /// Get a mutable reference to the cell at (`row`, `column`).
    ///
    /// # Errors
    ///
    /// `RowOutOfRange` or `ColumnOutOfRange` if the position is outside of the matrix.
    pub fn get_mut(&mut self, row: usize, column: usize) -> MatrixResult<&mut T> {
        let offset = self.offset(row, column)?;
        Ok(&mut self.data[offset])
    }

    /// Overwrite the cell at (`row`, `column`).
    ///
    /// # Errors
    ///
    /// `RowOutOfRange` or `ColumnOutOfRange` if the position is outside of the matrix. The matrix
    /// is not modified in that case.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> MatrixResult<()> {
        *self.get_mut(row, column)? = value;
        Ok(())
    }

    /// All cells in row `i`.
    ///
    /// # Errors
    ///
    /// `RowOutOfRange` if there is no such row.
    pub fn row(&self, i: usize) -> MatrixResult<&[T]> {
        if i >= self.nr_rows {
            return Err(MatrixError::RowOutOfRange { index: i, nr_rows: self.nr_rows });
        }

        Ok(self.row_slice(i))
    }

    fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    fn row_slice_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    /// Iterate over the rows, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.nr_rows).map(move |i| self.row_slice(i))
    }

    /// Move the contents out of this matrix.
    ///
    /// # Return value
    ///
    /// A matrix owning the storage and dimensions this matrix had. This matrix is left empty, with
    /// zero rows, zero columns and no storage.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T: Element> DenseMatrix<T> {
    /// Create a matrix with every cell set to the default value of the element type.
    ///
    /// # Errors
    ///
    /// `Allocation` or `DimensionOverflow` if storage can't be acquired.
    pub fn new(nr_rows: usize, nr_columns: usize) -> MatrixResult<Self> {
        let mut data = Self::allocate(nr_rows, nr_columns)?;
        data.resize_with(nr_rows * nr_columns, T::default);

        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Create a matrix with every cell a copy of `value`.
    ///
    /// # Errors
    ///
    /// `Allocation` or `DimensionOverflow` if storage can't be acquired.
    pub fn filled(nr_rows: usize, nr_columns: usize, value: T) -> MatrixResult<Self> {
        let mut data = Self::allocate(nr_rows, nr_columns)?;
        data.resize(nr_rows * nr_columns, value);

        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Create a matrix from a list of rows that may differ in length.
    ///
    /// The number of columns is the length of the longest row. Shorter rows are left-aligned, the
    /// cells to the right of them hold the default value.
    ///
    /// # Arguments
    ///
    /// * `rows`: Cell values, row by row.
    ///
    /// # Errors
    ///
    /// `Allocation` or `DimensionOverflow` if storage can't be acquired.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> MatrixResult<Self> {
        let nr_columns = rows.iter()
            .map(|row| row.as_ref().len())
            .max()
            .unwrap_or(0);

        let mut matrix = Self::new(rows.len(), nr_columns)?;
        for (i, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            matrix.row_slice_mut(i)[..values.len()].clone_from_slice(values);
        }

        Ok(matrix)
    }

    /// Replace the contents of this matrix with a list of rows, see `DenseMatrix::from_rows`.
    ///
    /// # Errors
    ///
    /// `Allocation` or `DimensionOverflow` if storage can't be acquired. This matrix is unchanged
    /// in that case.
    pub fn assign_rows<R: AsRef<[T]>>(&mut self, rows: &[R]) -> MatrixResult<()> {
        self.replace_with(Self::from_rows(rows))
    }

    /// Resize this matrix and set every cell to `value`, see `DenseMatrix::filled`.
    ///
    /// # Errors
    ///
    /// `Allocation` or `DimensionOverflow` if storage can't be acquired. This matrix is unchanged
    /// in that case.
    pub fn assign_filled(&mut self, nr_rows: usize, nr_columns: usize, value: T) -> MatrixResult<()> {
        self.replace_with(Self::filled(nr_rows, nr_columns, value))
    }

    /// Deep copy that reports allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// `Allocation` if storage for the copy can't be acquired.
    pub fn try_clone(&self) -> MatrixResult<Self> {
        let mut data = Self::allocate(self.nr_rows, self.nr_columns)?;
        data.extend_from_slice(&self.data);

        Ok(Self { data, nr_rows: self.nr_rows, nr_columns: self.nr_columns })
    }

    /// Make this matrix a deep copy of `other`.
    ///
    /// # Errors
    ///
    /// `Allocation` if storage for the copy can't be acquired. This matrix is unchanged in that
    /// case.
    pub fn assign_from(&mut self, other: &Self) -> MatrixResult<()> {
        self.replace_with(other.try_clone())
    }

    /// Swap in a fully built replacement, or leave this matrix as it is on error.
    ///
    /// Every assignment goes through here.
    fn replace_with(&mut self, replacement: MatrixResult<Self>) -> MatrixResult<()> {
        *self = replacement?;
        Ok(())
    }
}

impl<T> Default for DenseMatrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    /// Unchecked in release builds: an out of range column silently reads from another row.
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        &self.data[row * self.nr_columns + column]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        &mut self.data[row * self.nr_columns + column]
    }
}

impl<T: fmt::Display> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
