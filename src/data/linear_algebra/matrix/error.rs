//! # Matrix errors
//!
//! Two kinds of failure exist. An index can be out of range, in which case nothing was modified,
//! or backing storage could not be acquired, in which case the matrix was left as it was before
//! the call.
use std::collections::TryReserveError;

/// Everything that can go wrong when creating or accessing a `DenseMatrix`.
#[derive(thiserror::Error, Debug)]
pub enum MatrixError {
    /// The row index is not below the number of rows.
    #[error("Invalid row index {index}, the matrix has {nr_rows} rows")]
    RowOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of rows of the matrix that was accessed.
        nr_rows: usize,
    },

    /// The row index was valid, but the column index is not below the number of columns.
    #[error("Invalid column index {index}, the matrix has {nr_columns} columns")]
    ColumnOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of columns of the matrix that was accessed.
        nr_columns: usize,
    },

    /// The allocator could not provide storage for all cells.
    #[error("Unable to allocate storage for a {nr_rows} x {nr_columns} matrix")]
    Allocation {
        #[allow(missing_docs)]
        nr_rows: usize,
        #[allow(missing_docs)]
        nr_columns: usize,
        /// Reason given by the allocator.
        #[source]
        source: TryReserveError,
    },

    /// The number of cells doesn't fit in a `usize`.
    #[error("Dimensions {nr_rows} x {nr_columns} exceed the addressable size")]
    DimensionOverflow {
        #[allow(missing_docs)]
        nr_rows: usize,
        #[allow(missing_docs)]
        nr_columns: usize,
    },
}

impl MatrixError {
    /// Whether a row or column index was invalid.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::RowOutOfRange { .. } | Self::ColumnOutOfRange { .. })
    }

    /// Whether storage for the matrix could not be acquired.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::Allocation { .. } | Self::DimensionOverflow { .. })
    }
}

/// Result type of the fallible matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;
