//! # Deserialization
//!
//! A serialized matrix is its buffer followed by its dimensions. The buffer length is checked
//! against the dimensions before a `DenseMatrix` is created from it.
use serde::Deserialize;

use crate::data::linear_algebra::matrix::DenseMatrix;

/// Unvalidated form of a `DenseMatrix`, as it is read.
#[derive(Deserialize)]
pub(super) struct RawMatrix<T> {
    data: Vec<T>,
    nr_rows: usize,
    nr_columns: usize,
}

/// The serialized buffer doesn't match the serialized dimensions.
#[derive(thiserror::Error, Debug)]
#[error("Expected {nr_rows} x {nr_columns} cells, found {found}")]
pub struct ShapeMismatch {
    nr_rows: usize,
    nr_columns: usize,
    found: usize,
}

impl<T> TryFrom<RawMatrix<T>> for DenseMatrix<T> {
    type Error = ShapeMismatch;

    fn try_from(raw: RawMatrix<T>) -> Result<Self, Self::Error> {
        let RawMatrix { data, nr_rows, nr_columns } = raw;

        if nr_rows.checked_mul(nr_columns) != Some(data.len()) {
            return Err(ShapeMismatch { nr_rows, nr_columns, found: data.len() });
        }

        Ok(Self { data, nr_rows, nr_columns })
    }
}
