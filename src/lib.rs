//! # Numeric containers for a 2D platformer
//!
//! Two independent building blocks: a fraction type that keeps a numerator and denominator apart
//! and only evaluates to floating point on demand, and a dense, resizable matrix that owns its
//! storage exclusively.
#![warn(missing_docs)]

pub mod data;

pub use data::linear_algebra::matrix::{DenseMatrix, MatrixError, MatrixResult};
pub use data::number_types::fraction::Fraction;
