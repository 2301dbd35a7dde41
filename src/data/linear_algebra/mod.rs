//! # Linear algebra primitives
//!
//! Dense two dimensional storage. The level grid and any other rectangular data in the game is
//! kept in a `DenseMatrix`.

pub mod matrix;
pub mod traits;
