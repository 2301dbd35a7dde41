//! # Traits for elements of a matrix
//!
//! A matrix cell must be creatable without arguments (new cells start out as the default value),
//! and it must be possible to copy cells around when the matrix is copied or filled.

/// Element of a `DenseMatrix`.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Element: Default + Clone {
}
impl<T: Default + Clone> Element for T {
}
