/// Build a `DenseMatrix` from rows of cell values.
///
/// Rows may have different lengths, see `DenseMatrix::from_rows`. Evaluates to a `MatrixResult`.
///
/// ```
/// let grid = platnum::matrix![[1, 2, 3], [4]].unwrap();
/// assert_eq!(grid.nr_columns(), 3);
/// assert_eq!(grid[(1, 2)], 0);
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($value:expr),* $(,)?]),+ $(,)?) => {
        $crate::DenseMatrix::from_rows(&[$(::std::vec![$($value),*]),+])
    };
}
