use proptest::prelude::*;

use platnum::{matrix, DenseMatrix, Fraction, MatrixError, FR};

use crate::init_logging;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
enum Tile {
    #[default]
    Air,
    Ground,
    Spike,
}

#[test]
fn level_grid() {
    init_logging();

    let mut level = matrix![
        [Tile::Air, Tile::Air, Tile::Air],
        [Tile::Air, Tile::Spike],
        [Tile::Ground, Tile::Ground, Tile::Ground],
    ].unwrap();
    assert_eq!((level.nr_rows(), level.nr_columns()), (3, 3));
    assert_eq!(level[(1, 2)], Tile::Air);

    level.set(0, 1, Tile::Ground).unwrap();
    let solid = level.rows()
        .flatten()
        .filter(|&&tile| tile == Tile::Ground)
        .count();
    assert_eq!(solid, 4);

    assert!(matches!(level.set(3, 0, Tile::Spike), Err(MatrixError::RowOutOfRange { .. })));
}

#[test]
fn fraction_cells() {
    init_logging();

    let mut m = DenseMatrix::<Fraction<i32>>::new(2, 2).unwrap();
    assert!(!m[(0, 0)].is_valid());

    m.set(1, 1, FR!(1, 2)).unwrap();
    *m.get_mut(1, 1).unwrap() += FR!(1, 3);
    assert_eq!(m.get(1, 1).unwrap().into_parts(), (9, 6));
}

#[test]
fn allocation_failure_is_reported() {
    init_logging();

    let error = DenseMatrix::<u32>::filled(usize::MAX / 8, 2, 0).unwrap_err();
    assert!(error.is_allocation_failure());
    assert!(error.to_string().starts_with("Unable to allocate storage"));
}

proptest! {
    #[test]
    fn dimensions(nr_rows in 0_usize..32, nr_columns in 0_usize..32) {
        let m = DenseMatrix::<i8>::new(nr_rows, nr_columns).unwrap();
        prop_assert_eq!(m.nr_rows(), nr_rows);
        prop_assert_eq!(m.nr_columns(), nr_columns);
        prop_assert_eq!(m.is_empty(), nr_rows == 0);
    }

    #[test]
    fn set_then_get(nr_rows in 1_usize..32, nr_columns in 1_usize..32, row in any::<usize>(), column in any::<usize>(), value in any::<i64>()) {
        let (row, column) = (row % nr_rows, column % nr_columns);
        let mut m = DenseMatrix::new(nr_rows, nr_columns).unwrap();
        m.set(row, column, value).unwrap();
        prop_assert_eq!(*m.get(row, column).unwrap(), value);
        prop_assert_eq!(m[(row, column)], value);
    }

    #[test]
    fn out_of_range(nr_rows in 0_usize..32, nr_columns in 0_usize..32, row in 0_usize..64, column in 0_usize..64) {
        let m = DenseMatrix::filled(nr_rows, nr_columns, 1_u8).unwrap();
        let result = m.get(row, column);
        if row >= nr_rows {
            let is_row_out_of_range = matches!(result, Err(MatrixError::RowOutOfRange { .. }));
            prop_assert!(is_row_out_of_range);
        } else if column >= nr_columns {
            let is_column_out_of_range = matches!(result, Err(MatrixError::ColumnOutOfRange { .. }));
            prop_assert!(is_column_out_of_range);
        } else {
            prop_assert_eq!(result.ok(), Some(&1));
        }
    }

    #[test]
    fn copy_is_independent(nr_rows in 1_usize..16, nr_columns in 1_usize..16, value in any::<i32>()) {
        let original = DenseMatrix::filled(nr_rows, nr_columns, value).unwrap();
        let mut copy = original.try_clone().unwrap();
        for i in 0..nr_rows {
            for j in 0..nr_columns {
                copy[(i, j)] = value.wrapping_add(1);
            }
        }
        prop_assert!(original.rows().flatten().all(|&v| v == value));
    }

    #[test]
    fn take_leaves_empty(nr_rows in 0_usize..16, nr_columns in 0_usize..16) {
        let mut source = DenseMatrix::filled(nr_rows, nr_columns, 'a').unwrap();
        let expected = source.clone();
        let target = source.take();
        prop_assert_eq!(target, expected);
        prop_assert_eq!(source.nr_rows(), 0);
        prop_assert!(source.is_empty());
    }
}

#[cfg(feature = "serde")]
mod serialization {
    use platnum::{matrix, DenseMatrix, FR};

    #[test]
    fn round_trip() {
        let m = matrix![[1, 2], [3]].unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"data":[1,2,3,0],"nr_rows":2,"nr_columns":2}"#);
        assert_eq!(serde_json::from_str::<DenseMatrix<i32>>(&json).unwrap(), m);

        let x = FR!(3, 4);
        assert_eq!(serde_json::to_string(&x).unwrap(), r#"{"numerator":3,"denominator":4}"#);
    }

    #[test]
    fn shape_is_validated() {
        let json = r#"{"data":[1,2,3],"nr_rows":2,"nr_columns":2}"#;
        assert!(serde_json::from_str::<DenseMatrix<i32>>(json).is_err());
    }
}
