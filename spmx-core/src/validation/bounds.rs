//! Coordinate and shape validation
//!
//! Pure checks on indices and matrix dimensions, shared by the accessors,
//! the text parser and the arithmetic operations.

use crate::ops::Operation;
use crate::MatrixError;

/// Validate that `(row, col)` lies inside a `rows x cols` matrix
pub fn check_index(row: usize, col: usize, rows: usize, cols: usize) -> Result<(), MatrixError> {
    if row >= rows || col >= cols {
        return Err(MatrixError::out_of_bounds(row, col, rows, cols));
    }
    Ok(())
}

/// Validate a signed coordinate read from text and convert it to indices
///
/// Negative coordinates are reported as out of bounds, like any other
/// coordinate outside `[0, rows) x [0, cols)`.
pub fn check_signed_index(
    row: i64,
    col: i64,
    rows: usize,
    cols: usize,
) -> Result<(usize, usize), MatrixError> {
    let err = MatrixError::OutOfBounds {
        row,
        col,
        rows,
        cols,
    };
    let r = usize::try_from(row).map_err(|_| err)?;
    let c = usize::try_from(col).map_err(|_| err)?;
    if r >= rows || c >= cols {
        return Err(err);
    }
    Ok((r, c))
}

/// Validate that two shapes are identical (addition, subtraction)
pub fn check_same_shape(
    op: Operation,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), MatrixError> {
    if left != right {
        return Err(MatrixError::DimensionMismatch { op, left, right });
    }
    Ok(())
}

/// Validate that `left.cols == right.rows` (multiplication)
pub fn check_inner_dimensions(
    op: Operation,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), MatrixError> {
    if left.1 != right.0 {
        return Err(MatrixError::DimensionMismatch { op, left, right });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(0, 0, 1, 1), Ok(()));
        assert_eq!(check_index(2, 3, 3, 4), Ok(()));

        assert_eq!(
            check_index(3, 0, 3, 4),
            Err(MatrixError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 4
            })
        );
        assert!(check_index(0, 4, 3, 4).is_err());

        // Nothing fits in an empty matrix
        assert!(check_index(0, 0, 0, 0).is_err());
    }

    #[test]
    fn test_check_signed_index() {
        assert_eq!(check_signed_index(1, 2, 2, 3), Ok((1, 2)));
        assert_eq!(
            check_signed_index(-1, 0, 2, 3),
            Err(MatrixError::OutOfBounds {
                row: -1,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
        assert!(check_signed_index(0, -5, 2, 3).is_err());
        assert!(check_signed_index(2, 0, 2, 3).is_err());
    }

    #[test]
    fn test_shape_checks() {
        assert_eq!(check_same_shape(Operation::Add, (2, 3), (2, 3)), Ok(()));
        assert_eq!(
            check_same_shape(Operation::Subtract, (2, 3), (3, 2)),
            Err(MatrixError::DimensionMismatch {
                op: Operation::Subtract,
                left: (2, 3),
                right: (3, 2)
            })
        );

        assert_eq!(
            check_inner_dimensions(Operation::Multiply, (2, 3), (3, 5)),
            Ok(())
        );
        assert!(check_inner_dimensions(Operation::Multiply, (2, 3), (2, 3)).is_err());
    }
}
