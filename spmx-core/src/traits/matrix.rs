//! Read-only matrix access traits
//!
//! These traits describe how a sparse matrix is queried, independently of
//! how its non-zero entries are stored.

use alloc::vec::Vec;

/// Core sparse matrix trait for storage-agnostic access
pub trait SparseView {
    /// The element type stored in this matrix
    type Element: Copy + PartialEq;

    /// Get a stored element at the specified position
    ///
    /// Returns `None` if the element is zero (not stored) or if the
    /// position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column extraction
pub trait MatrixOperations: SparseView {
    /// Get all non-zero `(col, value)` pairs in a row, in column order
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Get all non-zero `(row, value)` pairs in a column, in row order
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
