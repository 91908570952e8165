//! Row-indexed sparse integer matrix
//!
//! Non-zero values are stored in a nested map `row -> (col -> value)`.
//! Absent positions are zero, rows without entries are not kept, and no
//! stored value is ever zero.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::traits::{MatrixOperations, SparseView};
use crate::validation::check_index;
use crate::{format, MatrixError, Result};

/// A single non-zero entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: i64,
}

impl From<(usize, usize, i64)> for Entry {
    fn from((row, col, value): (usize, usize, i64)) -> Self {
        Self { row, col, value }
    }
}

/// Sparse matrix of `i64` values with fixed dimensions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: HashMap<usize, HashMap<usize, i64>>,
    nnz: usize,
}

impl SparseMatrix {
    /// Create an all-zero matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
            nnz: 0,
        }
    }

    /// Build a matrix from `(row, col, value)` triples
    ///
    /// Later triples overwrite earlier ones at the same position and zero
    /// values are not stored.
    pub fn from_entries<I, E>(rows: usize, cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        let mut matrix = Self::new(rows, cols);
        for entry in entries {
            let Entry { row, col, value } = entry.into();
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Dimensions as `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored non-zero entries
    pub fn nnz(&self) -> usize {
        self.nnz
    }

    /// True when no entry is stored
    pub fn is_zero(&self) -> bool {
        self.nnz == 0
    }

    /// Value at `(row, col)`, zero when nothing is stored there
    pub fn get(&self, row: usize, col: usize) -> Result<i64> {
        check_index(row, col, self.rows, self.cols)?;
        Ok(self.value_at(row, col))
    }

    /// Store `value` at `(row, col)`; a zero value removes the entry
    pub fn set(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        check_index(row, col, self.rows, self.cols)?;
        self.put(row, col, value);
        Ok(())
    }

    /// True when a non-zero value is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries
            .get(&row)
            .is_some_and(|cols| cols.contains_key(&col))
    }

    /// Iterate over all non-zero entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.entries.iter().flat_map(|(&row, cols)| {
            cols.iter()
                .map(move |(&col, &value)| Entry { row, col, value })
        })
    }

    /// All non-zero entries ordered by row, then column
    pub fn sorted_entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.iter().collect();
        entries.sort_unstable_by_key(|e| (e.row, e.col));
        entries
    }

    /// Non-zero `(col, value)` pairs of one row in unspecified order
    ///
    /// Rows outside the matrix simply yield nothing.
    pub fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.entries
            .get(&row)
            .into_iter()
            .flat_map(|cols| cols.iter().map(|(&col, &value)| (col, value)))
    }

    /// Materialize the matrix as nested row vectors
    ///
    /// Allocates `rows * cols` values; intended for small matrices.
    pub fn to_dense(&self) -> Vec<Vec<i64>> {
        let mut dense = alloc::vec![alloc::vec![0; self.cols]; self.rows];
        for Entry { row, col, value } in self.iter() {
            dense[row][col] = value;
        }
        dense
    }

    /// Value lookup without a bounds check
    pub(crate) fn value_at(&self, row: usize, col: usize) -> i64 {
        self.entries
            .get(&row)
            .and_then(|cols| cols.get(&col))
            .copied()
            .unwrap_or(0)
    }

    /// Rows that hold at least one entry, with their column maps
    pub(crate) fn stored_rows(&self) -> impl Iterator<Item = (usize, &HashMap<usize, i64>)> + '_ {
        self.entries.iter().map(|(&row, cols)| (row, cols))
    }

    pub(crate) fn row_map(&self, row: usize) -> Option<&HashMap<usize, i64>> {
        self.entries.get(&row)
    }

    /// Insert or remove without a bounds check, keeping the sparsity invariant
    ///
    /// Returns the previously stored value, if any.
    pub(crate) fn put(&mut self, row: usize, col: usize, value: i64) -> Option<i64> {
        if value != 0 {
            let previous = self.entries.entry(row).or_default().insert(col, value);
            if previous.is_none() {
                self.nnz += 1;
            }
            return previous;
        }

        let cols = self.entries.get_mut(&row)?;
        let previous = cols.remove(&col);
        if cols.is_empty() {
            self.entries.remove(&row);
        }
        if previous.is_some() {
            self.nnz -= 1;
        }
        previous
    }
}

impl core::fmt::Display for SparseMatrix {
    /// Renders the matrix in the text format accepted by [`format::parse`]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        format::write_text(self, f)
    }
}

impl core::str::FromStr for SparseMatrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        format::parse(s)
    }
}

impl SparseView for SparseMatrix {
    type Element = i64;

    fn get_element(&self, row: usize, col: usize) -> Option<i64> {
        self.entries.get(&row)?.get(&col).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        self.shape()
    }

    fn nnz(&self) -> usize {
        self.nnz
    }
}

impl MatrixOperations for SparseMatrix {
    fn get_row(&self, row_index: usize) -> Vec<(usize, i64)> {
        let mut row: Vec<(usize, i64)> = self.row_entries(row_index).collect();
        row.sort_unstable_by_key(|&(col, _)| col);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, i64)> {
        let mut col: Vec<(usize, i64)> = self
            .stored_rows()
            .filter_map(|(row, cols)| cols.get(&col_index).map(|&value| (row, value)))
            .collect();
        col.sort_unstable_by_key(|&(row, _)| row);
        col
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::{Entry, SparseMatrix};
    use alloc::vec::Vec;
    use serde::ser::SerializeStruct;

    impl serde::Serialize for SparseMatrix {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("SparseMatrix", 3)?;
            state.serialize_field("rows", &self.rows)?;
            state.serialize_field("cols", &self.cols)?;
            state.serialize_field("entries", &self.sorted_entries())?;
            state.end()
        }
    }

    #[derive(serde::Deserialize)]
    struct RawMatrix {
        rows: usize,
        cols: usize,
        #[serde(default)]
        entries: Vec<Entry>,
    }

    impl<'de> serde::Deserialize<'de> for SparseMatrix {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawMatrix::deserialize(deserializer)?;
            SparseMatrix::from_entries(raw.rows, raw.cols, raw.entries)
                .map_err(serde::de::Error::custom)
        }
    }
}
