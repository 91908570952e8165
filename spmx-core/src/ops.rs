//! Sparse matrix arithmetic
//!
//! All operations read two operands and build a fresh result; operands are
//! never modified. Work is proportional to the number of stored entries,
//! never to `rows * cols`.

use hashbrown::HashMap;

use crate::validation::{check_inner_dimensions, check_same_shape};
use crate::{MatrixError, Result, SparseMatrix};

/// Binary operation selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// Every operation, in menu order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Lower-case noun used in messages, e.g. "addition"
    pub const fn name(&self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        }
    }

    /// Apply the operation to `left` and `right`
    pub fn apply(self, left: &SparseMatrix, right: &SparseMatrix) -> Result<SparseMatrix> {
        let result = match self {
            Operation::Add => add(left, right),
            Operation::Subtract => subtract(left, right),
            Operation::Multiply => multiply(left, right),
        }?;

        log::debug!(
            "{}: {:?} with {:?} -> {:?}, {} non-zero entries",
            self.name(),
            left.shape(),
            right.shape(),
            result.shape(),
            result.nnz()
        );
        Ok(result)
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
        };
        write!(f, "{label}")
    }
}

/// Error returned when an operation name is not recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOperation;

impl core::fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "expected one of: add, subtract, multiply (or 1, 2, 3)")
    }
}

impl core::error::Error for UnknownOperation {}

impl core::str::FromStr for Operation {
    type Err = UnknownOperation;

    /// Accepts names, short names, symbols and menu numbers, ignoring case
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let s = s.trim();
        let matches = |options: &[&str]| options.iter().any(|o| o.eq_ignore_ascii_case(s));

        if matches(&["add", "addition", "+", "1"]) {
            Ok(Operation::Add)
        } else if matches(&["subtract", "subtraction", "sub", "-", "2"]) {
            Ok(Operation::Subtract)
        } else if matches(&["multiply", "multiplication", "mul", "*", "3"]) {
            Ok(Operation::Multiply)
        } else {
            Err(UnknownOperation)
        }
    }
}

/// Element-wise sum of two matrices of the same shape
pub fn add(left: &SparseMatrix, right: &SparseMatrix) -> Result<SparseMatrix> {
    check_same_shape(Operation::Add, left.shape(), right.shape())?;
    merge(Operation::Add, left, right, i64::checked_add)
}

/// Element-wise difference `left - right` of two matrices of the same shape
pub fn subtract(left: &SparseMatrix, right: &SparseMatrix) -> Result<SparseMatrix> {
    check_same_shape(Operation::Subtract, left.shape(), right.shape())?;
    merge(Operation::Subtract, left, right, i64::checked_sub)
}

/// Merge the entry sets of two equally shaped matrices
///
/// Visits the union of stored positions once: every entry of `left`, then
/// the entries of `right` that `left` does not hold.
fn merge(
    op: Operation,
    left: &SparseMatrix,
    right: &SparseMatrix,
    combine: fn(i64, i64) -> Option<i64>,
) -> Result<SparseMatrix> {
    let mut result = SparseMatrix::new(left.nrows(), left.ncols());

    for entry in left.iter() {
        let other = right.value_at(entry.row, entry.col);
        let value = combine(entry.value, other).ok_or(MatrixError::Overflow { op })?;
        result.put(entry.row, entry.col, value);
    }

    for entry in right.iter() {
        if left.contains(entry.row, entry.col) {
            continue;
        }
        let value = combine(0, entry.value).ok_or(MatrixError::Overflow { op })?;
        result.put(entry.row, entry.col, value);
    }

    Ok(result)
}

/// Matrix product `left * right`
///
/// For every stored `left[i][k]`, walks row `k` of `right` and accumulates
/// `left[i][k] * right[k][j]` into output row `i`. Rows are accumulated in
/// `i128` so the result does not depend on summation order; only the final
/// value has to fit in an `i64`.
pub fn multiply(left: &SparseMatrix, right: &SparseMatrix) -> Result<SparseMatrix> {
    let op = Operation::Multiply;
    check_inner_dimensions(op, left.shape(), right.shape())?;

    let mut result = SparseMatrix::new(left.nrows(), right.ncols());
    let mut accumulator: HashMap<usize, i128> = HashMap::new();

    for (i, left_row) in left.stored_rows() {
        accumulator.clear();

        for (&k, &a) in left_row {
            let Some(right_row) = right.row_map(k) else {
                continue;
            };
            for (&j, &b) in right_row {
                let sum = accumulator.entry(j).or_insert(0);
                *sum = sum
                    .checked_add(i128::from(a) * i128::from(b))
                    .ok_or(MatrixError::Overflow { op })?;
            }
        }

        for (j, sum) in accumulator.drain() {
            let value = i64::try_from(sum).map_err(|_| MatrixError::Overflow { op })?;
            result.put(i, j, value);
        }
    }

    Ok(result)
}

impl SparseMatrix {
    /// Element-wise sum, see [`add`]
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        add(self, other)
    }

    /// Element-wise difference, see [`subtract`]
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        subtract(self, other)
    }

    /// Matrix product, see [`multiply`]
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        multiply(self, other)
    }
}
