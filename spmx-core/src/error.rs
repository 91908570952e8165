//! Error types for sparse matrix operations

use crate::ops::Operation;

/// What was wrong with a line of matrix text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// The source contained no non-blank lines
    EmptySource,
    /// A required header line (`rows=` or `cols=`) is missing
    MissingHeader(&'static str),
    /// A header line has the wrong key or a value that is not a non-negative integer
    MalformedHeader(&'static str),
    /// An entry line is not wrapped in parentheses
    MalformedEntry,
    /// An entry line does not have exactly three fields
    FieldCount(usize),
    /// A row, column or value field is not an integer
    NonInteger,
    /// The value field contains a decimal point
    FloatingValue,
    /// The source bytes are not valid UTF-8
    InvalidEncoding,
}

impl core::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatIssue::EmptySource => write!(f, "input is empty"),
            FormatIssue::MissingHeader(key) => write!(f, "missing `{key}=` header"),
            FormatIssue::MalformedHeader(key) => {
                write!(f, "expected `{key}=<non-negative integer>`")
            }
            FormatIssue::MalformedEntry => write!(f, "expected `(<row>, <col>, <value>)`"),
            FormatIssue::FieldCount(n) => write!(f, "expected 3 fields, found {n}"),
            FormatIssue::NonInteger => write!(f, "field is not an integer"),
            FormatIssue::FloatingValue => write!(f, "floating-point values are not allowed"),
            FormatIssue::InvalidEncoding => write!(f, "text is not valid UTF-8"),
        }
    }
}

/// Errors that can occur while loading, saving or combining matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// The source is missing or could not be read
    SourceUnavailable,
    /// The output could not be created or written
    SinkUnavailable,
    /// Malformed header or entry line
    InvalidFormat {
        /// 1-based line number, when known
        line: Option<usize>,
        issue: FormatIssue,
    },
    /// Coordinate outside the declared dimensions
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
    /// Operand shapes are incompatible with the operation
    DimensionMismatch {
        op: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// An intermediate value does not fit in an `i64`
    Overflow { op: Operation },
}

/// Coarse grouping of [`MatrixError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Format,
    Bounds,
    Shape,
    Arithmetic,
}

impl MatrixError {
    pub(crate) const fn format(line: usize, issue: FormatIssue) -> Self {
        MatrixError::InvalidFormat {
            line: Some(line),
            issue,
        }
    }

    /// Build an out-of-bounds error for an unsigned coordinate
    pub(crate) fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        MatrixError::OutOfBounds {
            row: i64::try_from(row).unwrap_or(i64::MAX),
            col: i64::try_from(col).unwrap_or(i64::MAX),
            rows,
            cols,
        }
    }

    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::SourceUnavailable | MatrixError::SinkUnavailable => ErrorCategory::Io,
            MatrixError::InvalidFormat { .. } => ErrorCategory::Format,
            MatrixError::OutOfBounds { .. } => ErrorCategory::Bounds,
            MatrixError::DimensionMismatch { .. } => ErrorCategory::Shape,
            MatrixError::Overflow { .. } => ErrorCategory::Arithmetic,
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::SourceUnavailable => write!(f, "Matrix source not found or unreadable"),
            MatrixError::SinkUnavailable => write!(f, "Matrix output could not be written"),
            MatrixError::InvalidFormat {
                line: Some(line),
                issue,
            } => write!(f, "Invalid matrix format on line {line}: {issue}"),
            MatrixError::InvalidFormat { line: None, issue } => {
                write!(f, "Invalid matrix format: {issue}")
            }
            MatrixError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Index ({row}, {col}) out of bounds for a {rows}x{cols} matrix"
            ),
            MatrixError::DimensionMismatch { op, left, right } => write!(
                f,
                "Cannot apply {} to {}x{} and {}x{} matrices",
                op.name(),
                left.0,
                left.1,
                right.0,
                right.1
            ),
            MatrixError::Overflow { op } => {
                write!(f, "Integer overflow during {}", op.name())
            }
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
