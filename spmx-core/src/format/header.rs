//! Header of the matrix text format
//!
//! Every matrix description starts with two lines declaring its shape:
//!
//! ```text
//! rows=<non-negative integer>
//! cols=<non-negative integer>
//! ```

use super::constants::{COLS_KEY, HEADER_SEPARATOR, ROWS_KEY};
use crate::validation::parse_dimension;
use crate::{FormatIssue, MatrixError, Result};

/// Declared dimensions of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatrixHeader {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl MatrixHeader {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Parse the `rows=` and `cols=` lines
    ///
    /// Each argument is the text of the line together with its 1-based line
    /// number; `None` means the input ended before that line.
    pub fn parse(
        rows_line: Option<(usize, &str)>,
        cols_line: Option<(usize, &str)>,
    ) -> Result<Self> {
        let rows = parse_header_line(ROWS_KEY, rows_line)?;
        let cols = parse_header_line(COLS_KEY, cols_line)?;
        Ok(Self { rows, cols })
    }

    /// Write both header lines, each terminated by a newline
    pub fn write_to<W: core::fmt::Write>(&self, out: &mut W) -> core::fmt::Result {
        writeln!(out, "{ROWS_KEY}{HEADER_SEPARATOR}{}", self.rows)?;
        writeln!(out, "{COLS_KEY}{HEADER_SEPARATOR}{}", self.cols)
    }
}

impl core::fmt::Display for MatrixHeader {
    /// One-line summary, e.g. `rows=3, cols=4`; use [`MatrixHeader::write_to`] for the file form
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{ROWS_KEY}{HEADER_SEPARATOR}{}, {COLS_KEY}{HEADER_SEPARATOR}{}",
            self.rows, self.cols
        )
    }
}

fn parse_header_line(key: &'static str, line: Option<(usize, &str)>) -> Result<usize> {
    let Some((number, text)) = line else {
        return Err(MatrixError::InvalidFormat {
            line: None,
            issue: FormatIssue::MissingHeader(key),
        });
    };

    let malformed = MatrixError::format(number, FormatIssue::MalformedHeader(key));
    let (found_key, value) = text.split_once(HEADER_SEPARATOR).ok_or(malformed)?;
    if found_key.trim() != key {
        return Err(malformed);
    }

    parse_dimension(value).ok_or(malformed)
}
