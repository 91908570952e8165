//! Line-oriented text format
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 1)
//! (2, 1, -4)
//! ```
//!
//! A leading byte order mark is skipped. Blank lines are ignored anywhere. Entries may repeat a coordinate, in
//! which case the last one wins; zero values clear the position.

use alloc::string::{String, ToString};

use super::constants::{ENTRY_CLOSE, ENTRY_OPEN, FIELD_SEPARATOR};
use super::header::MatrixHeader;
use crate::validation::{check_signed_index, parse_entry};
use crate::{FormatIssue, MatrixError, Result, SparseMatrix};

/// Parse a matrix from its text description
pub fn parse(source: &str) -> Result<SparseMatrix> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let rows_line = lines.next().ok_or(MatrixError::InvalidFormat {
        line: None,
        issue: FormatIssue::EmptySource,
    })?;
    let header = MatrixHeader::parse(Some(rows_line), lines.next())?;

    let mut matrix = SparseMatrix::new(header.rows, header.cols);
    for (number, line) in lines {
        let (row, col, value) =
            parse_entry(line).map_err(|issue| MatrixError::format(number, issue))?;
        let (row, col) = check_signed_index(row, col, header.rows, header.cols)?;

        if let Some(previous) = matrix.put(row, col, value) {
            log::trace!("line {number}: ({row}, {col}) = {value} replaces {previous}");
        }
    }

    Ok(matrix)
}

/// Write the header and every non-zero entry, ordered by row then column
pub fn write_text<W: core::fmt::Write>(matrix: &SparseMatrix, out: &mut W) -> core::fmt::Result {
    MatrixHeader::new(matrix.nrows(), matrix.ncols()).write_to(out)?;
    for entry in matrix.sorted_entries() {
        writeln!(
            out,
            "{ENTRY_OPEN}{}{FIELD_SEPARATOR} {}{FIELD_SEPARATOR} {}{ENTRY_CLOSE}",
            entry.row, entry.col, entry.value
        )?;
    }
    Ok(())
}

/// Serialize a matrix to its text description
pub fn serialize(matrix: &SparseMatrix) -> String {
    // `Display` for `SparseMatrix` is `write_text`
    matrix.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "rows=3\ncols=4\n(0, 1, 5)\n(2, 3, -7)\n";

    #[test]
    fn test_parse_sample() {
        let m = parse(SAMPLE).unwrap();
        assert_eq!(m.shape(), (3, 4));
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get(0, 1), Ok(5));
        assert_eq!(m.get(2, 3), Ok(-7));
        assert_eq!(m.get(1, 1), Ok(0));
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_blank_lines() {
        let source = "\n  rows = 2 \r\n\ncols=2\r\n\n ( 1 ,0,  9 ) \n\n";
        let m = parse(source).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.get(1, 0), Ok(9));
    }

    #[test]
    fn test_parse_skips_byte_order_mark() {
        let m = parse("\u{feff}rows=2\ncols=2\n(0, 0, 1)\n").unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.get(0, 0), Ok(1));

        // Only a leading mark is skipped
        assert_eq!(
            parse("rows=2\n\u{feff}cols=2\n"),
            Err(MatrixError::format(2, FormatIssue::MalformedHeader("cols")))
        );
    }

    #[test]
    fn test_parse_header_only() {
        let m = parse("rows=0\ncols=0").unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_zero());
    }

    #[test]
    fn test_parse_duplicates_and_zeros() {
        let m = parse("rows=2\ncols=2\n(0, 0, 1)\n(0, 0, 4)\n(1, 1, 3)\n(1, 1, 0)\n(0, 1, 0)").unwrap();
        assert_eq!(m.get(0, 0), Ok(4));
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn test_parse_rejects_floating_values() {
        assert_eq!(
            parse("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2.5)"),
            Err(MatrixError::format(4, FormatIssue::FloatingValue))
        );
    }

    #[test]
    fn test_parse_reports_line_numbers() {
        // Blank lines still count towards the reported line
        assert_eq!(
            parse("rows=2\ncols=2\n\n(0, 0, 1\n"),
            Err(MatrixError::format(4, FormatIssue::MalformedEntry))
        );
        assert_eq!(
            parse("rows=2\ncols=2\n(0, x, 1)"),
            Err(MatrixError::format(3, FormatIssue::NonInteger))
        );
        assert_eq!(
            parse("rows=2\ncols=2\n(0, 1)"),
            Err(MatrixError::format(3, FormatIssue::FieldCount(2)))
        );
    }

    #[test]
    fn test_parse_rejects_out_of_bounds() {
        assert_eq!(
            parse("rows=2\ncols=3\n(2, 0, 1)"),
            Err(MatrixError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
        assert!(matches!(
            parse("rows=2\ncols=3\n(0, -1, 1)"),
            Err(MatrixError::OutOfBounds { col: -1, .. })
        ));
    }

    #[test]
    fn test_parse_header_problems() {
        assert_eq!(
            parse(""),
            Err(MatrixError::InvalidFormat {
                line: None,
                issue: FormatIssue::EmptySource
            })
        );
        assert_eq!(
            parse("\n\n  \n"),
            Err(MatrixError::InvalidFormat {
                line: None,
                issue: FormatIssue::EmptySource
            })
        );
        assert_eq!(
            parse("rows=2\n(0, 0, 1)"),
            Err(MatrixError::format(2, FormatIssue::MalformedHeader("cols")))
        );
        assert_eq!(
            parse("(0, 0, 1)\nrows=2\ncols=2"),
            Err(MatrixError::format(1, FormatIssue::MalformedHeader("rows")))
        );
    }

    #[test]
    fn test_serialize_is_row_major() {
        let m = SparseMatrix::from_entries(3, 3, [(2, 0, 1), (0, 2, -2), (0, 0, 3), (1, 2, 4)])
            .unwrap();
        assert_eq!(
            serialize(&m),
            "rows=3\ncols=3\n(0, 0, 3)\n(0, 2, -2)\n(1, 2, 4)\n(2, 0, 1)\n"
        );
        assert_eq!(m.to_string(), serialize(&m));
    }

    #[test]
    fn test_round_trip() {
        let m = parse(SAMPLE).unwrap();
        assert_eq!(serialize(&m), SAMPLE);
        assert_eq!(parse(&serialize(&m)), Ok(m));

        let empty = SparseMatrix::new(5, 1);
        assert_eq!(parse(&serialize(&empty)), Ok(empty));
    }

    #[test]
    fn test_from_str() {
        let m: SparseMatrix = "rows=1\ncols=1\n(0, 0, 2)".parse().unwrap();
        assert_eq!(m.get(0, 0), Ok(2));
    }
}
