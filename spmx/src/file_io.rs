//! File I/O for matrix text files
//!
//! This module reads and writes the text format defined in
//! [`spmx_core::format`], mapping I/O failures onto [`MatrixError`]. A
//! source that can be read but is not UTF-8 is a format error, not an I/O
//! one.

use spmx_core::{format, FormatIssue, MatrixError, Result, SparseMatrix};
use std::{
    fs,
    io::{Read, Write},
    path::Path,
};

/// Load a matrix from a text file
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| {
        log::debug!("Failed to read {}: {e}", path.display());
        MatrixError::SourceUnavailable
    })?;

    let matrix = format::parse(decode(&bytes)?)?;
    log::debug!(
        "Loaded {}x{} matrix with {} non-zero entries from {}",
        matrix.nrows(),
        matrix.ncols(),
        matrix.nnz(),
        path.display()
    );
    Ok(matrix)
}

/// Read a matrix description from any reader
pub fn read_matrix<R: Read>(mut reader: R) -> Result<SparseMatrix> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        log::debug!("Failed to read matrix source: {e}");
        MatrixError::SourceUnavailable
    })?;
    format::parse(decode(&bytes)?)
}

/// Decode source bytes, reporting the line of the first invalid sequence
fn decode(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        let valid = &bytes[..e.valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
        log::debug!("Matrix source is not UTF-8 at byte {}", e.valid_up_to());
        MatrixError::InvalidFormat {
            line: Some(line),
            issue: FormatIssue::InvalidEncoding,
        }
    })
}

/// Write a matrix description to any writer
pub fn write_matrix<W: Write>(matrix: &SparseMatrix, mut writer: W) -> Result<()> {
    writer
        .write_all(format::serialize(matrix).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| {
            log::debug!("Failed to write matrix: {e}");
            MatrixError::SinkUnavailable
        })
}

/// Save a matrix to a text file, optionally creating missing parent directories
pub fn save_matrix<P: AsRef<Path>>(
    matrix: &SparseMatrix,
    path: P,
    create_dirs: bool,
) -> Result<()> {
    let path = path.as_ref();

    if create_dirs {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                log::debug!("Failed to create {}: {e}", parent.display());
                MatrixError::SinkUnavailable
            })?;
        }
    }

    let file = fs::File::create(path).map_err(|e| {
        log::debug!("Failed to create {}: {e}", path.display());
        MatrixError::SinkUnavailable
    })?;
    write_matrix(matrix, std::io::BufWriter::new(file))?;

    log::debug!(
        "Saved {}x{} matrix with {} non-zero entries to {}",
        matrix.nrows(),
        matrix.ncols(),
        matrix.nnz(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/result.txt");
        let matrix = SparseMatrix::from_entries(4, 2, [(3, 1, 8), (0, 0, -1)]).unwrap();

        save_matrix(&matrix, &path, true).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "rows=4\ncols=2\n(0, 0, -1)\n(3, 1, 8)\n"
        );
        assert_eq!(load_matrix(&path).unwrap(), matrix);
    }

    #[test]
    fn test_save_without_creating_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing/result.txt");
        assert_eq!(
            save_matrix(&SparseMatrix::new(1, 1), &path, false),
            Err(MatrixError::SinkUnavailable)
        );
    }

    #[test]
    fn test_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            load_matrix(dir.path().join("nope.txt")),
            Err(MatrixError::SourceUnavailable)
        );
    }

    #[test]
    fn test_load_propagates_format_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "rows=1\ncols=1\n(0, 0, 1.5)\n").unwrap();
        assert_eq!(
            load_matrix(&path),
            Err(MatrixError::InvalidFormat {
                line: Some(3),
                issue: FormatIssue::FloatingValue
            })
        );
    }

    #[test]
    fn test_invalid_utf8_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"rows=2\ncols=2\n(0, 0, 1)\n# caf\xe9\n").unwrap();

        let err = load_matrix(&path).unwrap_err();
        assert_eq!(
            err,
            MatrixError::InvalidFormat {
                line: Some(4),
                issue: FormatIssue::InvalidEncoding
            }
        );
        assert_eq!(err.category(), spmx_core::ErrorCategory::Format);

        assert_eq!(
            read_matrix(&b"\xffrows=1\ncols=1\n"[..]),
            Err(MatrixError::InvalidFormat {
                line: Some(1),
                issue: FormatIssue::InvalidEncoding
            })
        );
    }

    #[test]
    fn test_reader_and_writer() {
        let matrix = read_matrix("rows=2\ncols=2\n(1, 1, 3)\n".as_bytes()).unwrap();
        let mut out = Vec::new();
        write_matrix(&matrix, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "rows=2\ncols=2\n(1, 1, 3)\n");
    }
}
