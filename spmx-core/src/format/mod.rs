//! Text format for sparse matrices
//!
//! This module contains the header and entry syntax of the line-oriented
//! matrix description, along with parsing and serialization over `&str`
//! and [`core::fmt::Write`]. Reading and writing files is left to callers.

pub mod constants;
pub mod header;
pub mod text;

// Re-export format definitions
pub use header::MatrixHeader;
pub use text::{parse, serialize, write_text};
