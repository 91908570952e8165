#![no_std]

//! SPMX Core - Sparse Integer Matrix Storage and Arithmetic
//!
//! This crate provides the sparse matrix type, the three binary operations
//! over it, and the line-oriented text format used to describe matrices.
//! It performs no I/O; loading from and saving to files lives in `spmx`.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{parse, serialize, MatrixHeader};
pub use matrix::{Entry, SparseMatrix};
pub use ops::{add, multiply, subtract, Operation, UnknownOperation};
pub use traits::{MatrixOperations, SparseView};
