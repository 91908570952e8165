//! Abstract interfaces over sparse matrices

pub mod matrix;

pub use matrix::{MatrixOperations, SparseView};
