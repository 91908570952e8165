//! SPMX - Sparse Matrix Arithmetic over Text Files
//!
//! This library loads sparse integer matrices from a line-oriented text
//! format, adds, subtracts and multiplies them, and saves results back.
//!
//! ## Architecture
//!
//! SPMX keeps computation and I/O apart:
//!
//! - **spmx-core**: Matrix storage, arithmetic, text format and validation (no I/O)
//! - **spmx**: File loading/saving, result display and the interactive command layer
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmx::{load_matrix, save_matrix, Operation};
//!
//! fn example() -> spmx::Result<()> {
//!     let left = load_matrix("matrix1.txt")?;
//!     let right = load_matrix("matrix2.txt")?;
//!
//!     let product = Operation::Multiply.apply(&left, &right)?;
//!     println!("{} non-zero entries", product.nnz());
//!     save_matrix(&product, "results/product.txt", true)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Text format
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 1)
//! (1, 2, -4)
//! ```

// Re-export core abstractions and format definitions
pub use spmx_core::{
    // Matrix and operations
    add, multiply, subtract, Entry, Operation, SparseMatrix, UnknownOperation,
    // Access traits
    MatrixOperations, SparseView,
    // Text format
    parse, serialize, MatrixHeader,
    // Error handling
    ErrorCategory, FormatIssue, MatrixError, Result,
};

// Implementation modules
pub mod config;
pub mod display;
pub mod file_io;
pub mod session;

// Public exports
pub use config::SessionConfig;
pub use display::{render, CoordinateMap, DisplayFormat};
pub use file_io::{load_matrix, read_matrix, save_matrix, write_matrix};
pub use session::{Session, SessionOutcome};
