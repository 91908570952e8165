//! Load a matrix file, inspect it and square it

use spmx::{load_matrix, CoordinateMap, MatrixOperations, Operation};
use std::time::Instant;

fn main() -> spmx::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "example_matrix.txt".to_string());

    let start = Instant::now();
    let matrix = load_matrix(&path)?;
    println!("Loaded {path} in {:?}", start.elapsed());
    println!("Matrix dimensions: {} x {}", matrix.nrows(), matrix.ncols());
    println!("Non-zero elements: {}", matrix.nnz());

    if let Some(first) = matrix.sorted_entries().first() {
        let row = matrix.get_row(first.row);
        println!("Row {} has {} non-zero elements", first.row, row.len());
        for (col, value) in row.iter().take(5) {
            println!("  ({}, {col}) = {value}", first.row);
        }
    }

    if matrix.nrows() == matrix.ncols() {
        let start = Instant::now();
        let square = Operation::Multiply.apply(&matrix, &matrix)?;
        println!(
            "Squared in {:?}: {} non-zero elements",
            start.elapsed(),
            square.nnz()
        );
        if square.nnz() <= 10 {
            println!("{}", CoordinateMap(&square));
        }
    } else {
        println!("Matrix is not square; skipping multiplication");
    }
    Ok(())
}
