//! Build a large sparse matrix and save it in the text format

use spmx::{save_matrix, SparseMatrix};
use std::time::Instant;

fn main() -> spmx::Result<()> {
    println!("Writing large sparse matrix...");

    // Dense storage of this shape would not fit in memory
    let nrows = 1_000_000;
    let ncols = 2_000_000;
    let sparse_rows = [10, 50, 100, 500, 900, 5000, 50000, 90000];
    let elements_per_row = 1_000;

    println!("Matrix dimensions: {nrows} x {ncols}");
    println!(
        "Sparse rows: {} rows with {} elements each",
        sparse_rows.len(),
        elements_per_row
    );

    let start = Instant::now();
    let mut matrix = SparseMatrix::new(nrows, ncols);
    for &row in &sparse_rows {
        for i in 0..elements_per_row {
            let col = (i * 1_999) % ncols;
            matrix.set(row, col, (row + i) as i64 % 97 + 1)?;
        }
    }
    println!("Built {} non-zero entries in {:?}", matrix.nnz(), start.elapsed());

    let start = Instant::now();
    save_matrix(&matrix, "example_matrix.txt", true)?;
    println!("Matrix written in {:?}", start.elapsed());
    println!("\nRun 'cargo run --example read_matrix' to read it back!");
    Ok(())
}
