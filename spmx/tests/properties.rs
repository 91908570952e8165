//! Randomized checks of the arithmetic and text format invariants

use rand::{rngs::StdRng, Rng, SeedableRng};
use spmx::{
    add, multiply, parse, serialize, subtract, MatrixError, Operation, SparseMatrix,
};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, density: f64) -> SparseMatrix {
    let mut matrix = SparseMatrix::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen_bool(density) {
                matrix.set(row, col, rng.gen_range(-9..=9)).unwrap();
            }
        }
    }
    matrix
}

fn assert_sparse(matrix: &SparseMatrix) {
    assert!(matrix.iter().all(|e| e.value != 0));
    assert_eq!(matrix.iter().count(), matrix.nnz());
}

#[test]
fn add_and_subtract_match_dense() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let (rows, cols) = (rng.gen_range(0..8), rng.gen_range(0..8));
        let a = random_matrix(&mut rng, rows, cols, 0.3);
        let b = random_matrix(&mut rng, rows, cols, 0.3);

        let sum = add(&a, &b).unwrap();
        let difference = subtract(&a, &b).unwrap();
        assert_sparse(&sum);
        assert_sparse(&difference);

        for row in 0..rows {
            for col in 0..cols {
                let (x, y) = (a.get(row, col).unwrap(), b.get(row, col).unwrap());
                assert_eq!(sum.get(row, col).unwrap(), x + y);
                assert_eq!(difference.get(row, col).unwrap(), x - y);
            }
        }
    }
}

#[test]
fn multiply_matches_dense() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let (r, k, c) = (rng.gen_range(0..7), rng.gen_range(0..7), rng.gen_range(0..7));
        let a = random_matrix(&mut rng, r, k, 0.4);
        let b = random_matrix(&mut rng, k, c, 0.4);

        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.shape(), (r, c));
        assert_sparse(&product);

        for i in 0..r {
            for j in 0..c {
                let expected: i64 = (0..k)
                    .map(|t| a.get(i, t).unwrap() * b.get(t, j).unwrap())
                    .sum();
                assert_eq!(product.get(i, j).unwrap(), expected, "at ({i}, {j})");
            }
        }
    }
}

#[test]
fn additive_identity_and_inverse() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let m = random_matrix(&mut rng, 6, 9, 0.2);
        let zero = SparseMatrix::new(6, 9);
        assert_eq!(add(&m, &zero).unwrap(), m);
        assert!(subtract(&m, &m).unwrap().is_zero());
    }
}

#[test]
fn text_round_trip() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..30 {
        let (rows, cols) = (rng.gen_range(0..10), rng.gen_range(0..10));
        let m = random_matrix(&mut rng, rows, cols, 0.25);
        let text = serialize(&m);
        assert_eq!(parse(&text).unwrap(), m);
        assert_eq!(serialize(&parse(&text).unwrap()), text);
    }
}

#[test]
fn mismatched_shapes_always_fail() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..30 {
        let shapes: [usize; 4] = std::array::from_fn(|_| rng.gen_range(1..6));
        let a = random_matrix(&mut rng, shapes[0], shapes[1], 0.5);
        let b = random_matrix(&mut rng, shapes[2], shapes[3], 0.5);

        for op in Operation::ALL {
            let compatible = match op {
                Operation::Add | Operation::Subtract => a.shape() == b.shape(),
                Operation::Multiply => a.ncols() == b.nrows(),
            };
            match op.apply(&a, &b) {
                Ok(_) => assert!(compatible),
                Err(e) => {
                    assert!(!compatible);
                    assert!(matches!(e, MatrixError::DimensionMismatch { .. }));
                }
            }
        }
    }
}

#[test]
fn large_sparse_matrices_stay_cheap() {
    // Dense storage of these shapes would need far more memory than is available
    let n = 1_000_000_000;
    let a = SparseMatrix::from_entries(n, n, [(0, n - 1, 2), (n - 1, 0, 3)]).unwrap();
    let b = SparseMatrix::from_entries(n, n, [(n - 1, n - 1, 5), (0, 0, 7)]).unwrap();

    let product = multiply(&a, &b).unwrap();
    assert_eq!(product.nnz(), 2);
    assert_eq!(product.get(0, n - 1), Ok(10));
    assert_eq!(product.get(n - 1, 0), Ok(21));

    assert_eq!(add(&a, &b).unwrap().nnz(), 4);
}
