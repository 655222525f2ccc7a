//! Property-based tests for the arithmetic identities and the text format

use proptest::prelude::*;
use sparse_arith::{parse, MatrixError, SparseMatrix};

const MAX_DIM: usize = 6;

/// Random matrix of the given shape with small values (zeros included, so
/// suppression is exercised while building)
fn sparse_matrix(n_rows: usize, n_cols: usize) -> impl Strategy<Value = SparseMatrix> {
    prop::collection::vec((0..n_rows, 0..n_cols, -20i64..20), 0..=n_rows * n_cols)
        .prop_map(move |triplets| SparseMatrix::from_triplets(n_rows, n_cols, triplets))
}

fn shape() -> impl Strategy<Value = (usize, usize)> {
    (1..=MAX_DIM, 1..=MAX_DIM)
}

fn same_shape_pair() -> impl Strategy<Value = (SparseMatrix, SparseMatrix)> {
    shape().prop_flat_map(|(r, c)| (sparse_matrix(r, c), sparse_matrix(r, c)))
}

fn multipliable_pair() -> impl Strategy<Value = (SparseMatrix, SparseMatrix)> {
    (1..=MAX_DIM, 1..=MAX_DIM, 1..=MAX_DIM)
        .prop_flat_map(|(m, k, n)| (sparse_matrix(m, k), sparse_matrix(k, n)))
}

fn any_matrix() -> impl Strategy<Value = SparseMatrix> {
    shape().prop_flat_map(|(r, c)| sparse_matrix(r, c))
}

proptest! {
    #[test]
    fn no_stored_zeros(matrix in any_matrix()) {
        prop_assert!(matrix.iter().all(|(_, value)| value != 0));
    }

    #[test]
    fn set_zero_clears_entry(mut matrix in any_matrix(), r in 0..MAX_DIM, c in 0..MAX_DIM) {
        matrix.set(r, c, 0);
        prop_assert_eq!(matrix.get(r, c), 0);
        prop_assert!(!matrix.contains(r, c));
    }

    #[test]
    fn addition_is_elementwise((a, b) in same_shape_pair()) {
        let sum = a.add(&b).unwrap();
        prop_assert_eq!(sum.shape(), a.shape());
        for r in 0..a.n_rows() {
            for c in 0..a.n_cols() {
                prop_assert_eq!(sum.get(r, c), a.get(r, c) + b.get(r, c));
            }
        }
        prop_assert!(sum.iter().all(|(_, value)| value != 0));
    }

    #[test]
    fn addition_commutes((a, b) in same_shape_pair()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn subtraction_is_elementwise((a, b) in same_shape_pair()) {
        let difference = a.subtract(&b).unwrap();
        for r in 0..a.n_rows() {
            for c in 0..a.n_cols() {
                prop_assert_eq!(difference.get(r, c), a.get(r, c) - b.get(r, c));
            }
        }
        prop_assert!(difference.iter().all(|(_, value)| value != 0));
    }

    #[test]
    fn adding_the_negation_cancels(a in any_matrix()) {
        let empty = SparseMatrix::new(a.n_rows(), a.n_cols());
        let negated = empty.subtract(&a).unwrap();
        prop_assert!(a.add(&negated).unwrap().is_empty());
    }

    #[test]
    fn multiplication_matches_dense_product((a, b) in multipliable_pair()) {
        let product = a.multiply(&b).unwrap();
        prop_assert_eq!(product.shape(), (a.n_rows(), b.n_cols()));

        let dense = a.to_dense().unwrap().dot(&b.to_dense().unwrap());
        prop_assert_eq!(product.to_dense().unwrap(), dense);

        for r in 0..a.n_rows() {
            for c in 0..b.n_cols() {
                let expected: i64 = (0..a.n_cols()).map(|k| a.get(r, k) * b.get(k, c)).sum();
                prop_assert_eq!(product.get(r, c), expected);
            }
        }
    }

    #[test]
    fn mismatched_shapes_are_rejected(a in any_matrix(), b in any_matrix()) {
        if a.shape() != b.shape() {
            let is_mismatch = matches!(a.add(&b), Err(MatrixError::DimensionMismatch { .. }));
            prop_assert!(is_mismatch);
            let is_mismatch = matches!(a.subtract(&b), Err(MatrixError::DimensionMismatch { .. }));
            prop_assert!(is_mismatch);
        }
        if a.n_cols() != b.n_rows() {
            let is_mismatch = matches!(a.multiply(&b), Err(MatrixError::DimensionMismatch { .. }));
            prop_assert!(is_mismatch);
        }
    }

    #[test]
    fn text_round_trip(matrix in any_matrix()) {
        let reparsed: SparseMatrix = parse(&matrix.to_string()).unwrap();
        prop_assert_eq!(reparsed, matrix);
    }
}
