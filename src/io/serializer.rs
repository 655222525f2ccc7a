//! Textual serialization of sparse matrices
//!
//! Produces the same format the parser reads. Entries are written row-major,
//! sorted by `(row, col)`, so output is reproducible byte for byte. There is
//! no trailing newline.

use std::fmt;

use crate::matrix::{Scalar, SparseMatrix};

impl<T: Scalar> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rows={}\ncols={}", self.n_rows(), self.n_cols())?;
        for (coord, value) in self.sorted_entries() {
            write!(f, "\n({}, {}, {})", coord.row, coord.col, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::io::parse;
    use crate::matrix::SparseMatrix;

    #[test]
    fn test_serialize_sorted() {
        let matrix = SparseMatrix::from_triplets(3, 3, vec![(2, 1, -4), (0, 2, 7), (0, 0, 1)]);
        assert_eq!(
            matrix.to_string(),
            "rows=3\ncols=3\n(0, 0, 1)\n(0, 2, 7)\n(2, 1, -4)"
        );
    }

    #[test]
    fn test_serialize_empty() {
        let matrix = SparseMatrix::<i64>::new(4, 2);
        assert_eq!(matrix.to_string(), "rows=4\ncols=2");
    }

    #[test]
    fn test_round_trip() {
        let matrix = SparseMatrix::from_triplets(
            5,
            7,
            vec![(0, 6, 12), (4, 0, -3), (2, 2, 1), (3, 5, 100_000)],
        );
        let reparsed: SparseMatrix<i64> = parse(&matrix.to_string()).unwrap();
        assert_eq!(reparsed, matrix);
    }
}
