//! Conversions between `SparseMatrix` and the sprs crate's compressed formats

use sprs::CsMat;

use crate::matrix::{MatrixError, Scalar, SparseMatrix};

/// Converts a matrix to sprs CSR storage.
///
/// Fails if an entry lies outside the declared shape, since compressed
/// storage cannot represent it.
pub fn to_sprs_csr<T>(matrix: &SparseMatrix<T>) -> Result<CsMat<T>, MatrixError>
where
    T: Scalar + Default,
{
    let entries = matrix.sorted_entries();
    let n_rows = matrix.n_rows();

    // indptr[r] is the position of the first entry in row r or later;
    // rows without entries repeat the next row's start
    let mut indptr = Vec::with_capacity(n_rows + 1);
    indptr.push(0);
    for (position, (coord, _)) in entries.iter().enumerate() {
        matrix.check_bounds(coord.row, coord.col)?;
        while indptr.len() <= coord.row {
            indptr.push(position);
        }
    }
    indptr.resize(n_rows + 1, entries.len());

    // Entries are row-major, so column indices within each row are ascending
    let (indices, data): (Vec<usize>, Vec<T>) = entries
        .into_iter()
        .map(|(coord, value)| (coord.col, value))
        .unzip();

    Ok(CsMat::new((n_rows, matrix.n_cols()), indptr, indices, data))
}

/// Converts an sprs matrix (CSR or CSC) back into a `SparseMatrix`.
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T>(matrix: CsMat<T>) -> SparseMatrix<T>
where
    T: Scalar + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let (n_rows, n_cols) = matrix.shape();
    let mut result = SparseMatrix::new(n_rows, n_cols);

    for (row, row_vec) in matrix.outer_iterator().enumerate() {
        for (col, &value) in row_vec.iter() {
            result.set(row, col, value);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    /// [ 1  0  2 ]
    /// [ 0  0  0 ]
    /// [ 4 -3  0 ]
    fn create_test_matrix() -> SparseMatrix<i64> {
        SparseMatrix::from_triplets(3, 3, vec![(2, 1, -3), (0, 0, 1), (2, 0, 4), (0, 2, 2)])
    }

    #[test]
    fn test_to_sprs_structure() {
        let sprs_mat = to_sprs_csr(&create_test_matrix()).unwrap();

        assert_eq!(sprs_mat.shape(), (3, 3));
        assert_eq!(sprs_mat.nnz(), 4);
        assert_eq!(sprs_mat.indptr().as_slice().unwrap(), &[0, 2, 2, 4]);
        assert_eq!(sprs_mat.indices(), &[0, 2, 0, 1]);
        assert_eq!(sprs_mat.data(), &[1, 2, 4, -3]);
    }

    #[test]
    fn test_to_sprs_leading_and_trailing_empty_rows() {
        let matrix = SparseMatrix::from_triplets(5, 2, vec![(2, 1, 7), (2, 0, 3)]);
        let sprs_mat = to_sprs_csr(&matrix).unwrap();

        assert_eq!(sprs_mat.indptr().as_slice().unwrap(), &[0, 0, 0, 2, 2, 2]);
        assert_eq!(sprs_mat.indices(), &[0, 1]);
        assert_eq!(sprs_mat.data(), &[3, 7]);
    }

    #[test]
    fn test_to_sprs_empty_matrix() {
        let sprs_mat = to_sprs_csr(&SparseMatrix::<i64>::new(3, 3)).unwrap();

        assert_eq!(sprs_mat.nnz(), 0);
        assert_eq!(sprs_mat.indptr().as_slice().unwrap(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_sprs_roundtrip() {
        let original = create_test_matrix();
        let roundtrip = from_sprs(to_sprs_csr(&original).unwrap());
        assert_eq!(roundtrip, original);
    }

    #[test]
    fn test_from_sprs_csc() {
        let original = create_test_matrix();
        let csc = to_sprs_csr(&original).unwrap().to_csc();
        assert_eq!(from_sprs(csc), original);
    }

    #[test]
    fn test_out_of_shape_entry_rejected() {
        let mut matrix = SparseMatrix::<i64>::new(2, 2);
        matrix.set(2, 2, 1);
        assert!(matches!(
            to_sprs_csr(&matrix),
            Err(MatrixError::IndexOutOfBounds { row: 2, col: 2, .. })
        ));
    }
}
