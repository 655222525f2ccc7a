//! Coordinate-map sparse matrix

use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;

use ndarray::Array2;

use crate::matrix::{MatrixError, Scalar};

/// Position of an entry inside a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A sparse matrix storing only its non-zero entries, keyed by coordinate
///
/// The dimensions are fixed at construction. Every mutation goes through
/// [`set`](Self::set), which drops zeros, so the map never holds a zero value
/// and any absent coordinate reads as zero.
///
/// Element access is permissive: coordinates outside the declared shape are
/// neither rejected by `get` nor by `set`. Use [`get_checked`](Self::get_checked)
/// and [`set_checked`](Self::set_checked) to enforce bounds.
#[derive(Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    n_rows: usize,
    n_cols: usize,
    entries: HashMap<Coord, T>,
}

impl<T: Scalar> SparseMatrix<T> {
    /// Creates an empty matrix with the given dimensions
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            entries: HashMap::new(),
        }
    }

    /// Builds a matrix from `(row, col, value)` triplets.
    ///
    /// Triplets are applied in order through [`set`](Self::set): later ones
    /// overwrite earlier ones at the same coordinate and zeros are dropped.
    pub fn from_triplets<I>(n_rows: usize, n_cols: usize, triplets: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(n_rows, n_cols);
        for (row, col, value) in triplets {
            matrix.set(row, col, value);
        }
        matrix
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        Self::from_triplets(n, n, (0..n).map(|i| (i, i, T::one())))
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns `(n_rows, n_cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns the number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a non-zero value is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&Coord::new(row, col))
    }

    /// Returns the value at `(row, col)`, or zero if nothing is stored there
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries
            .get(&Coord::new(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Stores `value` at `(row, col)`; a zero value removes the entry instead
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let coord = Coord::new(row, col);
        if value.is_zero() {
            self.entries.remove(&coord);
        } else {
            self.entries.insert(coord, value);
        }
    }

    /// Like [`get`](Self::get), but rejects coordinates outside the shape
    pub fn get_checked(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.check_bounds(row, col)?;
        Ok(self.get(row, col))
    }

    /// Like [`set`](Self::set), but rejects coordinates outside the shape
    pub fn set_checked(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        self.check_bounds(row, col)?;
        self.set(row, col, value);
        Ok(())
    }

    /// Whether every stored coordinate lies inside the declared shape
    pub fn is_within_bounds(&self) -> bool {
        self.entries.keys().all(|c| self.in_bounds(c.row, c.col))
    }

    /// Iterates over stored entries in storage order (unspecified)
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns the stored entries sorted row-major by `(row, col)`
    pub fn sorted_entries(&self) -> Vec<(Coord, T)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(coord, _)| coord);
        entries
    }

    /// Materializes the matrix as a dense array
    pub fn to_dense(&self) -> Result<Array2<T>, MatrixError> {
        let mut dense = Array2::zeros((self.n_rows, self.n_cols));
        for (coord, value) in self.iter() {
            self.check_bounds(coord.row, coord.col)?;
            dense[[coord.row, coord.col]] = value;
        }
        Ok(dense)
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.n_rows && col < self.n_cols
    }

    pub(crate) fn check_bounds(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if self.in_bounds(row, col) {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                shape: self.shape(),
            })
        }
    }
}

/// Iterator over the stored entries of a [`SparseMatrix`]
pub struct Iter<'a, T> {
    inner: hash_map::Iter<'a, Coord, T>,
}

impl<'a, T: Copy> Iterator for Iter<'a, T> {
    type Item = (Coord, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&coord, &value)| (coord, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: Copy> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Scalar> IntoIterator for &'a SparseMatrix<T> {
    type Item = (Coord, T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let max_entries_to_print = 10.min(self.nnz());

        if max_entries_to_print > 0 {
            writeln!(f, "  content sample:")?;
            let entries = self.sorted_entries();
            for (coord, value) in &entries[..max_entries_to_print] {
                writeln!(f, "    ({}, {}) = {:?}", coord.row, coord.col, value)?;
            }
            if entries.len() > max_entries_to_print {
                writeln!(f, "    ... ({} more)", entries.len() - max_entries_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
