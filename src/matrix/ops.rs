//! Element-wise addition/subtraction and sparse multiplication
//!
//! All operations leave their operands untouched and build a fresh result
//! through [`SparseMatrix::set`], so zero-suppression holds for every result.

use std::collections::HashMap;

use log::trace;

use crate::matrix::{Coord, MatrixError, Scalar, SparseMatrix};

impl<T: Scalar> SparseMatrix<T> {
    /// Returns `self + other`.
    ///
    /// Both matrices must have the same shape.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(other, "addition")?;

        let mut result = Self::new(self.n_rows(), self.n_cols());

        for (coord, value) in self.iter() {
            let sum = value
                .checked_add(&other.get(coord.row, coord.col))
                .ok_or(MatrixError::Overflow {
                    row: coord.row,
                    col: coord.col,
                })?;
            result.set(coord.row, coord.col, sum);
        }

        // Coordinates stored in `self` were fully handled above, even when
        // their sum cancelled to zero.
        for (coord, value) in other.iter() {
            if !self.contains(coord.row, coord.col) {
                result.set(coord.row, coord.col, value);
            }
        }

        trace!(
            "addition of {}x{} matrices: nnz {} + {} -> {}",
            self.n_rows(),
            self.n_cols(),
            self.nnz(),
            other.nnz(),
            result.nnz()
        );
        Ok(result)
    }

    /// Returns `self - other`.
    ///
    /// Both matrices must have the same shape.
    pub fn subtract(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(other, "subtraction")?;

        let mut result = Self::new(self.n_rows(), self.n_cols());

        for (coord, value) in self.iter() {
            let difference = value
                .checked_sub(&other.get(coord.row, coord.col))
                .ok_or(MatrixError::Overflow {
                    row: coord.row,
                    col: coord.col,
                })?;
            result.set(coord.row, coord.col, difference);
        }

        for (coord, value) in other.iter() {
            if !self.contains(coord.row, coord.col) {
                let negated = T::zero().checked_sub(&value).ok_or(MatrixError::Overflow {
                    row: coord.row,
                    col: coord.col,
                })?;
                result.set(coord.row, coord.col, negated);
            }
        }

        trace!(
            "subtraction of {}x{} matrices: nnz {} - {} -> {}",
            self.n_rows(),
            self.n_cols(),
            self.nnz(),
            other.nnz(),
            result.nnz()
        );
        Ok(result)
    }

    /// Returns the matrix product `self × other`.
    ///
    /// Requires `self.n_cols() == other.n_rows()`; the result has shape
    /// `(self.n_rows(), other.n_cols())`. Every stored `(r, k)` of `self` is
    /// joined with every stored `(k, c)` of `other` and the products are
    /// accumulated into `(r, c)`.
    ///
    /// Overflow is reported when a single product `a * b` does not fit `T`, or
    /// when the final value of a cell does not. Partial sums never overflow:
    /// the terms of a cell are added so that the running sum stays between
    /// zero and the final value once only one sign is left.
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.n_cols() != other.n_rows() {
            return Err(MatrixError::DimensionMismatch {
                operation: "multiplication",
                left: self.shape(),
                right: other.shape(),
            });
        }

        // Index the right operand by row so the join on k is a lookup
        let mut rows_of_other: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for (coord, value) in other.sorted_entries() {
            rows_of_other
                .entry(coord.row)
                .or_default()
                .push((coord.col, value));
        }

        let mut terms: HashMap<Coord, Vec<T>> = HashMap::new();

        for (a_coord, a_val) in self.sorted_entries() {
            let Some(b_row) = rows_of_other.get(&a_coord.col) else {
                continue;
            };

            for &(col, b_val) in b_row {
                let row = a_coord.row;
                let product = a_val
                    .checked_mul(&b_val)
                    .ok_or(MatrixError::Overflow { row, col })?;
                terms.entry(Coord::new(row, col)).or_default().push(product);
            }
        }

        let mut cells: Vec<_> = terms.into_iter().collect();
        cells.sort_unstable_by_key(|(coord, _)| *coord);

        let mut result = Self::new(self.n_rows(), other.n_cols());
        for (coord, cell_terms) in cells {
            let value = balanced_sum(cell_terms).ok_or(MatrixError::Overflow {
                row: coord.row,
                col: coord.col,
            })?;
            result.set(coord.row, coord.col, value);
        }

        trace!(
            "multiplication {}x{} by {}x{}: nnz {} x {} -> {}",
            self.n_rows(),
            self.n_cols(),
            other.n_rows(),
            other.n_cols(),
            self.nnz(),
            other.nnz(),
            result.nnz()
        );
        Ok(result)
    }

    fn check_same_shape(&self, other: &Self, operation: &'static str) -> Result<(), MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}

/// Sums `terms`, returning `None` only if the total does not fit `T`.
///
/// While both signs remain, a negative term is taken when the running sum is
/// non-negative and a positive one otherwise, so the sum cannot leave the
/// range of `T`. The remaining single-signed terms move it monotonically
/// toward the total.
fn balanced_sum<T: Scalar>(terms: Vec<T>) -> Option<T> {
    let zero = T::zero();
    let (mut positives, mut negatives): (Vec<T>, Vec<T>) =
        terms.into_iter().partition(|term| *term >= zero);

    let mut sum = zero;
    loop {
        let next = if sum >= zero {
            negatives.pop().or_else(|| positives.pop())
        } else {
            positives.pop().or_else(|| negatives.pop())
        };
        match next {
            Some(term) => sum = sum.checked_add(&term)?,
            None => return Some(sum),
        }
    }
}
