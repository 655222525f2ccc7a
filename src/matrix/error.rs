//! Errors raised by matrix arithmetic and bounds-checked access

use std::fmt;

/// Errors that can occur while operating on sparse matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A coordinate lies outside the declared shape
    IndexOutOfBounds {
        row: usize,
        col: usize,
        shape: (usize, usize),
    },
    /// An intermediate value does not fit the element type
    Overflow { row: usize, col: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "Matrices dimensions do not match for {}: {}x{} vs {}x{}",
                operation, left.0, left.1, right.0, right.1
            ),
            MatrixError::IndexOutOfBounds { row, col, shape } => write!(
                f,
                "Index ({}, {}) out of bounds for {}x{} matrix",
                row, col, shape.0, shape.1
            ),
            MatrixError::Overflow { row, col } => {
                write!(f, "Arithmetic overflow at ({}, {})", row, col)
            }
        }
    }
}

impl std::error::Error for MatrixError {}
