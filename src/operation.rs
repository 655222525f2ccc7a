//! The arithmetic operations a user can select

use std::fmt;
use std::str::FromStr;

use crate::matrix::{MatrixError, Scalar, SparseMatrix};
use crate::Error;

/// One of the three supported matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Lowercase name as typed by users
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Header line written in front of a serialized result
    pub fn label(&self) -> String {
        format!("Result of {}:", self.name())
    }

    /// Computes `left <op> right`
    pub fn apply<T: Scalar>(
        &self,
        left: &SparseMatrix<T>,
        right: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>, MatrixError> {
        match self {
            Operation::Add => left.add(right),
            Operation::Subtract => left.subtract(right),
            Operation::Multiply => left.multiply(right),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::InvalidOperation(name.to_string()))
    }
}
