//! # sparse-arith: coordinate-map sparse integer matrices
//!
//! Parses matrices written in a small sparse text format, adds, subtracts
//! or multiplies them, and writes the result back in the same format.
//!
//! ## Format
//!
//! ```text
//! rows=2
//! cols=2
//! (0, 0, 1)
//! (0, 1, 2)
//! ```
//!
//! Only non-zero entries are listed; any coordinate not listed is zero.
//!
//! ## Usage
//!
//! ```
//! use sparse_arith::{parse, Operation, SparseMatrix};
//!
//! let a: SparseMatrix = parse("rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 2)").unwrap();
//! let b: SparseMatrix = parse("rows=2\ncols=2\n(0, 0, 3)\n(1, 1, 4)").unwrap();
//!
//! let product = Operation::Multiply.apply(&a, &b).unwrap();
//! assert_eq!(product.to_string(), "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 8)");
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod matrix;
pub mod operation;
pub mod utils;

// Re-export primary components
pub use error::{Error, Result};
pub use io::{parse, parse_with, read_matrix, write_result, ParseError, ParseOptions};
pub use matrix::{Coord, MatrixError, Scalar, SparseMatrix};
pub use operation::Operation;
pub use utils::{from_sprs, to_sprs_csr};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
