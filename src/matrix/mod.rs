// Matrix data structures and operations

pub mod error;
pub mod ops;
pub mod scalar;
pub mod sparse;

pub use error::MatrixError;
pub use scalar::Scalar;
pub use sparse::{Coord, Iter, SparseMatrix};
