//! Element type bound for sparse matrices

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Num};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Values that can be stored in a [`SparseMatrix`](crate::SparseMatrix).
///
/// Arithmetic is checked so that overflow surfaces as an error rather than
/// wrapping. Ordering is used to keep partial sums in range. Every primitive
/// integer type implements this trait.
pub trait Scalar:
    Copy + Num + PartialOrd + CheckedAdd + CheckedSub + CheckedMul + Debug + Display + FromStr
{
}

impl<T> Scalar for T where
    T: Copy + Num + PartialOrd + CheckedAdd + CheckedSub + CheckedMul + Debug + Display + FromStr
{
}
