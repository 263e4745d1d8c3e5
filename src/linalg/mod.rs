//! Linear algebra module.
//!
//! Contains the low level routines behind the methods of [`Mat`](crate::Mat). The routines take
//! [`MatRef`](crate::MatRef)/[`MatMut`](crate::MatMut) views and assume that their inputs have
//! already been validated: shape preconditions are checked with panicking assertions, while the
//! high level wrappers on `Mat` check the same conditions up front and report them as
//! [`MatError`](crate::MatError) values.
//!
//! # Cost
//! [`reductions::determinant`], [`inverse::cofactor_matrix`] and everything built on them use
//! Laplace expansion, which takes `O(n!)` time for an `n×n` matrix. They are meant for small
//! matrices, where they perform exactly the sequence of operations of the textbook formulas.

pub mod inverse;
pub mod mat_ops;
pub mod matmul;
pub mod minor;
pub mod reductions;
pub mod zip;
