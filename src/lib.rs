//! `matrixplus` is a small dense linear algebra library for `f64` matrices.
//!
//! The algebra is deliberately classical: determinants are computed by Laplace expansion along
//! the first row, and inverses by the adjugate formula. Both are exact in the sense that they
//! perform the same sequence of floating point operations one would write by hand, at the cost of
//! factorial running time. The library targets small systems.
//!
//! # Example
//! ```
//! use matrixplus::{mat, Mat};
//!
//! let a = mat![[1.0, 2.0], [3.0, 4.0]];
//! let inv = a.inverse().unwrap();
//!
//! assert!(inv == mat![[-2.0, 1.0], [1.5, -0.5]]);
//! assert!(&a * &inv == Mat::identity(2));
//! ```
#![allow(non_snake_case)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use equator::assert;

pub mod linalg;
pub mod mat;
pub mod utils;

pub use mat::{Mat, MatMut, MatRef};
pub use reborrow;

/// Absolute tolerance used by every floating point comparison in the crate.
///
/// Two elements `a` and `b` are considered equal when `|a - b| <= EPSILON`, and a matrix is
/// considered singular when `|det| <= EPSILON`.
pub const EPSILON: f64 = 1e-7;

/// Errors that can occur when building or combining matrices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatError {
    /// a matrix was requested with a zero row or column count
    InvalidDimension {
        /// requested number of rows
        nrows: usize,
        /// requested number of columns
        ncols: usize,
    },
    /// the operands have incompatible shapes, or an operand has no elements
    DimensionMismatch {
        /// shape of the left operand
        lhs: (usize, usize),
        /// shape of the right operand
        rhs: (usize, usize),
    },
    /// the row or column to delete when extracting a minor is out of bounds
    InvalidIndex {
        /// requested row
        row: usize,
        /// requested column
        col: usize,
    },
    /// an element index is out of bounds
    IndexOutOfRange {
        /// requested row
        row: usize,
        /// requested column
        col: usize,
    },
    /// the determinant is zero within [`EPSILON`]
    SingularMatrix,
}

impl core::fmt::Display for MatError {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

impl core::error::Error for MatError {}

/// Creates a [`Mat`] from a row-major list of rows.
///
/// ```
/// use matrixplus::mat;
///
/// let matrix = mat![
///     [1.0, 2.0, 3.0],
///     [4.0, 5.0, 6.0],
/// ];
///
/// assert_eq!(matrix.shape(), (2, 3));
/// assert_eq!(matrix[(0, 2)], 3.0);
/// assert_eq!(matrix[(1, 0)], 4.0);
/// ```
///
/// # Panics
/// Panics if the rows do not all have the same length.
#[macro_export]
macro_rules! mat {
    () => {
        {
            compile_error!("number of columns in the matrix is ambiguous");
        }
    };

    ($([$($v:expr),* $(,)?] ),* $(,)?) => {
        {
            let rows: &[&[f64]] = &[$(&[$($v),*]),*];
            match $crate::Mat::from_rows(rows) {
                ::core::result::Result::Ok(mat) => mat,
                ::core::result::Result::Err(err) => ::core::panic!("{err}"),
            }
        }
    };
}

#[cfg(feature = "perf-warn")]
#[macro_export]
#[doc(hidden)]
macro_rules! __perf_warn {
    ($name: ident) => {{
        #[inline(always)]
        #[allow(non_snake_case)]
        fn $name() -> &'static ::core::sync::atomic::AtomicBool {
            static $name: ::core::sync::atomic::AtomicBool =
                ::core::sync::atomic::AtomicBool::new(false);
            &$name
        }
        ::core::matches!(
            $name().compare_exchange(
                false,
                true,
                ::core::sync::atomic::Ordering::Relaxed,
                ::core::sync::atomic::Ordering::Relaxed,
            ),
            Ok(_)
        )
    }};
}

#[inline]
#[track_caller]
pub(crate) fn assert_same_shape(lhs: MatRef<'_>, rhs: MatRef<'_>) {
    assert!(all(lhs.nrows() == rhs.nrows(), lhs.ncols() == rhs.ncols()));
}
