//! Owned matrices and the borrowed views over them.
//!
//! The memory layout is row-major: element `(i, j)` of an `m × n` matrix lives at offset
//! `i * n + j` of a single contiguous buffer.
//!
//! Let us consider a 2×3 matrix
//!
//! ```notcode
//!  0 │ 1 │ 2
//! ───┼───┼───
//!  3 │ 4 │ 5
//! ```
//! The memory representation of the data held by such a matrix is:
//!
//! ```notcode
//! 0 1 2 3 4 5
//! ```

pub(crate) mod mat_index;
pub(crate) mod matmut;
pub(crate) mod matown;
pub(crate) mod matref;

pub use matmut::MatMut;
pub use matown::Mat;
pub use matref::MatRef;

/// Types that can be viewed as an immutable matrix.
pub trait AsMatRef {
    /// Returns a view over the matrix.
    fn as_mat_ref(&self) -> MatRef<'_>;
}

impl AsMatRef for Mat {
    #[inline]
    fn as_mat_ref(&self) -> MatRef<'_> {
        self.as_ref()
    }
}

impl AsMatRef for MatRef<'_> {
    #[inline]
    fn as_mat_ref(&self) -> MatRef<'_> {
        *self
    }
}

impl AsMatRef for MatMut<'_> {
    #[inline]
    fn as_mat_ref(&self) -> MatRef<'_> {
        self.as_ref()
    }
}

impl<M: AsMatRef + ?Sized> AsMatRef for &M {
    #[inline]
    fn as_mat_ref(&self) -> MatRef<'_> {
        (**self).as_mat_ref()
    }
}

impl<M: AsMatRef + ?Sized> AsMatRef for &mut M {
    #[inline]
    fn as_mat_ref(&self) -> MatRef<'_> {
        (**self).as_mat_ref()
    }
}
