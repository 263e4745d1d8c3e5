//! Coefficient-wise kernels over matrices of the same shape.

use crate::{assert_same_shape, MatMut, MatRef, EPSILON};
use reborrow::*;

/// Calls `f` on every pair of elements of `dst` and `src`, in row-major order.
///
/// # Panics
/// Panics if `dst` and `src` do not have the same shape.
#[inline]
#[track_caller]
pub fn for_each_pair(dst: MatMut<'_>, src: MatRef<'_>, mut f: impl FnMut(&mut f64, f64)) {
    assert_same_shape(dst.rb(), src);
    for (dst, &src) in dst.as_slice_mut().iter_mut().zip(src.as_slice()) {
        f(dst, src);
    }
}

/// Returns `true` if `lhs` and `rhs` have the same shape, both hold at least one element, and
/// every pair of elements differs by at most [`EPSILON`].
#[inline]
pub fn approx_eq(lhs: MatRef<'_>, rhs: MatRef<'_>) -> bool {
    if lhs.shape() != rhs.shape() || lhs.is_empty() || rhs.is_empty() {
        return false;
    }
    lhs.as_slice()
        .iter()
        .zip(rhs.as_slice())
        .all(|(&a, &b)| (a - b).abs() <= EPSILON)
}

/// Computes `dst += src`.
///
/// # Panics
/// Panics if `dst` and `src` do not have the same shape.
#[inline]
#[track_caller]
pub fn add_assign(dst: MatMut<'_>, src: MatRef<'_>) {
    for_each_pair(dst, src, |dst, src| *dst += src);
}

/// Computes `dst -= src`.
///
/// # Panics
/// Panics if `dst` and `src` do not have the same shape.
#[inline]
#[track_caller]
pub fn sub_assign(dst: MatMut<'_>, src: MatRef<'_>) {
    for_each_pair(dst, src, |dst, src| *dst -= src);
}

/// Computes `dst *= factor`.
#[inline]
pub fn scale(dst: MatMut<'_>, factor: f64) {
    for x in dst.as_slice_mut() {
        *x *= factor;
    }
}
