//! Matrix multiplication.

use crate::{assert, MatMut, MatRef};

/// Computes the matrix product `lhs × rhs` and stores the result in `dst`.
///
/// Element `(i, j)` is accumulated as `lhs[(i, 0)] * rhs[(0, j)] + lhs[(i, 1)] * rhs[(1, j)] + ...`,
/// from left to right, starting from zero. The previous content of `dst` is overwritten.
///
/// Since `dst` is borrowed mutably, it cannot alias `lhs` or `rhs`.
///
/// # Panics
/// Panics if any of the following conditions are violated:
/// * `lhs.ncols() == rhs.nrows()`.
/// * `dst.nrows() == lhs.nrows()`.
/// * `dst.ncols() == rhs.ncols()`.
#[track_caller]
pub fn matmul(mut dst: MatMut<'_>, lhs: MatRef<'_>, rhs: MatRef<'_>) {
    assert!(all(
        lhs.ncols() == rhs.nrows(),
        dst.nrows() == lhs.nrows(),
        dst.ncols() == rhs.ncols()
    ));

    let depth = lhs.ncols();
    for i in 0..lhs.nrows() {
        for j in 0..rhs.ncols() {
            let mut acc = 0.0;
            for k in 0..depth {
                acc += unsafe { lhs.read_unchecked(i, k) * rhs.read_unchecked(k, j) };
            }
            unsafe { dst.write_unchecked(i, j, acc) };
        }
    }
}
