//! Minor extraction.

use crate::{assert, Mat, MatRef};

/// Returns the `(m - 1)×(n - 1)` matrix obtained by deleting row `row` and column `col` of the
/// `m×n` matrix `mat`.
///
/// The source and destination indices advance in lockstep, and the source index skips over
/// `row` (respectively `col`) exactly once.
///
/// # Panics
/// Panics if `row >= mat.nrows()` or `col >= mat.ncols()`.
///
/// # Example
/// ```
/// use matrixplus::{linalg::minor::minor, mat};
///
/// let m = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
/// assert!(minor(m.as_ref(), 1, 0) == mat![[2.0, 3.0], [8.0, 9.0]]);
/// ```
#[track_caller]
pub fn minor(mat: MatRef<'_>, row: usize, col: usize) -> Mat {
    assert!(all(row < mat.nrows(), col < mat.ncols()));

    let nrows = mat.nrows() - 1;
    let ncols = mat.ncols() - 1;
    let mut out = Mat::full(nrows, ncols, 0.0);

    let mut src_i = 0;
    for dst_i in 0..nrows {
        if src_i == row {
            src_i += 1;
        }
        let mut src_j = 0;
        for dst_j in 0..ncols {
            if src_j == col {
                src_j += 1;
            }
            out[(dst_i, dst_j)] = mat[(src_i, src_j)];
            src_j += 1;
        }
        src_i += 1;
    }

    out
}
