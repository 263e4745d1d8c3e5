use crate::{assert, linalg::minor::minor, MatRef};

/// Matrices larger than this take long enough with cofactor expansion to be worth a warning.
#[cfg(feature = "perf-warn")]
const DETERMINANT_WARN_THRESHOLD: usize = 10;

/// Computes the determinant of the square matrix `mat` by Laplace expansion along the first row.
///
/// * the determinant of the `0×0` matrix is `0.0`,
/// * the determinant of a `1×1` matrix is its only element,
/// * the determinant of a `2×2` matrix is `a00 * a11 - a01 * a10`,
/// * otherwise, the terms `(-1)^j * a0j * det(minor(0, j))` are summed from left to right.
///
/// # Panics
/// Panics if `mat.nrows() != mat.ncols()`.
#[track_caller]
pub fn determinant(mat: MatRef<'_>) -> f64 {
    assert!(mat.nrows() == mat.ncols());

    #[cfg(feature = "perf-warn")]
    warn_if_large(mat.nrows());

    determinant_imp(mat)
}

/// Emits a warning the first time it sees a size above [`DETERMINANT_WARN_THRESHOLD`], and
/// returns whether it did.
#[cfg(feature = "perf-warn")]
fn warn_if_large(n: usize) -> bool {
    if n > DETERMINANT_WARN_THRESHOLD && crate::__perf_warn!(DETERMINANT_WARN) {
        log::warn!(target: "matrixplus_perf", "Cofactor expansion takes O(n!) time. Found {n}×{n} matrix.");
        true
    } else {
        false
    }
}

fn determinant_imp(mat: MatRef<'_>) -> f64 {
    match mat.nrows() {
        1 => mat[(0, 0)],
        2 => mat[(0, 0)] * mat[(1, 1)] - mat[(0, 1)] * mat[(1, 0)],
        n => {
            let mut det = 0.0;
            for j in 0..n {
                let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                det += mat[(0, j)] * sign * determinant_imp(minor(mat, 0, j).as_ref());
            }
            det
        }
    }
}
