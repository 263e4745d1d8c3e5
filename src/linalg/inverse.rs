//! Cofactor matrix, adjugate and inverse.
//!
//! The inverse of a square matrix `A` with nonzero determinant is computed with the classical
//! formula `A⁻¹ = adj(A) / det(A)`, where `adj(A)` is the transpose of the matrix of cofactors
//! of `A`.

use crate::{
    assert,
    linalg::{minor::minor, reductions::determinant::determinant},
    Mat, MatError, MatRef, EPSILON,
};

/// Returns the matrix of cofactors of the square matrix `mat`, whose element `(i, j)` is
/// `(-1)^(i + j) * det(minor(mat, i, j))`.
///
/// For a `1×1` input, the only minor is the `0×0` matrix, whose determinant is `0.0`, so the
/// result is `[[0.0]]`.
///
/// # Panics
/// Panics if `mat.nrows() != mat.ncols()`.
#[track_caller]
pub fn cofactor_matrix(mat: MatRef<'_>) -> Mat {
    assert!(mat.nrows() == mat.ncols());

    Mat::from_fn(mat.nrows(), mat.ncols(), |i, j| {
        let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
        sign * determinant(minor(mat, i, j).as_ref())
    })
}

/// Returns the adjugate of the square matrix `mat`, the transpose of its matrix of cofactors.
///
/// # Panics
/// Panics if `mat.nrows() != mat.ncols()`.
#[track_caller]
pub fn adjugate(mat: MatRef<'_>) -> Mat {
    cofactor_matrix(mat).transpose()
}

/// Returns the inverse of the square matrix `mat`.
///
/// # Errors
/// Returns [`MatError::SingularMatrix`] if `|det(mat)| <= EPSILON`. This includes the `0×0`
/// matrix, whose determinant is `0.0`.
///
/// # Panics
/// Panics if `mat.nrows() != mat.ncols()`.
#[track_caller]
pub fn inverse(mat: MatRef<'_>) -> Result<Mat, MatError> {
    let det = determinant(mat);
    if det.abs() <= EPSILON {
        return Err(MatError::SingularMatrix);
    }

    if mat.nrows() == 1 {
        return Ok(Mat::full(1, 1, 1.0 / mat[(0, 0)]));
    }

    let mut inv = adjugate(mat);
    inv.scale(1.0 / det);
    Ok(inv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert, mat, utils::approx::*};
    use rand::prelude::*;

    #[test]
    fn test_cofactor_matrix() {
        let m = mat![[1.0, 2.0, 3.0], [0.0, 4.0, 2.0], [5.0, 2.0, 1.0]];
        let expected = mat![[0.0, 10.0, -20.0], [4.0, -14.0, 8.0], [-8.0, -2.0, 4.0]];

        assert!(cofactor_matrix(m.as_ref()) == expected);
        assert!(m.calc_complements().unwrap() == expected);
    }

    #[test]
    fn test_cofactor_matrix_2x2() {
        let m = mat![[1.0, 2.0], [3.0, 4.0]];
        assert!(cofactor_matrix(m.as_ref()) == mat![[4.0, -3.0], [-2.0, 1.0]]);
    }

    #[test]
    fn test_cofactor_matrix_degenerate() {
        assert!(cofactor_matrix(mat![[7.0]].as_ref()) == mat![[0.0]]);
        assert!(cofactor_matrix(Mat::new().as_ref()).shape() == (0, 0));
    }

    #[test]
    fn test_cofactor_matrix_non_square() {
        let m = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(
            m.calc_complements().unwrap_err(),
            MatError::DimensionMismatch {
                lhs: (2, 3),
                rhs: (3, 2)
            }
        );
        assert!(m.adjugate().is_err());
    }

    #[test]
    fn test_adjugate() {
        let m = mat![[1.0, 2.0, 3.0], [0.0, 4.0, 2.0], [5.0, 2.0, 1.0]];
        let adj = m.adjugate().unwrap();

        assert!(adj == mat![[0.0, 4.0, -8.0], [10.0, -14.0, -2.0], [-20.0, 8.0, 4.0]]);

        let mut expected = Mat::identity(3);
        expected.scale(m.determinant().unwrap());

        let approx_eq = CwiseMat(ApproxEq::eps());
        assert!(m.try_mul(&adj).unwrap() ~ expected);
    }

    #[test]
    fn test_inverse_2x2() {
        let m = mat![[1.0, 2.0], [3.0, 4.0]];
        assert!(inverse(m.as_ref()).unwrap() == mat![[-2.0, 1.0], [1.5, -0.5]]);
    }

    #[test]
    fn test_inverse_3x3() {
        let m = mat![[2.0, 5.0, 7.0], [6.0, 3.0, 4.0], [5.0, -2.0, -3.0]];
        let expected = mat![[1.0, -1.0, 1.0], [-38.0, 41.0, -34.0], [27.0, -29.0, 24.0]];

        assert!(m.inverse().unwrap() == expected);
    }

    #[test]
    fn test_inverse_1x1() {
        let m = mat![[4.0]];
        assert!(m.inverse().unwrap() == mat![[0.25]]);

        assert_eq!(
            mat![[1e-9]].inverse().unwrap_err(),
            MatError::SingularMatrix
        );
        assert_eq!(
            mat![[EPSILON]].inverse().unwrap_err(),
            MatError::SingularMatrix
        );
        assert!(mat![[2.0 * EPSILON]].inverse().is_ok());
    }

    #[test]
    fn test_inverse_singular() {
        let m = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        assert_eq!(m.determinant(), Ok(0.0));
        assert_eq!(m.inverse().unwrap_err(), MatError::SingularMatrix);
        assert_eq!(Mat::new().inverse().unwrap_err(), MatError::SingularMatrix);
    }

    #[test]
    fn test_inverse_non_square() {
        let m = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(
            m.inverse().unwrap_err(),
            MatError::DimensionMismatch {
                lhs: (2, 3),
                rhs: (3, 2)
            }
        );
    }

    #[test]
    fn test_inverse_random() {
        let rng = &mut StdRng::seed_from_u64(0);
        let approx_eq = CwiseMat(ApproxEq::eps() * 1e2);

        for n in 1..7 {
            // diagonally dominant, hence far from singular
            let m = Mat::from_fn(n, n, |i, j| {
                let x: f64 = rng.gen_range(-1.0..1.0);
                if i == j {
                    x + 2.0 * n as f64
                } else {
                    x
                }
            });

            let inv = m.inverse().unwrap();
            assert!(m.try_mul(&inv).unwrap() ~ Mat::identity(n));
            assert!(inv.try_mul(&m).unwrap() ~ Mat::identity(n));
        }
    }
}
