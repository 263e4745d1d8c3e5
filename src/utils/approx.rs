//! Approximate comparisons for use with [`equator::assert!`].
//!
//! ```
//! use equator::assert;
//! use matrixplus::{mat, utils::approx::*};
//!
//! let a = mat![[1.0, 2.0], [3.0, 4.0]];
//! let b = mat![[1.0, 2.0], [3.0, 4.0 + 1e-9]];
//!
//! let approx_eq = CwiseMat(ApproxEq::eps());
//! assert!(a ~ b);
//! ```

use crate::{mat::AsMatRef, EPSILON};

/// Compares two scalars with an absolute and a relative tolerance.
#[derive(Copy, Clone, Debug)]
pub struct ApproxEq {
    /// absolute tolerance
    pub abs_tol: f64,
    /// relative tolerance, scaled by the larger magnitude of the two operands
    pub rel_tol: f64,
}

/// Lifts a scalar comparator to a coefficient-wise matrix comparator.
#[derive(Copy, Clone, Debug)]
pub struct CwiseMat<Cmp>(pub Cmp);

impl ApproxEq {
    /// Returns a comparator whose tolerances are both [`EPSILON`].
    #[inline]
    pub fn eps() -> Self {
        Self {
            abs_tol: EPSILON,
            rel_tol: EPSILON,
        }
    }
}

impl core::ops::Mul<f64> for ApproxEq {
    type Output = ApproxEq;

    #[inline]
    fn mul(self, factor: f64) -> Self::Output {
        ApproxEq {
            abs_tol: self.abs_tol * factor,
            rel_tol: self.rel_tol * factor,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct ApproxEqError;

/// Failure of a coefficient-wise comparison.
#[derive(Clone, Debug)]
pub enum CwiseMatError {
    /// the operands have different shapes
    DimMismatch,
    /// indices of the mismatching elements, in row-major order
    Elements(Vec<(usize, usize)>),
}

impl equator::CmpError<ApproxEq, f64, f64> for ApproxEq {
    type Error = ApproxEqError;
}

impl equator::CmpDisplay<ApproxEq, f64, f64> for ApproxEqError {
    fn fmt(
        &self,
        cmp: &ApproxEq,
        lhs: &f64,
        lhs_source: &str,
        _: &dyn core::fmt::Debug,
        rhs: &f64,
        rhs_source: &str,
        _: &dyn core::fmt::Debug,
        f: &mut core::fmt::Formatter,
    ) -> core::fmt::Result {
        write_prologue(cmp, lhs_source, rhs_source, f)?;
        writeln!(f, "- {lhs_source} = {lhs:?}")?;
        writeln!(f, "- {rhs_source} = {rhs:?}")?;
        write!(f, "- distance = {:?}", (*lhs - *rhs).abs())
    }
}

fn write_prologue(
    cmp: &ApproxEq,
    lhs_source: &str,
    rhs_source: &str,
    f: &mut core::fmt::Formatter,
) -> core::fmt::Result {
    let ApproxEq { abs_tol, rel_tol } = cmp;
    writeln!(f, "Assertion failed: {lhs_source} ~ {rhs_source}")?;
    writeln!(f, "with absolute tolerance = {abs_tol:?}")?;
    writeln!(f, "with relative tolerance = {rel_tol:?}")
}

impl equator::Cmp<f64, f64> for ApproxEq {
    fn test(&self, lhs: &f64, rhs: &f64) -> Result<(), Self::Error> {
        let Self { abs_tol, rel_tol } = *self;

        let diff = (*lhs - *rhs).abs();
        let max = f64::max(lhs.abs(), rhs.abs());

        if diff <= abs_tol || diff <= rel_tol * max {
            Ok(())
        } else {
            Err(ApproxEqError)
        }
    }
}

impl<L: AsMatRef, R: AsMatRef> equator::CmpError<CwiseMat<ApproxEq>, L, R>
    for CwiseMat<ApproxEq>
{
    type Error = CwiseMatError;
}

impl<L: AsMatRef, R: AsMatRef> equator::CmpDisplay<CwiseMat<ApproxEq>, L, R> for CwiseMatError {
    fn fmt(
        &self,
        cmp: &CwiseMat<ApproxEq>,
        lhs: &L,
        lhs_source: &str,
        _: &dyn core::fmt::Debug,
        rhs: &R,
        rhs_source: &str,
        _: &dyn core::fmt::Debug,
        f: &mut core::fmt::Formatter,
    ) -> core::fmt::Result {
        let lhs = lhs.as_mat_ref();
        let rhs = rhs.as_mat_ref();
        write_prologue(&cmp.0, lhs_source, rhs_source, f)?;

        match self {
            Self::DimMismatch => {
                writeln!(f, "- {lhs_source} has shape {:?}", lhs.shape())?;
                write!(f, "- {rhs_source} has shape {:?}", rhs.shape())
            }
            Self::Elements(indices) => {
                for &(i, j) in indices {
                    let (a, b) = (lhs.read(i, j), rhs.read(i, j));
                    writeln!(f, "- at ({i}, {j}): {a:?} vs {b:?}, distance = {:?}", (a - b).abs())?;
                }
                Ok(())
            }
        }
    }
}

impl<L: AsMatRef, R: AsMatRef> equator::Cmp<L, R> for CwiseMat<ApproxEq> {
    fn test(&self, lhs: &L, rhs: &R) -> Result<(), Self::Error> {
        let lhs = lhs.as_mat_ref();
        let rhs = rhs.as_mat_ref();

        if lhs.shape() != rhs.shape() {
            return Err(CwiseMatError::DimMismatch);
        }

        let mut indices = Vec::new();
        for i in 0..lhs.nrows() {
            for j in 0..lhs.ncols() {
                if equator::Cmp::test(&self.0, &lhs.read(i, j), &rhs.read(i, j)).is_err() {
                    indices.push((i, j));
                }
            }
        }

        if indices.is_empty() {
            Ok(())
        } else {
            Err(CwiseMatError::Elements(indices))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert, mat, Mat};
    use equator::Cmp;

    #[test]
    fn test_scalar_tolerance() {
        let cmp = ApproxEq::eps();
        assert!(cmp.test(&1.0, &(1.0 + 0.5 * EPSILON)).is_ok());
        assert!(cmp.test(&0.0, &(0.5 * EPSILON)).is_ok());
        assert!(cmp.test(&0.0, &(2.0 * EPSILON)).is_err());

        // relative tolerance kicks in for large magnitudes
        assert!(cmp.test(&1e9, &(1e9 + 10.0)).is_ok());
        assert!(cmp.test(&1e9, &(1e9 + 1e3)).is_err());
    }

    #[test]
    fn test_scaled_tolerance() {
        let cmp = ApproxEq::eps() * 1e3;
        assert!(all(cmp.abs_tol == EPSILON * 1e3, cmp.rel_tol == EPSILON * 1e3));
        assert!(cmp.test(&0.0, &(1e2 * EPSILON)).is_ok());
    }

    #[test]
    fn test_cwise() {
        let a = mat![[1.0, 2.0], [3.0, 4.0]];
        let b = mat![[1.0, 2.0], [3.0, 5.0]];
        let cmp = CwiseMat(ApproxEq::eps());

        assert!(cmp.test(&a, &a.clone()).is_ok());
        match cmp.test(&a, &b) {
            Err(CwiseMatError::Elements(indices)) => {
                assert!(indices == [(1, 1)]);
            }
            _ => panic!(),
        }
        assert!(matches!(
            cmp.test(&a, &Mat::identity(3)),
            Err(CwiseMatError::DimMismatch)
        ));
    }

    #[test]
    fn test_cwise_views() {
        let a = mat![[1.0, 2.0], [3.0, 4.0]];
        let approx_eq = CwiseMat(ApproxEq::eps());
        assert!(a.as_ref() ~ a.transpose().transpose());
    }

    #[test]
    #[should_panic]
    fn test_cwise_should_panic() {
        let approx_eq = CwiseMat(ApproxEq::eps());
        assert!(mat![[1.0]] ~ mat![[2.0]]);
    }
}
