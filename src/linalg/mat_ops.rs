//! Operator overloads for [`Mat`] and [`MatRef`].
//!
//! `==` is the tolerance-based comparison [`MatRef::approx_eq`]. The arithmetic operators forward
//! to the fallible named methods and panic on any [`MatError`](crate::MatError) they return.

use crate::{mat::matown::check_matmul, Mat, MatRef};

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

#[track_caller]
fn unwrap_or_panic<T>(res: Result<T, crate::MatError>) -> T {
    match res {
        Ok(v) => v,
        Err(err) => panic!("{err}"),
    }
}

impl PartialEq<MatRef<'_>> for MatRef<'_> {
    #[inline]
    fn eq(&self, other: &MatRef<'_>) -> bool {
        self.approx_eq(*other)
    }
}

impl Add<MatRef<'_>> for MatRef<'_> {
    type Output = Mat;

    #[track_caller]
    fn add(self, other: MatRef<'_>) -> Self::Output {
        let mut out = self.to_owned();
        unwrap_or_panic(out.as_mut().try_add_assign(other));
        out
    }
}

impl Sub<MatRef<'_>> for MatRef<'_> {
    type Output = Mat;

    #[track_caller]
    fn sub(self, other: MatRef<'_>) -> Self::Output {
        let mut out = self.to_owned();
        unwrap_or_panic(out.as_mut().try_sub_assign(other));
        out
    }
}

impl Mul<MatRef<'_>> for MatRef<'_> {
    type Output = Mat;

    #[track_caller]
    fn mul(self, other: MatRef<'_>) -> Self::Output {
        unwrap_or_panic(check_matmul(self, other));
        let mut out = Mat::full(self.nrows(), other.ncols(), 0.0);
        super::matmul::matmul(out.as_mut(), self, other);
        out
    }
}

impl Mul<f64> for MatRef<'_> {
    type Output = Mat;

    #[inline]
    fn mul(self, factor: f64) -> Self::Output {
        let mut out = self.to_owned();
        out.scale(factor);
        out
    }
}

impl Mul<MatRef<'_>> for f64 {
    type Output = Mat;

    #[inline]
    fn mul(self, mat: MatRef<'_>) -> Self::Output {
        mat * self
    }
}

macro_rules! impl_partial_eq {
    ($lhs: ty, $rhs: ty) => {
        impl PartialEq<$rhs> for $lhs {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                self.as_ref().eq(&other.as_ref())
            }
        }
    };
}

macro_rules! impl_add_sub {
    ($lhs: ty, $rhs: ty) => {
        impl Add<$rhs> for $lhs {
            type Output = Mat;
            #[track_caller]
            fn add(self, other: $rhs) -> Self::Output {
                self.as_ref().add(other.as_ref())
            }
        }

        impl Sub<$rhs> for $lhs {
            type Output = Mat;
            #[track_caller]
            fn sub(self, other: $rhs) -> Self::Output {
                self.as_ref().sub(other.as_ref())
            }
        }
    };
}

macro_rules! impl_add_sub_assign {
    ($rhs: ty) => {
        impl AddAssign<$rhs> for Mat {
            #[track_caller]
            fn add_assign(&mut self, other: $rhs) {
                unwrap_or_panic(self.as_mut().try_add_assign(other.as_ref()))
            }
        }

        impl SubAssign<$rhs> for Mat {
            #[track_caller]
            fn sub_assign(&mut self, other: $rhs) {
                unwrap_or_panic(self.as_mut().try_sub_assign(other.as_ref()))
            }
        }
    };
}

macro_rules! impl_mul {
    ($lhs: ty, $rhs: ty) => {
        impl Mul<$rhs> for $lhs {
            type Output = Mat;
            #[track_caller]
            fn mul(self, other: $rhs) -> Self::Output {
                self.as_ref().mul(other.as_ref())
            }
        }
    };
}

macro_rules! impl_mul_assign {
    ($rhs: ty) => {
        impl MulAssign<$rhs> for Mat {
            #[track_caller]
            fn mul_assign(&mut self, other: $rhs) {
                *self = self.as_ref().mul(other.as_ref());
            }
        }
    };
}

macro_rules! impl_mul_scalar {
    ($mat: ty) => {
        impl Mul<f64> for $mat {
            type Output = Mat;
            #[inline]
            fn mul(self, factor: f64) -> Self::Output {
                self.as_ref().mul(factor)
            }
        }

        impl Mul<$mat> for f64 {
            type Output = Mat;
            #[inline]
            fn mul(self, mat: $mat) -> Self::Output {
                mat.as_ref().mul(self)
            }
        }
    };
}

impl_partial_eq!(Mat, Mat);
impl_partial_eq!(Mat, MatRef<'_>);
impl_partial_eq!(MatRef<'_>, Mat);

impl_add_sub!(Mat, Mat);
impl_add_sub!(Mat, &Mat);
impl_add_sub!(&Mat, Mat);
impl_add_sub!(&Mat, &Mat);
impl_add_sub!(Mat, MatRef<'_>);
impl_add_sub!(&Mat, MatRef<'_>);
impl_add_sub!(MatRef<'_>, Mat);
impl_add_sub!(MatRef<'_>, &Mat);

impl_add_sub_assign!(Mat);
impl_add_sub_assign!(&Mat);
impl_add_sub_assign!(MatRef<'_>);

impl_mul!(Mat, Mat);
impl_mul!(Mat, &Mat);
impl_mul!(&Mat, Mat);
impl_mul!(&Mat, &Mat);
impl_mul!(Mat, MatRef<'_>);
impl_mul!(&Mat, MatRef<'_>);
impl_mul!(MatRef<'_>, Mat);
impl_mul!(MatRef<'_>, &Mat);

impl_mul_assign!(Mat);
impl_mul_assign!(&Mat);
impl_mul_assign!(MatRef<'_>);

impl_mul_scalar!(Mat);
impl_mul_scalar!(&Mat);

impl MulAssign<f64> for Mat {
    #[inline]
    fn mul_assign(&mut self, factor: f64) {
        self.scale(factor)
    }
}
