use super::*;
use crate::{assert, linalg, MatError};
use reborrow::*;

/// Mutable view over a matrix, similar to a mutable reference to a 2D [prim@slice].
///
/// # Note
///
/// Unlike a `MatRef`, the `MatMut` type is not `Copy`. To reuse a `MatMut` after passing it to
/// a function, reborrow it with [`rb_mut`](ReborrowMut::rb_mut) first.
pub struct MatMut<'a> {
    data: &'a mut [f64],
    nrows: usize,
    ncols: usize,
}

impl<'short> Reborrow<'short> for MatMut<'_> {
    type Target = MatRef<'short>;

    #[inline]
    fn rb(&'short self) -> Self::Target {
        MatRef::from_row_major_slice(&*self.data, self.nrows, self.ncols)
    }
}

impl<'short> ReborrowMut<'short> for MatMut<'_> {
    type Target = MatMut<'short>;

    #[inline]
    fn rb_mut(&'short mut self) -> Self::Target {
        MatMut {
            data: &mut *self.data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<'a> IntoConst for MatMut<'a> {
    type Target = MatRef<'a>;

    #[inline]
    fn into_const(self) -> Self::Target {
        MatRef::from_row_major_slice(self.data, self.nrows, self.ncols)
    }
}

impl<'a> MatMut<'a> {
    /// Creates a `MatMut` from a mutable row-major slice and its dimensions.
    ///
    /// # Panics
    /// The function panics if `data.len() != nrows * ncols`.
    #[inline]
    #[track_caller]
    pub fn from_row_major_slice_mut(data: &'a mut [f64], nrows: usize, ncols: usize) -> Self {
        assert!(usize::checked_mul(nrows, ncols) == Some(data.len()));
        Self { data, nrows, ncols }
    }

    /// Returns the number of rows of the matrix.
    #[inline(always)]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns the number of columns of the matrix.
    #[inline(always)]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns the number of rows and columns of the matrix.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Returns a view over the matrix.
    #[inline]
    pub fn as_ref(&self) -> MatRef<'_> {
        MatRef::from_row_major_slice(&*self.data, self.nrows, self.ncols)
    }

    /// Returns a mutable view over the matrix.
    #[inline]
    pub fn as_mut(&mut self) -> MatMut<'_> {
        self.rb_mut()
    }

    /// Returns the underlying row-major data.
    #[inline]
    pub fn as_slice_mut(self) -> &'a mut [f64] {
        self.data
    }

    /// Reads the value of the element at the given indices, with bound checks.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline(always)]
    #[track_caller]
    pub fn read(&self, row: usize, col: usize) -> f64 {
        self.as_ref().read(row, col)
    }

    /// Writes the value to the element at the given indices, with bound checks.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline(always)]
    #[track_caller]
    pub fn write(&mut self, row: usize, col: usize, value: f64) {
        assert!(all(row < self.nrows(), col < self.ncols()));
        unsafe { self.write_unchecked(row, col, value) };
    }

    /// Writes the value to the element at the given indices.
    ///
    /// # Safety
    /// The behavior is undefined if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn write_unchecked(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.nrows && col < self.ncols);
        *self.data.get_unchecked_mut(row * self.ncols + col) = value;
    }

    /// Returns a mutable reference to the element at the given indices, or an error if the
    /// indices are out of bounds.
    #[inline]
    pub fn get_mut(self, row: usize, col: usize) -> Result<&'a mut f64, MatError> {
        if row < self.nrows && col < self.ncols {
            let data = self.data;
            Ok(&mut data[row * self.ncols + col])
        } else {
            Err(MatError::IndexOutOfRange { row, col })
        }
    }

    /// Adds `rhs` to `self` elementwise.
    ///
    /// # Errors
    /// Returns [`MatError::DimensionMismatch`] if the shapes differ or either operand holds no
    /// elements. `self` is left untouched in that case.
    #[inline]
    pub fn try_add_assign(&mut self, rhs: MatRef<'_>) -> Result<(), MatError> {
        check_elementwise(self.as_ref(), rhs)?;
        linalg::zip::add_assign(self.rb_mut(), rhs);
        Ok(())
    }

    /// Subtracts `rhs` from `self` elementwise.
    ///
    /// # Errors
    /// Returns [`MatError::DimensionMismatch`] if the shapes differ or either operand holds no
    /// elements. `self` is left untouched in that case.
    #[inline]
    pub fn try_sub_assign(&mut self, rhs: MatRef<'_>) -> Result<(), MatError> {
        check_elementwise(self.as_ref(), rhs)?;
        linalg::zip::sub_assign(self.rb_mut(), rhs);
        Ok(())
    }

    /// Multiplies every element of `self` by `factor`.
    #[inline]
    pub fn scale(&mut self, factor: f64) {
        linalg::zip::scale(self.rb_mut(), factor);
    }
}

#[inline]
pub(crate) fn check_elementwise(lhs: MatRef<'_>, rhs: MatRef<'_>) -> Result<(), MatError> {
    if lhs.shape() != rhs.shape() || lhs.is_empty() || rhs.is_empty() {
        Err(MatError::DimensionMismatch {
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        })
    } else {
        Ok(())
    }
}

impl core::fmt::Debug for MatMut<'_> {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.as_ref(), f)
    }
}
