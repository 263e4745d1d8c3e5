use super::*;
use crate::{assert, linalg, mat::matref::check_square, MatError};

/// Heap allocated resizable matrix, similar to a 2D [`Vec`].
///
/// # Note
///
/// The memory layout of `Mat` is guaranteed to be row-major and contiguous: element `(i, j)` is
/// stored at offset `i * self.ncols() + j`.
///
/// A default constructed `Mat` is the empty `0×0` matrix, which owns no storage. Matrices with
/// a zero dimension are never equal to anything, including themselves, and are rejected by the
/// elementwise operations.
#[derive(Clone, Default)]
pub struct Mat {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Mat {
    /// Returns an empty matrix of dimension `0×0`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            nrows: 0,
            ncols: 0,
        }
    }

    /// Returns a new matrix with dimensions `(nrows, ncols)`, filled with the provided function.
    ///
    /// Either dimension may be zero, in which case the matrix holds no elements.
    #[inline]
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Returns a new matrix with dimensions `(nrows, ncols)`, filled with zeros.
    ///
    /// # Errors
    /// Returns [`MatError::InvalidDimension`] if either dimension is zero.
    #[inline]
    pub fn try_zeros(nrows: usize, ncols: usize) -> Result<Self, MatError> {
        if nrows == 0 || ncols == 0 {
            return Err(MatError::InvalidDimension { nrows, ncols });
        }
        Ok(Self {
            data: vec![0.0; nrows * ncols],
            nrows,
            ncols,
        })
    }

    /// Returns a new matrix with dimensions `(nrows, ncols)`, filled with zeros.
    ///
    /// # Panics
    /// The function panics if either dimension is zero.
    #[inline]
    #[track_caller]
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        assert!(all(nrows > 0, ncols > 0));
        Self::full(nrows, ncols, 0.0)
    }

    /// Returns a new matrix with dimensions `(nrows, ncols)`, filled with a constant value.
    #[inline]
    pub fn full(nrows: usize, ncols: usize, constant: f64) -> Self {
        Self {
            data: vec![constant; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Returns the `n×n` identity matrix.
    ///
    /// # Panics
    /// The function panics if `n` is zero.
    #[inline]
    #[track_caller]
    #[doc(alias = "eye")]
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix.data[i * n + i] = 1.0;
        }
        matrix
    }

    /// Returns a new matrix from a list of rows.
    ///
    /// # Errors
    /// Returns [`MatError::DimensionMismatch`] if the rows do not all have the same length.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self, MatError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |row| row.len());

        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(MatError::DimensionMismatch {
                    lhs: (1, row.len()),
                    rhs: (1, ncols),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self { data, nrows, ncols })
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

    /// Returns `true` if the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a view over the matrix.
    #[inline]
    pub fn as_ref(&self) -> MatRef<'_> {
        MatRef::from_row_major_slice(&self.data, self.nrows, self.ncols)
    }

    /// Returns a mutable view over the matrix.
    #[inline]
    pub fn as_mut(&mut self) -> MatMut<'_> {
        MatMut::from_row_major_slice_mut(&mut self.data, self.nrows, self.ncols)
    }

    /// Returns the row at index `row`.
    ///
    /// # Panics
    /// The function panics if `row >= self.nrows()`.
    #[inline]
    #[track_caller]
    pub fn row(&self, row: usize) -> &[f64] {
        self.as_ref().row(row)
    }

    /// Moves the content of `self` into a new matrix, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
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
        self.as_mut().write(row, col, value)
    }

    /// Returns the element at the given indices.
    ///
    /// # Errors
    /// Returns [`MatError::IndexOutOfRange`] if the indices are out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatError> {
        self.as_ref().get(row, col).copied()
    }

    /// Returns a mutable reference to the element at the given indices.
    ///
    /// # Errors
    /// Returns [`MatError::IndexOutOfRange`] if the indices are out of bounds.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64, MatError> {
        self.as_mut().get_mut(row, col)
    }

    /// Sets the element at the given indices.
    ///
    /// # Errors
    /// Returns [`MatError::IndexOutOfRange`] if the indices are out of bounds, in which case the
    /// matrix is left untouched.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Resizes the matrix in-place so that the new dimensions are `(new_nrows, new_ncols)`.
    /// New elements are created with the given function `f`, so that elements at indices `(i, j)`
    /// are created by calling `f(i, j)`. Elements in the overlapping region keep their value.
    pub fn resize_with(
        &mut self,
        new_nrows: usize,
        new_ncols: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) {
        if (new_nrows, new_ncols) == self.shape() {
            return;
        }

        let old = self.take();
        *self = Self::from_fn(new_nrows, new_ncols, |i, j| {
            if i < old.nrows && j < old.ncols {
                old.data[i * old.ncols + j]
            } else {
                f(i, j)
            }
        });
    }

    /// Sets the number of rows to `nrows`, keeping the first `min(nrows, self.nrows())` rows and
    /// filling the new ones with zeros.
    ///
    /// Unlike [`Mat::try_zeros`], a count of zero is accepted and leaves a matrix with no
    /// elements.
    ///
    /// # Example
    /// ```
    /// use matrixplus::mat;
    ///
    /// let mut m = mat![[1.0, 2.0], [3.0, 4.0]];
    /// m.resize_rows(3);
    ///
    /// assert!(m == mat![[1.0, 2.0], [3.0, 4.0], [0.0, 0.0]]);
    /// ```
    #[inline]
    pub fn resize_rows(&mut self, nrows: usize) {
        self.resize_with(nrows, self.ncols, |_, _| 0.0);
    }

    /// Sets the number of columns to `ncols`, keeping the first `min(ncols, self.ncols())`
    /// columns and filling the new ones with zeros.
    ///
    /// Unlike [`Mat::try_zeros`], a count of zero is accepted and leaves a matrix with no
    /// elements.
    #[inline]
    pub fn resize_cols(&mut self, ncols: usize) {
        self.resize_with(self.nrows, ncols, |_, _| 0.0);
    }

    /// Returns `true` if `self` and `other` have the same non-zero shape, and every pair of
    /// elements differs by at most [`EPSILON`](crate::EPSILON).
    ///
    /// Two empty matrices compare unequal.
    #[inline]
    pub fn approx_eq(&self, other: &Mat) -> bool {
        self.as_ref().approx_eq(other.as_ref())
    }

    /// Adds `rhs` to `self` elementwise.
    ///
    /// # Errors
    /// Returns [`MatError::DimensionMismatch`] if the shapes differ or either operand holds no
    /// elements. `self` is left untouched in that case.
    #[inline]
    pub fn try_add_assign(&mut self, rhs: &Mat) -> Result<(), MatError> {
        self.as_mut().try_add_assign(rhs.as_ref())
    }

    /// Subtracts `rhs` from `self` elementwise.
    ///
    /// # Errors
    /// Returns [`MatError::DimensionMismatch`] if the shapes differ or either operand holds no
    /// elements. `self` is left untouched in that case.
    #[inline]
    pub fn try_sub_assign(&mut self, rhs: &Mat) -> Result<(), MatError> {
        self.as_mut().try_sub_assign(rhs.as_ref())
    }

    /// Multiplies every element of `self` by `factor`.
    #[inline]
    pub fn scale(&mut self, factor: f64) {
        self.as_mut().scale(factor)
    }

    /// Returns the matrix product `self * rhs`.
    ///
    /// # Errors
    /// Returns [`MatError::DimensionMismatch`] if `self.ncols() != rhs.nrows()`.
    #[inline]
    pub fn try_mul(&self, rhs: &Mat) -> Result<Mat, MatError> {
        check_matmul(self.as_ref(), rhs.as_ref())?;
        let mut out = Mat::full(self.nrows, rhs.ncols, 0.0);
        linalg::matmul::matmul(out.as_mut(), self.as_ref(), rhs.as_ref());
        Ok(out)
    }

    /// Replaces `self` with the matrix product `self * rhs`.
    ///
    /// # Errors
    /// Returns [`MatError::DimensionMismatch`] if `self.ncols() != rhs.nrows()`. `self` is left
    /// untouched in that case.
    #[inline]
    pub fn try_mul_assign(&mut self, rhs: &Mat) -> Result<(), MatError> {
        *self = self.try_mul(rhs)?;
        Ok(())
    }

    /// Returns the transpose of `self`.
    #[inline]
    #[must_use]
    pub fn transpose(&self) -> Mat {
        self.as_ref().transpose()
    }

    /// Returns the matrix obtained by deleting row `row` and column `col`.
    ///
    /// # Errors
    /// Returns [`MatError::InvalidIndex`] if `row >= self.nrows()` or `col >= self.ncols()`.
    #[inline]
    pub fn minor(&self, row: usize, col: usize) -> Result<Mat, MatError> {
        self.as_ref().minor(row, col)
    }

    /// Returns the determinant of the matrix, computed by cofactor expansion along the first row.
    ///
    /// The determinant of the empty matrix is `0.0`.
    ///
    /// # Errors
    /// Returns [`MatError::DimensionMismatch`] if the matrix is not square.
    ///
    /// # Example
    /// ```
    /// use matrixplus::mat;
    ///
    /// let m = mat![[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]];
    /// assert_eq!(m.determinant(), Ok(-306.0));
    /// ```
    #[inline]
    pub fn determinant(&self) -> Result<f64, MatError> {
        self.as_ref().determinant()
    }

    /// Returns the matrix of cofactors, whose element `(i, j)` is
    /// `(-1)^(i + j) * det(self.minor(i, j))`.
    ///
    /// # Errors
    /// Returns [`MatError::DimensionMismatch`] if the matrix is not square.
    #[inline]
    #[doc(alias = "cofactor_matrix")]
    pub fn calc_complements(&self) -> Result<Mat, MatError> {
        check_square(self.as_ref())?;
        Ok(linalg::inverse::cofactor_matrix(self.as_ref()))
    }

    /// Returns the adjugate, the transpose of the matrix of cofactors.
    ///
    /// # Errors
    /// Returns [`MatError::DimensionMismatch`] if the matrix is not square.
    #[inline]
    pub fn adjugate(&self) -> Result<Mat, MatError> {
        check_square(self.as_ref())?;
        Ok(linalg::inverse::adjugate(self.as_ref()))
    }

    /// Returns the inverse of the matrix, computed as the adjugate divided by the determinant.
    ///
    /// # Errors
    /// * [`MatError::DimensionMismatch`] if the matrix is not square.
    /// * [`MatError::SingularMatrix`] if the absolute value of the determinant is at most
    ///   [`EPSILON`](crate::EPSILON).
    ///
    /// # Example
    /// ```
    /// use matrixplus::{mat, MatError};
    ///
    /// let m = mat![[1.0, 2.0], [3.0, 4.0]];
    /// assert!(m.inverse().unwrap() == mat![[-2.0, 1.0], [1.5, -0.5]]);
    ///
    /// let singular = mat![[1.0, 2.0], [2.0, 4.0]];
    /// assert_eq!(singular.inverse().unwrap_err(), MatError::SingularMatrix);
    /// ```
    #[inline]
    pub fn inverse(&self) -> Result<Mat, MatError> {
        check_square(self.as_ref())?;
        linalg::inverse::inverse(self.as_ref())
    }
}

#[inline]
pub(crate) fn check_matmul(lhs: MatRef<'_>, rhs: MatRef<'_>) -> Result<(), MatError> {
    if lhs.ncols() == rhs.nrows() {
        Ok(())
    } else {
        Err(MatError::DimensionMismatch {
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        })
    }
}

impl core::fmt::Debug for Mat {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.as_ref(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert, mat};

    #[test]
    fn test_new_is_empty() {
        let m = Mat::new();
        assert!(all(m.nrows() == 0, m.ncols() == 0, m.is_empty()));
        assert!(Mat::default().shape() == (0, 0));
    }

    #[test]
    fn test_try_zeros() {
        let m = Mat::try_zeros(2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert!(m.as_ref().as_slice().iter().all(|&x| x == 0.0));

        assert_eq!(
            Mat::try_zeros(0, 3).unwrap_err(),
            MatError::InvalidDimension { nrows: 0, ncols: 3 }
        );
        assert_eq!(
            Mat::try_zeros(3, 0).unwrap_err(),
            MatError::InvalidDimension { nrows: 3, ncols: 0 }
        );
    }

    #[test]
    #[should_panic]
    fn test_zeros_with_zero_rows_should_panic() {
        _ = Mat::zeros(0, 2);
    }

    #[test]
    fn test_identity() {
        let m = Mat::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.read(i, j), if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_from_rows() {
        let m = Mat::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.read(1, 0), 3.0);

        assert_eq!(
            Mat::from_rows(&[&[1.0, 2.0], &[3.0]]).unwrap_err(),
            MatError::DimensionMismatch {
                lhs: (1, 1),
                rhs: (1, 2)
            }
        );
        assert!(Mat::from_rows(&[]).unwrap().shape() == (0, 0));
    }

    #[test]
    fn test_clone_is_deep() {
        let a = mat![[1.0, 2.0], [3.0, 4.0]];
        let mut b = a.clone();
        b.write(0, 0, 10.0);

        assert_eq!(a.read(0, 0), 1.0);
        assert_eq!(b.read(0, 0), 10.0);

        let mut c = mat![[0.0]];
        c.clone_from(&a);
        assert!(c == a);
    }

    #[test]
    fn test_take_leaves_empty() {
        let mut a = mat![[1.0, 2.0], [3.0, 4.0]];
        let b = a.take();

        assert!(all(a.shape() == (0, 0), a.is_empty()));
        assert!(b == mat![[1.0, 2.0], [3.0, 4.0]]);

        let c = a.take();
        assert!(c.shape() == (0, 0));
    }

    #[test]
    fn test_get_set() {
        let mut m = Mat::zeros(2, 2);
        m.set(1, 0, 3.5).unwrap();
        assert_eq!(m.get(1, 0), Ok(3.5));

        assert_eq!(
            m.set(2, 0, 1.0),
            Err(MatError::IndexOutOfRange { row: 2, col: 0 })
        );
        assert_eq!(
            m.get(0, 5),
            Err(MatError::IndexOutOfRange { row: 0, col: 5 })
        );
        *m.get_mut(0, 1).unwrap() += 2.0;
        assert_eq!(m.get(0, 1), Ok(2.0));
    }

    #[test]
    fn test_resize_rows() {
        let mut m = mat![[1.0, 2.0], [3.0, 4.0]];

        m.resize_rows(3);
        assert!(m == mat![[1.0, 2.0], [3.0, 4.0], [0.0, 0.0]]);

        m.resize_rows(1);
        assert!(m == mat![[1.0, 2.0]]);

        m.resize_rows(0);
        assert!(all(m.shape() == (0, 2), m.is_empty()));
    }

    #[test]
    fn test_resize_cols() {
        let mut m = mat![[1.0, 2.0], [3.0, 4.0]];

        m.resize_cols(3);
        assert!(m == mat![[1.0, 2.0, 0.0], [3.0, 4.0, 0.0]]);

        m.resize_cols(1);
        assert!(m == mat![[1.0], [3.0]]);

        m.resize_cols(0);
        assert!(all(m.shape() == (2, 0), m.is_empty()));
    }

    #[test]
    fn test_resize_empty() {
        let mut m = Mat::new();
        m.resize_rows(2);
        assert!(all(m.shape() == (2, 0), m.is_empty()));
        m.resize_cols(2);
        assert!(m == Mat::zeros(2, 2));
    }

    #[test]
    fn test_equality() {
        let a = mat![[1.0, 2.0], [3.0, 4.0]];
        let b = mat![[1.0 + 1e-8, 2.0], [3.0, 4.0 - 1e-8]];
        let c = mat![[1.0 + 1e-6, 2.0], [3.0, 4.0]];

        assert!(a.approx_eq(&a));
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&c));
        assert!(!a.approx_eq(&mat![[1.0, 2.0]]));
        assert!(!Mat::new().approx_eq(&Mat::new()));
    }

    #[test]
    fn test_add_sub() {
        let mut a = mat![[1.0, 2.0], [3.0, 4.0]];
        let b = mat![[0.5, -1.0], [2.0, 0.0]];

        a.try_add_assign(&b).unwrap();
        assert!(a == mat![[1.5, 1.0], [5.0, 4.0]]);

        a.try_sub_assign(&b).unwrap();
        assert!(a == mat![[1.0, 2.0], [3.0, 4.0]]);

        let copy = a.clone();
        a.try_add_assign(&copy).unwrap();
        assert!(a == mat![[2.0, 4.0], [6.0, 8.0]]);

        let copy = a.clone();
        a.try_sub_assign(&copy).unwrap();
        assert!(a == Mat::zeros(2, 2));
    }

    #[test]
    fn test_add_sub_mismatch() {
        let mut a = mat![[1.0, 2.0], [3.0, 4.0]];
        let b = mat![[1.0, 2.0, 3.0]];

        assert_eq!(
            a.try_add_assign(&b),
            Err(MatError::DimensionMismatch {
                lhs: (2, 2),
                rhs: (1, 3)
            })
        );
        assert_eq!(
            a.try_sub_assign(&Mat::new()),
            Err(MatError::DimensionMismatch {
                lhs: (2, 2),
                rhs: (0, 0)
            })
        );

        let mut empty = Mat::new();
        assert_eq!(
            empty.try_add_assign(&Mat::new()),
            Err(MatError::DimensionMismatch {
                lhs: (0, 0),
                rhs: (0, 0)
            })
        );
        assert!(a == mat![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_scale() {
        let mut a = mat![[1.0, -2.0], [3.0, 4.0]];
        a.scale(-0.5);
        assert!(a == mat![[-0.5, 1.0], [-1.5, -2.0]]);

        let mut empty = Mat::new();
        empty.scale(3.0);
        assert!(empty.shape() == (0, 0));
    }

    #[test]
    fn test_mul() {
        let a = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = mat![[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]];

        assert!(a.try_mul(&b).unwrap() == mat![[58.0, 64.0], [139.0, 154.0]]);

        let zero = Mat::zeros(3, 2);
        assert!(a.try_mul(&zero).unwrap() == Mat::zeros(2, 2));

        assert_eq!(
            a.try_mul(&a).unwrap_err(),
            MatError::DimensionMismatch {
                lhs: (2, 3),
                rhs: (2, 3)
            }
        );
    }

    #[test]
    fn test_mul_assign() {
        let mut a = mat![[1.0, 2.0], [3.0, 4.0]];
        let copy = a.clone();
        a.try_mul_assign(&copy).unwrap();
        assert!(a == mat![[7.0, 10.0], [15.0, 22.0]]);

        let mut b = mat![[1.0, 2.0, 3.0]];
        assert!(b.try_mul_assign(&copy).is_err());
        assert!(b == mat![[1.0, 2.0, 3.0]]);
    }

    #[test]
    fn test_debug() {
        let m = mat![[1.0], [2.5]];
        assert_eq!(format!("{m:?}"), "[\n[1.0],\n[2.5],\n]");
    }
}
