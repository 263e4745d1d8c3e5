use super::*;
use crate::{assert, linalg, MatError};
use reborrow::*;

/// Immutable view over a matrix, similar to an immutable reference to a 2D [prim@slice].
///
/// # Note
///
/// A view with a zero dimension holds no elements, but still reports its shape. For example the
/// minor of a `1×3` matrix is a `0×2` view.
#[derive(Copy, Clone)]
pub struct MatRef<'a> {
    data: &'a [f64],
    nrows: usize,
    ncols: usize,
}

impl<'short> Reborrow<'short> for MatRef<'_> {
    type Target = MatRef<'short>;

    #[inline]
    fn rb(&'short self) -> Self::Target {
        *self
    }
}

impl<'short> ReborrowMut<'short> for MatRef<'_> {
    type Target = MatRef<'short>;

    #[inline]
    fn rb_mut(&'short mut self) -> Self::Target {
        *self
    }
}

impl IntoConst for MatRef<'_> {
    type Target = Self;

    #[inline]
    fn into_const(self) -> Self::Target {
        self
    }
}

impl<'a> MatRef<'a> {
    /// Creates a `MatRef` from a row-major slice and its dimensions.
    ///
    /// # Panics
    /// The function panics if `data.len() != nrows * ncols`.
    #[inline]
    #[track_caller]
    pub fn from_row_major_slice(data: &'a [f64], nrows: usize, ncols: usize) -> Self {
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

    /// Returns `true` if the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a view over the matrix.
    #[inline]
    pub fn as_ref(&self) -> MatRef<'_> {
        *self
    }

    /// Returns the underlying row-major data.
    #[inline]
    pub fn as_slice(self) -> &'a [f64] {
        self.data
    }

    /// Returns the row at index `row`.
    ///
    /// # Panics
    /// The function panics if `row >= self.nrows()`.
    #[inline]
    #[track_caller]
    pub fn row(self, row: usize) -> &'a [f64] {
        assert!(row < self.nrows());
        let start = row * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Returns an iterator over the rows of the matrix.
    #[inline]
    pub fn rows(self) -> impl DoubleEndedIterator<Item = &'a [f64]> + ExactSizeIterator {
        let data = self.data;
        let ncols = self.ncols;
        (0..self.nrows).map(move |i| &data[i * ncols..(i + 1) * ncols])
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
        assert!(all(row < self.nrows(), col < self.ncols()));
        unsafe { self.read_unchecked(row, col) }
    }

    /// Reads the value of the element at the given indices.
    ///
    /// # Safety
    /// The behavior is undefined if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn read_unchecked(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.nrows && col < self.ncols);
        *self.data.get_unchecked(row * self.ncols + col)
    }

    /// Returns a reference to the element at the given indices, or an error if the indices are
    /// out of bounds.
    #[inline]
    pub fn get(self, row: usize, col: usize) -> Result<&'a f64, MatError> {
        if row < self.nrows && col < self.ncols {
            Ok(&self.data[row * self.ncols + col])
        } else {
            Err(MatError::IndexOutOfRange { row, col })
        }
    }

    /// Copies the content of the matrix into a new owned matrix.
    #[inline]
    pub fn to_owned(&self) -> Mat {
        Mat::from_fn(self.nrows, self.ncols, |i, j| unsafe {
            self.read_unchecked(i, j)
        })
    }

    /// Returns the transpose of `self` as a new matrix.
    ///
    /// # Example
    /// ```
    /// use matrixplus::mat;
    ///
    /// let matrix = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    /// let transpose = matrix.as_ref().transpose();
    ///
    /// let expected = mat![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]];
    /// assert!(expected == transpose);
    /// ```
    #[inline]
    #[must_use]
    pub fn transpose(self) -> Mat {
        Mat::from_fn(self.ncols, self.nrows, |i, j| unsafe {
            self.read_unchecked(j, i)
        })
    }

    /// Returns `true` if `self` and `other` have the same non-zero shape, and every pair of
    /// elements differs by at most [`EPSILON`](crate::EPSILON).
    #[inline]
    pub fn approx_eq(self, other: MatRef<'_>) -> bool {
        linalg::zip::approx_eq(self, other)
    }

    /// Returns the matrix obtained by deleting row `row` and column `col`.
    #[inline]
    pub fn minor(self, row: usize, col: usize) -> Result<Mat, MatError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatError::InvalidIndex { row, col });
        }
        Ok(linalg::minor::minor(self, row, col))
    }

    /// Returns the determinant of the matrix, computed by cofactor expansion.
    #[inline]
    pub fn determinant(self) -> Result<f64, MatError> {
        check_square(self)?;
        Ok(linalg::reductions::determinant::determinant(self))
    }
}

#[inline]
pub(crate) fn check_square(mat: MatRef<'_>) -> Result<(), MatError> {
    if mat.nrows() == mat.ncols() {
        Ok(())
    } else {
        Err(MatError::DimensionMismatch {
            lhs: mat.shape(),
            rhs: (mat.ncols(), mat.nrows()),
        })
    }
}

impl core::fmt::Debug for MatRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        struct DebugRow<'a>(&'a [f64]);

        impl core::fmt::Debug for DebugRow<'_> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        writeln!(f, "[")?;
        for row in self.rows() {
            core::fmt::Debug::fmt(&DebugRow(row), f)?;
            f.write_str(",\n")?;
        }
        write!(f, "]")
    }
}
