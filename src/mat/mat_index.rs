use super::*;
use crate::assert;
use core::ops::{Index, IndexMut};

impl Index<(usize, usize)> for MatRef<'_> {
    type Output = f64;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(all(row < self.nrows(), col < self.ncols()));
        &self.as_slice()[row * self.ncols() + col]
    }
}

impl Index<(usize, usize)> for MatMut<'_> {
    type Output = f64;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(all(row < self.nrows(), col < self.ncols()));
        let ncols = self.ncols();
        &self.as_ref().as_slice()[row * ncols + col]
    }
}

impl IndexMut<(usize, usize)> for MatMut<'_> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(all(row < self.nrows(), col < self.ncols()));
        let ncols = self.ncols();
        &mut self.as_mut().as_slice_mut()[row * ncols + col]
    }
}

impl Index<(usize, usize)> for Mat {
    type Output = f64;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(all(row < self.nrows(), col < self.ncols()));
        &self.as_ref().as_slice()[row * self.ncols() + col]
    }
}

impl IndexMut<(usize, usize)> for Mat {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(all(row < self.nrows(), col < self.ncols()));
        let ncols = self.ncols();
        &mut self.as_mut().as_slice_mut()[row * ncols + col]
    }
}
