use super::Mat;
use crate::{assert, c64};

impl core::ops::Index<(usize, usize)> for Mat {
    type Output = c64;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &c64 {
        assert!(all(row < self.nrows(), col < self.ncols()));
        &self.as_slice()[self.offset(row, col)]
    }
}

impl core::ops::IndexMut<(usize, usize)> for Mat {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut c64 {
        assert!(all(row < self.nrows(), col < self.ncols()));
        let offset = self.offset(row, col);
        &mut self.as_slice_mut()[offset]
    }
}
