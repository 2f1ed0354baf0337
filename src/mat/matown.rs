use crate::{assert, c64, debug_assert, MatError, TOLERANCE};
use num_traits::{One, Zero};

/// Heap allocated dense complex matrix, similar to a 2D [`Vec`].
///
/// # Note
///
/// The memory layout of `Mat` is column-major: each column is stored contiguously, and the
/// columns follow each other without padding.
///
/// Let us consider a 3×4 matrix
///
/// ```notcode
///  0 │ 3 │ 6 │  9
/// ───┼───┼───┼───
///  1 │ 4 │ 7 │ 10
/// ───┼───┼───┼───
///  2 │ 5 │ 8 │ 11
/// ```
/// The memory representation of the data held by such a matrix is the following:
///
/// ```notcode
/// 0 1 2 3 4 5 6 7 8 9 10 11
/// ```
///
/// A matrix always has at least one row and one column. Every operation returns a new matrix
/// and leaves its operands untouched, the only exceptions being [`Mat::write`] and
/// [`IndexMut`](core::ops::IndexMut).
#[derive(Clone, PartialEq)]
pub struct Mat {
    data: Vec<c64>,
    nrows: usize,
    ncols: usize,
}

impl Mat {
    /// Returns a new matrix with dimensions `(nrows, ncols)`, filled with the provided function.
    ///
    /// # Panics
    /// The function panics if either dimension is zero.
    #[track_caller]
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> c64) -> Self {
        assert!(all(nrows > 0, ncols > 0));

        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Returns a new matrix with dimensions `(nrows, ncols)`, filled with zeros.
    ///
    /// # Panics
    /// The function panics if either dimension is zero.
    #[track_caller]
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |_, _| c64::zero())
    }

    /// Returns a new `n×n` matrix filled with zeros, except the main diagonal which is filled
    /// with ones.
    ///
    /// # Panics
    /// The function panics if `n` is zero.
    #[track_caller]
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { c64::one() } else { c64::zero() })
    }

    /// Returns a zero matrix with the same dimensions as `self`.
    #[inline]
    pub fn zeros_like(&self) -> Self {
        Self::zeros(self.nrows, self.ncols)
    }

    /// Returns the identity matrix with the same dimensions as `self`.
    ///
    /// # Errors
    /// Fails with [`MatError::NotSquare`] if `self` is not square.
    #[inline]
    pub fn identity_like(&self) -> Result<Self, MatError> {
        crate::error::check_square(self.nrows, self.ncols)?;
        Ok(Self::identity(self.nrows))
    }

    /// Builds a matrix from its rows.
    ///
    /// # Errors
    /// Fails with [`MatError::InvalidDimensions`] if there are no rows, if the first row is
    /// empty, or if the rows do not all have the same length.
    pub fn from_rows<R: AsRef<[c64]>>(rows: &[R]) -> Result<Self, MatError> {
        let nrows = rows.len();
        let ncols = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);

        if nrows == 0 || ncols == 0 {
            return Err(MatError::InvalidDimensions { nrows, ncols });
        }
        if let Some(ragged) = rows.iter().find(|row| row.as_ref().len() != ncols) {
            return Err(MatError::InvalidDimensions {
                nrows,
                ncols: ragged.as_ref().len(),
            });
        }

        Ok(Self::from_fn(nrows, ncols, |i, j| rows[i].as_ref()[j]))
    }

    /// Builds a matrix with dimensions `(nrows, ncols)` from elements listed row by row.
    ///
    /// # Errors
    /// Fails with [`MatError::InvalidDimensions`] if either dimension is zero, or if
    /// `data.len() != nrows * ncols`.
    pub fn from_row_major_slice(
        nrows: usize,
        ncols: usize,
        data: &[c64],
    ) -> Result<Self, MatError> {
        if nrows == 0 || ncols == 0 || data.len() != nrows * ncols {
            return Err(MatError::InvalidDimensions { nrows, ncols });
        }
        Ok(Self::from_fn(nrows, ncols, |i, j| data[i * ncols + j]))
    }

    /// Lifts a vector into an `n×1` matrix.
    ///
    /// # Panics
    /// The function panics if `col` is empty.
    #[track_caller]
    pub fn from_col(col: &[c64]) -> Self {
        Self::from_fn(col.len(), 1, |i, _| col[i])
    }

    #[doc(hidden)]
    #[track_caller]
    pub fn __from_nested(rows: &[&[c64]]) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map(|row| row.len()).unwrap_or(0);
        assert!(all(nrows > 0, ncols > 0));
        for row in rows {
            assert!(row.len() == ncols);
        }
        Self::from_fn(nrows, ncols, |i, j| rows[i][j])
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
    #[inline(always)]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Returns `true` if the matrix has as many rows as columns.
    #[inline(always)]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Returns the elements of the matrix in column-major order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[c64] {
        &self.data
    }

    #[inline(always)]
    pub(crate) fn as_slice_mut(&mut self) -> &mut [c64] {
        &mut self.data
    }

    /// Returns a reference to a slice over the column at the given index.
    ///
    /// # Panics
    /// The function panics if `col >= self.ncols()`.
    #[inline]
    #[track_caller]
    pub fn col_as_slice(&self, col: usize) -> &[c64] {
        assert!(col < self.ncols);
        let start = col * self.nrows;
        &self.data[start..start + self.nrows]
    }

    #[inline(always)]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(all(row < self.nrows, col < self.ncols));
        col * self.nrows + row
    }

    /// Reads the value of the element at the given indices.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline(always)]
    #[track_caller]
    pub fn read(&self, row: usize, col: usize) -> c64 {
        assert!(all(row < self.nrows, col < self.ncols));
        self.data[self.offset(row, col)]
    }

    /// Writes the value to the element at the given indices.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline(always)]
    #[track_caller]
    pub fn write(&mut self, row: usize, col: usize, value: c64) {
        assert!(all(row < self.nrows, col < self.ncols));
        let offset = self.offset(row, col);
        self.data[offset] = value;
    }

    /// Returns the element at the given one-based row and column numbers.
    ///
    /// # Errors
    /// Fails with [`MatError::InvalidIndex`] if `row` is not in `1..=self.nrows()`, or if `col`
    /// is not in `1..=self.ncols()`.
    pub fn element(&self, row: usize, col: usize) -> Result<c64, MatError> {
        if row == 0 || row > self.nrows {
            return Err(MatError::InvalidIndex {
                index: row,
                len: self.nrows,
            });
        }
        if col == 0 || col > self.ncols {
            return Err(MatError::InvalidIndex {
                index: col,
                len: self.ncols,
            });
        }
        Ok(self.read(row - 1, col - 1))
    }

    /// Returns a copy of the row at the given zero-based index.
    ///
    /// # Errors
    /// Fails with [`MatError::InvalidIndex`] if `row >= self.nrows()`.
    pub fn row(&self, row: usize) -> Result<Vec<c64>, MatError> {
        if row >= self.nrows {
            return Err(MatError::InvalidIndex {
                index: row,
                len: self.nrows,
            });
        }
        Ok((0..self.ncols).map(|j| self.read(row, j)).collect())
    }

    /// Returns a copy of the column at the given zero-based index.
    ///
    /// # Errors
    /// Fails with [`MatError::InvalidIndex`] if `col >= self.ncols()`.
    pub fn col(&self, col: usize) -> Result<Vec<c64>, MatError> {
        if col >= self.ncols {
            return Err(MatError::InvalidIndex {
                index: col,
                len: self.ncols,
            });
        }
        Ok(self.col_as_slice(col).to_vec())
    }

    /// Returns the first column of the matrix, which is the whole vector when the matrix is a
    /// column vector.
    #[inline]
    pub fn to_vector(&self) -> Vec<c64> {
        self.col_as_slice(0).to_vec()
    }

    /// Returns the elements of the main diagonal.
    pub fn diagonal(&self) -> Vec<c64> {
        (0..Ord::min(self.nrows, self.ncols))
            .map(|i| self.read(i, i))
            .collect()
    }

    /// Returns the transpose of `self`.
    #[doc(alias = "t")]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self.read(j, i))
    }

    /// Returns the element-wise conjugate of `self`.
    pub fn conjugate(&self) -> Self {
        Self {
            data: self.data.iter().map(|z| z.conj()).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Returns the conjugate transpose of `self`.
    #[doc(alias = "conjugate_transpose")]
    #[doc(alias = "h")]
    pub fn adjoint(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self.read(j, i).conj())
    }

    /// Returns a copy of `self` with the given row and column removed.
    ///
    /// # Errors
    /// - [`MatError::NotSquare`] if `self` is not square.
    /// - [`MatError::InvalidDimensions`] if `self` is smaller than `3×3`.
    /// - [`MatError::InvalidIndex`] if `row` or `col` is out of range.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Self, MatError> {
        crate::error::check_square(self.nrows, self.ncols)?;
        if self.nrows < 3 {
            return Err(MatError::InvalidDimensions {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        if row >= self.nrows {
            return Err(MatError::InvalidIndex {
                index: row,
                len: self.nrows,
            });
        }
        if col >= self.ncols {
            return Err(MatError::InvalidIndex {
                index: col,
                len: self.ncols,
            });
        }
        Ok(self.remove_row_col(row, col))
    }

    /// Same as [`Mat::submatrix`], without the size or index checks.
    pub(crate) fn remove_row_col(&self, row: usize, col: usize) -> Self {
        Self::from_fn(self.nrows - 1, self.ncols - 1, |i, j| {
            let i = if i < row { i } else { i + 1 };
            let j = if j < col { j } else { j + 1 };
            self.read(i, j)
        })
    }

    /// Returns the minor matrix obtained by removing the first row and the given column.
    ///
    /// # Errors
    /// Same as [`Mat::submatrix`].
    #[inline]
    pub fn minor(&self, col: usize) -> Result<Self, MatError> {
        self.submatrix(0, col)
    }

    /// Returns the matrix `[self | other]`.
    ///
    /// # Errors
    /// Fails with [`MatError::ShapeMismatch`] if the row counts differ.
    #[doc(alias = "augment")]
    pub fn join_right(&self, other: &Mat) -> Result<Self, MatError> {
        if self.nrows != other.nrows {
            return Err(MatError::ShapeMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Ok(Self {
            data,
            nrows: self.nrows,
            ncols: self.ncols + other.ncols,
        })
    }

    /// Alias for [`Mat::join_right`].
    #[inline]
    pub fn augment(&self, other: &Mat) -> Result<Self, MatError> {
        self.join_right(other)
    }

    /// Returns the matrix `[self | I]`.
    ///
    /// # Errors
    /// Fails with [`MatError::NotSquare`] if `self` is not square.
    pub fn augment_with_identity(&self) -> Result<Self, MatError> {
        self.join_right(&self.identity_like()?)
    }

    fn split_cols(&self) -> Result<usize, MatError> {
        if self.ncols % 2 != 0 {
            return Err(MatError::InvalidDimensions {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(self.ncols / 2)
    }

    /// Returns the left half of the columns of `self`, the inverse of
    /// [`Mat::augment_with_identity`] on its left side.
    ///
    /// # Errors
    /// Fails with [`MatError::InvalidDimensions`] if the column count is odd.
    pub fn left_half(&self) -> Result<Self, MatError> {
        let half = self.split_cols()?;
        Ok(Self {
            data: self.data[..half * self.nrows].to_vec(),
            nrows: self.nrows,
            ncols: half,
        })
    }

    /// Returns the right half of the columns of `self`.
    ///
    /// # Errors
    /// Fails with [`MatError::InvalidDimensions`] if the column count is odd.
    pub fn right_half(&self) -> Result<Self, MatError> {
        let half = self.split_cols()?;
        Ok(Self {
            data: self.data[half * self.nrows..].to_vec(),
            nrows: self.nrows,
            ncols: half,
        })
    }

    /// Returns a new matrix with `f` applied to every element.
    pub fn map(&self, f: impl FnMut(c64) -> c64) -> Self {
        Self {
            data: self.data.iter().copied().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Checks whether `self` and `other` have the same shape and are element-wise equal within
    /// [`TOLERANCE`].
    #[inline]
    pub fn approx_eq(&self, other: &Mat) -> bool {
        self.approx_eq_with_tol(other, TOLERANCE)
    }

    /// Checks whether `self` and `other` have the same shape and are element-wise equal within
    /// `tol`. Matrices of different shapes are never equal.
    pub fn approx_eq_with_tol(&self, other: &Mat, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.approx_eq_with_tol(*b, tol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert, mat};

    #[test]
    fn test_from_fn_layout() {
        let A = Mat::from_fn(3, 4, |i, j| c64::new((i + 3 * j) as f64, 0.0));
        for (k, z) in A.as_slice().iter().enumerate() {
            assert!(z.re == k as f64);
        }
        assert!(A.col_as_slice(2).to_vec() == vec![c64::from(6.0), c64::from(7.0), c64::from(8.0)]);
    }

    #[test]
    #[should_panic]
    fn test_zero_dimension() {
        let _ = Mat::zeros(0, 3);
    }

    #[test]
    fn test_from_rows() {
        let A = Mat::from_rows(&[
            vec![c64::new(1.0, 1.0), c64::new(2.0, 0.0)],
            vec![c64::new(3.0, 0.0), c64::new(4.0, -1.0)],
        ])
        .unwrap();
        assert!(A == mat![[(1.0, 1.0), 2.0], [3.0, (4.0, -1.0)]]);

        let empty: &[Vec<c64>] = &[];
        assert!(Mat::from_rows(empty) == Err(MatError::InvalidDimensions { nrows: 0, ncols: 0 }));
        assert!(
            Mat::from_rows(&[vec![c64::one(), c64::one()], vec![c64::one()]])
                == Err(MatError::InvalidDimensions { nrows: 2, ncols: 1 })
        );
    }

    #[test]
    fn test_from_row_major_slice() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0].map(c64::from);
        let A = Mat::from_row_major_slice(2, 3, &data).unwrap();
        assert!(A == mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert!(
            Mat::from_row_major_slice(3, 3, &data)
                == Err(MatError::InvalidDimensions { nrows: 3, ncols: 3 })
        );
    }

    #[test]
    fn test_identity_like() {
        let A = mat![[1.0, 2.0], [3.0, 4.0]];
        assert!(A.identity_like().unwrap() == Mat::identity(2));
        assert!(A.zeros_like() == Mat::zeros(2, 2));

        let B = mat![[1.0, 2.0, 3.0]];
        assert!(B.identity_like() == Err(MatError::NotSquare { nrows: 1, ncols: 3 }));
    }

    #[test]
    fn test_element_is_one_based() {
        let A = mat![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        assert!(A.element(1, 1) == Ok(c64::new(1.0, 0.0)));
        assert!(A.element(3, 2) == Ok(c64::new(6.0, 0.0)));
        assert!(A.element(0, 1) == Err(MatError::InvalidIndex { index: 0, len: 3 }));
        assert!(A.element(1, 3) == Err(MatError::InvalidIndex { index: 3, len: 2 }));
    }

    #[test]
    fn test_row_col() {
        let A = mat![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        assert!(A.row(1) == Ok(vec![c64::from(3.0), c64::from(4.0)]));
        assert!(A.col(1) == Ok(vec![c64::from(2.0), c64::from(4.0), c64::from(6.0)]));
        assert!(Ok(A.to_vector()) == A.col(0));
        assert!(A.diagonal() == vec![c64::from(1.0), c64::from(4.0)]);

        let v = Mat::from_col(&A.to_vector());
        assert!(v.shape() == (3, 1));
        assert!(Ok(v.to_vector()) == A.col(0));
    }

    #[test]
    fn test_row_col_out_of_range() {
        let A = mat![[1.0, 2.0], [3.0, 4.0]];
        assert!(A.row(2) == Err(MatError::InvalidIndex { index: 2, len: 2 }));
        assert!(A.col(5) == Err(MatError::InvalidIndex { index: 5, len: 2 }));

        let R = mat![[1.0, 2.0, 3.0]];
        assert!(R.row(1) == Err(MatError::InvalidIndex { index: 1, len: 1 }));
        assert!(R.col(2) == Ok(vec![c64::from(3.0)]));
    }

    #[test]
    fn test_write() {
        let mut A = Mat::zeros(2, 2);
        A.write(1, 0, c64::i());
        assert!(A.read(1, 0) == c64::i());
        assert!(A.read(0, 1) == c64::zero());
    }

    #[test]
    fn test_transpose_adjoint() {
        let A = mat![[(1.0, 1.0), (2.0, -3.0), 0.5], [(0.0, 4.0), 5.0, (-1.0, -1.0)]];

        let T = A.transpose();
        assert!(T.shape() == (3, 2));
        assert!(T.read(2, 1) == A.read(1, 2));
        assert!(T.transpose() == A);

        let H = A.adjoint();
        assert!(H.read(1, 0) == c64::new(2.0, 3.0));
        assert!(H.adjoint() == A);
        assert!(H == A.conjugate().transpose());
        assert!(A.conjugate().conjugate() == A);
    }

    #[test]
    fn test_submatrix() {
        let A = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        assert!(A.submatrix(1, 1).unwrap() == mat![[1.0, 3.0], [7.0, 9.0]]);
        assert!(A.submatrix(0, 2).unwrap() == mat![[4.0, 5.0], [7.0, 8.0]]);
        assert!(A.minor(0).unwrap() == mat![[5.0, 6.0], [8.0, 9.0]]);

        assert!(A.submatrix(3, 0) == Err(MatError::InvalidIndex { index: 3, len: 3 }));
        assert!(A.submatrix(0, 5) == Err(MatError::InvalidIndex { index: 5, len: 3 }));

        let B = mat![[1.0, 2.0], [3.0, 4.0]];
        assert!(B.submatrix(0, 0) == Err(MatError::InvalidDimensions { nrows: 2, ncols: 2 }));

        let C = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert!(C.submatrix(0, 0) == Err(MatError::NotSquare { nrows: 2, ncols: 3 }));
    }

    #[test]
    fn test_join() {
        let A = mat![[1.0, 2.0], [3.0, 4.0]];
        let B = mat![[5.0], [6.0]];
        let J = A.join_right(&B).unwrap();
        assert!(J == mat![[1.0, 2.0, 5.0], [3.0, 4.0, 6.0]]);
        assert!(A.augment(&B).unwrap() == J);

        let C = mat![[1.0, 2.0]];
        assert!(
            A.join_right(&C)
                == Err(MatError::ShapeMismatch {
                    lhs: (2, 2),
                    rhs: (1, 2)
                })
        );
    }

    #[test]
    fn test_halves() {
        let A = mat![[1.0, 2.0], [3.0, 4.0]];
        let AI = A.augment_with_identity().unwrap();
        assert!(AI == mat![[1.0, 2.0, 1.0, 0.0], [3.0, 4.0, 0.0, 1.0]]);
        assert!(AI.left_half().unwrap() == A);
        assert!(AI.right_half().unwrap() == Mat::identity(2));

        let J = mat![[1.0, 2.0, 3.0]];
        assert!(J.left_half() == Err(MatError::InvalidDimensions { nrows: 1, ncols: 3 }));
        assert!(J.right_half() == Err(MatError::InvalidDimensions { nrows: 1, ncols: 3 }));
    }

    #[test]
    fn test_approx_eq() {
        let A = mat![[1.0, 2.0], [3.0, 4.0]];
        let B = A.map(|z| z + c64::new(1e-11, -1e-11));
        assert!(A.approx_eq(&B));
        assert!(A != B);

        let C = A.map(|z| z + 1e-6);
        assert!(!A.approx_eq(&C));
        assert!(A.approx_eq_with_tol(&C, 1e-5));

        assert!(!A.approx_eq(&mat![[1.0, 2.0]]));
    }
}
