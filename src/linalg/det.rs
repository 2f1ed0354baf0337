use crate::{c64, error::check_square, mat, Mat, MatError};
use num_traits::{One, Zero};

/// Size from which the factorial cost of a cofactor expansion is reported.
const LARGE_EXPANSION: usize = 10;

fn sign(k: usize) -> f64 {
    if k % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Cofactor expansion along the first row. `A` must be square.
fn det_unchecked(A: &Mat) -> c64 {
    let n = A.nrows();
    match n {
        1 => A.read(0, 0),
        2 => A.read(0, 0) * A.read(1, 1) - A.read(0, 1) * A.read(1, 0),
        _ => (0..n)
            .filter(|&j| !A.read(0, j).is_zero())
            .map(|j| A.read(0, j) * sign(j) * det_unchecked(&A.remove_row_col(0, j)))
            .sum(),
    }
}

impl Mat {
    /// Returns the determinant of `self`.
    ///
    /// `1×1` and `2×2` matrices use the closed forms `a` and `ad − bc`. Larger matrices are
    /// expanded recursively along their first row, skipping the terms whose leading element is
    /// zero. The cost of the expansion grows factorially with the dimension.
    ///
    /// # Errors
    /// Fails with [`MatError::NotSquare`] if `self` is not square.
    #[doc(alias = "det")]
    pub fn determinant(&self) -> Result<c64, MatError> {
        check_square(self.nrows(), self.ncols())?;

        let n = self.nrows();
        if n >= LARGE_EXPANSION && crate::__perf_warn!(DET_WARN) {
            log::warn!(target: "cmat_perf", "Cofactor expansion of a {n}x{n} matrix takes factorial time.");
        }
        Ok(det_unchecked(self))
    }

    /// Returns the sum of the diagonal elements of `self`.
    ///
    /// # Errors
    /// Fails with [`MatError::NotSquare`] if `self` is not square.
    pub fn trace(&self) -> Result<c64, MatError> {
        check_square(self.nrows(), self.ncols())?;
        Ok(self.diagonal().into_iter().sum())
    }

    /// Returns the matrix of cofactors of `self`, whose element `(r, c)` is
    /// `(−1)^(r+c) · det(submatrix(r, c))`.
    ///
    /// # Errors
    /// Fails with [`MatError::NotSquare`] if `self` is not square.
    pub fn cofactor_matrix(&self) -> Result<Mat, MatError> {
        check_square(self.nrows(), self.ncols())?;

        Ok(match self.nrows() {
            1 => mat![[c64::one()]],
            2 => {
                let (a, b, c, d) = self.entries_2x2();
                mat![[d, -c], [-b, a]]
            }
            n => Mat::from_fn(n, n, |r, c| {
                sign(r + c) * det_unchecked(&self.remove_row_col(r, c))
            }),
        })
    }

    /// Returns the adjugate of `self`, the transpose of its cofactor matrix.
    ///
    /// # Errors
    /// Fails with [`MatError::NotSquare`] if `self` is not square.
    #[doc(alias = "adjunct")]
    pub fn adjugate(&self) -> Result<Mat, MatError> {
        check_square(self.nrows(), self.ncols())?;

        match self.nrows() {
            1 => Ok(mat![[c64::one()]]),
            2 => {
                let (a, b, c, d) = self.entries_2x2();
                Ok(mat![[d, -b], [-c, a]])
            }
            _ => Ok(self.cofactor_matrix()?.transpose()),
        }
    }

    /// Returns the inverse of `self`, computed as `adjugate(self) / det(self)`.
    ///
    /// # Errors
    /// - [`MatError::NotSquare`] if `self` is not square.
    /// - [`MatError::Singular`] if the determinant is zero within [`crate::TOLERANCE`].
    #[doc(alias = "inv")]
    pub fn inverse(&self) -> Result<Mat, MatError> {
        let det = self.determinant()?;
        if det.is_approx_zero() {
            return Err(MatError::Singular);
        }
        Ok(self.adjugate()?.scale(det.recip()))
    }

    /// Returns `(a, b, c, d)` for `self = [[a, b], [c, d]]`.
    #[inline]
    pub(crate) fn entries_2x2(&self) -> (c64, c64, c64, c64) {
        (
            self.read(0, 0),
            self.read(0, 1),
            self.read(1, 0),
            self.read(1, 1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_mat(rng: &mut StdRng, n: usize) -> Mat {
        Mat::from_fn(n, n, |_, _| {
            c64::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0))
        })
    }

    #[test]
    fn test_trace_and_det_2x2() {
        let M = mat![[(1.0, 5.0), (2.0, 3.0)], [(-1.0, 3.0), (3.0, 1.0)]];
        assert!(M.trace().unwrap() == c64::new(4.0, 6.0));
        assert!(M.determinant().unwrap() == c64::new(9.0, 13.0));
    }

    #[test]
    fn test_det_small() {
        assert!(mat![[(2.0, -1.0)]].determinant().unwrap() == c64::new(2.0, -1.0));

        let A = mat![[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]];
        assert!(A.determinant().unwrap() == c64::new(6.0, 0.0));
        assert!(A.transpose().determinant().unwrap() == c64::new(6.0, 0.0));

        let singular = mat![[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]];
        assert!(singular.determinant().unwrap() == c64::zero());
    }

    #[test]
    fn test_det_zero_leading_row() {
        let A = mat![
            [0.0, 0.0, 0.0, 2.0],
            [0.0, 0.0, 3.0, 0.0],
            [0.0, 4.0, 0.0, 0.0],
            [5.0, 0.0, 0.0, 0.0],
        ];
        // reversing four columns is an even permutation
        assert!(A.determinant().unwrap() == c64::new(120.0, 0.0));

        let Z = Mat::zeros(5, 5);
        assert!(Z.determinant().unwrap() == c64::zero());
    }

    #[test]
    fn test_det_triangular() {
        let n = 6;
        let U = Mat::from_fn(n, n, |i, j| {
            if i <= j {
                c64::new((i + j + 1) as f64, (j - i) as f64)
            } else {
                c64::zero()
            }
        });
        let expected: c64 = U.diagonal().into_iter().product();
        assert!(U.determinant().unwrap().approx_eq(expected));
    }

    #[test]
    fn test_det_multiplicative() {
        let mut rng = StdRng::seed_from_u64(0);
        for n in 1..6 {
            let A = random_mat(&mut rng, n);
            let B = random_mat(&mut rng, n);
            let det_AB = (&A * &B).determinant().unwrap();
            let det_A_det_B = A.determinant().unwrap() * B.determinant().unwrap();
            assert!(det_AB.approx_eq_with_tol(det_A_det_B, 1e-8));
        }
    }

    #[test]
    fn test_not_square() {
        let A = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let err = MatError::NotSquare { nrows: 2, ncols: 3 };
        assert!(A.determinant() == Err(err.clone()));
        assert!(A.trace() == Err(err.clone()));
        assert!(A.cofactor_matrix() == Err(err.clone()));
        assert!(A.adjugate() == Err(err.clone()));
        assert!(A.inverse() == Err(err));
    }

    #[test]
    fn test_cofactor_adjugate() {
        let A = mat![[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]];

        let C = mat![[-24.0, 20.0, -5.0], [18.0, -15.0, 4.0], [5.0, -4.0, 1.0]];
        assert!(A.cofactor_matrix().unwrap() == C);
        assert!(A.adjugate().unwrap() == C.transpose());

        let B = mat![[(1.0, 1.0), 2.0], [3.0, (4.0, -1.0)]];
        assert!(B.cofactor_matrix().unwrap() == mat![[(4.0, -1.0), -3.0], [-2.0, (1.0, 1.0)]]);
        assert!(B.adjugate().unwrap() == mat![[(4.0, -1.0), -2.0], [-3.0, (1.0, 1.0)]]);

        let one = mat![[(7.0, 2.0)]];
        assert!(one.cofactor_matrix().unwrap() == Mat::identity(1));
        assert!(one.adjugate().unwrap() == Mat::identity(1));
    }

    #[test]
    fn test_adjugate_identity() {
        // A · adj(A) = det(A) · I
        let mut rng = StdRng::seed_from_u64(1);
        for n in 1..6 {
            let A = random_mat(&mut rng, n);
            let det = A.determinant().unwrap();
            let lhs = &A * A.adjugate().unwrap();
            assert!(lhs.approx_eq_with_tol(&Mat::identity(n).scale(det), 1e-9));
        }
    }

    #[test]
    fn test_inverse() {
        let A = mat![[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]];
        let expected = mat![[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]];
        assert!(A.inverse().unwrap().approx_eq(&expected));

        assert!(mat![[(0.0, 2.0)]].inverse().unwrap().approx_eq(&mat![[(0.0, -0.5)]]));

        let mut rng = StdRng::seed_from_u64(2);
        for n in 1..6 {
            let A = random_mat(&mut rng, n);
            let I = Mat::identity(n);
            let inv = A.inverse().unwrap();
            assert!((&A * &inv).approx_eq_with_tol(&I, 1e-9));
            assert!((&inv * &A).approx_eq_with_tol(&I, 1e-9));
        }
    }

    #[test]
    fn test_singular() {
        let A = mat![[1.0, 2.0], [2.0, 4.0]];
        assert!(A.inverse() == Err(MatError::Singular));

        let B = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        assert!(B.inverse() == Err(MatError::Singular));
    }
}
