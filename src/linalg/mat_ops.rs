use crate::{assert, c64, Mat, MatError};

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Mat {
    #[track_caller]
    fn zip_map(&self, other: &Mat, f: impl Fn(c64, c64) -> c64) -> Mat {
        assert!(self.shape() == other.shape());
        Mat::from_fn(self.nrows(), self.ncols(), |i, j| {
            f(self.read(i, j), other.read(i, j))
        })
    }

    fn check_same_shape(&self, other: &Mat) -> Result<(), MatError> {
        if self.shape() != other.shape() {
            return Err(MatError::ShapeMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(())
    }

    /// Returns `self + other`.
    ///
    /// # Errors
    /// Fails with [`MatError::ShapeMismatch`] if the shapes differ.
    pub fn try_add(&self, other: &Mat) -> Result<Mat, MatError> {
        self.check_same_shape(other)?;
        Ok(self.zip_map(other, |a, b| a + b))
    }

    /// Returns `self - other`.
    ///
    /// # Errors
    /// Fails with [`MatError::ShapeMismatch`] if the shapes differ.
    pub fn try_sub(&self, other: &Mat) -> Result<Mat, MatError> {
        self.check_same_shape(other)?;
        Ok(self.zip_map(other, |a, b| a - b))
    }

    /// Returns the matrix product `self · rhs`, of dimensions `(self.nrows(), rhs.ncols())`.
    ///
    /// # Errors
    /// Fails with [`MatError::ShapeMismatch`] if `self.ncols() != rhs.nrows()`.
    pub fn matmul(&self, rhs: &Mat) -> Result<Mat, MatError> {
        if self.ncols() != rhs.nrows() {
            return Err(MatError::ShapeMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(self.matmul_unchecked(rhs))
    }

    pub(crate) fn matmul_unchecked(&self, rhs: &Mat) -> Mat {
        Mat::from_fn(self.nrows(), rhs.ncols(), |i, j| {
            (0..self.ncols())
                .map(|k| self.read(i, k) * rhs.read(k, j))
                .sum()
        })
    }

    /// Returns `self` with every element multiplied by `factor`.
    pub fn scale(&self, factor: c64) -> Mat {
        self.map(|z| z * factor)
    }

    /// Returns `self` with every element multiplied by the real `factor`.
    pub fn scale_real(&self, factor: f64) -> Mat {
        self.map(|z| z * factor)
    }
}

macro_rules! impl_add_sub {
    ($lhs: ty, $rhs: ty) => {
        impl Add<$rhs> for $lhs {
            type Output = Mat;

            #[track_caller]
            fn add(self, other: $rhs) -> Self::Output {
                let (lhs, rhs): (&Mat, &Mat) = (&self, &other);
                lhs.zip_map(rhs, |a, b| a + b)
            }
        }

        impl Sub<$rhs> for $lhs {
            type Output = Mat;

            #[track_caller]
            fn sub(self, other: $rhs) -> Self::Output {
                let (lhs, rhs): (&Mat, &Mat) = (&self, &other);
                lhs.zip_map(rhs, |a, b| a - b)
            }
        }
    };
}

macro_rules! impl_add_sub_assign {
    ($rhs: ty) => {
        impl AddAssign<$rhs> for Mat {
            #[track_caller]
            fn add_assign(&mut self, other: $rhs) {
                let rhs: &Mat = &other;
                *self = self.zip_map(rhs, |a, b| a + b);
            }
        }

        impl SubAssign<$rhs> for Mat {
            #[track_caller]
            fn sub_assign(&mut self, other: $rhs) {
                let rhs: &Mat = &other;
                *self = self.zip_map(rhs, |a, b| a - b);
            }
        }
    };
}

macro_rules! impl_matmul {
    ($lhs: ty, $rhs: ty) => {
        impl Mul<$rhs> for $lhs {
            type Output = Mat;

            #[track_caller]
            fn mul(self, other: $rhs) -> Self::Output {
                let (lhs, rhs): (&Mat, &Mat) = (&self, &other);
                assert!(lhs.ncols() == rhs.nrows());
                lhs.matmul_unchecked(rhs)
            }
        }
    };
}

macro_rules! impl_scalar_mul {
    ($mat: ty, $scalar: ty) => {
        impl Mul<$scalar> for $mat {
            type Output = Mat;

            #[inline]
            fn mul(self, factor: $scalar) -> Self::Output {
                self.map(|z| z * factor)
            }
        }

        impl Mul<$mat> for $scalar {
            type Output = Mat;

            #[inline]
            fn mul(self, mat: $mat) -> Self::Output {
                mat.map(|z| self * z)
            }
        }
    };
}

macro_rules! impl_neg {
    ($mat: ty) => {
        impl Neg for $mat {
            type Output = Mat;

            #[inline]
            fn neg(self) -> Self::Output {
                self.map(|z| -z)
            }
        }
    };
}

impl_add_sub!(Mat, Mat);
impl_add_sub!(Mat, &Mat);
impl_add_sub!(&Mat, Mat);
impl_add_sub!(&Mat, &Mat);

impl_add_sub_assign!(Mat);
impl_add_sub_assign!(&Mat);

impl_matmul!(Mat, Mat);
impl_matmul!(Mat, &Mat);
impl_matmul!(&Mat, Mat);
impl_matmul!(&Mat, &Mat);

impl_scalar_mul!(Mat, c64);
impl_scalar_mul!(&Mat, c64);
impl_scalar_mul!(Mat, f64);
impl_scalar_mul!(&Mat, f64);

impl_neg!(Mat);
impl_neg!(&Mat);

impl MulAssign<c64> for Mat {
    #[inline]
    fn mul_assign(&mut self, factor: c64) {
        for z in self.as_slice_mut() {
            *z *= factor;
        }
    }
}

impl MulAssign<f64> for Mat {
    #[inline]
    fn mul_assign(&mut self, factor: f64) {
        for z in self.as_slice_mut() {
            *z *= factor;
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{assert, c64, mat, Mat, MatError};
    use assert_approx_eq::assert_approx_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn matrices() -> (Mat, Mat) {
        let A = mat![[2.8, (-3.3, 1.0)], [-1.7, 5.2], [(4.6, -2.0), -8.3]];
        let B = mat![[-7.9, 8.3], [(4.7, 0.5), -3.2], [3.8, (-5.2, 1.5)]];
        (A, B)
    }

    #[track_caller]
    fn assert_matrix_approx_eq(given: Mat, expected: &Mat) {
        assert!(given.shape() == expected.shape());
        for i in 0..given.nrows() {
            for j in 0..given.ncols() {
                assert_approx_eq!(given.read(i, j).re, expected.read(i, j).re);
                assert_approx_eq!(given.read(i, j).im, expected.read(i, j).im);
            }
        }
    }

    fn random_mat(rng: &mut StdRng, nrows: usize, ncols: usize) -> Mat {
        Mat::from_fn(nrows, ncols, |_, _| {
            c64::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0))
        })
    }

    #[test]
    #[should_panic]
    fn test_adding_matrices_of_different_sizes_should_panic() {
        let A = mat![[1.0, 2.0], [3.0, 4.0]];
        let B = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        _ = A + B;
    }

    #[test]
    #[should_panic]
    fn test_subtracting_two_matrices_of_different_sizes_should_panic() {
        let A = mat![[1.0, 2.0], [3.0, 4.0]];
        let B = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        _ = A - B;
    }

    #[test]
    fn test_add() {
        let (A, B) = matrices();

        let expected = mat![[-5.1, (5.0, 1.0)], [(3.0, 0.5), 2.0], [(8.4, -2.0), (-13.5, 1.5)]];

        assert_matrix_approx_eq(&A + &B, &expected);
        assert_matrix_approx_eq(&A + B.clone(), &expected);
        assert_matrix_approx_eq(A.clone() + &B, &expected);
        assert_matrix_approx_eq(A.try_add(&B).unwrap(), &expected);

        let mut C = A.clone();
        C += &B;
        assert_matrix_approx_eq(C, &expected);

        assert_matrix_approx_eq(A + B, &expected);
    }

    #[test]
    fn test_sub() {
        let (A, B) = matrices();

        let expected = mat![[10.7, (-11.6, 1.0)], [(-6.4, -0.5), 8.4], [(0.8, -2.0), (-3.1, -1.5)]];

        assert_matrix_approx_eq(&A - &B, &expected);
        assert_matrix_approx_eq(A.try_sub(&B).unwrap(), &expected);

        let mut C = A.clone();
        C -= B.clone();
        assert_matrix_approx_eq(C, &expected);

        assert_matrix_approx_eq(A - B, &expected);
    }

    #[test]
    fn test_shape_mismatch() {
        let (A, _) = matrices();
        let B = mat![[1.0, 2.0]];
        let err = MatError::ShapeMismatch {
            lhs: (3, 2),
            rhs: (1, 2),
        };
        assert!(A.try_add(&B) == Err(err.clone()));
        assert!(A.try_sub(&B) == Err(err.clone()));
        assert!(A.matmul(&B) == Err(err));
    }

    #[test]
    fn test_neg() {
        let (A, _) = matrices();

        let expected = mat![[-2.8, (3.3, -1.0)], [1.7, -5.2], [(-4.6, 2.0), 8.3]];

        assert!(-&A == expected);
        assert!(-A == expected);
    }

    #[test]
    fn test_scalar_mul() {
        let (A, _) = matrices();
        let k = c64::new(0.5, -2.0);
        let expected = Mat::from_fn(A.nrows(), A.ncols(), |i, j| A.read(i, j) * k);

        assert!(A.scale(k) == expected);
        assert!(&A * k == expected);
        assert!(k * &A == expected);

        let expected = Mat::from_fn(A.nrows(), A.ncols(), |i, j| A.read(i, j) * 3.0);
        assert!(A.scale_real(3.0) == expected);
        assert!(3.0 * &A == expected);

        let mut B = A.clone();
        B *= 3.0;
        assert!(B == expected);
    }

    #[test]
    fn test_matmul() {
        let A = mat![[(1.0, 5.0), (2.0, 3.0)], [(-1.0, 3.0), (3.0, 1.0)]];
        let B = mat![[1.0, 0.0, 2.0], [(0.0, 1.0), 1.0, -1.0]];

        let expected = mat![
            [(-2.0, 7.0), (2.0, 3.0), (0.0, 7.0)],
            [(-2.0, 6.0), (3.0, 1.0), (-5.0, 5.0)],
        ];

        assert!(A.matmul(&B).unwrap() == expected);
        assert!(&A * &B == expected);
        assert!(A.matmul(&Mat::identity(2)).unwrap() == A);
    }

    #[test]
    #[should_panic]
    fn test_matmul_mismatch_should_panic() {
        let A = mat![[1.0, 2.0], [3.0, 4.0]];
        let B = mat![[1.0, 2.0, 3.0]];
        _ = A * B;
    }

    #[test]
    fn test_matmul_associative() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10 {
            let A = random_mat(&mut rng, 3, 4);
            let B = random_mat(&mut rng, 4, 2);
            let C = random_mat(&mut rng, 2, 5);

            let AB_C = (&A * &B) * &C;
            let A_BC = &A * (&B * &C);
            assert!(AB_C.approx_eq_with_tol(&A_BC, 1e-9));

            assert!((&A * &B).adjoint().approx_eq(&(B.adjoint() * A.adjoint())));
        }
    }
}
