//! Closed-form eigen decomposition of `2×2` matrices.
//!
//! The eigenvalues of `A = [[a, b], [c, d]]` are the roots of its characteristic polynomial
//! `λ² − tr(A)·λ + det(A)`, and each eigenvector can be read directly from a row of `A − λI`.
//! When `A` has two independent eigenvectors, it can be written as `A = P·D·P⁻¹`, where `D` holds
//! the eigenvalues on its diagonal and the columns of `P` are the matching eigenvectors.

use crate::{c64, mat, Mat, MatError};
use num_traits::{One, Zero};

/// Decomposition of a `2×2` matrix `A` as `A = P·D·P⁻¹`, as returned by [`Mat::diagonalize`].
#[derive(Clone, Debug, PartialEq)]
pub struct Diagonalization {
    /// The eigenvectors, as columns.
    pub p: Mat,
    /// The eigenvalues, on the diagonal.
    pub d: Mat,
    /// The inverse of `p`.
    pub p_inv: Mat,
}

impl Diagonalization {
    /// Returns `P·D·P⁻¹`, which equals the decomposed matrix up to rounding errors.
    pub fn reconstruct(&self) -> Mat {
        &(&self.p * &self.d) * &self.p_inv
    }
}

fn check_2x2(A: &Mat) -> Result<(), MatError> {
    if A.shape() != (2, 2) {
        return Err(MatError::Unsupported(
            "closed-form eigen decompositions are only available for 2x2 matrices",
        ));
    }
    Ok(())
}

impl Mat {
    /// Returns the two eigenvalues of a `2×2` matrix.
    ///
    /// They are computed as `(tr ± √(tr² − 4·det)) / 2`, using the principal square root, and
    /// the root with the `+` sign comes first. A repeated eigenvalue is returned twice.
    ///
    /// The eigenvalues of a triangular matrix are its diagonal elements, which are returned
    /// as is, in the order of the closed-form roots they are closest to.
    ///
    /// # Errors
    /// Fails with [`MatError::Unsupported`] if `self` is not `2×2`.
    pub fn eigenvalues_2x2(&self) -> Result<[c64; 2], MatError> {
        check_2x2(self)?;

        // λ² + pλ + q = 0
        let p = -self.trace()?;
        let q = self.determinant()?;
        let root = (p * p - 4.0 * q).sqrt();
        let plus = (-p + root) / 2.0;
        let minus = (-p - root) / 2.0;

        let (a, b, c, d) = self.entries_2x2();
        if b.is_approx_zero() || c.is_approx_zero() {
            return Ok(if (plus - a).norm() <= (plus - d).norm() {
                [a, d]
            } else {
                [d, a]
            });
        }
        Ok([plus, minus])
    }

    /// Returns the two eigenvectors of a `2×2` matrix, as `2×1` matrices, in the same order as
    /// the eigenvalues returned by [`Mat::eigenvalues_2x2`].
    ///
    /// For `self = [[a, b], [c, d]]`, the eigenvector of `λ` is `(λ − d, c)` if `c` is non-zero,
    /// otherwise `(b, λ − a)` if `b` is non-zero. When both `b` and `c` are zero the matrix is
    /// diagonal, and the eigenvectors are the standard basis vectors. Eigenvectors with integer
    /// components are reduced to lowest terms.
    ///
    /// # Errors
    /// Fails with [`MatError::Unsupported`] if `self` is not `2×2`.
    pub fn eigenvectors_2x2(&self) -> Result<[Mat; 2], MatError> {
        let [l0, l1] = self.eigenvalues_2x2()?;
        let (a, b, c, d) = self.entries_2x2();

        if b.is_approx_zero() && c.is_approx_zero() {
            let e0 = mat![[c64::one()], [c64::zero()]];
            let e1 = mat![[c64::zero()], [c64::one()]];
            return Ok(if (l0 - a).norm() <= (l0 - d).norm() {
                [e0, e1]
            } else {
                [e1, e0]
            });
        }

        let eigenvector = |l: c64| {
            let v = if !c.is_approx_zero() {
                mat![[l - d], [c]]
            } else {
                mat![[b], [l - a]]
            };
            v.reduce_to_lowest_terms().0
        };
        Ok([eigenvector(l0), eigenvector(l1)])
    }

    /// Decomposes a `2×2` matrix as `P·D·P⁻¹`, with the eigenvalues of `self` on the diagonal of
    /// `D` and the matching eigenvectors as the columns of `P`.
    ///
    /// # Errors
    /// Fails with [`MatError::NotDiagonalizable`] if `self` is not `2×2`, or if its eigenvectors
    /// are not independent.
    pub fn diagonalize(&self) -> Result<Diagonalization, MatError> {
        let diagonalize = || -> Result<Diagonalization, MatError> {
            let [l0, l1] = self.eigenvalues_2x2()?;
            let [v0, v1] = self.eigenvectors_2x2()?;

            let d = mat![[l0, c64::zero()], [c64::zero(), l1]];
            let p = v0.join_right(&v1)?;
            let p_inv = p.inverse()?;
            Ok(Diagonalization { p, d, p_inv })
        };

        diagonalize().map_err(|err| {
            log::debug!(target: "cmat", "diagonalize: {err}");
            MatError::NotDiagonalizable
        })
    }

    /// Checks whether [`Mat::diagonalize`] succeeds.
    pub fn is_diagonalizable(&self) -> bool {
        self.diagonalize().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_identity() {
        let I = Mat::identity(2);
        assert!(I.eigenvalues_2x2().unwrap() == [c64::one(), c64::one()]);
        assert!(I.is_diagonal(false));
        assert!(I.triangular_type() == crate::TriangularType::Identity);

        let decomposition = I.diagonalize().unwrap();
        assert!(decomposition.p == I);
        assert!(decomposition.reconstruct() == I);
    }

    #[test]
    fn test_real_eigenvalues() {
        let A = mat![[1.0, 4.0], [2.0, 3.0]];
        let [l0, l1] = A.eigenvalues_2x2().unwrap();
        assert!(l0.approx_eq(c64::new(5.0, 0.0)));
        assert!(l1.approx_eq(c64::new(-1.0, 0.0)));

        let [v0, v1] = A.eigenvectors_2x2().unwrap();
        assert!(v0.approx_eq(&mat![[1.0], [1.0]]));
        assert!(v1.approx_eq(&mat![[-2.0], [1.0]]));

        assert!((&A * &v0).approx_eq(&v0.scale(l0)));
        assert!((&A * &v1).approx_eq(&v1.scale(l1)));
    }

    #[test]
    fn test_complex_eigenvalues() {
        // rotation by a quarter turn
        let A = mat![[0.0, -1.0], [1.0, 0.0]];
        let [l0, l1] = A.eigenvalues_2x2().unwrap();
        assert!(l0.approx_eq(c64::i()));
        assert!(l1.approx_eq(-c64::i()));

        let decomposition = A.diagonalize().unwrap();
        assert!(decomposition.reconstruct().approx_eq(&A));
    }

    #[test]
    fn test_eigenvectors_upper_triangular() {
        // bottom-left element is zero, so the first row is used
        let A = mat![[2.0, 3.0], [0.0, 5.0]];
        let [v0, v1] = A.eigenvectors_2x2().unwrap();
        assert!(v0.approx_eq(&mat![[1.0], [1.0]]));
        assert!(v1.approx_eq(&mat![[1.0], [0.0]]));
        assert!(A.diagonalize().unwrap().reconstruct().approx_eq(&A));
    }

    #[test]
    fn test_diagonal_input() {
        let A = mat![[2.0, 0.0], [0.0, 3.0]];
        let [l0, l1] = A.eigenvalues_2x2().unwrap();
        assert!(l0.approx_eq(c64::new(3.0, 0.0)));
        assert!(l1.approx_eq(c64::new(2.0, 0.0)));

        let decomposition = A.diagonalize().unwrap();
        assert!(decomposition.p == mat![[0.0, 1.0], [1.0, 0.0]]);
        assert!(decomposition.reconstruct().approx_eq(&A));
    }

    #[test]
    fn test_diagonal_input_close_entries() {
        for A in [
            mat![[10000.001, 0.0], [0.0, 10000.0]],
            mat![[10000.0, 0.0], [0.0, 10000.001]],
            mat![[1e6 + 0.1, 0.0], [0.0, 1e6]],
            mat![[3.3, 0.0], [0.0, 3.2999]],
        ] {
            let decomposition = A.diagonalize().unwrap();
            let [l0, l1] = A.eigenvalues_2x2().unwrap();
            assert!(l0 + l1 == A.read(0, 0) + A.read(1, 1));
            assert!(decomposition.reconstruct().approx_eq_with_tol(&A, 1e-6));

            for R in &A.square_roots_2x2().unwrap() {
                assert!((R * R).approx_eq_with_tol(&A, 1e-6));
            }
        }
    }

    #[test]
    fn test_not_diagonalizable() {
        let J = mat![[1.0, 1.0], [0.0, 1.0]];
        assert!(J.diagonalize() == Err(MatError::NotDiagonalizable));
        assert!(!J.is_diagonalizable());

        let B = Mat::identity(3);
        assert!(matches!(B.eigenvalues_2x2(), Err(MatError::Unsupported(_))));
        assert!(matches!(B.eigenvectors_2x2(), Err(MatError::Unsupported(_))));
        assert!(B.diagonalize() == Err(MatError::NotDiagonalizable));
    }

    #[test]
    fn test_reconstruct_random() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            let A = Mat::from_fn(2, 2, |_, _| {
                c64::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0))
            });
            let [l0, l1] = A.eigenvalues_2x2().unwrap();
            assert!((l0 + l1).approx_eq_with_tol(A.trace().unwrap(), 1e-9));
            assert!((l0 * l1).approx_eq_with_tol(A.determinant().unwrap(), 1e-9));

            let decomposition = A.diagonalize().unwrap();
            assert!(decomposition.reconstruct().approx_eq_with_tol(&A, 1e-8));
        }
    }
}
