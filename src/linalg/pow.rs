use crate::{c64, Mat, MatError, TOLERANCE};
use num_traits::Zero;

impl Mat {
    /// Raises `self` to the integer power `k`.
    ///
    /// `k = 0` gives the identity, `k = 1` a copy of `self`, and `k = -1` the inverse of `self`.
    /// Larger powers are computed by repeated multiplication.
    ///
    /// # Errors
    /// - [`MatError::Unsupported`] if `k < -1`. Raise the inverse to `-k` instead.
    /// - [`MatError::NotSquare`] if `self` is not square and `k != 1`.
    /// - [`MatError::Singular`] if `k = -1` and `self` cannot be inverted.
    pub fn powi(&self, k: i32) -> Result<Mat, MatError> {
        match k {
            -1 => self.inverse(),
            k if k < -1 => Err(MatError::Unsupported(
                "negative powers other than -1, raise the inverse to a positive power instead",
            )),
            1 => Ok(self.clone()),
            k => {
                let mut acc = self.identity_like()?;
                for _ in 0..k {
                    acc = acc.matmul_unchecked(self);
                }
                Ok(acc)
            }
        }
    }

    /// Raises `self` to the real power `x`.
    ///
    /// The cases are tried in order:
    /// - `x = -1` gives the inverse, any other negative power is rejected,
    /// - `x = 0` gives the identity,
    /// - the zero and identity matrices are their own powers,
    /// - a square diagonal matrix has each diagonal element raised to `x`,
    /// - an integer `x` is delegated to [`Mat::powi`],
    /// - a `2×2` matrix is diagonalized as `P·D·P⁻¹`, and the result is `P·D^x·P⁻¹`.
    ///
    /// Comparisons of `x` with `-1` and `0` use [`TOLERANCE`]. Non-integer powers are taken with
    /// the principal branch of [`c64::powf`].
    ///
    /// # Errors
    /// - [`MatError::Unsupported`] if `x < 0` and `x != -1`, or if `x` is not an integer and
    ///   `self` is neither diagonal nor `2×2`.
    /// - [`MatError::NotSquare`] if `self` is not square.
    /// - [`MatError::Singular`] if `x = -1` and `self` cannot be inverted.
    /// - [`MatError::NotDiagonalizable`] if `self` is a non-diagonalizable `2×2` matrix and `x`
    ///   is not an integer.
    pub fn powf(&self, x: f64) -> Result<Mat, MatError> {
        if (x + 1.0).abs() < TOLERANCE {
            return self.inverse();
        }
        if x < 0.0 {
            return Err(MatError::Unsupported(
                "negative powers other than -1, raise the inverse to a positive power instead",
            ));
        }
        if x.abs() < TOLERANCE {
            return self.identity_like();
        }
        crate::error::check_square(self.nrows(), self.ncols())?;

        if self.is_zero() || self.is_identity() {
            return Ok(self.clone());
        }
        if self.is_diagonal(false) {
            return Ok(self.map_diagonal(|z| z.powf(x)));
        }
        if x.fract() == 0.0 && x <= i32::MAX as f64 {
            return self.powi(x as i32);
        }
        if self.shape() == (2, 2) {
            let decomposition = self.diagonalize()?;
            let d = decomposition.d.map_diagonal(|z| z.powf(x));
            return Ok(&(&decomposition.p * &d) * &decomposition.p_inv);
        }

        Err(MatError::Unsupported(
            "non-integer powers of matrices that are neither diagonal nor 2x2",
        ))
    }

    /// Raises a square diagonal matrix to the complex power `w`, by raising each diagonal
    /// element to `w` with [`c64::powc`].
    ///
    /// # Errors
    /// Fails with [`MatError::Unsupported`] if `self` is not a square diagonal matrix.
    pub fn powc(&self, w: c64) -> Result<Mat, MatError> {
        if !self.is_diagonal(false) {
            return Err(MatError::Unsupported(
                "complex powers of matrices that are not square and diagonal",
            ));
        }
        Ok(self.map_diagonal(|z| z.powc(w)))
    }

    /// Returns four square roots of a `2×2` matrix.
    ///
    /// With `self = P·D·P⁻¹` and `D = diag(λ₀, λ₁)`, the roots are `P·diag(±√λ₀, ±√λ₁)·P⁻¹`
    /// for the sign patterns `(+, +)`, `(−, +)`, `(+, −)` and `(−, −)`, in that order, using the
    /// principal square root. Repeated roots are not removed.
    ///
    /// # Errors
    /// - [`MatError::Unsupported`] if `self` is not `2×2`.
    /// - [`MatError::NotDiagonalizable`] if `self` cannot be diagonalized.
    ///
    /// ```
    /// use cmat::mat;
    ///
    /// let m = mat![[2.0, 0.0], [0.0, 3.0]];
    /// let roots = m.square_roots_2x2()?;
    /// for root in &roots {
    ///     assert!((root * root).approx_eq(&m));
    /// }
    /// # Ok::<(), cmat::MatError>(())
    /// ```
    pub fn square_roots_2x2(&self) -> Result<[Mat; 4], MatError> {
        if self.shape() != (2, 2) {
            return Err(MatError::Unsupported(
                "square roots of matrices that are not 2x2",
            ));
        }

        let decomposition = self.diagonalize()?;
        let r0 = decomposition.d.read(0, 0).sqrt();
        let r1 = decomposition.d.read(1, 1).sqrt();

        let root = |s0: f64, s1: f64| {
            let d = crate::mat![[r0 * s0, c64::zero()], [c64::zero(), r1 * s1]];
            &(&decomposition.p * &d) * &decomposition.p_inv
        };
        Ok([
            root(1.0, 1.0),
            root(-1.0, 1.0),
            root(1.0, -1.0),
            root(-1.0, -1.0),
        ])
    }

    /// Divides `self` by `denominator`, returning both the left quotient `B⁻¹·A` and the right
    /// quotient `A·B⁻¹`, where `A = self` and `B = denominator`. They differ in general.
    ///
    /// # Errors
    /// - [`MatError::DivisionNotPossible`] if `denominator` cannot be inverted.
    /// - [`MatError::ShapeMismatch`] if the products are not defined.
    pub fn divide(&self, denominator: &Mat) -> Result<(Mat, Mat), MatError> {
        let inv = denominator.inverse().map_err(|err| {
            log::debug!(target: "cmat", "divide: {err}");
            MatError::DivisionNotPossible
        })?;
        Ok((inv.matmul(self)?, self.matmul(&inv)?))
    }

    /// Returns a copy of `self` with `f` applied to the diagonal elements and every other
    /// element set to zero.
    fn map_diagonal(&self, f: impl Fn(c64) -> c64) -> Mat {
        Mat::from_fn(self.nrows(), self.ncols(), |i, j| {
            if i == j {
                f(self.read(i, i))
            } else {
                c64::zero()
            }
        })
    }
}
