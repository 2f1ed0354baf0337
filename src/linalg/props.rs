//! Structural classification of matrices.
//!
//! The predicates in this module never fail. When a property is only defined for square
//! matrices, a rectangular input simply does not have it. When deciding a property requires an
//! operation that can fail, such as the inversion needed by [`Mat::is_unitary`], the failure
//! means the property does not hold.

use crate::{c64, Mat, TOLERANCE};

/// Shape classification of a square matrix, as returned by [`Mat::triangular_type`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangularType {
    /// Every element on or above the diagonal is zero.
    LowerTriangular,
    /// Every element on or below the diagonal is zero.
    UpperTriangular,
    /// Every off-diagonal element is zero.
    Diagonal,
    /// The identity matrix.
    Identity,
    /// Every element is zero.
    Null,
    /// None of the above, or a rectangular matrix.
    NotTriangular,
}

/// Result of the nilpotency test of [`Mat::nilpotency`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Nilpotency {
    /// Some power of the matrix is the zero matrix.
    Nilpotent,
    /// The matrix is not square, so its powers are not defined.
    NotSquare,
    /// Neither the structure of the matrix nor its square proves that it is nilpotent. A higher
    /// power may still be zero.
    Undetermined,
}

impl Mat {
    fn all_approx_zero_where(&self, tol: f64, mut pred: impl FnMut(usize, usize) -> bool) -> bool {
        for j in 0..self.ncols() {
            for i in 0..self.nrows() {
                if pred(i, j) && !self.read(i, j).is_approx_zero_with_tol(tol) {
                    return false;
                }
            }
        }
        true
    }

    /// Checks whether every element of `self` is zero within [`TOLERANCE`].
    #[doc(alias = "is_null")]
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.is_zero_with_tol(TOLERANCE)
    }

    /// Checks whether every element of `self` is zero within `tol`.
    pub fn is_zero_with_tol(&self, tol: f64) -> bool {
        self.as_slice().iter().all(|z| z.is_approx_zero_with_tol(tol))
    }

    /// Alias for [`Mat::is_zero`].
    #[inline]
    pub fn is_null(&self) -> bool {
        self.is_zero()
    }

    /// Checks whether `self` is the identity matrix, within [`TOLERANCE`]. Rectangular matrices
    /// are never the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.is_identity_with_tol(TOLERANCE)
    }

    /// Checks whether `self` is the identity matrix, within `tol`.
    pub fn is_identity_with_tol(&self, tol: f64) -> bool {
        self.is_square()
            && (0..self.nrows()).all(|i| {
                (0..self.ncols()).all(|j| {
                    let expected = if i == j { c64::new(1.0, 0.0) } else { c64::new(0.0, 0.0) };
                    self.read(i, j).approx_eq_with_tol(expected, tol)
                })
            })
    }

    /// Checks whether every off-diagonal element of `self` is zero within [`TOLERANCE`].
    ///
    /// Rectangular matrices are only considered when `allow_rectangular` is `true`, otherwise
    /// they are never diagonal.
    pub fn is_diagonal(&self, allow_rectangular: bool) -> bool {
        if !allow_rectangular && !self.is_square() {
            return false;
        }
        self.all_approx_zero_where(TOLERANCE, |i, j| i != j)
    }

    /// Checks whether `self` is diagonal, with every diagonal element equal to the first one
    /// within [`TOLERANCE`], that is `self = s·I` for some scalar `s`.
    ///
    /// See [`Mat::is_diagonal`] for the meaning of `allow_rectangular`.
    pub fn is_scalar(&self, allow_rectangular: bool) -> bool {
        if !self.is_diagonal(allow_rectangular) {
            return false;
        }
        let first = self.read(0, 0);
        self.diagonal().into_iter().all(|z| z.approx_eq(first))
    }

    /// Returns the scalar `s` such that `self = s·I`.
    ///
    /// # Errors
    /// Fails with [`MatError::Unsupported`](crate::MatError::Unsupported) if `self` is not a square
    /// scalar matrix.
    pub fn scalar_value(&self) -> Result<c64, crate::MatError> {
        if self.is_scalar(false) {
            Ok(self.read(0, 0))
        } else {
            Err(crate::MatError::Unsupported(
                "the scalar value of a matrix that is not a scalar matrix",
            ))
        }
    }

    /// Checks whether `self` equals its conjugate transpose, within [`TOLERANCE`].
    pub fn is_hermitian(&self) -> bool {
        self.is_square() && self.approx_eq(&self.adjoint())
    }

    /// Checks whether `self` equals the negative of its conjugate transpose, within
    /// [`TOLERANCE`].
    #[doc(alias = "is_anti_hermitian")]
    pub fn is_skew_hermitian(&self) -> bool {
        self.is_square() && self.approx_eq(&-self.adjoint())
    }

    /// Alias for [`Mat::is_skew_hermitian`].
    #[inline]
    pub fn is_anti_hermitian(&self) -> bool {
        self.is_skew_hermitian()
    }

    /// Checks whether the inverse of `self` equals its conjugate transpose, within
    /// [`TOLERANCE`]. Matrices that cannot be inverted are not unitary.
    pub fn is_unitary(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        match self.inverse() {
            Ok(inv) => inv.approx_eq(&self.adjoint()),
            Err(err) => {
                log::debug!(target: "cmat", "is_unitary: {err}");
                false
            }
        }
    }

    /// Checks whether `self` is its own inverse, within [`TOLERANCE`]. Matrices that cannot be
    /// inverted are not involutory.
    #[doc(alias = "is_involution")]
    pub fn is_involutory(&self) -> bool {
        match self.inverse() {
            Ok(inv) => inv.approx_eq(self),
            Err(err) => {
                log::debug!(target: "cmat", "is_involutory: {err}");
                false
            }
        }
    }

    /// Classifies the shape of `self`.
    ///
    /// The checks are made in order, and the first one that matches is returned: rectangular
    /// matrices are [`TriangularType::NotTriangular`], then the zero matrix is
    /// [`TriangularType::Null`], followed by [`TriangularType::Identity`],
    /// [`TriangularType::Diagonal`], [`TriangularType::UpperTriangular`] and
    /// [`TriangularType::LowerTriangular`]. Zeros are tested within [`TOLERANCE`].
    ///
    /// Note that the triangular variants describe strictly triangular matrices, whose diagonal
    /// is zero.
    pub fn triangular_type(&self) -> TriangularType {
        if !self.is_square() {
            TriangularType::NotTriangular
        } else if self.is_zero() {
            TriangularType::Null
        } else if self.is_identity() {
            TriangularType::Identity
        } else if self.is_diagonal(false) {
            TriangularType::Diagonal
        } else if self.all_approx_zero_where(TOLERANCE, |i, j| i >= j) {
            TriangularType::UpperTriangular
        } else if self.all_approx_zero_where(TOLERANCE, |i, j| i <= j) {
            TriangularType::LowerTriangular
        } else {
            TriangularType::NotTriangular
        }
    }

    /// Tests whether `self` is nilpotent.
    ///
    /// Zero and strictly triangular matrices are nilpotent, as are the matrices whose square is
    /// zero. For any other square matrix the answer is [`Nilpotency::Undetermined`].
    pub fn nilpotency(&self) -> Nilpotency {
        if !self.is_square() {
            return Nilpotency::NotSquare;
        }
        match self.triangular_type() {
            TriangularType::Null
            | TriangularType::UpperTriangular
            | TriangularType::LowerTriangular => Nilpotency::Nilpotent,
            _ if self.matmul_unchecked(self).is_zero() => Nilpotency::Nilpotent,
            _ => Nilpotency::Undetermined,
        }
    }

    /// Checks whether `self` raised to the power `index` is the zero matrix. Returns `false` when
    /// that power cannot be computed.
    pub fn is_nilpotent_for_index(&self, index: u32) -> bool {
        let power = i32::try_from(index)
            .map_err(|_| crate::MatError::Unsupported("a power that does not fit in an i32"))
            .and_then(|k| self.powi(k));
        match power {
            Ok(power) => power.is_zero(),
            Err(err) => {
                log::debug!(target: "cmat", "is_nilpotent_for_index({index}): {err}");
                false
            }
        }
    }

    /// Checks whether `self` raised to every power in `from..=to` is the zero matrix. An empty
    /// range is vacuously `true`.
    pub fn is_nilpotent_for_index_range(&self, from: u32, to: u32) -> bool {
        (from..=to).all(|index| self.is_nilpotent_for_index(index))
    }
}
