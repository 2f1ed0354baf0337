//! `cmat` is a small dense linear algebra library for complex matrices.
//!
//! It provides the structural operations one expects from a matrix type (sums, products,
//! transposition, conjugation, submatrices and joins), exact cofactor-based determinants,
//! adjugates and inverses, a set of classification predicates (diagonal, triangular, scalar,
//! hermitian, unitary, involutory, nilpotent), and closed-form eigen decompositions of `2×2`
//! matrices, which in turn power fractional and complex matrix exponentiation and the
//! extraction of matrix square roots.
//!
//! # Tolerance
//! Floating point results are never compared exactly. Every "is equal" and "is zero" check uses
//! an absolute tolerance applied independently to the real and imaginary parts. The default is
//! [`TOLERANCE`], and the comparison methods have `_with_tol` variants that accept a custom one.
//!
//! # Errors
//! Operations that can fail return a [`Result`] with a [`MatError`] describing the failure.
//! Predicates (`is_*` methods) never fail: when their answer depends on an operation that
//! cannot be carried out, such as inverting a singular matrix, they answer `false`.
//!
//! # Example
//! ```
//! use cmat::{c64, mat};
//!
//! let m = mat![[(1.0, 5.0), (2.0, 3.0)], [(-1.0, 3.0), (3.0, 1.0)]];
//!
//! assert!(m.trace()? == c64::new(4.0, 6.0));
//! assert!(m.determinant()? == c64::new(9.0, 13.0));
//!
//! let inv = m.inverse()?;
//! assert!(m.matmul(&inv)?.is_identity());
//! # Ok::<(), cmat::MatError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(non_snake_case)]
#![allow(clippy::type_complexity)]

use equator::{assert, debug_assert};

pub mod complex_native;
pub mod error;
pub mod linalg;
pub mod mat;
pub mod primes;

mod io;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde;

pub use complex_native::c64;
pub use error::MatError;
pub use linalg::evd::Diagonalization;
pub use linalg::props::{Nilpotency, TriangularType};
pub use mat::Mat;

/// Absolute tolerance used by every default equality and zero check.
///
/// Two complex numbers are considered equal when both their real parts and their imaginary
/// parts differ by strictly less than this value.
pub const TOLERANCE: f64 = 1e-10;

/// Unit in which an angle is expressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Degrees, a full turn is `360`.
    #[default]
    Degrees,
    /// Radians, a full turn is `2π`.
    Radians,
}

impl AngleUnit {
    /// Converts `angle`, expressed in `self`, to radians.
    #[inline]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle.to_radians(),
            AngleUnit::Radians => angle,
        }
    }

    /// Converts `radians` to an angle expressed in `self`.
    #[inline]
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Degrees => radians.to_degrees(),
            AngleUnit::Radians => radians,
        }
    }
}

/// Creates a [`Mat`] containing the arguments, given row by row.
///
/// Each element may be anything that converts into a [`c64`]: a `c64`, an `f64` (real number)
/// or an `(f64, f64)` pair holding the real and imaginary parts.
///
/// ```
/// use cmat::{c64, mat};
///
/// let matrix = mat![
///     [1.0, (0.0, 2.0)],
///     [c64::new(3.0, -1.0), 4.0],
/// ];
///
/// assert!(matrix.read(0, 0) == c64::new(1.0, 0.0));
/// assert!(matrix.read(0, 1) == c64::new(0.0, 2.0));
/// assert!(matrix.read(1, 0) == c64::new(3.0, -1.0));
/// assert!(matrix.read(1, 1) == c64::new(4.0, 0.0));
/// ```
///
/// # Panics
/// Panics if the rows do not all have the same length, or if the matrix is empty.
#[macro_export]
macro_rules! mat {
    () => {
        {
            compile_error!("number of columns in the matrix is ambiguous");
        }
    };

    ($([$($v:expr),* $(,)?] ),* $(,)?) => {
        $crate::mat::Mat::__from_nested(&[$(&[$($crate::c64::from($v)),*][..]),*])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __perf_warn {
    ($name: ident) => {{
        #[inline(always)]
        #[allow(non_snake_case)]
        fn $name() -> &'static ::core::sync::atomic::AtomicBool {
            static $name: ::core::sync::atomic::AtomicBool =
                ::core::sync::atomic::AtomicBool::new(false);
            &$name
        }
        ::core::matches!(
            $name().compare_exchange(
                false,
                true,
                ::core::sync::atomic::Ordering::Relaxed,
                ::core::sync::atomic::Ordering::Relaxed,
            ),
            Ok(_)
        )
    }};
}

/// Commonly used items.
pub mod prelude {
    pub use crate::{
        c64, mat, AngleUnit, Diagonalization, Mat, MatError, Nilpotency, TriangularType,
        TOLERANCE,
    };
}
