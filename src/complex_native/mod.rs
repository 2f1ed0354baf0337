//! Native complex floating point type whose real and imaginary parts are stored contiguously.
//!
//! The type [`c64`] has the same layout as [`num_complex::Complex64`], and converts to and from
//! it for free. It is the element type of every [`Mat`](crate::Mat).
//!
//! Besides the usual arithmetic operators, `c64` provides:
//! - tolerance based comparisons ([`c64::approx_eq`], [`c64::is_approx_zero`]),
//! - checked divisions that refuse a zero divisor ([`c64::checked_div`]),
//! - real and complex powers computed from the polar form ([`c64::powf`], [`c64::powc`]),
//! - the full set of `n`-th roots ([`c64::roots`]).

mod c64_impl;

pub use crate::io::Polar;

/// 64-bit complex floating point type. See the module-level documentation for more details.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[repr(C)]
pub struct c64 {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}
