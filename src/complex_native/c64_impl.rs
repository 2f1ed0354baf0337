use super::c64;
use crate::{io::Polar, AngleUnit, MatError, TOLERANCE};
use core::f64::consts::PI;
use num_traits::{One, Zero};

macro_rules! impl_from_num_complex {
    ($( $method:ident ( self $( , $arg:ident : $ty:ty )* ) -> $ret:ty ; )*) => {
        $(
            #[inline(always)]
            #[allow(missing_docs)]
            pub fn $method(self $( , $arg : $ty )* ) -> $ret {
                self.to_num_complex().$method( $( $arg , )* ).into()
            }
        )*
    };
}

impl c64 {
    /// Create a new complex number.
    #[inline(always)]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Construct the imaginary number.
    #[inline(always)]
    pub const fn i() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Create a complex number from a phase.
    #[inline(always)]
    pub fn cis(phase: f64) -> Self {
        Self::new(phase.cos(), phase.sin())
    }

    /// Create a complex number from polar coordinates.
    #[inline(always)]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Convert the number to a num_complex::Complex64.
    #[inline(always)]
    pub fn to_num_complex(self) -> num_complex::Complex<f64> {
        self.into()
    }

    /// Returns the real part of the complex number.
    #[inline(always)]
    pub fn re(self) -> f64 {
        self.re
    }

    /// Returns the imaginary part of the complex number.
    #[inline(always)]
    pub fn im(self) -> f64 {
        self.im
    }

    /// Calculate the complex conjugate of self.
    #[inline(always)]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    impl_from_num_complex!(
        is_nan(self) -> bool;
        is_infinite(self) -> bool;
        is_finite(self) -> bool;
        exp(self) -> Self;
        ln(self) -> Self;
        sin(self) -> Self;
        cos(self) -> Self;
        tan(self) -> Self;
        sinh(self) -> Self;
        cosh(self) -> Self;
        tanh(self) -> Self;
    );

    /// Computes the `l2` norm of `self`, also known as its magnitude.
    #[inline(always)]
    pub fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Computes the squared `l2` norm of `self`.
    #[inline(always)]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Computes the phase of `self`, in `(-π, π]`.
    #[inline(always)]
    pub fn arg(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Computes the inverse of `self`.
    ///
    /// Follows floating point semantics: the inverse of zero is not finite. See
    /// [`c64::checked_recip`] for a version that reports the division by zero.
    #[inline(always)]
    pub fn recip(self) -> Self {
        let norm_sqr = self.norm_sqr();
        Self::new(self.re / norm_sqr, -self.im / norm_sqr)
    }

    /// Computes the inverse of `self`, or fails if `self` is zero.
    #[inline]
    pub fn checked_recip(self) -> Result<Self, MatError> {
        c64::one().checked_div(self)
    }

    /// Divides `self` by `rhs`.
    ///
    /// # Errors
    /// Fails with [`MatError::DivisionByZero`] if the squared magnitude of `rhs` is below
    /// [`TOLERANCE`].
    #[inline]
    pub fn checked_div(self, rhs: c64) -> Result<Self, MatError> {
        if rhs.norm_sqr().abs() < TOLERANCE {
            return Err(MatError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    /// Divides `self` by the real number `rhs`.
    ///
    /// # Errors
    /// Fails with [`MatError::DivisionByZero`] if the absolute value of `rhs` is below
    /// [`TOLERANCE`].
    #[inline]
    pub fn checked_div_real(self, rhs: f64) -> Result<Self, MatError> {
        if rhs.abs() < TOLERANCE {
            return Err(MatError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    /// Computes `self * self`.
    #[inline(always)]
    pub fn square(self) -> Self {
        self * self
    }

    /// Computes the principal square root of `self`, that is `self.powf(0.5)`.
    #[inline]
    pub fn sqrt(self) -> Self {
        self.powf(0.5)
    }

    /// Raises `self` to a real power, using the polar form `|z|^x · e^(i·x·arg(z))`.
    ///
    /// `0^0` is `1`, and zero raised to any other power is zero.
    #[inline]
    pub fn powf(self, exp: f64) -> Self {
        if self.is_zero() {
            return if exp == 0.0 { c64::one() } else { c64::zero() };
        }
        Self::from_polar(self.norm().powf(exp), self.arg() * exp)
    }

    /// Raises `self` to a complex power, using `z^w = e^(w · (ln|z| + i·arg(z)))`.
    ///
    /// `0^0` is `1`, and zero raised to any other power is zero.
    #[inline]
    pub fn powc(self, exp: c64) -> Self {
        if self.is_zero() {
            return if exp.is_zero() { c64::one() } else { c64::zero() };
        }
        let ln_r = self.norm().ln();
        let theta = self.arg();

        let re = exp.re * ln_r - exp.im * theta;
        let im = exp.re * theta + exp.im * ln_r;
        Self::from_polar(re.exp(), im)
    }

    /// Returns the `x` distinct `x`-th roots of `self`.
    ///
    /// The roots all have magnitude `|z|^(1/x)`. The first one has phase `arg(z) / x`, and each
    /// following root is rotated by a further `2π / x`.
    ///
    /// # Errors
    /// Fails with [`MatError::Unsupported`] if `x` is zero.
    pub fn roots(self, x: u32) -> Result<Vec<c64>, MatError> {
        if x == 0 {
            return Err(MatError::Unsupported("the 0th root of a complex number"));
        }

        let root = 1.0 / x as f64;
        let phase_step = 2.0 * PI * root;
        let magnitude = self.norm().powf(root);
        let phase = self.arg() * root;

        Ok((0..x)
            .map(|k| Self::from_polar(magnitude, phase + k as f64 * phase_step))
            .collect())
    }

    /// Checks whether `self` and `other` are equal within [`TOLERANCE`].
    #[inline]
    pub fn approx_eq(self, other: c64) -> bool {
        self.approx_eq_with_tol(other, TOLERANCE)
    }

    /// Checks whether both the real parts and the imaginary parts of `self` and `other` differ
    /// by strictly less than `tol`.
    #[inline]
    pub fn approx_eq_with_tol(self, other: c64, tol: f64) -> bool {
        (self.re - other.re).abs() < tol && (self.im - other.im).abs() < tol
    }

    /// Checks whether `self` is zero within [`TOLERANCE`].
    #[inline]
    pub fn is_approx_zero(self) -> bool {
        self.is_approx_zero_with_tol(TOLERANCE)
    }

    /// Checks whether both parts of `self` have an absolute value strictly less than `tol`.
    #[inline]
    pub fn is_approx_zero_with_tol(self, tol: f64) -> bool {
        self.re.abs() < tol && self.im.abs() < tol
    }

    /// Returns a view of `self` that is displayed in polar form, with its phase in `unit`.
    #[inline]
    pub fn polar(self, unit: AngleUnit) -> Polar {
        Polar { value: self, unit }
    }
}

impl Zero for c64 {
    #[inline(always)]
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    #[inline(always)]
    fn set_zero(&mut self) {
        self.re.set_zero();
        self.im.set_zero();
    }
}

impl One for c64 {
    #[inline(always)]
    fn one() -> Self {
        Self::new(1.0, 0.0)
    }

    #[inline(always)]
    fn is_one(&self) -> bool {
        self.re.is_one() && self.im.is_zero()
    }

    #[inline(always)]
    fn set_one(&mut self) {
        self.re.set_one();
        self.im.set_zero();
    }
}

impl core::ops::Neg for c64 {
    type Output = c64;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

impl core::ops::Add<f64> for c64 {
    type Output = c64;

    #[inline(always)]
    fn add(self, rhs: f64) -> Self::Output {
        Self::new(self.re + rhs, self.im)
    }
}

impl core::ops::Add<c64> for f64 {
    type Output = c64;

    #[inline(always)]
    fn add(self, rhs: c64) -> Self::Output {
        Self::Output::new(self + rhs.re, rhs.im)
    }
}

impl core::ops::Add for c64 {
    type Output = c64;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl core::ops::Sub<f64> for c64 {
    type Output = c64;

    #[inline(always)]
    fn sub(self, rhs: f64) -> Self::Output {
        Self::new(self.re - rhs, self.im)
    }
}

impl core::ops::Sub<c64> for f64 {
    type Output = c64;

    #[inline(always)]
    fn sub(self, rhs: c64) -> Self::Output {
        Self::Output::new(self - rhs.re, -rhs.im)
    }
}

impl core::ops::Sub for c64 {
    type Output = c64;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl core::ops::Mul<f64> for c64 {
    type Output = c64;

    #[inline(always)]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

impl core::ops::Mul<c64> for f64 {
    type Output = c64;

    #[inline(always)]
    fn mul(self, rhs: c64) -> Self::Output {
        Self::Output::new(self * rhs.re, self * rhs.im)
    }
}

impl core::ops::Mul for c64 {
    type Output = c64;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl core::ops::Div<f64> for c64 {
    type Output = c64;

    #[inline(always)]
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.re / rhs, self.im / rhs)
    }
}

impl core::ops::Div<c64> for f64 {
    type Output = c64;

    #[inline(always)]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: c64) -> Self::Output {
        self * rhs.recip()
    }
}

impl core::ops::Div for c64 {
    type Output = c64;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        // (a + ib) / (c + id) = ((ac + bd) + i(bc - ad)) / (c² + d²)
        let norm_sqr = rhs.norm_sqr();
        Self::new(
            (self.re * rhs.re + self.im * rhs.im) / norm_sqr,
            (self.im * rhs.re - self.re * rhs.im) / norm_sqr,
        )
    }
}

impl core::ops::AddAssign<f64> for c64 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

impl core::ops::AddAssign for c64 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign<f64> for c64 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

impl core::ops::SubAssign for c64 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl core::ops::MulAssign<f64> for c64 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl core::ops::MulAssign for c64 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl core::ops::DivAssign<f64> for c64 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl core::ops::DivAssign for c64 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl core::iter::Sum for c64 {
    fn sum<I: Iterator<Item = c64>>(iter: I) -> Self {
        iter.fold(c64::zero(), |acc, z| acc + z)
    }
}

impl<'a> core::iter::Sum<&'a c64> for c64 {
    fn sum<I: Iterator<Item = &'a c64>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl core::iter::Product for c64 {
    fn product<I: Iterator<Item = c64>>(iter: I) -> Self {
        iter.fold(c64::one(), |acc, z| acc * z)
    }
}

impl From<c64> for num_complex::Complex64 {
    #[inline(always)]
    fn from(value: c64) -> Self {
        Self {
            re: value.re,
            im: value.im,
        }
    }
}

impl From<num_complex::Complex64> for c64 {
    #[inline(always)]
    fn from(value: num_complex::Complex64) -> Self {
        c64 {
            re: value.re,
            im: value.im,
        }
    }
}

impl From<f64> for c64 {
    #[inline(always)]
    fn from(value: f64) -> Self {
        Self::new(value, 0.0)
    }
}

impl<'a> From<&'a f64> for c64 {
    #[inline(always)]
    fn from(value: &'a f64) -> Self {
        Self::new(*value, 0.0)
    }
}

impl From<(f64, f64)> for c64 {
    #[inline(always)]
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

unsafe impl bytemuck::Zeroable for c64 {}
unsafe impl bytemuck::Pod for c64 {}

impl core::fmt::Debug for c64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.re, f)?;
        if self.im.is_sign_positive() {
            f.write_str(" + ")?;
        } else {
            f.write_str(" - ")?;
        }
        core::fmt::Debug::fmt(&self.im.abs(), f)?;
        f.write_str(" * I")
    }
}
