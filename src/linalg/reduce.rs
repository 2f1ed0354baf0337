use crate::{primes::prime_factors, Mat, TOLERANCE};

/// Beyond this magnitude every `f64` is an integer, so divisibility tests are meaningless.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn is_integer(x: f64) -> bool {
    (x - x.round()).abs() < TOLERANCE
}

fn divides(p: f64, x: f64) -> bool {
    is_integer(x / p)
}

impl Mat {
    /// Returns the smallest magnitude among the non-zero real and imaginary parts of the
    /// elements of `self`, or `None` if they are all zero within [`TOLERANCE`].
    pub fn smallest_nonzero_component(&self) -> Option<f64> {
        self.as_slice()
            .iter()
            .flat_map(|z| [z.re.abs(), z.im.abs()])
            .filter(|&x| x >= TOLERANCE)
            .min_by(f64::total_cmp)
    }

    /// Divides `self` by the greatest common divisor of its components, when they are all
    /// integers.
    ///
    /// Returns the reduced matrix and the divisor that was taken out. Each prime factor of the
    /// smallest non-zero component is divided out of every real and imaginary part for as long
    /// as it divides all of them. If some component is not an integer, if every component is
    /// zero, if the smallest non-zero component exceeds `2⁵³`, or if no prime divides all of
    /// them, `self` is returned unchanged with a divisor of `1`.
    ///
    /// ```
    /// use cmat::mat;
    ///
    /// let (reduced, divisor) = mat![[(4.0, 6.0)], [-8.0]].reduce_to_lowest_terms();
    /// assert!(divisor == 2.0);
    /// assert!(reduced == mat![[(2.0, 3.0)], [-4.0]]);
    /// ```
    pub fn reduce_to_lowest_terms(&self) -> (Mat, f64) {
        let unchanged = || (self.clone(), 1.0);

        if !self
            .as_slice()
            .iter()
            .all(|z| is_integer(z.re) && is_integer(z.im))
        {
            return unchanged();
        }
        let low = match self.smallest_nonzero_component() {
            Some(low) => low.round(),
            None => return unchanged(),
        };
        if low <= 1.0 || low > MAX_EXACT_INTEGER {
            return unchanged();
        }

        let mut reduced = self.clone();
        let mut divisor = 1.0;
        for p in prime_factors(low as u64) {
            let p = p as f64;
            while reduced
                .as_slice()
                .iter()
                .all(|z| divides(p, z.re) && divides(p, z.im))
            {
                reduced = reduced.map(|z| z / p);
                divisor *= p;
            }
        }
        (reduced, divisor)
    }
}
