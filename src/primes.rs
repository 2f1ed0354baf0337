//! Primality and prime factorization of small integers, by trial division.
//!
//! These routines back [`Mat::reduce_to_lowest_terms`](crate::Mat::reduce_to_lowest_terms),
//! which only ever factorizes the magnitude of a matrix element, so no effort is made to handle
//! large inputs efficiently.

/// Checks whether `n` is prime.
///
/// ```
/// use cmat::primes::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Returns the first `n` prime numbers, in ascending order.
pub fn first_n_primes(n: usize) -> Vec<u64> {
    let mut primes = Vec::with_capacity(n);
    let mut candidate = 2;
    while primes.len() < n {
        if primes
            .iter()
            .take_while(|&&p| p <= candidate / p)
            .all(|&p| candidate % p != 0)
        {
            primes.push(candidate);
        }
        candidate += if candidate == 2 { 1 } else { 2 };
    }
    primes
}

/// Returns the prime numbers less than or equal to `limit`, in ascending order.
pub fn primes_up_to(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }

    let len = limit as usize + 1;
    let mut composite = vec![false; len];
    let mut primes = Vec::new();
    for n in 2..len {
        if composite[n] {
            continue;
        }
        primes.push(n as u64);
        let mut multiple = n * n;
        while multiple < len {
            composite[multiple] = true;
            multiple += n;
        }
    }
    primes
}

/// Returns the distinct prime factors of `n`, in ascending order.
///
/// `0` and `1` have no prime factors.
///
/// ```
/// use cmat::primes::prime_factors;
///
/// assert!(prime_factors(360) == vec![2, 3, 5]);
/// assert!(prime_factors(97) == vec![97]);
/// assert!(prime_factors(1).is_empty());
/// ```
pub fn prime_factors(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    let mut rest = n;
    let mut d = 2;
    while d <= rest / d {
        if rest % d == 0 {
            factors.push(d);
            while rest % d == 0 {
                rest /= d;
            }
        }
        d += if d == 2 { 1 } else { 2 };
    }
    if rest > 1 {
        factors.push(rest);
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert;

    #[test]
    fn test_is_prime() {
        let expected = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
        for n in 0..50 {
            assert!(is_prime(n) == expected.contains(&n));
        }
        assert!(is_prime(7919));
        assert!(!is_prime(7917));
        // squares of primes
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(10_403));
    }

    #[test]
    fn test_first_n_primes() {
        assert!(first_n_primes(0).is_empty());
        assert!(first_n_primes(1) == vec![2]);
        assert!(first_n_primes(10) == vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(first_n_primes(1000)[999] == 7919);
    }

    #[test]
    fn test_primes_up_to() {
        assert!(primes_up_to(0).is_empty());
        assert!(primes_up_to(1).is_empty());
        assert!(primes_up_to(2) == vec![2]);
        assert!(primes_up_to(30) == vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(primes_up_to(7919) == first_n_primes(1000));
    }

    #[test]
    fn test_prime_factors() {
        assert!(prime_factors(0).is_empty());
        assert!(prime_factors(2) == vec![2]);
        assert!(prime_factors(12) == vec![2, 3]);
        assert!(prime_factors(1024) == vec![2]);
        assert!(prime_factors(2 * 3 * 5 * 7 * 11 * 13) == vec![2, 3, 5, 7, 11, 13]);
        assert!(prime_factors(10_403) == vec![101, 103]);

        for n in 2..500 {
            let factors = prime_factors(n);
            assert!(factors.iter().all(|&p| is_prime(p) && n % p == 0));
            assert!(factors.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
