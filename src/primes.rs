//! Prime table and natural logarithms of the primes.

use std::sync::LazyLock;

/// The first 72 primes in ascending order.
pub const PRIMES: [u32; 72] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293,
    307, 311, 313, 317, 331, 337, 347, 349, 353, 359,
];

/// Natural logarithms of [`PRIMES`], index for index.
pub static LOG_PRIMES: LazyLock<Vec<f64>> =
    LazyLock::new(|| PRIMES.iter().map(|&p| f64::from(p).ln()).collect());

/// Base-2 logarithm of the prime at `index`.
pub fn log2_prime(index: usize) -> Option<f64> {
    LOG_PRIMES.get(index).map(|l| l / std::f64::consts::LN_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_primes_match_table() {
        assert_eq!(LOG_PRIMES.len(), PRIMES.len());
        assert!((LOG_PRIMES[0] - std::f64::consts::LN_2).abs() < 1e-15);
        assert!((LOG_PRIMES[1] - 3f64.ln()).abs() < 1e-15);
    }

    #[test]
    fn octave_is_one_in_log2() {
        assert!((log2_prime(0).unwrap() - 1.0).abs() < 1e-12);
        assert!(log2_prime(72).is_none());
    }
}
