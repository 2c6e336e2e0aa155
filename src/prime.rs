//! Bounded probable-prime challenges.
//!
//! Candidates are drawn by rejection sampling: each attempt keys a fresh
//! [`HashStream`] with the transcript digest, the bound and the attempt index,
//! masks the output to the bit length of `bound - 1` and discards anything
//! that is not strictly below the bound.  No modular reduction is applied, so
//! accepted candidates are uniform over `[0, bound)`.

use num_bigint::BigUint;

use crate::accumulator::AccumulatorDigest;
use crate::params::{MAX_PRIME_ATTEMPTS, SECURITY_PARAMETER};
use crate::primality::is_probable_prime;
use crate::prng::HashStream;

const PRIME_DOMAIN: &[u8] = b"FS_TRANSCRIPT_PRIME_CHALLENGE";

/// Outcome of a bounded prime search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeSample {
    /// The probable prime, strictly below the requested bound.
    pub prime: BigUint,
    /// Number of candidates drawn, including the accepted one.
    pub attempts: u32,
    /// Candidates discarded for landing at or above the bound.
    pub out_of_range: u32,
}

/// Derives a probable prime strictly below `bound` from `seed`.
///
/// # Panics
///
/// Panics if `bound` is below 3 or if no prime is found within
/// [`MAX_PRIME_ATTEMPTS`] candidates.  Either case means the bound is
/// misconfigured; returning a non-prime instead would break soundness.
pub fn derive_bounded_prime(seed: &AccumulatorDigest, bound: &BigUint) -> PrimeSample {
    sample_with_cap(seed, bound, MAX_PRIME_ATTEMPTS)
}

fn sample_with_cap(seed: &AccumulatorDigest, bound: &BigUint, max_attempts: u32) -> PrimeSample {
    assert!(*bound > BigUint::from(2u8), "prime bound must exceed 2");
    let bits = (bound - 1u32).bits();
    let len = bits.div_ceil(8) as usize;
    let excess = (len as u64) * 8 - bits;
    let bound_bytes = bound.to_bytes_be();

    let mut out_of_range = 0u32;
    for attempt in 0..max_attempts {
        let mut stream = HashStream::keyed(
            PRIME_DOMAIN,
            &[seed.as_slice(), bound_bytes.as_slice(), &attempt.to_be_bytes()],
        );
        let mut bytes = stream.take(len);
        bytes[0] &= 0xffu8 >> excess;
        let candidate = BigUint::from_bytes_be(&bytes);
        if candidate >= *bound {
            out_of_range += 1;
            continue;
        }
        if is_probable_prime(&candidate, SECURITY_PARAMETER) {
            tracing::trace!(attempts = attempt + 1, out_of_range, "prime candidate accepted");
            return PrimeSample {
                prime: candidate,
                attempts: attempt + 1,
                out_of_range,
            };
        }
    }
    panic!(
        "no probable prime below a {}-bit bound after {} attempts",
        bound.bits(),
        max_attempts
    );
}

#[cfg(test)]
mod tests {
    use super::{derive_bounded_prime, sample_with_cap};
    use crate::params::{BOUND, MODULUS, SECURITY_PARAMETER};
    use crate::primality::is_probable_prime;
    use num_bigint::BigUint;

    #[test]
    fn test_prime_is_below_modulus() {
        let seed = [7u8; 32];
        let sample = derive_bounded_prime(&seed, &MODULUS);
        assert!(sample.prime < *MODULUS);
        assert!(is_probable_prime(&sample.prime, SECURITY_PARAMETER));
        assert!(sample.attempts >= 1);
        assert!(sample.out_of_range < sample.attempts);
    }

    #[test]
    fn test_prime_is_below_bound_constant() {
        for byte in 0..8u8 {
            let sample = derive_bounded_prime(&[byte; 32], &BOUND);
            assert!(sample.prime < *BOUND);
            assert!(sample.prime.bits() <= 252);
            // A power-of-two bound never rejects on range.
            assert_eq!(sample.out_of_range, 0);
        }
    }

    #[test]
    fn test_same_seed_same_prime() {
        let a = derive_bounded_prime(&[1u8; 32], &MODULUS);
        let b = derive_bounded_prime(&[1u8; 32], &MODULUS);
        assert_eq!(a, b);
        let c = derive_bounded_prime(&[2u8; 32], &MODULUS);
        assert_ne!(a.prime, c.prime);
    }

    #[test]
    fn test_small_bound() {
        let bound = BigUint::from(100u32);
        for byte in 0..32u8 {
            let prime = derive_bounded_prime(&[byte; 32], &bound).prime;
            assert!(prime < bound);
            assert!(is_probable_prime(&prime, SECURITY_PARAMETER));
        }
    }

    #[test]
    #[should_panic(expected = "prime bound must exceed 2")]
    fn test_degenerate_bound_panics() {
        derive_bounded_prime(&[0u8; 32], &BigUint::from(2u8));
    }

    #[test]
    #[should_panic(expected = "no probable prime")]
    fn test_exhausted_attempts_panic() {
        // The first candidate for this seed is composite.
        sample_with_cap(&[0u8; 32], &MODULUS, 1);
    }

    #[test]
    fn test_cap_does_not_change_result() {
        let full = derive_bounded_prime(&[0u8; 32], &MODULUS);
        let capped = sample_with_cap(&[0u8; 32], &MODULUS, full.attempts);
        assert_eq!(full, capped);
    }
}
