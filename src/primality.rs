//! Probable-prime testing over arbitrary-precision integers.
//!
//! Candidates first go through trial division by the primes below 256, then
//! through `rounds` Miller–Rabin iterations.  Witnesses are drawn from a
//! [`HashStream`] keyed by the candidate itself, so the verdict for a given
//! integer is the same on every run and on every machine.

use num_bigint::{BigUint, RandBigInt};

use crate::prng::HashStream;

const WITNESS_DOMAIN: &[u8] = b"FS_TRANSCRIPT_MILLER_RABIN";

const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Returns `true` if `n` is a probable prime.
///
/// A composite passes with probability at most `4^-rounds`.  Primes always
/// pass.
pub fn is_probable_prime(n: &BigUint, rounds: u32) -> bool {
    let zero = BigUint::from(0u8);
    let one = BigUint::from(1u8);
    let two = BigUint::from(2u8);
    if n < &two {
        return false;
    }
    for &p in SMALL_PRIMES.iter() {
        if *n == BigUint::from(p) {
            return true;
        }
        if n % p == zero {
            return false;
        }
    }

    // n is odd and has no prime factor below 256.
    let n_minus_one = n - &one;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    let mut witnesses = HashStream::keyed(WITNESS_DOMAIN, &[n.to_bytes_be().as_slice()]);
    'rounds: for _ in 0..rounds {
        let a = witnesses.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'rounds;
            }
            if x == one {
                return false;
            }
        }
        return false;
    }
    true
}
