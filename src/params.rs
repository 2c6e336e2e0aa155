//! Process-wide constants shared by every transcript.
//!
//! The scalar-field modulus comes from the BN254 curve (`ark_bn254::Fr`) and is
//! materialised once as a [`BigUint`].  The bound constant caps prime
//! challenges in [`Mode::Bounded`] so they fit in `BIT_LIMIT - 1` bits.  None of
//! these values are configurable at runtime.

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Bit length of [`BOUND`].
pub const BIT_LIMIT: u64 = 253;

/// Number of Miller–Rabin rounds applied to every prime candidate.
///
/// Each round has error probability at most 1/4, so a composite slips through
/// with probability at most `4^-SECURITY_PARAMETER`.
pub const SECURITY_PARAMETER: u32 = 32;

/// Upper limit on rejection-sampling attempts for a single prime challenge.
///
/// Primes near 2^253 have density around 1/175 and at least half of all
/// candidates land below the bound, so hitting this limit means the bound is
/// misconfigured rather than unlucky.
pub const MAX_PRIME_ATTEMPTS: u32 = 1 << 16;

/// Order of the BN254 scalar field.
pub static MODULUS: Lazy<BigUint> =
    Lazy::new(|| BigUint::from_bytes_le(&Fr::MODULUS.to_bytes_le()));

/// Smallest integer with exactly [`BIT_LIMIT`] bits, i.e. `2^(BIT_LIMIT - 1)`.
pub static BOUND: Lazy<BigUint> = Lazy::new(|| BigUint::from(1u8) << (BIT_LIMIT - 1));

/// Selects the exclusive upper bound used for prime challenges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Prime challenges lie below the field modulus.
    #[default]
    Default,
    /// Prime challenges lie below both the field modulus and [`BOUND`].
    Bounded,
}

impl Mode {
    /// Returns the exclusive upper bound for prime challenges in this mode.
    pub fn bound(self) -> &'static BigUint {
        match self {
            Mode::Default => &*MODULUS,
            Mode::Bounded => std::cmp::min(&*MODULUS, &*BOUND),
        }
    }
}
