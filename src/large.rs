//! Arbitrary-length integer challenges.
//!
//! The transcript digest and the requested bit length key a [`HashStream`];
//! `ceil(bits / 8)` bytes are read big-endian and the result keeps the low
//! `bits` bits.  The top bit is not forced, so the value has `bits` bits or a
//! few fewer when its leading bits happen to be zero.

use num_bigint::BigUint;

use crate::accumulator::AccumulatorDigest;
use crate::error::{Error, Result};
use crate::prng::HashStream;

const LARGE_DOMAIN: &[u8] = b"FS_TRANSCRIPT_LARGE_CHALLENGE";

/// Derives an integer of at most `bits` bits from `seed`.
///
/// Returns [`Error::InvalidBitLength`] when `bits` is zero.
pub fn derive_large(seed: &AccumulatorDigest, bits: usize) -> Result<BigUint> {
    if bits == 0 {
        return Err(Error::InvalidBitLength(bits));
    }
    let len = bits.div_ceil(8);
    let excess = (8 - bits % 8) % 8;
    let length_tag = (bits as u64).to_be_bytes();
    let mut stream = HashStream::keyed(LARGE_DOMAIN, &[seed.as_slice(), &length_tag]);
    let mut bytes = stream.take(len);
    bytes[0] &= 0xffu8 >> excess;
    Ok(BigUint::from_bytes_be(&bytes))
}

#[cfg(test)]
mod tests {
    use super::derive_large;
    use crate::error::Error;

    #[test]
    fn test_zero_bits_rejected() {
        assert_eq!(derive_large(&[0u8; 32], 0), Err(Error::InvalidBitLength(0)));
    }

    #[test]
    fn test_never_exceeds_requested_bits() {
        for bits in [1usize, 2, 7, 8, 9, 63, 64, 65, 255, 256, 257, 1000] {
            for byte in 0..16u8 {
                let value = derive_large(&[byte; 32], bits).unwrap();
                assert!(value.bits() <= bits as u64, "bits = {bits}");
            }
        }
    }

    #[test]
    fn test_partial_byte_lengths_are_masked() {
        for bits in 1usize..=16 {
            let value = derive_large(&[9u8; 32], bits).unwrap();
            assert!(value.bits() <= bits as u64, "bits = {bits}");
            assert!(value < num_bigint::BigUint::from(1u32) << bits);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = derive_large(&[3u8; 32], 4096).unwrap();
        let b = derive_large(&[3u8; 32], 4096).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_lengths_do_not_share_blocks() {
        let short = derive_large(&[5u8; 32], 256).unwrap();
        let long = derive_large(&[5u8; 32], 512).unwrap();
        // The long value's leading half is not the short value.
        let long_high = &long >> 256u32;
        assert_ne!(short, long_high);
        let long_low = &long - (&long_high << 256u32);
        assert_ne!(short, long_low);
    }
}
