//! Running BLAKE2b-256 state over framed messages.
//!
//! Every message is prefixed with its length as a big-endian `u64` before it
//! reaches the hash, so the sequence `["ab", "c"]` and `["a", "bc"]` never
//! collide.  Digests are taken from a clone of the hasher, leaving the live
//! state free to keep absorbing.

use blake2::digest::{consts::U32, Digest};

type Blake2b256 = blake2::Blake2b<U32>;

/// Size in bytes of an accumulator digest.
pub const DIGEST_LEN: usize = 32;

/// Fixed-size digest produced by [`HashAccumulator::digest`].
pub type AccumulatorDigest = [u8; DIGEST_LEN];

/// Incremental hash over an ordered sequence of framed messages.
#[derive(Debug, Clone)]
pub struct HashAccumulator {
    hasher: Blake2b256,
    absorbed: u64,
}

impl HashAccumulator {
    /// Creates an accumulator bound to `domain`.
    ///
    /// The domain tag is framed like any other message but does not count
    /// towards [`absorbed`](Self::absorbed).
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update((domain.len() as u64).to_be_bytes());
        hasher.update(domain);
        Self {
            hasher,
            absorbed: 0,
        }
    }

    /// Absorbs one length-prefixed message.
    pub fn absorb(&mut self, bytes: &[u8]) {
        self.hasher.update((bytes.len() as u64).to_be_bytes());
        self.hasher.update(bytes);
        self.absorbed += 1;
    }

    /// Returns the digest of everything absorbed so far.
    pub fn digest(&self) -> AccumulatorDigest {
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&self.hasher.clone().finalize());
        out
    }

    /// Number of messages absorbed since construction.
    pub fn absorbed(&self) -> u64 {
        self.absorbed
    }
}

#[cfg(test)]
mod tests {
    use super::HashAccumulator;

    #[test]
    fn test_framing_separates_boundaries() {
        let mut left = HashAccumulator::new(b"test");
        left.absorb(b"ab");
        left.absorb(b"c");
        let mut right = HashAccumulator::new(b"test");
        right.absorb(b"a");
        right.absorb(b"bc");
        assert_ne!(left.digest(), right.digest());
    }

    #[test]
    fn test_digest_does_not_consume_state() {
        let mut acc = HashAccumulator::new(b"test");
        acc.absorb(b"first");
        let before = acc.digest();
        assert_eq!(before, acc.digest());
        acc.absorb(b"second");
        assert_ne!(before, acc.digest());
        assert_eq!(acc.absorbed(), 2);
    }

    #[test]
    fn test_domain_separates_states() {
        let mut a = HashAccumulator::new(b"alpha");
        let mut b = HashAccumulator::new(b"beta");
        a.absorb(b"msg");
        b.absorb(b"msg");
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn test_empty_message_is_framed() {
        let plain = HashAccumulator::new(b"test");
        let mut with_empty = HashAccumulator::new(b"test");
        with_empty.absorb(b"");
        assert_ne!(plain.digest(), with_empty.digest());
    }
}
