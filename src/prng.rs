//! Deterministic byte streams derived from transcript digests.
//!
//! A [`HashStream`] is a counter-mode BLAKE2b-256 expander: the key is a hash
//! of a domain tag and a list of framed context parts, and the `i`-th output
//! block is `BLAKE2b-256(STREAM_DOMAIN || key || i)`.  Both challenge derivers
//! and the primality witnesses draw their randomness from it, which keeps every
//! derived value reproducible from the transcript state alone.

use blake2::digest::{consts::U32, Digest};
use rand::RngCore;

type Blake2b256 = blake2::Blake2b<U32>;

const KEY_DOMAIN: &[u8] = b"FS_TRANSCRIPT_KEY";
const STREAM_DOMAIN: &[u8] = b"FS_TRANSCRIPT_STREAM";
const BLOCK_LEN: usize = 32;

/// Extendable-output stream keyed by a domain and framed context parts.
#[derive(Debug, Clone)]
pub struct HashStream {
    key: [u8; 32],
    counter: u64,
    buffer: [u8; BLOCK_LEN],
    offset: usize,
}

impl HashStream {
    /// Builds a stream whose key binds `domain` and every entry of `parts`.
    ///
    /// Each part is length-prefixed, so distinct part lists never share a key.
    pub fn keyed(domain: &[u8], parts: &[&[u8]]) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update(KEY_DOMAIN);
        hasher.update((domain.len() as u64).to_be_bytes());
        hasher.update(domain);
        hasher.update((parts.len() as u64).to_be_bytes());
        for part in parts {
            hasher.update((part.len() as u64).to_be_bytes());
            hasher.update(part);
        }
        let mut key = [0u8; 32];
        key.copy_from_slice(&hasher.finalize());
        Self {
            key,
            counter: 0,
            buffer: [0u8; BLOCK_LEN],
            offset: BLOCK_LEN,
        }
    }

    fn refill(&mut self) {
        let mut hasher = Blake2b256::new();
        hasher.update(STREAM_DOMAIN);
        hasher.update(self.key);
        hasher.update(self.counter.to_be_bytes());
        self.buffer.copy_from_slice(&hasher.finalize());
        self.counter = self.counter.wrapping_add(1);
        self.offset = 0;
    }

    /// Fills `dest` with the next bytes of the stream.
    pub fn fill(&mut self, dest: &mut [u8]) {
        let mut written = 0;
        while written < dest.len() {
            if self.offset >= BLOCK_LEN {
                self.refill();
            }
            let take = (BLOCK_LEN - self.offset).min(dest.len() - written);
            dest[written..written + take]
                .copy_from_slice(&self.buffer[self.offset..self.offset + take]);
            self.offset += take;
            written += take;
        }
    }

    /// Returns the next `len` bytes of the stream.
    pub fn take(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.fill(&mut out);
        out
    }

    /// Number of blocks produced so far.
    pub fn blocks(&self) -> u64 {
        self.counter
    }
}

impl RngCore for HashStream {
    fn next_u32(&mut self) -> u32 {
        let mut chunk = [0u8; 4];
        self.fill(&mut chunk);
        u32::from_be_bytes(chunk)
    }

    fn next_u64(&mut self) -> u64 {
        let mut chunk = [0u8; 8];
        self.fill(&mut chunk);
        u64::from_be_bytes(chunk)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill(dest);
        Ok(())
    }
}
