//! Fiat–Shamir transcript over string messages.
//!
//! The [`Transcript`] type records protocol messages in a
//! [`HashAccumulator`] and derives deterministic challenges from the
//! accumulated state.  Every challenge is fed back into the transcript as its
//! decimal string before it is returned, so each round is bound to the
//! challenges issued before it.

use std::fmt;

use num_bigint::BigUint;

use crate::accumulator::HashAccumulator;
use crate::error::Result;
use crate::large::derive_large;
use crate::params::Mode;
use crate::prime::derive_bounded_prime;

const TRANSCRIPT_DOMAIN: &[u8] = b"FS_TRANSCRIPT";

/// Stateful helper that derives challenges from a recorded transcript.
#[derive(Debug, Clone)]
pub struct Transcript {
    accumulator: HashAccumulator,
    mode: Mode,
    messages: Vec<String>,
}

impl Transcript {
    /// Creates an empty transcript operating in `mode`.
    pub fn new(mode: Mode) -> Self {
        Self {
            accumulator: HashAccumulator::new(TRANSCRIPT_DOMAIN),
            mode,
            messages: Vec::new(),
        }
    }

    /// Creates a transcript in `mode` and appends `messages` in order.
    pub fn init<S: AsRef<str>>(messages: &[S], mode: Mode) -> Self {
        let mut transcript = Self::new(mode);
        transcript.append_slice(messages);
        transcript
    }

    /// Appends a single message.
    pub fn append(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        self.accumulator.absorb(message.as_bytes());
        self.messages.push(message.to_owned());
    }

    /// Appends every message in `messages`, in order.
    ///
    /// Equivalent to calling [`append`](Self::append) once per element.
    pub fn append_slice<S: AsRef<str>>(&mut self, messages: &[S]) {
        for message in messages {
            self.append(message);
        }
    }

    /// Derives a probable prime below the bound selected by the mode.
    ///
    /// The prime is strictly below the BN254 scalar-field modulus, and in
    /// [`Mode::Bounded`] also below [`BOUND`](crate::params::BOUND).  Its
    /// decimal string is appended to the transcript before it is returned, so
    /// calling this twice yields two different challenges, and the second one
    /// equals what a fresh transcript produces after explicitly appending the
    /// first.
    ///
    /// # Panics
    ///
    /// Panics if rejection sampling exhausts
    /// [`MAX_PRIME_ATTEMPTS`](crate::params::MAX_PRIME_ATTEMPTS).
    pub fn prime_challenge(&mut self) -> BigUint {
        let sample = derive_bounded_prime(&self.accumulator.digest(), self.mode.bound());
        tracing::debug!(
            mode = ?self.mode,
            bits = sample.prime.bits(),
            attempts = sample.attempts,
            "derived prime challenge"
        );
        self.append(sample.prime.to_string());
        sample.prime
    }

    /// Derives an integer of `bits` bits (or a few fewer) from the transcript.
    ///
    /// The decimal string of the result is appended to the transcript before
    /// it is returned.  Fails with
    /// [`Error::InvalidBitLength`](crate::Error::InvalidBitLength) when `bits`
    /// is zero, leaving the transcript untouched.
    pub fn large_challenge(&mut self, bits: usize) -> Result<BigUint> {
        let challenge = derive_large(&self.accumulator.digest(), bits)?;
        tracing::debug!(
            requested = bits,
            bits = challenge.bits(),
            "derived large challenge"
        );
        self.append(challenge.to_string());
        Ok(challenge)
    }

    /// Returns the mode selected at construction.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns every absorbed message, including fed-back challenges.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Hex encoding of the current accumulator digest.
    pub fn digest_hex(&self) -> String {
        hex::encode(self.accumulator.digest())
    }

    /// Writes a diagnostic dump using the provided line writer.
    ///
    /// The first line carries the mode and message count, followed by one
    /// line per message and a trailing `digest:` line.
    pub fn write_record<W>(&self, mut write_line: W) -> std::io::Result<()>
    where
        W: FnMut(&str) -> std::io::Result<()>,
    {
        write_line(&format!(
            "transcript mode={:?} messages={}",
            self.mode,
            self.accumulator.absorbed()
        ))?;
        for (index, message) in self.messages.iter().enumerate() {
            write_line(&format!("  [{index}] {message}"))?;
        }
        write_line(&format!("digest:{}", self.digest_hex()))
    }

    /// Emits the diagnostic dump through `tracing` at info level.
    pub fn print(&self) {
        // The line writer never fails, so the result is always `Ok`.
        let _ = self.write_record(|line| {
            tracing::info!("{line}");
            Ok(())
        });
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(Mode::Default)
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "transcript mode={:?} messages={}",
            self.mode,
            self.accumulator.absorbed()
        )?;
        for (index, message) in self.messages.iter().enumerate() {
            writeln!(f, "  [{index}] {message}")?;
        }
        write!(f, "digest:{}", self.digest_hex())
    }
}
