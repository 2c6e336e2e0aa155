#![deny(missing_docs)]

//! # fiat_shamir
//!
//! A deterministic Fiat–Shamir transcript.  Protocol messages are absorbed in
//! order into a framed BLAKE2b-256 state, and the verifier's random challenges
//! are replaced by values derived from that state:
//!
//! * **Prime challenges**: probable primes found by rejection sampling below
//!   the BN254 scalar-field modulus, or below the tighter
//!   [`BOUND`](params::BOUND) in [`Mode::Bounded`].
//! * **Large challenges**: integers of an arbitrary requested bit length,
//!   expanded from the state with a counter-mode hash stream.
//!
//! Each challenge is appended back into the transcript as its decimal string,
//! binding every round to the ones before it.
//!
//! ## Usage
//!
//! ```rust
//! use fiat_shamir::{Mode, Transcript};
//!
//! let mut prover = Transcript::init(&["111", "aaa", "333"], Mode::Default);
//! let mut verifier = Transcript::new(Mode::Default);
//! verifier.append_slice(&["111", "aaa"]);
//! verifier.append("333");
//!
//! let c1 = prover.prime_challenge();
//! assert_eq!(c1, verifier.prime_challenge());
//!
//! let big = prover.large_challenge(2048).unwrap();
//! assert!(big.bits() <= 2048);
//! ```
//!
//! A transcript is owned by a single protocol session and mutated through
//! `&mut self`; independent transcripts can be used from separate threads.

pub mod accumulator;
mod error;
pub mod large;
pub mod params;
pub mod primality;
pub mod prime;
pub mod prng;
mod transcript;

pub use accumulator::{AccumulatorDigest, HashAccumulator};
pub use error::{Error, Result};
pub use params::{Mode, BIT_LIMIT, BOUND, MAX_PRIME_ATTEMPTS, MODULUS, SECURITY_PARAMETER};
pub use primality::is_probable_prime;
pub use prime::PrimeSample;
pub use prng::HashStream;
pub use transcript::Transcript;
