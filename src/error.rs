//! Error types for transcript challenge derivation.

use thiserror::Error;

/// Errors surfaced by the transcript API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A large challenge was requested with a bit length the deriver cannot honour.
    #[error("invalid challenge bit length: {0} (must be positive)")]
    InvalidBitLength(usize),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
