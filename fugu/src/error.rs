//! Error types for the fugu library.

use thiserror::Error;

/// Errors produced by the cipher and digest engines.
///
/// Every variant signals a caller contract violation at the call site;
/// nothing is retried internally, since retrying a malformed call cannot
/// succeed without the caller fixing the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key material outside the accepted 4..=56 byte range.
    #[error("invalid key length: {len} bytes (must be 4..=56)")]
    InvalidKeyLength {
        /// Length of the rejected key material.
        len: usize,
    },

    /// A buffer is too short for the requested operation.
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall {
        /// Minimum number of bytes the operation requires.
        needed: usize,
        /// Number of bytes actually available.
        available: usize,
    },

    /// A block-mode operation was given a length that is not a positive
    /// multiple of the 8-byte block size.
    #[error("length {len} is not a positive multiple of the 8-byte block size")]
    UnalignedLength {
        /// The rejected length.
        len: usize,
    },

    /// The engine was disposed with `clean_up` and can no longer be used.
    #[error("engine has been disposed")]
    EngineDisposed,

    /// The digest was already finalized; no further input is accepted.
    #[error("digest has already been finalized")]
    EngineFinalized,

    /// The digest was read before `finish` froze it.
    #[error("digest has not been finalized")]
    EngineNotFinalized,
}

/// Result type for fugu operations.
pub type Result<T> = std::result::Result<T, Error>;
