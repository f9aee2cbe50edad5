//! Error types for the slice decode API.

use gpu_block_decode::DecodeError;
use thiserror::Error;

/// Errors that can occur when decoding a block through the slice API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlockDecodeApiError {
    /// The compressed block is not exactly 16 bytes. Nothing was written.
    #[error("Invalid block length: {0} bytes. Compressed blocks must be exactly 16 bytes.")]
    InvalidBlockLength(usize),

    /// The output buffer cannot hold the decoded block. Nothing was written.
    #[error("Output buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    OutputBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The block could not be decoded. The output holds sentinel texels.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
