//! Error types for block decode operations.
//!
//! None of these cross the decode boundary on their own. The total decode functions
//! convert every failure into sentinel fill. The `try_` variants additionally return
//! a [`DecodeError`] so callers that need diagnostics do not have to infer them from
//! pixel content.

use crate::footprint::AstcFootprint;
use thiserror::Error;

/// Failure reported by a block decoder implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlockDecodeError {
    /// The BC7 mode field has no bit set (reserved mode 8).
    #[error("BC7 block uses the reserved mode")]
    ReservedBc7Mode,

    /// The bitstream is malformed or violates a format invariant.
    #[error("Block is malformed or violates format invariants")]
    InvalidBlock,
}

/// Why a dispatched decode produced sentinel output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The requested ASTC texel grid is not a supported footprint.
    /// The ASTC decoder was not invoked.
    #[error("Unsupported ASTC footprint: {width}x{height}")]
    UnsupportedFootprint {
        /// Requested width in texels
        width: u32,
        /// Requested height in texels
        height: u32,
    },

    /// The BC7 decoder rejected the block.
    #[error("BC7 decode failed: {0}")]
    Bc7(#[source] BlockDecodeError),

    /// The ASTC decoder rejected the block.
    #[error("ASTC {footprint} decode failed: {source}")]
    Astc {
        /// Footprint the block was decoded as
        footprint: AstcFootprint,
        /// Failure reported by the decoder
        #[source]
        source: BlockDecodeError,
    },
}
