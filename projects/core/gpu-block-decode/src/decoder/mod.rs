//! Block decoder interfaces.
//!
//! The dispatcher never decodes bitstreams itself. It talks to one decoder per codec
//! family through the traits in this module, so any conformant BC7 or ASTC
//! implementation can be swapped in without touching the dispatch logic.
//!
//! The default implementations are [`Bc7Decoder`] (backed by `bcdec_rs`) and
//! [`AstcDecoder`] (backed by `astc-decode`).

mod astc;
mod bc7;

pub use astc::AstcDecoder;
pub use bc7::Bc7Decoder;

use crate::error::BlockDecodeError;
use crate::footprint::AstcFootprint;
use gpu_block_decode_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes a single 16 byte BC7 block into a 4x4 grid of texels.
pub trait Bc7BlockDecoder {
    /// Decodes `block`.
    ///
    /// # Returns
    ///
    /// The decoded texels in row-major order, or the reason the block was rejected.
    fn decode_block(&self, block: &[u8; 16]) -> Result<Decoded4x4Block, BlockDecodeError>;
}

/// Decodes a single 16 byte ASTC block directly into an RGBA8 output region.
pub trait AstcBlockDecoder {
    /// Decodes `block` as `footprint`.
    ///
    /// # Parameters
    ///
    /// - `block`: The compressed block
    /// - `footprint`: Texel grid to interpret the block as
    /// - `output`: Destination, at least [`AstcFootprint::output_len`] bytes
    /// - `stride`: Bytes between consecutive rows in `output`
    ///
    /// # Remarks
    ///
    /// Implementations write texels as they decode them and do not clean up on failure.
    /// The dispatcher replaces the whole region with sentinel texels when this returns
    /// an error.
    fn decode_block(
        &self,
        block: &[u8; 16],
        footprint: AstcFootprint,
        output: &mut [u8],
        stride: usize,
    ) -> Result<(), BlockDecodeError>;
}

impl<T: Bc7BlockDecoder + ?Sized> Bc7BlockDecoder for &T {
    fn decode_block(&self, block: &[u8; 16]) -> Result<Decoded4x4Block, BlockDecodeError> {
        (**self).decode_block(block)
    }
}

impl<T: AstcBlockDecoder + ?Sized> AstcBlockDecoder for &T {
    fn decode_block(
        &self,
        block: &[u8; 16],
        footprint: AstcFootprint,
        output: &mut [u8],
        stride: usize,
    ) -> Result<(), BlockDecodeError> {
        (**self).decode_block(block, footprint, output, stride)
    }
}
