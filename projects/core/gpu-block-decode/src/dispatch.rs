//! # Block Decode Dispatch
//!
//! Entry points that pick the decoder for a block, run it, and normalize the outcome
//! into one output contract:
//!
//! - Output is RGBA8, row-major, 4 bytes per texel, row stride `width * 4`.
//! - On success the region holds the decoded texels.
//! - On any failure the whole region holds [`SENTINEL_BYTES`] texels.
//!
//! Every function here is total. It never panics on malformed input and never leaves the
//! region partially written. The `try_` variants write exactly the same bytes as their
//! total counterparts but also report why the sentinel was written.
//!
//! ## Output sizing
//!
//! Sizing `output` is the caller's responsibility: 64 bytes for BC7 and
//! `block_width * block_height * 4` bytes for ASTC. Writes never go past the end of
//! `output`, so an undersized buffer only receives the texels that fit.
//!
//! [`SENTINEL_BYTES`]: crate::sentinel::SENTINEL_BYTES

use crate::decoder::{AstcBlockDecoder, AstcDecoder, Bc7BlockDecoder, Bc7Decoder};
use crate::error::DecodeError;
use crate::footprint::AstcFootprint;
use crate::sentinel::fill_sentinel;

/// Decodes a BC7 block into 64 bytes of RGBA8 using the default decoder.
///
/// # Parameters
///
/// - `block`: The compressed block
/// - `output`: Destination for 4x4 texels (64 bytes)
///
/// # Remarks
///
/// A block the decoder rejects is written as 16 sentinel texels.
#[inline]
pub fn decode_bc7_block(block: &[u8; 16], output: &mut [u8]) {
    decode_bc7_block_with(&Bc7Decoder, block, output)
}

/// Decodes a BC7 block with the given decoder. See [`decode_bc7_block`].
#[inline]
pub fn decode_bc7_block_with<D: Bc7BlockDecoder + ?Sized>(
    decoder: &D,
    block: &[u8; 16],
    output: &mut [u8],
) {
    // Failure is already encoded in the output.
    let _ = try_decode_bc7_block_with(decoder, block, output);
}

/// Decodes a BC7 block like [`decode_bc7_block`], also returning why the sentinel was written.
#[inline]
pub fn try_decode_bc7_block(block: &[u8; 16], output: &mut [u8]) -> Result<(), DecodeError> {
    try_decode_bc7_block_with(&Bc7Decoder, block, output)
}

/// Decodes a BC7 block with the given decoder, also returning why the sentinel was written.
pub fn try_decode_bc7_block_with<D: Bc7BlockDecoder + ?Sized>(
    decoder: &D,
    block: &[u8; 16],
    output: &mut [u8],
) -> Result<(), DecodeError> {
    match decoder.decode_block(block) {
        Ok(decoded) => {
            decoded.write_rgba(output);
            Ok(())
        }
        Err(e) => {
            fill_sentinel(4, 4, output);
            Err(DecodeError::Bc7(e))
        }
    }
}

/// Decodes an ASTC block into `block_width * block_height * 4` bytes of RGBA8 using the
/// default decoder.
///
/// # Parameters
///
/// - `block`: The compressed block
/// - `block_width`: Footprint width in texels
/// - `block_height`: Footprint height in texels
/// - `output`: Destination, `block_width * block_height * 4` bytes with stride `block_width * 4`
///
/// # Remarks
///
/// If `(block_width, block_height)` is not a supported [`AstcFootprint`], the region is
/// written as sentinel texels and the decoder is never invoked. A block the decoder
/// rejects is also written as sentinel texels.
#[inline]
pub fn decode_astc_block(block: &[u8; 16], block_width: u32, block_height: u32, output: &mut [u8]) {
    decode_astc_block_with(&AstcDecoder, block, block_width, block_height, output)
}

/// Decodes an ASTC block with the given decoder. See [`decode_astc_block`].
#[inline]
pub fn decode_astc_block_with<D: AstcBlockDecoder + ?Sized>(
    decoder: &D,
    block: &[u8; 16],
    block_width: u32,
    block_height: u32,
    output: &mut [u8],
) {
    // Failure is already encoded in the output.
    let _ = try_decode_astc_block_with(decoder, block, block_width, block_height, output);
}

/// Decodes an ASTC block like [`decode_astc_block`], also returning why the sentinel was written.
#[inline]
pub fn try_decode_astc_block(
    block: &[u8; 16],
    block_width: u32,
    block_height: u32,
    output: &mut [u8],
) -> Result<(), DecodeError> {
    try_decode_astc_block_with(&AstcDecoder, block, block_width, block_height, output)
}

/// Decodes an ASTC block with the given decoder, also returning why the sentinel was written.
pub fn try_decode_astc_block_with<D: AstcBlockDecoder + ?Sized>(
    decoder: &D,
    block: &[u8; 16],
    block_width: u32,
    block_height: u32,
    output: &mut [u8],
) -> Result<(), DecodeError> {
    let Some(footprint) = AstcFootprint::resolve(block_width, block_height) else {
        fill_sentinel(block_width, block_height, output);
        return Err(DecodeError::UnsupportedFootprint {
            width: block_width,
            height: block_height,
        });
    };

    // The decoder only ever sees the declared region.
    let region_len = footprint.output_len().min(output.len());
    let region = &mut output[..region_len];

    match decoder.decode_block(block, footprint, region, footprint.stride()) {
        Ok(()) => Ok(()),
        Err(source) => {
            fill_sentinel(block_width, block_height, region);
            Err(DecodeError::Astc { footprint, source })
        }
    }
}
