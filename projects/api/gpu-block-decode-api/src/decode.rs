//! Slice based block decoding with length validation.
//!
//! Unlike the raw dispatch functions, these check that the compressed block is 16 bytes
//! and that the output can hold the whole decoded region before anything is written.
//! Once validation passes, the output always receives either the decoded texels or a
//! full sentinel fill, exactly as with the raw functions.

use crate::error::BlockDecodeApiError;
use gpu_block_decode::{
    BLOCK_SIZE, BYTES_PER_TEXEL, Decoded4x4Block, try_decode_astc_block, try_decode_bc7_block,
};

/// Number of output bytes a decoded BC7 block occupies (always 64).
#[inline]
pub const fn required_output_len_bc7() -> usize {
    Decoded4x4Block::RGBA_LEN
}

/// Number of output bytes a decoded `block_width` x `block_height` ASTC block occupies.
///
/// This is defined for every pair, including unsupported footprints, since those still
/// receive a full sentinel fill. Saturates instead of overflowing.
#[inline]
pub const fn required_output_len_astc(block_width: u32, block_height: u32) -> usize {
    (block_width as usize)
        .saturating_mul(block_height as usize)
        .saturating_mul(BYTES_PER_TEXEL)
}

/// Decodes a BC7 block into `output` as 4x4 RGBA8 texels.
///
/// # Parameters
///
/// - `block`: The compressed block (16 bytes)
/// - `output`: Destination buffer, at least [`required_output_len_bc7`] bytes
///
/// # Returns
///
/// - [`BlockDecodeApiError::InvalidBlockLength`] or [`BlockDecodeApiError::OutputBufferTooSmall`]
///   if validation fails. `output` is left untouched.
/// - [`BlockDecodeApiError::Decode`] if the block was rejected. `output` holds 16 sentinel texels.
pub fn decode_bc7_slice(block: &[u8], output: &mut [u8]) -> Result<(), BlockDecodeApiError> {
    let block = as_block(block)?;
    check_output_len(required_output_len_bc7(), output)?;
    try_decode_bc7_block(block, output)?;
    Ok(())
}

/// Decodes an ASTC block into `output` as `block_width` x `block_height` RGBA8 texels.
///
/// # Parameters
///
/// - `block`: The compressed block (16 bytes)
/// - `block_width`: Footprint width in texels
/// - `block_height`: Footprint height in texels
/// - `output`: Destination buffer, at least [`required_output_len_astc`] bytes
///
/// # Returns
///
/// - [`BlockDecodeApiError::InvalidBlockLength`] or [`BlockDecodeApiError::OutputBufferTooSmall`]
///   if validation fails. `output` is left untouched.
/// - [`BlockDecodeApiError::Decode`] if the footprint is unsupported or the block was rejected.
///   `output` holds `block_width * block_height` sentinel texels.
pub fn decode_astc_slice(
    block: &[u8],
    block_width: u32,
    block_height: u32,
    output: &mut [u8],
) -> Result<(), BlockDecodeApiError> {
    let block = as_block(block)?;
    check_output_len(required_output_len_astc(block_width, block_height), output)?;
    try_decode_astc_block(block, block_width, block_height, output)?;
    Ok(())
}

#[inline]
fn as_block(block: &[u8]) -> Result<&[u8; BLOCK_SIZE], BlockDecodeApiError> {
    block
        .try_into()
        .map_err(|_| BlockDecodeApiError::InvalidBlockLength(block.len()))
}

#[inline]
fn check_output_len(needed: usize, output: &[u8]) -> Result<(), BlockDecodeApiError> {
    if output.len() < needed {
        return Err(BlockDecodeApiError::OutputBufferTooSmall {
            needed,
            actual: output.len(),
        });
    }
    Ok(())
}
