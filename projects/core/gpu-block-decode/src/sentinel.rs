//! Error sentinel fill.
//!
//! Any block that cannot be decoded is replaced by opaque magenta ([`Color8888::ERROR_SENTINEL`])
//! across its whole output region, so a caller never observes a mix of sentinel texels and
//! stale memory.

use crate::BYTES_PER_TEXEL;
use gpu_block_decode_common::color_8888::Color8888;

/// The sentinel texel as it appears in memory: `FF 00 FF FF`.
pub const SENTINEL_BYTES: [u8; BYTES_PER_TEXEL] = Color8888::ERROR_SENTINEL.to_bytes();

/// Number of texels in a `width` x `height` region, saturating instead of overflowing.
#[inline]
pub(crate) fn region_texels(width: u32, height: u32) -> usize {
    (width as usize).saturating_mul(height as usize)
}

/// Writes `width * height` sentinel texels contiguously, starting at `output[0]`.
///
/// `output` is expected to hold at least `width * height * 4` bytes. If it is shorter,
/// writing stops at the last whole texel that fits.
#[inline]
pub fn fill_sentinel(width: u32, height: u32, output: &mut [u8]) {
    for texel in output
        .chunks_exact_mut(BYTES_PER_TEXEL)
        .take(region_texels(width, height))
    {
        texel.copy_from_slice(&SENTINEL_BYTES);
    }
}

/// Returns true if the first `width * height` texels of `output` all hold the sentinel.
///
/// Returns false if `output` is too short to hold the region.
pub fn is_sentinel_filled(width: u32, height: u32, output: &[u8]) -> bool {
    let len = region_texels(width, height).saturating_mul(BYTES_PER_TEXEL);
    match output.get(..len) {
        Some(region) => region.chunks_exact(BYTES_PER_TEXEL).all(is_sentinel_texel),
        None => false,
    }
}

#[inline]
fn is_sentinel_texel(texel: &[u8]) -> bool {
    match <[u8; BYTES_PER_TEXEL]>::try_from(texel) {
        Ok(bytes) => Color8888::from_bytes(bytes).is_error_sentinel(),
        Err(_) => false,
    }
}
