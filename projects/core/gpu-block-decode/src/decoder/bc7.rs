use super::Bc7BlockDecoder;
use crate::error::BlockDecodeError;
use gpu_block_decode_common::decoded_4x4_block::Decoded4x4Block;

/// BC7 decoder backed by [`bcdec_rs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Bc7Decoder;

impl Bc7BlockDecoder for Bc7Decoder {
    fn decode_block(&self, block: &[u8; 16]) -> Result<Decoded4x4Block, BlockDecodeError> {
        // The mode is the index of the lowest set bit in the first byte.
        // No bit set means mode 8, which is reserved. bcdec would silently
        // emit transparent black for it, so reject it here instead.
        if block[0] == 0 {
            return Err(BlockDecodeError::ReservedBc7Mode);
        }

        let mut rgba = [0u8; Decoded4x4Block::RGBA_LEN];
        bcdec_rs::bc7(block, &mut rgba, 4 * 4);
        Ok(Decoded4x4Block::from_rgba(&rgba))
    }
}
