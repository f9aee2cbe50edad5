use super::AstcBlockDecoder;
use crate::error::BlockDecodeError;
use crate::footprint::AstcFootprint;
use crate::BYTES_PER_TEXEL;

/// ASTC decoder backed by [`astc_decode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AstcDecoder;

impl AstcBlockDecoder for AstcDecoder {
    fn decode_block(
        &self,
        block: &[u8; 16],
        footprint: AstcFootprint,
        output: &mut [u8],
        stride: usize,
    ) -> Result<(), BlockDecodeError> {
        let astc_footprint = astc_decode::Footprint::new(footprint.width(), footprint.height());

        let decoded = astc_decode::astc_decode_block(block, astc_footprint, |x, y, texel| {
            let offset = y as usize * stride + x as usize * BYTES_PER_TEXEL;
            // Texels past the end of a short output are dropped.
            if let Some(dst) = output.get_mut(offset..offset + BYTES_PER_TEXEL) {
                dst.copy_from_slice(&texel);
            }
        });

        if decoded {
            Ok(())
        } else {
            Err(BlockDecodeError::InvalidBlock)
        }
    }
}
