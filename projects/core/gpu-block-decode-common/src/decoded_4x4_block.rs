//! # Decoded 4x4 Block
//!
//! This module provides the [`Decoded4x4Block`] structure for representing a decompressed
//! BC7 block.
//!
//! BC7 always encodes a 4x4 texel grid in 16 bytes, so a decoded block is exactly 16
//! [`Color8888`] texels, or 64 bytes once written out as RGBA.
//!
//! ## Usage
//!
//! ```
//! use gpu_block_decode_common::color_8888::Color8888;
//! use gpu_block_decode_common::decoded_4x4_block::Decoded4x4Block;
//!
//! // Create a block filled with red pixels
//! let red_pixel = Color8888::new(255, 0, 0, 255);
//! let block = Decoded4x4Block::new(red_pixel);
//!
//! let mut rgba = [0u8; Decoded4x4Block::RGBA_LEN];
//! block.write_rgba(&mut rgba);
//! assert_eq!(&rgba[..4], &[255, 0, 0, 255]);
//! ```
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```

use crate::color_8888::Color8888;

/// Represents a decoded 4x4 block of texels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Decoded4x4Block {
    /// Number of texels in a block.
    pub const TEXEL_COUNT: usize = 16;

    /// Size of the block once written out as RGBA8, in bytes.
    pub const RGBA_LEN: usize = Self::TEXEL_COUNT * 4;

    /// Constructs a new decoded block initialised with 16 copies of the provided pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpu_block_decode_common::color_8888::Color8888;
    /// use gpu_block_decode_common::decoded_4x4_block::Decoded4x4Block;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// let block = Decoded4x4Block::new(pixel);
    /// assert!(block.pixels.iter().all(|&p| p == pixel));
    /// ```
    pub const fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Builds a block from 64 bytes of row-major RGBA data.
    pub fn from_rgba(rgba: &[u8; Self::RGBA_LEN]) -> Self {
        let mut block = Self::new(Color8888::default());
        for (pixel, bytes) in block.pixels.iter_mut().zip(rgba.chunks_exact(4)) {
            *pixel = Color8888::new(bytes[0], bytes[1], bytes[2], bytes[3]);
        }
        block
    }

    /// Writes the texels into `output` as RGBA8, texel `i` at byte offset `i * 4`.
    ///
    /// Writes at most [`Self::RGBA_LEN`] bytes. If `output` is shorter, only the
    /// texels that fit are written.
    #[inline]
    pub fn write_rgba(&self, output: &mut [u8]) {
        for (dst, pixel) in output.chunks_exact_mut(4).zip(self.pixels.iter()) {
            dst.copy_from_slice(&pixel.to_bytes());
        }
    }
}
