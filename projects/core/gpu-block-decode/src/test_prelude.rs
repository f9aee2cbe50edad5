//! Common test imports and utilities for block decode tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{format, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Crate items
pub use crate::decoder::{AstcBlockDecoder, AstcDecoder, Bc7BlockDecoder, Bc7Decoder};
pub use crate::dispatch::*;
pub use crate::error::{BlockDecodeError, DecodeError};
pub use crate::footprint::{AstcFootprint, ParseFootprintError};
pub use crate::sentinel::{fill_sentinel, is_sentinel_filled, SENTINEL_BYTES};
pub use gpu_block_decode_common::color_8888::Color8888;
pub use gpu_block_decode_common::decoded_4x4_block::Decoded4x4Block;

/// BC7 mode 6 block with every endpoint, p-bit and index zeroed.
/// Decodes to 16 texels of `00 00 00 00`.
pub const BC7_MODE6_ZERO: [u8; 16] = [0x40, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// BC7 mode 6 block with every endpoint, p-bit and index bit set.
/// Decodes to 16 texels of `FF FF FF FF`.
pub const BC7_MODE6_WHITE: [u8; 16] = [
    0xC0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// ASTC LDR void-extent block (constant color, valid for any footprint).
///
/// Bits 0..9 are the void-extent marker `0x1FC`, bit 9 clear selects LDR,
/// bits 10..12 are the reserved `11` and every extent coordinate is all ones.
/// The color is R = 0xFFFF, G = 0x0000, B = 0x8080, A = 0xFFFF as UNORM16.
pub const ASTC_VOID_EXTENT_RED_HALF_BLUE: [u8; 16] = [
    0xFC, 0xFD, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // header
    0xFF, 0xFF, // R
    0x00, 0x00, // G
    0x80, 0x80, // B
    0xFF, 0xFF, // A
];

/// Texel every [`ASTC_VOID_EXTENT_RED_HALF_BLUE`] block decodes to.
pub const ASTC_VOID_EXTENT_RED_HALF_BLUE_RGBA: [u8; 4] = [0xFF, 0x00, 0x80, 0xFF];

/// ASTC block with an 8x4 grid of 1 bit weights and one partition of LDR luminance.
///
/// Block mode `0x045` selects the 8 wide weight grid. Both endpoints are zero, so every
/// texel decodes to opaque black. Any footprint narrower than 8 or shorter than 4
/// rejects it.
pub const ASTC_WEIGHT_GRID_8X4: [u8; 16] = [0x45, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// Texel every [`ASTC_WEIGHT_GRID_8X4`] block decodes to when the footprint fits.
pub const ASTC_WEIGHT_GRID_8X4_RGBA: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];
