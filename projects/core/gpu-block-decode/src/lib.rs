#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod decoder;
pub mod dispatch;
pub mod error;
pub mod footprint;
pub mod sentinel;

pub use decoder::{AstcBlockDecoder, AstcDecoder, Bc7BlockDecoder, Bc7Decoder};
pub use dispatch::{
    decode_astc_block, decode_astc_block_with, decode_bc7_block, decode_bc7_block_with,
    try_decode_astc_block, try_decode_astc_block_with, try_decode_bc7_block,
    try_decode_bc7_block_with,
};
pub use error::{BlockDecodeError, DecodeError};
pub use footprint::{AstcFootprint, ParseFootprintError};
pub use gpu_block_decode_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Size of a single compressed block in bytes.
///
/// Both BC7 and ASTC use 16 byte blocks regardless of the texel footprint.
pub const BLOCK_SIZE: usize = 16;

/// Number of bytes written per decoded texel.
pub const BYTES_PER_TEXEL: usize = 4;

#[cfg(test)]
mod test_prelude;
