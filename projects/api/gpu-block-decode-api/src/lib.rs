#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! Safe, high-level API for single block decoding.
//!
//! This crate wraps the raw dispatch in `gpu-block-decode` with length validation
//! for slices, and exposes the C ABI used by foreign callers.
//!
//! # Examples
//!
//! ```
//! use gpu_block_decode_api::{decode_bc7_slice, required_output_len_bc7};
//!
//! let block = [0x40u8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
//! let mut output = vec![0u8; required_output_len_bc7()];
//! decode_bc7_slice(&block, &mut output)?;
//! # Ok::<(), gpu_block_decode_api::BlockDecodeApiError>(())
//! ```

// Module declarations
pub mod decode;
pub mod error;

#[cfg(feature = "c-exports")]
pub mod c_api;

// Re-export main functionality at crate root
pub use decode::{
    decode_astc_slice, decode_bc7_slice, required_output_len_astc, required_output_len_bc7,
};
pub use error::BlockDecodeApiError;
pub use gpu_block_decode::{AstcFootprint, DecodeError};

#[cfg(test)]
mod test_prelude;
