#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod color_8888;
pub mod decoded_4x4_block;

#[cfg(test)]
mod test_prelude;
