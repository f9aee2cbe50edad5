//! Common test imports and utilities for API tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Crate items
pub use crate::decode::*;
pub use crate::error::BlockDecodeApiError;
pub use gpu_block_decode::sentinel::is_sentinel_filled;
pub use gpu_block_decode::{BlockDecodeError, DecodeError};

/// BC7 mode 6 block with every endpoint, p-bit and index bit set (decodes to opaque white).
pub const BC7_MODE6_WHITE: [u8; 16] = [
    0xC0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// ASTC LDR void-extent block decoding to `FF 00 80 FF` for any footprint.
pub const ASTC_VOID_EXTENT: [u8; 16] = [
    0xFC, 0xFD, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x80, 0x80, 0xFF, 0xFF,
];
