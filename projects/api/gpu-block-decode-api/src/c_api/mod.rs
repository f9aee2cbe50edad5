//! # C API (FFI) Documentation
//!
//! *Note: The C API is only available when the `c-exports` feature is enabled.*
//!
//! Two families of exports decode a single 16 byte block into RGBA8 texels.
//!
//! - [`bc7_decompress_block_ffi`] and [`astc_decompress_block_ffi`] return nothing.
//!   Failure is visible only as opaque magenta (`FF 00 FF FF`) texels in the output.
//! - [`gbd_bc7_decompress_block`] and [`gbd_astc_decompress_block`] write the same bytes
//!   and also return a [`GbdResult`] naming the failure.
//!
//! ## Example Usage
//!
//! ```c
//! #include <stdint.h>
//! #include <stdio.h>
//!
//! uint8_t block[16] = { /* ASTC 6x6 block */ };
//! uint8_t texels[6 * 6 * 4];
//!
//! // Status-less: always writes 144 bytes.
//! astc_decompress_block_ffi(block, 6, 6, texels);
//!
//! // With status: same output, plus a reason on failure.
//! GbdResult result = gbd_astc_decompress_block(block, 6, 6, texels);
//! if (result.error_code != GBD_SUCCESS) {
//!     printf("decode failed: %s\n", gbd_error_message(result.error_code));
//! }
//! ```

pub mod decode;
pub mod error;

pub use decode::*;
pub use error::*;
