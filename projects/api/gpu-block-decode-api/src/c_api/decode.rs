//! C exports for single block decoding.

use crate::c_api::error::{GbdErrorCode, GbdResult};
use core::slice;
use gpu_block_decode::{
    BLOCK_SIZE, BYTES_PER_TEXEL, Decoded4x4Block, try_decode_astc_block, try_decode_bc7_block,
};

/// Decode one BC7 block into 4x4 RGBA8 texels.
///
/// # Parameters
/// - `input_buffer`: Pointer to the 16 byte compressed block
/// - `out_buffer`: Pointer to 64 bytes of output
///
/// # Remarks
/// Always writes all 64 bytes. A block that cannot be decoded is written as
/// 16 opaque magenta (`FF 00 FF FF`) texels. Null pointers are ignored.
///
/// # Safety
/// - `input_buffer` must be valid for reads of 16 bytes
/// - `out_buffer` must be valid for writes of 64 bytes
/// - The two regions must not overlap
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bc7_decompress_block_ffi(input_buffer: *const u8, out_buffer: *mut u8) {
    // Failure is already encoded in the output.
    let _ = unsafe { gbd_bc7_decompress_block(input_buffer, out_buffer) };
}

/// Decode one ASTC block into `block_width` x `block_height` RGBA8 texels.
///
/// # Parameters
/// - `astc_data`: Pointer to the 16 byte compressed block
/// - `block_width`: Footprint width in texels
/// - `block_height`: Footprint height in texels
/// - `out_buffer`: Pointer to `block_width * block_height * 4` bytes of output
///
/// # Remarks
/// Always writes `block_width * block_height * 4` bytes with a row stride of
/// `block_width * 4`. Unsupported footprints and blocks that cannot be decoded
/// are written as opaque magenta (`FF 00 FF FF`) texels. Null pointers are ignored.
///
/// # Safety
/// - `astc_data` must be valid for reads of 16 bytes
/// - `out_buffer` must be valid for writes of `block_width * block_height * 4` bytes
/// - The two regions must not overlap
#[unsafe(no_mangle)]
pub unsafe extern "C" fn astc_decompress_block_ffi(
    astc_data: *const u8,
    block_width: u8,
    block_height: u8,
    out_buffer: *mut u8,
) {
    // Failure is already encoded in the output.
    let _ = unsafe { gbd_astc_decompress_block(astc_data, block_width, block_height, out_buffer) };
}

/// Decode one BC7 block into 4x4 RGBA8 texels, reporting why decoding failed.
///
/// Writes the same bytes as [`bc7_decompress_block_ffi`].
///
/// # Returns
/// A [`GbdResult`]. [`GbdErrorCode::Bc7DecodeFailed`] means the output holds sentinel texels.
/// The null pointer codes mean nothing was written.
///
/// # Safety
/// Same requirements as [`bc7_decompress_block_ffi`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gbd_bc7_decompress_block(
    input_buffer: *const u8,
    out_buffer: *mut u8,
) -> GbdResult {
    // Validate pointers
    if input_buffer.is_null() {
        return GbdResult::from_error_code(GbdErrorCode::NullInputPointer);
    }
    if out_buffer.is_null() {
        return GbdResult::from_error_code(GbdErrorCode::NullOutputBufferPointer);
    }

    let block = unsafe { &*(input_buffer as *const [u8; BLOCK_SIZE]) };
    let output = unsafe { slice::from_raw_parts_mut(out_buffer, Decoded4x4Block::RGBA_LEN) };

    try_decode_bc7_block(block, output).into()
}

/// Decode one ASTC block into `block_width` x `block_height` RGBA8 texels, reporting why
/// decoding failed.
///
/// Writes the same bytes as [`astc_decompress_block_ffi`].
///
/// # Returns
/// A [`GbdResult`]. [`GbdErrorCode::UnsupportedFootprint`] and
/// [`GbdErrorCode::AstcDecodeFailed`] mean the output holds sentinel texels.
/// The null pointer codes mean nothing was written.
///
/// # Safety
/// Same requirements as [`astc_decompress_block_ffi`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gbd_astc_decompress_block(
    astc_data: *const u8,
    block_width: u8,
    block_height: u8,
    out_buffer: *mut u8,
) -> GbdResult {
    // Validate pointers
    if astc_data.is_null() {
        return GbdResult::from_error_code(GbdErrorCode::NullInputPointer);
    }
    if out_buffer.is_null() {
        return GbdResult::from_error_code(GbdErrorCode::NullOutputBufferPointer);
    }

    let output_len = block_width as usize * block_height as usize * BYTES_PER_TEXEL;
    let block = unsafe { &*(astc_data as *const [u8; BLOCK_SIZE]) };
    let output = unsafe { slice::from_raw_parts_mut(out_buffer, output_len) };

    try_decode_astc_block(block, block_width.into(), block_height.into(), output).into()
}
