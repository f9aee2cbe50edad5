//! C API error handling for block decode operations.

use crate::error::BlockDecodeApiError;
use core::ffi::c_char;
use gpu_block_decode::DecodeError;

/// C-compatible error codes for block decode operations.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GbdErrorCode {
    /// Operation succeeded
    Success = 0,
    /// Compressed block is not exactly 16 bytes
    InvalidBlockLength = 1,
    /// Output buffer too small for the decoded block
    OutputBufferTooSmall = 2,
    /// ASTC footprint is not supported; output holds sentinel texels
    UnsupportedFootprint = 3,
    /// BC7 block was rejected by the decoder; output holds sentinel texels
    Bc7DecodeFailed = 4,
    /// ASTC block was rejected by the decoder; output holds sentinel texels
    AstcDecodeFailed = 5,
    /// Null pointer provided for input parameter
    NullInputPointer = 6,
    /// Null pointer provided for output buffer parameter
    NullOutputBufferPointer = 7,
}

/// C-compatible Result type for block decode operations.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GbdResult {
    /// Error code (0 = success, non-zero = error)
    pub error_code: GbdErrorCode,
}

impl GbdResult {
    /// Create a success result
    pub const fn success() -> Self {
        Self {
            error_code: GbdErrorCode::Success,
        }
    }

    /// Create an error result from an error code
    pub const fn from_error_code(error_code: GbdErrorCode) -> Self {
        Self { error_code }
    }

    /// Check if the result is successful
    pub fn is_success(&self) -> bool {
        matches!(self.error_code, GbdErrorCode::Success)
    }
}

impl From<DecodeError> for GbdResult {
    fn from(error: DecodeError) -> Self {
        let error_code = match error {
            DecodeError::UnsupportedFootprint { .. } => GbdErrorCode::UnsupportedFootprint,
            DecodeError::Bc7(_) => GbdErrorCode::Bc7DecodeFailed,
            DecodeError::Astc { .. } => GbdErrorCode::AstcDecodeFailed,
        };
        Self::from_error_code(error_code)
    }
}

impl From<BlockDecodeApiError> for GbdResult {
    fn from(error: BlockDecodeApiError) -> Self {
        match error {
            BlockDecodeApiError::InvalidBlockLength(_) => {
                Self::from_error_code(GbdErrorCode::InvalidBlockLength)
            }
            BlockDecodeApiError::OutputBufferTooSmall { .. } => {
                Self::from_error_code(GbdErrorCode::OutputBufferTooSmall)
            }
            BlockDecodeApiError::Decode(e) => e.into(),
        }
    }
}

impl<T, E> From<Result<T, E>> for GbdResult
where
    E: Into<GbdResult>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(e) => e.into(),
        }
    }
}

/// Get a null-terminated string description of the error code.
///
/// The returned string is a static string literal that does not need to be freed.
///
/// # Safety
/// This function is safe to call with any error code value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gbd_error_message(error_code: GbdErrorCode) -> *const c_char {
    match error_code {
        GbdErrorCode::Success => c"Success".as_ptr(),
        GbdErrorCode::InvalidBlockLength => {
            c"Invalid block length: Compressed blocks must be exactly 16 bytes".as_ptr()
        }
        GbdErrorCode::OutputBufferTooSmall => {
            c"Output buffer too small for the decoded block".as_ptr()
        }
        GbdErrorCode::UnsupportedFootprint => c"Unsupported ASTC footprint".as_ptr(),
        GbdErrorCode::Bc7DecodeFailed => c"BC7 block could not be decoded".as_ptr(),
        GbdErrorCode::AstcDecodeFailed => c"ASTC block could not be decoded".as_ptr(),
        GbdErrorCode::NullInputPointer => c"Null pointer provided for input parameter".as_ptr(),
        GbdErrorCode::NullOutputBufferPointer => {
            c"Null pointer provided for output parameter".as_ptr()
        }
    }
}
