#![no_main]

// Checks the status-less and status-returning C exports write identical bytes.

use gpu_block_decode_api::c_api::{
    astc_decompress_block_ffi, bc7_decompress_block_ffi, gbd_astc_decompress_block,
    gbd_bc7_decompress_block,
};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct FfiInput {
    pub bytes: [u8; 16],
    pub width: u8,
    pub height: u8,
}

fuzz_target!(|input: FfiInput| {
    let mut plain = [0u8; 64];
    let mut with_status = [0xFFu8; 64];
    unsafe {
        bc7_decompress_block_ffi(input.bytes.as_ptr(), plain.as_mut_ptr());
        gbd_bc7_decompress_block(input.bytes.as_ptr(), with_status.as_mut_ptr());
    }
    assert_eq!(plain, with_status);

    let len = input.width as usize * input.height as usize * 4;
    let mut plain = vec![0u8; len];
    let mut with_status = vec![0xFFu8; len];
    unsafe {
        astc_decompress_block_ffi(
            input.bytes.as_ptr(),
            input.width,
            input.height,
            plain.as_mut_ptr(),
        );
        gbd_astc_decompress_block(
            input.bytes.as_ptr(),
            input.width,
            input.height,
            with_status.as_mut_ptr(),
        );
    }
    assert_eq!(plain, with_status);
});
