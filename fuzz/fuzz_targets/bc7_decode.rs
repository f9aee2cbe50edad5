#![no_main]

// Compares the BC7 dispatcher against bcdec_rs directly.
// Reserved-mode blocks must come out as sentinel, everything else byte-identical to bcdec.

use gpu_block_decode::sentinel::is_sentinel_filled;
use gpu_block_decode::{try_decode_bc7_block, BlockDecodeError, DecodeError};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc7Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc7Block| {
    let block = &block.bytes;

    // Pre-fill so a partial write would be visible.
    let mut ours = [0x5Au8; 64];
    let result = try_decode_bc7_block(block, &mut ours);

    if block[0] == 0 {
        assert_eq!(
            result,
            Err(DecodeError::Bc7(BlockDecodeError::ReservedBc7Mode))
        );
        assert!(is_sentinel_filled(4, 4, &ours), "Reserved mode must be sentinel");
        return;
    }

    let mut reference = [0u8; 64];
    bcdec_rs::bc7(block, &mut reference, 16);

    assert_eq!(result, Ok(()));
    assert_eq!(ours, reference, "Decoded blocks don't match");
});
