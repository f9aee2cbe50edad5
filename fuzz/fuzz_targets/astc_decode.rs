#![no_main]

// Asserts the ASTC dispatcher is total: for any block and any footprint it either
// decodes, or overwrites the whole region with sentinel texels. It never writes past
// the region and never panics.

use gpu_block_decode::sentinel::is_sentinel_filled;
use gpu_block_decode::{try_decode_astc_block, AstcFootprint, DecodeError};
use libfuzzer_sys::{arbitrary, fuzz_target};

const GUARD: u8 = 0xA5;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct AstcInput {
    pub bytes: [u8; 16],
    pub width: u8,
    pub height: u8,
}

fuzz_target!(|input: AstcInput| {
    let (width, height) = (u32::from(input.width), u32::from(input.height));
    let len = width as usize * height as usize * 4;

    let mut output = vec![GUARD; len + 16];
    let result = try_decode_astc_block(&input.bytes, width, height, &mut output);

    assert!(
        output[len..].iter().all(|&b| b == GUARD),
        "Wrote past the declared region"
    );

    match result {
        Ok(()) => assert!(AstcFootprint::resolve(width, height).is_some()),
        Err(DecodeError::UnsupportedFootprint { .. }) => {
            assert!(AstcFootprint::resolve(width, height).is_none());
            assert!(is_sentinel_filled(width, height, &output));
        }
        Err(_) => assert!(is_sentinel_filled(width, height, &output)),
    }

    // Same input, same bytes.
    let mut again = vec![GUARD; len + 16];
    let _ = try_decode_astc_block(&input.bytes, width, height, &mut again);
    assert_eq!(output, again);
});
