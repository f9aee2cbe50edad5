use crate::error::CliError;
use gpu_block_decode::sentinel::is_sentinel_filled;
use gpu_block_decode_api::BlockDecodeApiError;

/// Parses a compressed block given as hex, e.g. `40000000000000000000000000000000`.
///
/// Whitespace and a leading `0x` are ignored. Length is validated by the decode API.
pub fn parse_block_hex(input: &str) -> Result<Vec<u8>, CliError> {
    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = digits.strip_prefix("0x").unwrap_or(&digits);
    Ok(hex::decode(digits)?)
}

/// Prints the outcome of a decode, then the texels one row per line.
///
/// Decode failures are not errors here. The sentinel output is printed like any other.
pub fn report_decode(
    result: Result<(), BlockDecodeApiError>,
    width: u32,
    height: u32,
    output: &[u8],
) -> Result<(), CliError> {
    match result {
        Ok(()) => println!("Status: decoded"),
        Err(BlockDecodeApiError::Decode(e)) => println!("Status: sentinel ({e})"),
        Err(e) => return Err(e.into()),
    }

    if is_sentinel_filled(width, height, output) {
        println!("Output is entirely sentinel texels (FF00FFFF)");
    }

    let stride = width as usize * 4;
    if stride == 0 {
        return Ok(());
    }

    for (y, row) in output.chunks_exact(stride).take(height as usize).enumerate() {
        let texels: Vec<String> = row.chunks_exact(4).map(hex::encode).collect();
        println!("{y:>2}: {}", texels.join(" "));
    }

    Ok(())
}
