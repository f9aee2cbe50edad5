use crate::error::CliError;
use crate::util::{parse_block_hex, report_decode};
use argh::FromArgs;
use gpu_block_decode::AstcFootprint;
use gpu_block_decode_api::{decode_astc_slice, required_output_len_astc};

#[derive(FromArgs, Debug)]
/// Decode a single ASTC block and print its texels
#[argh(subcommand, name = "astc")]
pub struct AstcCmd {
    /// compressed block as 32 hex digits
    #[argh(option)]
    pub block: String,

    /// supported footprint as WxH, e.g. 6x6
    #[argh(option)]
    pub footprint: Option<AstcFootprint>,

    /// footprint width in texels (0-255), accepts unsupported sizes
    #[argh(option)]
    pub width: Option<u8>,

    /// footprint height in texels (0-255), accepts unsupported sizes
    #[argh(option)]
    pub height: Option<u8>,
}

impl AstcCmd {
    /// Texel grid requested either by `--footprint` or by `--width` and `--height`.
    pub fn dimensions(&self) -> Result<(u32, u32), CliError> {
        match (self.footprint, self.width, self.height) {
            (Some(footprint), None, None) => Ok(footprint.dimensions()),
            (None, Some(width), Some(height)) => Ok((width.into(), height.into())),
            (Some(_), _, _) => Err(CliError::ConflictingFootprint),
            _ => Err(CliError::MissingFootprint),
        }
    }
}

pub fn handle_astc_command(cmd: AstcCmd) -> Result<(), CliError> {
    let (width, height) = cmd.dimensions()?;
    let block = parse_block_hex(&cmd.block)?;
    let mut output = vec![0u8; required_output_len_astc(width, height)];

    let result = decode_astc_slice(&block, width, height, &mut output);
    report_decode(result, width, height, &output)
}
