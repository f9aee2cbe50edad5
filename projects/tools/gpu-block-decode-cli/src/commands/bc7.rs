use crate::error::CliError;
use crate::util::{parse_block_hex, report_decode};
use argh::FromArgs;
use gpu_block_decode_api::{decode_bc7_slice, required_output_len_bc7};

#[derive(FromArgs, Debug)]
/// Decode a single BC7 block and print its 4x4 texels
#[argh(subcommand, name = "bc7")]
pub struct Bc7Cmd {
    /// compressed block as 32 hex digits
    #[argh(option)]
    pub block: String,
}

pub fn handle_bc7_command(cmd: Bc7Cmd) -> Result<(), CliError> {
    let block = parse_block_hex(&cmd.block)?;
    let mut output = vec![0u8; required_output_len_bc7()];

    let result = decode_bc7_slice(&block, &mut output);
    report_decode(result, 4, 4, &output)
}
