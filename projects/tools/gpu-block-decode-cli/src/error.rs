use gpu_block_decode_api::BlockDecodeApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid hex block: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("Specify either --footprint or both --width and --height")]
    MissingFootprint,
    #[error("--footprint cannot be combined with --width or --height")]
    ConflictingFootprint,
    #[error(transparent)]
    Api(#[from] BlockDecodeApiError),
}
