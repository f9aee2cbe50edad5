#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Decode and inspect single BC7 and ASTC blocks
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Bc7(commands::bc7::Bc7Cmd),
    Astc(commands::astc::AstcCmd),
    Footprints(commands::footprints::FootprintsCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Bc7(cmd) => {
            commands::bc7::handle_bc7_command(cmd)?;
        }
        Commands::Astc(cmd) => {
            commands::astc::handle_astc_command(cmd)?;
        }
        Commands::Footprints(cmd) => {
            commands::footprints::handle_footprints_command(cmd);
        }
    }

    Ok(())
}
