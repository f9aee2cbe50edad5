use argh::FromArgs;
use gpu_block_decode::AstcFootprint;

#[derive(FromArgs, Debug)]
/// List the supported ASTC footprints
#[argh(subcommand, name = "footprints")]
pub struct FootprintsCmd {}

pub fn handle_footprints_command(_cmd: FootprintsCmd) {
    println!("Supported ASTC footprints:");
    for footprint in AstcFootprint::all_values() {
        println!(
            "  {:<6} {:>4} bytes decoded, {:.2} bits per texel",
            footprint.to_string(),
            footprint.output_len(),
            128.0 / footprint.texel_count() as f64
        );
    }
}
