//! TileStitch CLI - stitch rendered tile grids into single images.

mod cli;
mod error;

use clap::Parser;
use tracing::error;

use cli::Args;

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tilestitch::logging::init(default_filter);

    match cli::run(args) {
        Ok(report) => {
            println!(
                "Stitched {} tiles ({}x{} grid) into {}",
                report.tile_count,
                report.extent.width + 1,
                report.extent.height + 1,
                report.output_path.display()
            );
        }
        Err(e) => {
            error!(error = %e, "Stitch failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
