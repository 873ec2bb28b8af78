//! CLI entry point for the battleship-solitaire fleet generator

use clap::Parser;
use fleetgen::io::cli::{Cli, RequestProcessor};

fn main() -> fleetgen::Result<()> {
    let cli = Cli::parse();
    let processor = RequestProcessor::new(cli);
    processor.process()
}
