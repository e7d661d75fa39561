//! CLI entry point for the camouflage pattern generator

use camogen::io::cli::{Cli, RenderProcessor};
use clap::Parser;

fn main() -> camogen::Result<()> {
    let cli = Cli::parse();
    camogen::io::logging::init(cli.quiet);
    let mut processor = RenderProcessor::new(cli);
    processor.process()
}
