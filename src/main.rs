//! CLI entry point for wave function collapse tile generation

use clap::Parser;
use tilecollapse::io::cli::{Cli, FileProcessor};

fn main() -> tilecollapse::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
