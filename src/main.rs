use anyhow::Result;
use clap::Parser;
use solvendo::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
