//! Command-line entry point for chunkwise

use anyhow::Result;
use chunkwise_cli::commands::Commands;
use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  chunkwise split -i large_file.js -t lines -s 500 --overlap 25
  chunkwise split -i document.txt -t chars -s 4000
  chunkwise split -i code.py -t tokens -s 1500 -o ./chunks";

/// Chunk large files for AI processing
#[derive(Debug, Parser)]
#[command(name = "chunkwise", version, after_help = EXAMPLES)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    }
}
