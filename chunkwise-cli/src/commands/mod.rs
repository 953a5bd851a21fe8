//! CLI command implementations

use chunkwise_core::Strategy;
use clap::Subcommand;

pub mod generate_config;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a file into numbered chunk files
    Split(split::SplitArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available chunk types
    Strategies,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            ListCommands::Strategies => {
                println!("Available chunk types:");
                for strategy in Strategy::ALL {
                    println!("  {:<8}{}", strategy.as_str(), strategy.description());
                }
            }
        }
        Ok(())
    }
}
