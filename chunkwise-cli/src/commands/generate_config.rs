//! Generate config command implementation

use super::split::ChunkType;
use anyhow::{Context, Result};
use chunkwise_core::{defaults, Strategy};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Chunk type to pre-select in the template
    #[arg(short = 't', long = "type", value_enum, default_value = "lines")]
    pub chunk_type: ChunkType,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for chunking:");
        println!(
            "   chunkwise split -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let strategy = Strategy::from(self.chunk_type);
        format!(
            r#"# chunkwise configuration
#
# Command-line flags take precedence over the values below.

[chunking]
# Chunk type: "lines", "chars" or "tokens"
type = "{}"

# Size of each chunk, counted in lines, characters or tokens
size = {}

# Amount of each chunk repeated at the start of the next one.
# Must be smaller than size.
overlap = {}

# Write a header (chunk number, source, range) at the top of each file
metadata = {}

[output]
# Directory receiving the chunk files (created if missing)
directory = "{}"

# File name prefix; defaults to the input file name without extension
# prefix = "part"
"#,
            strategy.as_str(),
            defaults::CHUNK_SIZE,
            defaults::OVERLAP_SIZE,
            defaults::ADD_METADATA,
            defaults::OUTPUT_DIR,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("chunkwise.toml"),
            chunk_type: ChunkType::Chars,
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("chunkwise.toml"));
        assert!(debug_str.contains("Chars"));
    }

    #[test]
    fn test_generate_template() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("chunkwise.toml"),
            chunk_type: ChunkType::Tokens,
        };

        let template = args.generate_template();
        assert!(template.contains("type = \"tokens\""));
        assert!(template.contains("[chunking]"));
        assert!(template.contains("[output]"));
    }

    #[test]
    fn test_generated_template_loads() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("chunkwise.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            chunk_type: ChunkType::Chars,
        };

        assert!(args.execute().is_ok());

        let config = CliConfig::load(&output_path).unwrap();
        assert_eq!(config.strategy().unwrap(), Strategy::Chars);
        assert_eq!(config.chunking.size, 1000);
        assert_eq!(config.chunking.overlap, 50);
        assert!(config.chunking.metadata);
        assert!(config.output.prefix.is_none());
    }

    #[test]
    fn test_execute_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let args = GenerateConfigArgs {
            output: temp_dir.path().join("missing").join("chunkwise.toml"),
            chunk_type: ChunkType::Lines,
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
