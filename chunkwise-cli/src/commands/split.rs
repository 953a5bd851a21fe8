//! Split command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{JsonFormatter, ReportFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::Result;
use chunkwise_core::{ChunkConfig, ChunkObserver, Chunker, Strategy, WrittenChunk};
use clap::{ArgAction, Args};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input file to chunk
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output directory for chunks [default: chunks]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Chunk type [default: lines]
    #[arg(short = 't', long = "type", value_enum)]
    pub chunk_type: Option<ChunkType>,

    /// Size of each chunk in lines, characters or tokens [default: 1000]
    #[arg(short, long, value_name = "N")]
    pub size: Option<usize>,

    /// Overlap between consecutive chunks [default: 50]
    #[arg(long, value_name = "N")]
    pub overlap: Option<usize>,

    /// Add a metadata header to each chunk [default: true]
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub metadata: Option<bool>,

    /// Prefix for output files (defaults to the input file name without extension)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Supported chunk types
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ChunkType {
    /// Fixed number of lines
    Lines,
    /// Fixed number of characters, cut at whitespace
    Chars,
    /// Fixed number of approximate tokens
    Tokens,
}

impl From<ChunkType> for Strategy {
    fn from(chunk_type: ChunkType) -> Self {
        match chunk_type {
            ChunkType::Lines => Strategy::Lines,
            ChunkType::Chars => Strategy::Chars,
            ChunkType::Tokens => Strategy::Tokens,
        }
    }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per chunk and a closing line
    Text,
    /// Run summary as JSON
    Json,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting chunking run");
        log::debug!("Arguments: {:?}", self);

        if !self.input.exists() {
            return Err(CliError::FileNotFound(self.input.display().to_string()).into());
        }

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let config = self.resolve_config(&file_config)?;

        let show_text = self.format == OutputFormat::Text && !self.quiet;
        if show_text {
            print_banner(&config);
        }

        let formatter: Option<Box<dyn ReportFormatter>> = match self.format {
            OutputFormat::Text if self.quiet => None,
            OutputFormat::Text => Some(Box::new(TextFormatter::stdout())),
            OutputFormat::Json => Some(Box::new(JsonFormatter::stdout())),
        };

        // Text reports already print a line per chunk; the spinner is for JSON runs.
        let mut progress = ProgressReporter::new(self.quiet || show_text);
        progress.start(&config.source().display().to_string());

        let mut observer = RunObserver::new(formatter, progress);
        let result = Chunker::new(config).process(&mut observer);
        observer.progress.finish();

        let summary = result?;
        observer.finish(&summary)
    }

    /// Merge command-line flags over the config file values
    pub fn resolve_config(&self, file: &CliConfig) -> Result<ChunkConfig> {
        let strategy = match self.chunk_type {
            Some(chunk_type) => chunk_type.into(),
            None => file.strategy()?,
        };

        let size = self.size.unwrap_or(file.chunking.size);
        let overlap = self.overlap.unwrap_or(file.chunking.overlap);
        if self.overlap.is_none() && size > 0 && overlap >= size {
            return Err(CliError::ConfigError(format!(
                "overlap ({overlap}) must be smaller than chunk size ({size}); \
                 pass a smaller --overlap"
            ))
            .into());
        }

        let mut builder = ChunkConfig::builder(&self.input)
            .output_dir(
                self.output
                    .clone()
                    .unwrap_or_else(|| file.output.directory.clone()),
            )
            .strategy(strategy)
            .chunk_size(size)
            .overlap(overlap)
            .add_metadata(self.metadata.unwrap_or(file.chunking.metadata));

        if let Some(prefix) = self.prefix.as_ref().or(file.output.prefix.as_ref()) {
            builder = builder.prefix(prefix.clone());
        }

        Ok(builder.build()?)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            if let Err(err) = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init()
            {
                log::debug!("keeping existing logger: {err}");
            }
        }

        Ok(())
    }
}

fn print_banner(config: &ChunkConfig) {
    println!("Chunking file: {}", config.source().display());
    println!("Chunk type: {}", config.strategy());
    println!("Chunk size: {}", config.chunk_size());
    println!("Overlap: {}", config.overlap());
    println!("Output directory: {}", config.output_dir().display());
    println!();
}

/// Forwards chunk notices to the report formatter and the spinner
struct RunObserver {
    formatter: Option<Box<dyn ReportFormatter>>,
    progress: ProgressReporter,
    error: Option<anyhow::Error>,
}

impl RunObserver {
    fn new(formatter: Option<Box<dyn ReportFormatter>>, progress: ProgressReporter) -> Self {
        Self {
            formatter,
            progress,
            error: None,
        }
    }

    fn finish(mut self, summary: &chunkwise_core::ChunkSummary) -> Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        match self.formatter.as_mut() {
            Some(formatter) => formatter.finish(summary),
            None => Ok(()),
        }
    }
}

impl ChunkObserver for RunObserver {
    fn chunk_written(&mut self, chunk: &WrittenChunk) {
        self.progress.chunk_completed(&chunk.file_name);

        if self.error.is_some() {
            return;
        }
        if let Some(formatter) = self.formatter.as_mut() {
            if let Err(err) = self.progress.suspend(|| formatter.chunk_written(chunk)) {
                self.error = Some(err);
            }
        }
    }
}
