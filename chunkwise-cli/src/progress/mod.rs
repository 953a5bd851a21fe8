//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner showing how many chunk files have been written
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Start the spinner for a run over `source`
    pub fn start(&mut self, source: &str) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner} [{elapsed_precise}] {pos} chunks {msg}")
        {
            pb.set_style(style);
        }
        pb.set_message(format!("from {source}"));
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record a completed chunk file
    pub fn chunk_completed(&self, file_name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("last: {file_name}"));
            pb.inc(1);
        }
    }

    /// Run `f` with the spinner hidden so regular output is not garbled
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        match &self.progress_bar {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }

    /// Whether the spinner is active
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}
