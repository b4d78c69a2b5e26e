//! Processing driver for approval export consolidation.
//!
//! Reads every selected file as an independent asynchronous unit, all
//! issued concurrently, and combines the parsed batches into the
//! aggregate table. Combination is fail-fast: the first file that fails
//! to read or parse aborts the whole run and partial results are
//! discarded. File selection order is preserved end to end, so the
//! first-seen grouping order is reproducible for identical inputs.

#[cfg(test)]
pub mod tests;

use crate::aggregator::combine_batches;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{AggregateTable, ProcessingStats, ProjectBatch};
use crate::parser::parse_batch;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Driver combining concurrent per-file parsing with aggregation
#[derive(Debug, Default)]
pub struct BatchProcessor {
    config: Config,
}

impl BatchProcessor {
    /// Create a processor with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the processor configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full pipeline: parse all files, combine, report stats
    pub async fn process(&self, files: &[PathBuf]) -> Result<(AggregateTable, ProcessingStats)> {
        let start = Instant::now();

        let batches = self.parse_files(files).await?;
        let candidate_records = batches.iter().map(|b| b.records.len()).sum();
        let table = combine_batches(&batches);

        let stats = ProcessingStats {
            files_processed: files.len(),
            candidate_records,
            service_groups: table.group_count(),
            output_rows: table.len(),
            processing_time_ms: start.elapsed().as_millis(),
        };

        info!(
            "Processed {} files: {} records in {} groups ({} output rows)",
            stats.files_processed, stats.candidate_records, stats.service_groups, stats.output_rows
        );

        Ok((table, stats))
    }

    /// Parse every file concurrently, preserving selection order in the
    /// returned batches. Fails on the first file error.
    pub async fn parse_files(&self, files: &[PathBuf]) -> Result<Vec<ProjectBatch>> {
        let concurrency = self.config.max_concurrent_files.max(1);
        stream::iter(files.iter().map(|path| parse_file(path)))
            .buffered(concurrency)
            .try_collect()
            .await
    }
}

/// Read and parse one file as an independent unit of work
async fn parse_file(path: &Path) -> Result<ProjectBatch> {
    let label = path.display().to_string();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(&label, e))?;
    debug!("Read {} ({} bytes)", label, bytes.len());
    parse_batch(&bytes, &label)
}
