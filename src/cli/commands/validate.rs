//! Validate command implementation
//!
//! Checks that every input file reads and parses cleanly and reports
//! per-file statistics without combining anything.

use super::shared::setup_logging;
use crate::cli::args::ValidateArgs;
use crate::error::Result;
use crate::models::ProcessingStats;
use crate::processor::BatchProcessor;
use colored::*;
use std::time::Instant;
use tracing::info;

pub async fn run_validate(args: ValidateArgs) -> Result<ProcessingStats> {
    let start = Instant::now();

    setup_logging(args.get_log_level())?;
    info!("Validating {} export files", args.files.len());

    args.validate()?;

    let processor = BatchProcessor::new();
    let batches = processor.parse_files(&args.files).await?;

    let mut candidate_records = 0;
    for (path, batch) in args.files.iter().zip(&batches) {
        candidate_records += batch.records.len();
        println!(
            "  {} {} (project '{}', {} qualifying records)",
            "OK".bright_green().bold(),
            path.display(),
            batch.project,
            batch.records.len()
        );
    }

    println!(
        "\n{} {} files validated",
        "Done:".bright_green().bold(),
        args.files.len()
    );

    Ok(ProcessingStats {
        files_processed: args.files.len(),
        candidate_records,
        processing_time_ms: start.elapsed().as_millis(),
        ..Default::default()
    })
}
