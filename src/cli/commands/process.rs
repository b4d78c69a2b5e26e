//! Process command implementation
//!
//! Runs the full consolidation pipeline: concurrent per-file parsing,
//! aggregation, table display, and optional export of the artifact.

use super::shared::{display_table, setup_logging};
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::export;
use crate::models::ProcessingStats;
use crate::processor::BatchProcessor;
use crate::render::render_table;
use colored::*;
use tracing::{debug, info};

pub async fn run_process(args: ProcessArgs) -> Result<ProcessingStats> {
    setup_logging(args.get_log_level())?;

    info!("Starting approval export consolidation");
    debug!("Process arguments: {:?}", args);

    args.validate()?;

    let config = Config::default().with_max_concurrent_files(args.max_concurrent);
    config.validate()?;

    let processor = BatchProcessor::new().with_config(config.clone());
    let (table, stats) = processor.process(&args.files).await?;
    let rendered = render_table(&table);

    match args.output_format {
        OutputFormat::Human => {
            display_table(&rendered);
            println!();
            println!("{}", "Processing Summary".bright_green().bold());
            println!(
                "  {} {}",
                "Files processed:".bright_cyan(),
                stats.files_processed.to_string().bright_white()
            );
            println!(
                "  {} {}",
                "Candidate records:".bright_cyan(),
                stats.candidate_records.to_string().bright_white()
            );
            println!(
                "  {} {}",
                "Service groups:".bright_cyan(),
                stats.service_groups.to_string().bright_white()
            );
            println!(
                "  {} {}ms",
                "Time elapsed:".bright_cyan(),
                stats.processing_time_ms.to_string().bright_white()
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stats).map_err(|e| {
                Error::configuration(format!("Failed to serialize statistics: {}", e))
            })?;
            println!("{}", json);
        }
    }

    if let Some(path) = args.export_path(&config) {
        export::write_export(&rendered, &path)?;
        if matches!(args.output_format, OutputFormat::Human) {
            println!(
                "  {} {}",
                "Export written:".bright_cyan(),
                path.display().to_string().bright_white()
            );
        }
    }

    Ok(stats)
}
