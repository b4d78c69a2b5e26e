//! CLI command implementations

pub mod process;
pub mod shared;
pub mod validate;

use crate::cli::args::{Args, Commands};
use crate::error::Result;
use crate::models::ProcessingStats;

/// Dispatch the parsed CLI arguments to the matching command
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args).await,
        Commands::Validate(validate_args) => validate::run_validate(validate_args).await,
    }
}
