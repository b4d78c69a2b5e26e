//! Command-line argument definitions for the approvals processor
//!
//! Defines the CLI interface using the clap derive API.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the approvals processor
///
/// Consolidates service approval exports from legacy `;`-delimited CSV
/// files into a single per-service subtotalled table.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "approvals-processor",
    version,
    about = "Consolidate service approval CSV exports into a subtotalled table",
    long_about = "Reads one or more legacy service approval export files, keeps the rows \
                  approved for installation, groups them by service code across all files, \
                  and prints the combined table with one subtotal row per service. The \
                  result can be re-exported as Excel-compatible delimited text."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the approvals processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Combine export files into the subtotalled table (main command)
    Process(ProcessArgs),
    /// Check that export files parse cleanly and report per-file statistics
    Validate(ValidateArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input export files, in selection order
    ///
    /// Order matters: service groups appear in the combined table in the
    /// order their code is first seen while scanning the files as given.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Write the export artifact to this path
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the export artifact to FILE"
    )]
    pub output: Option<PathBuf>,

    /// Write the export artifact with its default filename (data.csv)
    /// into the current directory
    #[arg(long = "export", conflicts_with = "output")]
    pub export: bool,

    /// Maximum number of files read and parsed concurrently
    #[arg(
        short = 'j',
        long = "max-concurrent",
        value_name = "COUNT",
        default_value_t = 8,
        help = "Maximum number of files processed concurrently"
    )]
    pub max_concurrent: usize,

    /// Output format for run statistics
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Input export files to check
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        for file in &self.files {
            if !file.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    file.display()
                )));
            }
            if !file.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    file.display()
                )));
            }
        }

        if self.max_concurrent == 0 {
            return Err(Error::configuration(
                "Maximum concurrency must be greater than 0",
            ));
        }

        if self.max_concurrent > 100 {
            return Err(Error::configuration(
                "Maximum concurrency cannot exceed 100",
            ));
        }

        Ok(())
    }

    /// Resolve where the export artifact should be written, if anywhere
    pub fn export_path(&self, config: &Config) -> Option<PathBuf> {
        if let Some(path) = &self.output {
            Some(path.clone())
        } else if self.export {
            Some(PathBuf::from(&config.export_filename))
        } else {
            None
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        for file in &self.files {
            if !file.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    file.display()
                )));
            }
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
