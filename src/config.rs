//! Configuration for processing runs.

use crate::constants::EXPORT_FILENAME;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Global configuration for approval export processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum input files read and parsed concurrently
    pub max_concurrent_files: usize,

    /// Filename used for the export artifact when no explicit path is given
    pub export_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_files: 8,
            export_filename: EXPORT_FILENAME.to_string(),
        }
    }
}

impl Config {
    /// Set the maximum number of concurrently processed files
    pub fn with_max_concurrent_files(mut self, max_files: usize) -> Self {
        self.max_concurrent_files = max_files;
        self
    }

    /// Set the default export artifact filename
    pub fn with_export_filename(mut self, filename: impl Into<String>) -> Self {
        self.export_filename = filename.into();
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent_files == 0 {
            return Err(Error::configuration(
                "max_concurrent_files must be greater than 0",
            ));
        }
        if self.export_filename.is_empty() {
            return Err(Error::configuration("export_filename cannot be empty"));
        }
        Ok(())
    }
}
