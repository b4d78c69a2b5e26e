//! Error handling for approval export processing.
//!
//! Provides error types with context for file reading, delimited-text
//! parsing, and structural validation failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error reading '{file}': {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing error in file '{file}': {source}")]
    CsvParsing {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed input in file '{file}': {reason}")]
    MalformedInput { file: String, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error tagged with the file it occurred on
    pub fn io(file: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            file: file.into(),
            source,
        }
    }

    /// Create a CSV parsing error tagged with the file it occurred on
    pub fn csv_parsing(file: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvParsing {
            file: file.into(),
            source,
        }
    }

    /// Create a malformed input error
    pub fn malformed_input(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            file: file.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
