//! Approvals Processor Library
//!
//! A Rust library for consolidating service approval exports from legacy
//! `;`-delimited CSV files into a single per-service subtotalled table.
//!
//! This library provides tools for:
//! - Parsing approval export files with fixed header/metadata row handling
//! - Filtering approval records by installation status
//! - Grouping records by service code across files in first-seen order
//! - Injecting per-group subtotal rows into the combined table
//! - Re-exporting the rendered table as Excel-compatible delimited text
//!   with comma-decimal formatting and a UTF-8 byte-order mark

pub mod aggregator;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod locale;
pub mod models;
pub mod parser;
pub mod processor;
pub mod render;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use models::{AggregateTable, CandidateRecord, OutputRow, ProjectBatch, RenderedTable};
pub use processor::BatchProcessor;
