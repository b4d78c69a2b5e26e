//! Core data structures for approval export processing.
//!
//! Defines the parsed record types, the combined output table, the
//! rendered table exchanged with the presentation layer, and processing
//! statistics.

use crate::constants::{SUBTOTAL_SENTINEL, TABLE_HEADERS, is_subtotal_marker};
use serde::{Deserialize, Serialize};

/// One approval record that survived status filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Service code used as the grouping key
    pub service: String,
    pub description: String,
    /// Raw, untrimmed service type field as read from the file
    pub service_type: String,
    pub approved_quantity: f64,
    /// Project label of the source file
    pub project: String,
}

/// The parse result of one input file
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectBatch {
    pub project: String,
    pub records: Vec<CandidateRecord>,
}

/// A row of the combined table: either a detail row copied from a
/// candidate record, or a synthesized subtotal row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    pub service: String,
    pub description: String,
    pub service_type: String,
    pub approved_quantity: f64,
    pub project: String,
}

impl OutputRow {
    /// Build a detail row from a candidate record
    pub fn detail(record: &CandidateRecord) -> Self {
        Self {
            service: record.service.clone(),
            description: record.description.clone(),
            service_type: record.service_type.clone(),
            approved_quantity: record.approved_quantity,
            project: record.project.clone(),
        }
    }

    /// Build a subtotal row summarizing a group. Service and description
    /// are copied from the group's last detail record; the project is
    /// cleared.
    pub fn subtotal(last_record: &CandidateRecord, sum: f64) -> Self {
        Self {
            service: last_record.service.clone(),
            description: last_record.description.clone(),
            service_type: SUBTOTAL_SENTINEL.to_string(),
            approved_quantity: sum,
            project: String::new(),
        }
    }

    pub fn is_subtotal(&self) -> bool {
        is_subtotal_marker(&self.service_type)
    }
}

/// The full ordered sequence of output rows produced by one aggregation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateTable {
    pub rows: Vec<OutputRow>,
}

impl AggregateTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of subtotal rows, which equals the number of service groups
    pub fn group_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_subtotal()).count()
    }
}

/// The tabular representation handed to and consumed from the
/// presentation layer: fixed headers plus already-rendered string cells
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RenderedTable {
    /// Create an empty rendered table carrying the fixed header list
    pub fn new() -> Self {
        Self {
            headers: TABLE_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }
}

impl Default for RenderedTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics for one processing run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessingStats {
    /// Number of input files parsed
    pub files_processed: usize,
    /// Candidate records that survived filtering, across all files
    pub candidate_records: usize,
    /// Distinct service groups in the combined table
    pub service_groups: usize,
    /// Total rows in the combined table, subtotals included
    pub output_rows: usize,
    pub processing_time_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(service: &str, qty: f64) -> CandidateRecord {
        CandidateRecord {
            service: service.to_string(),
            description: "desc".to_string(),
            service_type: "Instalar".to_string(),
            approved_quantity: qty,
            project: "Proj1".to_string(),
        }
    }

    #[test]
    fn test_detail_row_copies_all_fields() {
        let rec = record("SVC1", 10.5);
        let row = OutputRow::detail(&rec);
        assert_eq!(row.service, "SVC1");
        assert_eq!(row.service_type, "Instalar");
        assert_eq!(row.approved_quantity, 10.5);
        assert_eq!(row.project, "Proj1");
        assert!(!row.is_subtotal());
    }

    #[test]
    fn test_subtotal_row_clears_project() {
        let rec = record("SVC1", 10.5);
        let row = OutputRow::subtotal(&rec, 14.5);
        assert_eq!(row.service, "SVC1");
        assert_eq!(row.description, "desc");
        assert_eq!(row.service_type, "SUBTOTAL");
        assert_eq!(row.approved_quantity, 14.5);
        assert_eq!(row.project, "");
        assert!(row.is_subtotal());
    }

    #[test]
    fn test_rendered_table_headers() {
        let table = RenderedTable::new();
        assert_eq!(
            table.headers,
            vec![
                "SERVICE",
                "DESCRIPTION",
                "SERVICE_TYPE",
                "APPROVED_QTY",
                "PROJECT"
            ]
        );
        assert!(table.rows.is_empty());
    }
}
