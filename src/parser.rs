//! Approval export file parsing.
//!
//! Converts one raw export file into a [`ProjectBatch`]: the project
//! label read from a fixed grid position plus the ordered records that
//! survive the installation-status filter. The legacy producers emit
//! windows-1252 encoded, `;`-delimited text with four metadata rows
//! before the data region.

use crate::constants::{
    DESCRIPTION_COL, FIELD_DELIMITER, INSTALL_STATUS, METADATA_ROW_COUNT, MIN_DATA_COLUMNS,
    PROJECT_COL, PROJECT_ROW, QUANTITY_COL, SERVICE_COL, SERVICE_TYPE_COL,
};
use crate::error::{Error, Result};
use crate::locale;
use crate::models::{CandidateRecord, ProjectBatch};
use csv::{ReaderBuilder, StringRecord};
use encoding_rs::WINDOWS_1252;
use tracing::debug;

/// Parse one raw export file into a project batch.
///
/// `source` labels the file in errors and logs; it carries no semantic
/// weight.
pub fn parse_batch(bytes: &[u8], source: &str) -> Result<ProjectBatch> {
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    let rows = read_grid(text.as_bytes(), source)?;

    if rows.len() <= PROJECT_ROW {
        return Err(Error::malformed_input(
            source,
            format!("expected at least {} rows, found {}", PROJECT_ROW + 1, rows.len()),
        ));
    }

    let project = rows[PROJECT_ROW]
        .get(PROJECT_COL)
        .ok_or_else(|| Error::malformed_input(source, "project label cell is missing"))?
        .to_string();

    let mut records = Vec::new();
    for (offset, row) in rows.iter().enumerate().skip(METADATA_ROW_COUNT) {
        let row_number = offset + 1;

        let status = row.get(SERVICE_TYPE_COL).ok_or_else(|| {
            Error::malformed_input(
                source,
                format!(
                    "row {} has {} columns, status column {} is unreadable",
                    row_number,
                    row.len(),
                    SERVICE_TYPE_COL + 1
                ),
            )
        })?;

        if !status.trim().eq_ignore_ascii_case(INSTALL_STATUS) {
            continue;
        }

        if row.len() < MIN_DATA_COLUMNS {
            return Err(Error::malformed_input(
                source,
                format!(
                    "row {} has {} columns, expected at least {}",
                    row_number,
                    row.len(),
                    MIN_DATA_COLUMNS
                ),
            ));
        }

        records.push(build_record(row, &project));
    }

    debug!(
        "Parsed {}: project '{}', {} candidate records from {} rows",
        source,
        project,
        records.len(),
        rows.len()
    );

    Ok(ProjectBatch { project, records })
}

/// Read the full delimited grid. Blank lines are skipped by the reader;
/// rows may carry differing column counts.
fn read_grid(bytes: &[u8], source: &str) -> Result<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record.map_err(|e| Error::csv_parsing(source, e))?);
    }
    Ok(rows)
}

/// Build a candidate record from a retained data row. The quantity
/// silently defaults to 0 when unparseable; sparse source data is
/// expected.
fn build_record(row: &StringRecord, project: &str) -> CandidateRecord {
    let field = |col: usize| row.get(col).unwrap_or_default().to_string();
    CandidateRecord {
        service: field(SERVICE_COL),
        description: field(DESCRIPTION_COL),
        service_type: field(SERVICE_TYPE_COL),
        approved_quantity: row
            .get(QUANTITY_COL)
            .and_then(locale::parse_decimal)
            .unwrap_or(0.0),
        project: project.to_string(),
    }
}
