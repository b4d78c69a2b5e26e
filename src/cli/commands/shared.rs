//! Shared components for CLI commands
//!
//! Logging setup and table display used across command implementations.

use crate::constants::SERVICE_TYPE_COL;
use crate::error::Result;
use crate::models::RenderedTable;
use colored::*;

/// Set up structured logging on stderr; stdout stays reserved for the
/// rendered table and machine-readable output
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("approvals_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();

    Ok(())
}

/// Print the rendered table to stdout with aligned columns. Subtotal
/// rows are shown bold.
pub fn display_table(table: &RenderedTable) {
    let widths = column_widths(table);

    let header: Vec<String> = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(cell, &width)| format!("{:<width$}", cell))
        .collect();
    println!("{}", header.join("  ").bright_cyan().bold());

    for row in &table.rows {
        let is_subtotal = row
            .get(SERVICE_TYPE_COL)
            .is_some_and(|cell| crate::constants::is_subtotal_marker(cell));

        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell))
            .collect();
        let line = line.join("  ");

        if is_subtotal {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }
}

fn column_widths(table: &RenderedTable) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (col, cell) in row.iter().enumerate() {
            if col < widths.len() {
                widths[col] = widths[col].max(cell.chars().count());
            }
        }
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_cover_headers_and_cells() {
        let mut table = RenderedTable::new();
        table.rows.push(vec![
            "a-very-long-service-code".to_string(),
            "d".to_string(),
            "t".to_string(),
            "1,00".to_string(),
            "p".to_string(),
        ]);

        let widths = column_widths(&table);
        assert_eq!(widths[0], "a-very-long-service-code".len());
        // header longer than any cell wins
        assert_eq!(widths[1], "DESCRIPTION".len());
    }
}
