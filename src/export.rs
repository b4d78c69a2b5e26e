//! Export serialization of the rendered table.
//!
//! Produces the delimited-text artifact legacy spreadsheet consumers
//! expect: `;`-joined lines, text cells double-quoted with internal
//! quotes doubled, the quantity column re-parsed from its displayed
//! comma-decimal form and re-emitted unquoted, and the document prefixed
//! with a UTF-8 byte-order mark. The declared media type
//! ([`crate::constants::EXPORT_MIME_TYPE`]) advertises a Windows-legacy
//! charset even though the content is UTF-8 with BOM; consumers depend
//! on that mismatch.

use crate::constants::{QUANTITY_COL, UTF8_BOM};
use crate::error::{Error, Result};
use crate::locale;
use crate::models::RenderedTable;
use std::path::Path;
use tracing::info;

/// Serialize the rendered table into the export document bytes
pub fn export_rendered(table: &RenderedTable) -> Vec<u8> {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    lines.push(table.headers.join(";"));

    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                if col == QUANTITY_COL {
                    export_quantity(cell)
                } else {
                    quote(cell)
                }
            })
            .collect();
        lines.push(cells.join(";"));
    }

    let mut document = String::from(UTF8_BOM);
    document.push_str(&lines.join("\n"));
    document.into_bytes()
}

/// Serialize and write the export artifact to `path`
pub fn write_export(table: &RenderedTable, path: &Path) -> Result<()> {
    let bytes = export_rendered(table);
    std::fs::write(path, &bytes).map_err(|e| Error::io(path.display().to_string(), e))?;
    info!("Wrote export artifact: {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Re-parse a displayed quantity cell and re-format it to exactly two
/// comma-separated decimal places. Unparseable text exports as empty.
fn export_quantity(cell: &str) -> String {
    match locale::parse_decimal(cell) {
        Some(value) => locale::format_decimal(value),
        None => String::new(),
    }
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
