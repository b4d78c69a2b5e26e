//! Rendering of the aggregate table for the presentation layer.
//!
//! Produces the [`RenderedTable`] the display and export paths consume:
//! fixed headers plus string cells, with quantities shown as two-decimal
//! comma-separated values. A zero quantity renders as an empty cell.

use crate::locale;
use crate::models::{AggregateTable, RenderedTable};

/// Render an aggregate table into its displayed form
pub fn render_table(table: &AggregateTable) -> RenderedTable {
    let mut rendered = RenderedTable::new();
    for row in &table.rows {
        rendered.rows.push(vec![
            row.service.clone(),
            row.description.clone(),
            row.service_type.clone(),
            render_quantity(row.approved_quantity),
            row.project.clone(),
        ]);
    }
    rendered
}

fn render_quantity(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        locale::format_decimal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutputRow;

    fn table_with(rows: Vec<OutputRow>) -> AggregateTable {
        AggregateTable { rows }
    }

    fn row(service: &str, qty: f64) -> OutputRow {
        OutputRow {
            service: service.to_string(),
            description: "Desc".to_string(),
            service_type: "Instalar".to_string(),
            approved_quantity: qty,
            project: "Proj1".to_string(),
        }
    }

    #[test]
    fn test_quantity_rendered_with_comma() {
        let rendered = render_table(&table_with(vec![row("SVC1", 10.5)]));
        assert_eq!(rendered.rows[0][3], "10,50");
    }

    #[test]
    fn test_zero_quantity_renders_empty() {
        let rendered = render_table(&table_with(vec![row("SVC1", 0.0)]));
        assert_eq!(rendered.rows[0][3], "");
    }

    #[test]
    fn test_cells_in_header_order() {
        let rendered = render_table(&table_with(vec![row("SVC1", 4.0)]));
        assert_eq!(
            rendered.rows[0],
            vec!["SVC1", "Desc", "Instalar", "4,00", "Proj1"]
        );
        assert_eq!(rendered.headers.len(), rendered.rows[0].len());
    }
}
