//! Combination of parsed batches into the subtotalled output table.
//!
//! Groups candidate records by service code across all batches, keys
//! ordered by first appearance over the flattened traversal, and emits
//! detail rows followed by exactly one subtotal row per group. Pure and
//! deterministic: identical input order yields identical output.

use crate::models::{AggregateTable, CandidateRecord, OutputRow, ProjectBatch};
use indexmap::IndexMap;
use tracing::debug;

/// Combine batches, in selection order, into the aggregate table
pub fn combine_batches(batches: &[ProjectBatch]) -> AggregateTable {
    let mut groups: IndexMap<&str, Vec<&CandidateRecord>> = IndexMap::new();
    for batch in batches {
        for record in &batch.records {
            groups.entry(record.service.as_str()).or_default().push(record);
        }
    }

    let mut rows = Vec::new();
    for records in groups.values() {
        let mut subtotal = 0.0_f64;
        for record in records {
            rows.push(OutputRow::detail(record));
            subtotal += record.approved_quantity;
        }
        if let Some(last) = records.last() {
            rows.push(OutputRow::subtotal(last, subtotal));
        }
    }

    debug!(
        "Combined {} batches into {} groups, {} rows",
        batches.len(),
        groups.len(),
        rows.len()
    );

    AggregateTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(service: &str, description: &str, qty: f64, project: &str) -> CandidateRecord {
        CandidateRecord {
            service: service.to_string(),
            description: description.to_string(),
            service_type: "Instalar".to_string(),
            approved_quantity: qty,
            project: project.to_string(),
        }
    }

    fn batch(project: &str, records: Vec<CandidateRecord>) -> ProjectBatch {
        ProjectBatch {
            project: project.to_string(),
            records,
        }
    }

    #[test]
    fn test_row_count_is_details_plus_groups() {
        let batches = vec![batch(
            "Proj1",
            vec![
                record("SVC1", "a", 1.0, "Proj1"),
                record("SVC2", "b", 2.0, "Proj1"),
                record("SVC1", "c", 3.0, "Proj1"),
            ],
        )];
        let table = combine_batches(&batches);
        // 3 detail rows + 2 subtotal rows
        assert_eq!(table.len(), 5);
        assert_eq!(table.group_count(), 2);
    }

    #[test]
    fn test_subtotal_follows_last_detail_of_group() {
        let batches = vec![batch(
            "Proj1",
            vec![
                record("SVC1", "Desc A", 10.5, "Proj1"),
                record("SVC1", "Desc B", 4.0, "Proj1"),
            ],
        )];
        let table = combine_batches(&batches);
        assert_eq!(table.len(), 3);

        let subtotal = &table.rows[2];
        assert!(subtotal.is_subtotal());
        assert_eq!(subtotal.approved_quantity, 14.5);
        // service and description come from the group's last detail row
        assert_eq!(subtotal.service, "SVC1");
        assert_eq!(subtotal.description, "Desc B");
        assert_eq!(subtotal.project, "");
    }

    #[test]
    fn test_filtered_scenario_emits_no_empty_groups() {
        // SVC2's only row was filtered out upstream, so it contributes
        // nothing: no detail rows, no subtotal
        let batches = vec![batch(
            "Proj1",
            vec![
                record("SVC1", "Desc A", 10.5, "Proj1"),
                record("SVC1", "Desc B", 4.0, "Proj1"),
            ],
        )];
        let table = combine_batches(&batches);
        assert!(table.rows.iter().all(|r| r.service == "SVC1"));
        assert_eq!(table.group_count(), 1);
    }

    #[test]
    fn test_first_seen_order_across_batches() {
        let batches = vec![
            batch(
                "Proj1",
                vec![record("SVC2", "a", 1.0, "Proj1"), record("SVC1", "b", 2.0, "Proj1")],
            ),
            batch(
                "Proj2",
                vec![record("SVC3", "c", 3.0, "Proj2"), record("SVC1", "d", 4.0, "Proj2")],
            ),
        ];
        let table = combine_batches(&batches);

        let group_order: Vec<&str> = table
            .rows
            .iter()
            .filter(|r| r.is_subtotal())
            .map(|r| r.service.as_str())
            .collect();
        assert_eq!(group_order, vec!["SVC2", "SVC1", "SVC3"]);

        // SVC1's group carries records from both projects in arrival order
        let svc1_projects: Vec<&str> = table
            .rows
            .iter()
            .filter(|r| r.service == "SVC1" && !r.is_subtotal())
            .map(|r| r.project.as_str())
            .collect();
        assert_eq!(svc1_projects, vec!["Proj1", "Proj2"]);
    }

    #[test]
    fn test_reordering_batches_changes_first_seen_order() {
        let a = batch("Proj1", vec![record("SVC1", "a", 1.0, "Proj1")]);
        let b = batch("Proj2", vec![record("SVC2", "b", 2.0, "Proj2")]);

        let forward = combine_batches(&[a.clone(), b.clone()]);
        let reversed = combine_batches(&[b, a]);

        assert_eq!(forward.rows[0].service, "SVC1");
        assert_eq!(reversed.rows[0].service, "SVC2");
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let batches = vec![
            batch(
                "Proj1",
                vec![record("SVC2", "a", 1.5, "Proj1"), record("SVC1", "b", 2.0, "Proj1")],
            ),
            batch("Proj2", vec![record("SVC2", "c", 0.5, "Proj2")]),
        ];
        assert_eq!(combine_batches(&batches), combine_batches(&batches));
    }

    #[test]
    fn test_zero_quantities_sum_to_zero() {
        let batches = vec![batch(
            "Proj1",
            vec![record("SVC1", "a", 0.0, "Proj1"), record("SVC1", "b", 0.0, "Proj1")],
        )];
        let table = combine_batches(&batches);
        assert_eq!(table.rows[2].approved_quantity, 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(combine_batches(&[]).is_empty());
        assert!(combine_batches(&[batch("Proj1", vec![])]).is_empty());
    }
}
