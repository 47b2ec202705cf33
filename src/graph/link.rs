//! Cross-workspace linker: second pass over reports.
//!
//! Must run after the builder has seen every workspace, since a report may
//! depend on a dataset owned by a workspace that comes later in the input.

use crate::graph::Link;
use crate::graph::build::Ownership;

/// For each report whose dataset lives in another workspace, link
/// dataset workspace -> report workspace.
///
/// Reports pointing at a dataset that is not in the document are skipped. A
/// report without a `datasetId` resolves to a dataset without an `id`.
pub fn link_cross_workspace(owners: &Ownership) -> Vec<Link> {
    let mut links = Vec::new();

    for report in owners.reports() {
        let dataset_id = report.dataset_id.as_str();
        let Some(dataset_ws) = owners.dataset_owner(dataset_id) else {
            tracing::debug!(
                report = report.report_id.as_str(),
                dataset = dataset_id,
                "report dataset not found in document"
            );
            continue;
        };

        if dataset_ws != report.workspace_id {
            links.push(Link::new(dataset_ws, &report.workspace_id));
        }
    }

    links
}
