//! Graph builder: first pass over every workspace.
//!
//! Emits one node per workspace and per artifact, a containment link from the
//! workspace to each artifact, and a lineage link for every upstream dataflow
//! pointer that leaves the artifact's own workspace. Ownership is recorded in
//! a side-table for the cross-workspace pass instead of being written back
//! into the input.

use crate::graph::{Link, Node, NodeType};
use crate::spec::{ArtifactKind, Workspace};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// A report together with the workspace it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBinding {
    pub report_id: String,
    pub workspace_id: String,
    pub dataset_id: String,
}

/// Owning workspace of every artifact the linker needs to resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ownership {
    /// dataset id -> owning workspace id. First occurrence wins.
    datasets: BTreeMap<String, String>,
    /// Reports in traversal order.
    reports: Vec<ReportBinding>,
}

impl Ownership {
    fn record_dataset(&mut self, dataset_id: &str, workspace_id: &str) {
        match self.datasets.entry(dataset_id.to_string()) {
            Entry::Vacant(e) => {
                e.insert(workspace_id.to_string());
            }
            Entry::Occupied(e) => {
                tracing::debug!(
                    dataset = dataset_id,
                    kept = e.get().as_str(),
                    ignored = workspace_id,
                    "dataset id seen in more than one workspace"
                );
            }
        }
    }

    pub fn dataset_owner(&self, dataset_id: &str) -> Option<&str> {
        self.datasets.get(dataset_id).map(String::as_str)
    }

    pub fn reports(&self) -> &[ReportBinding] {
        &self.reports
    }
}

/// Output of the first pass.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    pub owners: Ownership,
}

pub fn build_graph(workspaces: &[Workspace]) -> Draft {
    let mut draft = Draft::default();

    for ws in workspaces {
        tracing::debug!(
            workspace = ws.id.as_str(),
            artifacts = ws.artifact_count(),
            "visiting workspace"
        );

        draft.nodes.push(Node {
            id: ws.id.clone(),
            name: ws.name.clone(),
            node_type: NodeType::Workspace,
        });

        for artifact in &ws.artifacts {
            match &artifact.kind {
                ArtifactKind::Dataset { .. } => {
                    draft.owners.record_dataset(&artifact.id, &ws.id);
                }
                ArtifactKind::Report { dataset_id } => {
                    draft.owners.reports.push(ReportBinding {
                        report_id: artifact.id.clone(),
                        workspace_id: ws.id.clone(),
                        dataset_id: dataset_id.clone(),
                    });
                }
                ArtifactKind::Dataflow { .. } | ArtifactKind::Dashboard => {}
            }

            draft.nodes.push(Node {
                id: artifact.id.clone(),
                name: artifact.name.clone(),
                node_type: NodeType::from(&artifact.kind),
            });
            draft.links.push(Link::new(&ws.id, &artifact.id));

            // Pointers back into the same workspace add nothing.
            for group in artifact.upstream_groups() {
                if group != &ws.id {
                    draft.links.push(Link::new(group, &ws.id));
                }
            }
        }
    }

    tracing::debug!(
        nodes = draft.nodes.len(),
        links = draft.links.len(),
        "graph builder finished"
    );
    draft
}
