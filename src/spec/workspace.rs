//! Normalized workspace model.
//!
//! The scanner names identity fields differently per artifact kind
//! (`objectId` for dataflows, `displayName` for dashboards). Everything past
//! this module sees one uniform [`Artifact`] shape instead.

use crate::spec::scan::{
    RawDashboard, RawDataflow, RawDataset, RawReport, RawWorkspace, ScanDocument,
    UpstreamDataflow,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    /// Artifacts in scan order: datasets, dataflows, reports, dashboards.
    pub artifacts: Vec<Artifact>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub id: String,
    pub name: String,
    pub kind: ArtifactKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `upstream` holds the `groupId` of every upstream dataflow pointer.
    Dataset { upstream: Vec<String> },
    Dataflow { upstream: Vec<String> },
    Report { dataset_id: String },
    Dashboard,
}

impl Workspace {
    /// Number of artifacts of every kind; drives the size classification.
    pub fn artifact_count(&self) -> usize {
        self.artifacts.len()
    }
}

impl Artifact {
    /// Upstream workspace ids for the kinds that carry lineage pointers.
    pub fn upstream_groups(&self) -> &[String] {
        match &self.kind {
            ArtifactKind::Dataset { upstream } | ArtifactKind::Dataflow { upstream } => {
                upstream.as_slice()
            }
            ArtifactKind::Report { .. } | ArtifactKind::Dashboard => &[],
        }
    }
}

impl ScanDocument {
    /// Flatten every raw workspace into the uniform shape, keeping input order.
    pub fn into_workspaces(self) -> Vec<Workspace> {
        self.workspaces.into_iter().map(Workspace::from).collect()
    }
}

impl From<RawWorkspace> for Workspace {
    fn from(raw: RawWorkspace) -> Self {
        let mut artifacts = Vec::with_capacity(
            raw.datasets.len() + raw.dataflows.len() + raw.reports.len() + raw.dashboards.len(),
        );
        artifacts.extend(raw.datasets.into_iter().map(Artifact::from));
        artifacts.extend(raw.dataflows.into_iter().map(Artifact::from));
        artifacts.extend(raw.reports.into_iter().map(Artifact::from));
        artifacts.extend(raw.dashboards.into_iter().map(Artifact::from));

        Workspace {
            id: raw.id,
            name: raw.name,
            artifacts,
        }
    }
}

fn group_ids(pointers: Vec<UpstreamDataflow>) -> Vec<String> {
    pointers.into_iter().map(|p| p.group_id).collect()
}

impl From<RawDataset> for Artifact {
    fn from(raw: RawDataset) -> Self {
        Artifact {
            id: raw.id,
            name: raw.name,
            kind: ArtifactKind::Dataset {
                upstream: group_ids(raw.upstream_dataflows),
            },
        }
    }
}

impl From<RawDataflow> for Artifact {
    fn from(raw: RawDataflow) -> Self {
        Artifact {
            id: raw.object_id,
            name: raw.name,
            kind: ArtifactKind::Dataflow {
                upstream: group_ids(raw.upstream_dataflows),
            },
        }
    }
}

impl From<RawReport> for Artifact {
    fn from(raw: RawReport) -> Self {
        Artifact {
            id: raw.id,
            name: raw.name,
            kind: ArtifactKind::Report {
                dataset_id: raw.dataset_id,
            },
        }
    }
}

impl From<RawDashboard> for Artifact {
    fn from(raw: RawDashboard) -> Self {
        Artifact {
            id: raw.id,
            name: raw.display_name,
            kind: ArtifactKind::Dashboard,
        }
    }
}
