//! Lineage graph construction.
//!
//! Three stages run in strict order over one workspace sequence:
//! 1) build: nodes, containment links, upstream dataflow links
//! 2) link: report -> dataset links across workspaces
//! 3) validate: drop links whose source is not a known workspace
//!
//! Nothing is cached between calls; every call starts from empty buffers.

pub mod build;
pub mod link;
pub mod validate;

use crate::spec::{ArtifactKind, Workspace};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum NodeType {
    Workspace,
    Dataset,
    Dataflow,
    Report,
    Dashboard,
}

impl NodeType {
    pub const ALL: [NodeType; 5] = [
        NodeType::Workspace,
        NodeType::Dataset,
        NodeType::Dataflow,
        NodeType::Report,
        NodeType::Dashboard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Workspace => "Workspace",
            NodeType::Dataset => "Dataset",
            NodeType::Dataflow => "Dataflow",
            NodeType::Report => "Report",
            NodeType::Dashboard => "Dashboard",
        }
    }
}

impl From<&ArtifactKind> for NodeType {
    fn from(kind: &ArtifactKind) -> Self {
        match kind {
            ArtifactKind::Dataset { .. } => NodeType::Dataset,
            ArtifactKind::Dataflow { .. } => NodeType::Dataflow,
            ArtifactKind::Report { .. } => NodeType::Report,
            ArtifactKind::Dashboard => NodeType::Dashboard,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown node type: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

/// Directed edge. Containment links point workspace -> artifact, lineage
/// links point producing workspace -> consuming workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub source: String,
    pub target: String,
}

impl Link {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// The `{nodes, links}` pair handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineageGraph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

/// Result of one construction call.
#[derive(Debug, Clone, Default)]
pub struct Construction {
    pub graph: LineageGraph,
    /// Links removed by validation, in their original order.
    pub dropped: Vec<Link>,
}

/// Run builder, linker and validator over `workspaces`.
pub fn construct(workspaces: &[Workspace]) -> Construction {
    let build::Draft {
        nodes,
        mut links,
        owners,
    } = build::build_graph(workspaces);

    links.extend(link::link_cross_workspace(&owners));

    let validate::Validated { kept, dropped } = validate::validate_links(links, workspaces);
    for l in &dropped {
        tracing::warn!(link = %l, "dropping link from unknown workspace");
    }

    Construction {
        graph: LineageGraph { nodes, links: kept },
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_type_round_trips_through_label() {
        for t in NodeType::ALL {
            assert_eq!(t.as_str().parse::<NodeType>(), Ok(t));
        }
        assert!("Workbook".parse::<NodeType>().is_err());
    }

    #[test]
    fn node_serializes_type_field() {
        let node = Node {
            id: "d1".to_string(),
            name: "Orders".to_string(),
            node_type: NodeType::Dataset,
        };
        let v = serde_json::to_value(&node).unwrap();
        assert_eq!(
            v,
            serde_json::json!({ "id": "d1", "name": "Orders", "type": "Dataset" })
        );
    }

    #[test]
    fn empty_input_yields_empty_graph() {
        let c = construct(&[]);
        assert_eq!(c.graph, LineageGraph::default());
        assert!(c.dropped.is_empty());
    }
}
