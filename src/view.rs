//! Hand-off document for the renderer: the validated graph, with each node
//! annotated by its presentation class.

use crate::config::Config;
use crate::graph::{Construction, Link, NodeType};
use crate::spec::Workspace;
use crate::style::{Rgba, TextSize, node_color};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct NodeView {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub color: Rgba,

    /// Workspace nodes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsView {
    pub workspaces: usize,
    pub artifacts: usize,
    pub nodes: usize,
    pub links: usize,
    pub dropped_links: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphView {
    pub nodes: Vec<NodeView>,
    pub links: Vec<Link>,
    pub totals: TotalsView,
}

pub fn build_graph_view(
    workspaces: &[Workspace],
    construction: &Construction,
    config: &Config,
) -> GraphView {
    // Several workspaces may share an id; size by the first one.
    let mut artifact_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for ws in workspaces {
        artifact_counts
            .entry(ws.id.as_str())
            .or_insert_with(|| ws.artifact_count());
    }

    let nodes = construction
        .graph
        .nodes
        .iter()
        .map(|n| {
            let size = match n.node_type {
                NodeType::Workspace => artifact_counts
                    .get(n.id.as_str())
                    .map(|&count| TextSize::for_artifact_count(count)),
                _ => None,
            };
            NodeView {
                id: n.id.clone(),
                name: n.name.clone(),
                node_type: n.node_type,
                color: node_color(n.node_type),
                size,
                text_size: size.map(TextSize::height),
                url: (n.node_type == NodeType::Workspace).then(|| config.lineage_url(&n.id)),
            }
        })
        .collect();

    GraphView {
        nodes,
        links: construction.graph.links.clone(),
        totals: TotalsView {
            workspaces: workspaces.len(),
            artifacts: workspaces.iter().map(Workspace::artifact_count).sum(),
            nodes: construction.graph.nodes.len(),
            links: construction.graph.links.len(),
            dropped_links: construction.dropped.len(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::construct;
    use crate::spec::{Artifact, ArtifactKind};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn workspace(id: &str, dashboards: usize) -> Workspace {
        Workspace {
            id: id.to_string(),
            name: format!("ws {}", id),
            artifacts: (0..dashboards)
                .map(|i| Artifact {
                    id: format!("{}-x{}", id, i),
                    name: format!("board {}", i),
                    kind: ArtifactKind::Dashboard,
                })
                .collect(),
        }
    }

    #[test]
    fn workspace_nodes_carry_size_and_url() {
        let workspaces = vec![workspace("small", 2), workspace("big", 60)];
        let c = construct(&workspaces);
        let view = build_graph_view(&workspaces, &c, &Config::default());

        let small = &view.nodes[0];
        assert_eq!(small.size, Some(TextSize::Small));
        assert_eq!(small.text_size, Some(8));
        assert_eq!(
            small.url.as_deref(),
            Some("https://app.powerbi.com/groups/small/lineage")
        );

        let big = view.nodes.iter().find(|n| n.id == "big").unwrap();
        assert_eq!(big.size, Some(TextSize::Large));

        let board = &view.nodes[1];
        assert_eq!(board.node_type, NodeType::Dashboard);
        assert_eq!(board.size, None);
        assert_eq!(board.url, None);
    }

    #[test]
    fn artifact_nodes_serialize_without_workspace_fields() {
        let workspaces = vec![workspace("w", 1)];
        let c = construct(&workspaces);
        let view = build_graph_view(&workspaces, &c, &Config::default());

        let v = serde_json::to_value(&view.nodes[1]).unwrap();
        assert_eq!(
            v,
            json!({
                "id": "w-x0",
                "name": "board 0",
                "type": "Dashboard",
                "color": "rgba(25, 114, 120, 1)"
            })
        );
    }

    #[test]
    fn totals_count_dropped_links() {
        let mut w = workspace("w", 0);
        w.artifacts.push(Artifact {
            id: "d".to_string(),
            name: "d".to_string(),
            kind: ArtifactKind::Dataset {
                upstream: vec!["ghost".to_string()],
            },
        });
        let workspaces = vec![w];
        let c = construct(&workspaces);
        let view = build_graph_view(&workspaces, &c, &Config::default());

        assert_eq!(
            view.totals,
            TotalsView {
                workspaces: 1,
                artifacts: 1,
                nodes: 2,
                links: 1,
                dropped_links: 1,
            }
        );
    }
}
