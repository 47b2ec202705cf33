//! Link validation: only links whose source is a workspace in the input survive.
//!
//! Lineage pointers carry workspace ids straight from the scan, so they can
//! name workspaces that were never uploaded. The renderer cannot resolve
//! such a source node. Targets are not checked.

use crate::graph::Link;
use crate::spec::Workspace;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validated {
    pub kept: Vec<Link>,
    pub dropped: Vec<Link>,
}

pub fn validate_links(links: Vec<Link>, workspaces: &[Workspace]) -> Validated {
    let known: BTreeSet<&str> = workspaces.iter().map(|ws| ws.id.as_str()).collect();

    let (kept, dropped): (Vec<Link>, Vec<Link>) = links
        .into_iter()
        .partition(|l| known.contains(l.source.as_str()));

    Validated { kept, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ws(id: &str) -> Workspace {
        Workspace {
            id: id.to_string(),
            name: id.to_uppercase(),
            artifacts: vec![],
        }
    }

    #[test]
    fn drops_links_from_unknown_sources_only() {
        let links = vec![
            Link::new("a", "d1"),
            Link::new("ghost", "a"),
            Link::new("b", "missing-target"),
            Link::new("d1", "a"),
        ];

        let v = validate_links(links, &[ws("a"), ws("b")]);
        assert_eq!(
            v.kept,
            vec![Link::new("a", "d1"), Link::new("b", "missing-target")]
        );
        assert_eq!(v.dropped, vec![Link::new("ghost", "a"), Link::new("d1", "a")]);
    }

    #[test]
    fn no_workspaces_drops_everything() {
        let v = validate_links(vec![Link::new("a", "b")], &[]);
        assert!(v.kept.is_empty());
        assert_eq!(v.dropped.len(), 1);
    }
}
