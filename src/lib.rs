//! Workspace lineage: turn a tenant scan of workspaces and their artifacts
//! into a flat node/link graph for a force-directed renderer.

pub mod config;
pub mod graph;
pub mod input;
pub mod spec;
pub mod style;
pub mod view;

pub type Result<T> = anyhow::Result<T>;

pub use graph::{Construction, LineageGraph, Link, Node, NodeType, construct};
