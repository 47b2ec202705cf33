//! Run configuration assembled from command-line arguments.

use crate::Result;
use crate::spec::Workspace;
use anyhow::{Context, bail};
use regex::Regex;

pub const DEFAULT_PORTAL_URL: &str = "https://app.powerbi.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Keep only workspaces whose name matches.
    pub workspace_filter: Option<Regex>,
    /// Base URL used for per-workspace lineage links, without trailing slash.
    pub portal_url: String,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_filter: None,
            portal_url: DEFAULT_PORTAL_URL.to_string(),
            pretty: true,
        }
    }
}

impl Config {
    pub fn new(
        workspace_pattern: Option<&str>,
        portal_url: Option<&str>,
        compact: bool,
    ) -> Result<Self> {
        let workspace_filter = workspace_pattern
            .map(|p| Regex::new(p).with_context(|| format!("invalid --workspace pattern {:?}", p)))
            .transpose()?;

        let portal_url = portal_url
            .unwrap_or(DEFAULT_PORTAL_URL)
            .trim()
            .trim_end_matches('/')
            .to_string();
        if portal_url.is_empty() {
            bail!("--portal-url must not be empty");
        }

        Ok(Self {
            workspace_filter,
            portal_url,
            pretty: !compact,
        })
    }

    /// Apply the workspace name filter, preserving input order.
    pub fn select_workspaces(&self, workspaces: Vec<Workspace>) -> Vec<Workspace> {
        let Some(re) = &self.workspace_filter else {
            return workspaces;
        };

        let total = workspaces.len();
        let selected: Vec<Workspace> = workspaces
            .into_iter()
            .filter(|ws| re.is_match(&ws.name))
            .collect();
        tracing::info!(
            pattern = re.as_str(),
            selected = selected.len(),
            excluded = total - selected.len(),
            "applied workspace filter"
        );
        selected
    }

    pub fn lineage_url(&self, workspace_id: &str) -> String {
        format!("{}/groups/{}/lineage", self.portal_url, workspace_id)
    }
}
