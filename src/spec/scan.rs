//! Raw workspace scan document as produced by the tenant scanner.
//!
//! JSON shape:
//! {
//!   "workspaces": [
//!     {
//!       "id": "a1",
//!       "name": "Sales",
//!       "datasets":   [{ "id": "d1", "name": "Orders",
//!                        "upstreamDataflows": [{ "targetDataflowId": "f1", "groupId": "b2" }] }],
//!       "dataflows":  [{ "objectId": "f1", "name": "Ingest", "upstreamDataflows": [] }],
//!       "reports":    [{ "id": "r1", "name": "Revenue", "datasetId": "d1" }],
//!       "dashboards": [{ "id": "x1", "displayName": "Exec" }]
//!     },
//!     ...
//!   ]
//! }
//!
//! Nothing here is validated. Missing or `null` identity fields become empty
//! strings, and missing or `null` collections become empty vectors.

use serde::Deserialize;
use serde::de::Deserializer;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanDocument {
    #[serde(default, deserialize_with = "nullable_vec")]
    pub workspaces: Vec<RawWorkspace>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWorkspace {
    #[serde(default, deserialize_with = "nullable_string")]
    pub id: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub datasets: Vec<RawDataset>,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub dataflows: Vec<RawDataflow>,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub reports: Vec<RawReport>,

    #[serde(default, deserialize_with = "nullable_vec")]
    pub dashboards: Vec<RawDashboard>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDataset {
    #[serde(default, deserialize_with = "nullable_string")]
    pub id: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,

    #[serde(default, rename = "upstreamDataflows", deserialize_with = "nullable_vec")]
    pub upstream_dataflows: Vec<UpstreamDataflow>,
}

/// Dataflows are keyed by `objectId`, not `id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDataflow {
    #[serde(default, rename = "objectId", deserialize_with = "nullable_string")]
    pub object_id: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,

    #[serde(default, rename = "upstreamDataflows", deserialize_with = "nullable_vec")]
    pub upstream_dataflows: Vec<UpstreamDataflow>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReport {
    #[serde(default, deserialize_with = "nullable_string")]
    pub id: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,

    /// Missing or `null` becomes empty, so it matches a dataset without an id.
    #[serde(default, rename = "datasetId", deserialize_with = "nullable_string")]
    pub dataset_id: String,
}

/// Dashboards carry `displayName` where everything else has `name`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDashboard {
    #[serde(default, deserialize_with = "nullable_string")]
    pub id: String,

    #[serde(default, rename = "displayName", deserialize_with = "nullable_string")]
    pub display_name: String,
}

/// Lineage pointer from an artifact to the dataflow that feeds it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamDataflow {
    /// Workspace that owns the upstream dataflow.
    #[serde(default, rename = "groupId", deserialize_with = "nullable_string")]
    pub group_id: String,

    #[serde(default, rename = "targetDataflowId")]
    pub target_dataflow_id: Option<String>,
}

/// Accept both an absent field and an explicit `null` as an empty list.
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Same as [`nullable_vec`] for identity and name fields.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
