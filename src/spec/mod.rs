//! Input model. `scan` mirrors the scanner's JSON as-is; `workspace` is the
//! normalized form the graph stages read.

pub mod scan;
pub mod workspace;

pub use scan::ScanDocument;
pub use workspace::{Artifact, ArtifactKind, Workspace};
