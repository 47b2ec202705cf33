//! Loading scan documents from disk.

use crate::Result;
use crate::spec::{ScanDocument, Workspace};
use anyhow::{Context, bail};
use std::fs;

/// Parse one scan document into normalized workspaces.
pub fn parse_document(text: &str, origin: &str) -> Result<Vec<Workspace>> {
    let doc: ScanDocument = serde_json::from_str(text)
        .with_context(|| format!("parse scan document {}", origin))?;
    Ok(doc.into_workspaces())
}

/// Read every file and concatenate their workspaces in argument order.
pub fn load_workspaces(paths: &[String]) -> Result<Vec<Workspace>> {
    if paths.is_empty() {
        bail!("at least one --input file is required");
    }

    let mut out = Vec::new();
    for path in paths {
        let text = fs::read_to_string(path).with_context(|| format!("read scan file {}", path))?;
        let workspaces = parse_document(&text, path)?;
        tracing::debug!(file = path.as_str(), workspaces = workspaces.len(), "loaded scan file");
        out.extend(workspaces);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn scan_file(body: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(body.as_bytes()).unwrap();
        f
    }

    #[test]
    fn concatenates_files_in_order() {
        let a = scan_file(r#"{ "workspaces": [{ "id": "a", "name": "A" }] }"#);
        let b = scan_file(
            r#"{ "workspaces": [{ "id": "b", "name": "B" }, { "id": "c", "name": "C" }] }"#,
        );

        let paths = vec![
            b.path().display().to_string(),
            a.path().display().to_string(),
        ];
        let ws = load_workspaces(&paths).unwrap();
        let ids: Vec<&str> = ws.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn malformed_json_names_the_file() {
        let f = scan_file("{ not json");
        let path = f.path().display().to_string();
        let err = load_workspaces(&[path.clone()]).unwrap_err();
        assert!(format!("{:#}", err).contains(&path));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_workspaces(&["/definitely/not/here.json".to_string()]).is_err());
        assert!(load_workspaces(&[]).is_err());
    }
}
