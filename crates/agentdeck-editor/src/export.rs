use std::path::{Path, PathBuf};

use agentdeck_config::WorkflowExport;
use serde::Serialize;
use tracing::{info, instrument};

use crate::error::EditorError;

/// An export snapshot together with the file name it downloads as.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedWorkflow {
  pub file_name: String,
  pub document: WorkflowExport,
}

impl ExportedWorkflow {
  pub fn new(document: WorkflowExport, epoch_millis: i64) -> Self {
    Self {
      file_name: WorkflowExport::file_name(epoch_millis),
      document,
    }
  }

  /// Pretty-printed JSON of the document.
  pub fn to_json(&self) -> Result<String, EditorError> {
    pretty_json(&self.document)
  }

  /// Write the document into `dir` under its file name.
  #[instrument(skip(self), fields(file_name = %self.file_name))]
  pub async fn write_to(&self, dir: &Path) -> Result<PathBuf, EditorError> {
    let json = self.to_json()?;
    tokio::fs::create_dir_all(dir).await?;

    let path = dir.join(&self.file_name);
    tokio::fs::write(&path, json).await?;

    info!(path = %path.display(), "workflow exported");
    Ok(path)
  }
}

fn pretty_json<T: Serialize>(value: &T) -> Result<String, EditorError> {
  serde_json::to_string_pretty(value).map_err(EditorError::Serialize)
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Unserializable;

  impl Serialize for Unserializable {
    fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
      Err(serde::ser::Error::custom("value cannot be written"))
    }
  }

  #[test]
  fn test_serialize_failure_is_not_a_payload_error() {
    let err = pretty_json(&Unserializable).unwrap_err();

    assert!(matches!(err, EditorError::Serialize(_)));
    assert!(err.to_string().starts_with("failed to serialize workflow"));
  }

  #[test]
  fn test_to_json_has_top_level_keys() {
    let export = ExportedWorkflow::new(
      WorkflowExport {
        nodes: vec![],
        edges: vec![],
        framework: "semantic".to_string(),
      },
      1,
    );

    let value: serde_json::Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();
    assert_eq!(value["framework"], "semantic");
    assert!(value["nodes"].as_array().unwrap().is_empty());
    assert!(value["edges"].as_array().unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_write_to_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let export = ExportedWorkflow::new(
      WorkflowExport {
        nodes: vec![],
        edges: vec![],
        framework: "autogen".to_string(),
      },
      1_700_000_000_000,
    );

    let path = export.write_to(&dir.path().join("downloads")).await.unwrap();

    assert_eq!(
      path.file_name().unwrap().to_str(),
      Some("workflow-1700000000000.json")
    );
    let written: WorkflowExport =
      serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, export.document);
  }
}
