use agentdeck_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while handling an editor gesture.
#[derive(Debug, Error)]
pub enum EditorError {
  /// The graph store rejected the change.
  #[error(transparent)]
  Graph(#[from] GraphError),

  /// A drop carried no node payload.
  #[error("drop event carries no node payload")]
  MissingPayload,

  /// A drop payload could not be decoded.
  #[error("malformed drag payload: {0}")]
  MalformedPayload(#[from] serde_json::Error),

  /// An inspector edit arrived with no node selected.
  #[error("no node selected")]
  NoSelection,

  /// The inspector does not show this field for the selected node's kind.
  #[error("field '{field}' is not editable on {kind} nodes")]
  FieldNotEditable { field: &'static str, kind: String },

  #[error("unknown framework: {0}")]
  UnknownFramework(String),

  #[error("invalid editor config: {0}")]
  InvalidConfig(String),

  /// The export document could not be serialized.
  #[error("failed to serialize workflow: {0}")]
  Serialize(#[source] serde_json::Error),

  /// Writing an export file failed.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}
