use std::fmt;

use serde::{Deserialize, Serialize};

/// The type tag of a node.
///
/// The set is open: tags the editor does not know about round-trip through
/// [`NodeKind::Other`] unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
  Agent,
  Tool,
  Database,
  Decision,
  Human,
  Document,
  Success,
  Error,
  #[default]
  Default,
  Other(String),
}

impl NodeKind {
  pub fn as_str(&self) -> &str {
    match self {
      NodeKind::Agent => "agent",
      NodeKind::Tool => "tool",
      NodeKind::Database => "database",
      NodeKind::Decision => "decision",
      NodeKind::Human => "human",
      NodeKind::Document => "document",
      NodeKind::Success => "success",
      NodeKind::Error => "error",
      NodeKind::Default => "default",
      NodeKind::Other(tag) => tag,
    }
  }
}

impl From<&str> for NodeKind {
  fn from(tag: &str) -> Self {
    match tag {
      "agent" => NodeKind::Agent,
      "tool" => NodeKind::Tool,
      "database" => NodeKind::Database,
      "decision" => NodeKind::Decision,
      "human" => NodeKind::Human,
      "document" => NodeKind::Document,
      "success" => NodeKind::Success,
      "error" => NodeKind::Error,
      // An untyped node renders with the default shape.
      "" | "default" => NodeKind::Default,
      other => NodeKind::Other(other.to_string()),
    }
  }
}

impl From<String> for NodeKind {
  fn from(tag: String) -> Self {
    NodeKind::from(tag.as_str())
  }
}

impl From<NodeKind> for String {
  fn from(kind: NodeKind) -> Self {
    kind.as_str().to_string()
  }
}

impl fmt::Display for NodeKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}
