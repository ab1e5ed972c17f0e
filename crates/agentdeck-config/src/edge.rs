use serde::{Deserialize, Serialize};

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
  pub id: String,
  pub source: String,
  pub target: String,
  #[serde(default)]
  pub animated: bool,
  #[serde(default)]
  pub style: EdgeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
  pub stroke: String,
  pub stroke_width: f64,
}

impl Default for EdgeStyle {
  fn default() -> Self {
    Self {
      stroke: "#6366f1".to_string(),
      stroke_width: 2.0,
    }
  }
}
