use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::kind::NodeKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
  pub id: String,
  #[serde(rename = "type", default)]
  pub kind: NodeKind,
  pub position: Position,
  #[serde(default)]
  pub data: NodeData,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub style: Option<NodeStyle>,
}

impl Node {
  pub fn new(id: impl Into<String>, kind: NodeKind, position: Position, label: &str) -> Self {
    Self {
      id: id.into(),
      kind,
      position,
      data: NodeData::with_label(label),
      style: None,
    }
  }

  pub fn label(&self) -> &str {
    self.data.label()
  }
}

/// Canvas coordinates of a node's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
  pub x: f64,
  pub y: f64,
}

impl Position {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
  pub background: String,
  pub border_color: String,
}

/// Free-form attribute map of a node.
///
/// Only `label` is common to every node. Which other keys are meaningful
/// depends on the node kind, but nothing here enforces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeData(Map<String, Value>);

impl NodeData {
  pub const LABEL: &'static str = "label";

  pub fn with_label(label: &str) -> Self {
    let mut data = Self::default();
    data.set(Self::LABEL, label);
    data
  }

  pub fn label(&self) -> &str {
    self.get_str(Self::LABEL).unwrap_or_default()
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.0.get(key)
  }

  /// Get a string attribute. Non-string values read as absent.
  pub fn get_str(&self, key: &str) -> Option<&str> {
    self.0.get(key).and_then(Value::as_str)
  }

  pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
    self.0.insert(key.into(), value.into());
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
    self.0.iter()
  }
}

impl From<Map<String, Value>> for NodeData {
  fn from(map: Map<String, Value>) -> Self {
    Self(map)
  }
}
