//! Field layout of the properties panel.

use agentdeck_config::{Node, NodeKind};
use serde::{Deserialize, Serialize};

/// Model identifiers offered by the model select.
pub const MODEL_OPTIONS: [&str; 5] = [
  "google/gemini-2.5-flash",
  "google/gemini-2.5-pro",
  "openai/gpt-5",
  "openai/gpt-5-mini",
  "claude-sonnet-4-5",
];

/// What the model select shows for a node with no model set.
pub const DEFAULT_MODEL: &str = MODEL_OPTIONS[0];

/// An editable attribute of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InspectorField {
  Label,
  Model,
  Role,
  Prompt,
  ToolName,
  Description,
}

const AGENT_FIELDS: &[InspectorField] = &[
  InspectorField::Label,
  InspectorField::Model,
  InspectorField::Role,
  InspectorField::Prompt,
  InspectorField::Description,
];

const TOOL_FIELDS: &[InspectorField] = &[
  InspectorField::Label,
  InspectorField::ToolName,
  InspectorField::Description,
];

const BASIC_FIELDS: &[InspectorField] = &[InspectorField::Label, InspectorField::Description];

impl InspectorField {
  /// Attribute-map key the field reads and writes.
  pub fn key(self) -> &'static str {
    match self {
      InspectorField::Label => "label",
      InspectorField::Model => "model",
      InspectorField::Role => "role",
      InspectorField::Prompt => "prompt",
      InspectorField::ToolName => "toolName",
      InspectorField::Description => "description",
    }
  }

  /// Fields the panel shows for a node kind.
  pub fn for_kind(kind: &NodeKind) -> &'static [InspectorField] {
    match kind {
      NodeKind::Agent | NodeKind::Default => AGENT_FIELDS,
      NodeKind::Tool => TOOL_FIELDS,
      _ => BASIC_FIELDS,
    }
  }

  pub fn applies_to(self, kind: &NodeKind) -> bool {
    Self::for_kind(kind).contains(&self)
  }

  /// Value shown when the node has no value for the field.
  fn placeholder(self) -> &'static str {
    match self {
      InspectorField::Model => DEFAULT_MODEL,
      _ => "",
    }
  }
}

/// What the properties panel shows for the selected node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectorView {
  pub node_id: String,
  pub kind: NodeKind,
  pub fields: Vec<(InspectorField, String)>,
}

impl InspectorView {
  pub fn for_node(node: &Node) -> Self {
    let fields = InspectorField::for_kind(&node.kind)
      .iter()
      .map(|field| {
        let value = node
          .data
          .get_str(field.key())
          .unwrap_or(field.placeholder());
        (*field, value.to_string())
      })
      .collect();

    Self {
      node_id: node.id.clone(),
      kind: node.kind.clone(),
      fields,
    }
  }

  pub fn value(&self, field: InspectorField) -> Option<&str> {
    self
      .fields
      .iter()
      .find(|(f, _)| *f == field)
      .map(|(_, v)| v.as_str())
  }
}
