use serde::{Deserialize, Serialize};

use crate::inspector::InspectorField;

/// A user gesture, in a form that can be scripted and replayed.
///
/// Dropped nodes get a time-based id. A script that needs to refer to a node
/// it drops names it with `id`:
///
/// ```json
/// [
///   { "action": "drop", "type": "tool", "label": "Calculator", "x": 420, "y": 300, "id": "calc" },
///   { "action": "connect", "source": "3", "target": "calc" },
///   { "action": "select", "node_id": "3" },
///   { "action": "edit_field", "field": "prompt", "value": "Write a summary." },
///   { "action": "select_framework", "id": "crewai" },
///   { "action": "run" }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditorAction {
  /// Drop a palette item at client coordinates.
  Drop {
    #[serde(rename = "type")]
    kind: String,
    label: String,
    x: f64,
    y: f64,
    /// Id for the new node instead of the generated one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
  },
  Connect {
    source: String,
    target: String,
  },
  Select {
    node_id: String,
  },
  ClearSelection,
  /// Edit a field of the selected node.
  EditField {
    field: InspectorField,
    value: String,
  },
  OpenFrameworkPicker,
  SelectFramework {
    id: String,
  },
  Run,
}

impl EditorAction {
  /// Parse a JSON array of actions.
  pub fn parse_script(json: &str) -> Result<Vec<Self>, serde_json::Error> {
    serde_json::from_str(json)
  }
}
