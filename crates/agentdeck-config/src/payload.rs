use serde::{Deserialize, Serialize};

use crate::kind::NodeKind;

/// MIME type under which palette items put their payload on a drag.
pub const DRAG_MIME_TYPE: &str = "application/agentdeck-node";

/// What a palette item carries from the palette to the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
  #[serde(rename = "type")]
  pub kind: NodeKind,
  pub label: String,
}

impl DragPayload {
  pub fn encode(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string(self)
  }

  pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(raw)
  }
}
