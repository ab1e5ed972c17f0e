//! Canvas geometry and drop events.

use agentdeck_config::{DRAG_MIME_TYPE, DragPayload, Position};
use serde::{Deserialize, Serialize};

/// Client-space rectangle of the mounted canvas element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
  pub left: f64,
  pub top: f64,
  pub width: f64,
  pub height: f64,
}

impl Default for CanvasBounds {
  fn default() -> Self {
    Self {
      left: 0.0,
      top: 0.0,
      width: 1280.0,
      height: 720.0,
    }
  }
}

/// Pan offset and zoom of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
  pub x: f64,
  pub y: f64,
  pub zoom: f64,
}

impl Default for Viewport {
  fn default() -> Self {
    Self {
      x: 0.0,
      y: 0.0,
      zoom: 1.0,
    }
  }
}

impl Viewport {
  /// Map a client-space pointer to canvas coordinates.
  pub fn project(&self, bounds: &CanvasBounds, client_x: f64, client_y: f64) -> Position {
    Position::new(
      (client_x - bounds.left - self.x) / self.zoom,
      (client_y - bounds.top - self.y) / self.zoom,
    )
  }
}

/// A drop on the canvas, as delivered by the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
  pub mime_type: String,
  pub payload: Option<String>,
  pub client_x: f64,
  pub client_y: f64,
}

impl DropEvent {
  /// A drop carrying a palette payload under the node MIME type.
  pub fn from_payload(
    payload: &DragPayload,
    client_x: f64,
    client_y: f64,
  ) -> Result<Self, serde_json::Error> {
    Ok(Self {
      mime_type: DRAG_MIME_TYPE.to_string(),
      payload: Some(payload.encode()?),
      client_x,
      client_y,
    })
  }

  /// The raw node payload, if this drop carries one.
  pub(crate) fn node_payload(&self) -> Option<&str> {
    if self.mime_type != DRAG_MIME_TYPE {
      return None;
    }
    self.payload.as_deref().filter(|p| !p.trim().is_empty())
  }
}

/// Make `base` unique by appending `-1`, `-2`, ... while `taken` says it is used.
pub(crate) fn unique_id(base: String, taken: impl Fn(&str) -> bool) -> String {
  if !taken(&base) {
    return base;
  }

  let mut n = 1;
  loop {
    let candidate = format!("{base}-{n}");
    if !taken(&candidate) {
      return candidate;
    }
    n += 1;
  }
}
