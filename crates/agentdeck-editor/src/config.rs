use serde::{Deserialize, Serialize};

use crate::canvas::{CanvasBounds, Viewport};
use crate::error::EditorError;
use crate::framework;

/// Editor configuration, loadable from JSON.
///
/// ```json
/// {
///   "canvas": { "left": 240, "top": 64, "width": 1040, "height": 656 },
///   "viewport": { "x": 0, "y": 0, "zoom": 1 },
///   "framework": "crewai"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
  /// Bounds of the mounted canvas. `None` means drops are ignored.
  pub canvas: Option<CanvasBounds>,
  pub viewport: Viewport,
  /// Framework tag a new workflow starts with.
  pub framework: String,
}

impl Default for EditorConfig {
  fn default() -> Self {
    Self {
      canvas: Some(CanvasBounds::default()),
      viewport: Viewport::default(),
      framework: "langgraph".to_string(),
    }
  }
}

impl EditorConfig {
  /// Parse and validate a JSON config. Missing keys take their defaults.
  pub fn from_json(json: &str) -> Result<Self, EditorError> {
    let config: Self =
      serde_json::from_str(json).map_err(|e| EditorError::InvalidConfig(e.to_string()))?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), EditorError> {
    if !(self.viewport.zoom.is_finite() && self.viewport.zoom > 0.0) {
      return Err(EditorError::InvalidConfig(format!(
        "viewport zoom must be positive, got {}",
        self.viewport.zoom
      )));
    }

    if framework::find(&self.framework).is_none() {
      return Err(EditorError::UnknownFramework(self.framework.clone()));
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_partial_config_uses_defaults() {
    let config = EditorConfig::from_json(r#"{ "framework": "autogen" }"#).unwrap();
    assert_eq!(config.framework, "autogen");
    assert_eq!(config.canvas, Some(CanvasBounds::default()));
    assert_eq!(config.viewport, Viewport::default());
  }

  #[test]
  fn test_null_canvas_is_unmounted() {
    let config = EditorConfig::from_json(r#"{ "canvas": null }"#).unwrap();
    assert_eq!(config.canvas, None);
  }

  #[test]
  fn test_rejects_zero_zoom() {
    let err = EditorConfig::from_json(r#"{ "viewport": { "x": 0, "y": 0, "zoom": 0 } }"#)
      .unwrap_err();
    assert!(matches!(err, EditorError::InvalidConfig(_)));
  }

  #[test]
  fn test_rejects_unknown_framework() {
    let err = EditorConfig::from_json(r#"{ "framework": "dspy" }"#).unwrap_err();
    assert!(matches!(err, EditorError::UnknownFramework(id) if id == "dspy"));
  }
}
