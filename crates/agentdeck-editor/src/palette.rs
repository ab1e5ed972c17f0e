//! The fixed catalog of node templates shown in the sidebar.

use agentdeck_config::{DragPayload, NodeKind, NodeStyle};

/// A draggable node template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteItem {
  pub kind: &'static str,
  pub label: &'static str,
  pub icon: &'static str,
  pub color: &'static str,
}

/// Border color of nodes whose kind has no palette entry.
const NEUTRAL_COLOR: &str = "#94a3b8";

pub static PALETTE: [PaletteItem; 8] = [
  PaletteItem {
    kind: "agent",
    label: "AI Agent",
    icon: "bot",
    color: "hsl(217 91% 60%)",
  },
  PaletteItem {
    kind: "tool",
    label: "Tool Call",
    icon: "code",
    color: "hsl(142 76% 36%)",
  },
  PaletteItem {
    kind: "database",
    label: "Database",
    icon: "database",
    color: "hsl(271 91% 65%)",
  },
  PaletteItem {
    kind: "decision",
    label: "Decision",
    icon: "git-branch",
    color: "hsl(48 96% 53%)",
  },
  PaletteItem {
    kind: "human",
    label: "Human Input",
    icon: "message-square",
    color: "hsl(24 100% 50%)",
  },
  PaletteItem {
    kind: "document",
    label: "Document",
    icon: "file-text",
    color: "hsl(199 89% 48%)",
  },
  PaletteItem {
    kind: "success",
    label: "Success",
    icon: "check-circle",
    color: "hsl(142 76% 36%)",
  },
  PaletteItem {
    kind: "error",
    label: "Error Handler",
    icon: "x-circle",
    color: "hsl(0 84% 60%)",
  },
];

impl PaletteItem {
  pub fn node_kind(&self) -> NodeKind {
    NodeKind::from(self.kind)
  }

  /// The payload this item puts on a drag.
  pub fn drag_payload(&self) -> DragPayload {
    DragPayload {
      kind: self.node_kind(),
      label: self.label.to_string(),
    }
  }
}

/// Look up the palette entry for a node kind.
pub fn template(kind: &NodeKind) -> Option<&'static PaletteItem> {
  PALETTE.iter().find(|item| item.kind == kind.as_str())
}

/// Default styling of a freshly dropped node.
pub(crate) fn style_for(kind: &NodeKind) -> NodeStyle {
  let color = template(kind).map_or(NEUTRAL_COLOR, |item| item.color);
  NodeStyle {
    background: "#ffffff".to_string(),
    border_color: color.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_palette_kinds_are_known() {
    for item in &PALETTE {
      assert!(
        !matches!(item.node_kind(), NodeKind::Other(_) | NodeKind::Default),
        "{} should map to a known kind",
        item.kind
      );
    }
  }

  #[test]
  fn test_style_for_unknown_kind_is_neutral() {
    let style = style_for(&NodeKind::Other("webhook".to_string()));
    assert_eq!(style.border_color, NEUTRAL_COLOR);
    assert_eq!(style_for(&NodeKind::Tool).border_color, "hsl(142 76% 36%)");
  }

  #[test]
  fn test_labels_become_drag_payloads() {
    let labels: Vec<String> = PALETTE.iter().map(|i| i.drag_payload().label).collect();
    assert_eq!(
      labels,
      [
        "AI Agent",
        "Tool Call",
        "Database",
        "Decision",
        "Human Input",
        "Document",
        "Success",
        "Error Handler",
      ]
    );
  }
}
