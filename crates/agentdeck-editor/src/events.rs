//! Editor events and notifiers.
//!
//! Every successful gesture emits an event. The UI turns them into toasts;
//! other consumers may log or ignore them.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Events emitted by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditorEvent {
  NodeAdded { node_id: String, kind: String },

  EdgeAdded {
    edge_id: String,
    source: String,
    target: String,
  },

  /// Selection changed. `None` means the pane was clicked.
  NodeSelected { node_id: Option<String> },

  NodeUpdated { node_id: String, field: String },

  FrameworkSelected { framework: String },

  /// "Run workflow" was pressed. Nothing is executed.
  RunRequested { framework: String, nodes: usize },

  Exported { file_name: String },
}

impl EditorEvent {
  /// Toast text for the event.
  pub fn message(&self) -> String {
    match self {
      EditorEvent::NodeAdded { kind, .. } => format!("Added {kind} node"),
      EditorEvent::EdgeAdded { source, target, .. } => {
        format!("Connected {source} to {target}")
      }
      EditorEvent::NodeSelected { node_id: Some(id) } => format!("Selected {id}"),
      EditorEvent::NodeSelected { node_id: None } => "Selection cleared".to_string(),
      EditorEvent::NodeUpdated { node_id, field } => format!("Updated {field} of {node_id}"),
      EditorEvent::FrameworkSelected { framework } => format!("Framework set to {framework}"),
      EditorEvent::RunRequested { framework, nodes } => {
        format!("Running workflow with {framework} ({nodes} nodes)")
      }
      EditorEvent::Exported { file_name } => format!("Exported {file_name}"),
    }
  }
}

/// Receives editor events.
///
/// `notify` is called synchronously from the gesture handler and must not
/// block.
pub trait EditorNotifier: Send + Sync {
  fn notify(&self, event: EditorEvent);
}

/// A notifier that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

impl EditorNotifier for NoopNotifier {
  fn notify(&self, _event: EditorEvent) {}
}

/// A notifier that forwards events to an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
  sender: mpsc::UnboundedSender<EditorEvent>,
}

impl ChannelNotifier {
  pub fn new(sender: mpsc::UnboundedSender<EditorEvent>) -> Self {
    Self { sender }
  }
}

impl EditorNotifier for ChannelNotifier {
  fn notify(&self, event: EditorEvent) {
    // Toasts are fire-and-forget; a dropped receiver is fine.
    let _ = self.sender.send(event);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_channel_notifier_forwards() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let notifier = ChannelNotifier::new(tx);

    notifier.notify(EditorEvent::FrameworkSelected {
      framework: "crewai".to_string(),
    });

    let event = rx.recv().await.unwrap();
    assert_eq!(event.message(), "Framework set to crewai");
  }

  #[test]
  fn test_channel_notifier_ignores_closed_receiver() {
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);
    ChannelNotifier::new(tx).notify(EditorEvent::NodeSelected { node_id: None });
  }
}
