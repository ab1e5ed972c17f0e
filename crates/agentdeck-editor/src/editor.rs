use std::sync::Arc;

use agentdeck_config::{DragPayload, Edge, EdgeStyle, Node, NodeKind, WorkflowExport};
use agentdeck_graph::{GraphError, GraphStore};
use tracing::{debug, info};

use crate::action::EditorAction;
use crate::canvas::{CanvasBounds, DropEvent, unique_id};
use crate::clock::{Clock, SystemClock};
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::events::{EditorEvent, EditorNotifier, NoopNotifier};
use crate::export::ExportedWorkflow;
use crate::framework::{Framework, FrameworkPicker};
use crate::inspector::{InspectorField, InspectorView};
use crate::palette::style_for;
use crate::seed;

/// Editing session for one workflow.
///
/// All gesture handlers run synchronously and leave the session in a
/// consistent state whether they succeed or fail.
pub struct Editor {
  store: GraphStore,
  selected: Option<String>,
  framework: FrameworkPicker,
  config: EditorConfig,
  clock: Arc<dyn Clock>,
  notifier: Arc<dyn EditorNotifier>,
}

impl Editor {
  /// An empty canvas.
  pub fn new(config: EditorConfig) -> Result<Self, EditorError> {
    config.validate()?;
    let framework = FrameworkPicker::new(&config.framework)
      .ok_or_else(|| EditorError::UnknownFramework(config.framework.clone()))?;

    Ok(Self {
      store: GraphStore::new(),
      selected: None,
      framework,
      config,
      clock: Arc::new(SystemClock),
      notifier: Arc::new(NoopNotifier),
    })
  }

  /// A canvas seeded with the sample research workflow.
  pub fn with_sample_workflow(config: EditorConfig) -> Result<Self, EditorError> {
    let mut editor = Self::new(config)?;
    editor.store = GraphStore::from_parts(seed::sample_nodes(), seed::sample_edges())?;
    Ok(editor)
  }

  pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
    self.clock = clock;
    self
  }

  pub fn with_notifier(mut self, notifier: Arc<dyn EditorNotifier>) -> Self {
    self.notifier = notifier;
    self
  }

  pub fn store(&self) -> &GraphStore {
    &self.store
  }

  pub fn nodes(&self) -> &[Node] {
    self.store.nodes()
  }

  pub fn edges(&self) -> &[Edge] {
    self.store.edges()
  }

  /// Mount or unmount the canvas element.
  pub fn set_canvas_bounds(&mut self, bounds: Option<CanvasBounds>) {
    self.config.canvas = bounds;
  }

  // -- canvas ----------------------------------------------------------------

  /// Handle a palette drop. Returns the new node id, or `None` when the
  /// canvas is not mounted.
  pub fn on_drop(&mut self, event: &DropEvent) -> Result<Option<String>, EditorError> {
    self.drop_node(event, None)
  }

  /// Handle a drop, using `node_id` for the new node when given. A taken
  /// `node_id` is rejected by the store rather than suffixed.
  fn drop_node(
    &mut self,
    event: &DropEvent,
    node_id: Option<String>,
  ) -> Result<Option<String>, EditorError> {
    let Some(bounds) = self.config.canvas else {
      debug!("drop ignored: canvas not mounted");
      return Ok(None);
    };

    let raw = event.node_payload().ok_or(EditorError::MissingPayload)?;
    let payload = DragPayload::decode(raw)?;
    let position = self
      .config
      .viewport
      .project(&bounds, event.client_x, event.client_y);

    let id = match node_id {
      Some(id) => id,
      None => {
        let base = format!("{}-{}", payload.kind, self.clock.now_millis());
        unique_id(base, |candidate| self.store.contains_node(candidate))
      }
    };

    let mut node = Node::new(id.clone(), payload.kind, position, &payload.label);
    node.style = Some(style_for(&node.kind));
    let kind = node.kind.to_string();
    self.store.add_node(node)?;

    self.notifier.notify(EditorEvent::NodeAdded {
      node_id: id.clone(),
      kind,
    });
    Ok(Some(id))
  }

  /// Handle a connect gesture from `source` to `target`. Returns the new edge id.
  pub fn on_connect(&mut self, source: &str, target: &str) -> Result<String, EditorError> {
    let id = unique_id(format!("edge-{source}-{target}"), |candidate| {
      self.store.contains_edge(candidate)
    });

    self.store.connect(Edge {
      id: id.clone(),
      source: source.to_string(),
      target: target.to_string(),
      animated: true,
      style: EdgeStyle::default(),
    })?;

    self.notifier.notify(EditorEvent::EdgeAdded {
      edge_id: id.clone(),
      source: source.to_string(),
      target: target.to_string(),
    });
    Ok(id)
  }

  /// Handle a click on a node.
  pub fn select_node(&mut self, node_id: &str) -> Result<(), EditorError> {
    if !self.store.contains_node(node_id) {
      return Err(GraphError::NodeNotFound(node_id.to_string()).into());
    }

    self.selected = Some(node_id.to_string());
    self.notifier.notify(EditorEvent::NodeSelected {
      node_id: self.selected.clone(),
    });
    Ok(())
  }

  /// Handle a click on the empty pane.
  pub fn clear_selection(&mut self) {
    self.selected = None;
    self
      .notifier
      .notify(EditorEvent::NodeSelected { node_id: None });
  }

  pub fn selected_node(&self) -> Option<&Node> {
    self
      .selected
      .as_deref()
      .and_then(|id| self.store.node(id))
  }

  // -- inspector -------------------------------------------------------------

  /// The properties panel for the selected node.
  pub fn inspector(&self) -> Option<InspectorView> {
    self.selected_node().map(InspectorView::for_node)
  }

  /// Write one field of the selected node. Takes effect immediately.
  ///
  /// Only fields the inspector shows for the node's kind can be written.
  pub fn set_field(&mut self, field: InspectorField, value: &str) -> Result<(), EditorError> {
    let node = self.selected_node().ok_or(EditorError::NoSelection)?;
    if !field.applies_to(&node.kind) {
      return Err(EditorError::FieldNotEditable {
        field: field.key(),
        kind: node.kind.to_string(),
      });
    }
    let node_id = node.id.clone();

    let mut data = node.data.clone();
    data.set(field.key(), value);
    self.store.update_node_data(&node_id, data)?;

    self.notifier.notify(EditorEvent::NodeUpdated {
      node_id,
      field: field.key().to_string(),
    });
    Ok(())
  }

  // -- framework -------------------------------------------------------------

  pub fn framework(&self) -> &'static Framework {
    self.framework.selected()
  }

  pub fn is_framework_picker_open(&self) -> bool {
    self.framework.is_open()
  }

  pub fn open_framework_picker(&mut self) {
    self.framework.open();
  }

  /// Tag the workflow with a framework and close the picker.
  pub fn select_framework(&mut self, id: &str) -> Result<(), EditorError> {
    let framework = self
      .framework
      .select(id)
      .ok_or_else(|| EditorError::UnknownFramework(id.to_string()))?;

    info!(framework = framework.id, "framework selected");
    self.notifier.notify(EditorEvent::FrameworkSelected {
      framework: framework.id.to_string(),
    });
    Ok(())
  }

  // -- toolbar ---------------------------------------------------------------

  /// "Run workflow". Only emits a notification.
  pub fn run_workflow(&self) {
    info!(
      framework = self.framework().id,
      nodes = self.store.nodes().len(),
      "workflow run requested"
    );
    self.notifier.notify(EditorEvent::RunRequested {
      framework: self.framework().id.to_string(),
      nodes: self.store.nodes().len(),
    });
  }

  /// Snapshot the workflow for download.
  pub fn export(&self) -> ExportedWorkflow {
    let document = WorkflowExport {
      nodes: self.store.nodes().to_vec(),
      edges: self.store.edges().to_vec(),
      framework: self.framework().id.to_string(),
    };
    let export = ExportedWorkflow::new(document, self.clock.now_millis());

    self.notifier.notify(EditorEvent::Exported {
      file_name: export.file_name.clone(),
    });
    export
  }

  // -- replay ----------------------------------------------------------------

  /// Apply one scripted gesture.
  pub fn apply(&mut self, action: EditorAction) -> Result<(), EditorError> {
    match action {
      EditorAction::Drop {
        kind,
        label,
        x,
        y,
        id,
      } => {
        let payload = DragPayload {
          kind: NodeKind::from(kind),
          label,
        };
        self.drop_node(&DropEvent::from_payload(&payload, x, y)?, id)?;
      }
      EditorAction::Connect { source, target } => {
        self.on_connect(&source, &target)?;
      }
      EditorAction::Select { node_id } => self.select_node(&node_id)?,
      EditorAction::ClearSelection => self.clear_selection(),
      EditorAction::EditField { field, value } => self.set_field(field, &value)?,
      EditorAction::OpenFrameworkPicker => self.open_framework_picker(),
      EditorAction::SelectFramework { id } => self.select_framework(&id)?,
      EditorAction::Run => self.run_workflow(),
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Editor {
    Editor::with_sample_workflow(EditorConfig::default()).unwrap()
  }

  #[test]
  fn test_sample_workflow_fans_out_and_joins() {
    let editor = sample();
    let graph = editor.store().graph();

    assert_eq!(editor.nodes().len(), 5);
    assert_eq!(editor.edges().len(), 5);
    assert_eq!(graph.entry_points(), ["1"]);
    assert_eq!(graph.downstream("2"), ["3".to_string(), "4".to_string()]);
    assert!(graph.links("5").unwrap().is_join());
    assert_eq!(editor.framework().id, "langgraph");
  }

  #[test]
  fn test_drop_without_canvas_is_ignored() {
    let mut editor = Editor::new(EditorConfig::default()).unwrap();
    editor.set_canvas_bounds(None);

    let payload = DragPayload {
      kind: NodeKind::Agent,
      label: "Planner".to_string(),
    };
    let event = DropEvent::from_payload(&payload, 10.0, 10.0).unwrap();

    assert_eq!(editor.on_drop(&event).unwrap(), None);
    assert!(editor.nodes().is_empty());
  }

  #[test]
  fn test_edit_without_selection() {
    let mut editor = sample();
    let err = editor
      .set_field(InspectorField::Label, "Renamed")
      .unwrap_err();
    assert!(matches!(err, EditorError::NoSelection));
  }

  #[test]
  fn test_edit_rejects_fields_outside_the_kind() {
    let mut editor = sample();
    editor
      .apply(EditorAction::Drop {
        kind: "success".to_string(),
        label: "Done".to_string(),
        x: 0.0,
        y: 0.0,
        id: Some("done".to_string()),
      })
      .unwrap();
    editor.select_node("done").unwrap();
    let before = editor.selected_node().unwrap().data.clone();

    for field in [InspectorField::Model, InspectorField::ToolName] {
      let err = editor.set_field(field, "calc").unwrap_err();
      assert!(
        matches!(err, EditorError::FieldNotEditable { field: key, ref kind } if key == field.key() && kind == "success")
      );
    }
    assert_eq!(editor.selected_node().unwrap().data, before);

    editor
      .set_field(InspectorField::Description, "Finished")
      .unwrap();
    assert_eq!(
      editor.selected_node().unwrap().data.get_str("description"),
      Some("Finished")
    );
  }

  #[test]
  fn test_select_unknown_node() {
    let mut editor = sample();
    let err = editor.select_node("ghost").unwrap_err();
    assert!(matches!(err, EditorError::Graph(GraphError::NodeNotFound(id)) if id == "ghost"));
    assert!(editor.selected_node().is_none());
  }

  #[test]
  fn test_clear_selection_hides_inspector() {
    let mut editor = sample();
    editor.select_node("2").unwrap();
    assert_eq!(editor.inspector().unwrap().node_id, "2");

    editor.clear_selection();
    assert!(editor.inspector().is_none());
  }

  #[test]
  fn test_scripted_drop_with_taken_id() {
    let mut editor = sample();
    let err = editor
      .apply(EditorAction::Drop {
        kind: "agent".to_string(),
        label: "Copy".to_string(),
        x: 0.0,
        y: 0.0,
        id: Some("3".to_string()),
      })
      .unwrap_err();

    assert!(matches!(err, EditorError::Graph(GraphError::DuplicateNode(id)) if id == "3"));
    assert_eq!(editor.nodes().len(), 5);
  }
}
