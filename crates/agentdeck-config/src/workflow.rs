use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::node::Node;

/// Snapshot of the edited workflow, as written to an export file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowExport {
  pub nodes: Vec<Node>,
  pub edges: Vec<Edge>,
  pub framework: String,
}

impl WorkflowExport {
  /// File name of an export taken at `epoch_millis`.
  pub fn file_name(epoch_millis: i64) -> String {
    format!("workflow-{epoch_millis}.json")
  }
}
