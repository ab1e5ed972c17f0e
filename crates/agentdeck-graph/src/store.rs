use agentdeck_config::{Edge, Node, NodeData};
use tracing::info;

use crate::error::GraphError;
use crate::graph::Graph;

/// Ordered node and edge lists of the workflow being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphStore {
  nodes: Vec<Node>,
  edges: Vec<Edge>,
}

impl GraphStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a store from seed lists, checking the same invariants as the
  /// individual mutations.
  pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
    let mut store = Self::new();
    for node in nodes {
      store.add_node(node)?;
    }
    for edge in edges {
      store.connect(edge)?;
    }
    Ok(store)
  }

  pub fn nodes(&self) -> &[Node] {
    &self.nodes
  }

  pub fn edges(&self) -> &[Edge] {
    &self.edges
  }

  pub fn node(&self, node_id: &str) -> Option<&Node> {
    self.nodes.iter().find(|n| n.id == node_id)
  }

  pub fn contains_node(&self, node_id: &str) -> bool {
    self.node(node_id).is_some()
  }

  pub fn contains_edge(&self, edge_id: &str) -> bool {
    self.edges.iter().any(|e| e.id == edge_id)
  }

  /// Append a node. Ids must be unique within the workflow.
  pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
    if self.contains_node(&node.id) {
      return Err(GraphError::DuplicateNode(node.id));
    }

    info!(node_id = %node.id, kind = %node.kind, "node added");
    self.nodes.push(node);
    Ok(())
  }

  /// Replace the attribute map of a node. Nothing else about the node changes.
  pub fn update_node_data(&mut self, node_id: &str, data: NodeData) -> Result<(), GraphError> {
    let node = self
      .nodes
      .iter_mut()
      .find(|n| n.id == node_id)
      .ok_or_else(|| GraphError::NodeNotFound(node_id.to_string()))?;

    node.data = data;
    Ok(())
  }

  /// Append an edge between two existing nodes. Edge ids must be unique.
  ///
  /// Cycles and parallel edges are allowed.
  pub fn connect(&mut self, edge: Edge) -> Result<(), GraphError> {
    if self.contains_edge(&edge.id) {
      return Err(GraphError::DuplicateEdge(edge.id));
    }
    if !self.contains_node(&edge.source) || !self.contains_node(&edge.target) {
      return Err(GraphError::InvalidEdge {
        from: edge.source,
        to: edge.target,
      });
    }

    info!(
      edge_id = %edge.id,
      source = %edge.source,
      target = %edge.target,
      "edge added"
    );
    self.edges.push(edge);
    Ok(())
  }

  /// Build the adjacency view of the current state.
  pub fn graph(&self) -> Graph {
    Graph::new(&self.nodes, &self.edges)
  }
}
