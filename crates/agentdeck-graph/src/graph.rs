use std::collections::HashMap;

use agentdeck_config::{Edge, Node};

/// Incoming and outgoing neighbours of one node, in edge order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Links {
  pub upstream: Vec<String>,
  pub downstream: Vec<String>,
}

impl Links {
  /// Nothing flows into the node.
  pub fn is_entry(&self) -> bool {
    self.upstream.is_empty()
  }

  /// More than one edge flows into the node.
  pub fn is_join(&self) -> bool {
    self.upstream.len() > 1
  }
}

/// Per-node links of a workflow snapshot, in node order.
///
/// Built on demand from the store; it does not track later edits.
#[derive(Debug, Clone, Default)]
pub struct Graph {
  links: Vec<(String, Links)>,
}

impl Graph {
  pub fn new(nodes: &[Node], edges: &[Edge]) -> Self {
    let mut links: Vec<(String, Links)> = nodes
      .iter()
      .map(|node| (node.id.clone(), Links::default()))
      .collect();
    let index: HashMap<String, usize> = links
      .iter()
      .enumerate()
      .map(|(i, (id, _))| (id.clone(), i))
      .collect();

    for edge in edges {
      if let Some(&i) = index.get(&edge.source) {
        links[i].1.downstream.push(edge.target.clone());
      }
      if let Some(&i) = index.get(&edge.target) {
        links[i].1.upstream.push(edge.source.clone());
      }
    }

    Self { links }
  }

  pub fn links(&self, node_id: &str) -> Option<&Links> {
    self
      .links
      .iter()
      .find(|(id, _)| id == node_id)
      .map(|(_, links)| links)
  }

  pub fn upstream(&self, node_id: &str) -> &[String] {
    self
      .links(node_id)
      .map(|l| l.upstream.as_slice())
      .unwrap_or(&[])
  }

  pub fn downstream(&self, node_id: &str) -> &[String] {
    self
      .links(node_id)
      .map(|l| l.downstream.as_slice())
      .unwrap_or(&[])
  }

  /// Nodes nothing flows into, in node order.
  pub fn entry_points(&self) -> Vec<&str> {
    self
      .links
      .iter()
      .filter(|(_, links)| links.is_entry())
      .map(|(id, _)| id.as_str())
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use agentdeck_config::{EdgeStyle, NodeKind, Position};

  use super::*;

  fn node(id: &str) -> Node {
    Node::new(id, NodeKind::Agent, Position::default(), id)
  }

  fn edge(source: &str, target: &str) -> Edge {
    Edge {
      id: format!("{source}->{target}"),
      source: source.to_string(),
      target: target.to_string(),
      animated: true,
      style: EdgeStyle::default(),
    }
  }

  #[test]
  fn test_fan_out_and_join() {
    let nodes = vec![node("a"), node("b"), node("c"), node("d")];
    let edges = vec![edge("a", "b"), edge("a", "c"), edge("b", "d"), edge("c", "d")];
    let graph = Graph::new(&nodes, &edges);

    assert_eq!(graph.entry_points(), ["a"]);
    assert_eq!(graph.downstream("a"), ["b".to_string(), "c".to_string()]);
    assert_eq!(graph.upstream("d"), ["b".to_string(), "c".to_string()]);

    let d = graph.links("d").unwrap();
    assert!(d.is_join());
    assert!(!d.is_entry());
    assert!(!graph.links("b").unwrap().is_join());
  }

  #[test]
  fn test_isolated_nodes_are_entry_points() {
    let graph = Graph::new(&[node("b"), node("a")], &[]);
    assert_eq!(graph.entry_points(), ["b", "a"]);
  }

  #[test]
  fn test_unknown_node_has_no_links() {
    let graph = Graph::new(&[node("a")], &[]);
    assert!(graph.links("missing").is_none());
    assert!(graph.downstream("missing").is_empty());
    assert!(graph.upstream("missing").is_empty());
  }
}
