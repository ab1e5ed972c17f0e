//! The sample workflow a new editor session starts with: a request fanned out
//! from an analyzer to a writer and a reviewer, joined again at the response.

use agentdeck_config::{Edge, EdgeStyle, Node, NodeKind, NodeStyle, Position};

const ACCENT: &str = "hsl(217 91% 60%)";
const SURFACE: &str = "hsl(222 47% 11%)";
const OUTLINE: &str = "hsl(217 33% 20%)";
const RESULT: &str = "hsl(271 91% 65%)";

fn seed_node(
  id: &str,
  kind: NodeKind,
  (x, y): (f64, f64),
  label: &str,
  (background, border): (&str, &str),
) -> Node {
  let mut node = Node::new(id, kind, Position::new(x, y), label);
  node.style = Some(NodeStyle {
    background: background.to_string(),
    border_color: border.to_string(),
  });
  node
}

fn seed_edge(source: &str, target: &str) -> Edge {
  Edge {
    id: format!("e{source}-{target}"),
    source: source.to_string(),
    target: target.to_string(),
    animated: true,
    style: EdgeStyle {
      stroke: ACCENT.to_string(),
      ..EdgeStyle::default()
    },
  }
}

pub(crate) fn sample_nodes() -> Vec<Node> {
  let input = NodeKind::from("input");
  let output = NodeKind::from("output");

  vec![
    seed_node("1", input, (250.0, 50.0), "Start: User Request", (ACCENT, ACCENT)),
    seed_node("2", NodeKind::Default, (250.0, 150.0), "Agent: Analyzer", (SURFACE, OUTLINE)),
    seed_node("3", NodeKind::Default, (100.0, 280.0), "Agent: Writer", (SURFACE, OUTLINE)),
    seed_node("4", NodeKind::Default, (400.0, 280.0), "Agent: Reviewer", (SURFACE, OUTLINE)),
    seed_node("5", output, (250.0, 410.0), "End: Response", (RESULT, RESULT)),
  ]
}

pub(crate) fn sample_edges() -> Vec<Edge> {
  vec![
    seed_edge("1", "2"),
    seed_edge("2", "3"),
    seed_edge("2", "4"),
    seed_edge("3", "5"),
    seed_edge("4", "5"),
  ]
}
