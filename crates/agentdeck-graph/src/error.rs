use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
  #[error("node not found: {0}")]
  NodeNotFound(String),

  #[error("node already exists: {0}")]
  DuplicateNode(String),

  #[error("edge already exists: {0}")]
  DuplicateEdge(String),

  #[error("edge references unknown node: from={from}, to={to}")]
  InvalidEdge { from: String, to: String },
}
