//! Agentdeck Graph
//!
//! This crate holds the graph state of the workflow being edited: the ordered
//! node list and edge list. It is the only place nodes and edges are mutated.
//!
//! The store supports exactly three mutations:
//! - append a node
//! - replace a node's attribute map by id
//! - append an edge between two existing nodes
//!
//! There is no removal. Attribute values are not validated; which fields a
//! node kind exposes is decided by the inspector, not here.

mod error;
mod graph;
mod store;

pub use error::GraphError;
pub use graph::{Graph, Links};
pub use store::GraphStore;
