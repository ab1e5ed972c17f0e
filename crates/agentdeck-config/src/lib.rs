//! Agentdeck Config
//!
//! This crate contains the serializable records of an agentdeck workflow:
//! the nodes and edges drawn on the canvas, the drag payload carried from the
//! palette, and the export document written on demand.
//!
//! The JSON shapes match what the canvas produces:
//!
//! ```json
//! {
//!   "nodes": [
//!     { "id": "agent-1", "type": "agent", "position": { "x": 80, "y": 40 },
//!       "data": { "label": "Researcher", "model": "openai/gpt-5" } }
//!   ],
//!   "edges": [
//!     { "id": "edge-agent-1-tool-1", "source": "agent-1", "target": "tool-1",
//!       "animated": true, "style": { "stroke": "#6366f1", "strokeWidth": 2.0 } }
//!   ],
//!   "framework": "langgraph"
//! }
//! ```

mod edge;
mod kind;
mod node;
mod payload;
mod workflow;

pub use edge::{Edge, EdgeStyle};
pub use kind::NodeKind;
pub use node::{Node, NodeData, NodeStyle, Position};
pub use payload::{DRAG_MIME_TYPE, DragPayload};
pub use workflow::WorkflowExport;
