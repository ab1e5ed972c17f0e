//! Agentdeck Agents
//!
//! Agent records shown on the agent-management page, and the mock run history
//! of the execution monitor. Both are independent of workflow nodes: an agent
//! node on the canvas does not reference one of these records, and editing
//! one never touches the other.

mod execution;
mod registry;
mod types;

pub use execution::{Execution, ExecutionLog, ExecutionStats, ExecutionStatus};
pub use registry::{AgentRegistry, AgentStats};
pub use types::{AGENT_MODELS, Agent, AgentStatus, DEFAULT_AGENT_MODEL, NewAgent};
