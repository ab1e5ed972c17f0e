use serde::Serialize;
use tracing::info;

use crate::types::{Agent, AgentStatus, DEFAULT_AGENT_MODEL, NewAgent};

/// Counts shown on the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AgentStats {
  pub total: usize,
  pub active: usize,
  pub idle: usize,
  pub error: usize,
}

/// In-memory agent list, in display order.
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
  agents: Vec<Agent>,
}

impl AgentRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// The sample agents the page starts with.
  pub fn with_sample_agents() -> Self {
    let sample = [
      (
        "Data Analyzer",
        "Analyst",
        AgentStatus::Active,
        "Analyzes data patterns and generates insights",
      ),
      (
        "Content Writer",
        "Creator",
        AgentStatus::Active,
        "Creates engaging content and marketing copy",
      ),
      (
        "Code Reviewer",
        "Developer",
        AgentStatus::Idle,
        "Reviews code quality and suggests improvements",
      ),
    ];

    let agents = sample
      .into_iter()
      .enumerate()
      .map(|(i, (name, role, status, description))| Agent {
        id: format!("agent-{}", i + 1),
        name: name.to_string(),
        role: role.to_string(),
        model: DEFAULT_AGENT_MODEL.to_string(),
        status,
        description: description.to_string(),
      })
      .collect();

    Self { agents }
  }

  pub fn list(&self) -> &[Agent] {
    &self.agents
  }

  pub fn get(&self, id: &str) -> Option<&Agent> {
    self.agents.iter().find(|a| a.id == id)
  }

  pub fn by_status(&self, status: AgentStatus) -> impl Iterator<Item = &Agent> {
    self.agents.iter().filter(move |a| a.status == status)
  }

  /// Agents whose name or role contains `query`, ignoring case. An empty
  /// query matches every agent.
  pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Agent> + 'a {
    let query = query.to_lowercase();
    self.agents.iter().filter(move |a| {
      a.name.to_lowercase().contains(&query) || a.role.to_lowercase().contains(&query)
    })
  }

  pub fn stats(&self) -> AgentStats {
    self
      .agents
      .iter()
      .fold(AgentStats::default(), |mut stats, agent| {
        stats.total += 1;
        match agent.status {
          AgentStatus::Active => stats.active += 1,
          AgentStatus::Idle => stats.idle += 1,
          AgentStatus::Error => stats.error += 1,
        }
        stats
      })
  }

  /// Add an agent from the create dialog. New agents start idle.
  pub fn create(&mut self, new: NewAgent) -> &Agent {
    let id = self.next_id();
    info!(agent_id = %id, name = %new.name, "agent created");

    self.agents.push(Agent {
      id,
      name: new.name,
      role: new.role,
      model: new.model,
      status: AgentStatus::Idle,
      description: new.description,
    });
    &self.agents[self.agents.len() - 1]
  }

  /// First `agent-<n>` id above every numbered id in use.
  fn next_id(&self) -> String {
    let highest = self
      .agents
      .iter()
      .filter_map(|a| a.id.strip_prefix("agent-")?.parse::<u64>().ok())
      .max()
      .unwrap_or(0);
    format!("agent-{}", highest + 1)
  }
}
