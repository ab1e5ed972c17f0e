use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
  Active,
  Idle,
  Error,
}

impl AgentStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      AgentStatus::Active => "active",
      AgentStatus::Idle => "idle",
      AgentStatus::Error => "error",
    }
  }
}

impl fmt::Display for AgentStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

impl FromStr for AgentStatus {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "active" => Ok(AgentStatus::Active),
      "idle" => Ok(AgentStatus::Idle),
      "error" => Ok(AgentStatus::Error),
      other => Err(format!("unknown agent status: {other}")),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
  pub id: String,
  pub name: String,
  pub role: String,
  pub model: String,
  pub status: AgentStatus,
  pub description: String,
}

/// Model a new agent gets when the create dialog is left untouched.
pub const DEFAULT_AGENT_MODEL: &str = "gpt-4";

/// Models offered by the create dialog.
pub const AGENT_MODELS: [&str; 4] = ["gpt-4", "gpt-3.5-turbo", "claude-3", "gemini-pro"];

fn default_model() -> String {
  DEFAULT_AGENT_MODEL.to_string()
}

/// Fields of the "create agent" dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAgent {
  pub name: String,
  pub role: String,
  #[serde(default = "default_model")]
  pub model: String,
  #[serde(default)]
  pub description: String,
}

impl NewAgent {
  pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      role: role.into(),
      ..Self::default()
    }
  }
}

impl Default for NewAgent {
  fn default() -> Self {
    Self {
      name: String::new(),
      role: String::new(),
      model: default_model(),
      description: String::new(),
    }
  }
}
