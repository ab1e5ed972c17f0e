use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Status of a workflow run on the execution monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
  Completed,
  Running,
  Failed,
}

impl ExecutionStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      ExecutionStatus::Completed => "completed",
      ExecutionStatus::Running => "running",
      ExecutionStatus::Failed => "failed",
    }
  }
}

impl fmt::Display for ExecutionStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

impl FromStr for ExecutionStatus {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "completed" => Ok(ExecutionStatus::Completed),
      "running" => Ok(ExecutionStatus::Running),
      "failed" => Ok(ExecutionStatus::Failed),
      other => Err(format!("unknown execution status: {other}")),
    }
  }
}

/// One workflow run as listed on the execution monitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execution {
  pub id: String,
  pub workflow: String,
  pub status: ExecutionStatus,
  /// Wall-clock start, as displayed ("10:45 AM").
  pub started_at: String,
  pub duration_secs: u64,
  /// Number of agents taking part in the run.
  pub agents: u32,
}

impl Execution {
  /// Duration in the monitor's `2m 34s` form.
  pub fn duration_label(&self) -> String {
    format!("{}m {:02}s", self.duration_secs / 60, self.duration_secs % 60)
  }
}

/// Counts per execution status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionStats {
  pub completed: usize,
  pub running: usize,
  pub failed: usize,
}

/// The mock run history behind the execution monitor. Read only: nothing in
/// the editor starts or records a run.
#[derive(Debug, Clone, Default)]
pub struct ExecutionLog {
  executions: Vec<Execution>,
}

impl ExecutionLog {
  pub fn with_sample_executions() -> Self {
    let sample = [
      ("exec_001", "Content Pipeline", ExecutionStatus::Completed, "10:45 AM", 154, 3),
      ("exec_002", "Data Processing", ExecutionStatus::Running, "10:48 AM", 72, 5),
      ("exec_003", "Report Generation", ExecutionStatus::Failed, "10:40 AM", 45, 2),
    ];

    let executions = sample
      .into_iter()
      .map(
        |(id, workflow, status, started_at, duration_secs, agents)| Execution {
          id: id.to_string(),
          workflow: workflow.to_string(),
          status,
          started_at: started_at.to_string(),
          duration_secs,
          agents,
        },
      )
      .collect();

    Self { executions }
  }

  pub fn list(&self) -> &[Execution] {
    &self.executions
  }

  pub fn get(&self, id: &str) -> Option<&Execution> {
    self.executions.iter().find(|e| e.id == id)
  }

  pub fn by_status(&self, status: ExecutionStatus) -> impl Iterator<Item = &Execution> {
    self.executions.iter().filter(move |e| e.status == status)
  }

  pub fn stats(&self) -> ExecutionStats {
    let mut stats = ExecutionStats::default();
    for execution in &self.executions {
      match execution.status {
        ExecutionStatus::Completed => stats.completed += 1,
        ExecutionStatus::Running => stats.running += 1,
        ExecutionStatus::Failed => stats.failed += 1,
      }
    }
    stats
  }
}
