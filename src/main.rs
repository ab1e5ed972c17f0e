use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use agentdeck_agents::{AgentRegistry, AgentStatus, ExecutionLog, ExecutionStatus};
use agentdeck_editor::{
  ChannelNotifier, Editor, EditorAction, EditorConfig, EditorEvent, ExportedWorkflow, FRAMEWORKS,
  PALETTE,
};

/// Agentdeck - configure AI agents and compose them into workflows
#[derive(Parser)]
#[command(name = "agentdeck")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to an editor config file (JSON)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// List the node palette
  Palette,

  /// List the available frameworks
  Frameworks,

  /// List agents and their status counts
  Agents {
    /// Only show agents with this status (active, idle, error)
    #[arg(long)]
    status: Option<AgentStatus>,

    /// Only show agents whose name or role contains this text
    #[arg(long)]
    search: Option<String>,
  },

  /// List recent workflow runs
  Executions {
    /// Only show runs with this status (completed, running, failed)
    #[arg(long)]
    status: Option<ExecutionStatus>,
  },

  /// Replay an editor script on the sample workflow and export the result
  Export {
    /// JSON array of editor actions to apply before exporting
    #[arg(long)]
    script: Option<PathBuf>,

    /// Framework to tag the workflow with
    #[arg(long)]
    framework: Option<String>,

    /// Directory to write the export into (default: the download directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,
  },

  /// Show the inspector fields of a node
  Inspect {
    /// The node ID to inspect
    #[arg(long)]
    node: String,

    /// JSON array of editor actions to apply first
    #[arg(long)]
    script: Option<PathBuf>,
  },
}

fn main() -> Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();

  let cli = Cli::parse();
  let config = load_config(cli.config.as_deref())?;

  match cli.command {
    Some(Commands::Palette) => print_palette(),
    Some(Commands::Frameworks) => print_frameworks(),
    Some(Commands::Agents { status, search }) => print_agents(status, search.as_deref()),
    Some(Commands::Executions { status }) => print_executions(status),
    Some(Commands::Export {
      script,
      framework,
      out_dir,
    }) => {
      let rt = tokio::runtime::Runtime::new()?;
      rt.block_on(export(config, script, framework, out_dir))?;
    }
    Some(Commands::Inspect { node, script }) => inspect(config, &node, script)?,
    None => {
      println!("agentdeck - use --help to see available commands");
    }
  }

  Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
  let Some(path) = path else {
    return Ok(EditorConfig::default());
  };

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read config file: {}", path.display()))?;
  EditorConfig::from_json(&content)
    .with_context(|| format!("failed to parse config file: {}", path.display()))
}

fn print_palette() {
  for item in &PALETTE {
    println!("{:<10} {:<14} {}", item.kind, item.label, item.color);
  }
}

fn print_frameworks() {
  for framework in &FRAMEWORKS {
    println!(
      "{:<10} {:<16} {:<18} {}",
      framework.id, framework.name, framework.color, framework.description
    );
  }
}

fn print_agents(status: Option<AgentStatus>, search: Option<&str>) {
  let registry = AgentRegistry::with_sample_agents();
  let stats = registry.stats();

  println!(
    "{} agents: {} active, {} idle, {} error",
    stats.total, stats.active, stats.idle, stats.error
  );
  for agent in registry
    .search(search.unwrap_or_default())
    .filter(|a| status.is_none_or(|s| a.status == s))
  {
    println!(
      "{:<8} {:<16} {:<10} {:<7} {:<7} {}",
      agent.id, agent.name, agent.role, agent.model, agent.status, agent.description
    );
  }
}

fn print_executions(status: Option<ExecutionStatus>) {
  let log = ExecutionLog::with_sample_executions();
  let stats = log.stats();

  println!(
    "{} completed, {} running, {} failed",
    stats.completed, stats.running, stats.failed
  );
  for execution in log
    .list()
    .iter()
    .filter(|e| status.is_none_or(|s| e.status == s))
  {
    println!(
      "{:<9} {:<18} {:<9} {:<8} {:<7} {} agents",
      execution.id,
      execution.workflow,
      execution.status,
      execution.started_at,
      execution.duration_label(),
      execution.agents
    );
  }
}

/// An editor on the sample workflow together with the notifications it has
/// sent and nobody has read yet.
struct Session {
  editor: Editor,
  events: mpsc::UnboundedReceiver<EditorEvent>,
}

impl Session {
  /// Build the sample session and replay `script` on it.
  fn start(config: EditorConfig, script: Option<&Path>) -> Result<Self> {
    let (sender, events) = mpsc::unbounded_channel();
    let mut editor = Editor::with_sample_workflow(config)
      .context("failed to load sample workflow")?
      .with_notifier(Arc::new(ChannelNotifier::new(sender)));

    if let Some(path) = script {
      let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script file: {}", path.display()))?;
      let actions = EditorAction::parse_script(&content)
        .with_context(|| format!("failed to parse script file: {}", path.display()))?;

      for (index, action) in actions.into_iter().enumerate() {
        editor
          .apply(action)
          .with_context(|| format!("script action {index} failed"))?;
      }
    }

    Ok(Self { editor, events })
  }

  /// Tag the workflow with `framework` when given and snapshot it.
  fn snapshot(&mut self, framework: Option<&str>) -> Result<ExportedWorkflow> {
    if let Some(id) = framework {
      self
        .editor
        .select_framework(id)
        .with_context(|| format!("failed to select framework '{}'", id))?;
    }
    Ok(self.editor.export())
  }

  /// Everything notified since the last drain, in order.
  fn drain_events(&mut self) -> Vec<EditorEvent> {
    let mut drained = Vec::new();
    while let Ok(event) = self.events.try_recv() {
      drained.push(event);
    }
    drained
  }
}

async fn export(
  config: EditorConfig,
  script: Option<PathBuf>,
  framework: Option<String>,
  out_dir: Option<PathBuf>,
) -> Result<()> {
  let mut session = Session::start(config, script.as_deref())?;
  let exported = session.snapshot(framework.as_deref())?;
  for event in session.drain_events() {
    eprintln!("{}", event.message());
  }

  let out_dir = out_dir
    .or_else(dirs::download_dir)
    .unwrap_or_else(|| PathBuf::from("."));

  let path = exported
    .write_to(&out_dir)
    .await
    .with_context(|| format!("failed to write export to {}", out_dir.display()))?;

  let graph = session.editor.store().graph();
  eprintln!(
    "Exported {} nodes and {} edges ({}), starting at {}",
    exported.document.nodes.len(),
    exported.document.edges.len(),
    exported.document.framework,
    graph.entry_points().join(", ")
  );
  println!("{}", path.display());

  Ok(())
}

fn inspect(config: EditorConfig, node_id: &str, script: Option<PathBuf>) -> Result<()> {
  let mut session = Session::start(config, script.as_deref())?;
  let editor = &mut session.editor;
  editor
    .select_node(node_id)
    .with_context(|| format!("node '{}' not found in workflow", node_id))?;

  let view = editor
    .inspector()
    .context("inspector has no selected node")?;
  let graph = editor.store().graph();
  let links = graph.links(node_id).cloned().unwrap_or_default();

  println!("{} ({})", view.node_id, view.kind);
  for (field, value) in &view.fields {
    println!("  {:<12} {}", field.key(), value);
  }
  println!("  upstream:    {}", links.upstream.join(", "));
  println!("  downstream:  {}", links.downstream.join(", "));
  if links.is_entry() {
    println!("  entry point");
  }
  if links.is_join() {
    println!("  joins {} branches", links.upstream.len());
  }

  Ok(())
}
