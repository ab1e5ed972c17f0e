use serde::Serialize;

/// An agent framework the workflow can be tagged with.
///
/// The tag is a label only; it does not change how the graph is edited.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Framework {
  pub id: &'static str,
  pub name: &'static str,
  /// Icon name in the dashboard's icon set.
  pub icon: &'static str,
  pub description: &'static str,
  /// Tile color, as a CSS color.
  pub color: &'static str,
}

pub static FRAMEWORKS: [Framework; 4] = [
  Framework {
    id: "langgraph",
    name: "LangGraph",
    icon: "network",
    description: "Build stateful multi-agent workflows",
    color: "hsl(217 91% 60%)",
  },
  Framework {
    id: "crewai",
    name: "CrewAI",
    icon: "users",
    description: "Role-based agent collaboration",
    color: "hsl(271 91% 65%)",
  },
  Framework {
    id: "autogen",
    name: "AutoGen",
    icon: "workflow",
    description: "Conversational agent framework",
    color: "hsl(142 76% 36%)",
  },
  Framework {
    id: "semantic",
    name: "Semantic Kernel",
    icon: "boxes",
    description: "Enterprise AI orchestration",
    color: "hsl(48 96% 53%)",
  },
];

pub fn find(id: &str) -> Option<&'static Framework> {
  FRAMEWORKS.iter().find(|f| f.id == id)
}

/// Selection state of the framework picker dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkPicker {
  selected: &'static Framework,
  open: bool,
}

impl FrameworkPicker {
  /// Start closed with `id` selected. Returns `None` for ids outside the catalog.
  pub fn new(id: &str) -> Option<Self> {
    find(id).map(|selected| Self {
      selected,
      open: false,
    })
  }

  pub fn selected(&self) -> &'static Framework {
    self.selected
  }

  pub fn is_open(&self) -> bool {
    self.open
  }

  pub fn open(&mut self) {
    self.open = true;
  }

  /// Store the selection and close the picker. Unknown ids leave the
  /// picker untouched.
  pub fn select(&mut self, id: &str) -> Option<&'static Framework> {
    let framework = find(id)?;
    self.selected = framework;
    self.open = false;
    Some(framework)
  }
}
