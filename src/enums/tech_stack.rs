use std::fmt;
use std::str::FromStr;
use serde::Deserialize;

/// The five fixed presets a template can be customized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TechStack {
    #[default]
    Node,        // Node.js full stack
    Python,      // Python with the data science requirements
    NodeApi,     // Node.js backend without frontend scripts
    PythonOnly,  // Python without extra files
    Custom,      // Leave the stack to the user
}

impl TechStack {
    pub const ALL: [Self; 5] = [
        Self::Node,
        Self::Python,
        Self::NodeApi,
        Self::PythonOnly,
        Self::Custom,
    ];

    /// Maps a menu selection to a preset. Anything outside `1`-`5`
    /// (including blank or non-numeric input) falls back to `Node`.
    pub fn from_choice(input: &str) -> Self {
        match input {
            "1" => Self::Node,
            "2" => Self::Python,
            "3" => Self::NodeApi,
            "4" => Self::PythonOnly,
            "5" => Self::Custom,
            _ => Self::default(),
        }
    }

    pub fn choice(self) -> u8 {
        match self {
            Self::Node => 1,
            Self::Python => 2,
            Self::NodeApi => 3,
            Self::PythonOnly => 4,
            Self::Custom => 5,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Python => "python",
            Self::NodeApi => "node-api",
            Self::PythonOnly => "python-only",
            Self::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Node => "Node.js + TypeScript",
            Self::Python => "Python + Node.js tooling",
            Self::NodeApi => "Node.js API",
            Self::PythonOnly => "Python only",
            Self::Custom => "Custom",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Node => "Full-stack JavaScript/TypeScript project",
            Self::Python => "Python project with data science requirements",
            Self::NodeApi => "Backend service without frontend scripts",
            Self::PythonOnly => "Python project, no extra files generated",
            Self::Custom => "Configure the stack yourself",
        }
    }

    pub fn writes_requirements(self) -> bool {
        matches!(self, Self::Python)
    }
}

impl fmt::Display for TechStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Strict parsing used by `--tech-stack`: accepts a menu number or a preset key.
impl FromStr for TechStack {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stack| s == stack.choice().to_string() || s.eq_ignore_ascii_case(stack.key()))
            .ok_or_else(|| {
                let keys: Vec<&str> = Self::ALL.iter().map(|stack| stack.key()).collect();
                format!("unknown tech stack '{}' (expected 1-5 or one of: {})", s, keys.join(", "))
            })
    }
}
