pub const DEFAULT_PROJECT_NAME: &str = "my-ai-project";
pub const DEFAULT_DESCRIPTION: &str = "An AI-assisted development project";
pub const DEFAULT_AUTHOR_NAME: &str = "Your Name";
pub const DEFAULT_AUTHOR_EMAIL: &str = "your.email@example.com";

pub const MANIFEST_FILE: &str = "package.json";
pub const README_FILE: &str = "README.md";
pub const REQUIREMENTS_FILE: &str = "requirements.txt";
pub const GIT_DIR: &str = ".git";

pub const CONFIG_DIR_NAME: &str = "template-setup";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Values shipped in the template's package.json; the text fallback matches on these.
pub const TEMPLATE_MANIFEST_NAME: &str = "ai-project-template";
pub const TEMPLATE_MANIFEST_DESCRIPTION: &str = "Template for AI-assisted development projects";
pub const TEMPLATE_MANIFEST_AUTHOR: &str = "Your Name <your.email@example.com>";

pub const PROJECT_DIRECTORIES: &[&str] = &[
    "docs",
    "data",
    "models",
    "deployment",
    "testing",
    "assets",
    "archive",
    "issues",
];

pub const PYTHON_REQUIREMENTS: &[&str] = &[
    "numpy>=1.24.0",
    "pandas>=2.0.0",
    "scikit-learn>=1.3.0",
    "matplotlib>=3.7.0",
    "jupyter>=1.0.0",
    "python-dotenv>=1.0.0",
    "pytest>=7.4.0",
    "black>=23.0.0",
    "flake8>=6.0.0",
];

pub const NODE_API_REMOVED_SCRIPTS: &[&str] = &["dev:frontend", "build:frontend"];

pub const JQ_BINARY: &str = "jq";
pub const GIT_BINARY: &str = "git";
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from project template";

pub const SEPARATOR_WIDTH: usize = 50;
