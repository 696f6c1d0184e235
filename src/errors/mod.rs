use std::fmt::Display;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    // User declined at the confirmation gate
    #[error("Setup cancelled")]
    Cancelled,

    // File operation errors
    #[error("File operation '{operation}' failed for '{path}': {reason}")]
    FileOperation {
        path: String,
        operation: String,
        reason: String,
    },

    // Parser errors
    #[error("Parse error in {content_type}: {reason}")]
    Parse {
        content_type: String,
        reason: String,
    },

    // External tool errors (jq, git)
    #[error("'{tool}' failed: {reason}")]
    ToolFailed {
        tool: String,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SetupError {
    pub fn file_error(path: &Path, operation: &str, reason: impl Display) -> Self {
        Self::FileOperation {
            path: path.display().to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: impl Display) -> Self {
        Self::Parse {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn tool_error(tool: &str, reason: impl Display) -> Self {
        Self::ToolFailed {
            tool: tool.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Cancelled => ErrorSeverity::Low,
            Self::Parse { .. } => ErrorSeverity::Medium,
            Self::ToolFailed { .. } => ErrorSeverity::Medium,
            Self::FileOperation { .. } => ErrorSeverity::High,
            Self::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Cancelled => None,
            Self::FileOperation { .. } => Some("Check that you are running from the template root and have write permissions"),
            Self::Parse { .. } => Some("Check the format and syntax of the file"),
            Self::ToolFailed { .. } => Some("Check that the tool is installed and working, or rerun with --verbose"),
            Self::Io(_) => Some("This may require administrator intervention"),
        }
    }

    /// Every failure, including cancellation, exits with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn user_message(&self) -> String {
        match self.suggestion() {
            Some(suggestion) => format!("{}\n💡 {}", self, suggestion),
            None => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for setup operations
pub type SetupResult<T> = Result<T, SetupError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message
    pub fn handle_error(error: &SetupError) {
        let severity = error.severity();
        log::error!("[{}] {:?}", severity.name(), error);
        eprintln!("{} {}", severity.emoji(), error.user_message());
    }
}

/// Attaches the path and operation to an I/O failure.
pub trait ResultExt<T> {
    fn with_file(self, path: &Path, operation: &str) -> SetupResult<T>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
    fn with_file(self, path: &Path, operation: &str) -> SetupResult<T> {
        self.map_err(|e| SetupError::file_error(path, operation, e))
    }
}

impl From<serde_json::Error> for SetupError {
    fn from(error: serde_json::Error) -> Self {
        SetupError::parse_error("JSON", error)
    }
}

impl From<toml::de::Error> for SetupError {
    fn from(error: toml::de::Error) -> Self {
        SetupError::parse_error("TOML", error.message())
    }
}
