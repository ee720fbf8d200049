//! Error types for toolbox
//!
//! Centralized error handling using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code for a failed command or a configuration problem
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for an unknown command, same as clap's usage errors
pub const EXIT_COMMAND_NOT_FOUND: i32 = 2;

/// All error types that can occur in toolbox
#[derive(Debug, Error)]
pub enum ToolboxError {
    /// A tools file is missing or cannot be opened
    #[error("Tools file not readable: {}", .path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tools file is not valid JSON or misses required fields
    #[error("Malformed tools file {}: {detail}", .path.display())]
    ConfigMalformed { path: PathBuf, detail: String },

    /// Requested command is not registered
    #[error("Command \"{name}\" is not defined. Available commands: {}", .known.join(", "))]
    CommandNotFound { name: String, known: Vec<String> },

    /// An environment variable holds a value that cannot be used
    #[error("Environment variable {name} is not valid UTF-8: {value}")]
    InvalidEnvironment { name: &'static str, value: String },

    /// The command registration table is inconsistent
    #[error("Invalid command registration: {0}")]
    InvalidCommand(String),

    /// A command ran but did not succeed
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolboxError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandNotFound { .. } => EXIT_COMMAND_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }
}

/// Result type alias for toolbox operations
pub type Result<T> = std::result::Result<T, ToolboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_error() {
        let err = ToolboxError::ConfigNotFound {
            path: PathBuf::from("/nonexistent.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.to_string(), "Tools file not readable: /nonexistent.json");
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("No such file or directory"));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_config_malformed_error() {
        let err = ToolboxError::ConfigMalformed {
            path: PathBuf::from("tools.json"),
            detail: "missing field `id`".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed tools file tools.json: missing field `id`");
    }

    #[test]
    fn test_command_not_found_error() {
        let err = ToolboxError::CommandNotFound {
            name: "frobnicate".to_string(),
            known: vec!["install".to_string(), "list".to_string(), "test".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Command \"frobnicate\" is not defined. Available commands: install, list, test"
        );
        assert_eq!(err.exit_code(), EXIT_COMMAND_NOT_FOUND);
    }

    #[test]
    fn test_invalid_environment_error() {
        let err = ToolboxError::InvalidEnvironment {
            name: "TOOLBOX_JSON",
            value: "/tools\u{FFFD}.json".to_string(),
        };
        assert!(err.to_string().starts_with("Environment variable TOOLBOX_JSON is not valid UTF-8"));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_command_failed_error() {
        let err = ToolboxError::CommandFailed("2 tools are missing".to_string());
        assert_eq!(err.to_string(), "Command failed: 2 tools are missing");
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ToolboxError = io_err.into();
        assert!(matches!(err, ToolboxError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
