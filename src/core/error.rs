//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`StagerError`], the single error type used by every
//! git-stager operation. It uses `thiserror` for ergonomic error definitions and
//! exposes [`ErrorKind`] so callers can tell a recoverable failure from a fatal one.
//!
//! # Public API
//! - [`StagerError`]: Main error enum covering all failure modes
//! - [`ErrorKind`]: Query / Action / Environment classification
//! - [`Result<T>`]: Type alias for `std::result::Result<T, StagerError>`
//!
//! # Error Categories
//! - **Query**: the status query could not run or reported failure
//! - **Action**: a stage, unstage, discard, commit, diff or editor invocation failed
//! - **Environment**: not inside a repository, `git` missing, unreadable configuration

use std::path::PathBuf;
use thiserror::Error;

/// How a failure should be handled by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Repository state could not be determined. Recovered in the loop.
    Query,
    /// A requested mutation or external action failed. Recovered in the loop.
    Action,
    /// The tool cannot work here at all. Fatal at startup.
    Environment,
}

/// Domain-specific error types for git-stager
#[derive(Error, Debug)]
pub enum StagerError {
    // Environment errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Repository has no working directory")]
    NoWorkingDirectory,

    #[error("Required tool '{tool}' was not found in PATH")]
    ToolNotFound { tool: String },

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Query errors
    #[error("git status failed: {message}")]
    StatusQueryFailed { message: String },

    // Action errors
    #[error("git {action} failed: {message}")]
    ActionFailed { action: String, message: String },

    #[error("Editor '{editor}' exited with {status}")]
    EditorFailed { editor: String, status: String },

    #[error("No editor command configured")]
    NoEditor,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using StagerError
pub type Result<T> = std::result::Result<T, StagerError>;

impl StagerError {
    /// Classify the error along the Query / Action / Environment taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            StagerError::NotInGitRepo
            | StagerError::NoWorkingDirectory
            | StagerError::ToolNotFound { .. }
            | StagerError::GitRepo(_)
            | StagerError::ConfigReadFailed { .. }
            | StagerError::ConfigParseFailed { .. } => ErrorKind::Environment,
            StagerError::StatusQueryFailed { .. } => ErrorKind::Query,
            StagerError::ActionFailed { .. }
            | StagerError::EditorFailed { .. }
            | StagerError::NoEditor
            | StagerError::Io(_) => ErrorKind::Action,
        }
    }

    /// Create a status query error
    pub fn query(message: impl Into<String>) -> Self {
        Self::StatusQueryFailed {
            message: message.into(),
        }
    }

    /// Create an action error for a named git operation
    pub fn action(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ActionFailed {
            action: action.into(),
            message: message.into(),
        }
    }

    /// Create a tool not found error
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create an editor failure error
    pub fn editor_failed(editor: impl Into<String>, status: impl ToString) -> Self {
        Self::EditorFailed {
            editor: editor.into(),
            status: status.to_string(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }
}
