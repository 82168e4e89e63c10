//! Core functionality for git-stager.
//!
//! This module provides the fundamental building blocks: git access, status
//! parsing, the status model, error handling and configuration.

pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod git_status;
pub mod output;
pub mod state;
pub mod status_model;
pub mod status_parser;

// === Error handling ===
pub use error::{ErrorKind, Result, StagerError};

// === Git operations ===
// Engine trait and the `git` CLI implementation
pub use git::{GitRepo, Vcs};

// === Git status types ===
pub use git_status::{GitStatus, Group, StatusCode};

// === Status model ===
pub use state::FileEntry;
pub use status_model::StatusModel;
pub use status_parser::StatusParser;

// === Configuration ===
pub use config::Config;

// === Output formatting ===
pub use output::print_error;
