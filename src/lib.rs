//! git-stager - an interactive terminal UI for staging and committing changes.
//!
//! The library is split into the status model ([`core`]) and the interactive
//! session that renders it and dispatches key presses ([`session`]).
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Git repository access and the [`Vcs`] engine trait
//! - Status parsing and the [`StatusModel`]
//! - Error handling and result types
//! - Configuration

pub mod core;
pub mod session;

#[cfg(test)]
mod test_utils;

// Re-export the core public API for external users
pub use crate::core::{
    // Configuration
    Config,
    // Error handling
    ErrorKind,
    // Status model
    FileEntry,
    // Git operations
    GitRepo,
    GitStatus,
    Group,
    Result,
    StagerError,
    StatusCode,
    StatusModel,
    StatusParser,
    Vcs,
};
pub use session::Session;
