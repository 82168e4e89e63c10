//! Explicit session state.

use crate::core::state::FileEntry;
use std::path::PathBuf;

/// Action waiting for a y/n answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    Discard(PathBuf),
}

impl ConfirmAction {
    pub fn prompt(&self) -> String {
        match self {
            ConfirmAction::Discard(path) => {
                format!("Discard changes to {}? (y/n)", path.display())
            }
        }
    }
}

/// What the session is doing. Only `Browsing` and `Confirming` read keys; the
/// runner hands the terminal to a child process in `ViewingDiff` and
/// `Committing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Confirming(ConfirmAction),
    ViewingDiff(FileEntry),
    Committing,
    Exiting,
}
