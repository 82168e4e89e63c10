//! Status entry data structures.
//!
//! This module defines [`FileEntry`], one displayed row of repository status.
//! A path that is partially staged yields two entries, one per group, because the
//! two halves are mutated independently.
//!
//! # Public API
//! - [`FileEntry`]: A single status row with its code, path and derived group

use crate::core::git_status::{GitStatus, Group, StatusCode};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub code: StatusCode,
    pub path: PathBuf,
    /// Source path of a rename or copy
    pub orig_path: Option<PathBuf>,
    pub group: Group,
}

impl FileEntry {
    pub fn new(code: StatusCode, path: impl Into<PathBuf>, group: Group) -> Self {
        Self {
            code,
            path: path.into(),
            orig_path: None,
            group,
        }
    }

    pub fn with_orig_path(mut self, orig_path: Option<PathBuf>) -> Self {
        self.orig_path = orig_path;
        self
    }

    /// Change kind shown on this row
    pub fn status(&self) -> GitStatus {
        self.code
            .status_for(self.group)
            .unwrap_or(GitStatus::Modified)
    }

    /// Paths an unstage must reset so that a staged rename is fully undone
    pub fn unstage_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);
        if let Some(orig) = &self.orig_path {
            paths.push(orig.clone());
        }
        paths.push(self.path.clone());
        paths
    }

    /// Path text as shown on screen, `orig -> path` for renames
    pub fn display_path(&self) -> String {
        match &self.orig_path {
            Some(orig) => format!("{} -> {}", orig.display(), self.path.display()),
            None => self.path.display().to_string(),
        }
    }
}
