//! The authoritative view of repository status.
//!
//! [`StatusModel`] is rebuilt from the status query after every mutation and is
//! never edited in place. A failed query or action leaves the previous entries
//! untouched.
//!
//! # Public API
//! - [`StatusModel::load`]: initial refresh at session start
//! - [`StatusModel::refresh`], [`StatusModel::stage`], [`StatusModel::unstage`]
//! - [`StatusModel::stage_all_modified`], [`StatusModel::discard`], [`StatusModel::commit`]
//! - [`StatusModel::flattened_entries`]: rows in display order

use crate::core::{
    error::Result,
    git::Vcs,
    git_status::Group,
    state::FileEntry,
    status_parser::StatusParser,
};
use std::path::{Path, PathBuf};

pub struct StatusModel<V: Vcs> {
    vcs: V,
    entries: Vec<FileEntry>,
}

impl<V: Vcs> StatusModel<V> {
    /// Create the model and run the initial refresh
    pub fn load(vcs: V) -> Result<Self> {
        let mut model = StatusModel {
            vcs,
            entries: Vec::new(),
        };
        model.refresh()?;
        Ok(model)
    }

    /// Re-run the status query and replace all entries.
    /// On failure the previous entries are kept.
    pub fn refresh(&mut self) -> Result<()> {
        let output = self.vcs.status()?;
        self.entries = StatusParser::parse(&output);
        log::debug!("Refreshed status: {} entries", self.entries.len());
        Ok(())
    }

    /// Stage the worktree state of `path`
    pub fn stage(&mut self, path: &Path) -> Result<()> {
        self.vcs.stage(&[path.to_path_buf()])?;
        self.refresh()
    }

    /// Unstage `path`. A staged rename is undone on both of its paths.
    pub fn unstage(&mut self, path: &Path) -> Result<()> {
        let paths = self
            .entries
            .iter()
            .find(|entry| entry.group == Group::Staged && entry.path == path)
            .map(FileEntry::unstage_paths)
            .unwrap_or_else(|| vec![path.to_path_buf()]);

        self.vcs.unstage(&paths)?;
        self.refresh()
    }

    /// Stage every path with worktree changes in one invocation.
    /// Returns how many paths were staged.
    pub fn stage_all_modified(&mut self) -> Result<usize> {
        let paths: Vec<PathBuf> = self
            .entries_in(Group::Unstaged)
            .map(|entry| entry.path.clone())
            .collect();

        if paths.is_empty() {
            return Ok(0);
        }

        self.vcs.stage(&paths)?;
        self.refresh()?;
        Ok(paths.len())
    }

    /// Throw away worktree changes of `path`
    pub fn discard(&mut self, path: &Path) -> Result<()> {
        self.vcs.discard(&[path.to_path_buf()])?;
        self.refresh()
    }

    /// Commit the index with `message`
    pub fn commit(&mut self, message: &str) -> Result<()> {
        self.vcs.commit(message)?;
        self.refresh()
    }

    /// All rows, Staged then Unstaged then Untracked, each group in reported order
    pub fn flattened_entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn entries_in(&self, group: Group) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(move |entry| entry.group == group)
    }

    pub fn count(&self, group: Group) -> usize {
        self.entries_in(group).count()
    }

    pub fn has_staged(&self) -> bool {
        self.count(Group::Staged) > 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_branch(&self) -> Option<String> {
        self.vcs.current_branch()
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }
}
