//! Type-safe git status codes and their group classification.
//!
//! `git status --porcelain` reports a two-character code per path: the index
//! state (X) followed by the worktree state (Y). This module turns that pair into
//! typed values and derives the [`Group`] rows a path belongs to.
//!
//! # Public API
//! - [`GitStatus`]: The kind of change on one side of the code pair
//! - [`StatusCode`]: The raw `XY` pair as reported by git
//! - [`Group`]: Staged / Unstaged / Untracked classification, in display order
//!
//! Grouping is a pure function of the code. Nothing here is cached or tracked
//! between refreshes.

use std::fmt;

/// Kind of change reported on one side of a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitStatus {
    /// Modified file (M)
    Modified,
    /// Added/new file in index (A)
    Added,
    /// Deleted file (D)
    Deleted,
    /// Renamed file (R)
    Renamed,
    /// Copied file (C)
    Copied,
    /// Type changed (T)
    TypeChanged,
    /// Untracked file (??)
    Untracked,
    /// Unmerged/conflicted file (U and the DD/AA family)
    Unmerged,
}

impl GitStatus {
    /// Map a single porcelain code letter to a change kind.
    /// Space, `!` and unknown letters have no change kind.
    pub fn from_code_char(c: char) -> Option<GitStatus> {
        match c {
            'M' => Some(GitStatus::Modified),
            'A' => Some(GitStatus::Added),
            'D' => Some(GitStatus::Deleted),
            'R' => Some(GitStatus::Renamed),
            'C' => Some(GitStatus::Copied),
            'T' => Some(GitStatus::TypeChanged),
            'U' => Some(GitStatus::Unmerged),
            '?' => Some(GitStatus::Untracked),
            _ => None,
        }
    }

    /// Get the single-letter representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GitStatus::Modified => "M",
            GitStatus::Added => "A",
            GitStatus::Deleted => "D",
            GitStatus::Renamed => "R",
            GitStatus::Copied => "C",
            GitStatus::TypeChanged => "T",
            GitStatus::Untracked => "??",
            GitStatus::Unmerged => "UU",
        }
    }

    /// Get human-readable description for status
    pub fn description(&self) -> &'static str {
        match self {
            GitStatus::Modified => "modified",
            GitStatus::Added => "new file",
            GitStatus::Deleted => "deleted",
            GitStatus::Renamed => "renamed",
            GitStatus::Copied => "copied",
            GitStatus::TypeChanged => "typechange",
            GitStatus::Untracked => "untracked",
            GitStatus::Unmerged => "unmerged",
        }
    }
}

impl fmt::Display for GitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display group of a status entry. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    Staged,
    Unstaged,
    Untracked,
}

impl Group {
    /// All groups in the fixed display order
    pub const ALL: [Group; 3] = [Group::Staged, Group::Unstaged, Group::Untracked];

    /// Section heading shown above the group's entries
    pub fn title(&self) -> &'static str {
        match self {
            Group::Staged => "Changes to be committed",
            Group::Unstaged => "Changes not staged for commit",
            Group::Untracked => "Untracked files",
        }
    }
}

/// The raw two-character `XY` status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode {
    pub index: char,
    pub worktree: char,
}

const INDEX_ALPHABET: &str = " MTADRCU?!";
const WORKTREE_ALPHABET: &str = " MTADRCU?!";

impl StatusCode {
    /// Build a code from its two characters, rejecting letters outside the
    /// porcelain alphabet.
    pub fn new(index: char, worktree: char) -> Option<StatusCode> {
        if INDEX_ALPHABET.contains(index) && WORKTREE_ALPHABET.contains(worktree) {
            Some(StatusCode { index, worktree })
        } else {
            None
        }
    }

    /// Parse the first two characters of a porcelain line
    pub fn parse(code: &str) -> Option<StatusCode> {
        let mut chars = code.chars();
        let index = chars.next()?;
        let worktree = chars.next()?;
        StatusCode::new(index, worktree)
    }

    pub fn is_untracked(&self) -> bool {
        self.index == '?' && self.worktree == '?'
    }

    pub fn is_ignored(&self) -> bool {
        self.index == '!' && self.worktree == '!'
    }

    /// Both-sides conflict codes: DD, AU, UD, UA, DU, AA, UU
    pub fn is_unmerged(&self) -> bool {
        matches!(
            (self.index, self.worktree),
            ('D', 'D') | ('A', 'U') | ('U', 'D') | ('U', 'A') | ('D', 'U') | ('A', 'A') | ('U', 'U')
        )
    }

    /// Either side carries a rename or copy, so the line has an `orig -> path` form
    pub fn has_orig_path(&self) -> bool {
        matches!(self.index, 'R' | 'C') || matches!(self.worktree, 'R' | 'C')
    }

    /// Change kind recorded in the index, if any
    pub fn staged_status(&self) -> Option<GitStatus> {
        if self.is_untracked() || self.is_ignored() || self.is_unmerged() {
            return None;
        }
        match self.index {
            'M' | 'T' | 'A' | 'D' | 'R' | 'C' => GitStatus::from_code_char(self.index),
            _ => None,
        }
    }

    /// Change kind present only in the worktree, if any
    pub fn unstaged_status(&self) -> Option<GitStatus> {
        if self.is_unmerged() {
            return Some(GitStatus::Unmerged);
        }
        if self.is_untracked() || self.is_ignored() {
            return None;
        }
        match self.worktree {
            'M' | 'T' | 'D' | 'R' | 'C' | 'A' => GitStatus::from_code_char(self.worktree),
            _ => None,
        }
    }

    /// Every group this code places a row in, in display order.
    /// An empty result means the code does not describe a visible change.
    pub fn groups(&self) -> Vec<Group> {
        if self.is_untracked() {
            return vec![Group::Untracked];
        }
        let mut groups = Vec::with_capacity(2);
        if self.staged_status().is_some() {
            groups.push(Group::Staged);
        }
        if self.unstaged_status().is_some() {
            groups.push(Group::Unstaged);
        }
        groups
    }

    /// Change kind shown on the row for `group`
    pub fn status_for(&self, group: Group) -> Option<GitStatus> {
        match group {
            Group::Staged => self.staged_status(),
            Group::Unstaged => self.unstaged_status(),
            Group::Untracked => self.is_untracked().then_some(GitStatus::Untracked),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.index, self.worktree)
    }
}
