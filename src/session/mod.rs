//! The interactive staging session.
//!
//! [`Session`] holds the model, cursor and [`Mode`] and turns key presses into
//! model mutations. It never touches the terminal: the runner performs the
//! child-process steps for `ViewingDiff` and `Committing` and reports back
//! through [`Session::finish_diff`] and [`Session::finish_commit`].
//!
//! # Public API
//! - [`Session::handle_key`]: dispatch one key press
//! - [`Session::finish_diff`], [`Session::finish_commit`]: return to browsing
//! - [`runner::run`]: terminal event loop

pub mod cursor;
pub mod external;
pub mod keymap;
pub mod mode;
pub mod render;
pub mod runner;
pub mod terminal;

use crate::core::{
    config::Config,
    error::Result,
    git::Vcs,
    git_status::Group,
    state::FileEntry,
    status_model::StatusModel,
};
use crossterm::event::{KeyCode, KeyEvent};
use cursor::{Cursor, Viewport};
use keymap::{command_for, Command};
use mode::{ConfirmAction, Mode};
use std::path::PathBuf;

/// Identity of a row across refreshes
type RowKey = (PathBuf, Group);

/// One-line message shown above the help bar until the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

pub struct Session<V: Vcs> {
    model: StatusModel<V>,
    cursor: Cursor,
    viewport: Viewport,
    mode: Mode,
    message: Option<StatusMessage>,
    branch: Option<String>,
    page_size: usize,
    confirm_discard: bool,
    pub show_branch: bool,
    pub show_help_bar: bool,
}

impl<V: Vcs> Session<V> {
    /// Start browsing a freshly loaded model
    pub fn new(model: StatusModel<V>, config: &Config) -> Self {
        let branch = model.current_branch();
        let mut session = Session {
            model,
            cursor: Cursor::default(),
            viewport: Viewport::default(),
            mode: Mode::Browsing,
            message: None,
            branch,
            page_size: 1,
            confirm_discard: config.confirm_discard,
            show_branch: config.show_branch,
            show_help_bar: config.show_help_bar,
        };
        if session.model.is_empty() {
            session.info("No changes. Working directory clean.");
        }
        session
    }

    pub fn model(&self) -> &StatusModel<V> {
        &self.model
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn selected(&self) -> usize {
        self.cursor.selected()
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.model.flattened_entries().get(self.cursor.selected())
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Rows moved by PageUp/PageDown; tracks the visible list height
    pub fn set_page_size(&mut self, rows: usize) {
        self.page_size = rows.max(1);
    }

    /// Dispatch one key press according to the current mode
    pub fn handle_key(&mut self, key: KeyEvent) {
        match &self.mode {
            Mode::Browsing => {
                self.message = None;
                if let Some(command) = command_for(&key) {
                    self.dispatch(command);
                }
            }
            Mode::Confirming(action) => {
                let action = action.clone();
                self.message = None;
                self.mode = Mode::Browsing;
                if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                    self.confirm(action);
                } else {
                    self.info("Cancelled");
                }
            }
            Mode::ViewingDiff(_) | Mode::Committing | Mode::Exiting => {}
        }
    }

    fn dispatch(&mut self, command: Command) {
        let len = self.model.len();
        let page = self.page_size as isize;
        match command {
            Command::MoveUp => self.cursor.move_by(-1, len),
            Command::MoveDown => self.cursor.move_by(1, len),
            Command::PageUp => self.cursor.move_by(-page, len),
            Command::PageDown => self.cursor.move_by(page, len),
            Command::Home => self.cursor.to_start(),
            Command::End => self.cursor.to_end(len),
            Command::Toggle => self.toggle_selected(),
            Command::StageAll => self.stage_all(),
            Command::Discard => self.request_discard(),
            Command::ViewDiff => {
                if let Some(entry) = self.selected_entry().cloned() {
                    self.mode = Mode::ViewingDiff(entry);
                }
            }
            Command::Commit => {
                if self.model.has_staged() {
                    self.mode = Mode::Committing;
                } else {
                    self.info("No files staged for commit");
                }
            }
            Command::Refresh => {
                let current = self.current_key();
                let result = self.model.refresh();
                self.report(result, "Refreshed".to_string(), current);
            }
            Command::Quit => self.mode = Mode::Exiting,
        }
    }

    fn toggle_selected(&mut self) {
        let Some(entry) = self.selected_entry().cloned() else {
            return;
        };
        // The toggled row moves to another group; the cursor goes to the row below it
        let next = self.key_at(self.cursor.selected() + 1);

        let (result, done) = match entry.group {
            Group::Staged => (self.model.unstage(&entry.path), "Unstaged"),
            Group::Unstaged | Group::Untracked => (self.model.stage(&entry.path), "Staged"),
        };
        let follow = if result.is_ok() {
            next
        } else {
            Some((entry.path.clone(), entry.group))
        };
        self.report(result, format!("{done}: {}", entry.display_path()), follow);
    }

    fn stage_all(&mut self) {
        let current = self.current_key();
        match self.model.stage_all_modified() {
            Ok(0) => self.info("No modified files to stage"),
            Ok(count) => {
                let noun = if count == 1 { "file" } else { "files" };
                self.report(Ok(()), format!("Staged {count} {noun}"), current);
            }
            Err(e) => self.report(Err(e), String::new(), current),
        }
    }

    fn request_discard(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };

        let refusal = match entry.group {
            Group::Staged => Some("Cannot discard staged changes; unstage first"),
            Group::Untracked => Some("Cannot discard an untracked file"),
            Group::Unstaged if entry.code.is_unmerged() => Some("Cannot discard an unmerged file"),
            Group::Unstaged => None,
        };
        if let Some(text) = refusal {
            self.error(text);
            return;
        }

        let action = ConfirmAction::Discard(entry.path.clone());
        if self.confirm_discard {
            self.info(&action.prompt());
            self.mode = Mode::Confirming(action);
        } else {
            self.confirm(action);
        }
    }

    fn confirm(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::Discard(path) => {
                let current = self.current_key();
                let result = self.model.discard(&path);
                self.report(result, format!("Discarded: {}", path.display()), current);
            }
        }
    }

    /// Back from the diff viewer. The model is refreshed whether or not the
    /// viewer succeeded; its error takes precedence on the status line.
    pub fn finish_diff(&mut self, result: Result<()>) {
        self.mode = Mode::Browsing;
        let current = self.current_key();
        let refreshed = self.model.refresh();
        self.report(Self::first_error(result, refreshed), String::new(), current);
    }

    /// Back from the editor with the composed message, comments already removed
    pub fn finish_commit(&mut self, message: Result<String>) {
        self.mode = Mode::Browsing;
        let current = self.current_key();
        let message = match message {
            Ok(message) => message,
            Err(e) => {
                let refreshed = self.model.refresh();
                self.report(Self::first_error(Err(e), refreshed), String::new(), current);
                return;
            }
        };

        if message.trim().is_empty() {
            log::info!("Commit aborted: empty message");
            let refreshed = self.model.refresh();
            self.report(refreshed, "Commit aborted: empty message".to_string(), current);
            return;
        }

        let result = self.model.commit(&message);
        let summary = message.lines().next().unwrap_or_default();
        self.report(result, format!("Committed: {summary}"), current);
    }

    /// Combine a child-process outcome with the refresh that followed it
    fn first_error(child: Result<()>, refreshed: Result<()>) -> Result<()> {
        match (child, refreshed) {
            (Err(e), Err(refresh_err)) => {
                log::warn!("Refresh after child process failed: {refresh_err}");
                Err(e)
            }
            (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
            (Ok(()), Ok(())) => Ok(()),
        }
    }

    /// Initial content of the commit message file
    pub fn commit_template(&self) -> String {
        let mut template = String::from(
            "\n# Please enter the commit message for your changes. Lines starting\n\
             # with '#' will be ignored, and an empty message aborts the commit.\n#\n",
        );
        if let Some(branch) = &self.branch {
            template.push_str(&format!("# On branch {branch}\n"));
        }
        template.push_str("# Changes to be committed:\n");
        for entry in self.model.entries_in(Group::Staged) {
            template.push_str(&format!(
                "#\t{:<12}{}\n",
                format!("{}:", entry.status().description()),
                entry.display_path()
            ));
        }
        template.push_str("#\n");
        template
    }

    /// Show the outcome of a model operation and put the cursor back on the
    /// `follow` row. Success text may be empty.
    fn report(&mut self, result: Result<()>, success: String, follow: Option<RowKey>) {
        match result {
            Ok(()) => {
                if !success.is_empty() {
                    log::info!("{success}");
                    self.info(&success);
                }
            }
            Err(e) => {
                log::warn!("{:?} error: {e}", e.kind());
                self.error(&format!("Error: {e}"));
            }
        }
        self.after_refresh(follow);
    }

    /// Select the `follow` row if it survived the refresh, otherwise keep the
    /// index inside the possibly shorter list
    fn after_refresh(&mut self, follow: Option<RowKey>) {
        let len = self.model.len();
        let found = follow.and_then(|(path, group)| {
            self.model
                .flattened_entries()
                .iter()
                .position(|entry| entry.group == group && entry.path == path)
        });
        match found {
            Some(index) => self.cursor.select(index, len),
            None => self.cursor.clamp(len),
        }
        self.branch = self.model.current_branch();
    }

    fn key_at(&self, index: usize) -> Option<RowKey> {
        self.model
            .flattened_entries()
            .get(index)
            .map(|entry| (entry.path.clone(), entry.group))
    }

    fn current_key(&self) -> Option<RowKey> {
        self.key_at(self.cursor.selected())
    }

    fn info(&mut self, text: &str) {
        self.message = Some(StatusMessage {
            text: text.to_string(),
            is_error: false,
        });
    }

    fn error(&mut self, text: &str) {
        self.message = Some(StatusMessage {
            text: text.to_string(),
            is_error: true,
        });
    }
}
