//! In-memory version-control engine for unit tests.

use crate::core::error::{Result, StagerError};
use crate::core::git::Vcs;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::PathBuf;

/// One recorded engine invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeCall {
    Status,
    Stage(Vec<PathBuf>),
    Unstage(Vec<PathBuf>),
    Discard(Vec<PathBuf>),
    Commit(String),
}

/// Encode status text written one entry per line, renames as `orig -> path`,
/// the way `git status --porcelain=v1 -z` reports it
pub fn nul_records(text: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for line in text.lines().filter(|line| !line.is_empty()) {
        let (code, paths) = line.split_at(3);
        out.extend_from_slice(code.as_bytes());
        match paths.split_once(" -> ") {
            Some((orig, path)) if code.contains(['R', 'C']) => {
                out.extend_from_slice(path.as_bytes());
                out.push(b'\0');
                out.extend_from_slice(orig.as_bytes());
            }
            _ => out.extend_from_slice(paths.as_bytes()),
        }
        out.push(b'\0');
    }
    out
}

/// Scripted engine. Status outputs are replayed in order and the last one
/// repeats once the script runs out.
pub struct FakeVcs {
    statuses: RefCell<VecDeque<std::result::Result<Vec<u8>, String>>>,
    last_status: RefCell<Vec<u8>>,
    action_failure: RefCell<Option<String>>,
    calls: RefCell<Vec<FakeCall>>,
    branch: Option<String>,
    status_calls: Cell<usize>,
}

impl FakeVcs {
    pub fn new(initial_status: &str) -> Self {
        let fake = Self::empty();
        fake.push_status(initial_status);
        fake
    }

    /// An engine whose first status query fails
    pub fn failing_status(message: &str) -> Self {
        let fake = Self::empty();
        fake.push_status_failure(message);
        fake
    }

    fn empty() -> Self {
        Self {
            statuses: RefCell::new(VecDeque::new()),
            last_status: RefCell::new(Vec::new()),
            action_failure: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
            branch: Some("main".to_string()),
            status_calls: Cell::new(0),
        }
    }

    pub fn with_branch(mut self, branch: Option<&str>) -> Self {
        self.branch = branch.map(str::to_string);
        self
    }

    /// Queue one status output, written in line form
    pub fn push_status(&self, text: &str) {
        self.statuses.borrow_mut().push_back(Ok(nul_records(text)));
    }

    pub fn push_status_failure(&self, message: &str) {
        self.statuses
            .borrow_mut()
            .push_back(Err(message.to_string()));
    }

    /// Make the next stage/unstage/discard/commit fail with `message`
    pub fn fail_next_action(&self, message: &str) {
        *self.action_failure.borrow_mut() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls.borrow().clone()
    }

    /// Recorded calls other than status queries
    pub fn actions(&self) -> Vec<FakeCall> {
        self.calls()
            .into_iter()
            .filter(|call| *call != FakeCall::Status)
            .collect()
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.get()
    }

    fn record_action(&self, action: &str, call: FakeCall) -> Result<()> {
        self.calls.borrow_mut().push(call);
        match self.action_failure.borrow_mut().take() {
            Some(message) => Err(StagerError::action(action, message)),
            None => Ok(()),
        }
    }
}

impl Vcs for FakeVcs {
    fn status(&self) -> Result<Vec<u8>> {
        self.calls.borrow_mut().push(FakeCall::Status);
        self.status_calls.set(self.status_calls.get() + 1);

        match self.statuses.borrow_mut().pop_front() {
            Some(Ok(output)) => {
                *self.last_status.borrow_mut() = output.clone();
                Ok(output)
            }
            Some(Err(message)) => Err(StagerError::query(message)),
            None => Ok(self.last_status.borrow().clone()),
        }
    }

    fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        self.record_action("add", FakeCall::Stage(paths.to_vec()))
    }

    fn unstage(&self, paths: &[PathBuf]) -> Result<()> {
        self.record_action("reset", FakeCall::Unstage(paths.to_vec()))
    }

    fn discard(&self, paths: &[PathBuf]) -> Result<()> {
        self.record_action("checkout", FakeCall::Discard(paths.to_vec()))
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record_action("commit", FakeCall::Commit(message.to_string()))
    }

    fn current_branch(&self) -> Option<String> {
        self.branch.clone()
    }
}
