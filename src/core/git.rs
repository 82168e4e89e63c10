//! Git repository access and external command invocation.
//!
//! This module provides the [`Vcs`] trait, the seam between the status model and
//! the version-control engine, and [`GitRepo`], its implementation on top of the
//! `git` command-line tool. `git2` is used only to discover the repository and
//! read HEAD for the branch header; every state query and mutation goes through
//! the `git` binary so the tool sees exactly what the user's git sees.
//!
//! # Public API
//! - [`Vcs`]: status / stage / unstage / discard / commit operations
//! - [`GitRepo`]: `git` CLI implementation rooted at the working tree

use crate::core::{
    error::{Result, StagerError},
    git_status::Group,
    state::FileEntry,
};
use git2::Repository;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Operations the status model needs from the version-control engine
pub trait Vcs {
    /// Raw `--porcelain=v1 -z` status output
    fn status(&self) -> Result<Vec<u8>>;

    /// Record worktree changes of `paths` in the index
    fn stage(&self, paths: &[PathBuf]) -> Result<()>;

    /// Reset the index entries of `paths` back to HEAD
    fn unstage(&self, paths: &[PathBuf]) -> Result<()>;

    /// Throw away worktree changes of `paths`
    fn discard(&self, paths: &[PathBuf]) -> Result<()>;

    /// Commit the index with `message`
    fn commit(&self, message: &str) -> Result<()>;

    /// Short name of the checked-out branch, if there is one
    fn current_branch(&self) -> Option<String>;
}

pub struct GitRepo {
    repo: Repository,
    workdir: PathBuf,
}

impl GitRepo {
    /// Discover the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|e| {
            log::debug!("Repository discovery failed: {e}");
            if e.code() == git2::ErrorCode::NotFound {
                StagerError::NotInGitRepo
            } else {
                StagerError::GitRepo(e)
            }
        })?;
        let workdir = repo
            .workdir()
            .ok_or(StagerError::NoWorkingDirectory)?
            .to_path_buf();

        log::debug!("Opened repository with working tree {}", workdir.display());
        Ok(GitRepo { repo, workdir })
    }

    /// Root of the working tree; all git commands run from here
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// A `git` command rooted at the working tree. Paths are passed and
    /// reported verbatim: no glob expansion, no octal quoting of non-ASCII.
    pub fn git_command(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.current_dir(&self.workdir)
            .args(["--literal-pathspecs", "-c", "core.quotePath=false"]);
        cmd
    }

    /// Build the diff invocation for one status row.
    /// The child is meant to inherit the terminal.
    pub fn diff_command(&self, entry: &FileEntry) -> Command {
        let mut cmd = self.git_command();
        match entry.group {
            Group::Staged => {
                cmd.args(["diff", "--cached", "--"]).arg(&entry.path);
                if let Some(orig) = &entry.orig_path {
                    cmd.arg(orig);
                }
            }
            Group::Unstaged => {
                cmd.args(["diff", "--"]).arg(&entry.path);
            }
            Group::Untracked => {
                cmd.args(["diff", "--no-index", "--", "/dev/null"])
                    .arg(&entry.path);
            }
        }
        if std::env::var_os("LESS").is_none() {
            // Keep the pager open on short diffs
            cmd.env("LESS", "R");
        }
        cmd
    }

    /// The pager git would run for the diff, as resolved by `git var`
    /// from `GIT_PAGER`, `core.pager` and `PAGER`
    pub fn pager(&self) -> Result<String> {
        let mut cmd = self.git_command();
        cmd.args(["var", "GIT_PAGER"]);
        let output = self.execute_git_command(cmd, |msg| StagerError::action("var", msg))?;
        Ok(String::from_utf8_lossy(&output).trim().to_string())
    }

    /// Execute a git command in the repository's working directory and return stdout.
    /// A non-zero exit is turned into an error by `on_failure`.
    fn execute_git_command(
        &self,
        mut cmd: Command,
        on_failure: impl FnOnce(String) -> StagerError,
    ) -> Result<Vec<u8>> {
        log::debug!("Running {cmd:?}");

        let output = cmd.output().map_err(spawn_error)?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            log::warn!("{cmd:?} exited with {}: {}", output.status, error_msg.trim());
            return Err(on_failure(error_msg.trim().to_string()));
        }

        Ok(output.stdout)
    }

    fn run_path_action(&self, action: &str, args: &[&str], paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let mut cmd = self.git_command();
        cmd.args(args).arg("--");
        for path in paths {
            cmd.arg(path);
        }

        self.execute_git_command(cmd, |message| StagerError::action(action, message))?;
        Ok(())
    }
}

/// Map a failure to start a child process onto the error taxonomy
pub fn spawn_error(err: std::io::Error) -> StagerError {
    if err.kind() == IoErrorKind::NotFound {
        StagerError::tool_not_found("git")
    } else {
        StagerError::Io(err)
    }
}

impl Vcs for GitRepo {
    fn status(&self) -> Result<Vec<u8>> {
        let mut cmd = self.git_command();
        cmd.args(["status", "--porcelain=v1", "-z", "--untracked-files=all"]);
        self.execute_git_command(cmd, StagerError::query)
    }

    fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        self.run_path_action("add", &["add"], paths)
    }

    fn unstage(&self, paths: &[PathBuf]) -> Result<()> {
        self.run_path_action("reset", &["reset", "-q"], paths)
    }

    fn discard(&self, paths: &[PathBuf]) -> Result<()> {
        self.run_path_action("checkout", &["checkout"], paths)
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut cmd = self.git_command();
        cmd.args(["commit", "-m", message]);
        self.execute_git_command(cmd, |msg| StagerError::action("commit", msg))?;
        Ok(())
    }

    fn current_branch(&self) -> Option<String> {
        let head = self.repo.head().ok()?;

        if head.is_branch() {
            return head.shorthand().map(str::to_string);
        }

        // Detached HEAD
        let oid = head.target()?.to_string();
        Some(format!("detached at {}", &oid[..7.min(oid.len())]))
    }
}
