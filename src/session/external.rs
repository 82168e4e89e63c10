//! Child processes that take over the terminal: the diff viewer and the
//! commit message editor.

use crate::core::{
    error::{Result, StagerError},
    git::{spawn_error, GitRepo},
    git_status::Group,
    state::FileEntry,
};
use std::io::{self, Write};
use std::process::{Command, ExitStatus};

/// Show the diff of one row through git's pager. Without a pager the output
/// stays on screen until Enter is pressed.
pub fn show_diff(repo: &GitRepo, entry: &FileEntry) -> Result<()> {
    let mut cmd = repo.diff_command(entry);
    log::debug!("Running {cmd:?}");
    let status = cmd.status().map_err(spawn_error)?;

    if !uses_pager(repo) {
        wait_for_enter()?;
    }

    if diff_succeeded(entry.group, status) {
        Ok(())
    } else {
        Err(StagerError::action("diff", format!("exited with {status}")))
    }
}

/// `--no-index` exits 1 when the files differ, which is always the case for an
/// untracked file against /dev/null
fn diff_succeeded(group: Group, status: ExitStatus) -> bool {
    status.success() || (group == Group::Untracked && status.code() == Some(1))
}

fn uses_pager(repo: &GitRepo) -> bool {
    match repo.pager() {
        Ok(pager) => pages_output(&pager),
        Err(e) => {
            log::debug!("Could not resolve pager: {e}");
            true
        }
    }
}

/// git disables paging for an empty pager and for `cat`
fn pages_output(pager: &str) -> bool {
    let pager = pager.trim();
    !(pager.is_empty() || pager == "cat")
}

fn wait_for_enter() -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\n(END) Press Enter to return")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}

/// Open `editor` on a temporary file pre-filled with `template` and return
/// the message with comment lines removed. An empty string means the user
/// left no message.
pub fn compose_message(editor: &str, template: &str) -> Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix("COMMIT_EDITMSG-")
        .tempfile()?;
    file.write_all(template.as_bytes())?;
    file.flush()?;

    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or(StagerError::NoEditor)?;

    let mut cmd = Command::new(program);
    cmd.args(parts).arg(file.path());
    log::debug!("Running {cmd:?}");

    let status = cmd
        .status()
        .map_err(|e| StagerError::editor_failed(editor, e))?;
    if !status.success() {
        return Err(StagerError::editor_failed(editor, status));
    }

    let content = std::fs::read_to_string(file.path())?;
    Ok(strip_comments(&content))
}

/// Drop `#` comment lines and trim surrounding whitespace
pub fn strip_comments(text: &str) -> String {
    text.lines()
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
