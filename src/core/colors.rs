//! Color scheme for status rows.
//!
//! # Color Scheme
//! - **Modified**: Yellow
//! - **Added**: Green
//! - **Deleted**: Red
//! - **Renamed/Copied**: Blue
//! - **Untracked**: Cyan
//! - **Unmerged**: Red bold

use crate::core::git_status::{GitStatus, Group};
use ratatui::style::{Color, Modifier, Style};

/// Style applied to the status letter and path of a row
pub fn status_style(status: GitStatus) -> Style {
    let style = Style::default();
    match status {
        GitStatus::Modified => style.fg(Color::Yellow),
        GitStatus::Untracked => style.fg(Color::Cyan),
        GitStatus::Deleted => style.fg(Color::Red),
        GitStatus::Added => style.fg(Color::Green),
        GitStatus::Renamed | GitStatus::Copied => style.fg(Color::Blue),
        GitStatus::TypeChanged => style.fg(Color::Magenta),
        GitStatus::Unmerged => style.fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// Style of a group header line
pub fn group_header_style(group: Group) -> Style {
    let color = match group {
        Group::Staged => Color::Green,
        Group::Unstaged => Color::Yellow,
        Group::Untracked => Color::Cyan,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Status letter padded so paths line up
pub fn aligned_status(status: GitStatus) -> String {
    format!("{:<2}", status.as_str())
}

pub fn error_style() -> Style {
    Style::default().fg(Color::Red)
}

pub fn info_style() -> Style {
    Style::default().fg(Color::Green)
}

pub fn help_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_status() {
        assert_eq!(aligned_status(GitStatus::Modified), "M ");
        assert_eq!(aligned_status(GitStatus::Untracked), "??");
        assert_eq!(aligned_status(GitStatus::Unmerged), "UU");
    }

    #[test]
    fn test_status_styles_are_distinct_where_it_matters() {
        assert_ne!(
            status_style(GitStatus::Added),
            status_style(GitStatus::Deleted)
        );
        assert_eq!(
            status_style(GitStatus::Renamed),
            status_style(GitStatus::Copied)
        );
        assert!(status_style(GitStatus::Unmerged)
            .add_modifier
            .contains(Modifier::BOLD));
    }
}
