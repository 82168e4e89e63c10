//! Key bindings for browsing mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Home,
    End,
    /// Stage or unstage the selected row depending on its group
    Toggle,
    StageAll,
    Discard,
    ViewDiff,
    Commit,
    Refresh,
    Quit,
}

pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Command::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Command::MoveDown,
        KeyCode::PageUp => Command::PageUp,
        KeyCode::PageDown => Command::PageDown,
        KeyCode::Home | KeyCode::Char('g') => Command::Home,
        KeyCode::End | KeyCode::Char('G') => Command::End,
        KeyCode::Char(' ') => Command::Toggle,
        KeyCode::Char('a') | KeyCode::Char('A') => Command::StageAll,
        KeyCode::Char('u') | KeyCode::Char('U') => Command::Discard,
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Enter => Command::ViewDiff,
        KeyCode::Char('c') | KeyCode::Char('C') => Command::Commit,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Refresh,
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Text of the help bar
pub const HELP_TEXT: &str =
    "↑/↓ move  space stage/unstage  a stage all  u discard  d diff  c commit  r refresh  q quit";
