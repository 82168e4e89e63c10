//! Terminal event loop.
//!
//! One blocking key read per iteration. Child processes run synchronously
//! with the terminal handed to them, and the model is refreshed before the
//! next draw.

use crate::core::{config::Config, error::Result, git::GitRepo, status_model::StatusModel};
use crate::session::{
    external::{compose_message, show_diff},
    mode::Mode,
    render,
    terminal::TerminalGuard,
    Session,
};
use crossterm::event::{self, Event, KeyEventKind};

/// Load the model, take over the terminal and run until the user quits.
/// The initial status query happens before the terminal is touched.
pub fn run(repo: GitRepo, config: &Config) -> Result<()> {
    let editor = config.resolve_editor(|var| std::env::var(var).ok());
    log::debug!("Using editor {editor:?}");

    let model = StatusModel::load(repo)?;
    let mut session = Session::new(model, config);

    let mut guard = TerminalGuard::acquire()?;
    run_loop(&mut guard, &mut session, &editor)
}

fn run_loop(guard: &mut TerminalGuard, session: &mut Session<GitRepo>, editor: &str) -> Result<()> {
    loop {
        guard
            .terminal_mut()
            .draw(|frame| render::draw(frame, session))?;

        match session.mode().clone() {
            Mode::Exiting => {
                log::info!("Exiting");
                return Ok(());
            }
            Mode::ViewingDiff(entry) => {
                let repo = session.model().vcs();
                let result = guard.suspend(|| show_diff(repo, &entry))?;
                session.finish_diff(result);
                continue;
            }
            Mode::Committing => {
                let template = session.commit_template();
                let result = guard.suspend(|| compose_message(editor, &template))?;
                session.finish_commit(result);
                continue;
            }
            Mode::Browsing | Mode::Confirming(_) => {}
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => session.handle_key(key),
            // Redrawn at the top of the loop
            Event::Resize(_, _) => {}
            _ => {}
        }
    }
}
