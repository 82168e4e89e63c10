//! Screen layout and drawing.
//!
//! The list region is built as [`DisplayRow`]s first: one header per non-empty
//! group, its entries, and a blank separator between groups. Entry rows carry
//! their index into the flattened model, so the cursor and the screen agree by
//! construction.

use crate::core::{
    colors::{aligned_status, error_style, group_header_style, help_style, info_style, status_style},
    git::Vcs,
    git_status::Group,
    state::FileEntry,
};
use crate::session::{keymap::HELP_TEXT, Session};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRow {
    Header { group: Group, count: usize },
    /// Index into the flattened entries
    Entry(usize),
    Blank,
}

/// Lay out the flattened entries with group headers
pub fn build_rows(entries: &[FileEntry]) -> Vec<DisplayRow> {
    let mut rows = Vec::new();

    for group in Group::ALL {
        let count = entries.iter().filter(|e| e.group == group).count();
        if count == 0 {
            continue;
        }
        if !rows.is_empty() {
            rows.push(DisplayRow::Blank);
        }
        rows.push(DisplayRow::Header { group, count });
        rows.extend(
            entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.group == group)
                .map(|(index, _)| DisplayRow::Entry(index)),
        );
    }

    rows
}

/// Row position of entry `index` and of its group header
pub fn locate_entry(rows: &[DisplayRow], index: usize) -> Option<(usize, usize)> {
    let row = rows
        .iter()
        .position(|r| matches!(r, DisplayRow::Entry(i) if *i == index))?;
    let header = rows[..row]
        .iter()
        .rposition(|r| matches!(r, DisplayRow::Header { .. }))
        .unwrap_or(row);
    Some((row, header))
}

fn header_line(group: Group, count: usize) -> Line<'static> {
    Line::from(Span::styled(
        format!("{} ({count}):", group.title()),
        group_header_style(group),
    ))
}

fn entry_line(entry: &FileEntry, selected: bool) -> Line<'static> {
    let status = entry.status();
    let line = Line::from(vec![
        Span::raw("    "),
        Span::styled(aligned_status(status), status_style(status)),
        Span::raw(" "),
        Span::styled(entry.display_path(), status_style(status)),
    ]);
    if selected {
        line.style(Style::default().add_modifier(Modifier::REVERSED))
    } else {
        line
    }
}

/// Split the screen into branch, gap, list, status and help areas
fn layout(area: Rect, show_branch: bool, show_help: bool) -> [Rect; 5] {
    let top = if show_branch { 1 } else { 0 };
    let help = if show_help { 1 } else { 0 };
    Layout::vertical([
        Constraint::Length(top),
        Constraint::Length(top),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(help),
    ])
    .areas(area)
}

/// Draw the whole screen and update scrolling and paging from its size
pub fn draw<V: Vcs>(frame: &mut Frame, session: &mut Session<V>) {
    let [branch_area, _, list_area, status_area, help_area] =
        layout(frame.area(), session.show_branch, session.show_help_bar);

    if session.show_branch {
        let text = match session.branch() {
            Some(branch) => format!("On branch {branch}"),
            None => "No commits yet".to_string(),
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().add_modifier(Modifier::BOLD),
            ))),
            branch_area,
        );
    }

    let height = list_area.height as usize;
    session.set_page_size(height);

    let entries = session.model().flattened_entries();
    let rows = build_rows(entries);
    let selected = session.selected();
    let offset = match locate_entry(&rows, selected) {
        Some((row, header)) => {
            let total = rows.len();
            session.viewport_mut().follow(row, header, total, height)
        }
        None => 0,
    };

    let entries = session.model().flattened_entries();
    let lines: Vec<Line> = rows
        .iter()
        .skip(offset)
        .take(height)
        .map(|row| match row {
            DisplayRow::Header { group, count } => header_line(*group, *count),
            DisplayRow::Entry(index) => entry_line(&entries[*index], *index == selected),
            DisplayRow::Blank => Line::default(),
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), list_area);

    if let Some(message) = session.message() {
        let style = if message.is_error {
            error_style()
        } else {
            info_style()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message.text.clone(), style)),
            status_area,
        );
    }

    if session.show_help_bar {
        frame.render_widget(
            Paragraph::new(Span::styled(HELP_TEXT, help_style())),
            help_area,
        );
    }
}
