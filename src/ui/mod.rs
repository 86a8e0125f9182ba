pub mod board;
pub mod layout;
pub mod theme;

use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::game::{Outcome, Snapshot};
use crate::{Game, MIN_PANE_HEIGHT, MIN_PANE_WIDTH};

pub use board::board_lines;
pub use layout::{BoardGeometry, LayoutMode, LayoutPref, ScreenLayout};

pub fn draw_game(frame: &mut Frame, game: &Game, cursor: usize, pref: LayoutPref) {
    let area = frame.size();
    let Some(layout) = ScreenLayout::compute(area, pref) else {
        let msg = Paragraph::new(format!(
            "RESIZE PANE (min {}x{})",
            MIN_PANE_WIDTH, MIN_PANE_HEIGHT
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("TIC TAC TOE"));
        frame.render_widget(msg, area);
        return;
    };

    let snap = game.snapshot();
    frame.render_widget(layout::cabinet_block(), layout.cabinet);

    let status = Paragraph::new(status_line(&snap)).alignment(Alignment::Center);
    frame.render_widget(status, layout.status);

    let grid = Paragraph::new(board_lines(&snap, cursor, layout.mode));
    frame.render_widget(grid, layout.board.area);

    draw_controls(frame, &snap, layout.mode, layout.controls);

    if layout.footer.height > 0 {
        let footer = Paragraph::new(Line::styled("Two Player Local", theme::hint()))
            .alignment(Alignment::Center);
        frame.render_widget(footer, layout.footer);
    }
}

pub fn status_text(snap: &Snapshot) -> String {
    match snap.outcome {
        Outcome::Win { mark, .. } => format!("Winner: {mark}"),
        Outcome::Draw => "Draw!".to_string(),
        Outcome::InProgress => format!("Current Turn: {}", snap.next),
    }
}

fn status_line(snap: &Snapshot) -> Line<'static> {
    let bold = Modifier::BOLD;
    match snap.outcome {
        Outcome::Win { .. } => Line::styled(
            status_text(snap),
            Style::default().fg(theme::PRIMARY).add_modifier(bold),
        ),
        Outcome::Draw => Line::styled(
            status_text(snap),
            Style::default().fg(theme::ACCENT).add_modifier(bold),
        ),
        Outcome::InProgress => Line::from(vec![
            Span::raw("Current Turn: "),
            Span::styled(snap.next.to_string(), theme::mark(snap.next)),
        ]),
    }
}

fn draw_controls(frame: &mut Frame, snap: &Snapshot, mode: LayoutMode, area: Rect) {
    // Nothing to reset on an empty board; the key still works.
    let reset = if snap.board.is_empty() {
        theme::hint()
    } else {
        Style::default()
    };

    if mode == LayoutMode::Compact {
        let line = Line::from(vec![
            Span::raw("1-9 "),
            Span::styled("r reset ", reset),
            Span::raw("q quit"),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    }

    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::raw("←↑↓→ move"),
        Line::raw("enter mark"),
        Line::raw("1-9 pick"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![
        Line::styled("r reset", reset),
        Line::raw("q/esc quit"),
        Line::raw("click mark"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}
