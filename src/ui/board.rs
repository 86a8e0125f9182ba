use ratatui::prelude::*;
use ratatui::text::{Line, Span};

use crate::game::{Board, Cell, Snapshot};
use crate::ui::layout::LayoutMode;
use crate::ui::theme;
use crate::BOARD_SIDE;

/// Text rows of the grid, grid lines included.
///
/// `cursor` is only drawn while the game is still being played.
pub fn board_lines(snap: &Snapshot, cursor: usize, mode: LayoutMode) -> Vec<Line<'static>> {
    let (cell_w, cell_h) = mode.cell_size();
    let (cell_w, cell_h) = (cell_w as usize, cell_h as usize);
    let show_cursor = !snap.outcome.is_over();
    let mut lines = Vec::new();

    for row in 0..BOARD_SIDE {
        if row > 0 {
            lines.push(separator(cell_w));
        }
        for sub in 0..cell_h {
            let mut spans = Vec::with_capacity(BOARD_SIDE * 2);
            for col in 0..BOARD_SIDE {
                if col > 0 {
                    spans.push(Span::styled("│", theme::grid()));
                }
                let index = Board::index(row, col);
                let cell = snap.board.get(index).unwrap_or_default();
                let text = if sub == cell_h / 2 {
                    centered(glyph(cell, index), cell_w)
                } else {
                    " ".repeat(cell_w)
                };
                let style = cell_style(snap, cell, index, show_cursor && index == cursor);
                spans.push(Span::styled(text, style));
            }
            lines.push(Line::from(spans));
        }
    }
    lines
}

// Empty cells show their number key.
fn glyph(cell: Cell, index: usize) -> char {
    match cell {
        Cell::Marked(mark) => mark.symbol(),
        Cell::Empty => char::from_digit(index as u32 + 1, 10).unwrap_or(' '),
    }
}

fn centered(ch: char, width: usize) -> String {
    let left = (width - 1) / 2;
    let right = width - 1 - left;
    format!("{}{}{}", " ".repeat(left), ch, " ".repeat(right))
}

fn separator(cell_w: usize) -> Line<'static> {
    let seg = "─".repeat(cell_w);
    let text = vec![seg.as_str(); BOARD_SIDE].join("┼");
    Line::styled(text, theme::grid())
}

fn cell_style(snap: &Snapshot, cell: Cell, index: usize, under_cursor: bool) -> Style {
    let mut style = cell.mark().map_or_else(theme::hint, theme::mark);
    if snap.outcome.highlights(index) {
        style = theme::highlight();
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}
