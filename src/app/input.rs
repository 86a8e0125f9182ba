//! Translating terminal events into game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::ui::ScreenLayout;
use crate::{BOARD_SIDE, CELL_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Cell activation; the index is always on the board.
    Activate(usize),
    /// Activate whatever the cursor is on.
    ActivateCursor,
    MoveCursor(Dir),
    Reset,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Enter | KeyCode::Char(' ') => Action::ActivateCursor,
        KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor(Dir::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor(Dir::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::MoveCursor(Dir::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::MoveCursor(Dir::Right),
        KeyCode::Char(c @ '1'..='9') => Action::Activate(c as usize - '1' as usize),
        _ => return None,
    };
    Some(action)
}

/// Left click on a cell activates it; everything else is ignored.
pub fn map_mouse(ev: MouseEvent, layout: Option<&ScreenLayout>) -> Option<Action> {
    if ev.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    layout?
        .board
        .cell_at(ev.column, ev.row)
        .map(Action::Activate)
}

/// Cursor stays put at the board edge.
pub fn move_cursor(cursor: usize, dir: Dir) -> usize {
    let (row, col) = (cursor / BOARD_SIDE, cursor % BOARD_SIDE);
    let (row, col) = match dir {
        Dir::Up => (row.saturating_sub(1), col),
        Dir::Down => ((row + 1).min(BOARD_SIDE - 1), col),
        Dir::Left => (row, col.saturating_sub(1)),
        Dir::Right => (row, (col + 1).min(BOARD_SIDE - 1)),
    };
    (row * BOARD_SIDE + col).min(CELL_COUNT - 1)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    use super::*;
    use crate::ui::LayoutPref;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16, kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn number_keys_pick_cells() {
        assert_eq!(map_key(press(KeyCode::Char('1'))), Some(Action::Activate(0)));
        assert_eq!(map_key(press(KeyCode::Char('5'))), Some(Action::Activate(4)));
        assert_eq!(map_key(press(KeyCode::Char('9'))), Some(Action::Activate(8)));
        assert_eq!(map_key(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn control_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(Action::Reset));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Action::ActivateCursor));
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(Action::ActivateCursor));
        assert_eq!(map_key(press(KeyCode::Left)), Some(Action::MoveCursor(Dir::Left)));
        assert_eq!(map_key(press(KeyCode::Char('j'))), Some(Action::MoveCursor(Dir::Down)));
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn cursor_clamps_at_edges() {
        assert_eq!(move_cursor(4, Dir::Up), 1);
        assert_eq!(move_cursor(4, Dir::Down), 7);
        assert_eq!(move_cursor(4, Dir::Left), 3);
        assert_eq!(move_cursor(4, Dir::Right), 5);
        assert_eq!(move_cursor(0, Dir::Up), 0);
        assert_eq!(move_cursor(0, Dir::Left), 0);
        assert_eq!(move_cursor(2, Dir::Right), 2);
        assert_eq!(move_cursor(8, Dir::Down), 8);
        assert_eq!(move_cursor(3, Dir::Left), 3);
    }

    #[test]
    fn left_click_on_cell_activates_it() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 30), LayoutPref::Auto).unwrap();
        let center = layout.board.cell_rect(4);
        let down = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(
            map_mouse(click(center.x, center.y, down), Some(&layout)),
            Some(Action::Activate(4))
        );
        assert_eq!(map_mouse(click(0, 0, down), Some(&layout)), None);
        assert_eq!(
            map_mouse(click(center.x, center.y, MouseEventKind::Down(MouseButton::Right)), Some(&layout)),
            None
        );
        assert_eq!(map_mouse(click(center.x, center.y, MouseEventKind::Moved), Some(&layout)), None);
        assert_eq!(map_mouse(click(center.x, center.y, down), None), None);
    }
}
