//! Screen geometry shared by the renderer and mouse hit-testing.

use clap::ValueEnum;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, BorderType, Borders};

use crate::{
    BOARD_SIDE, CELL_H, CELL_W, COMPACT_BREAKPOINT_H, COMPACT_BREAKPOINT_W, COMPACT_CELL_H,
    COMPACT_CELL_W, GRID_GAP, MIN_PANE_HEIGHT, MIN_PANE_WIDTH,
};

/// Layout requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LayoutPref {
    #[default]
    Auto,
    Regular,
    Compact,
}

/// Layout actually used for a frame. Derived from the viewport every draw;
/// the game itself never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Regular,
    Compact,
}

impl LayoutMode {
    pub fn for_viewport(width: u16, height: u16) -> Self {
        if width < COMPACT_BREAKPOINT_W || height < COMPACT_BREAKPOINT_H {
            LayoutMode::Compact
        } else {
            LayoutMode::Regular
        }
    }

    pub fn cell_size(self) -> (u16, u16) {
        match self {
            LayoutMode::Regular => (CELL_W, CELL_H),
            LayoutMode::Compact => (COMPACT_CELL_W, COMPACT_CELL_H),
        }
    }

    pub fn controls_height(self) -> u16 {
        match self {
            LayoutMode::Regular => 5,
            LayoutMode::Compact => 1,
        }
    }

    pub fn footer_height(self) -> u16 {
        match self {
            LayoutMode::Regular => 1,
            LayoutMode::Compact => 0,
        }
    }
}

impl LayoutPref {
    pub fn resolve(self, viewport: Rect) -> LayoutMode {
        match self {
            LayoutPref::Auto => LayoutMode::for_viewport(viewport.width, viewport.height),
            LayoutPref::Regular => LayoutMode::Regular,
            LayoutPref::Compact => LayoutMode::Compact,
        }
    }
}

/// Position of the 3x3 grid on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub area: Rect,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl BoardGeometry {
    pub fn size(mode: LayoutMode) -> (u16, u16) {
        let (cw, ch) = mode.cell_size();
        let side = BOARD_SIDE as u16;
        (
            cw * side + GRID_GAP * (side - 1),
            ch * side + GRID_GAP * (side - 1),
        )
    }

    pub fn at(x: u16, y: u16, mode: LayoutMode) -> Self {
        let (w, h) = Self::size(mode);
        let (cell_w, cell_h) = mode.cell_size();
        Self {
            area: Rect::new(x, y, w, h),
            cell_w,
            cell_h,
        }
    }

    pub fn cell_rect(&self, index: usize) -> Rect {
        let (row, col) = ((index / BOARD_SIDE) as u16, (index % BOARD_SIDE) as u16);
        Rect::new(
            self.area.x + col * (self.cell_w + GRID_GAP),
            self.area.y + row * (self.cell_h + GRID_GAP),
            self.cell_w,
            self.cell_h,
        )
    }

    /// Cell under a screen position. Grid lines belong to no cell.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        if column < self.area.x || row < self.area.y {
            return None;
        }
        let (dx, dy) = (column - self.area.x, row - self.area.y);
        if dx >= self.area.width || dy >= self.area.height {
            return None;
        }
        let (stride_x, stride_y) = (self.cell_w + GRID_GAP, self.cell_h + GRID_GAP);
        if dx % stride_x >= self.cell_w || dy % stride_y >= self.cell_h {
            return None;
        }
        let (col, r) = ((dx / stride_x) as usize, (dy / stride_y) as usize);
        Some(r * BOARD_SIDE + col)
    }
}

/// Every region of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub mode: LayoutMode,
    pub cabinet: Rect,
    pub status: Rect,
    pub board: BoardGeometry,
    pub controls: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    /// `None` when the viewport cannot hold even the compact board.
    pub fn compute(area: Rect, pref: LayoutPref) -> Option<Self> {
        if area.width < MIN_PANE_WIDTH || area.height < MIN_PANE_HEIGHT {
            return None;
        }
        let mut mode = pref.resolve(area);
        if mode == LayoutMode::Regular && !Self::fits(area, mode) {
            mode = LayoutMode::Compact;
        }
        let inner = cabinet_block().inner(area);
        let (board_w, board_h) = BoardGeometry::size(mode);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(board_h),
                Constraint::Length(1),
                Constraint::Length(mode.controls_height()),
                Constraint::Length(mode.footer_height()),
                Constraint::Min(0),
            ])
            .split(inner);

        let board_col = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(board_w),
                Constraint::Min(0),
            ])
            .split(rows[3])[1];

        Some(Self {
            mode,
            cabinet: area,
            status: rows[1],
            board: BoardGeometry::at(board_col.x, board_col.y, mode),
            controls: rows[5],
            footer: rows[6],
        })
    }

    fn fits(area: Rect, mode: LayoutMode) -> bool {
        let (board_w, board_h) = BoardGeometry::size(mode);
        let needed_h = 2 + 1 + 1 + board_h + 1 + mode.controls_height() + mode.footer_height();
        area.width >= board_w + 2 && area.height >= needed_h
    }
}

pub(crate) fn cabinet_block() -> Block<'static> {
    Block::default()
        .title("TIC TAC TOE")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CELL_COUNT;

    fn inside(outer: Rect, inner: Rect) -> bool {
        inner.x >= outer.x
            && inner.y >= outer.y
            && inner.right() <= outer.right()
            && inner.bottom() <= outer.bottom()
    }

    #[test]
    fn small_viewports_are_compact() {
        assert_eq!(LayoutMode::for_viewport(80, 30), LayoutMode::Regular);
        assert_eq!(LayoutMode::for_viewport(39, 30), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_viewport(80, 23), LayoutMode::Compact);
    }

    #[test]
    fn explicit_pref_overrides_viewport() {
        let big = Rect::new(0, 0, 120, 40);
        let small = Rect::new(0, 0, 30, 15);
        assert_eq!(LayoutPref::Compact.resolve(big), LayoutMode::Compact);
        assert_eq!(LayoutPref::Regular.resolve(small), LayoutMode::Regular);
        assert_eq!(LayoutPref::Auto.resolve(big), LayoutMode::Regular);
        assert_eq!(LayoutPref::Auto.resolve(small), LayoutMode::Compact);
    }

    #[test]
    fn board_sizes() {
        assert_eq!(BoardGeometry::size(LayoutMode::Regular), (23, 11));
        assert_eq!(BoardGeometry::size(LayoutMode::Compact), (11, 5));
    }

    #[test]
    fn cell_rects_tile_the_board() {
        let geo = BoardGeometry::at(10, 5, LayoutMode::Regular);
        assert_eq!(geo.cell_rect(0), Rect::new(10, 5, 7, 3));
        assert_eq!(geo.cell_rect(4), Rect::new(18, 9, 7, 3));
        assert_eq!(geo.cell_rect(8), Rect::new(26, 13, 7, 3));
    }

    #[test]
    fn hit_test_inverts_cell_rect() {
        for mode in [LayoutMode::Regular, LayoutMode::Compact] {
            let geo = BoardGeometry::at(3, 2, mode);
            for index in 0..CELL_COUNT {
                let rect = geo.cell_rect(index);
                for y in rect.y..rect.y + rect.height {
                    for x in rect.x..rect.x + rect.width {
                        assert_eq!(geo.cell_at(x, y), Some(index), "{mode:?} ({x},{y})");
                    }
                }
            }
        }
    }

    #[test]
    fn hit_test_misses_grid_lines_and_outside() {
        let geo = BoardGeometry::at(10, 5, LayoutMode::Regular);
        // vertical grid line between column 0 and 1
        assert_eq!(geo.cell_at(17, 5), None);
        // horizontal grid line between row 0 and 1
        assert_eq!(geo.cell_at(10, 8), None);
        assert_eq!(geo.cell_at(9, 5), None);
        assert_eq!(geo.cell_at(10, 4), None);
        assert_eq!(geo.cell_at(33, 5), None);
        assert_eq!(geo.cell_at(10, 16), None);
    }

    #[test]
    fn tiny_viewport_has_no_layout() {
        assert_eq!(ScreenLayout::compute(Rect::new(0, 0, 10, 5), LayoutPref::Auto), None);
    }

    #[test]
    fn compact_layout_fits_minimum_pane() {
        let area = Rect::new(0, 0, MIN_PANE_WIDTH, MIN_PANE_HEIGHT);
        let layout = ScreenLayout::compute(area, LayoutPref::Auto).unwrap();
        assert_eq!(layout.mode, LayoutMode::Compact);
        assert!(inside(area, layout.board.area));
    }

    #[test]
    fn forced_regular_falls_back_when_it_cannot_fit() {
        let area = Rect::new(0, 0, 30, 14);
        let layout = ScreenLayout::compute(area, LayoutPref::Regular).unwrap();
        assert_eq!(layout.mode, LayoutMode::Compact);
    }

    #[test]
    fn regular_layout_is_inside_viewport() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = ScreenLayout::compute(area, LayoutPref::Auto).unwrap();
        assert_eq!(layout.mode, LayoutMode::Regular);
        assert_eq!(layout.board.area.width, 23);
        assert_eq!(layout.board.area.height, 11);
        assert!(inside(area, layout.board.area));
        assert!(layout.status.y < layout.board.area.y);
        assert!(layout.controls.y > layout.board.area.y);
    }
}
