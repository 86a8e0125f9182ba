// Shared game UI/constants.
use std::time::Duration;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

// Regular layout: each cell is a 7x3 box, mark centred.
pub const CELL_W: u16 = 7;
pub const CELL_H: u16 = 3;
// Compact layout: one row per cell, three columns wide.
pub const COMPACT_CELL_W: u16 = 3;
pub const COMPACT_CELL_H: u16 = 1;
// Width of the grid lines between cells.
pub const GRID_GAP: u16 = 1;

// Below either bound the renderer drops to the compact board.
pub const COMPACT_BREAKPOINT_W: u16 = 40;
pub const COMPACT_BREAKPOINT_H: u16 = 24;
// Minimal pane to fit the compact board plus status and cabinet border.
pub const MIN_PANE_WIDTH: u16 = 22;
pub const MIN_PANE_HEIGHT: u16 = 11;

pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_LOG_FILE: &str = "tictactoe.log";
