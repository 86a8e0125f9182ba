//! Two-player local tic-tac-toe: the game engine plus a terminal front end.

pub mod app;
pub mod cli;
mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;

pub use config::{
    BOARD_SIDE, CELL_COUNT, CELL_H, CELL_W, COMPACT_BREAKPOINT_H, COMPACT_BREAKPOINT_W,
    COMPACT_CELL_H, COMPACT_CELL_W, DEFAULT_LOG_FILE, GRID_GAP, MIN_PANE_HEIGHT, MIN_PANE_WIDTH,
    POLL_INTERVAL,
};
pub use error::GameError;
pub use game::{evaluate, Game, MoveResult, Outcome};
