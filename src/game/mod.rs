pub mod board;
pub mod outcome;
pub mod state;

pub use board::{Board, Cell, Mark};
pub use outcome::{evaluate, Outcome, WinningLine, LINES};
pub use state::{Game, MoveResult, RejectReason, Snapshot};
