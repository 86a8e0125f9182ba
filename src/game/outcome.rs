//! Win/draw detection.

use tracing::trace;

use crate::game::{Board, Cell, Mark};

/// Three board indices forming a line.
pub type WinningLine = [usize; 3];

/// Scan order matters: rows, then columns, then diagonals. On a board with
/// more than one completed line the first one listed here is reported.
pub const LINES: [WinningLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win { mark: Mark, line: WinningLine },
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    pub fn line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// True when `index` lies on the winning line.
    pub fn highlights(&self, index: usize) -> bool {
        self.line().is_some_and(|line| line.contains(&index))
    }
}

/// Derives the outcome of any board, reachable or not. Never fails.
pub fn evaluate(board: &Board) -> Outcome {
    let cells = board.cells();
    for line in LINES {
        let [a, b, c] = line;
        if let Cell::Marked(mark) = cells[a] {
            if cells[b] == cells[a] && cells[c] == cells[a] {
                trace!(?line, %mark, "line complete");
                return Outcome::Win { mark, line };
            }
        }
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
