use tracing::{debug, info};

use crate::error::{GameError, Result};
use crate::game::outcome::{evaluate, Outcome};
use crate::game::{Board, Cell, Mark};

/// Why a move was dropped. Not an error: the UI simply ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Occupied,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Applied,
    Rejected(RejectReason),
}

impl MoveResult {
    pub fn is_applied(self) -> bool {
        matches!(self, MoveResult::Applied)
    }
}

/// Read-only copy of everything the renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    /// Only meaningful while the outcome is in progress.
    pub next: Mark,
    pub outcome: Outcome,
}

/// One game session: the board, whose turn it is and the derived outcome.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    next: Mark,
    outcome: Outcome,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next: Mark::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Places the current mark at `index`.
    ///
    /// Occupied cells and moves after the game has ended are rejected without
    /// touching state. An index off the board is a caller bug and is reported
    /// as [`GameError::InvalidIndex`].
    pub fn apply_move(&mut self, index: usize) -> Result<MoveResult> {
        let cell = self.board.get(index).ok_or(GameError::InvalidIndex(index))?;
        if self.outcome.is_over() {
            debug!(index, outcome = ?self.outcome, "move rejected: game over");
            return Ok(MoveResult::Rejected(RejectReason::GameOver));
        }
        if !cell.is_empty() {
            debug!(index, "move rejected: cell occupied");
            return Ok(MoveResult::Rejected(RejectReason::Occupied));
        }

        let mark = self.next;
        self.board.set(index, Cell::Marked(mark));
        self.next = mark.opponent();
        self.outcome = evaluate(&self.board);
        info!(index, %mark, "move applied");

        match self.outcome {
            Outcome::Win { mark, line } => info!(%mark, ?line, "game won"),
            Outcome::Draw => info!("game drawn"),
            Outcome::InProgress => {}
        }
        Ok(MoveResult::Applied)
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.next = Mark::X;
        self.outcome = evaluate(&self.board);
        info!("game reset");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            next: self.next,
            outcome: self.outcome,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next(&self) -> Mark {
        self.next
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}
