//! Board evaluation: who won, or whether play goes on.

use super::win::completed_line;
use crate::{Board, BoardError, CellSet, Player, WinningLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of evaluating a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner and at least one open cell.
    Continue,
    /// Board full with no winner.
    Draw,
    /// `player` claimed every cell of `line`.
    Win {
        /// The completed line.
        line: WinningLine,
        /// Who completed it.
        player: Player,
    },
}

impl Outcome {
    /// Returns true for `Draw` and `Win`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Continue => write!(f, "In progress"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Win { line, player } => write!(f, "Player {player} wins on the {line}"),
        }
    }
}

/// Evaluates two players' move sets.
///
/// `moves_a` belongs to [`Player::X`], `moves_b` to [`Player::O`]. Fails only
/// when the sets share a cell.
#[instrument]
pub fn evaluate(moves_a: &CellSet, moves_b: &CellSet) -> Result<Outcome, BoardError> {
    let board = Board::from_sets(*moves_a, *moves_b)?;
    Ok(board.outcome())
}

impl Board {
    /// Evaluates this board.
    #[instrument]
    pub fn outcome(&self) -> Outcome {
        for player in [Player::X, Player::O] {
            if let Some(line) = completed_line(self.moves(player)) {
                debug!(%player, %line, "Winning line found");
                return Outcome::Win { line, player };
            }
        }

        if self.occupied().len() == 9 {
            Outcome::Draw
        } else {
            Outcome::Continue
        }
    }
}
