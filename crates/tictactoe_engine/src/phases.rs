//! Session phases.

use crate::{Player, WinningLine};
use serde::{Deserialize, Serialize};

/// Where a session stands.
///
/// `Waiting` leads to `NextTurn`, which alternates between players until
/// the board ends in `Draw` or `Winner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No one has been given the first turn yet.
    Waiting,
    /// `Player` is to move.
    NextTurn(Player),
    /// Board filled with no winner.
    Draw,
    /// Game won.
    Winner {
        /// Who won.
        player: Player,
        /// The line to highlight.
        line: WinningLine,
    },
}

impl Phase {
    /// Returns true for `Draw` and `Winner`.
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Draw | Phase::Winner { .. })
    }

    /// The player to move, if any.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            Phase::NextTurn(player) => Some(*player),
            _ => None,
        }
    }
}
