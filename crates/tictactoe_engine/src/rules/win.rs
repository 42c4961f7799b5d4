//! Win detection logic for tic-tac-toe.

use crate::{Board, CellSet, Player, WinningLine};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Player X's lines are tested before player O's, each in
/// [`WinningLine::ALL`] order. Returns the first complete line found.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(WinningLine, Player)> {
    [Player::X, Player::O].into_iter().find_map(|player| {
        completed_line(board.moves(player)).map(|line| (line, player))
    })
}

/// First line fully covered by `moves`.
pub(crate) fn completed_line(moves: CellSet) -> Option<WinningLine> {
    WinningLine::ALL
        .into_iter()
        .find(|line| line.is_complete_in(moves))
}
