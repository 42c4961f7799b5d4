//! Heuristic move selection for a computer-controlled side.
//!
//! The selector is a greedy single-ply player. It blocks a line the
//! opponent has two-thirds filled, otherwise finishes a line of its own,
//! otherwise plays a random open cell. It does not look ahead or detect
//! forks, and a careful opponent can beat it.

use crate::{Board, BoardError, CellSet, Position, WinningLine};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The selector's answer, tagged with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveChoice {
    /// Fills the open cell of an opponent near-win.
    Block(Position),
    /// Fills the open cell of the selector's own near-win.
    Complete(Position),
    /// Uniform pick among open cells.
    Random(Position),
    /// Board is full.
    NoMoveAvailable,
}

impl MoveChoice {
    /// The chosen cell, `None` when no move is available.
    pub fn position(&self) -> Option<Position> {
        match self {
            MoveChoice::Block(pos) | MoveChoice::Complete(pos) | MoveChoice::Random(pos) => {
                Some(*pos)
            }
            MoveChoice::NoMoveAvailable => None,
        }
    }
}

/// Lines holding exactly two of `moves`, in [`WinningLine::ALL`] order.
pub fn near_wins(moves: CellSet) -> impl Iterator<Item = WinningLine> {
    WinningLine::ALL
        .into_iter()
        .filter(move |line| line.count_in(moves) == 2)
}

/// Picks a move for the side holding `own` against `opponent`.
///
/// Every random branch draws from `rng`; seed it for reproducible play.
/// Fails only when the two sets share a cell.
#[instrument(skip(rng))]
pub fn select_move<R: Rng + ?Sized>(
    own: &CellSet,
    opponent: &CellSet,
    rng: &mut R,
) -> Result<MoveChoice, BoardError> {
    let available = Board::from_sets(*own, *opponent)?.available();

    if available.is_empty() {
        debug!("Board full, no move available");
        return Ok(MoveChoice::NoMoveAvailable);
    }

    if opponent.is_empty() {
        return Ok(random_cell(available, rng));
    }

    if let Some(pos) = completion_cell(*opponent, available) {
        debug!(position = %pos, "Blocking opponent");
        return Ok(MoveChoice::Block(pos));
    }

    if let Some(pos) = completion_cell(*own, available) {
        debug!(position = %pos, "Completing own line");
        return Ok(MoveChoice::Complete(pos));
    }

    Ok(random_cell(available, rng))
}

/// Open cell of the first near-win line for `moves` that still has one.
fn completion_cell(moves: CellSet, available: CellSet) -> Option<Position> {
    near_wins(moves).find_map(|line| line.as_set().intersection(available).first())
}

fn random_cell<R: Rng + ?Sized>(available: CellSet, rng: &mut R) -> MoveChoice {
    let cells: Vec<Position> = available.iter().collect();
    match cells.choose(rng) {
        Some(pos) => {
            debug!(position = %pos, open = cells.len(), "Random move");
            MoveChoice::Random(*pos)
        }
        None => MoveChoice::NoMoveAvailable,
    }
}
