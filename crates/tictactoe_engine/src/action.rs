//! Moves and move errors.

use crate::{BoardError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when driving a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// No one has been given the first turn yet.
    #[display("Game has not started")]
    NotStarted,

    /// `start` was called on a session that is already running.
    #[display("Game has already started")]
    AlreadyStarted,

    /// The side to move is not computer-controlled.
    #[display("Player {} is not computer-controlled", _0)]
    NotComputerTurn(Player),

    /// The selector found no open cell.
    #[display("No move available")]
    NoMoveAvailable,

    /// The board snapshot was malformed.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(BoardError),
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::InvalidBoard(err)
    }
}
