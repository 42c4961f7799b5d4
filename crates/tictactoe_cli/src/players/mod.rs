//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use tictactoe_engine::{Position, Session};

/// Trait for anything that can supply moves for one side.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// `Ok(None)` means the input could not be read as a square and the
    /// player should be asked again.
    fn get_move(&mut self, session: &Session) -> Result<Option<Position>>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns true if a person is typing the moves.
    fn is_interactive(&self) -> bool {
        false
    }
}
