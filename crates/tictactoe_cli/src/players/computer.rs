//! Computer player driven by the heuristic move selector.

use super::Player;
use anyhow::{Result, anyhow};
use rand::rngs::StdRng;
use tictactoe_engine::{Position, Session};
use tracing::debug;

/// Plays whatever the session's selector picks.
pub struct ComputerPlayer {
    name: String,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a computer player drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: StdRng) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl Player for ComputerPlayer {
    fn get_move(&mut self, session: &Session) -> Result<Option<Position>> {
        let choice = session.computer_choice(&mut self.rng)?;
        debug!(player = %self.name, ?choice, "Computer chose");
        choice
            .position()
            .map(Some)
            .ok_or_else(|| anyhow!("No move available for {}", self.name))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
