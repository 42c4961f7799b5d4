//! Human player typing moves on a line-based input.

use super::Player;
use anyhow::{Result, bail};
use std::cell::RefCell;
use std::io::BufRead;
use std::rc::Rc;
use tictactoe_engine::{Position, Session};
use tracing::debug;

/// Human player reading one square per line.
///
/// Both sides of a local game can share the same input, so the reader
/// sits behind an `Rc<RefCell<_>>`.
pub struct HumanPlayer<R> {
    name: String,
    input: Rc<RefCell<R>>,
}

impl<R: BufRead> HumanPlayer<R> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: Rc<RefCell<R>>) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn get_move(&mut self, _session: &Session) -> Result<Option<Position>> {
        let mut line = String::new();
        let read = self.input.borrow_mut().read_line(&mut line)?;
        if read == 0 {
            bail!("Input closed before {} moved", self.name);
        }

        let position = Position::parse_input(&line);
        debug!(player = %self.name, input = line.trim(), ?position, "Read move");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
