//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use std::io::Write;
use tictactoe_engine::{MoveError, Phase, Player as Mark, Session};
use tracing::{debug, info, instrument};

/// Drives a session to completion, printing the board as it goes.
pub struct Orchestrator<W> {
    session: Session,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator.
    pub fn new(
        session: Session,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        out: W,
    ) -> Self {
        Self {
            session,
            player_x,
            player_o,
            out,
        }
    }

    /// Runs the game loop until someone wins or the board fills.
    #[instrument(skip(self), fields(mode = %self.session.mode()))]
    pub fn run(&mut self, first: Mark) -> Result<Phase> {
        info!("Starting game orchestration");
        if self.session.phase() == Phase::Waiting {
            self.session.start(first)?;
        }

        loop {
            writeln!(self.out, "\n{}\n", self.session.board().display())?;
            writeln!(self.out, "{}", self.session.status_text())?;

            let current = match self.session.phase() {
                Phase::NextTurn(current) => current,
                phase => {
                    if let Some(line) = self.session.winning_line() {
                        writeln!(self.out, "Winning line: {line}")?;
                    }
                    return Ok(phase);
                }
            };

            let player = match current {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            if player.is_interactive() {
                write!(self.out, "Choose a square (1-9): ")?;
                self.out.flush()?;
            }

            debug!(player = %player.name(), "Waiting for move");
            let Some(position) = player.get_move(&self.session)? else {
                writeln!(
                    self.out,
                    "Enter a number from 1 to 9 or a square name such as 'center'."
                )?;
                continue;
            };
            let name = player.name().to_string();

            match self.session.play(position) {
                Ok(_) => writeln!(self.out, "{name} played {position}")?,
                Err(MoveError::SquareOccupied(taken)) => {
                    writeln!(self.out, "{taken} is already taken.")?
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{ComputerPlayer, HumanPlayer};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;
    use tictactoe_engine::{GameMode, WinningLine};

    fn input(lines: &str) -> Rc<RefCell<Cursor<Vec<u8>>>> {
        Rc::new(RefCell::new(Cursor::new(lines.as_bytes().to_vec())))
    }

    #[test]
    fn test_local_game_shares_one_input() {
        let shared = input("1\n4\n2\n5\n3\n");
        let session = Session::new(GameMode::LocalMultiplayer, Mark::X);
        let mut orchestrator = Orchestrator::new(
            session,
            Box::new(HumanPlayer::new("Player X", shared.clone())),
            Box::new(HumanPlayer::new("Player O", shared)),
            Vec::new(),
        );

        let phase = orchestrator.run(Mark::X).unwrap();
        assert_eq!(
            phase,
            Phase::Winner {
                player: Mark::X,
                line: WinningLine::TopRow
            }
        );
        let text = String::from_utf8(orchestrator.out.clone()).unwrap();
        assert!(text.contains("Player X played Top-right"));
        assert!(text.contains("Player X wins!"));
        assert!(text.contains("Winning line: top row"));
    }

    #[test]
    fn test_bad_and_taken_input_asks_again() {
        let shared = input("banana\n5\n5\ncenter\n1\n");
        let session = Session::new(GameMode::LocalMultiplayer, Mark::X);
        let mut orchestrator = Orchestrator::new(
            session,
            Box::new(HumanPlayer::new("Player X", shared.clone())),
            Box::new(HumanPlayer::new("Player O", shared)),
            Vec::new(),
        );

        // Input runs out before the game ends
        assert!(orchestrator.run(Mark::X).is_err());
        let text = String::from_utf8(orchestrator.out.clone()).unwrap();
        assert!(text.contains("Enter a number from 1 to 9"));
        assert_eq!(text.matches("Center is already taken.").count(), 2);
        assert_eq!(orchestrator.session().history().len(), 2);
    }

    #[test]
    fn test_single_player_game_finishes() {
        // Enough keypad presses to fill the board; taken squares are skipped
        let human = input("1\n2\n3\n4\n5\n6\n7\n8\n9\n");
        let session = Session::new(GameMode::SinglePlayer, Mark::X);
        let mut orchestrator = Orchestrator::new(
            session,
            Box::new(HumanPlayer::new("You", human)),
            Box::new(ComputerPlayer::new("Computer", StdRng::seed_from_u64(5))),
            Vec::new(),
        );

        let phase = orchestrator.run(Mark::X).unwrap();
        assert!(phase.is_finished());
    }
}
