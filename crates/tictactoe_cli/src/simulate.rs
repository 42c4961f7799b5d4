//! Computer-vs-computer runs.

use anyhow::{Result, anyhow};
use rand::Rng;
use tictactoe_engine::{Board, Outcome, Player as Mark, evaluate, select_move};
use tracing::{debug, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win { player: Mark::X, .. } => self.x_wins += 1,
            Outcome::Win { player: Mark::O, .. } => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Continue => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} draws",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Plays one game with the selector on both sides, X first.
#[instrument(skip(rng))]
pub fn play_one<R: Rng + ?Sized>(rng: &mut R) -> Result<Outcome> {
    let mut board = Board::new();
    let mut to_move = Mark::X;

    loop {
        let outcome = evaluate(&board.moves(Mark::X), &board.moves(Mark::O))?;
        if outcome.is_terminal() {
            debug!(%outcome, "Game over");
            return Ok(outcome);
        }

        let own = board.moves(to_move);
        let opponent = board.moves(to_move.opponent());
        let position = select_move(&own, &opponent, rng)?
            .position()
            .ok_or_else(|| anyhow!("Selector found no move on an open board"))?;
        board.place(position, to_move)?;
        to_move = to_move.opponent();
    }
}

/// Plays `games` games and tallies the outcomes.
#[instrument(skip(rng))]
pub fn run<R: Rng + ?Sized>(games: u32, rng: &mut R) -> Result<Tally> {
    let mut tally = Tally::default();
    for _ in 0..games {
        tally.record(play_one(rng)?);
    }
    Ok(tally)
}
