//! Turn sequencing for a single game.
//!
//! A [`Session`] owns the board and the phase machine. After every move
//! it asks the evaluator for an [`Outcome`] and advances the phase; when
//! the side to move is computer-controlled it asks the selector for a
//! move instead of waiting on input.

use crate::action::{Move, MoveError};
use crate::mode::{Controller, GameMode};
use crate::phases::Phase;
use crate::rules::Outcome;
use crate::selector::{MoveChoice, select_move};
use crate::{Board, Player, Position, WinningLine};
use rand::Rng;
use tracing::{debug, info, instrument};

/// One game of tic-tac-toe in a given mode.
#[derive(Debug, Clone)]
pub struct Session {
    mode: GameMode,
    local: Player,
    board: Board,
    history: Vec<Move>,
    phase: Phase,
}

impl Session {
    /// Creates a session waiting for its first turn.
    ///
    /// `local` is the mark of the person at this device. It decides which
    /// side the computer or the remote room drives.
    #[instrument]
    pub fn new(mode: GameMode, local: Player) -> Self {
        Self {
            mode,
            local,
            board: Board::new(),
            history: Vec::new(),
            phase: Phase::Waiting,
        }
    }

    /// Hands the first turn to `first`.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn start(&mut self, first: Player) -> Result<Phase, MoveError> {
        if self.phase != Phase::Waiting {
            return Err(MoveError::AlreadyStarted);
        }
        info!(%first, "Game started");
        self.phase = Phase::NextTurn(first);
        Ok(self.phase)
    }

    /// Places the mark of the player to move at `position`.
    ///
    /// Returns the phase the game moved into.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn play(&mut self, position: Position) -> Result<Phase, MoveError> {
        let player = match self.phase {
            Phase::Waiting => return Err(MoveError::NotStarted),
            Phase::Draw | Phase::Winner { .. } => return Err(MoveError::GameOver),
            Phase::NextTurn(player) => player,
        };

        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }
        self.board.place(position, player)?;
        self.history.push(Move::new(player, position));

        self.phase = match self.board.outcome() {
            Outcome::Continue => Phase::NextTurn(player.opponent()),
            Outcome::Draw => Phase::Draw,
            Outcome::Win { line, player } => Phase::Winner { player, line },
        };
        debug!(%player, %position, phase = ?self.phase, "Move applied");
        if self.phase.is_finished() {
            info!(phase = ?self.phase, moves = self.history.len(), "Game finished");
        }
        Ok(self.phase)
    }

    /// Asks the heuristic selector for the computer side's move.
    ///
    /// Does not apply it; pass the position to [`Session::play`].
    #[instrument(skip(self, rng))]
    pub fn computer_choice<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MoveChoice, MoveError> {
        let player = match self.phase {
            Phase::Waiting => return Err(MoveError::NotStarted),
            Phase::Draw | Phase::Winner { .. } => return Err(MoveError::GameOver),
            Phase::NextTurn(player) => player,
        };
        if self.controller(player) != Controller::Computer {
            return Err(MoveError::NotComputerTurn(player));
        }

        let own = self.board.moves(player);
        let opponent = self.board.moves(player.opponent());
        let choice = select_move(&own, &opponent, rng)?;
        debug!(%player, ?choice, "Computer chose");
        Ok(choice)
    }

    /// Lets the computer take its turn.
    #[instrument(skip(self, rng))]
    pub fn play_computer<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Move, MoveError> {
        let position = self
            .computer_choice(rng)?
            .position()
            .ok_or(MoveError::NoMoveAvailable)?;
        let player = self.phase.to_move().ok_or(MoveError::GameOver)?;
        self.play(position)?;
        Ok(Move::new(player, position))
    }

    /// Clears the board and waits for a new first turn. Mode is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.phase = Phase::Waiting;
    }

    /// Who drives `player` in this session.
    pub fn controller(&self, player: Player) -> Controller {
        self.mode.controller(player, self.local)
    }

    /// User-facing status line.
    pub fn status_text(&self) -> String {
        match self.phase {
            Phase::Waiting => "Waiting for the game to start".to_string(),
            Phase::NextTurn(player) => match self.controller(player) {
                Controller::Computer => format!("Computer ({player}) is thinking"),
                Controller::Remote => format!("Waiting for opponent ({player})"),
                Controller::Local if self.mode == GameMode::LocalMultiplayer => {
                    format!("Player {player}'s turn")
                }
                Controller::Local => format!("Your turn ({player})"),
            },
            Phase::Draw => "It's a draw!".to_string(),
            Phase::Winner { player, .. } => match self.controller(player) {
                Controller::Computer => "Computer wins!".to_string(),
                Controller::Remote => "Opponent wins!".to_string(),
                Controller::Local if self.mode == GameMode::LocalMultiplayer => {
                    format!("Player {player} wins!")
                }
                Controller::Local => "You win!".to_string(),
            },
        }
    }

    /// The line to highlight once someone has won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.phase {
            Phase::Winner { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the local player's mark.
    pub fn local_player(&self) -> Player {
        self.local
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player to move, if the game is running.
    pub fn to_move(&self) -> Option<Player> {
        self.phase.to_move()
    }
}
