//! Tic-tac-toe outcome evaluation and move selection.
//!
//! The engine is two pure operations over a board snapshot plus a small
//! session type that sequences turns on top of them.
//!
//! # Architecture
//!
//! - **Evaluator**: [`evaluate`] decides win, draw, or continue for two move sets
//! - **Selector**: [`select_move`] picks a move for a computer-controlled side
//! - **Session**: [`Session`] runs the `Waiting -> NextTurn -> Draw | Winner` machine
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictactoe_engine::{CellSet, MoveChoice, Outcome, Position, evaluate, select_move};
//!
//! # fn main() -> Result<(), tictactoe_engine::BoardError> {
//! let x = CellSet::from_indices([0, 1])?;
//! let o = CellSet::from_indices([3, 4])?;
//! assert_eq!(evaluate(&x, &o)?, Outcome::Continue);
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let choice = select_move(&o, &x, &mut rng)?;
//! assert_eq!(choice, MoveChoice::Block(Position::TopRight));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod lines;
mod mode;
mod phases;
mod position;
mod selector;
mod session;
mod types;

pub mod rules;

pub use action::{Move, MoveError};
pub use error::BoardError;
pub use lines::{LineKind, WinningLine};
pub use mode::{Controller, GameMode};
pub use phases::Phase;
pub use position::Position;
pub use rules::{Outcome, check_winner, evaluate, is_draw, is_full};
pub use selector::{MoveChoice, near_wins, select_move};
pub use session::Session;
pub use types::{Board, CellSet, Player, Square};
