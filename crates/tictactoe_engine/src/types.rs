//! Core domain types for tic-tac-toe.

use crate::{BoardError, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (side A).
    X,
    /// Player O (side B).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A set of cells, stored as a nine-bit mask.
///
/// Serializes as the sorted list of cell indices so that move lists
/// kept by a remote store read naturally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<usize>", try_from = "Vec<usize>")]
pub struct CellSet(u16);

impl CellSet {
    const MASK: u16 = 0b1_1111_1111;

    /// The empty set.
    pub const EMPTY: CellSet = CellSet(0);

    /// Every cell on the board.
    pub const FULL: CellSet = CellSet(Self::MASK);

    /// Creates an empty set.
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Builds a set from raw cell indices, rejecting anything outside 0-8.
    #[instrument(skip(indices))]
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Result<Self, BoardError> {
        indices
            .into_iter()
            .map(Position::try_from)
            .collect::<Result<CellSet, _>>()
    }

    /// Returns true if the cell is in the set.
    pub const fn contains(self, pos: Position) -> bool {
        self.0 & Self::bit(pos) != 0
    }

    /// Adds a cell. Returns false if it was already present.
    pub fn insert(&mut self, pos: Position) -> bool {
        let fresh = !self.contains(pos);
        self.0 |= Self::bit(pos);
        fresh
    }

    /// Number of cells in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if no cell is in the set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Cells in either set.
    pub const fn union(self, other: CellSet) -> CellSet {
        CellSet(self.0 | other.0)
    }

    /// Cells in both sets.
    pub const fn intersection(self, other: CellSet) -> CellSet {
        CellSet(self.0 & other.0)
    }

    /// Cells in `self` but not in `other`.
    pub const fn difference(self, other: CellSet) -> CellSet {
        CellSet(self.0 & !other.0)
    }

    /// Cells not in the set.
    pub const fn complement(self) -> CellSet {
        CellSet(!self.0 & Self::MASK)
    }

    /// Returns true if every cell of `other` is in `self`.
    pub const fn is_superset(self, other: CellSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Iterates cells in ascending index order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        Position::ALL.into_iter().filter(move |pos| self.contains(*pos))
    }

    /// Lowest-indexed cell, if any.
    pub fn first(self) -> Option<Position> {
        self.iter().next()
    }

    const fn bit(pos: Position) -> u16 {
        1 << pos.to_index()
    }
}

impl FromIterator<Position> for CellSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl<const N: usize> From<[Position; N]> for CellSet {
    fn from(cells: [Position; N]) -> Self {
        cells.into_iter().collect()
    }
}

impl From<CellSet> for Vec<usize> {
    fn from(set: CellSet) -> Self {
        set.iter().map(Position::to_index).collect()
    }
}

impl TryFrom<Vec<usize>> for CellSet {
    type Error = BoardError;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        CellSet::from_indices(indices)
    }
}

/// 3x3 tic-tac-toe board: the cells claimed by each player.
///
/// The two sides never share a cell. Every constructor enforces it,
/// so code holding a `Board` can rely on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    x: CellSet,
    o: CellSet,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from each player's claimed cells.
    #[instrument]
    pub fn from_sets(x: CellSet, o: CellSet) -> Result<Self, BoardError> {
        match x.intersection(o).first() {
            Some(position) => Err(BoardError::Overlap { position }),
            None => Ok(Self { x, o }),
        }
    }

    /// Creates a board from raw move lists (cell indices 0-8).
    #[instrument(skip(x, o))]
    pub fn from_indices(
        x: impl IntoIterator<Item = usize>,
        o: impl IntoIterator<Item = usize>,
    ) -> Result<Self, BoardError> {
        Self::from_sets(CellSet::from_indices(x)?, CellSet::from_indices(o)?)
    }

    /// Cells claimed by `player`.
    pub fn moves(&self, player: Player) -> CellSet {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Cells claimed by either player.
    pub fn occupied(&self) -> CellSet {
        self.x.union(self.o)
    }

    /// Cells nobody has claimed yet.
    pub fn available(&self) -> CellSet {
        self.occupied().complement()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        if self.x.contains(pos) {
            Square::Occupied(Player::X)
        } else if self.o.contains(pos) {
            Square::Occupied(Player::O)
        } else {
            Square::Empty
        }
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Claims a cell for `player`.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), BoardError> {
        if !self.is_empty(pos) {
            return Err(BoardError::Overlap { position: pos });
        }
        match player {
            Player::X => self.x.insert(pos),
            Player::O => self.o.insert(pos),
        };
        Ok(())
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> [Square; 9] {
        Position::ALL.map(|pos| self.get(pos))
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their keypad number (1-9).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = Position::ALL[row * 3 + col];
                let symbol = match self.get(pos) {
                    Square::Empty => (pos.to_index() + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
