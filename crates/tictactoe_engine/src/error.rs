//! Board construction errors.

use crate::Position;
use derive_more::{Display, Error};

/// A board snapshot that cannot exist on a 3x3 grid.
///
/// Raised when raw move lists handed in by a caller are malformed.
/// A well-formed board never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A cell index outside 0-8.
    #[display("cell index {index} is out of bounds (must be 0-8)")]
    OutOfRange {
        /// The offending index.
        index: usize,
    },

    /// The same cell is claimed by both players.
    #[display("{position} is claimed by both players")]
    Overlap {
        /// The contested cell.
        position: Position,
    },
}
