//! The eight winning lines.

use crate::{CellSet, Position};
use serde::{Deserialize, Serialize};

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Horizontal.
    Row,
    /// Vertical.
    Column,
    /// Corner to corner.
    Diagonal,
}

/// One of the 8 lines that win the game when fully claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinningLine {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl WinningLine {
    /// Every line in evaluation order: rows, then columns, then diagonals.
    ///
    /// Both the evaluator and the move selector walk lines in this order,
    /// which makes their answers deterministic when several lines qualify.
    pub const ALL: [WinningLine; 8] = [
        WinningLine::TopRow,
        WinningLine::MiddleRow,
        WinningLine::BottomRow,
        WinningLine::LeftColumn,
        WinningLine::CenterColumn,
        WinningLine::RightColumn,
        WinningLine::MainDiagonal,
        WinningLine::AntiDiagonal,
    ];

    /// The three cells on this line.
    pub const fn cells(self) -> [Position; 3] {
        use Position::*;
        match self {
            WinningLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinningLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinningLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinningLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinningLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinningLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinningLine::MainDiagonal => [TopLeft, Center, BottomRight],
            WinningLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// The line's cells as a set.
    pub fn as_set(self) -> CellSet {
        CellSet::from(self.cells())
    }

    /// Row, column or diagonal.
    pub const fn kind(self) -> LineKind {
        match self {
            WinningLine::TopRow | WinningLine::MiddleRow | WinningLine::BottomRow => LineKind::Row,
            WinningLine::LeftColumn | WinningLine::CenterColumn | WinningLine::RightColumn => {
                LineKind::Column
            }
            WinningLine::MainDiagonal | WinningLine::AntiDiagonal => LineKind::Diagonal,
        }
    }

    /// Returns true if the cell lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.as_set().contains(pos)
    }

    /// How many of this line's cells are in `moves`.
    pub fn count_in(self, moves: CellSet) -> usize {
        moves.intersection(self.as_set()).len()
    }

    /// Returns true if `moves` covers the whole line.
    pub fn is_complete_in(self, moves: CellSet) -> bool {
        moves.is_superset(self.as_set())
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            WinningLine::TopRow => "top row",
            WinningLine::MiddleRow => "middle row",
            WinningLine::BottomRow => "bottom row",
            WinningLine::LeftColumn => "left column",
            WinningLine::CenterColumn => "center column",
            WinningLine::RightColumn => "right column",
            WinningLine::MainDiagonal => "main diagonal",
            WinningLine::AntiDiagonal => "anti-diagonal",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_distinct_triples() {
        for (i, a) in WinningLine::ALL.iter().enumerate() {
            assert_eq!(a.as_set().len(), 3);
            for b in &WinningLine::ALL[i + 1..] {
                assert_ne!(a.as_set(), b.as_set());
            }
        }
    }

    #[test]
    fn test_center_lies_on_four_lines() {
        let through_center = WinningLine::ALL
            .iter()
            .filter(|line| line.contains(Position::Center))
            .count();
        assert_eq!(through_center, 4);
    }

    #[test]
    fn test_kind_order_is_rows_columns_diagonals() {
        let kinds: Vec<_> = WinningLine::ALL.iter().map(|line| line.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Row,
                LineKind::Row,
                LineKind::Row,
                LineKind::Column,
                LineKind::Column,
                LineKind::Column,
                LineKind::Diagonal,
                LineKind::Diagonal,
            ]
        );
    }

    #[test]
    fn test_count_in() {
        let moves = CellSet::from([Position::TopLeft, Position::Center, Position::BottomLeft]);
        assert_eq!(WinningLine::MainDiagonal.count_in(moves), 2);
        assert_eq!(WinningLine::LeftColumn.count_in(moves), 2);
        assert_eq!(WinningLine::RightColumn.count_in(moves), 0);
        assert!(!WinningLine::MainDiagonal.is_complete_in(moves));
    }
}
