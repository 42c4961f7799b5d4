//! Tests for board evaluation.

use tictactoe_engine::{BoardError, CellSet, Outcome, Player, Position, WinningLine, evaluate};

fn set(indices: &[usize]) -> CellSet {
    CellSet::from_indices(indices.iter().copied()).unwrap()
}

/// Every assignment of the nine cells to X, O or empty.
fn all_disjoint_boards() -> impl Iterator<Item = (CellSet, CellSet)> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut x = CellSet::new();
        let mut o = CellSet::new();
        for pos in Position::ALL {
            match code % 3 {
                1 => {
                    x.insert(pos);
                }
                2 => {
                    o.insert(pos);
                }
                _ => {}
            }
            code /= 3;
        }
        (x, o)
    })
}

fn first_line(moves: CellSet) -> Option<WinningLine> {
    WinningLine::ALL
        .into_iter()
        .find(|line| moves.is_superset(line.as_set()))
}

#[test]
fn test_every_line_wins_for_x() {
    for line in WinningLine::ALL {
        let x = line.as_set();
        assert_eq!(
            evaluate(&x, &CellSet::new()),
            Ok(Outcome::Win {
                line,
                player: Player::X
            })
        );
    }
}

#[test]
fn test_every_line_wins_for_o() {
    for line in WinningLine::ALL {
        let o = line.as_set();
        let x = o.complement().iter().take(2).collect::<CellSet>();
        assert_eq!(
            evaluate(&x, &o),
            Ok(Outcome::Win {
                line,
                player: Player::O
            })
        );
    }
}

#[test]
fn test_exhaustive_outcomes() {
    for (x, o) in all_disjoint_boards() {
        let outcome = evaluate(&x, &o).unwrap();
        let expected = match (first_line(x), first_line(o)) {
            (Some(line), _) => Outcome::Win {
                line,
                player: Player::X,
            },
            (None, Some(line)) => Outcome::Win {
                line,
                player: Player::O,
            },
            (None, None) if x.len() + o.len() == 9 => Outcome::Draw,
            (None, None) => Outcome::Continue,
        };
        assert_eq!(outcome, expected, "x={x:?} o={o:?}");
    }
}

#[test]
fn test_draw_on_full_board() {
    // X O X / X O O / O X X
    let x = set(&[0, 2, 3, 7, 8]);
    let o = set(&[1, 4, 5, 6]);
    assert_eq!(evaluate(&x, &o), Ok(Outcome::Draw));
}

#[test]
fn test_continue_on_open_board() {
    assert_eq!(evaluate(&CellSet::new(), &CellSet::new()), Ok(Outcome::Continue));
    assert_eq!(evaluate(&set(&[4]), &set(&[0])), Ok(Outcome::Continue));
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    // X X X / O O X / X O O
    let x = set(&[0, 1, 2, 5, 6]);
    let o = set(&[3, 4, 7, 8]);
    assert_eq!(
        evaluate(&x, &o),
        Ok(Outcome::Win {
            line: WinningLine::TopRow,
            player: Player::X
        })
    );
}

#[test]
fn test_overlapping_sets_are_invalid() {
    assert_eq!(
        evaluate(&set(&[0, 8]), &set(&[8])),
        Err(BoardError::Overlap {
            position: Position::BottomRight
        })
    );
}

#[test]
fn test_out_of_range_index_is_invalid() {
    assert_eq!(
        CellSet::from_indices([2, 11]),
        Err(BoardError::OutOfRange { index: 11 })
    );
}
