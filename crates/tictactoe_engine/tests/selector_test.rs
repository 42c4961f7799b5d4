//! Tests for the heuristic move selector.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use tictactoe_engine::{CellSet, MoveChoice, Position, select_move};

fn set(indices: &[usize]) -> CellSet {
    CellSet::from_indices(indices.iter().copied()).unwrap()
}

#[test]
fn test_blocks_open_row() {
    let a = set(&[0, 1]);
    let b = set(&[3, 4]);
    let mut rng = StdRng::seed_from_u64(42);
    let choice = select_move(&b, &a, &mut rng).unwrap();
    assert_eq!(choice, MoveChoice::Block(Position::TopRight));
    assert_eq!(choice.position().map(Position::to_index), Some(2));
}

#[test]
fn test_block_takes_priority_over_own_win() {
    // Own top row is open at 2, opponent's bottom row is open at 8
    let own = set(&[0, 1]);
    let opponent = set(&[6, 7]);
    let mut rng = StdRng::seed_from_u64(3);
    let choice = select_move(&own, &opponent, &mut rng).unwrap();
    assert_eq!(choice, MoveChoice::Block(Position::BottomRight));
}

#[test]
fn test_shared_completion_cell_reports_block() {
    // Own main diagonal and opponent's right column both need 8
    let own = set(&[0, 4]);
    let opponent = set(&[2, 5]);
    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(
        select_move(&own, &opponent, &mut rng).unwrap(),
        MoveChoice::Block(Position::BottomRight)
    );
}

#[test]
fn test_completes_own_line_without_threat() {
    let own = set(&[0, 4]);
    let opponent = set(&[1, 5]);
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(
        select_move(&own, &opponent, &mut rng).unwrap(),
        MoveChoice::Complete(Position::BottomRight)
    );
}

#[test]
fn test_blocked_threat_is_ignored() {
    // Opponent's top row is already blocked by own mark at 2
    let own = set(&[2]);
    let opponent = set(&[0, 1]);
    let mut rng = StdRng::seed_from_u64(9);
    let choice = select_move(&own, &opponent, &mut rng).unwrap();
    assert!(matches!(choice, MoveChoice::Random(_)));
    let pos = choice.position().unwrap();
    assert!(![0, 1, 2].contains(&pos.to_index()));
}

#[test]
fn test_first_move_is_random_over_whole_board() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut seen = HashSet::new();
    for _ in 0..500 {
        match select_move(&CellSet::new(), &CellSet::new(), &mut rng).unwrap() {
            MoveChoice::Random(pos) => {
                seen.insert(pos);
            }
            other => panic!("expected random first move, got {other:?}"),
        }
    }
    assert_eq!(seen.len(), 9);
}

#[test]
fn test_first_move_ignores_own_near_win() {
    // Opponent has not moved, so even an own two-in-a-row falls through to random
    let own = set(&[0, 1]);
    let mut rng = StdRng::seed_from_u64(8);
    let choice = select_move(&own, &CellSet::new(), &mut rng).unwrap();
    assert!(matches!(choice, MoveChoice::Random(_)));
}

#[test]
fn test_same_seed_same_choice() {
    let own = set(&[4]);
    let opponent = set(&[0]);
    let mut first = StdRng::seed_from_u64(77);
    let mut second = StdRng::seed_from_u64(77);
    assert_eq!(
        select_move(&own, &opponent, &mut first).unwrap(),
        select_move(&own, &opponent, &mut second).unwrap()
    );
}

#[test]
fn test_single_open_cell_is_taken() {
    // X O X / X O O / O X _  with no complete line
    let a = set(&[0, 2, 3, 7]);
    let b = set(&[1, 4, 5, 6]);
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let choice = select_move(&a, &b, &mut rng).unwrap();
        assert_eq!(choice.position(), Some(Position::BottomRight));
    }
}

#[test]
fn test_full_board_has_no_move() {
    let a = set(&[0, 2, 3, 7, 8]);
    let b = set(&[1, 4, 5, 6]);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        select_move(&a, &b, &mut rng).unwrap(),
        MoveChoice::NoMoveAvailable
    );
}

#[test]
fn test_random_choice_stays_on_open_cells() {
    let own = set(&[4]);
    let opponent = set(&[0]);
    let open = own.union(opponent).complement();
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let pos = select_move(&own, &opponent, &mut rng)
            .unwrap()
            .position()
            .unwrap();
        assert!(open.contains(pos));
    }
}
