//! Property-based invariant tests for the history log.
//!
//! Any sequence of moves and jumps, legal or not, must preserve:
//!
//! 1. `current < len` and the log is never empty.
//! 2. X moves next exactly on even positions.
//! 3. Snapshot `i` holds exactly `i` marks, and its move was made by the
//!    mark whose turn it was at `i - 1`.
//! 4. A rejected move or jump leaves the game unchanged.
//! 5. An accepted move from position `k` leaves `k + 2` snapshots.
//! 6. Jumping to the current index is a no-op.
//! 7. The reported winner matches a full line on the current board.

use proptest::prelude::*;
use rewind_tictactoe::{GameHistory, Mark, Square, winning_lines};

#[derive(Debug, Clone, Copy)]
enum Op {
    Place(usize),
    PlaceAt(usize, usize),
    Jump(usize),
    JumpCurrent,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Ranges reach past the board and past the longest history on purpose.
    prop_oneof![
        4 => (0usize..11).prop_map(Op::Place),
        2 => (0usize..4, 0usize..4).prop_map(|(r, c)| Op::PlaceAt(r, c)),
        3 => (0usize..12).prop_map(Op::Jump),
        1 => Just(Op::JumpCurrent),
    ]
}

fn assert_invariants(game: &GameHistory) -> Result<(), TestCaseError> {
    prop_assert!(game.len() >= 1);
    prop_assert!(game.current_index() < game.len());
    prop_assert_eq!(game.x_is_next(), game.current_index() % 2 == 0);
    prop_assert_eq!(game.status().x_is_next, game.x_is_next());

    for (i, snapshot) in game.snapshots().iter().enumerate() {
        prop_assert_eq!(snapshot.board().occupied(), i);
        match snapshot.last_move() {
            None => prop_assert_eq!(i, 0),
            Some(mov) => {
                let expected = if (i - 1) % 2 == 0 { Mark::X } else { Mark::O };
                prop_assert_eq!(mov.mark, expected);
                prop_assert_eq!(
                    snapshot.square(mov.position),
                    Some(Square::Occupied(mov.mark))
                );
            }
        }
    }

    let board = game.current_snapshot().board();
    let has_line = |mark: Mark| {
        winning_lines(board.size())
            .iter()
            .any(|line| line.iter().all(|&i| board.get(i) == Some(Square::Occupied(mark))))
    };
    match game.status().winner {
        Some(mark) => prop_assert!(has_line(mark)),
        None => prop_assert!(!has_line(Mark::X) && !has_line(Mark::O)),
    }
    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold_for_any_sequence(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut game = GameHistory::classic();
        assert_invariants(&game)?;

        for op in ops {
            let before = game.clone();
            match op {
                Op::Place(index) => match game.apply_move(index) {
                    Ok(mark) => {
                        prop_assert_eq!(mark, before.to_move());
                        prop_assert_eq!(game.len(), before.current_index() + 2);
                        prop_assert_eq!(game.current_index(), before.current_index() + 1);
                    }
                    Err(_) => prop_assert_eq!(&game, &before),
                },
                Op::PlaceAt(row, col) => match game.apply_move((row, col)) {
                    Ok(_) => prop_assert_eq!(game.len(), before.current_index() + 2),
                    Err(_) => prop_assert_eq!(&game, &before),
                },
                Op::Jump(index) => match game.jump_to(index) {
                    Ok(()) => {
                        prop_assert_eq!(game.current_index(), index);
                        prop_assert_eq!(game.snapshots(), before.snapshots());
                    }
                    Err(_) => prop_assert_eq!(&game, &before),
                },
                Op::JumpCurrent => {
                    prop_assert!(game.jump_to(game.current_index()).is_ok());
                    prop_assert_eq!(&game, &before);
                }
            }
            assert_invariants(&game)?;
        }
    }

    #[test]
    fn moves_after_win_are_always_rejected(cells in prop::collection::vec(0usize..9, 0..20)) {
        let mut game = GameHistory::classic();
        for cell in cells {
            let decided = game.status().is_decided();
            let before = game.clone();
            let result = game.apply_move(cell);
            if decided {
                prop_assert!(result.is_err());
                prop_assert_eq!(&game, &before);
            }
        }
    }
}
