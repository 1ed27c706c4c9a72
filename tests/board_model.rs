use rand::{rngs::StdRng, Rng, SeedableRng};
use tower_patience::{notation, Board, Card, Rules};

/// Random boards mixing full runs, partial runs, junk and unknown values.
fn random_boards(seed: u64, count: usize) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let stacks = rng.gen_range(1..=5);
            Board::new(
                (0..stacks)
                    .map(|_| match rng.gen_range(0..4) {
                        0 => Card::RUN.to_vec(),
                        1 => {
                            let start = rng.gen_range(0..9);
                            let end = rng.gen_range(start..=9);
                            Card::RUN[start..end].to_vec()
                        }
                        _ => {
                            let len = rng.gen_range(0..7);
                            (0..len).map(|_| Card(rng.gen_range(4..=15))).collect()
                        }
                    })
                    .collect(),
            )
        })
        .collect()
}

#[test]
fn movable_run_is_within_stack() {
    let rules = Rules::default();
    for board in random_boards(1, 200) {
        for stack in board.stacks() {
            let run = rules.movable_run_length(stack);
            if stack.is_empty() {
                assert_eq!(run, 0);
            } else {
                assert!(run >= 1 && run <= stack.len());
                assert!(rules.is_well_ordered(&stack[stack.len() - run..]) || run == 1);
            }
        }
    }
}

#[test]
fn sweeping_is_idempotent() {
    let rules = Rules::default();
    for board in random_boards(2, 200) {
        let once = rules.remove_completed(&board);
        assert_eq!(rules.remove_completed(&once), once);
        assert!(once.len() <= board.len());
        assert!(once.card_count() <= board.card_count());
    }
}

#[test]
fn swept_board_is_cleared_iff_only_runs_and_empties() {
    let rules = Rules::default();
    for board in random_boards(3, 200) {
        let expected = board
            .stacks()
            .iter()
            .all(|stack| stack.is_empty() || stack.as_slice() == Card::RUN.as_slice());
        assert_eq!(rules.is_cleared(&rules.remove_completed(&board)), expected);
    }
}

#[test]
fn notation_keeps_every_board() {
    for board in random_boards(4, 100) {
        let text = notation::stringify(&board);
        assert_eq!(notation::parse_board(&text).unwrap(), board, "{}", text);
    }
}
