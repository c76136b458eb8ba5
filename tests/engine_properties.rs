//! Property tests for the game engine.
//!
//! Random action sequences are played against seeded games and checked for:
//! - moves and rotations apply fully to a valid position or not at all,
//! - the board always equals a shadow model built from the recorded locks,
//! - score follows the line-clear table and never decreases,
//! - once topped out, nothing changes.
use proptest::prelude::*;
use tetrs_engine::score::line_clear_points;
use tetrs_engine::{Action, Cell, Game, ScriptedRandomizer, Step};

const ACTIONS: [Action; 4] = [
    Action::MoveLeft,
    Action::MoveRight,
    Action::SoftDrop,
    Action::Rotate,
];

/// Occupancy grid rebuilt from the pieces that locked
struct ShadowBoard {
    cols: usize,
    rows: Vec<Vec<bool>>,
}

impl ShadowBoard {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            rows: vec![vec![false; cols]; rows],
        }
    }

    fn lock(&mut self, cells: &[(i32, i32)]) -> usize {
        for &(x, y) in cells {
            self.rows[y as usize][x as usize] = true;
        }
        let kept: Vec<_> = self
            .rows
            .iter()
            .filter(|row| !row.iter().all(|&filled| filled))
            .cloned()
            .collect();
        let cleared = self.rows.len() - kept.len();
        let mut rebuilt = vec![vec![false; self.cols]; cleared];
        rebuilt.extend(kept);
        self.rows = rebuilt;
        cleared
    }

    fn matches(&self, game: &Game) -> bool {
        game.board()
            .row_iter()
            .zip(&self.rows)
            .all(|(row, shadow)| row.iter().map(Cell::is_filled).eq(shadow.iter().copied()))
    }
}

fn action_strategy() -> impl Strategy<Value = Vec<(usize, bool)>> {
    prop::collection::vec((0..ACTIONS.len(), any::<bool>()), 1..400)
}

proptest! {
    #[test]
    fn moves_are_all_or_nothing(seed in any::<u64>(), script in action_strategy()) {
        let mut game = Game::with_seed(20, 10, seed).unwrap();

        for (index, tick) in script {
            let before = game.active().clone();
            let applied = game.apply(ACTIONS[index]);
            if applied {
                prop_assert!(game.board().is_valid(game.active()));
            } else {
                prop_assert_eq!(game.active(), &before);
            }
            prop_assert_eq!(game.active().piece_type, before.piece_type);

            if tick && !game.step().succeeded() {
                break;
            }
        }
    }

    #[test]
    fn board_matches_recorded_locks(
        seed in any::<u64>(),
        rows in 4i32..24,
        cols in 4i32..12,
        script in action_strategy(),
    ) {
        let mut game = Game::with_seed(rows, cols, seed).unwrap();
        let mut shadow = ShadowBoard::new(rows as usize, cols as usize);
        let mut expected_score = 0;

        for (index, tick) in script {
            game.apply(ACTIONS[index]);
            if !tick {
                continue;
            }

            let falling = game.active().occupied_cells();
            let score_before = game.score();
            match game.step() {
                Step::Locked { lines_cleared, points } => {
                    prop_assert_eq!(shadow.lock(&falling), lines_cleared);
                    prop_assert_eq!(points, line_clear_points(lines_cleared));
                    expected_score += points;
                }
                Step::Fell => {}
                Step::ToppedOut | Step::Halted => break,
            }
            prop_assert!(game.score() >= score_before);
            prop_assert_eq!(game.score(), expected_score);
            prop_assert!(shadow.matches(&game));
        }
    }

    #[test]
    fn topped_out_game_is_frozen(
        draws in prop::collection::vec(1usize..7, 1..10),
        extra in 1usize..20,
    ) {
        // Without I pieces nothing reaches the last column of a 4-wide
        // board, so no row ever clears and the stack must top out
        let mut game = Game::with_randomizer(6, 4, ScriptedRandomizer::new(draws)).unwrap();
        let mut ticks = 0;
        while game.step().succeeded() {
            ticks += 1;
            prop_assert!(ticks < 10_000);
        }
        prop_assert!(game.is_over());

        let frozen = game.snapshot();
        for i in 0..extra {
            prop_assert_eq!(game.step(), Step::Halted);
            prop_assert!(!game.apply(ACTIONS[i % ACTIONS.len()]));
        }
        prop_assert_eq!(game.snapshot(), frozen);
    }
}
