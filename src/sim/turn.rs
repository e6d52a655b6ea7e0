//! Turn processing
//!
//! The controller owns the state machine: `new_game` enters `Playing`, every
//! direction input goes through `play_turn`, and `Over` swallows input until
//! the next `new_game`.

use rand::Rng;

use super::grid::{Grid, Tile};
use super::slide::slide;
use super::spawn::spawn_tile;
use super::state::{Direction, GameState};
use super::terminal::is_terminal;
use crate::consts::{INITIAL_TILES, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Everything one turn produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Next state (equal to the input state when nothing changed)
    pub state: GameState,
    /// Whether the slide moved or merged anything
    pub changed: bool,
    /// Score gained this turn
    pub merged: Tile,
    /// Cell that received the new tile, if any
    pub spawned: Option<(usize, usize)>,
}

impl TurnOutcome {
    fn unchanged(state: &GameState) -> Self {
        Self {
            state: state.clone(),
            changed: false,
            merged: 0,
            spawned: None,
        }
    }
}

fn assert_supported_size(size: usize) {
    assert!(
        (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
        "board size {size} outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
    );
}

/// Start a game: empty `size` x `size` grid with two starting tiles.
///
/// Panics on an unsupported `size` or a zero `starting_value`.
pub fn new_game<R: Rng + ?Sized>(size: usize, starting_value: Tile, rng: &mut R) -> GameState {
    assert_supported_size(size);
    assert!(starting_value > 0, "starting value must be positive");

    let mut grid = Grid::new(size);
    for _ in 0..INITIAL_TILES {
        spawn_tile(&mut grid, starting_value, rng);
    }
    GameState::from_grid(grid, 0).with_starting_value(starting_value)
}

/// Process one direction input and report what happened.
///
/// Panics when `state` violates the controller contract: a board size
/// outside the supported range or a zero starting value.
pub fn play_turn<R: Rng + ?Sized>(state: &GameState, direction: Direction, rng: &mut R) -> TurnOutcome {
    assert_supported_size(state.grid.size());
    assert!(state.starting_value > 0, "starting value must be positive");

    if state.is_over {
        log::trace!("ignoring {} after game over", direction.as_str());
        return TurnOutcome::unchanged(state);
    }

    let outcome = slide(&state.grid, direction);
    if !outcome.changed {
        log::trace!("{} moved nothing", direction.as_str());
        return TurnOutcome::unchanged(state);
    }

    let mut grid = outcome.grid;
    let spawned = spawn_tile(&mut grid, state.starting_value, rng);
    let is_over = is_terminal(&grid);

    log::debug!(
        "{}: merged {} spawned {:?}{}",
        direction.as_str(),
        outcome.merged,
        spawned,
        if is_over { " (game over)" } else { "" }
    );

    TurnOutcome {
        state: GameState {
            grid,
            score: state.score.saturating_add(outcome.merged),
            is_over,
            starting_value: state.starting_value,
        },
        changed: true,
        merged: outcome.merged,
        spawned,
    }
}

/// Process one direction input, returning the next state
pub fn apply_move<R: Rng + ?Sized>(state: &GameState, direction: Direction, rng: &mut R) -> GameState {
    play_turn(state, direction, rng).state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BOARD_SIZE, STARTING_VALUE};
    use crate::sim::GamePhase;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(12345)
    }

    #[test]
    fn test_new_game_has_two_tiles() {
        let state = new_game(BOARD_SIZE, STARTING_VALUE, &mut rng());
        assert_eq!(state.grid.size(), 4);
        assert_eq!(state.grid.count_empty(), 14);
        assert!(state.grid.cells().iter().all(|&v| v == 0 || v == 3));
        assert_eq!(state.score, 0);
        assert_eq!(state.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_new_game_uses_configured_starting_value() {
        let state = new_game(5, 2, &mut rng());
        assert_eq!(state.grid.size(), 5);
        assert_eq!(state.grid.total(), 4);
        assert_eq!(state.starting_value, 2);

        // Spawns after a move use the same value
        let dir = crate::sim::legal_moves(&state.grid)[0];
        let out = play_turn(&state, dir, &mut rng());
        let (r, c) = out.spawned.unwrap();
        assert_eq!(out.state.grid.get(r, c), 2);
    }

    #[test]
    fn test_new_game_is_deterministic() {
        let a = new_game(4, 3, &mut Pcg32::seed_from_u64(5));
        let b = new_game(4, 3, &mut Pcg32::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_changing_move_merges_scores_and_spawns() {
        let state = GameState::from_grid(
            Grid::from_array([[3, 3, 0, 0], [0; 4], [0; 4], [0; 4]]),
            0,
        );
        let out = play_turn(&state, Direction::Left, &mut rng());

        assert!(out.changed);
        assert_eq!(out.merged, 6);
        assert_eq!(out.state.score, 6);
        assert_eq!(out.state.grid.get(0, 0), 6);

        let (r, c) = out.spawned.unwrap();
        assert_ne!((r, c), (0, 0));
        assert_eq!(out.state.grid.get(r, c), 3);
        assert_eq!(out.state.grid.count_empty(), 14);
        assert!(!out.state.is_over);
    }

    #[test]
    fn test_every_direction_writes_back_the_slid_grid() {
        let grid = Grid::from_array([[0; 4], [0, 6, 0, 0], [0; 4], [0; 4]]);
        let state = GameState::from_grid(grid, 0);
        let expected = [
            (Direction::Left, (1, 0)),
            (Direction::Right, (1, 3)),
            (Direction::Up, (0, 1)),
            (Direction::Down, (3, 1)),
        ];

        for (dir, (r, c)) in expected {
            let next = apply_move(&state, dir, &mut rng());
            assert_eq!(next.grid.get(r, c), 6, "{dir:?}");
            assert_ne!(next.grid.get(1, 1), 6, "{dir:?}");
            assert_eq!(next.grid.total(), 9, "{dir:?}");
        }
    }

    #[test]
    fn test_no_change_move_leaves_state_untouched() {
        let state = GameState::from_grid(
            Grid::from_array([[3, 6, 0, 0], [12, 0, 0, 0], [0; 4], [0; 4]]),
            42,
        );
        let out = play_turn(&state, Direction::Left, &mut rng());
        assert!(!out.changed);
        assert_eq!(out.spawned, None);
        assert_eq!(out.state, state);
    }

    #[test]
    fn test_terminal_grid_ignores_moves() {
        let stuck = Grid::from_array([[3, 6, 3, 6], [6, 3, 6, 3], [3, 6, 3, 6], [6, 3, 6, 3]]);
        let state = GameState::from_grid(stuck, 99);
        assert!(state.is_over);

        for dir in Direction::ALL {
            let next = apply_move(&state, dir, &mut rng());
            assert_eq!(next, state);
            assert!(next.is_over);
        }
    }

    #[test]
    fn test_over_state_ignores_input_even_if_grid_could_move() {
        let mut state = GameState::from_grid(Grid::from_array([[3, 3], [0, 0]]), 3);
        state.is_over = true;
        let next = apply_move(&state, Direction::Left, &mut rng());
        assert_eq!(next, state);
    }

    #[test]
    fn test_score_saturates() {
        let state = GameState::from_grid(Grid::from_array([[3, 3], [0, 0]]), u64::MAX - 1);
        let out = play_turn(&state, Direction::Left, &mut rng());
        assert_eq!(out.merged, 6);
        assert_eq!(out.state.score, u64::MAX);
    }

    #[test]
    #[should_panic(expected = "board size 1")]
    fn test_unsupported_board_size_panics() {
        let state = GameState::from_grid(Grid::from_array([[0]]), 0);
        play_turn(&state, Direction::Left, &mut rng());
    }

    #[test]
    #[should_panic(expected = "board size 9")]
    fn test_oversized_board_panics() {
        let state = GameState::from_grid(Grid::new(9), 0);
        apply_move(&state, Direction::Left, &mut rng());
    }

    #[test]
    #[should_panic(expected = "starting value must be positive")]
    fn test_zero_starting_value_panics() {
        let mut state = GameState::from_grid(Grid::from_array([[3, 0], [0, 0]]), 0);
        state.starting_value = 0;
        play_turn(&state, Direction::Right, &mut rng());
    }

    #[test]
    #[should_panic(expected = "board size 1")]
    fn test_new_game_rejects_unsupported_size() {
        new_game(1, STARTING_VALUE, &mut rng());
    }

    #[test]
    fn test_last_spawn_can_end_the_game() {
        // Sliding left merges the 3s; the spawned 3 lands in the only empty
        // cell next to a 6 and a 12, leaving no pairs.
        let state = GameState::from_grid(Grid::from_array([[3, 3], [12, 6]]), 0);
        let out = play_turn(&state, Direction::Left, &mut rng());
        assert_eq!(out.state.grid.to_rows(), vec![vec![6, 3], vec![12, 6]]);
        assert_eq!(out.spawned, Some((0, 1)));
        assert!(out.state.is_over);
        assert_eq!(out.state.phase(), GamePhase::Over);
        assert_eq!(out.state.score, 6);
    }
}
