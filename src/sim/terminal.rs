//! Terminal-state detection

use super::grid::Grid;
use super::slide::can_slide;
use super::state::Direction;

/// True iff the grid has no empty cell and no equal neighbours along either
/// axis. Returns as soon as one empty cell or mergeable pair is found.
pub fn is_terminal(grid: &Grid) -> bool {
    if !grid.is_full() {
        return false;
    }

    let n = grid.size();
    for r in 0..n {
        for c in 0..n {
            let v = grid.get(r, c);
            if c + 1 < n && grid.get(r, c + 1) == v {
                return false;
            }
            if r + 1 < n && grid.get(r + 1, c) == v {
                return false;
            }
        }
    }
    true
}

/// Directions that would change the grid, in `Direction::ALL` order
pub fn legal_moves(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_slide(grid, dir))
        .collect()
}
