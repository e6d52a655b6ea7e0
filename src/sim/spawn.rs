//! Tile spawning

use rand::Rng;
use rand::seq::IndexedRandom;

use super::grid::{Grid, Tile};

/// Place `value` in a uniformly chosen empty cell.
///
/// Returns the chosen `(row, col)`, or `None` (grid untouched) when the grid
/// is full.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, value: Tile, rng: &mut R) -> Option<(usize, usize)> {
    let &(row, col) = grid.empty_cells().choose(rng)?;
    grid.set(row, col, value);
    Some((row, col))
}
