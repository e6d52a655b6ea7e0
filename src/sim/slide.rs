//! Slide-merge module
//!
//! All four directions share one implementation: the grid is rotated so the
//! requested direction becomes "left", slid, and rotated back. Every function
//! here is pure and returns a new grid.

use super::grid::{Grid, Tile};
use super::state::Direction;

/// Result of sliding a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideOutcome {
    /// Grid after the slide, in the caller's orientation
    pub grid: Grid,
    /// Whether any cell differs from the input
    pub changed: bool,
    /// Sum of the values of tiles produced by merges
    pub merged: Tile,
}

/// Slide one row toward index 0 in place.
///
/// Returns `(changed, merged)`. A tile produced by a merge is never merged
/// again in the same pass. Tile values and the merged sum saturate at
/// `Tile::MAX`.
fn slide_row(row: &mut [Tile]) -> (bool, Tile) {
    let mut changed = false;
    let mut merged: Tile = 0;
    // Next free slot, and the slot of the last placed tile still open to a merge
    let mut write = 0;
    let mut open: Option<usize> = None;

    for src in 0..row.len() {
        let value = row[src];
        if value == 0 {
            continue;
        }

        if let Some(slot) = open.filter(|&slot| row[slot] == value) {
            let doubled = value.saturating_mul(2);
            row[slot] = doubled;
            row[src] = 0;
            merged = merged.saturating_add(doubled);
            open = None;
            changed = true;
            continue;
        }

        if write != src {
            row[write] = value;
            row[src] = 0;
            changed = true;
        }
        open = Some(write);
        write += 1;
    }

    (changed, merged)
}

/// Slide every row of `grid` toward column 0 (the canonical direction)
pub fn slide_left(grid: &Grid) -> SlideOutcome {
    let mut out = grid.clone();
    let mut changed = false;
    let mut merged: Tile = 0;

    for r in 0..out.size() {
        let (row_changed, row_merged) = slide_row(out.row_mut(r));
        changed |= row_changed;
        merged = merged.saturating_add(row_merged);
    }

    SlideOutcome {
        grid: out,
        changed,
        merged,
    }
}

/// Slide `grid` in `direction` through the orientation normalizer
pub fn slide(grid: &Grid, direction: Direction) -> SlideOutcome {
    let (turn_in, turn_back) = direction.quarter_turns();
    let canonical = grid.rotate(turn_in);
    let outcome = slide_left(&canonical);

    SlideOutcome {
        grid: outcome.grid.rotate(turn_back),
        changed: outcome.changed,
        merged: outcome.merged,
    }
}

/// Whether sliding in `direction` would change the grid
pub fn can_slide(grid: &Grid, direction: Direction) -> bool {
    slide(grid, direction).changed
}
