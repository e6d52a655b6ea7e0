//! Grid module - the square tile matrix
//!
//! The grid is an N x N matrix of tile values stored row-major in a flat
//! vector. `0` is an empty cell. Coordinates are `(row, col)` with row 0 at
//! the top and col 0 at the left. The edge length is fixed at creation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tile value (`0` = empty)
pub type Tile = u64;

/// Square tile matrix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an empty `size` x `size` grid
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be positive");
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from nested rows.
    ///
    /// Panics unless `rows` is a non-empty square matrix.
    pub fn from_rows(rows: &[Vec<Tile>]) -> Self {
        let size = rows.len();
        assert!(size > 0, "grid must have at least one row");

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                size,
                "row {r} has {} cells, expected {size}",
                row.len()
            );
            cells.extend_from_slice(row);
        }
        Self { size, cells }
    }

    /// Build a grid from a fixed-size array literal
    pub fn from_array<const N: usize>(rows: [[Tile; N]; N]) -> Self {
        assert!(N > 0, "grid must have at least one row");
        Self {
            size: N,
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) outside {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }

    /// Edge length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Tile) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Borrow one row as a slice
    pub fn row(&self, row: usize) -> &[Tile] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.size]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [Tile] {
        let start = self.index(row, 0);
        let size = self.size;
        &mut self.cells[start..start + size]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks_exact(self.size)
    }

    /// Copy out as nested rows (for renderers and tests)
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Coordinates of every empty cell, row-major
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Highest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values, saturating at `Tile::MAX`
    pub fn total(&self) -> Tile {
        self.cells.iter().fold(0, |acc: Tile, &v| acc.saturating_add(v))
    }

    /// Return a copy rotated 90 degrees clockwise `quarter_turns` times.
    ///
    /// One clockwise turn moves source cell `(r, c)` to `(c, N-1-r)`.
    pub fn rotate(&self, quarter_turns: u8) -> Self {
        let n = self.size;
        let mut out = self.clone();
        for _ in 0..quarter_turns % 4 {
            let src = out.clone();
            for r in 0..n {
                for c in 0..n {
                    out.cells[c * n + (n - 1 - r)] = src.cells[r * n + c];
                }
            }
        }
        out
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = String;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        if rows.is_empty() {
            return Err("grid must have at least one row".to_string());
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != rows.len()) {
            return Err(format!(
                "row {bad} has {} cells, expected {}",
                rows[bad].len(),
                rows.len()
            ));
        }
        Ok(Self::from_rows(&rows))
    }
}

impl From<Grid> for Vec<Vec<Tile>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().to_string().len().max(4);
        let rule = "-".repeat((width + 1) * self.size + 1);

        writeln!(f, "{rule}")?;
        for row in self.rows() {
            write!(f, "|")?;
            for &v in row {
                if v == 0 {
                    write!(f, "{:>width$}|", ".")?;
                } else {
                    write!(f, "{v:>width$}|")?;
                }
            }
            writeln!(f)?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
