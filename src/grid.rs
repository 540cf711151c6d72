use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;

use crate::error::GameError;

/// Grid cell in logical coordinates.
///
/// Coordinates are signed so that a head stepping off the board (for example
/// to column `-1`) is representable and can be rejected by [`GridSpace::contains`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Returns this cell shifted by `(d_col, d_row)`.
    #[must_use]
    pub fn offset(self, (d_col, d_row): (i32, i32)) -> Self {
        Self {
            col: self.col + d_col,
            row: self.row + d_row,
        }
    }
}

/// Fixed rectangular board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct GridSpace {
    width: u16,
    height: u16,
}

impl GridSpace {
    /// Creates a grid of `width` columns and `height` rows.
    pub fn new(width: u16, height: u16) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::EmptyGrid { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u16 {
        self.height
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the centre cell, rounding towards the bottom-right.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }

    /// Returns true when the cell lies inside the grid.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && cell.col < i32::from(self.width)
            && cell.row < i32::from(self.height)
    }

    /// Iterates every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let width = i32::from(self.width);
        (0..i32::from(self.height))
            .flat_map(move |row| (0..width).map(move |col| Cell::new(col, row)))
    }

    /// Picks a uniformly random cell that is not in `excluded`.
    ///
    /// Candidates are enumerated in row-major order before sampling, so the
    /// result only depends on the state of `rng` and the exclusion set.
    pub fn random_free_cell<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        excluded: &HashSet<Cell>,
    ) -> Result<Cell, GameError> {
        let candidates: Vec<Cell> = self
            .cells()
            .filter(|cell| !excluded.contains(cell))
            .collect();

        if candidates.is_empty() {
            return Err(GameError::NoFreeCellAvailable {
                width: self.width,
                height: self.height,
            });
        }

        let index = rng.gen_range(0..candidates.len());
        Ok(candidates[index])
    }
}
