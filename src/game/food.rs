use super::{
    grid::{Grid, Position},
    snake::Snake,
};
use rand::{Rng, seq::SliceRandom};
use thiserror::Error;

/// Random samples tried before falling back to a scan of the free cells
pub const PLACEMENT_ATTEMPTS: usize = 64;

/// The food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
    /// Set when the snake eats it; cleared when it is placed again
    pub eaten: bool,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            eaten: false,
        }
    }

    /// Move the food to a free cell and clear the eaten flag
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        snake: &Snake,
        grid: &Grid,
        rng: &mut R,
    ) -> Result<(), PlacementError> {
        self.position = place(snake, grid, rng)?;
        self.eaten = false;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no free cell left on a board of {cells} cells")]
    GridFull { cells: usize },
}

/// Pick a uniformly random cell that the snake does not occupy.
///
/// Tries [`PLACEMENT_ATTEMPTS`] random cells first, then chooses among the
/// remaining free cells directly. Fails only when the snake covers the board.
pub fn place<R: Rng + ?Sized>(
    snake: &Snake,
    grid: &Grid,
    rng: &mut R,
) -> Result<Position, PlacementError> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let pos = grid.random_cell(rng);
        if !snake.occupies(pos) {
            return Ok(pos);
        }
    }

    let free: Vec<Position> = grid.cells().filter(|&pos| !snake.occupies(pos)).collect();
    free.choose(rng).copied().ok_or(PlacementError::GridFull {
        cells: grid.cell_count(),
    })
}
