//! Food entity

use rand::Rng;
use tracing::trace;

use crate::config::Rgb;
use crate::draw::{Rect, Surface};
use crate::grid::{Cell, Grid};
use crate::snake::Snake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    position: Cell,
    grid: Grid,
}

impl Food {
    /// Food at a placeholder cell; call [`Food::reset_position`] before use
    pub fn new(grid: Grid) -> Self {
        Self {
            position: Cell::new(0, 0),
            grid,
        }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Whether the food sits on `cell`
    pub fn is_at(&self, cell: Cell) -> bool {
        self.position == cell
    }

    /// Move to a uniformly random free cell.
    ///
    /// Samples until it hits a cell the snake doesn't cover. There is no retry
    /// limit, so this never returns if the snake fills the whole arena.
    pub fn reset_position<R: Rng + ?Sized>(&mut self, snake: &Snake, rng: &mut R) {
        let mut attempts = 1u32;
        loop {
            let cell = self.grid.random_cell(rng);
            if !snake.contains(cell) {
                trace!(x = cell.x, y = cell.y, attempts, "placed food");
                self.position = cell;
                return;
            }
            attempts += 1;
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, color: Rgb) {
        let size = self.grid.cell_size() as u32;
        surface.fill_rect(Rect::new(self.position.x, self.position.y, size, size), color);
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, cell: Cell) {
        self.position = cell;
    }
}
