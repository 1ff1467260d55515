//! Snake entity

use std::collections::VecDeque;

use ahash::AHashMap;

use crate::config::Rgb;
use crate::draw::{Rect, Surface};
use crate::grid::{Cell, Direction, Grid};

/// The player's snake.
///
/// `occupied` counts how many segments sit on each cell. It is kept in step
/// with `body` so membership queries don't scan the body; counts matter
/// because [`Snake::grow`] stacks a duplicate segment on the tail.
#[derive(Debug, Clone)]
pub struct Snake {
    /// Segments from head (front) to tail (back)
    body: VecDeque<Cell>,
    occupied: AHashMap<Cell, usize>,
    direction: Direction,
    grid: Grid,
}

impl Snake {
    /// A single segment at the arena center, heading up
    pub fn new(grid: Grid) -> Self {
        let mut snake = Self {
            body: VecDeque::with_capacity(grid.capacity()),
            occupied: AHashMap::with_capacity(grid.capacity()),
            direction: Direction::Up,
            grid,
        };
        snake.reset();
        snake
    }

    /// Reinitialize in place to the starting segment and heading
    pub fn reset(&mut self) {
        self.body.clear();
        self.occupied.clear();
        self.direction = Direction::Up;
        self.push_back(self.grid.center());
    }

    pub fn head(&self) -> Cell {
        // body is never empty
        self.body[0]
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    // A snake always has at least one segment
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn segment_size(&self) -> i32 {
        self.grid.cell_size()
    }

    /// Whether any segment occupies `cell`
    pub fn contains(&self, cell: Cell) -> bool {
        self.occupied.contains_key(&cell)
    }

    /// Number of distinct cells covered by the body
    pub fn occupied_cells(&self) -> usize {
        self.occupied.len()
    }

    /// Shift the whole body one cell in the current direction
    pub fn advance(&mut self) {
        let new_head = self.head().offset(self.direction, self.segment_size());
        self.push_front(new_head);
        self.pop_back();
    }

    /// Turn to `requested` unless it would reverse onto the body.
    ///
    /// Returns false when the request was ignored.
    pub fn change_direction(&mut self, requested: Direction) -> bool {
        if requested.is_opposite(self.direction) {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Duplicate the tail; the extra length shows after the next [`advance`](Self::advance)
    pub fn grow(&mut self) {
        if let Some(tail) = self.body.back().copied() {
            self.push_back(tail);
        }
    }

    /// Whether the head shares a cell with any other segment
    pub fn is_self_collision(&self) -> bool {
        self.occupied.get(&self.head()).is_some_and(|&n| n > 1)
    }

    /// Whether the head has left the arena
    pub fn is_wall_collision(&self) -> bool {
        !self.grid.contains(self.head())
    }

    /// Fill every segment, leaving a one pixel gutter inside its cell
    pub fn draw<S: Surface>(&self, surface: &mut S, color: Rgb) {
        let inner = (self.segment_size() - 2).max(0) as u32;
        for segment in &self.body {
            surface.fill_rect(Rect::new(segment.x + 1, segment.y + 1, inner, inner), color);
        }
    }

    fn push_front(&mut self, cell: Cell) {
        self.body.push_front(cell);
        *self.occupied.entry(cell).or_insert(0) += 1;
    }

    fn push_back(&mut self, cell: Cell) {
        self.body.push_back(cell);
        *self.occupied.entry(cell).or_insert(0) += 1;
    }

    fn pop_back(&mut self) {
        let Some(tail) = self.body.pop_back() else {
            return;
        };
        if let Some(count) = self.occupied.get_mut(&tail) {
            *count -= 1;
            if *count == 0 {
                self.occupied.remove(&tail);
            }
        }
    }
}
