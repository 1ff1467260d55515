//! Arena geometry: cells, directions and bounds

use rand::Rng;

/// One grid square, addressed by the pixel coordinates of its top-left corner.
///
/// Cells produced by [`Grid`] are always multiples of the cell size; a cell
/// reached by moving past an edge lies outside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell `step` pixels away in `dir`
    pub fn offset(self, dir: Direction, step: i32) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx * step, self.y + dy * step)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector over the cell axes
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Arena bounds in pixels, divided into square cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn cols(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Total number of cells in the arena
    pub fn capacity(&self) -> usize {
        (self.cols() * self.rows()) as usize
    }

    /// Whether the cell's corner lies inside `[0, width) x [0, height)`
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// The grid-aligned cell at the middle of the arena
    pub fn center(&self) -> Cell {
        Cell::new(
            self.cols() / 2 * self.cell_size,
            self.rows() / 2 * self.cell_size,
        )
    }

    /// A uniformly random grid-aligned cell inside the arena
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        let max_col = (self.width - self.cell_size) / self.cell_size;
        let max_row = (self.height - self.cell_size) / self.cell_size;
        Cell::new(
            rng.gen_range(0..=max_col) * self.cell_size,
            rng.gen_range(0..=max_row) * self.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn grid() -> Grid {
        Grid::new(800, 600, 20)
    }

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Up));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Left.is_opposite(Direction::Down));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_cell_offset() {
        let cell = Cell::new(100, 100);
        assert_eq!(cell.offset(Direction::Up, 20), Cell::new(100, 80));
        assert_eq!(cell.offset(Direction::Down, 20), Cell::new(100, 120));
        assert_eq!(cell.offset(Direction::Left, 20), Cell::new(80, 100));
        assert_eq!(cell.offset(Direction::Right, 20), Cell::new(120, 100));
    }

    #[test]
    fn test_bounds() {
        let grid = grid();
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(780, 580)));
        assert!(!grid.contains(Cell::new(-20, 0)));
        assert!(!grid.contains(Cell::new(0, -20)));
        assert!(!grid.contains(Cell::new(800, 0)));
        assert!(!grid.contains(Cell::new(0, 600)));
    }

    #[test]
    fn test_center() {
        assert_eq!(grid().center(), Cell::new(400, 300));
        // Odd column count still lands on a cell boundary
        assert_eq!(Grid::new(100, 60, 20).center(), Cell::new(40, 20));
    }

    #[test]
    fn test_random_cell_is_aligned_and_inside() {
        let grid = grid();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let cell = grid.random_cell(&mut rng);
            assert!(grid.contains(cell));
            assert_eq!(cell.x % 20, 0);
            assert_eq!(cell.y % 20, 0);
        }
    }

    #[test]
    fn test_random_cell_reaches_last_column_and_row() {
        let grid = Grid::new(40, 40, 20);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut seen_far_corner = false;
        for _ in 0..200 {
            if grid.random_cell(&mut rng) == Cell::new(20, 20) {
                seen_far_corner = true;
                break;
            }
        }
        assert!(seen_far_corner);
    }
}
