use rand::Rng;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring position one unit step towards `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Square board of `cells` x `cells` positions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    cells: u16,
}

impl Grid {
    #[must_use]
    pub fn new(cells: u16) -> Self {
        debug_assert!(cells > 0);
        Self { cells }
    }

    /// Number of cells along one side.
    #[must_use]
    pub fn cells(self) -> u16 {
        self.cells
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.cells) * usize::from(self.cells)
    }

    /// Returns true when `position` lies inside the board.
    #[must_use]
    pub fn in_bounds(self, position: Position) -> bool {
        let side = i32::from(self.cells);
        (0..side).contains(&position.x) && (0..side).contains(&position.y)
    }

    /// Returns a uniformly distributed position on the board.
    pub fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Position {
        let side = i32::from(self.cells);
        Position {
            x: rng.gen_range(0..side),
            y: rng.gen_range(0..side),
        }
    }
}
