use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::grid::{Grid, Position};

/// Reasons food could not be placed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SpawnError {
    #[error("no free cell left on the {cells}x{cells} board")]
    BoardFull { cells: u16 },
}

/// Picks food positions on free cells.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    grid: Grid,
    rng: StdRng,
}

impl FoodSpawner {
    /// Creates a spawner with a fixed seed for reproducible runs.
    #[must_use]
    pub fn with_seed(grid: Grid, seed: u64) -> Self {
        Self {
            grid,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a spawner seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(grid: Grid) -> Self {
        Self {
            grid,
            rng: StdRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Samples random cells until one outside `occupied` turns up.
    ///
    /// Fails with [`SpawnError::BoardFull`] instead of looping forever when
    /// `occupied` covers every cell of the board.
    pub fn place(&mut self, occupied: &HashSet<Position>) -> Result<Position, SpawnError> {
        let blocked = occupied
            .iter()
            .filter(|position| self.grid.in_bounds(**position))
            .count();
        if blocked >= self.grid.total_cells() {
            return Err(SpawnError::BoardFull {
                cells: self.grid.cells(),
            });
        }

        loop {
            let candidate = self.grid.random_cell(&mut self.rng);
            if !occupied.contains(&candidate) {
                return Ok(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::grid::{Grid, Position};

    use super::{FoodSpawner, SpawnError};

    #[test]
    fn placed_food_is_never_occupied() {
        let grid = Grid::new(8);
        let mut spawner = FoodSpawner::with_seed(grid, 7);
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..200 {
            let target = rng.gen_range(0..grid.total_cells());
            let mut occupied = HashSet::new();
            while occupied.len() < target {
                occupied.insert(grid.random_cell(&mut rng));
            }

            let food = spawner.place(&occupied).expect("board has a free cell");
            assert!(grid.in_bounds(food));
            assert!(!occupied.contains(&food));
        }
    }

    #[test]
    fn single_free_cell_is_found() {
        let grid = Grid::new(5);
        let mut spawner = FoodSpawner::with_seed(grid, 3);
        let free = Position::new(2, 4);
        let occupied: HashSet<_> = (0..5)
            .flat_map(|y| (0..5).map(move |x| Position::new(x, y)))
            .filter(|position| *position != free)
            .collect();

        assert_eq!(spawner.place(&occupied), Ok(free));
    }

    #[test]
    fn full_board_is_reported_instead_of_hanging() {
        let grid = Grid::new(3);
        let mut spawner = FoodSpawner::with_seed(grid, 1);
        let mut occupied: HashSet<_> = (0..3)
            .flat_map(|y| (0..3).map(move |x| Position::new(x, y)))
            .collect();
        // Off-board cells must not count towards a full board.
        occupied.insert(Position::new(3, 0));

        assert_eq!(
            spawner.place(&occupied),
            Err(SpawnError::BoardFull { cells: 3 })
        );
    }

    #[test]
    fn same_seed_places_same_food() {
        let grid = Grid::new(20);
        let occupied = HashSet::from([Position::new(6, 9), Position::new(5, 9)]);
        let mut first = FoodSpawner::with_seed(grid, 42);
        let mut second = FoodSpawner::with_seed(grid, 42);

        for _ in 0..10 {
            assert_eq!(first.place(&occupied), second.place(&occupied));
        }
    }
}
