use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Blind samples tried before falling back to a scan of the free cells.
const MAX_SAMPLES: usize = 64;

pub struct FoodPlacer {
    rng: StdRng,
}

impl FoodPlacer {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Picks a uniformly random cell not covered by the snake. `None` means the
    /// snake fills the whole board.
    pub fn place(&mut self, grid: &Grid, snake: &Snake) -> Option<Cell> {
        if snake.len() >= grid.cell_count() {
            return None;
        }
        for _ in 0..MAX_SAMPLES {
            let cell = Cell::new(
                self.rng.random_range(0..grid.width),
                self.rng.random_range(0..grid.height),
            );
            if !snake.contains(cell) {
                return Some(cell);
            }
        }
        debug!("food sampling crowded out, scanning free cells");
        let free: Vec<Cell> = grid.cells().filter(|c| !snake.contains(*c)).collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.random_range(0..free.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_lands_on_the_snake() {
        let grid = Grid::new(4, 4);
        let snake = Snake::from_segments(grid.cells().take(12)).unwrap();
        let mut placer = FoodPlacer::seeded(7);
        for _ in 0..200 {
            let food = placer.place(&grid, &snake).unwrap();
            assert!(grid.contains(food));
            assert!(!snake.contains(food));
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        let grid = Grid::new(5, 5);
        let snake = Snake::from_segments(grid.cells().skip(1)).unwrap();
        let mut placer = FoodPlacer::seeded(1);
        assert_eq!(placer.place(&grid, &snake), Some(Cell::new(0, 0)));
    }

    #[test]
    fn full_board_yields_none() {
        let grid = Grid::new(3, 3);
        let snake = Snake::from_segments(grid.cells()).unwrap();
        let mut placer = FoodPlacer::seeded(1);
        assert_eq!(placer.place(&grid, &snake), None);
    }

    #[test]
    fn same_seed_same_food() {
        let grid = Grid::new(20, 20);
        let snake = Snake::new(grid.start_cell());
        let a = FoodPlacer::seeded(42).place(&grid, &snake);
        let b = FoodPlacer::seeded(42).place(&grid, &snake);
        assert_eq!(a, b);
    }
}
