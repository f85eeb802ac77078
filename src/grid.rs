use crate::input::Direction;

/// Side of one cell in pixels.
pub const CELL_SIZE: f32 = 20.0;
/// Largest board side in pixels; the board never grows past 20x20 cells.
pub const MAX_BOARD_PX: f32 = 400.0;
/// Share of the viewport width the board may use.
pub const VIEWPORT_SHARE: f32 = 0.9;

const START_CELL: Cell = Cell { x: 9, y: 10 };

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit away in `direction`.
    pub fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell { x: self.x + dx, y: self.y + dy }
    }
}

/// Playable area in cells, bounded by `[0, width) x [0, height)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width: width.max(1), height: height.max(1) }
    }

    /// Square board sized to the viewport: `min(width * 0.9, 400)` px rounded
    /// down to whole cells.
    pub fn from_viewport(viewport_width: f32) -> Self {
        Self::fit(viewport_width, f32::INFINITY)
    }

    /// Like [`Grid::from_viewport`], but also keeps the board within
    /// `height` px of vertical space.
    pub fn fit(width: f32, height: f32) -> Self {
        let side_px = (width * VIEWPORT_SHARE).min(MAX_BOARD_PX).min(height);
        let cells = (side_px / CELL_SIZE).floor() as i32;
        Self::new(cells, cells)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Where a fresh snake spawns, pulled inside the grid on small boards.
    pub fn start_cell(&self) -> Cell {
        Cell {
            x: START_CELL.x.min(self.width - 1),
            y: START_CELL.y.min(self.height - 1),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell { x, y }))
    }

    pub fn pixel_size(&self) -> (f32, f32) {
        (self.width as f32 * CELL_SIZE, self.height as f32 * CELL_SIZE)
    }
}

impl Default for Grid {
    fn default() -> Self {
        let cells = (MAX_BOARD_PX / CELL_SIZE) as i32;
        Self::new(cells, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_is_capped_at_twenty_cells() {
        assert_eq!(Grid::from_viewport(1920.0), Grid::new(20, 20));
        assert_eq!(Grid::default(), Grid::new(20, 20));
    }

    #[test]
    fn narrow_viewport_rounds_down_to_whole_cells() {
        // 300 * 0.9 = 270px -> 13 cells
        assert_eq!(Grid::from_viewport(300.0), Grid::new(13, 13));
        assert_eq!(Grid::from_viewport(5.0), Grid::new(1, 1));
    }

    #[test]
    fn fit_leaves_room_above_the_board() {
        // 480x440 window with a 64px bar on top: 376px left, 18 cells.
        assert_eq!(Grid::fit(480.0, 376.0), Grid::new(18, 18));
        assert_eq!(Grid::fit(480.0, 496.0), Grid::new(20, 20));
        assert_eq!(Grid::fit(300.0, 1000.0), Grid::from_viewport(300.0));
        assert_eq!(Grid::fit(480.0, -10.0), Grid::new(1, 1));
    }

    #[test]
    fn bounds_are_half_open() {
        let grid = Grid::new(20, 20);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(19, 19)));
        assert!(!grid.contains(Cell::new(20, 5)));
        assert!(!grid.contains(Cell::new(5, 20)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(0, -1)));
    }

    #[test]
    fn start_cell_stays_inside_small_grids() {
        assert_eq!(Grid::new(20, 20).start_cell(), Cell::new(9, 10));
        assert_eq!(Grid::new(8, 8).start_cell(), Cell::new(7, 7));
    }

    #[test]
    fn step_moves_one_unit() {
        let c = Cell::new(5, 5);
        assert_eq!(c.step(Direction::Up), Cell::new(5, 4));
        assert_eq!(c.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(c.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(c.step(Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn cells_covers_the_whole_grid() {
        let grid = Grid::new(3, 2);
        let all: Vec<Cell> = grid.cells().collect();
        assert_eq!(all.len(), grid.cell_count());
        assert_eq!(all[0], Cell::new(0, 0));
        assert_eq!(all[5], Cell::new(2, 1));
    }
}
