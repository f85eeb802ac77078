use std::collections::VecDeque;

use crate::grid::{Cell, Grid};
use crate::input::Direction;

/// Body segments, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    pub fn new(start: Cell) -> Self {
        Self { body: VecDeque::from([start]) }
    }

    /// Builds a snake from explicit segments, head first. Returns `None` for an
    /// empty list or one with overlapping segments.
    pub fn from_segments(segments: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        let overlaps = body.iter().enumerate().any(|(i, c)| body.iter().skip(i + 1).any(|o| o == c));
        if overlaps {
            return None;
        }
        Some(Self { body })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn next_head(&self, direction: Direction) -> Cell {
        self.head().step(direction)
    }

    /// Whether moving the head onto `cell` ends the game. The tail is left
    /// out because it moves away on the same tick.
    pub fn would_collide(&self, cell: Cell, grid: &Grid) -> bool {
        if !grid.contains(cell) {
            return true;
        }
        self.body.iter().take(self.body.len() - 1).any(|c| *c == cell)
    }

    /// Moves one cell in `direction` and returns the new head. With `grew`
    /// the tail stays put and the snake gets one segment longer.
    pub fn advance(&mut self, direction: Direction, grew: bool) -> Cell {
        let new_head = self.next_head(direction);
        if !grew {
            self.body.pop_back();
        }
        self.body.push_front(new_head);
        new_head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column() -> Snake {
        // Head at the top, heading up.
        Snake::from_segments([Cell::new(5, 5), Cell::new(5, 6), Cell::new(5, 7), Cell::new(5, 8)])
            .unwrap()
    }

    #[test]
    fn plain_move_keeps_length() {
        let mut snake = Snake::new(Cell::new(9, 10));
        let head = snake.advance(Direction::Right, false);
        assert_eq!(head, Cell::new(10, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(10, 10));
    }

    #[test]
    fn growing_move_keeps_tail() {
        let mut snake = column();
        snake.advance(Direction::Left, true);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.head(), Cell::new(4, 5));
        assert_eq!(snake.tail(), Cell::new(5, 8));
    }

    #[test]
    fn tail_drops_on_plain_move() {
        let mut snake = column();
        snake.advance(Direction::Up, false);
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            vec![Cell::new(5, 4), Cell::new(5, 5), Cell::new(5, 6), Cell::new(5, 7)]
        );
    }

    #[test]
    fn walls_collide() {
        let grid = Grid::new(20, 20);
        let snake = Snake::new(Cell::new(0, 0));
        assert!(snake.would_collide(Cell::new(-1, 0), &grid));
        assert!(snake.would_collide(Cell::new(0, -1), &grid));
        assert!(snake.would_collide(Cell::new(20, 0), &grid));
        assert!(snake.would_collide(Cell::new(0, 20), &grid));
        assert!(!snake.would_collide(Cell::new(1, 0), &grid));
    }

    #[test]
    fn body_collides_but_vacating_tail_does_not() {
        let grid = Grid::new(20, 20);
        let snake = column();
        assert!(snake.would_collide(Cell::new(5, 6), &grid));
        assert!(snake.would_collide(Cell::new(5, 7), &grid));
        assert!(!snake.would_collide(Cell::new(5, 8), &grid));
        assert!(!snake.would_collide(Cell::new(4, 5), &grid));
    }

    #[test]
    fn chasing_the_tail_in_a_loop_is_safe() {
        let grid = Grid::new(20, 20);
        // 2x2 loop: head (1,0), then (0,0), (0,1), tail (1,1).
        let mut snake = Snake::from_segments([
            Cell::new(1, 0),
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
        ])
        .unwrap();
        let next = snake.next_head(Direction::Down);
        assert_eq!(next, snake.tail());
        assert!(!snake.would_collide(next, &grid));
        snake.advance(Direction::Down, false);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn from_segments_rejects_bad_bodies() {
        assert!(Snake::from_segments(Vec::<Cell>::new()).is_none());
        assert!(Snake::from_segments([Cell::new(1, 1), Cell::new(1, 1)]).is_none());
    }
}
