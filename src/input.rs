//! Keyboard and swipe input mapped onto snake headings.
//!
//! Keys are absolute: an arrow names the heading, and only a reversal is
//! refused. Swipes are relative: a rightward or downward stroke turns the
//! snake clockwise, a leftward or upward stroke counter-clockwise.

use log::debug;

/// A swipe slower than this is treated as a tap or a drag and ignored.
pub const SWIPE_TIMEOUT_MS: f64 = 500.0;
/// Minimum travel, in pixels, along at least one axis.
pub const SWIPE_MIN_DISTANCE: f32 = 15.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
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

    pub fn clockwise(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub fn counter_clockwise(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Applies the turn to `current`; with no heading yet a clockwise turn
    /// starts to the right and a counter-clockwise one to the left.
    pub fn apply(self, current: Option<Direction>) -> Direction {
        match (self, current) {
            (Rotation::Clockwise, Some(dir)) => dir.clockwise(),
            (Rotation::CounterClockwise, Some(dir)) => dir.counter_clockwise(),
            (Rotation::Clockwise, None) => Direction::Right,
            (Rotation::CounterClockwise, None) => Direction::Left,
        }
    }
}

/// Accepts `requested` unless it would turn the snake straight back onto itself.
pub fn on_directional_input(requested: Direction, current: Option<Direction>) -> Option<Direction> {
    match current {
        Some(dir) if dir.is_opposite(requested) => None,
        _ => Some(requested),
    }
}

/// Classifies a stroke by its dominant axis. Too slow or too short strokes
/// give `None`.
pub fn classify_swipe(dx: f32, dy: f32, elapsed_ms: f64) -> Option<Rotation> {
    if elapsed_ms > SWIPE_TIMEOUT_MS {
        return None;
    }
    if dx.abs() < SWIPE_MIN_DISTANCE && dy.abs() < SWIPE_MIN_DISTANCE {
        return None;
    }
    let forward = if dx.abs() > dy.abs() { dx > 0.0 } else { dy > 0.0 };
    Some(if forward { Rotation::Clockwise } else { Rotation::CounterClockwise })
}

pub fn on_swipe(dx: f32, dy: f32, elapsed_ms: f64, current: Option<Direction>) -> Option<Direction> {
    classify_swipe(dx, dy, elapsed_ms).map(|rotation| rotation.apply(current))
}

/// Follows one touch from press to release and rate-limits accepted swipes.
///
/// Times are in seconds, matching the frame clock the game loop already uses.
#[derive(Clone, Debug, Default)]
pub struct SwipeTracker {
    start: Option<(f32, f32, f64)>,
    cooldown_until: f64,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32, y: f32, now: f64) {
        self.start = Some((x, y, now));
    }

    /// Finishes the current touch and returns the turn it encodes. An
    /// accepted swipe blocks further swipes for `cooldown_ms`.
    pub fn end(&mut self, x: f32, y: f32, now: f64, cooldown_ms: u64) -> Option<Rotation> {
        let (sx, sy, started_at) = self.start.take()?;
        if now < self.cooldown_until {
            debug!("swipe ignored during cooldown");
            return None;
        }
        let elapsed_ms = (now - started_at) * 1000.0;
        let rotation = classify_swipe(x - sx, y - sy, elapsed_ms)?;
        self.cooldown_until = now + cooldown_ms as f64 / 1000.0;
        Some(rotation)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
