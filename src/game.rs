use log::{debug, error, info};

use crate::config::{GameConfig, MAX_LEVEL, MIN_LEVEL};
use crate::events::{GameEvent, TickOutcome};
use crate::food::FoodPlacer;
use crate::grid::{Cell, Grid};
use crate::input::{self, Direction, SwipeTracker};
use crate::scheduler::TickClock;
use crate::snake::Snake;
use crate::store::HighScoreStore;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    Running,
    Paused,
    GameOver,
    Won,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Won)
    }
}

/// Read-only view handed to the renderer each frame.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub grid: Grid,
    pub snake: &'a Snake,
    pub food: Option<Cell>,
    pub direction: Option<Direction>,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub muted: bool,
}

pub struct GameController<S: HighScoreStore> {
    config: GameConfig,
    /// Level chosen for the next game; copied into `config` on restart.
    pending_level: u32,
    grid: Grid,
    pending_grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    /// Requested heading, applied on the next tick.
    direction: Option<Direction>,
    /// Heading of the last completed move.
    heading: Option<Direction>,
    score: u32,
    high_score: u32,
    status: GameStatus,
    muted: bool,
    clock: TickClock,
    swipe: SwipeTracker,
    placer: FoodPlacer,
    store: S,
    events: Vec<GameEvent>,
}

impl<S: HighScoreStore> GameController<S> {
    pub fn new(config: GameConfig, grid: Grid, mut placer: FoodPlacer, store: S) -> Self {
        let snake = Snake::new(grid.start_cell());
        let food = placer.place(&grid, &snake);
        let high_score = store.load_high_score();
        let clock = TickClock::new(config.tick_interval_ms());
        Self {
            pending_level: config.level,
            config,
            grid,
            pending_grid: grid,
            snake,
            food,
            direction: None,
            heading: None,
            score: 0,
            high_score,
            status: GameStatus::NotStarted,
            muted: false,
            clock,
            swipe: SwipeTracker::new(),
            placer,
            store,
            events: Vec::new(),
        }
    }

    /// Test hook: replaces the snake, food and heading of a game in progress.
    /// The snake must lie inside the grid.
    #[doc(hidden)]
    pub fn set_board(&mut self, snake: Snake, food: Option<Cell>, direction: Option<Direction>) {
        assert!(
            snake.segments().all(|c| self.grid.contains(c)),
            "snake must lie inside the {}x{} grid",
            self.grid.width,
            self.grid.height
        );
        self.snake = snake;
        self.food = food;
        self.direction = direction;
        self.heading = direction;
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.config.tick_interval_ms()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            snake: &self.snake,
            food: self.food,
            direction: self.direction,
            score: self.score,
            level: self.config.level,
            high_score: self.high_score,
            status: self.status,
            muted: self.muted,
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn start(&mut self, now: f64) {
        if self.status != GameStatus::NotStarted {
            return;
        }
        self.status = GameStatus::Running;
        self.clock.start(now);
        self.events.push(GameEvent::Started);
        info!("game started at level {}", self.config.level);
    }

    pub fn pause(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        self.clock.stop();
        self.status = GameStatus::Paused;
        self.events.push(GameEvent::Paused);
        info!("game paused");
    }

    pub fn resume(&mut self, now: f64) {
        if self.status != GameStatus::Paused {
            return;
        }
        self.status = GameStatus::Running;
        self.clock.start(now);
        self.events.push(GameEvent::Resumed);
        info!("game resumed");
    }

    /// Play/pause button: starts, pauses or resumes. Finished games need a restart.
    pub fn toggle_play(&mut self, now: f64) {
        match self.status {
            GameStatus::NotStarted => self.start(now),
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(now),
            GameStatus::GameOver | GameStatus::Won => {}
        }
    }

    pub fn restart(&mut self, now: f64) {
        self.clock.stop();
        self.status = GameStatus::NotStarted;
        self.config.set_level(self.pending_level);
        self.grid = self.pending_grid;
        self.snake = Snake::new(self.grid.start_cell());
        self.direction = None;
        self.heading = None;
        self.score = 0;
        self.food = self.placer.place(&self.grid, &self.snake);
        self.swipe.reset();
        self.clock.set_interval_ms(self.config.tick_interval_ms());
        self.events.push(GameEvent::Restarted);
        info!(
            "game restarted: level {}, {}ms per tick, {}x{} grid",
            self.config.level,
            self.config.tick_interval_ms(),
            self.grid.width,
            self.grid.height
        );
        self.start(now);
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.events.push(GameEvent::MuteToggled { muted: self.muted });
        info!("mute toggled: {}", self.muted);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Level for the next game. Applied immediately while nothing has moved yet.
    pub fn set_level(&mut self, level: u32) {
        self.pending_level = level.clamp(MIN_LEVEL, MAX_LEVEL);
        if self.status == GameStatus::NotStarted {
            self.config.set_level(level);
            self.clock.set_interval_ms(self.config.tick_interval_ms());
        }
    }

    pub fn pending_level(&self) -> u32 {
        self.pending_level
    }

    /// Board size for the next game.
    pub fn set_grid(&mut self, grid: Grid) {
        self.pending_grid = grid;
    }

    /// Keyboard heading change. Returns whether it was accepted.
    ///
    /// Reversals are judged against the heading the snake last moved in, so
    /// two quick presses between ticks cannot fold it back onto its neck.
    pub fn steer(&mut self, requested: Direction) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        let current = self.heading.or(self.direction);
        match input::on_directional_input(requested, current) {
            Some(dir) => {
                if self.direction != Some(dir) {
                    debug!("direction set: {:?}", dir);
                }
                self.direction = Some(dir);
                self.events.push(GameEvent::Turned { to: dir, rotation: None });
                true
            }
            None => false,
        }
    }

    pub fn touch_start(&mut self, x: f32, y: f32, now: f64) {
        self.swipe.begin(x, y, now);
    }

    /// Ends a touch; swipes only steer a running game.
    pub fn touch_end(&mut self, x: f32, y: f32, now: f64) -> bool {
        if self.status != GameStatus::Running {
            self.swipe.reset();
            return false;
        }
        let cooldown = self.config.tick_interval_ms();
        match self.swipe.end(x, y, now, cooldown) {
            Some(rotation) => {
                let dir = rotation.apply(self.direction);
                debug!("swipe direction: {:?}", dir);
                self.direction = Some(dir);
                self.events.push(GameEvent::Turned { to: dir, rotation: Some(rotation) });
                true
            }
            None => false,
        }
    }

    /// Frame-loop entry point: ticks when the clock says so.
    pub fn update(&mut self, now: f64) -> Option<TickOutcome> {
        if self.status != GameStatus::Running || !self.clock.due(now) {
            return None;
        }
        Some(self.tick())
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }
        let Some(direction) = self.direction else {
            return TickOutcome::Idle;
        };

        let candidate = self.snake.next_head(direction);
        if self.snake.would_collide(candidate, &self.grid) {
            self.finish(GameStatus::GameOver);
            return TickOutcome::GameOver;
        }
        self.heading = Some(direction);

        let mut outcome = if self.food == Some(candidate) {
            self.snake.advance(direction, true);
            let points = self.config.point_value();
            self.score += points;
            self.events.push(GameEvent::Ate { at: candidate, points });
            info!("ate food at ({}, {}), score {}", candidate.x, candidate.y, self.score);
            self.food = self.placer.place(&self.grid, &self.snake);
            TickOutcome::Ate
        } else {
            self.snake.advance(direction, false);
            self.events.push(GameEvent::Moved { head: candidate });
            TickOutcome::Moved
        };

        if self.food.is_none() {
            info!("board filled");
            self.finish(GameStatus::Won);
            outcome = TickOutcome::Won;
        } else if self.score >= self.config.win_score {
            self.finish(GameStatus::Won);
            outcome = TickOutcome::Won;
        }
        outcome
    }

    fn finish(&mut self, status: GameStatus) {
        self.clock.stop();
        self.status = status;
        if self.score > self.high_score {
            self.high_score = self.score;
            if let Err(e) = self.store.save_high_score(self.score) {
                error!("failed to save high score: {:#}", e);
            }
        }
        let score = self.score;
        let event = match status {
            GameStatus::Won => GameEvent::Won { score },
            _ => GameEvent::GameOver { score },
        };
        self.events.push(event);
        info!("{:?} with score {}", status, score);
    }
}
