use macroquad::prelude::*;

use snake_arcade::grid::CELL_SIZE;
use snake_arcade::{Cell, Direction, GameStatus, Rotation, Snapshot};

pub const HUD_HEIGHT: f32 = 64.0;

const BOARD_LIGHT: Color = Color::new(0.0, 0.39, 0.0, 1.0);
const BOARD_DARK: Color = Color::new(0.13, 0.55, 0.13, 1.0);
const SNAKE_HEAD: Color = Color::new(0.0, 1.0, 0.5, 1.0);
const SNAKE_BODY: Color = Color::new(0.5, 1.0, 0.0, 1.0);
const SNAKE_EDGE: Color = Color::new(0.0, 0.39, 0.0, 1.0);
const FOOD: Color = Color::new(0.85, 0.1, 0.1, 1.0);
const HUD_TEXT: Color = Color::new(0.9, 1.0, 0.9, 1.0);

/// A message shown over the board for a few seconds.
#[derive(Default)]
pub struct Notice {
    message: Option<String>,
    until: f64,
}

impl Notice {
    pub const DURATION: f64 = 5.0;

    pub fn show(&mut self, message: impl Into<String>, now: f64) {
        self.message = Some(message.into());
        self.until = now + Self::DURATION;
    }

    fn current(&self, now: f64) -> Option<&str> {
        self.message.as_deref().filter(|_| now < self.until)
    }
}

/// Brief flash naming the turn just taken.
#[derive(Default)]
pub struct TurnIndicator {
    label: Option<&'static str>,
    until: f64,
}

impl TurnIndicator {
    pub const DURATION: f64 = 0.3;

    pub fn show(&mut self, to: Direction, rotation: Option<Rotation>, now: f64) {
        self.label = Some(turn_label(to, rotation));
        self.until = now + Self::DURATION;
    }

    fn current(&self, now: f64) -> Option<&'static str> {
        self.label.filter(|_| now < self.until)
    }
}

/// Swipes name their rotation; keys name the new heading, with left and
/// right shown as turns.
fn turn_label(to: Direction, rotation: Option<Rotation>) -> &'static str {
    match (rotation, to) {
        (Some(Rotation::Clockwise), _) | (None, Direction::Right) => "CW",
        (Some(Rotation::CounterClockwise), _) | (None, Direction::Left) => "CCW",
        (None, Direction::Up) => "UP",
        (None, Direction::Down) => "DOWN",
    }
}

struct Board {
    off_x: f32,
    off_y: f32,
}

impl Board {
    fn rect(&self, cell: Cell) -> Rect {
        Rect::new(
            self.off_x + cell.x as f32 * CELL_SIZE,
            self.off_y + cell.y as f32 * CELL_SIZE,
            CELL_SIZE,
            CELL_SIZE,
        )
    }
}

fn centered_text(text: &str, y: f32, size: u16, color: Color) {
    let m = measure_text(text, None, size, 1.0);
    draw_text(text, (screen_width() - m.width) * 0.5, y, size as f32, color);
}

pub fn draw(
    snap: &Snapshot<'_>,
    help_open: bool,
    notice: &Notice,
    turn: &TurnIndicator,
    now: f64,
) {
    clear_background(Color::new(0.13, 0.13, 0.13, 1.0));

    let (bw, bh) = snap.grid.pixel_size();
    let board = Board {
        off_x: ((screen_width() - bw) * 0.5).max(0.0),
        off_y: HUD_HEIGHT + ((screen_height() - HUD_HEIGHT - bh) * 0.5).max(0.0),
    };

    for cell in snap.grid.cells() {
        let r = board.rect(cell);
        let color = if (cell.x + cell.y) % 2 == 0 { BOARD_LIGHT } else { BOARD_DARK };
        draw_rectangle(r.x, r.y, r.w, r.h, color);
    }

    if let Some(food) = snap.food {
        let r = board.rect(food);
        draw_circle(r.x + r.w * 0.5, r.y + r.h * 0.5, r.w * 0.5 - 2.0, FOOD);
    }

    for (i, cell) in snap.snake.segments().enumerate() {
        let r = board.rect(cell);
        let color = if i == 0 { SNAKE_HEAD } else { SNAKE_BODY };
        draw_rectangle(r.x, r.y, r.w, r.h, color);
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, SNAKE_EDGE);
    }
    draw_eyes(board.rect(snap.snake.head()), snap.direction);

    if let Some(label) = turn.current(now) {
        let m = measure_text(label, None, 40, 1.0);
        let x = board.off_x + (bw - m.width) * 0.5;
        let y = board.off_y + (bh + m.height) * 0.5;
        draw_text(label, x, y, 40.0, Color::new(1.0, 1.0, 1.0, 0.7));
    }

    draw_hud(snap);
    draw_overlay(snap, help_open);

    if let Some(message) = notice.current(now) {
        centered_text(message, screen_height() - 16.0, 18, Color::new(1.0, 0.4, 0.4, 1.0));
    }
}

fn draw_eyes(head: Rect, direction: Option<Direction>) {
    let Some(direction) = direction else { return };
    let (near, far) = (6.0, 14.0);
    let eyes = match direction {
        Direction::Left => [(near, near), (near, far)],
        Direction::Right => [(far, near), (far, far)],
        Direction::Up => [(near, near), (far, near)],
        Direction::Down => [(near, far), (far, far)],
    };
    for (ex, ey) in eyes {
        draw_circle(head.x + ex, head.y + ey, 2.0, BLACK);
    }
}

fn draw_hud(snap: &Snapshot<'_>) {
    let line = format!(
        "Score: {}   Level: {}   High: {}",
        snap.score, snap.level, snap.high_score
    );
    draw_text(&line, 12.0, 24.0, 24.0, HUD_TEXT);
    let sound = if snap.muted { "M: Unmute" } else { "M: Mute" };
    let hint = format!("Space: Play/Pause   R: Restart   {}   H: Help", sound);
    draw_text(&hint, 12.0, 48.0, 18.0, GRAY);
}

fn draw_overlay(snap: &Snapshot<'_>, help_open: bool) {
    let sh = screen_height();
    if help_open {
        draw_rectangle(0.0, 0.0, screen_width(), sh, Color::new(0.0, 0.0, 0.0, 0.75));
        let lines = [
            "HOW TO PLAY",
            "Arrows / WASD: steer",
            "Swipe right or down: turn clockwise",
            "Swipe left or up: turn counter-clockwise",
            "1-5: level for the next game",
            "Eat food to score; reach 100 to win",
            "Esc / H: close",
        ];
        let mut y = sh * 0.3;
        for (i, text) in lines.iter().enumerate() {
            let size = if i == 0 { 32 } else { 20 };
            centered_text(text, y, size, if i == 0 { SNAKE_HEAD } else { WHITE });
            y += 30.0;
        }
        return;
    }

    let (title, hint) = match snap.status {
        GameStatus::Running => return,
        GameStatus::NotStarted => ("SNAKE", "Space to play, arrows to steer"),
        GameStatus::Paused => ("PAUSED", "Space to resume"),
        GameStatus::GameOver => ("GAME OVER", "R to play again"),
        GameStatus::Won => ("YOU WIN!", "R to play again"),
    };
    draw_rectangle(0.0, 0.0, screen_width(), sh, Color::new(0.0, 0.0, 0.0, 0.4));
    centered_text(title, sh * 0.45, 36, SNAKE_HEAD);
    if snap.status.is_terminal() {
        centered_text(&format!("Score: {}", snap.score), sh * 0.45 + 34.0, 24, WHITE);
    }
    centered_text(hint, sh * 0.45 + 64.0, 20, WHITE);
}
