mod audio;
mod render;

use log::{error, info};
use macroquad::prelude::*;

use snake_arcade::{
    Direction, FoodPlacer, GameConfig, GameController, GameEvent, GameStatus, Grid, JsonFileStore,
    SaveData,
};

use audio::AudioCue;
use render::{Notice, TurnIndicator};

const LEVEL_KEYS: [(KeyCode, u32); 5] = [
    (KeyCode::Key1, 1),
    (KeyCode::Key2, 2),
    (KeyCode::Key3, 3),
    (KeyCode::Key4, 4),
    (KeyCode::Key5, 5),
];

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: 480,
        window_height: 560,
        high_dpi: true,
        ..Default::default()
    }
}

fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn viewport_grid() -> Grid {
    Grid::fit(screen_width(), screen_height() - render::HUD_HEIGHT)
}

fn pressed_direction() -> Option<Direction> {
    if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
        Some(Direction::Up)
    } else if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
        Some(Direction::Down)
    } else if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
        Some(Direction::Left)
    } else if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
        Some(Direction::Right)
    } else {
        None
    }
}

fn save_settings(store: &JsonFileStore, notice: &mut Notice, now: f64, edit: impl FnOnce(&mut SaveData)) {
    if let Err(e) = store.update(edit) {
        error!("failed to save settings: {:#}", e);
        notice.show("Failed to save settings", now);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();

    let store = JsonFileStore::default();
    let save = store.load_or_default();
    let mut notice = Notice::default();
    let mut turn = TurnIndicator::default();

    let (mut audio, failures) = AudioCue::load(save.volume, save.muted).await;
    for failure in failures {
        notice.show(failure, get_time());
    }

    let seed = (macroquad::miniquad::date::now() * 1_000_000.0) as u64;
    let mut grid = viewport_grid();
    let mut game = GameController::new(
        GameConfig::with_level(save.level),
        grid,
        FoodPlacer::seeded(seed),
        store.clone(),
    );
    game.set_muted(save.muted);
    let mut help_open = false;
    let mut mouse_down_at: Option<(f32, f32)> = None;
    info!("ready: level {}, high score {}", game.config().level, game.high_score());

    loop {
        let now = get_time();

        if is_key_pressed(KeyCode::Q) {
            break;
        }

        let resized = viewport_grid();
        if resized != grid {
            grid = resized;
            game.set_grid(grid);
        }

        if help_open {
            if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::H) {
                help_open = false;
                info!("help closed");
            }
        } else {
            if is_key_pressed(KeyCode::H) {
                game.pause();
                help_open = true;
                info!("help opened");
            }
            if is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::P) {
                game.toggle_play(now);
            }
            if is_key_pressed(KeyCode::R) {
                game.restart(now);
            }
            if is_key_pressed(KeyCode::M) {
                game.toggle_mute();
                let muted = game.is_muted();
                save_settings(&store, &mut notice, now, |s| s.muted = muted);
            }
            for (key, level) in LEVEL_KEYS {
                if is_key_pressed(key) && game.pending_level() != level {
                    game.set_level(level);
                    info!("level {} selected", level);
                    save_settings(&store, &mut notice, now, |s| s.level = level);
                }
            }
            if let Some(dir) = pressed_direction() {
                game.steer(dir);
            }

            for touch in touches() {
                match touch.phase {
                    TouchPhase::Started => game.touch_start(touch.position.x, touch.position.y, now),
                    TouchPhase::Ended => {
                        game.touch_end(touch.position.x, touch.position.y, now);
                    }
                    _ => {}
                }
            }
            // Mouse drags stand in for swipes on desktop.
            if is_mouse_button_pressed(MouseButton::Left) {
                let (mx, my) = mouse_position();
                mouse_down_at = Some((mx, my));
                game.touch_start(mx, my, now);
            }
            if is_mouse_button_released(MouseButton::Left) && mouse_down_at.take().is_some() {
                let (mx, my) = mouse_position();
                game.touch_end(mx, my, now);
            }
        }

        game.update(now);

        let running = game.status() == GameStatus::Running;
        for event in game.drain_events() {
            if let GameEvent::Turned { to, rotation } = event {
                turn.show(to, rotation, now);
            }
            audio.handle(&event, running);
        }

        render::draw(&game.snapshot(), help_open, &notice, &turn, now);

        next_frame().await;
    }
}
