//! Grid snake: the game state machine and its collaborators, free of any
//! rendering or audio dependency. The `snake_arcade` binary hosts it in a
//! macroquad window.

pub mod config;
pub mod events;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod scheduler;
pub mod snake;
pub mod store;

pub use config::GameConfig;
pub use events::{GameEvent, TickOutcome};
pub use food::FoodPlacer;
pub use game::{GameController, GameStatus, Snapshot};
pub use grid::{Cell, Grid};
pub use input::{Direction, Rotation};
pub use snake::Snake;
pub use store::{HighScoreStore, JsonFileStore, MemoryStore, SaveData};
