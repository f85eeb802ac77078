use log::warn;
use serde::{Deserialize, Serialize};

pub const MIN_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 5;

/// Per-game tuning. The level is picked by the player; the rest are fixed
/// defaults that tests may override.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub level: u32,
    pub base_interval_ms: u64,
    pub interval_step_ms: u64,
    pub min_interval_ms: u64,
    pub win_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level: MIN_LEVEL,
            base_interval_ms: 150,
            interval_step_ms: 40,
            min_interval_ms: 30,
            win_score: 100,
        }
    }
}

impl GameConfig {
    pub fn with_level(level: u32) -> Self {
        let mut config = Self::default();
        config.set_level(level);
        config
    }

    pub fn set_level(&mut self, level: u32) {
        let clamped = level.clamp(MIN_LEVEL, MAX_LEVEL);
        if clamped != level {
            warn!("level {} out of range, using {}", level, clamped);
        }
        self.level = clamped;
    }

    /// Milliseconds between ticks; higher levels tick faster.
    pub fn tick_interval_ms(&self) -> u64 {
        let slowdown = u64::from(self.level.saturating_sub(1)) * self.interval_step_ms;
        self.base_interval_ms
            .saturating_sub(slowdown)
            .max(self.min_interval_ms)
            .max(1)
    }

    pub fn point_value(&self) -> u32 {
        self.level.max(MIN_LEVEL)
    }
}
