//! Save file holding the high score and the player's last settings.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::MIN_LEVEL;

pub const SAVE_FILE: &str = "snake_save.json";
pub const DEFAULT_VOLUME: f32 = 0.7;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub high_score: u32,
    pub level: u32,
    pub muted: bool,
    pub volume: f32,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            high_score: 0,
            level: MIN_LEVEL,
            muted: false,
            volume: DEFAULT_VOLUME,
        }
    }
}

/// Where the controller keeps the best score between games.
pub trait HighScoreStore {
    fn load_high_score(&self) -> u32;
    fn save_high_score(&mut self, score: u32) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the save file; a missing file is an empty save.
    pub fn load(&self) -> Result<SaveData> {
        if !self.path.exists() {
            return Ok(SaveData::default());
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", self.path.display()))
    }

    pub fn load_or_default(&self) -> SaveData {
        self.load().unwrap_or_else(|e| {
            warn!("save file unusable, starting fresh: {:#}", e);
            SaveData::default()
        })
    }

    pub fn write(&self, data: &SaveData) -> Result<()> {
        let text = serde_json::to_string_pretty(data).context("encoding save data")?;
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))
    }

    /// Loads, edits and writes back the save file in one go.
    pub fn update(&self, edit: impl FnOnce(&mut SaveData)) -> Result<()> {
        let mut data = self.load_or_default();
        edit(&mut data);
        self.write(&data)
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(SAVE_FILE)
    }
}

impl HighScoreStore for JsonFileStore {
    fn load_high_score(&self) -> u32 {
        self.load_or_default().high_score
    }

    fn save_high_score(&mut self, score: u32) -> Result<()> {
        self.update(|data| data.high_score = score)?;
        info!("new high score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

/// Keeps everything in memory; used headless and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    pub high_score: u32,
    pub writes: usize,
}

impl MemoryStore {
    pub fn with_high_score(high_score: u32) -> Self {
        Self { high_score, writes: 0 }
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> u32 {
        self.high_score
    }

    fn save_high_score(&mut self, score: u32) -> Result<()> {
        self.high_score = score;
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_save_path(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("snake_arcade_{}_{}.json", name, std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let store = JsonFileStore::new(temp_save_path("missing"));
        let data = store.load().unwrap();
        assert_eq!(data, SaveData::default());
        assert_eq!(store.load_high_score(), 0);
    }

    #[test]
    fn high_score_survives_reopen() {
        let path = temp_save_path("reopen");
        let mut store = JsonFileStore::new(&path);
        store.write(&SaveData { level: 3, ..SaveData::default() }).unwrap();
        store.save_high_score(42).unwrap();

        let reopened = JsonFileStore::new(&path);
        let data = reopened.load().unwrap();
        assert_eq!(data.high_score, 42);
        assert_eq!(data.level, 3);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_falls_back() {
        let path = temp_save_path("corrupt");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(store.load().is_err());
        assert_eq!(store.load_or_default(), SaveData::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_file_keeps_known_fields() {
        let path = temp_save_path("partial");
        fs::write(&path, r#"{ "high_score": 17 }"#).unwrap();
        let data = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(data.high_score, 17);
        assert_eq!(data.level, MIN_LEVEL);
        assert_eq!(data.volume, DEFAULT_VOLUME);
        let _ = fs::remove_file(&path);
    }
}
