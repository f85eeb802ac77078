use log::{error, warn};
use macroquad::audio::{self, PlaySoundParams, Sound, load_sound_from_bytes};

use snake_arcade::GameEvent;

const SAMPLE_RATE: u32 = 44100;
/// The move click is much quieter than the other cues.
const MOVE_VOLUME_SHARE: f32 = 0.3;
const MUSIC_VOLUME_SHARE: f32 = 0.4;

// Simple WAV (PCM16 mono) writer for a run of sine tones
fn generate_wav_tones(tones: &[(f32, f32)], volume: f32) -> Vec<u8> {
    let num_samples: u32 = tones
        .iter()
        .map(|(_, secs)| (secs * SAMPLE_RATE as f32) as u32)
        .sum();
    let mut data: Vec<u8> = Vec::with_capacity((num_samples as usize) * 2 + 44);

    let block_align: u16 = 2; // mono 16-bit
    let byte_rate: u32 = SAMPLE_RATE * block_align as u32;
    let data_size: u32 = num_samples * 2;
    let chunk_size: u32 = 36 + data_size;

    // RIFF header
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&chunk_size.to_le_bytes());
    data.extend_from_slice(b"WAVE");
    // fmt chunk
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // channels
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes());
    // data chunk
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    for &(frequency_hz, secs) in tones {
        let samples = (secs * SAMPLE_RATE as f32) as u32;
        for n in 0..samples {
            let t = n as f32 / SAMPLE_RATE as f32;
            // short fade at both ends keeps joins click-free
            let edge = (n.min(samples - n) as f32 / 200.0).min(1.0);
            let wave = (std::f32::consts::TAU * frequency_hz * t).sin();
            let sample = (amplitude * edge * wave * i16::MAX as f32) as i16;
            data.extend_from_slice(&sample.to_le_bytes());
        }
    }
    data
}

async fn load_cue(name: &str, tones: &[(f32, f32)], failures: &mut Vec<String>) -> Option<Sound> {
    match load_sound_from_bytes(&generate_wav_tones(tones, 0.8)).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            error!("failed to load audio cue {}: {:?}", name, e);
            failures.push(format!("Audio failed to load: {}", name));
            None
        }
    }
}

/// Plays cues for game events. Missing sounds are skipped silently.
pub struct AudioCue {
    eat: Option<Sound>,
    step: Option<Sound>,
    game_over: Option<Sound>,
    win: Option<Sound>,
    music: Option<Sound>,
    volume: f32,
    muted: bool,
    music_playing: bool,
}

impl AudioCue {
    /// Builds every cue; the second value lists the ones that failed.
    pub async fn load(volume: f32, muted: bool) -> (Self, Vec<String>) {
        let mut failures = Vec::new();
        let eat = load_cue("eat", &[(660.0, 0.05), (880.0, 0.07)], &mut failures).await;
        let step = load_cue("move", &[(1400.0, 0.015)], &mut failures).await;
        let game_over = load_cue(
            "game over",
            &[(392.0, 0.2), (370.0, 0.2), (349.0, 0.2), (330.0, 0.5)],
            &mut failures,
        )
        .await;
        let win = load_cue("win", &[(523.0, 0.12), (659.0, 0.12), (784.0, 0.12), (1047.0, 0.4)], &mut failures).await;
        let music = load_cue(
            "music",
            &[
                (262.0, 0.25),
                (330.0, 0.25),
                (392.0, 0.25),
                (330.0, 0.25),
                (294.0, 0.25),
                (349.0, 0.25),
                (440.0, 0.25),
                (349.0, 0.25),
            ],
            &mut failures,
        )
        .await;

        let cue = Self {
            eat,
            step,
            game_over,
            win,
            music,
            volume: volume.clamp(0.0, 1.0),
            muted,
            music_playing: false,
        };
        (cue, failures)
    }

    pub fn handle(&mut self, event: &GameEvent, running: bool) {
        match event {
            GameEvent::Started | GameEvent::Resumed => self.start_music(),
            GameEvent::Paused | GameEvent::Restarted => self.stop_music(),
            GameEvent::Moved { .. } => self.play(&self.step, self.volume * MOVE_VOLUME_SHARE),
            GameEvent::Ate { .. } => self.play(&self.eat, self.volume),
            GameEvent::GameOver { .. } => {
                self.stop_music();
                self.play(&self.game_over, self.volume);
            }
            GameEvent::Won { .. } => {
                self.stop_music();
                self.play(&self.win, self.volume);
            }
            GameEvent::Turned { .. } => {}
            GameEvent::MuteToggled { muted } => {
                self.muted = *muted;
                if self.muted {
                    self.stop_music();
                } else if running {
                    self.start_music();
                }
            }
        }
    }

    fn play(&self, sound: &Option<Sound>, volume: f32) {
        if self.muted {
            return;
        }
        if let Some(sound) = sound {
            audio::play_sound(sound, PlaySoundParams { looped: false, volume });
        }
    }

    fn start_music(&mut self) {
        if self.muted || self.music_playing {
            return;
        }
        match &self.music {
            Some(music) => {
                audio::play_sound(
                    music,
                    PlaySoundParams { looped: true, volume: self.volume * MUSIC_VOLUME_SHARE },
                );
                self.music_playing = true;
            }
            None => warn!("background music unavailable"),
        }
    }

    fn stop_music(&mut self) {
        if let Some(music) = &self.music {
            audio::stop_sound(music);
        }
        self.music_playing = false;
    }
}
