use anyhow::Result;
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::time::Instant;

use crate::app::audio::AudioSystem;
use crate::error::AppError;
use crate::model::config::AppConfig;
use crate::model::persistence;
use crate::model::snapshot::TankSnapshot;
use crate::model::tank::Tank;
use fishtank_core::systems::audio::AudioEvent;
use fishtank_core::{Scheduler, SystemTimeSource};
use fishtank_data::{TankEvent, Viewport};
use fishtank_tui::TankWidget;

pub struct App {
    pub running: bool,
    pub paused: bool,
    pub tank: Tank,
    pub config: AppConfig,
    pub scheduler: Scheduler<SystemTimeSource>,
    pub latest_snapshot: TankSnapshot,
    // Audio
    pub audio: AudioSystem,
    pub music_started: bool,
    pub music_playing: bool,
    // FPS & Timing
    pub fps: f64,
    pub frame_count: u64,
    pub last_fps_update: Instant,
    // Layout tracking
    pub last_tank_rect: Rect,
    /// Where to write the final snapshot on exit.
    pub snapshot_path: Option<PathBuf>,
}

impl App {
    /// Reads `path`, falling back to defaults when it is missing or invalid.
    /// A default file is written when none exists.
    pub fn load_config(path: &str) -> AppConfig {
        match persistence::load_config(path) {
            Ok(config) => config,
            Err(AppError::FileSystem(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                let default = AppConfig::default();
                if let Ok(toml_str) = toml::to_string(&default) {
                    let _ = std::fs::write(path, toml_str);
                }
                default
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path, e);
                AppConfig::default()
            }
        }
    }

    pub fn new(config: AppConfig, audio: AudioSystem) -> Result<Self> {
        let tank = Tank::new(config.clone())?;
        let latest_snapshot = tank.snapshot();
        let scheduler = Scheduler::new(SystemTimeSource::default(), config.tick_interval());

        Ok(Self {
            running: true,
            paused: false,
            tank,
            config,
            scheduler,
            latest_snapshot,
            audio,
            music_started: false,
            music_playing: false,
            fps: 0.0,
            frame_count: 0,
            last_fps_update: Instant::now(),
            last_tank_rect: Rect::default(),
            snapshot_path: None,
        })
    }

    /// Viewport of the tank as currently drawn. Until the first frame this is
    /// the configured size.
    pub fn viewport(&self) -> Viewport {
        if self.last_tank_rect.width > 2 && self.last_tank_rect.height > 2 {
            TankWidget::viewport_for_area(self.last_tank_rect)
        } else {
            Viewport::new(self.config.tank.width, self.config.tank.height)
        }
    }

    pub fn drop_food(&mut self, x: f64, y: f64) {
        let events = self.tank.drop_food(x, y);
        self.handle_tank_events(&events);
        self.latest_snapshot = self.tank.snapshot();
    }

    /// Runs whatever ticks the scheduler says are due.
    pub fn update_tank(&mut self) {
        if self.paused {
            return;
        }
        let viewport = self.viewport();
        let before = self.tank.tick;
        let events = self.scheduler.run_due(&mut self.tank, viewport);
        self.handle_tank_events(&events);
        if self.tank.tick != before {
            self.latest_snapshot = self.tank.snapshot();
        }
    }

    /// Routes tank events to audio cues.
    pub fn handle_tank_events(&mut self, events: &[TankEvent]) {
        for event in events {
            match event {
                TankEvent::FirstInteraction => self.start_music(),
                other => {
                    if let Some(cue) = AudioEvent::for_tank_event(other) {
                        self.audio.queue_event(cue);
                    }
                }
            }
        }
    }

    fn start_music(&mut self) {
        if self.music_started {
            return;
        }
        self.music_started = true;
        self.music_playing = true;
        self.audio.queue_event(AudioEvent::MusicStart);
        tracing::info!("Background music started");
    }

    pub fn toggle_music(&mut self) {
        if !self.music_started {
            self.start_music();
            return;
        }
        self.music_playing = !self.music_playing;
        self.audio.queue_event(if self.music_playing {
            AudioEvent::MusicResume
        } else {
            AudioEvent::MusicPause
        });
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            self.scheduler.stop();
        } else {
            self.scheduler.start();
        }
    }

    pub fn update_fps(&mut self) {
        self.frame_count += 1;
        let elapsed = self.last_fps_update.elapsed();
        if elapsed.as_secs_f64() >= 1.0 {
            self.fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_fps_update = Instant::now();
        }
    }
}
