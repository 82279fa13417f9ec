use async_trait::async_trait;
use fishtank_core::systems::audio::{AudioDriver, AudioEvent, NullAudioDriver};
use std::collections::VecDeque;
use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};

/// Queues audio cues during a frame and hands them to the driver once per
/// frame, after the tank has ticked.
pub struct AudioSystem {
    pub enabled: bool,
    pub volume: f32,
    driver: Box<dyn AudioDriver>,
    event_queue: VecDeque<AudioEvent>,
}

impl Default for AudioSystem {
    fn default() -> Self {
        Self {
            enabled: false,
            volume: 0.5,
            driver: Box::new(NullAudioDriver),
            event_queue: VecDeque::with_capacity(32),
        }
    }
}

impl AudioSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_driver(driver: Box<dyn AudioDriver>) -> Self {
        Self {
            enabled: true,
            driver,
            ..Self::default()
        }
    }

    /// Toggle audio on/off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        tracing::info!(
            "Audio {}",
            if self.enabled { "enabled" } else { "disabled" }
        );
    }

    /// Set volume (0.0 to 1.0)
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.driver.set_volume(self.volume);
    }

    /// Queue an audio event for playback
    pub fn queue_event(&mut self, event: AudioEvent) {
        if self.enabled {
            self.event_queue.push_back(event);
        }
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.event_queue.len()
    }

    /// Sends all queued cues to the driver, in order.
    pub async fn process_queue(&mut self) {
        if !self.enabled {
            self.event_queue.clear();
            return;
        }
        while let Some(event) = self.event_queue.pop_front() {
            tracing::trace!(?event, "Audio event");
            self.driver.play_effect(event).await;
        }
    }
}

/// Rings the terminal bell on every chomp. Music cues are ignored; there is
/// no way to stream a track through a terminal.
pub struct TerminalBellDriver {
    volume_bits: AtomicU32,
}

impl Default for TerminalBellDriver {
    fn default() -> Self {
        Self {
            volume_bits: AtomicU32::new(0.5f32.to_bits()),
        }
    }
}

impl TerminalBellDriver {
    fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }
}

#[async_trait]
impl AudioDriver for TerminalBellDriver {
    async fn play_effect(&self, event: AudioEvent) {
        if event == AudioEvent::Chomp && self.volume() > 0.0 {
            let mut out = std::io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }

    fn set_volume(&self, volume: f32) {
        self.volume_bits.store(volume.to_bits(), Ordering::Relaxed);
    }
}
