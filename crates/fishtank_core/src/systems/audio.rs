//! Audio cue abstraction for the tank.
//!
//! The simulation never plays sound itself. It reports [`TankEvent`]s and
//! the outer layer turns them into [`AudioEvent`]s for an [`AudioDriver`].

use async_trait::async_trait;
use fishtank_data::TankEvent;
use serde::{Deserialize, Serialize};

/// Categories of audio cues that can be triggered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AudioEvent {
    /// A fish ate a pellet.
    Chomp,
    /// A new fish appeared.
    Spawn,
    /// Background music begins. Sent once per session.
    MusicStart,
    MusicPause,
    MusicResume,
}

impl AudioEvent {
    /// The cue for a tank event, if it has one.
    #[must_use]
    pub fn for_tank_event(event: &TankEvent) -> Option<Self> {
        match event {
            TankEvent::Eaten { .. } => Some(Self::Chomp),
            TankEvent::Spawned { .. } => Some(Self::Spawn),
            TankEvent::FirstInteraction => Some(Self::MusicStart),
            _ => None,
        }
    }
}

/// Hardware-independent trait for audio drivers.
#[async_trait]
pub trait AudioDriver: Send + Sync {
    /// Plays a one-shot cue or changes the music state.
    async fn play_effect(&self, event: AudioEvent);

    /// Sets the master volume (0.0 to 1.0).
    fn set_volume(&self, volume: f32);
}

/// Null audio driver that discards all commands.
pub struct NullAudioDriver;

#[async_trait]
impl AudioDriver for NullAudioDriver {
    async fn play_effect(&self, _event: AudioEvent) {}
    fn set_volume(&self, _volume: f32) {}
}
