//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and tick timing for monitoring
//! simulation performance and health.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// How often a tick summary is logged at info level.
const SUMMARY_INTERVAL: u64 = 1000;

/// Metrics collector for simulation statistics.
pub struct Metrics {
    tick_count: AtomicU64,
    fish_count: AtomicU64,
    food_count: AtomicU64,
    slowest_tick_us: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            fish_count: AtomicU64::new(0),
            food_count: AtomicU64::new(0),
            slowest_tick_us: AtomicU64::new(0),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, fish: usize, food: usize) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        self.fish_count.store(fish as u64, Ordering::Relaxed);
        self.food_count.store(food as u64, Ordering::Relaxed);
        self.slowest_tick_us
            .fetch_max(duration.as_micros() as u64, Ordering::Relaxed);

        let tick = self.tick_count.load(Ordering::Relaxed);
        if tick % SUMMARY_INTERVAL == 0 {
            tracing::info!(
                tick = tick,
                fish = fish,
                food = food,
                duration_us = duration.as_micros() as u64,
                slowest_us = self.slowest_tick_us.load(Ordering::Relaxed),
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn fish_count(&self) -> u64 {
        self.fish_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn food_count(&self) -> u64 {
        self.food_count.load(Ordering::Relaxed)
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` wins over `default_level` when set.
pub fn init_logging(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
