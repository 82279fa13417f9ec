//! Tick scheduling.
//!
//! The simulation advances in discrete ticks. A [`Scheduler`] decides how
//! many ticks are due from a [`TimeSource`], so tests can drive it with a
//! [`ManualTimeSource`] instead of wall-clock time.

use fishtank_data::{TankEvent, Viewport};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Ticks that may be run in one poll after the driver stalled. The rest of
/// the backlog is dropped.
pub const DEFAULT_MAX_CATCH_UP: u32 = 4;

/// Monotonic time, measured from an arbitrary origin.
pub trait TimeSource {
    fn now(&self) -> Duration;
}

pub struct SystemTimeSource {
    origin: Instant,
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-cranked time. Clones share the same clock.
#[derive(Clone, Default)]
pub struct ManualTimeSource {
    nanos: Arc<AtomicU64>,
}

impl ManualTimeSource {
    pub fn advance(&self, by: Duration) {
        self.nanos
            .fetch_add(by.as_nanos() as u64, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}

/// Anything that can be advanced by one logical tick.
pub trait Tickable {
    fn tick(&mut self, viewport: Viewport) -> Vec<TankEvent>;
}

/// Fixed-rate tick driver with start/stop.
///
/// Stopping takes effect immediately; nothing spans more than one tick so
/// there is nothing to drain.
pub struct Scheduler<T: TimeSource> {
    source: T,
    interval: Duration,
    last_tick: Duration,
    running: bool,
    max_catch_up: u32,
}

impl<T: TimeSource> Scheduler<T> {
    pub fn new(source: T, interval: Duration) -> Self {
        Self {
            source,
            interval: interval.max(Duration::from_micros(1)),
            last_tick: Duration::ZERO,
            running: false,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
        }
    }

    #[must_use]
    pub fn with_max_catch_up(mut self, ticks: u32) -> Self {
        self.max_catch_up = ticks.max(1);
        self
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.last_tick = self.source.now();
            tracing::debug!(interval_us = self.interval.as_micros() as u64, "Scheduler started");
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            tracing::debug!("Scheduler stopped");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of ticks that should run now. Consumes them.
    pub fn due_ticks(&mut self) -> u32 {
        if !self.running {
            return 0;
        }
        let now = self.source.now();
        let elapsed = now.saturating_sub(self.last_tick);
        let due = (elapsed.as_nanos() / self.interval.as_nanos()) as u64;
        if due == 0 {
            return 0;
        }
        if due > u64::from(self.max_catch_up) {
            tracing::debug!(skipped = due - u64::from(self.max_catch_up), "Dropping tick backlog");
            self.last_tick = now;
            return self.max_catch_up;
        }
        self.last_tick += self.interval * due as u32;
        due as u32
    }

    /// Runs every due tick against `target`, collecting the events.
    pub fn run_due<S: Tickable>(&mut self, target: &mut S, viewport: Viewport) -> Vec<TankEvent> {
        let mut events = Vec::new();
        for _ in 0..self.due_ticks() {
            events.extend(target.tick(viewport));
        }
        events
    }

    /// Time until the next tick is due, for sleeping or polling input.
    #[must_use]
    pub fn time_to_next_tick(&self) -> Duration {
        let elapsed = self.source.now().saturating_sub(self.last_tick);
        self.interval.saturating_sub(elapsed)
    }
}
