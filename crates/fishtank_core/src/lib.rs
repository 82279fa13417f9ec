//! # Fishtank Core
//!
//! The simulation engine for Fishtank: fish chase food pellets dropped into
//! the tank, grow as they eat and multiply once they grow large enough.
//!
//! This crate contains the deterministic simulation logic:
//! - Food physics (sinking, expiry at the floor line)
//! - Greedy assignment of food to the nearest idle fish
//! - Fish motion (idle wander, pursuit steering, boundary clamping)
//! - Growth and spawning on eating
//! - A tick scheduler with an injectable time source
//!
//! ## Example
//!
//! ```
//! use fishtank_core::config::AppConfig;
//! use fishtank_core::tank::Tank;
//! use fishtank_data::Viewport;
//!
//! let mut config = AppConfig::default();
//! config.tank.seed = Some(42);
//! let mut tank = Tank::new(config).unwrap();
//!
//! tank.drop_food(60.0, 40.0);
//! for _ in 0..100 {
//!     tank.update(Viewport::new(800.0, 600.0));
//! }
//! assert_eq!(tank.snapshot().stats.eaten, 1);
//! ```

/// Tick scheduling and time sources
pub mod clock;
/// Configuration management for simulation parameters
pub mod config;
/// Fish creation and id allocation
pub mod lifecycle;
/// Tick timing and structured logging
pub mod metrics;
/// Read-only tank snapshots for rendering and export
pub mod snapshot;
/// Per-tick simulation systems
pub mod systems;
/// The tank aggregate and its tick
pub mod tank;

pub use clock::{ManualTimeSource, Scheduler, SystemTimeSource, Tickable, TimeSource};
pub use metrics::{init_logging, Metrics};
pub use tank::Tank;
