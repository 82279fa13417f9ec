//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every tuning constant of the tank can be
//! overridden there; anything missing falls back to the defaults below.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impl)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command line flags for the seed and tick rate
//!
//! ## Example `config.toml`
//!
//! ```toml
//! target_fps = 60
//!
//! [tank]
//! width = 800.0
//! height = 600.0
//! seed = 42
//!
//! [food]
//! gravity = 0.5
//! floor_margin = 100.0
//!
//! [fish]
//! growth_factor = 1.2
//! max_size = 2.5
//! ```

use serde::{Deserialize, Serialize};

/// Tank-level configuration: initial viewport, population and RNG seed.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TankConfig {
    /// Viewport width used until the driver reports a real one.
    pub width: f64,
    /// Viewport height used until the driver reports a real one.
    pub height: f64,
    pub initial_fish: usize,
    /// Where the first fish starts. Extra initial fish are scattered randomly.
    pub seed_fish_x: f64,
    pub seed_fish_y: f64,
    pub seed: Option<u64>,
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            initial_fish: 1,
            seed_fish_x: 50.0,
            seed_fish_y: 50.0,
            seed: None,
        }
    }
}

/// Food physics.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FoodConfig {
    /// Distance fallen per tick. Not scaled by real elapsed time.
    pub gravity: f64,
    /// Food expires once it sinks to `height - floor_margin`.
    pub floor_margin: f64,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            floor_margin: 100.0,
        }
    }
}

/// Fish motion and growth.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FishConfig {
    /// Idle fish drift by up to this much per axis per tick.
    pub wander_jitter: f64,
    /// A pursuing fish covers `1 / pursuit_divisor` of the gap each tick.
    pub pursuit_divisor: f64,
    /// Per-axis distance under which a pursuing fish eats its target.
    pub arrival_threshold: f64,
    pub growth_factor: f64,
    pub max_size: f64,
}

impl Default for FishConfig {
    fn default() -> Self {
        Self {
            wander_jitter: 10.0,
            pursuit_divisor: 10.0,
            arrival_threshold: 5.0,
            growth_factor: 1.2,
            max_size: 2.5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub tank: TankConfig,
    pub food: FoodConfig,
    pub fish: FishConfig,
    pub target_fps: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tank: TankConfig::default(),
            food: FoodConfig::default(),
            fish: FishConfig::default(),
            target_fps: 60,
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // Tank validation
        anyhow::ensure!(
            self.tank.width.is_finite() && self.tank.width > 0.0,
            "Tank width must be positive"
        );
        anyhow::ensure!(
            self.tank.height.is_finite() && self.tank.height > 0.0,
            "Tank height must be positive"
        );
        anyhow::ensure!(
            self.tank.initial_fish <= 10000,
            "Initial fish count too large (max 10000)"
        );
        anyhow::ensure!(
            self.tank.seed_fish_x.is_finite() && self.tank.seed_fish_y.is_finite(),
            "Seed fish position must be finite"
        );

        // Food validation
        anyhow::ensure!(
            self.food.gravity.is_finite() && self.food.gravity > 0.0,
            "Gravity must be positive"
        );
        anyhow::ensure!(
            self.food.floor_margin.is_finite() && self.food.floor_margin >= 0.0,
            "Floor margin must be non-negative"
        );

        // Fish validation
        anyhow::ensure!(
            self.fish.wander_jitter >= 0.0,
            "Wander jitter must be non-negative"
        );
        anyhow::ensure!(
            self.fish.pursuit_divisor >= 1.0,
            "Pursuit divisor must be at least 1.0"
        );
        anyhow::ensure!(
            self.fish.arrival_threshold > 0.0,
            "Arrival threshold must be positive"
        );
        anyhow::ensure!(
            self.fish.growth_factor > 1.0,
            "Growth factor must be greater than 1.0"
        );
        anyhow::ensure!(
            self.fish.max_size > 1.0,
            "Max size must be greater than 1.0"
        );

        // Target FPS validation
        anyhow::ensure!(self.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(self.target_fps <= 240, "Target FPS too high (max 240)");

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_nanos(1_000_000_000 / self.target_fps.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_gravity() {
        let config = AppConfig {
            food: FoodConfig {
                gravity: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_growth_factor_must_grow() {
        let config = AppConfig {
            fish: FishConfig {
                growth_factor: 1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_tank_width() {
        let config = AppConfig {
            tank: TankConfig {
                width: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_target_fps() {
        let config = AppConfig {
            target_fps: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("[food]\ngravity = 2.0\n").expect("parse");
        assert_eq!(config.food.gravity, 2.0);
        assert_eq!(config.food.floor_margin, 100.0);
        assert_eq!(config.fish.max_size, 2.5);
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        assert!(AppConfig::from_toml("[fish]\nmax_size = 0.5\n").is_err());
    }

    #[test]
    fn test_tick_interval() {
        let config = AppConfig {
            target_fps: 50,
            ..Default::default()
        };
        assert_eq!(config.tick_interval(), std::time::Duration::from_millis(20));
    }
}
