//! Runs the tank without a terminal for a fixed number of ticks.

use anyhow::Result;
use fishtank_data::{TankEvent, Viewport};

use crate::model::config::AppConfig;
use crate::model::snapshot::TankSnapshot;
use crate::model::tank::Tank;

#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    pub ticks: u64,
    /// Pellets dropped before the first tick.
    pub drops: Vec<(f64, f64)>,
    pub viewport: Option<Viewport>,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self {
            ticks: 1000,
            drops: Vec::new(),
            viewport: None,
        }
    }
}

#[derive(Debug)]
pub struct HeadlessReport {
    pub snapshot: TankSnapshot,
    pub events: Vec<TankEvent>,
}

/// Parses a `X,Y` drop point. Both coordinates must be finite.
pub fn parse_drop(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("drop point must be finite, got '{s}'"));
    }
    Ok((x, y))
}

pub fn run(config: AppConfig, options: &HeadlessOptions) -> Result<HeadlessReport> {
    let mut tank = Tank::new(config)?;
    let viewport = options.viewport.unwrap_or_else(|| tank.viewport());
    tracing::info!(
        seed = tank.seed(),
        ticks = options.ticks,
        drops = options.drops.len(),
        "Headless run starting"
    );

    let mut events = Vec::new();
    for &(x, y) in &options.drops {
        events.extend(tank.drop_food(x, y));
    }
    for _ in 0..options.ticks {
        events.extend(tank.update(viewport));
    }

    let snapshot = tank.snapshot();
    tracing::info!(
        tick = snapshot.tick,
        fish = snapshot.fish.len(),
        food = snapshot.food.len(),
        eaten = snapshot.stats.eaten,
        spawned = snapshot.stats.spawned,
        expired = snapshot.stats.expired,
        "Headless run finished"
    );
    Ok(HeadlessReport { snapshot, events })
}
