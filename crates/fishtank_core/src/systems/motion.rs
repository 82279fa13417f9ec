use super::boundary::clamp_to_viewport;
use crate::config::FishConfig;
use fishtank_data::{Fish, FishId, Food, FoodId, Position, Viewport};
use rand::Rng;

/// A pursuing fish that closed in on its target this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    pub fish: FishId,
    pub food: FoodId,
}

/// Steers every pursuing fish a fixed fraction of the way to its target.
///
/// Pursuit is not clamped to the viewport. A fish whose target no longer
/// exists just drops the target. Arrivals are reported, not handled here.
pub fn pursue(fish: &mut [Fish], foods: &[Food], config: &FishConfig) -> Vec<Arrival> {
    let mut arrivals = Vec::new();

    for f in fish.iter_mut() {
        let Some(target_id) = f.target else {
            continue;
        };
        let Some(target) = foods.iter().find(|food| food.id == target_id) else {
            f.target = None;
            continue;
        };

        f.position.x += (target.x - f.position.x) / config.pursuit_divisor;
        f.position.y += (target.y - f.position.y) / config.pursuit_divisor;

        if (f.position.x - target.x).abs() < config.arrival_threshold
            && (f.position.y - target.y).abs() < config.arrival_threshold
        {
            arrivals.push(Arrival {
                fish: f.id,
                food: target_id,
            });
        }
    }
    arrivals
}

/// Random drift for idle fish, clamped to the viewport.
pub fn wander<R: Rng>(fish: &mut [Fish], viewport: Viewport, jitter: f64, rng: &mut R) {
    for f in fish.iter_mut().filter(|f| f.is_idle()) {
        let moved = Position {
            x: f.position.x + rng.gen::<f64>() * 2.0 * jitter - jitter,
            y: f.position.y + rng.gen::<f64>() * 2.0 * jitter - jitter,
        };
        f.position = clamp_to_viewport(moved, viewport);
    }
}
