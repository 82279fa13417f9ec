//! Greedy matching of unclaimed food to idle fish.
//!
//! Each unclaimed pellet, in collection order, looks up the single nearest
//! fish over the whole school. The pair is committed only when that fish is
//! idle. A busy nearest fish leaves the pellet unclaimed for this pass, even
//! if some farther fish is free. Such a pellet waits until its nearest fish
//! finishes eating, or sinks to the floor first.

use fishtank_data::{Fish, FishId, Food, FoodId};

/// Index of the fish closest to `(x, y)`. Ties go to the earliest fish.
#[must_use]
pub fn nearest_fish(fish: &[Fish], x: f64, y: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, f) in fish.iter().enumerate() {
        let dist = f.position.distance_to(x, y);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((idx, dist)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Runs one assignment pass and returns the pairs formed.
///
/// Already-claimed pellets are skipped, so calling this again in the same
/// tick changes nothing.
pub fn reconcile(fish: &mut [Fish], foods: &mut [Food]) -> Vec<(FishId, FoodId)> {
    let mut formed = Vec::new();
    if fish.is_empty() {
        return formed;
    }

    for food in foods.iter_mut().filter(|f| f.is_unclaimed()) {
        let Some(idx) = nearest_fish(fish, food.x, food.y) else {
            continue;
        };
        let candidate = &mut fish[idx];
        if !candidate.is_idle() {
            continue;
        }
        food.assigned_fish = Some(candidate.id);
        candidate.target = Some(food.id);
        tracing::debug!(fish = %candidate.id, food = %food.id, "Food assigned");
        formed.push((candidate.id, food.id));
    }
    formed
}
