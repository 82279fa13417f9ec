//! Eating, growth and spawning.

use crate::config::FishConfig;
use crate::lifecycle::{create_fish_with_rng, IdAllocator};
use fishtank_data::{Fish, FishId, Food, FoodId, Viewport};
use rand::Rng;

pub struct GrowthContext<'a, R: Rng> {
    pub config: &'a FishConfig,
    pub viewport: Viewport,
    pub ids: &'a mut IdAllocator,
    pub rng: &'a mut R,
}

/// What happened when a fish reached its food.
#[derive(Debug, Clone, PartialEq)]
pub struct Consumption {
    pub fish: FishId,
    pub food: FoodId,
    /// Size after growth, or 1.0 when the fish spawned.
    pub size: f64,
    pub spawned: Option<Fish>,
}

/// Handles a fish arriving at its food.
///
/// Removes the food, grows the fish and, when the growth threshold is
/// reached, resets the fish to size 1.0 and appends a new fish to `fish`.
/// Returns `None` without touching anything but the fish's target when the
/// food is already gone.
pub fn on_arrival<R: Rng>(
    fish: &mut Vec<Fish>,
    foods: &mut Vec<Food>,
    fish_id: FishId,
    food_id: FoodId,
    ctx: &mut GrowthContext<'_, R>,
) -> Option<Consumption> {
    let fish_idx = fish.iter().position(|f| f.id == fish_id)?;
    fish[fish_idx].target = None;

    let food_idx = foods.iter().position(|f| f.id == food_id)?;
    let mut eaten = foods.remove(food_idx);
    eaten.active = false;
    eaten.assigned_fish = None;

    let eater = &mut fish[fish_idx];
    let grown = eater.size * ctx.config.growth_factor;
    let spawned = if grown >= ctx.config.max_size {
        eater.size = 1.0;
        Some(create_fish_with_rng(ctx.ids, ctx.viewport, ctx.rng))
    } else {
        eater.size = grown;
        None
    };
    let size = eater.size;

    if let Some(baby) = &spawned {
        tracing::debug!(parent = %fish_id, fish = %baby.id, "Fish spawned");
        fish.push(baby.clone());
    }

    Some(Consumption {
        fish: fish_id,
        food: food_id,
        size,
        spawned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup(size: f64) -> (Vec<Fish>, Vec<Food>, IdAllocator) {
        let mut ids = IdAllocator::default();
        let mut fish = Fish::new(ids.fish(), 10.0, 10.0);
        let mut food = Food::new(ids.food(), 12.0, 12.0);
        fish.size = size;
        fish.target = Some(food.id);
        food.assigned_fish = Some(fish.id);
        (vec![fish], vec![food], ids)
    }

    #[test]
    fn test_eating_grows_by_factor() {
        let (mut fish, mut foods, mut ids) = setup(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let config = FishConfig::default();
        let mut ctx = GrowthContext {
            config: &config,
            viewport: Viewport::default(),
            ids: &mut ids,
            rng: &mut rng,
        };
        let out = on_arrival(&mut fish, &mut foods, FishId(1), FoodId(1), &mut ctx)
            .expect("food present");
        assert!((out.size - 1.2).abs() < 1e-12);
        assert!(out.spawned.is_none());
        assert!(foods.is_empty());
        assert!(fish[0].is_idle());
        assert_eq!(fish.len(), 1);
    }

    #[test]
    fn test_threshold_resets_and_spawns() {
        let (mut fish, mut foods, mut ids) = setup(2.1);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let config = FishConfig::default();
        let viewport = Viewport::new(640.0, 480.0);
        let mut ctx = GrowthContext {
            config: &config,
            viewport,
            ids: &mut ids,
            rng: &mut rng,
        };
        let out = on_arrival(&mut fish, &mut foods, FishId(1), FoodId(1), &mut ctx)
            .expect("food present");
        assert_eq!(out.size, 1.0);
        assert_eq!(fish[0].size, 1.0);
        assert_eq!(fish.len(), 2);
        let baby = out.spawned.expect("spawned");
        assert_eq!(baby.id, FishId(2));
        assert_eq!(baby.size, 1.0);
        assert!(baby.is_idle());
        assert!(viewport.contains(baby.position.x, baby.position.y));
    }

    #[test]
    fn test_missing_food_is_a_no_op() {
        let (mut fish, _, mut ids) = setup(1.5);
        let mut foods: Vec<Food> = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let config = FishConfig::default();
        let mut ctx = GrowthContext {
            config: &config,
            viewport: Viewport::default(),
            ids: &mut ids,
            rng: &mut rng,
        };
        assert!(on_arrival(&mut fish, &mut foods, FishId(1), FoodId(1), &mut ctx).is_none());
        assert_eq!(fish[0].size, 1.5);
        assert!(fish[0].is_idle());
        assert_eq!(fish.len(), 1);
    }
}
