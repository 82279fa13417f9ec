use fishtank_data::{Fish, FishId, Food, FoodId, Viewport};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Hands out fish and food ids. Ids start at 1 and are never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdAllocator {
    next_fish: u64,
    next_food: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            next_fish: 1,
            next_food: 1,
        }
    }
}

impl IdAllocator {
    pub fn fish(&mut self) -> FishId {
        let id = FishId(self.next_fish);
        self.next_fish += 1;
        id
    }

    pub fn food(&mut self) -> FoodId {
        let id = FoodId(self.next_food);
        self.next_food += 1;
        id
    }
}

pub fn create_fish(ids: &mut IdAllocator, x: f64, y: f64) -> Fish {
    Fish::new(ids.fish(), x, y)
}

/// A new fish at a uniformly random point of the viewport.
pub fn create_fish_with_rng<R: Rng>(ids: &mut IdAllocator, viewport: Viewport, rng: &mut R) -> Fish {
    let x = rng.gen::<f64>() * viewport.width.max(0.0);
    let y = rng.gen::<f64>() * viewport.height.max(0.0);
    create_fish(ids, x, y)
}

/// Clears the target of any fish that was chasing one of `removed`.
pub fn release_targets(fish: &mut [Fish], removed: &[Food]) {
    for food in removed {
        let Some(owner) = food.assigned_fish else {
            continue;
        };
        if let Some(f) = fish
            .iter_mut()
            .find(|f| f.id == owner && f.target == Some(food.id))
        {
            f.target = None;
        }
    }
}
