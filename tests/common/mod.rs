use fishtank_data::{FishId, FoodId, Viewport};
use fishtank_lib::model::config::AppConfig;
use fishtank_lib::model::tank::Tank;

#[allow(dead_code)]
pub const VIEWPORT: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

/// Builds a tank with no starting school and no wander jitter, so fish only
/// move when they chase something.
#[allow(dead_code)]
pub struct TankBuilder {
    config: AppConfig,
    fish: Vec<(f64, f64, f64)>,
    food: Vec<(f64, f64)>,
}

#[allow(dead_code)]
impl TankBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.tank.initial_fish = 0;
        config.tank.seed = Some(42);
        config.fish.wander_jitter = 0.0;
        Self {
            config,
            fish: Vec::new(),
            food: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.tank.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_fish(mut self, x: f64, y: f64) -> Self {
        self.fish.push((x, y, 1.0));
        self
    }

    pub fn with_sized_fish(mut self, x: f64, y: f64, size: f64) -> Self {
        self.fish.push((x, y, size));
        self
    }

    pub fn with_food(mut self, x: f64, y: f64) -> Self {
        self.food.push((x, y));
        self
    }

    pub fn build(self) -> Tank {
        let mut tank = Tank::new(self.config).expect("Failed to create tank");
        for (x, y, size) in self.fish {
            let id = tank.add_fish(x, y);
            if let Some(f) = tank.fish.iter_mut().find(|f| f.id == id) {
                f.size = size;
            }
        }
        for (x, y) in self.food {
            tank.drop_food(x, y);
        }
        tank
    }
}

#[allow(dead_code)]
pub fn fish_ids(tank: &Tank) -> Vec<FishId> {
    tank.fish.iter().map(|f| f.id).collect()
}

#[allow(dead_code)]
pub fn food_ids(tank: &Tank) -> Vec<FoodId> {
    tank.food.iter().map(|f| f.id).collect()
}

/// Panics unless every fish target and food claim point at each other.
#[allow(dead_code)]
pub fn assert_relations(tank: &Tank) {
    for fish in &tank.fish {
        if let Some(target) = fish.target {
            let food = tank
                .food_by_id(target)
                .unwrap_or_else(|| panic!("{} targets missing {}", fish.id, target));
            assert_eq!(
                food.assigned_fish,
                Some(fish.id),
                "{} targets {} but it is claimed by {:?}",
                fish.id,
                target,
                food.assigned_fish
            );
        }
    }
    for food in &tank.food {
        assert!(food.active, "{} is in the tank but inactive", food.id);
        if let Some(owner) = food.assigned_fish {
            let fish = tank
                .fish_by_id(owner)
                .unwrap_or_else(|| panic!("{} claimed by missing {}", food.id, owner));
            assert_eq!(fish.target, Some(food.id));
        }
    }
}
