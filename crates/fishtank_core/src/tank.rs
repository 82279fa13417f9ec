use crate::clock::Tickable;
use crate::config::AppConfig;
use crate::lifecycle::{self, IdAllocator};
use crate::metrics::Metrics;
use crate::snapshot::{TankSnapshot, TankStats};
use crate::systems::growth::{self, GrowthContext};
use crate::systems::{assignment, food, motion};
use fishtank_data::{Fish, FishId, Food, FoodId, TankEvent, Viewport};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// The whole simulation state: every fish and every live pellet.
///
/// One tick runs to completion before anything else can touch the tank.
/// Drops made between ticks take effect on the next tick.
pub struct Tank {
    pub tick: u64,
    pub fish: Vec<Fish>,
    pub food: Vec<Food>,
    pub config: AppConfig,
    pub stats: TankStats,
    pub metrics: Metrics,
    viewport: Viewport,
    ids: IdAllocator,
    rng: ChaCha8Rng,
    seed: u64,
    interacted: bool,
}

impl Tank {
    /// Creates a tank with the configured starting school.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let seed = config.tank.seed.unwrap_or_else(rand::random);
        let viewport = Viewport::new(config.tank.width, config.tank.height);
        let mut tank = Self {
            tick: 0,
            fish: Vec::with_capacity(config.tank.initial_fish),
            food: Vec::new(),
            stats: TankStats::default(),
            metrics: Metrics::new(),
            viewport,
            ids: IdAllocator::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            interacted: false,
            config,
        };

        if tank.config.tank.initial_fish > 0 {
            let (x, y) = (tank.config.tank.seed_fish_x, tank.config.tank.seed_fish_y);
            tank.add_fish(x, y);
        }
        for _ in 1..tank.config.tank.initial_fish {
            let fish = lifecycle::create_fish_with_rng(&mut tank.ids, viewport, &mut tank.rng);
            tank.fish.push(fish);
        }

        tracing::info!(seed, fish = tank.fish.len(), "Tank created");
        Ok(tank)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Viewport seen by the most recent tick.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Places an idle fish of size 1.0 at `(x, y)`.
    pub fn add_fish(&mut self, x: f64, y: f64) -> FishId {
        let fish = lifecycle::create_fish(&mut self.ids, x, y);
        let id = fish.id;
        self.fish.push(fish);
        id
    }

    /// Drops a pellet at `(x, y)`.
    ///
    /// The first drop of the session is preceded by
    /// [`TankEvent::FirstInteraction`].
    pub fn drop_food(&mut self, x: f64, y: f64) -> Vec<TankEvent> {
        let mut events = Vec::with_capacity(2);
        if !self.interacted {
            self.interacted = true;
            events.push(TankEvent::FirstInteraction);
        }

        let id = self.ids.food();
        self.food.push(Food::new(id, x, y));
        self.stats.dropped += 1;
        tracing::debug!(food = %id, x, y, "Food dropped");
        events.push(TankEvent::FoodDropped { food: id, x, y });
        events
    }

    #[must_use]
    pub fn fish_by_id(&self, id: FishId) -> Option<&Fish> {
        self.fish.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn food_by_id(&self, id: FoodId) -> Option<&Food> {
        self.food.iter().find(|f| f.id == id)
    }

    /// Advances the simulation by one tick.
    ///
    /// Order: food sinks and expires, pursuing fish move and eat, idle fish
    /// wander, then unclaimed food is assigned.
    pub fn update(&mut self, viewport: Viewport) -> Vec<TankEvent> {
        let started = Instant::now();
        self.tick += 1;
        self.viewport = viewport;
        let mut events = Vec::new();

        self.pass_food(&mut events);
        self.pass_pursuit(&mut events);
        motion::wander(
            &mut self.fish,
            viewport,
            self.config.fish.wander_jitter,
            &mut self.rng,
        );
        self.pass_assignment(&mut events);

        self.metrics
            .record_tick(started.elapsed(), self.fish.len(), self.food.len());
        events
    }

    fn pass_food(&mut self, events: &mut Vec<TankEvent>) {
        let expired = food::advance(
            &mut self.food,
            self.viewport.height,
            self.config.food.gravity,
            self.config.food.floor_margin,
        );
        if expired.is_empty() {
            return;
        }
        lifecycle::release_targets(&mut self.fish, &expired);
        for pellet in &expired {
            tracing::debug!(food = %pellet.id, tick = self.tick, "Food expired");
            events.push(TankEvent::Expired {
                food: pellet.id,
                tick: self.tick,
            });
        }
        self.stats.expired += expired.len() as u64;
    }

    fn pass_pursuit(&mut self, events: &mut Vec<TankEvent>) {
        let arrivals = motion::pursue(&mut self.fish, &self.food, &self.config.fish);
        if arrivals.is_empty() {
            return;
        }

        let mut ctx = GrowthContext {
            config: &self.config.fish,
            viewport: self.viewport,
            ids: &mut self.ids,
            rng: &mut self.rng,
        };
        for arrival in arrivals {
            let Some(meal) =
                growth::on_arrival(&mut self.fish, &mut self.food, arrival.fish, arrival.food, &mut ctx)
            else {
                continue;
            };

            tracing::debug!(fish = %meal.fish, food = %meal.food, size = meal.size, "Food eaten");
            self.stats.eaten += 1;
            events.push(TankEvent::Eaten {
                fish: meal.fish,
                food: meal.food,
                size: meal.size,
                tick: self.tick,
            });
            if let Some(baby) = meal.spawned {
                self.stats.spawned += 1;
                events.push(TankEvent::Spawned {
                    fish: baby.id,
                    parent: meal.fish,
                    x: baby.position.x,
                    y: baby.position.y,
                    tick: self.tick,
                });
            }
        }
    }

    fn pass_assignment(&mut self, events: &mut Vec<TankEvent>) {
        for (fish, food) in assignment::reconcile(&mut self.fish, &mut self.food) {
            events.push(TankEvent::Assigned {
                fish,
                food,
                tick: self.tick,
            });
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> TankSnapshot {
        TankSnapshot {
            tick: self.tick,
            viewport: self.viewport,
            fish: self.fish.clone(),
            food: self.food.clone(),
            stats: self.stats,
            seed: self.seed,
        }
    }
}

impl Tickable for Tank {
    fn tick(&mut self, viewport: Viewport) -> Vec<TankEvent> {
        self.update(viewport)
    }
}
