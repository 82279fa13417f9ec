use super::entity::{FishId, FoodId};
use serde::{Deserialize, Serialize};

/// Something observable that happened inside the tank.
///
/// Produced synchronously by the tank and handed to the outer layers
/// (audio cues, event log).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event")]
pub enum TankEvent {
    /// The very first drop of the session.
    FirstInteraction,
    FoodDropped {
        food: FoodId,
        x: f64,
        y: f64,
    },
    Assigned {
        fish: FishId,
        food: FoodId,
        tick: u64,
    },
    /// A fish ate its target. `size` is the size after growth and any reset.
    Eaten {
        fish: FishId,
        food: FoodId,
        size: f64,
        tick: u64,
    },
    Spawned {
        fish: FishId,
        parent: FishId,
        x: f64,
        y: f64,
        tick: u64,
    },
    /// Food reached the floor before anyone ate it.
    Expired {
        food: FoodId,
        tick: u64,
    },
}
