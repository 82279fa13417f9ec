use fishtank_data::{Fish, Food, Viewport};
use serde::{Deserialize, Serialize};

/// Running totals since the tank was created.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TankStats {
    pub dropped: u64,
    pub eaten: u64,
    pub expired: u64,
    pub spawned: u64,
}

/// Read-only copy of the tank after a tick, for drawing and export.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TankSnapshot {
    pub tick: u64,
    pub viewport: Viewport,
    pub fish: Vec<Fish>,
    pub food: Vec<Food>,
    pub stats: TankStats,
    pub seed: u64,
}

impl TankSnapshot {
    #[must_use]
    pub fn largest_fish(&self) -> Option<&Fish> {
        self.fish.iter().max_by(|a, b| a.size.total_cmp(&b.size))
    }
}
