use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a fish. Allocated in increasing order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FishId(pub u64);

/// Identifier of a food pellet. Allocated in increasing order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FoodId(pub u64);

impl fmt::Display for FishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fish#{}", self.0)
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "food#{}", self.0)
    }
}

/// Viewport position of a fish.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to a point.
    #[must_use]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A fish swimming in the tank.
///
/// `target` is a lookup relation into the tank's food collection, not
/// ownership. Whoever removes the food clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fish {
    pub id: FishId,
    pub position: Position,
    /// Scale factor, always in `[1.0, max_size)`.
    pub size: f64,
    pub target: Option<FoodId>,
}

impl Fish {
    /// Creates an idle fish of size 1.0.
    #[must_use]
    pub fn new(id: FishId, x: f64, y: f64) -> Self {
        Self {
            id,
            position: Position::new(x, y),
            size: 1.0,
            target: None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.target.is_none()
    }
}

/// A food pellet dropped into the tank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub x: f64,
    pub y: f64,
    /// Eligible for assignment and consumption.
    pub active: bool,
    /// Still sinking under gravity.
    pub falling: bool,
    pub assigned_fish: Option<FishId>,
}

impl Food {
    /// Creates a freshly dropped pellet: falling, active and unclaimed.
    #[must_use]
    pub fn new(id: FoodId, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            active: true,
            falling: true,
            assigned_fish: None,
        }
    }

    /// Active and not yet claimed by any fish.
    #[must_use]
    pub fn is_unclaimed(&self) -> bool {
        self.active && self.assigned_fish.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fish_is_idle_and_unit_sized() {
        let fish = Fish::new(FishId(1), 50.0, 50.0);
        assert!(fish.is_idle());
        assert_eq!(fish.size, 1.0);
    }

    #[test]
    fn test_new_food_is_falling_and_unclaimed() {
        let food = Food::new(FoodId(3), 10.0, 0.0);
        assert!(food.falling);
        assert!(food.is_unclaimed());
    }

    #[test]
    fn test_distance() {
        let p = Position::new(0.0, 0.0);
        assert!((p.distance_to(3.0, 4.0) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(FishId(7).to_string(), "fish#7");
        assert_eq!(FoodId(2).to_string(), "food#2");
    }
}
