//! Food physics: sinking and expiry.

use fishtank_data::{Food, FoodId};

/// Sinks every falling pellet by `gravity` and expires those that reach the
/// floor line at `viewport_height - floor_margin`.
///
/// Expired pellets are removed from `foods` even when a fish was already
/// chasing them. They are returned so the caller can release the fish side
/// of the relation.
pub fn advance(
    foods: &mut Vec<Food>,
    viewport_height: f64,
    gravity: f64,
    floor_margin: f64,
) -> Vec<Food> {
    let floor = viewport_height - floor_margin;
    let mut expired_ids: Vec<FoodId> = Vec::new();

    for food in foods.iter_mut().filter(|f| f.falling) {
        food.y += gravity;
        if food.y >= floor {
            food.falling = false;
            food.active = false;
            expired_ids.push(food.id);
        }
    }

    if expired_ids.is_empty() {
        return Vec::new();
    }

    let mut expired = Vec::with_capacity(expired_ids.len());
    let mut kept = Vec::with_capacity(foods.len() - expired_ids.len());
    for food in foods.drain(..) {
        if expired_ids.contains(&food.id) {
            expired.push(food);
        } else {
            kept.push(food);
        }
    }
    *foods = kept;
    expired
}

#[cfg(test)]
mod tests {
    use super::*;
    use fishtank_data::FishId;

    fn pellet(id: u64, x: f64, y: f64) -> Food {
        Food::new(FoodId(id), x, y)
    }

    #[test]
    fn test_falling_food_sinks_by_gravity() {
        let mut foods = vec![pellet(1, 10.0, 0.0)];
        let expired = advance(&mut foods, 600.0, 0.5, 100.0);
        assert!(expired.is_empty());
        assert_eq!(foods[0].y, 0.5);
    }

    #[test]
    fn test_resting_food_does_not_move() {
        let mut foods = vec![pellet(1, 10.0, 20.0)];
        foods[0].falling = false;
        advance(&mut foods, 600.0, 0.5, 100.0);
        assert_eq!(foods[0].y, 20.0);
    }

    #[test]
    fn test_food_expires_on_floor_line() {
        let mut foods = vec![pellet(1, 10.0, 499.5)];
        let expired = advance(&mut foods, 600.0, 0.5, 100.0);
        assert!(foods.is_empty());
        assert_eq!(expired.len(), 1);
        assert!(!expired[0].falling);
    }

    #[test]
    fn test_adjacent_expiries_are_not_skipped() {
        let mut foods = vec![
            pellet(1, 0.0, 499.9),
            pellet(2, 5.0, 499.9),
            pellet(3, 9.0, 10.0),
            pellet(4, 9.0, 499.9),
        ];
        let expired = advance(&mut foods, 600.0, 0.5, 100.0);
        let ids: Vec<u64> = expired.iter().map(|f| f.id.0).collect();
        assert_eq!(ids, vec![1, 2, 4]);
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].id, FoodId(3));
    }

    #[test]
    fn test_assigned_food_still_expires() {
        let mut foods = vec![pellet(1, 0.0, 499.9)];
        foods[0].assigned_fish = Some(FishId(1));
        let expired = advance(&mut foods, 600.0, 0.5, 100.0);
        assert_eq!(expired[0].assigned_fish, Some(FishId(1)));
        assert!(foods.is_empty());
    }

    #[test]
    fn test_short_viewport_expires_immediately() {
        let mut foods = vec![pellet(1, 0.0, 0.0)];
        let expired = advance(&mut foods, 50.0, 0.5, 100.0);
        assert_eq!(expired.len(), 1);
    }
}
