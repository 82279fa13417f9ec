mod common;

use common::{TankBuilder, VIEWPORT};
use fishtank_data::{FoodId, TankEvent, Viewport};

#[test]
fn test_shrinking_viewport_clamps_idle_fish() {
    let mut tank = TankBuilder::new()
        .with_fish(700.0, 500.0)
        .with_fish(40.0, 30.0)
        .build();

    tank.update(VIEWPORT);
    assert_eq!((tank.fish[0].position.x, tank.fish[0].position.y), (700.0, 500.0));

    let small = Viewport::new(100.0, 100.0);
    tank.update(small);
    assert_eq!((tank.fish[0].position.x, tank.fish[0].position.y), (100.0, 100.0));
    assert_eq!((tank.fish[1].position.x, tank.fish[1].position.y), (40.0, 30.0));
    for f in &tank.fish {
        assert!(small.contains(f.position.x, f.position.y));
    }
    assert_eq!(tank.viewport(), small);
}

#[test]
fn test_floor_line_follows_new_height() {
    let mut tank = TankBuilder::new().with_food(50.0, 300.0).build();

    let events = tank.update(VIEWPORT);
    assert!(events.is_empty());
    assert_eq!(tank.food[0].y, 300.5);

    // Floor drops from 500 to 250, already above the pellet.
    let events = tank.update(Viewport::new(800.0, 350.0));
    assert_eq!(
        events,
        vec![TankEvent::Expired {
            food: FoodId(1),
            tick: 2
        }]
    );
    assert!(tank.food.is_empty());
}

#[test]
fn test_growing_viewport_lets_fish_wander_further() {
    let mut tank = TankBuilder::new()
        .with_seed(3)
        .with_config(|c| c.fish.wander_jitter = 10.0)
        .with_fish(100.0, 100.0)
        .build();
    let small = Viewport::new(100.0, 100.0);
    for _ in 0..20 {
        tank.update(small);
        assert!(small.contains(tank.fish[0].position.x, tank.fish[0].position.y));
    }

    let big = Viewport::new(2000.0, 2000.0);
    for _ in 0..500 {
        tank.update(big);
        assert!(big.contains(tank.fish[0].position.x, tank.fish[0].position.y));
    }
}
