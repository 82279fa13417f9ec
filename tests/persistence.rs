mod common;

use common::{TankBuilder, VIEWPORT};
use fishtank_lib::error::AppError;
use fishtank_lib::model::persistence::{load_snapshot, save_snapshot};

#[test]
fn test_snapshot_survives_disk() {
    let mut tank = TankBuilder::new()
        .with_seed(9)
        .with_fish(100.0, 100.0)
        .with_fish(300.0, 200.0)
        .with_food(120.0, 80.0)
        .with_food(600.0, 20.0)
        .build();
    for _ in 0..5 {
        tank.update(VIEWPORT);
    }
    let snapshot = tank.snapshot();

    let path = std::env::temp_dir().join("fishtank_snapshot_roundtrip.json");
    save_snapshot(&snapshot, &path).expect("save");
    let loaded = load_snapshot(&path).expect("load");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.tick, 5);
    assert_eq!(loaded.seed, 9);
    assert_eq!(loaded.fish, snapshot.fish);
    assert_eq!(loaded.food, snapshot.food);
    assert_eq!(loaded.stats, snapshot.stats);
}

#[test]
fn test_unknown_version_is_rejected() {
    let path = std::env::temp_dir().join("fishtank_snapshot_future.json");
    let body = r#"{"version": 99, "snapshot": {"tick": 0, "viewport": {"width": 1.0, "height": 1.0},
        "fish": [], "food": [], "stats": {"dropped": 0, "eaten": 0, "expired": 0, "spawned": 0}, "seed": 1}}"#;
    std::fs::write(&path, body).expect("write");
    let result = load_snapshot(&path);
    let _ = std::fs::remove_file(&path);

    assert!(matches!(
        result,
        Err(AppError::UnsupportedVersion {
            found: 99,
            expected: 1
        })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("fishtank_snapshot_does_not_exist.json");
    assert!(matches!(load_snapshot(&path), Err(AppError::FileSystem(_))));
}
