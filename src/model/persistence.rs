use crate::error::{AppError, Result};
use crate::model::config::AppConfig;
use crate::model::snapshot::TankSnapshot;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CURRENT_SNAPSHOT_VERSION: u32 = 1;

/// Versioned wrapper written to disk. Borrows the snapshot to avoid a clone.
#[derive(Serialize)]
struct SnapshotFileRef<'a> {
    version: u32,
    snapshot: &'a TankSnapshot,
}

#[derive(Deserialize)]
struct SnapshotFile {
    version: u32,
    snapshot: TankSnapshot,
}

/// Writes a snapshot as pretty JSON.
pub fn save_snapshot(snapshot: &TankSnapshot, path: impl AsRef<Path>) -> Result<()> {
    let file = SnapshotFileRef {
        version: CURRENT_SNAPSHOT_VERSION,
        snapshot,
    };
    let data = serde_json::to_string_pretty(&file)?;
    fs::write(path.as_ref(), data)?;
    tracing::info!(path = %path.as_ref().display(), tick = snapshot.tick, "Snapshot written");
    Ok(())
}

pub fn load_snapshot(path: impl AsRef<Path>) -> Result<TankSnapshot> {
    let content = fs::read_to_string(path)?;
    let file: SnapshotFile = serde_json::from_str(&content)?;
    if file.version != CURRENT_SNAPSHOT_VERSION {
        return Err(AppError::UnsupportedVersion {
            found: file.version,
            expected: CURRENT_SNAPSHOT_VERSION,
        });
    }
    Ok(file.snapshot)
}

/// Reads and validates a TOML config file.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let content = fs::read_to_string(path)?;
    AppConfig::from_toml(&content).map_err(|e| AppError::config(e.to_string()))
}
