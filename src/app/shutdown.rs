//! Graceful shutdown handling for the application.
//!
//! In raw mode Ctrl+C arrives as a key event and stops the app directly.
//! The signal task covers SIGINT sent from outside the terminal.

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::model::persistence;
use crate::model::snapshot::TankSnapshot;

/// Manages graceful shutdown of the application.
#[derive(Default)]
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    /// Spawns a task that flips the flag on SIGINT. Needs a running tokio
    /// runtime.
    pub fn install_ctrl_c_handler(&self) {
        let flag = self.shutdown_requested.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, initiating graceful shutdown...");
                flag.store(true, Ordering::SeqCst);
            }
        });
    }

    /// Writes the final snapshot when a path was given.
    pub fn cleanup(&self, snapshot: &TankSnapshot, path: Option<&std::path::Path>) -> Result<()> {
        tracing::info!("Performing shutdown cleanup...");

        if let Some(path) = path {
            persistence::save_snapshot(snapshot, path)?;
        }

        tracing::info!("Cleanup complete");
        Ok(())
    }
}
