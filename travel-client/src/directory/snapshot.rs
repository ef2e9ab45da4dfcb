//! Disk-based snapshot of the location directory.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::domain::Location;

/// Default snapshot TTL: 24 hours.
const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Error from snapshot persistence.
#[derive(Debug, thiserror::Error)]
#[error("snapshot error: {message}")]
pub struct SnapshotError {
    message: String,
}

/// Snapshotted location set with metadata.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshottedLocations {
    /// Unix timestamp when the snapshot was written.
    cached_at_secs: u64,
    /// The snapshotted location data.
    locations: Vec<Location>,
}

/// Configuration for the directory snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Path to the snapshot file.
    pub path: PathBuf,
    /// How long the snapshot remains valid.
    pub ttl: Duration,
}

impl SnapshotConfig {
    /// Create a new snapshot config with the given path and default TTL (24 hours).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self::new("locations_snapshot.json")
    }
}

/// Disk snapshot for the location directory.
///
/// Lets the client warm-start with yesterday's directory instead of paying
/// for a full page drain before the first screen renders. Resolution stays
/// cosmetic, so a slightly stale snapshot is acceptable within the TTL.
#[derive(Debug, Clone)]
pub struct DirectorySnapshot {
    config: SnapshotConfig,
}

impl DirectorySnapshot {
    /// Create a new snapshot handle with the given config.
    pub fn new(config: SnapshotConfig) -> Self {
        Self { config }
    }

    /// Try to load locations from the snapshot.
    ///
    /// Returns `None` if the snapshot doesn't exist, is invalid, or has
    /// expired.
    pub fn load(&self) -> Option<Vec<Location>> {
        let contents = std::fs::read_to_string(&self.config.path).ok()?;
        let cached: SnapshottedLocations = serde_json::from_str(&contents).ok()?;

        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .ok()?
            .as_secs();

        let age_secs = now.saturating_sub(cached.cached_at_secs);
        if age_secs >= self.config.ttl.as_secs() {
            return None;
        }

        Some(cached.locations)
    }

    /// Save locations to the snapshot.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, locations: &[Location]) -> Result<(), SnapshotError> {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|_| SnapshotError {
                message: "system time before unix epoch".to_string(),
            })?
            .as_secs();

        let cached = SnapshottedLocations {
            cached_at_secs: now,
            locations: locations.to_vec(),
        };

        if let Some(parent) = self.config.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| SnapshotError {
                message: format!("failed to create snapshot directory: {}", e),
            })?;
        }

        let json = serde_json::to_string_pretty(&cached).map_err(|e| SnapshotError {
            message: format!("failed to serialize snapshot: {}", e),
        })?;

        std::fs::write(&self.config.path, json).map_err(|e| SnapshotError {
            message: format!("failed to write snapshot file: {}", e),
        })?;

        Ok(())
    }

    /// Get the snapshot file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }
}
