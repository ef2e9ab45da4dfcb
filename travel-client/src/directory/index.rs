//! Location directory lookup.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

use crate::api::{ApiError, LocationsClient, drain_all};
use crate::domain::Location;

/// Page size used when draining the location collection.
const DRAIN_PAGE_SIZE: u32 = 50;

/// Thread-safe location directory.
///
/// Provides locationCode → location resolution over the fully-aggregated
/// collection. The backing map is replaced wholesale on refresh; readers
/// holding the old map stay valid until the swap, and no reader ever
/// observes a half-populated map.
#[derive(Clone)]
pub struct LocationDirectory {
    inner: Arc<RwLock<HashMap<String, Location>>>,
    /// Monotonic refresh generation. A drain that finishes after a newer
    /// refresh has started must not clobber the newer data.
    generation: Arc<AtomicU64>,
    client: LocationsClient,
}

impl LocationDirectory {
    /// Create an empty directory over the given client.
    pub fn new(client: LocationsClient) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            generation: Arc::new(AtomicU64::new(0)),
            client,
        }
    }

    /// Rebuild the directory by draining every page of the location
    /// collection.
    ///
    /// On success, replaces the current mapping and returns the number of
    /// entries. On failure, the existing mapping is preserved and the error
    /// is returned — a half-built directory is never exposed. If another
    /// refresh started while this one was in flight, the stale result is
    /// discarded.
    pub async fn refresh(&self) -> Result<usize, ApiError> {
        let claimed = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let client = self.client.clone();
        let locations = drain_all(
            move |page, size| {
                let client = client.clone();
                async move { client.page(page, size).await }
            },
            DRAIN_PAGE_SIZE,
        )
        .await?;

        let map = build_index(locations);
        let count = map.len();

        if self.generation.load(Ordering::SeqCst) != claimed {
            debug!(claimed, "discarding superseded directory refresh");
            return Ok(count);
        }

        let mut guard = self.inner.write().await;
        *guard = map;
        debug!(count, "directory refreshed");

        Ok(count)
    }

    /// Seed the directory from an already-fetched location set (e.g. a disk
    /// snapshot), replacing the current mapping.
    pub async fn seed(&self, locations: Vec<Location>) {
        let map = build_index(locations);
        let mut guard = self.inner.write().await;
        *guard = map;
    }

    /// Resolve a location code to its display name.
    ///
    /// Unresolved codes come back verbatim — label resolution is cosmetic,
    /// so a degraded label beats an error.
    pub async fn resolve(&self, code: &str) -> String {
        let guard = self.inner.read().await;
        match guard.get(code) {
            Some(location) => location.name.clone(),
            None => code.to_string(),
        }
    }

    /// Look up the full location record for a code.
    pub async fn get(&self, code: &str) -> Option<Location> {
        let guard = self.inner.read().await;
        guard.get(code).cloned()
    }

    /// All locations, sorted by code — the order dropdown-style consumers
    /// want.
    pub async fn all(&self) -> Vec<Location> {
        let guard = self.inner.read().await;
        let mut locations: Vec<Location> = guard.values().cloned().collect();
        locations.sort_by(|a, b| a.location_code.cmp(&b.location_code));
        locations
    }

    /// Number of locations in the directory.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Check if the directory is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Drop every entry, returning to the unloaded state.
    pub async fn clear(&self) {
        let mut guard = self.inner.write().await;
        guard.clear();
    }
}

/// Build the code → location map.
fn build_index(locations: Vec<Location>) -> HashMap<String, Location> {
    locations
        .into_iter()
        .map(|l| (l.location_code.clone(), l))
        .collect()
}
