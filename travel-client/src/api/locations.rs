//! Location endpoints.

use serde::Serialize;

use crate::domain::Location;

use super::error::ApiError;
use super::gateway::HttpGateway;
use super::page::Page;

/// Sort key for location pages. Fixed, not user-configurable: the
/// multi-page drain relies on a stable ordering across calls, and
/// `locationCode` is the unique business key.
const SORT_KEY: &str = "locationCode";

/// Payload for creating or updating a location. The backend assigns `id`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    pub name: String,
    pub country: String,
    pub city: String,
    pub location_code: String,
}

/// Client for the location collection.
#[derive(Clone)]
pub struct LocationsClient {
    gateway: HttpGateway,
}

impl LocationsClient {
    /// Create a new locations client.
    pub fn new(gateway: HttpGateway) -> Self {
        Self { gateway }
    }

    /// Fetch one page of locations, sorted by `locationCode` ascending.
    pub async fn page(&self, page: u32, size: u32) -> Result<Page<Location>, ApiError> {
        self.gateway
            .get_json(
                "/locations",
                &[
                    ("page", page.to_string()),
                    ("size", size.to_string()),
                    ("sortBy", SORT_KEY.to_string()),
                    ("ascending", "true".to_string()),
                ],
            )
            .await
    }

    /// Create a location.
    pub async fn create(&self, location: &NewLocation) -> Result<Location, ApiError> {
        self.gateway.post_json("/locations", location).await
    }

    /// Update the location with the given surrogate id.
    pub async fn update(&self, id: i64, location: &NewLocation) -> Result<Location, ApiError> {
        self.gateway
            .put_json(&format!("/locations/{id}"), location)
            .await
    }

    /// Delete the location with the given surrogate id.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.gateway.delete(&format!("/locations/{id}")).await
    }
}
