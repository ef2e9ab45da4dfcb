//! Transportation endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::{OperatingDays, TransportMode};

use super::error::ApiError;
use super::gateway::HttpGateway;
use super::page::Page;

/// A scheduled transportation leg between two locations.
///
/// References locations by surrogate id, not by code — this is the
/// operator-facing editing record, not the route-search output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transportation {
    pub id: i64,
    pub origin_location_id: i64,
    pub destination_location_id: i64,
    pub transportation_type: TransportMode,
    pub operating_days: OperatingDays,
}

/// Payload for creating or updating a transportation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransportation {
    pub origin_location_id: i64,
    pub destination_location_id: i64,
    pub transportation_type: TransportMode,
    pub operating_days: OperatingDays,
}

/// Client for the transportation collection.
#[derive(Clone)]
pub struct TransportationsClient {
    gateway: HttpGateway,
}

impl TransportationsClient {
    /// Create a new transportations client.
    pub fn new(gateway: HttpGateway) -> Self {
        Self { gateway }
    }

    /// Fetch one page of transportations, sorted by id ascending.
    pub async fn page(&self, page: u32, size: u32) -> Result<Page<Transportation>, ApiError> {
        self.gateway
            .get_json(
                "/transportations",
                &[
                    ("page", page.to_string()),
                    ("size", size.to_string()),
                    ("sortBy", "id".to_string()),
                    ("ascending", "true".to_string()),
                ],
            )
            .await
    }

    /// Create a transportation.
    pub async fn create(&self, transportation: &NewTransportation) -> Result<Transportation, ApiError> {
        self.gateway.post_json("/transportations", transportation).await
    }

    /// Update the transportation with the given id.
    pub async fn update(
        &self,
        id: i64,
        transportation: &NewTransportation,
    ) -> Result<Transportation, ApiError> {
        self.gateway
            .put_json(&format!("/transportations/{id}"), transportation)
            .await
    }

    /// Delete the transportation with the given id.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.gateway.delete(&format!("/transportations/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transportation_wire_roundtrip() {
        let json = r#"{
            "id": 3,
            "originLocationId": 1,
            "destinationLocationId": 2,
            "transportationType": "FLIGHT",
            "operatingDays": [1, 3, 5]
        }"#;

        let t: Transportation = serde_json::from_str(json).unwrap();
        assert_eq!(t.transportation_type, TransportMode::Flight);
        assert_eq!(t.operating_days.days(), &[1, 3, 5]);

        let back = serde_json::to_value(&t).unwrap();
        assert_eq!(back["originLocationId"], 1);
        assert_eq!(back["operatingDays"], serde_json::json!([1, 3, 5]));
    }
}
