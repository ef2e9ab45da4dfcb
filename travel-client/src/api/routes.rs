//! Route-search endpoint.

use chrono::NaiveDate;

use crate::domain::Route;

use super::error::ApiError;
use super::gateway::HttpGateway;

/// Client for the route-search service.
///
/// The actual graph traversal runs on the backend; this client only carries
/// the query. Origin and destination codes are passed through verbatim —
/// reachability, date semantics, and code existence are the backend's to
/// validate.
#[derive(Clone)]
pub struct RouteSearchClient {
    gateway: HttpGateway,
}

impl RouteSearchClient {
    /// Create a new route-search client.
    pub fn new(gateway: HttpGateway) -> Self {
        Self { gateway }
    }

    /// Find candidate routes between two location codes on a given date.
    ///
    /// A single bounded request, no pagination. Zero matches is a valid
    /// answer, returned as an empty vector.
    pub async fn search(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<Vec<Route>, ApiError> {
        self.gateway
            .get_json(
                "/routes",
                &[
                    ("origin", origin.to_string()),
                    ("destination", destination.to_string()),
                    ("date", date.format("%Y-%m-%d").to_string()),
                ],
            )
            .await
    }
}
