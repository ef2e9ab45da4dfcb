//! Route and stop types returned by the route-search service.

use serde::{Deserialize, Serialize};

use super::location::Location;
use super::transport::TransportMode;

/// A location visited en route, annotated with the transportation used to
/// reach the next stop. The terminal stop of a route carries no
/// `transportation_type_to_next`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportation_type_to_next: Option<TransportMode>,
}

/// A candidate route: an ordered sequence of stops.
///
/// The route-search service owns route construction; the client only reads
/// these. `leg_count` is `stops - 1`; a degenerate single-stop route has
/// zero legs and must not break anything downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub stops: Vec<Stop>,
}

impl Route {
    /// Number of transportation legs in this route.
    pub fn leg_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// First stop departed by flight, if the route has a flight leg at all.
    pub fn first_flight_stop(&self) -> Option<&Stop> {
        self.stops
            .iter()
            .find(|s| s.transportation_type_to_next == Some(TransportMode::Flight))
    }
}
