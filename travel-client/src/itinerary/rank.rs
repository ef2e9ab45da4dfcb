//! Itinerary ranking for route-search results.
//!
//! Turns the flat stop lists returned per candidate route into labeled,
//! orderable itineraries. Pure transformation: no network, no UI.

use crate::domain::Route;

/// A route plus its derived rank key and display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub route: Route,
    pub leg_count: usize,
    pub display_name: String,
}

/// Rank candidate routes by preference: fewest legs first.
///
/// The sort is stable — the backend may already encode a preferred ordering
/// among equal-leg alternatives, and that relative order is preserved.
pub fn rank(routes: Vec<Route>) -> Vec<Itinerary> {
    let mut itineraries: Vec<Itinerary> = routes
        .into_iter()
        .map(|route| {
            let leg_count = route.leg_count();
            let display_name = display_name(&route);
            Itinerary {
                route,
                leg_count,
                display_name,
            }
        })
        .collect();

    itineraries.sort_by_key(|i| i.leg_count);
    itineraries
}

/// Display label for a route.
///
/// The first flight-tagged stop names the route (`"Via Istanbul (IST)"`).
/// A route with no flight leg anywhere is `"Direct Route"` — "direct" means
/// "no flight transfer" here, not "zero legs", even when bus or subway legs
/// remain.
pub fn display_name(route: &Route) -> String {
    match route.first_flight_stop() {
        Some(stop) => format!(
            "Via {} ({})",
            stop.location.name, stop.location.location_code
        ),
        None => "Direct Route".to_string(),
    }
}
