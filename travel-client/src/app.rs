//! Application-level composition.
//!
//! Bundles the session, the per-endpoint clients, the location directory,
//! and the current search results. This is also where the explicit reset
//! lives — the client cannot assume a process restart (the browser
//! original's full-page reload) as a state-reset mechanism.

use chrono::NaiveDate;

use crate::api::{
    ApiError, AuthClient, GatewayConfig, HttpGateway, LocationsClient, RouteSearchClient,
    TransportationsClient,
};
use crate::directory::LocationDirectory;
use crate::itinerary::{ItineraryList, rank};
use crate::session::SessionStore;

/// The assembled travel client.
pub struct App {
    session: SessionStore,
    auth: AuthClient,
    locations: LocationsClient,
    transportations: TransportationsClient,
    route_search: RouteSearchClient,
    directory: LocationDirectory,
    results: ItineraryList,
}

impl App {
    /// Wire up the full client against the given gateway config.
    pub fn new(config: GatewayConfig) -> Result<Self, ApiError> {
        let session = SessionStore::new();
        let gateway = HttpGateway::new(config, session.clone())?;
        let locations = LocationsClient::new(gateway.clone());

        Ok(Self {
            session,
            auth: AuthClient::new(gateway.clone()),
            directory: LocationDirectory::new(locations.clone()),
            locations,
            transportations: TransportationsClient::new(gateway.clone()),
            route_search: RouteSearchClient::new(gateway),
            results: ItineraryList::empty(),
        })
    }

    /// The session credential store.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The login/logout client.
    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    /// The location CRUD client.
    pub fn locations(&self) -> &LocationsClient {
        &self.locations
    }

    /// The transportation CRUD client.
    pub fn transportations(&self) -> &TransportationsClient {
        &self.transportations
    }

    /// The location directory.
    pub fn directory(&self) -> &LocationDirectory {
        &self.directory
    }

    /// Run a route search and replace the current results with the ranked
    /// itineraries.
    ///
    /// On failure the previous results stay in place — a failed search must
    /// not blank out data the user is already looking at. Returns the number
    /// of itineraries found (zero is a valid answer, not an error).
    pub async fn search(
        &mut self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<usize, ApiError> {
        let routes = self.route_search.search(origin, destination, date).await?;
        self.results = ItineraryList::new(rank(routes));
        Ok(self.results.len())
    }

    /// The current search results.
    pub fn results(&self) -> &ItineraryList {
        &self.results
    }

    /// Mutable access to the results, for detail selection.
    pub fn results_mut(&mut self) -> &mut ItineraryList {
        &mut self.results
    }

    /// Re-initialize from a clean slate: anonymous session, empty
    /// directory, no results, no selection.
    pub async fn reset(&mut self) {
        self.session.clear().await;
        self.directory.clear().await;
        self.results = ItineraryList::empty();
    }
}
