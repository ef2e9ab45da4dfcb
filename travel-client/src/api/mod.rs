//! HTTP client layer for the travel backend.
//!
//! One gateway carries the session credential and normalizes failures;
//! thin per-endpoint clients sit on top of it. None of them retry, and none
//! of them touch the session on failure — the login flow owns the
//! credential lifecycle.

mod auth;
mod error;
mod gateway;
mod locations;
mod page;
mod routes;
mod transportations;

pub use auth::AuthClient;
pub use error::ApiError;
pub use gateway::{GatewayConfig, HttpGateway};
pub use locations::{LocationsClient, NewLocation};
pub use page::{MAX_PAGES, Page, drain_all};
pub use routes::RouteSearchClient;
pub use transportations::{NewTransportation, Transportation, TransportationsClient};
