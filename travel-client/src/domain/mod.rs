//! Domain types for the travel network client.
//!
//! These are the records the backend serves and the client reasons about.
//! Validated types enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod days;
mod location;
mod route;
mod transport;

pub use days::{InvalidOperatingDays, OperatingDays};
pub use location::Location;
pub use route::{Route, Stop};
pub use transport::TransportMode;
