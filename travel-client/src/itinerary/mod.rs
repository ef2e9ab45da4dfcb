//! Itinerary model: ranking, labeling, and detail selection.
//!
//! Everything here is pure — it consumes routes the search client fetched
//! and location names the directory resolved, and owns no I/O of its own.

mod list;
mod rank;

pub use list::ItineraryList;
pub use rank::{Itinerary, display_name, rank};
