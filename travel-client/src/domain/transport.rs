//! Transportation mode.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of transportation connecting two consecutive stops.
///
/// Serialized in the backend's uppercase wire form (`"FLIGHT"`, `"BUS"`...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransportMode {
    Flight,
    Bus,
    Uber,
    Subway,
}

impl TransportMode {
    /// The wire form of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Flight => "FLIGHT",
            TransportMode::Bus => "BUS",
            TransportMode::Uber => "UBER",
            TransportMode::Subway => "SUBWAY",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
