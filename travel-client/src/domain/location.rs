//! Location record.

use serde::{Deserialize, Serialize};

/// A location in the travel network (airport, station, terminal...).
///
/// `location_code` is the stable business key used in all cross-references;
/// `id` is the backend-assigned surrogate key used only to target edits and
/// deletes. Records are immutable once fetched — a directory refresh replaces
/// the whole set rather than patching individual entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub city: String,
    pub location_code: String,
}

impl Location {
    /// Short label used by dropdown-style consumers: `"IST - Istanbul Airport"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.location_code, self.name)
    }
}
