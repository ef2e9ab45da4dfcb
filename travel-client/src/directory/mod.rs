//! Location directory: the fully-aggregated, code-indexed location set.
//!
//! Built by draining the paginated location endpoint, used everywhere a
//! location code needs a display name. Optionally warm-started from a disk
//! snapshot so the first render doesn't wait on a full drain.

mod index;
mod snapshot;

pub use index::LocationDirectory;
pub use snapshot::{DirectorySnapshot, SnapshotConfig, SnapshotError};
