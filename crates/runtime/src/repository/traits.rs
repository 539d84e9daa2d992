//! Repository contract for the snapshot shared with the main application.

use std::sync::Arc;

use widget_core::{SnapshotEntries, WidgetSnapshot};

use super::error::Result;

/// Read side of the key/value store the main application writes.
///
/// Implementations must only ever expose a fully committed snapshot; the
/// worker never writes through this trait.
pub trait SnapshotStore: Send + Sync {
    /// Load the latest committed entries. A store that was never written
    /// yields an empty map.
    fn load(&self) -> Result<SnapshotEntries>;

    /// Load and decode in one step.
    fn load_snapshot(&self) -> Result<WidgetSnapshot> {
        self.load().map(|entries| WidgetSnapshot::from_entries(&entries))
    }
}

impl<T: SnapshotStore + ?Sized> SnapshotStore for Arc<T> {
    fn load(&self) -> Result<SnapshotEntries> {
        (**self).load()
    }
}
