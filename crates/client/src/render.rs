//! One-shot rendering for the `render` command.
use anyhow::Result;
use widget_core::{RenderedWidget, WidgetInstanceId, WidgetSnapshot};
use widget_runtime::{FileSnapshotStore, SnapshotStore};

use crate::config::WidgetConfig;

/// Instance rendered when none is requested.
pub const DEFAULT_INSTANCE: WidgetInstanceId = WidgetInstanceId(1);

/// Render the configured snapshot file once.
///
/// An unreadable snapshot renders the empty state, matching the update
/// worker. Only configuration errors (such as a bad locale file) fail.
pub fn render_snapshot(
    config: &WidgetConfig,
    ids: &[WidgetInstanceId],
) -> Result<Vec<RenderedWidget>> {
    let renderer = config.renderer()?;
    let store = FileSnapshotStore::new(config.snapshot_path());

    let snapshot = match store.load_snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!(
                "Failed to load snapshot {}, rendering empty state: {}",
                store.path().display(),
                e
            );
            WidgetSnapshot::default()
        }
    };

    let ids = if ids.is_empty() {
        &[DEFAULT_INSTANCE][..]
    } else {
        ids
    };
    Ok(renderer.render(&snapshot, ids))
}
