//! Snapshot file watcher.
//!
//! Polls the snapshot file's metadata and reports a `SnapshotChanged` trigger
//! whenever its modification time or length moves.
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};
use widget_runtime::{RuntimeError, WidgetHandle};

/// What the watcher compares between polls.
///
/// The length catches commits that land within the filesystem's timestamp
/// resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FileStamp {
    modified: SystemTime,
    len: u64,
}

impl FileStamp {
    /// `None` while the file does not exist.
    fn read(path: &Path) -> Option<Self> {
        let meta = std::fs::metadata(path).ok()?;
        Some(Self {
            modified: meta.modified().ok()?,
            len: meta.len(),
        })
    }
}

/// Poll `path` until the runtime stops accepting commands.
pub async fn watch_snapshot(path: PathBuf, poll_interval: Duration, handle: WidgetHandle) {
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut last_seen = FileStamp::read(&path);
    info!("Watching {}", path.display());

    loop {
        ticker.tick().await;

        let current = FileStamp::read(&path);
        if current == last_seen {
            continue;
        }
        last_seen = current;
        debug!("Snapshot file changed: {}", path.display());

        match handle.snapshot_changed().await {
            Ok(report) => debug!("Snapshot update: {:?}", report),
            Err(RuntimeError::CommandChannelClosed) => break,
            Err(e) => warn!("Snapshot update failed: {}", e),
        }
    }

    debug!("Snapshot watcher stopped");
}
