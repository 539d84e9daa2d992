//! Where the widget binary keeps its files when nothing is configured.
//!
//! | | Linux | macOS | Windows |
//! |---|---|---|---|
//! | snapshot | `$XDG_DATA_HOME/campusmate` | `~/Library/Application Support/campusmate` | `%APPDATA%\campusmate` |
//! | logs | `$XDG_CACHE_HOME/campusmate/logs` | `~/Library/Caches/campusmate/logs` | `%LOCALAPPDATA%\campusmate\logs` |
//!
//! Without a home directory both fall back to `./.campusmate`.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const APPLICATION: &str = "campusmate";
const SNAPSHOT_FILE: &str = "widget_snapshot.json";

/// Resolved platform directories for the widget binary.
#[derive(Clone, Debug)]
pub struct WidgetDirs {
    data: PathBuf,
    cache: PathBuf,
}

impl WidgetDirs {
    pub fn resolve() -> Self {
        match ProjectDirs::from("", "", APPLICATION) {
            Some(project) => Self {
                data: project.data_dir().to_path_buf(),
                cache: project.cache_dir().to_path_buf(),
            },
            None => Self::rooted_at(Path::new(".campusmate")),
        }
    }

    /// Keep everything under a single directory.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            data: root.to_path_buf(),
            cache: root.to_path_buf(),
        }
    }

    /// Snapshot file the main application writes.
    pub fn snapshot_path(&self) -> PathBuf {
        self.data.join(SNAPSHOT_FILE)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.cache.join("logs")
    }
}
