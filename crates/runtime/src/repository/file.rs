//! File-based SnapshotStore implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use widget_core::SnapshotEntries;

use super::error::{RepositoryError, Result};
use super::traits::SnapshotStore;

/// Snapshot persisted as a single JSON object.
///
/// # File Format
///
/// ```text
/// {
///   "widget_locale_code": "en",
///   "widget_todo_count": 3,
///   ...
/// }
/// ```
///
/// Commits write a sibling temp file and rename it over the snapshot, so
/// readers observe either the previous or the next snapshot, never a mix.
#[derive(Clone, Debug)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the snapshot on disk.
    pub fn commit(&self, entries: &SnapshotEntries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let bytes = serde_json::to_vec_pretty(entries)?;
        let temp_path = self.path.with_extension("json.tmp");

        // Write to temp file
        fs::write(&temp_path, bytes)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            "Committed {} snapshot entries to {}",
            entries.len(),
            self.path.display()
        );

        Ok(())
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<SnapshotEntries> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("No snapshot at {}", self.path.display());
                return Ok(SnapshotEntries::new());
            }
            Err(err) => return Err(RepositoryError::Io(err)),
        };

        match serde_json::from_slice::<Value>(&bytes)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(RepositoryError::CorruptedData(format!(
                "expected a JSON object in {}, found {}",
                self.path.display(),
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
