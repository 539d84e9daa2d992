//! Repository layer for the widget snapshot.
//!
//! The snapshot is owned by the main application; the runtime only reads it.
//! The in-memory and file stores also expose `commit` so tests and tools can
//! play the writer's role.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSnapshotStore;
pub use memory::InMemorySnapshotStore;
pub use traits::SnapshotStore;
