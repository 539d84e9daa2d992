//! Runtime that keeps placed home-screen widgets in sync with the snapshot
//! the main application commits.
//!
//! This crate wires the snapshot store, the renderer from `widget-core` and a
//! host-shell sink into a single background worker. Consumers embed
//! [`WidgetRuntime`] and forward host events through [`WidgetHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`repository`] provides snapshot stores reused by the client binary
//! - `workers` keeps the update task internal to the crate
pub mod api;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{
    ChannelSink, Result, RuntimeError, SinkError, SinkMessage, WidgetHandle, WidgetSink,
};
pub use repository::{FileSnapshotStore, InMemorySnapshotStore, RepositoryError, SnapshotStore};
pub use runtime::{RuntimeBuilder, RuntimeConfig, WidgetRuntime};
pub use workers::{UpdateReport, UpdateTrigger};
