//! High-level runtime orchestrator.
//!
//! The runtime owns the update worker, wires up the command channel, and
//! exposes a builder-based API for clients to inject a store and a sink.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use widget_core::WidgetRenderer;

use crate::api::{Result, RuntimeError, WidgetHandle, WidgetSink};
use crate::repository::SnapshotStore;
use crate::workers::UpdateWorker;

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub command_buffer_size: usize,
    /// Period of the timer-driven refresh.
    pub refresh_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_buffer_size: 32,
            refresh_interval: Duration::from_secs(30 * 60),
        }
    }
}

/// Main runtime that keeps placed widgets up to date
///
/// [`WidgetHandle`] provides a cloneable façade for clients.
pub struct WidgetRuntime {
    handle: WidgetHandle,
    worker_handle: JoinHandle<()>,
}

impl WidgetRuntime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> WidgetHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker finishes once this handle and every clone handed out by
    /// [`WidgetRuntime::handle`] are dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`WidgetRuntime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    renderer: Option<WidgetRenderer>,
    store: Option<Box<dyn SnapshotStore>>,
    sink: Option<Box<dyn WidgetSink>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            renderer: None,
            store: None,
            sink: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a renderer with custom locales or scheme (optional)
    pub fn renderer(mut self, renderer: WidgetRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Set the snapshot store (required)
    pub fn store(mut self, store: impl SnapshotStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Set the widget sink (required)
    pub fn sink(mut self, sink: impl WidgetSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Spawn the update worker.
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Result<WidgetRuntime> {
        let store = self.store.ok_or(RuntimeError::MissingStore)?;
        let sink = self.sink.ok_or(RuntimeError::MissingSink)?;
        let renderer = self.renderer.unwrap_or_default();

        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size.max(1));

        let worker = UpdateWorker::new(
            store,
            sink,
            renderer,
            command_rx,
            self.config.refresh_interval,
        );
        let worker_handle = tokio::spawn(worker.run());

        Ok(WidgetRuntime {
            handle: WidgetHandle::new(command_tx),
            worker_handle,
        })
    }
}
