//! Delivery of rendered widgets to the host shell.
use async_trait::async_trait;
use tokio::sync::mpsc;
use widget_core::{RenderedWidget, WidgetInstanceId};

use super::errors::SinkError;

/// Host-shell side of an update pass.
///
/// The update worker calls [`WidgetSink::deliver`] once per rendered instance
/// and [`WidgetSink::remove`] when an instance disappears. A failure only
/// affects the instance it names.
///
/// # Implementations
///
/// - [`ChannelSink`]: forwards to a tokio channel (tests, embedding)
/// - `StdoutSink` in the client binary: JSON lines on stdout
#[async_trait]
pub trait WidgetSink: Send {
    /// Replace whatever the instance currently shows.
    async fn deliver(&mut self, widget: RenderedWidget) -> Result<(), SinkError>;

    /// Forget an instance that the host removed.
    async fn remove(&mut self, instance: WidgetInstanceId) -> Result<(), SinkError> {
        let _ = instance;
        Ok(())
    }
}

/// Message emitted by [`ChannelSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkMessage {
    Update(RenderedWidget),
    Removed(WidgetInstanceId),
}

/// Sink that forwards every delivery to an mpsc channel.
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: mpsc::Sender<SinkMessage>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<SinkMessage>) -> Self {
        Self { tx }
    }

    /// Create a sink together with the receiving end.
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<SinkMessage>) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl WidgetSink for ChannelSink {
    async fn deliver(&mut self, widget: RenderedWidget) -> Result<(), SinkError> {
        let instance = widget.instance_id;
        self.tx
            .send(SinkMessage::Update(widget))
            .await
            .map_err(|_| SinkError::Closed { instance })
    }

    async fn remove(&mut self, instance: WidgetInstanceId) -> Result<(), SinkError> {
        self.tx
            .send(SinkMessage::Removed(instance))
            .await
            .map_err(|_| SinkError::Closed { instance })
    }
}
