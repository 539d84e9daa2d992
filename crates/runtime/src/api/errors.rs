//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and widget sinks so clients can
//! bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;
use widget_core::WidgetInstanceId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("update worker command channel closed")]
    CommandChannelClosed,

    #[error("update worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("update worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a snapshot store before building")]
    MissingStore,

    #[error("runtime requires a widget sink before building")]
    MissingSink,
}

/// Errors raised while handing rendered widgets to the host shell.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("host shell is gone; cannot deliver to {instance}")]
    Closed { instance: WidgetInstanceId },

    #[error("failed to deliver to {instance}: {reason}")]
    Delivery {
        instance: WidgetInstanceId,
        reason: String,
    },

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}
