//! Cloneable façade for issuing triggers to the runtime.
//!
//! [`WidgetHandle`] hides channel plumbing and offers async helpers matching
//! the host shell's update events. The update worker stops once every handle
//! is dropped.
use tokio::sync::{mpsc, oneshot};
use widget_core::WidgetInstanceId;

use super::errors::{Result, RuntimeError};
use crate::workers::{Command, UpdateReport, UpdateTrigger};

/// Client-facing handle to interact with the update worker
#[derive(Clone, Debug)]
pub struct WidgetHandle {
    command_tx: mpsc::Sender<Command>,
}

impl WidgetHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>) -> Self {
        Self { command_tx }
    }

    /// The main application committed a new snapshot; re-render every widget.
    pub async fn snapshot_changed(&self) -> Result<UpdateReport> {
        self.trigger(UpdateTrigger::SnapshotChanged).await
    }

    /// Re-render every widget without waiting for the refresh timer.
    pub async fn refresh(&self) -> Result<UpdateReport> {
        self.trigger(UpdateTrigger::PeriodicRefresh).await
    }

    /// Widgets were placed on the home screen.
    pub async fn add_instances(
        &self,
        ids: impl IntoIterator<Item = WidgetInstanceId>,
    ) -> Result<UpdateReport> {
        self.trigger(UpdateTrigger::InstancesAdded(ids.into_iter().collect()))
            .await
    }

    /// Widgets were removed from the home screen.
    pub async fn remove_instances(
        &self,
        ids: impl IntoIterator<Item = WidgetInstanceId>,
    ) -> Result<UpdateReport> {
        self.trigger(UpdateTrigger::InstancesRemoved(ids.into_iter().collect()))
            .await
    }

    /// Send any trigger and wait for its report.
    pub async fn trigger(&self, trigger: UpdateTrigger) -> Result<UpdateReport> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Update {
                trigger,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Widgets currently placed, in ascending id order.
    pub async fn active_instances(&self) -> Result<Vec<WidgetInstanceId>> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::ActiveInstances { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
