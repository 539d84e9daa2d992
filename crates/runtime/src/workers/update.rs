//! Update worker that owns the set of placed widgets.
//!
//! Receives triggers from [`crate::WidgetHandle`] (and its own refresh timer),
//! reads the snapshot, renders through [`WidgetRenderer`] and hands each
//! result to the [`WidgetSink`].

use std::collections::BTreeSet;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};
use widget_core::{WidgetInstanceId, WidgetRenderer, WidgetSnapshot};

use crate::api::WidgetSink;
use crate::repository::SnapshotStore;

/// Reasons the host shell asks for a render pass.
#[derive(Clone, Debug, PartialEq, Eq, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum UpdateTrigger {
    /// The main application committed a new snapshot.
    SnapshotChanged,
    /// Timer-driven refresh of every placed widget.
    PeriodicRefresh,
    /// Widgets were placed; only these are rendered.
    InstancesAdded(Vec<WidgetInstanceId>),
    /// Widgets were removed from the home screen.
    InstancesRemoved(Vec<WidgetInstanceId>),
}

/// Outcome of one trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    pub rendered: usize,
    pub delivered: usize,
    pub removed: usize,
    pub failed: usize,
}

/// Commands that can be sent to the update worker
pub enum Command {
    /// Apply a trigger and report what happened.
    Update {
        trigger: UpdateTrigger,
        reply: oneshot::Sender<UpdateReport>,
    },
    /// List the placed widgets.
    ActiveInstances {
        reply: oneshot::Sender<Vec<WidgetInstanceId>>,
    },
}

/// Background task serializing every render pass.
pub struct UpdateWorker {
    store: Box<dyn SnapshotStore>,
    sink: Box<dyn WidgetSink>,
    renderer: WidgetRenderer,
    instances: BTreeSet<WidgetInstanceId>,
    command_rx: mpsc::Receiver<Command>,
    refresh_interval: Duration,
}

impl UpdateWorker {
    pub fn new(
        store: Box<dyn SnapshotStore>,
        sink: Box<dyn WidgetSink>,
        renderer: WidgetRenderer,
        command_rx: mpsc::Receiver<Command>,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            store,
            sink,
            renderer,
            instances: BTreeSet::new(),
            command_rx,
            refresh_interval,
        }
    }

    /// Main worker loop. Returns once every handle has been dropped.
    pub async fn run(mut self) {
        let period = self.refresh_interval.max(Duration::from_millis(1));
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "Update worker started (refresh every {}s)",
            period.as_secs()
        );

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd).await,
                    None => break,
                },
                _ = ticker.tick() => {
                    let report = self.apply(UpdateTrigger::PeriodicRefresh).await;
                    debug!("Periodic refresh: {:?}", report);
                }
            }
        }

        info!("Update worker stopped");
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Update { trigger, reply } => {
                let report = self.apply(trigger).await;
                if reply.send(report).is_err() {
                    debug!("Update reply channel closed (caller dropped)");
                }
            }
            Command::ActiveInstances { reply } => {
                let instances = self.instances.iter().copied().collect();
                if reply.send(instances).is_err() {
                    debug!("ActiveInstances reply channel closed (caller dropped)");
                }
            }
        }
    }

    async fn apply(&mut self, trigger: UpdateTrigger) -> UpdateReport {
        debug!("Applying {} trigger", trigger.as_ref());

        match trigger {
            UpdateTrigger::SnapshotChanged | UpdateTrigger::PeriodicRefresh => {
                let active: Vec<_> = self.instances.iter().copied().collect();
                self.render_and_deliver(&active).await
            }
            UpdateTrigger::InstancesAdded(ids) => {
                let mut added = Vec::with_capacity(ids.len());
                for id in ids {
                    if !added.contains(&id) {
                        added.push(id);
                    }
                }
                self.instances.extend(added.iter().copied());
                info!("Widgets added: {:?}", added);

                self.render_and_deliver(&added).await
            }
            UpdateTrigger::InstancesRemoved(ids) => {
                let mut report = UpdateReport::default();
                for id in ids {
                    if !self.instances.remove(&id) {
                        debug!("Ignoring removal of unknown {}", id);
                        continue;
                    }

                    match self.sink.remove(id).await {
                        Ok(()) => report.removed += 1,
                        Err(e) => {
                            warn!("Failed to remove {}: {}", id, e);
                            report.failed += 1;
                        }
                    }
                }
                info!("Widgets removed: {}", report.removed);
                report
            }
        }
    }

    async fn render_and_deliver(&mut self, ids: &[WidgetInstanceId]) -> UpdateReport {
        let mut report = UpdateReport::default();
        if ids.is_empty() {
            debug!("No widgets to render");
            return report;
        }

        let snapshot = match self.store.load_snapshot() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Failed to load widget snapshot, rendering empty state: {}", e);
                WidgetSnapshot::default()
            }
        };

        let widgets = self.renderer.render(&snapshot, ids);
        report.rendered = widgets.len();

        for widget in widgets {
            let instance = widget.instance_id;
            match self.sink.deliver(widget).await {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    warn!("Failed to deliver {}: {}", instance, e);
                    report.failed += 1;
                }
            }
        }

        report
    }
}
