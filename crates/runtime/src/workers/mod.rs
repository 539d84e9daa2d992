//! Worker tasks that back the runtime orchestration.
//!
//! The update worker is the only task: it owns the placed-widget set and runs
//! every render pass in order.

mod update;

pub use update::{Command, UpdateReport, UpdateTrigger, UpdateWorker};
