//! Composition root for the CampusMate home-screen widget.
//!
//! # Architecture
//!
//! ```text
//! campusmate-widget (binary)
//!   ├─→ WidgetConfig (environment + command-line flags)
//!   ├─→ widget-runtime (update worker, snapshot store)
//!   │     └─→ widget-core (renderer, locales, deep links)
//!   └─→ JsonLinesSink (stdout stand-in for the host shell)
//! ```

pub mod config;
pub mod dirs;
pub mod logging;
pub mod render;
pub mod sink;
pub mod watch;

pub use config::WidgetConfig;
pub use render::{DEFAULT_INSTANCE, render_snapshot};
pub use sink::JsonLinesSink;
pub use watch::watch_snapshot;
