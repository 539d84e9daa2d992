//! CampusMate widget binary.
//!
//! Main entry point for rendering the home-screen widget outside the host
//! platform.
//!
//! # Examples
//!
//! ```bash
//! # Render two instances once
//! campusmate-widget render --snapshot snapshot.json -i 1 -i 2 --pretty
//!
//! # Keep instances up to date as the snapshot file changes
//! campusmate-widget watch --snapshot snapshot.json -i 1
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use campusmate_widget::{
    DEFAULT_INSTANCE, JsonLinesSink, WidgetConfig, logging, render_snapshot, watch_snapshot,
};
use clap::{Args, Parser, Subcommand};
use widget_core::WidgetInstanceId;
use widget_runtime::{FileSnapshotStore, WidgetRuntime};

#[derive(Parser)]
#[command(
    name = "campusmate-widget",
    version,
    about = "Render the CampusMate home-screen widget"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the current snapshot once and print the widgets as JSON
    Render {
        #[command(flatten)]
        common: CommonArgs,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Keep widgets up to date, printing one JSON line per delivery
    Watch {
        #[command(flatten)]
        common: CommonArgs,
        /// Periodic refresh in seconds (overrides WIDGET_REFRESH_SECS)
        #[arg(long)]
        refresh_secs: Option<u64>,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Snapshot file (overrides WIDGET_SNAPSHOT_PATH)
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Widget instance id (repeatable, defaults to 1)
    #[arg(short = 'i', long = "instance")]
    instances: Vec<u32>,
    /// Deep-link scheme (overrides WIDGET_DEEP_LINK_SCHEME)
    #[arg(long)]
    scheme: Option<String>,
    /// Extra locale strings (overrides WIDGET_LOCALE_FILE)
    #[arg(long)]
    locale_file: Option<PathBuf>,
}

impl CommonArgs {
    fn apply(&self, config: &mut WidgetConfig) {
        if let Some(path) = &self.snapshot {
            config.snapshot_path = Some(path.clone());
        }
        if let Some(scheme) = &self.scheme {
            config.scheme = scheme.clone();
        }
        if let Some(path) = &self.locale_file {
            config.locale_file = Some(path.clone());
        }
    }

    fn instance_ids(&self) -> Vec<WidgetInstanceId> {
        if self.instances.is_empty() {
            return vec![DEFAULT_INSTANCE];
        }
        self.instances.iter().copied().map(WidgetInstanceId).collect()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = WidgetConfig::from_env();

    let _guard = logging::setup_logging(&config.log_dir())?;

    match cli.cmd {
        Command::Render { common, pretty } => {
            common.apply(&mut config);
            run_render(&config, &common.instance_ids(), pretty)
        }
        Command::Watch {
            common,
            refresh_secs,
        } => {
            common.apply(&mut config);
            if let Some(secs) = refresh_secs {
                config.refresh_interval = std::time::Duration::from_secs(secs.max(1));
            }
            run_watch(config, common.instance_ids()).await
        }
    }
}

fn run_render(config: &WidgetConfig, ids: &[WidgetInstanceId], pretty: bool) -> Result<()> {
    let widgets = render_snapshot(config, ids)?;

    let json = if pretty {
        serde_json::to_string_pretty(&widgets)?
    } else {
        serde_json::to_string(&widgets)?
    };
    println!("{}", json);

    Ok(())
}

async fn run_watch(config: WidgetConfig, ids: Vec<WidgetInstanceId>) -> Result<()> {
    let snapshot_path = config.snapshot_path();
    tracing::info!("Starting widget watcher");
    tracing::info!("Snapshot: {}", snapshot_path.display());
    tracing::info!("Instances: {:?}", ids);

    let runtime = WidgetRuntime::builder()
        .config(config.runtime_config())
        .renderer(config.renderer()?)
        .store(FileSnapshotStore::new(&snapshot_path))
        .sink(JsonLinesSink::stdout())
        .build()?;
    let handle = runtime.handle();

    handle.add_instances(ids).await?;

    let watcher = tokio::spawn(watch_snapshot(
        snapshot_path,
        config.poll_interval,
        handle.clone(),
    ));

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    tracing::info!("Shutting down widget watcher");

    watcher.abort();
    let _ = watcher.await;
    drop(handle);
    runtime.shutdown().await?;

    Ok(())
}
