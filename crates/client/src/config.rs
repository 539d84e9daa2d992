//! Widget binary configuration structures and loaders.
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use widget_core::{DEFAULT_SCHEME, LocaleTable, WidgetRenderer};
use widget_runtime::RuntimeConfig;

use crate::dirs::WidgetDirs;

const MIN_POLL_MILLIS: u64 = 50;

/// Configuration shared by the `render` and `watch` commands.
#[derive(Clone, Debug)]
pub struct WidgetConfig {
    /// Snapshot file; defaults to the platform data directory.
    pub snapshot_path: Option<PathBuf>,
    pub scheme: String,
    /// JSON document with extra or overriding locale strings.
    pub locale_file: Option<PathBuf>,
    pub refresh_interval: Duration,
    pub command_buffer: usize,
    pub poll_interval: Duration,
    pub log_dir: Option<PathBuf>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            scheme: DEFAULT_SCHEME.to_string(),
            locale_file: None,
            refresh_interval: Duration::from_secs(30 * 60),
            command_buffer: 32,
            poll_interval: Duration::from_millis(500),
            log_dir: None,
        }
    }
}

impl WidgetConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WIDGET_SNAPSHOT_PATH` - Snapshot file (default: `<data_dir>/widget_snapshot.json`)
    /// - `WIDGET_DEEP_LINK_SCHEME` - URI scheme for tap bindings (default: campusmate)
    /// - `WIDGET_LOCALE_FILE` - Extra locale strings (default: none)
    /// - `WIDGET_REFRESH_SECS` - Periodic refresh in seconds (default: 1800)
    /// - `WIDGET_COMMAND_BUFFER` - Worker command queue size (default: 32)
    /// - `WIDGET_POLL_MILLIS` - Snapshot file poll interval (default: 500)
    /// - `WIDGET_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`WidgetConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = non_blank(lookup("WIDGET_SNAPSHOT_PATH")) {
            config.snapshot_path = Some(PathBuf::from(path));
        }

        if let Some(scheme) = non_blank(lookup("WIDGET_DEEP_LINK_SCHEME")) {
            config.scheme = scheme;
        }

        if let Some(path) = non_blank(lookup("WIDGET_LOCALE_FILE")) {
            config.locale_file = Some(PathBuf::from(path));
        }

        if let Some(secs) = parse::<u64>(&lookup, "WIDGET_REFRESH_SECS") {
            config.refresh_interval = Duration::from_secs(secs.max(1));
        }

        if let Some(capacity) = parse::<usize>(&lookup, "WIDGET_COMMAND_BUFFER") {
            config.command_buffer = capacity.max(1);
        }

        if let Some(millis) = parse::<u64>(&lookup, "WIDGET_POLL_MILLIS") {
            config.poll_interval = Duration::from_millis(millis.max(MIN_POLL_MILLIS));
        }

        if let Some(path) = non_blank(lookup("WIDGET_LOG_DIR")) {
            config.log_dir = Some(PathBuf::from(path));
        }

        config
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.snapshot_path
            .clone()
            .unwrap_or_else(|| WidgetDirs::resolve().snapshot_path())
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| WidgetDirs::resolve().log_dir())
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            command_buffer_size: self.command_buffer,
            refresh_interval: self.refresh_interval,
        }
    }

    /// Build the renderer, merging the locale file over the built-in table.
    pub fn renderer(&self) -> Result<WidgetRenderer> {
        let mut locales = LocaleTable::builtin();
        if let Some(path) = &self.locale_file {
            merge_locale_file(&mut locales, path)?;
        }
        Ok(WidgetRenderer::new(locales, self.scheme.clone()))
    }
}

fn merge_locale_file(locales: &mut LocaleTable, path: &Path) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {}", path.display()))?;
    locales
        .merge_json(&json)
        .with_context(|| format!("Invalid locale file: {}", path.display()))?;

    tracing::info!(
        "Loaded locale file {} (locales: {})",
        path.display(),
        locales.codes().collect::<Vec<_>>().join(", ")
    );
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
