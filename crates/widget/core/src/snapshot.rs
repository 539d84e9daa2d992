//! Snapshot of the fields the main application publishes for the widget.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw key/value pairs as read from the shared store.
pub type SnapshotEntries = BTreeMap<String, Value>;

/// Store keys written by the main application.
pub mod keys {
    pub const LOCALE_CODE: &str = "widget_locale_code";
    pub const DATE: &str = "widget_date";
    pub const TODO_COUNT: &str = "widget_todo_count";
    pub const TODO_LINES: &str = "widget_todo_lines";
    pub const TODO_PRIMARY_ID: &str = "widget_todo_primary_id";
    pub const TODO_PRIMARY_TITLE: &str = "widget_todo_primary_title";
    pub const ICS_COUNT: &str = "widget_ics_count";
    pub const TIMETABLE_COUNT: &str = "widget_timetable_count";
    pub const TIMETABLE_LINES: &str = "widget_timetable_lines";
}

/// Typed view of the snapshot. Every field is optional; the renderer decides
/// what an absent or blank value looks like.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSnapshot {
    pub locale_code: Option<String>,
    pub date: Option<String>,
    pub todo_count: Option<i64>,
    pub todo_lines: Option<String>,
    pub todo_primary_id: Option<String>,
    pub todo_primary_title: Option<String>,
    pub ics_count: Option<i64>,
    pub timetable_count: Option<i64>,
    pub timetable_lines: Option<String>,
}

impl WidgetSnapshot {
    /// Decode store entries leniently.
    ///
    /// String fields take JSON strings only. Count fields take integers or
    /// strings holding an integer. Values of any other shape count as absent,
    /// and unknown keys are ignored.
    pub fn from_entries(entries: &SnapshotEntries) -> Self {
        Self {
            locale_code: read_string(entries, keys::LOCALE_CODE),
            date: read_string(entries, keys::DATE),
            todo_count: read_count(entries, keys::TODO_COUNT),
            todo_lines: read_string(entries, keys::TODO_LINES),
            todo_primary_id: read_string(entries, keys::TODO_PRIMARY_ID),
            todo_primary_title: read_string(entries, keys::TODO_PRIMARY_TITLE),
            ics_count: read_count(entries, keys::ICS_COUNT),
            timetable_count: read_count(entries, keys::TIMETABLE_COUNT),
            timetable_lines: read_string(entries, keys::TIMETABLE_LINES),
        }
    }

    /// Inverse of [`WidgetSnapshot::from_entries`]; absent fields are omitted.
    pub fn to_entries(&self) -> SnapshotEntries {
        let mut entries = SnapshotEntries::new();
        let strings = [
            (keys::LOCALE_CODE, &self.locale_code),
            (keys::DATE, &self.date),
            (keys::TODO_LINES, &self.todo_lines),
            (keys::TODO_PRIMARY_ID, &self.todo_primary_id),
            (keys::TODO_PRIMARY_TITLE, &self.todo_primary_title),
            (keys::TIMETABLE_LINES, &self.timetable_lines),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                entries.insert(key.to_string(), Value::String(value.clone()));
            }
        }

        let counts = [
            (keys::TODO_COUNT, self.todo_count),
            (keys::ICS_COUNT, self.ics_count),
            (keys::TIMETABLE_COUNT, self.timetable_count),
        ];
        for (key, value) in counts {
            if let Some(value) = value {
                entries.insert(key.to_string(), Value::from(value));
            }
        }

        entries
    }
}

fn read_string(entries: &SnapshotEntries, key: &str) -> Option<String> {
    match entries.get(key)? {
        Value::String(text) => Some(text.clone()),
        other => {
            tracing::trace!("Ignoring non-string value for {}: {}", key, other);
            None
        }
    }
}

fn read_count(entries: &SnapshotEntries, key: &str) -> Option<i64> {
    match entries.get(key)? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        other => {
            tracing::trace!("Ignoring non-integer value for {}: {}", key, other);
            None
        }
    }
}
