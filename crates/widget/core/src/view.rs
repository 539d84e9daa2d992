//! Declarative description of a rendered widget.
//!
//! These types carry no behavior of their own: the host shell assigns the
//! texts, applies the visibility and wires each tap target to its URI.
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::deep_link::NavTarget;

/// Host-assigned identifier of one placed widget.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WidgetInstanceId(pub u32);

impl fmt::Display for WidgetInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget#{}", self.0)
    }
}

impl From<u32> for WidgetInstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Text views on the widget layout.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TextField {
    Date,
    TodoCount,
    TodoLines,
    TimetableCount,
    TimetableLines,
    IcsCount,
    CompleteAction,
}

/// Tappable regions on the widget layout.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TapTarget {
    Root,
    TodoSection,
    TimetableSection,
    CalendarSection,
    CompleteAction,
}

impl TapTarget {
    /// Tab opened by a navigation region; `None` for action regions.
    pub const fn nav_target(self) -> Option<NavTarget> {
        match self {
            TapTarget::Root => Some(NavTarget::Home),
            TapTarget::TodoSection => Some(NavTarget::Todo),
            TapTarget::TimetableSection => Some(NavTarget::Timetable),
            TapTarget::CalendarSection => Some(NavTarget::Calendar),
            TapTarget::CompleteAction => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    #[default]
    Gone,
}

impl Visibility {
    pub const fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// Everything the host shell needs to draw one widget.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetContent {
    pub texts: BTreeMap<TextField, String>,
    pub complete_action: Visibility,
    /// Tap target → deep-link URI.
    pub bindings: BTreeMap<TapTarget, String>,
}

impl WidgetContent {
    pub fn text(&self, field: TextField) -> Option<&str> {
        self.texts.get(&field).map(String::as_str)
    }

    pub fn binding(&self, target: TapTarget) -> Option<&str> {
        self.bindings.get(&target).map(String::as_str)
    }
}

/// Content addressed to one widget instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedWidget {
    pub instance_id: WidgetInstanceId,
    pub content: WidgetContent,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_nav_target_has_exactly_one_region() {
        let mapped: Vec<_> = TapTarget::iter().filter_map(TapTarget::nav_target).collect();
        let all: Vec<_> = NavTarget::iter().collect();
        assert_eq!(mapped, all);
    }

    #[test]
    fn content_serializes_with_snake_case_keys() {
        let mut content = WidgetContent::default();
        content.texts.insert(TextField::TodoCount, "TODO 1".into());
        content
            .bindings
            .insert(TapTarget::Root, "campusmate://nav/tab?target=home".into());

        let json = serde_json::to_value(RenderedWidget {
            instance_id: WidgetInstanceId(7),
            content,
        })
        .unwrap();

        assert_eq!(json["instance_id"], 7);
        assert_eq!(json["content"]["texts"]["todo_count"], "TODO 1");
        assert_eq!(json["content"]["complete_action"], "gone");
        assert_eq!(
            json["content"]["bindings"]["root"],
            "campusmate://nav/tab?target=home"
        );
    }
}
