//! Snapshot → widget content.
use strum::IntoEnumIterator;

use crate::deep_link::{DEFAULT_SCHEME, DeepLink};
use crate::locale::{LocaleTable, ResolvedLocale, TextKey};
use crate::snapshot::WidgetSnapshot;
use crate::view::{
    RenderedWidget, TapTarget, TextField, Visibility, WidgetContent, WidgetInstanceId,
};

/// Longest primary-todo title shown before truncation, in characters.
pub const TITLE_MAX_CHARS: usize = 18;

/// Appended to truncated titles.
pub const ELLIPSIS: &str = "...";

/// Renders widget content from snapshots.
///
/// Holds only immutable configuration, so one renderer can serve any number
/// of concurrent update passes.
#[derive(Clone, Debug)]
pub struct WidgetRenderer {
    locales: LocaleTable,
    scheme: String,
}

impl Default for WidgetRenderer {
    fn default() -> Self {
        Self::new(LocaleTable::builtin(), DEFAULT_SCHEME)
    }
}

impl WidgetRenderer {
    pub fn new(locales: LocaleTable, scheme: impl Into<String>) -> Self {
        Self {
            locales,
            scheme: scheme.into(),
        }
    }

    /// One [`RenderedWidget`] per instance, in the order given.
    ///
    /// Content is computed once and shared by every instance; an empty id list
    /// yields no output.
    pub fn render(
        &self,
        snapshot: &WidgetSnapshot,
        instance_ids: &[WidgetInstanceId],
    ) -> Vec<RenderedWidget> {
        if instance_ids.is_empty() {
            return Vec::new();
        }

        let content = self.render_content(snapshot);
        instance_ids
            .iter()
            .map(|&instance_id| RenderedWidget {
                instance_id,
                content: content.clone(),
            })
            .collect()
    }

    /// Content for a single snapshot, independent of any instance.
    pub fn render_content(&self, snapshot: &WidgetSnapshot) -> WidgetContent {
        let locale = self.locales.resolve(snapshot.locale_code.as_deref());
        let mut content = WidgetContent::default();

        let texts = [
            (
                TextField::Date,
                text_or(&snapshot.date, locale.text(TextKey::DateFallback)),
            ),
            (
                TextField::TodoLines,
                text_or(&snapshot.todo_lines, locale.text(TextKey::TodoLinesFallback)),
            ),
            (
                TextField::TimetableLines,
                text_or(
                    &snapshot.timetable_lines,
                    locale.text(TextKey::TimetableLinesFallback),
                ),
            ),
            (
                TextField::TodoCount,
                counter(&locale, TextKey::TodoLabel, snapshot.todo_count),
            ),
            (
                TextField::TimetableCount,
                counter(&locale, TextKey::TimetableLabel, snapshot.timetable_count),
            ),
            (
                TextField::IcsCount,
                counter(&locale, TextKey::IcsLabel, snapshot.ics_count),
            ),
        ];
        content.texts.extend(texts);

        for target in TapTarget::iter() {
            if let Some(nav) = target.nav_target() {
                content
                    .bindings
                    .insert(target, DeepLink::nav(nav).to_uri(&self.scheme));
            }
        }

        match primary_todo_id(snapshot) {
            Some(id) => {
                let title = text_or(
                    &snapshot.todo_primary_title,
                    locale.text(TextKey::PrimaryTodoFallback),
                );
                content.texts.insert(
                    TextField::CompleteAction,
                    format!(
                        "{}{}",
                        locale.text(TextKey::CompleteVerb),
                        truncate_title(&title)
                    ),
                );
                content.complete_action = Visibility::Visible;
                content.bindings.insert(
                    TapTarget::CompleteAction,
                    DeepLink::complete_todo(id).to_uri(&self.scheme),
                );
            }
            None => content.complete_action = Visibility::Gone,
        }

        content
    }
}

/// Render with the built-in locales and the default scheme.
pub fn render(snapshot: &WidgetSnapshot, instance_ids: &[WidgetInstanceId]) -> Vec<RenderedWidget> {
    WidgetRenderer::default().render(snapshot, instance_ids)
}

/// Keep at most [`TITLE_MAX_CHARS`] characters, marking the cut with [`ELLIPSIS`].
pub fn truncate_title(title: &str) -> String {
    match title.char_indices().nth(TITLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &title[..cut], ELLIPSIS),
        None => title.to_string(),
    }
}

fn primary_todo_id(snapshot: &WidgetSnapshot) -> Option<&str> {
    snapshot
        .todo_primary_id
        .as_deref()
        .filter(|id| !is_blank(id))
}

fn text_or(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref() {
        Some(text) if !is_blank(text) => text.to_string(),
        _ => fallback.to_string(),
    }
}

fn counter(locale: &ResolvedLocale<'_>, label: TextKey, count: Option<i64>) -> String {
    format!("{} {}", locale.text(label), count.unwrap_or(0).max(0))
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_titles_are_untouched() {
        assert_eq!(truncate_title(""), "");
        assert_eq!(truncate_title("Essay"), "Essay");
        assert_eq!(truncate_title("exactly eighteen!!"), "exactly eighteen!!");
    }

    #[test]
    fn long_titles_keep_eighteen_characters() {
        assert_eq!(truncate_title("nineteen characters"), "nineteen character...");
        assert_eq!(
            truncate_title("Finish essay on colonial history"),
            "Finish essay on co..."
        );
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let title = "알고리즘 과제 제출하고 교수님께 메일 보내기";
        let truncated = truncate_title(title);
        assert_eq!(truncated.chars().count(), TITLE_MAX_CHARS + ELLIPSIS.len());
        assert_eq!(truncated, "알고리즘 과제 제출하고 교수님께 ...");
    }

    #[test]
    fn negative_counts_render_as_zero() {
        let snapshot = WidgetSnapshot {
            todo_count: Some(-4),
            ..WidgetSnapshot::default()
        };
        let content = WidgetRenderer::default().render_content(&snapshot);
        assert_eq!(content.text(TextField::TodoCount), Some("할 일 0"));
    }

    #[test]
    fn empty_instance_list_renders_nothing() {
        assert!(render(&WidgetSnapshot::default(), &[]).is_empty());
    }

    #[test]
    fn custom_scheme_is_used_for_every_binding() {
        let renderer = WidgetRenderer::new(LocaleTable::builtin(), "cm-staging");
        let snapshot = WidgetSnapshot {
            todo_primary_id: Some("t1".into()),
            ..WidgetSnapshot::default()
        };
        let content = renderer.render_content(&snapshot);
        assert_eq!(content.bindings.len(), 5);
        assert!(
            content
                .bindings
                .values()
                .all(|uri| uri.starts_with("cm-staging://"))
        );
    }
}
