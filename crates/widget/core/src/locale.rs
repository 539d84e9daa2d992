//! Locale string table used by the renderer.
//!
//! Strings are keyed by locale code plus [`TextKey`]. A snapshot's locale code
//! selects the longest registered code it starts with (case-insensitive), so
//! `en`, `en-US` and `EN_gb` all land on the English table. Anything else,
//! including a blank code, uses the default locale (`ko`).
use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::{LocaleError, Result};

/// Locale used when the snapshot names none or an unknown one.
pub const DEFAULT_LOCALE: &str = "ko";

/// Every piece of locale-dependent text the widget shows.
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
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TextKey {
    /// Shown when the snapshot carries no date.
    DateFallback,
    /// Shown when the snapshot carries no todo lines.
    TodoLinesFallback,
    /// Shown when the snapshot carries no timetable lines.
    TimetableLinesFallback,
    TodoLabel,
    TimetableLabel,
    /// Label of the school-events (ICS) counter.
    IcsLabel,
    /// Title used when the primary todo has an id but no title.
    PrimaryTodoFallback,
    /// Prefix of the complete-action text, including its trailing space.
    CompleteVerb,
}

impl TextKey {
    /// Built-in Korean text. Last resort of every lookup.
    pub const fn korean(self) -> &'static str {
        match self {
            TextKey::DateFallback => "오늘",
            TextKey::TodoLinesFallback => "- 급한 할 일이 없어요",
            TextKey::TimetableLinesFallback => "- 등록된 수업이 없어요",
            TextKey::TodoLabel => "할 일",
            TextKey::TimetableLabel => "시간표",
            TextKey::IcsLabel => "학교 일정",
            TextKey::PrimaryTodoFallback => "가장 급한 할 일",
            TextKey::CompleteVerb => "완료: ",
        }
    }

    /// Built-in English text.
    pub const fn english(self) -> &'static str {
        match self {
            TextKey::DateFallback => "Today",
            TextKey::TodoLinesFallback => "- No urgent todos",
            TextKey::TimetableLinesFallback => "- No courses yet",
            TextKey::TodoLabel => "TODO",
            TextKey::TimetableLabel => "TIMETABLE",
            TextKey::IcsLabel => "School events",
            TextKey::PrimaryTodoFallback => "Top task",
            TextKey::CompleteVerb => "Complete: ",
        }
    }
}

/// Text for one locale. May be partial; missing keys fall back to the default locale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleStrings {
    texts: BTreeMap<TextKey, String>,
}

impl LocaleStrings {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_builtin(text: fn(TextKey) -> &'static str) -> Self {
        Self {
            texts: TextKey::iter().map(|key| (key, text(key).to_string())).collect(),
        }
    }

    pub fn with(mut self, key: TextKey, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    pub fn insert(&mut self, key: TextKey, text: impl Into<String>) {
        self.texts.insert(key, text.into());
    }

    pub fn get(&self, key: TextKey) -> Option<&str> {
        self.texts.get(&key).map(String::as_str)
    }

    fn extend(&mut self, other: LocaleStrings) {
        self.texts.extend(other.texts);
    }
}

/// Locale code → strings, with a default code used for fallback.
#[derive(Clone, Debug)]
pub struct LocaleTable {
    default_code: String,
    locales: BTreeMap<String, LocaleStrings>,
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LocaleTable {
    /// Korean (default) and English, the two locales the application ships.
    pub fn builtin() -> Self {
        let mut locales = BTreeMap::new();
        locales.insert(
            DEFAULT_LOCALE.to_string(),
            LocaleStrings::from_builtin(TextKey::korean),
        );
        locales.insert("en".to_string(), LocaleStrings::from_builtin(TextKey::english));

        Self {
            default_code: DEFAULT_LOCALE.to_string(),
            locales,
        }
    }

    /// Registered locale codes in lexical order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Register a locale or merge keys over an existing one.
    ///
    /// Codes are stored trimmed and lowercased.
    pub fn insert(&mut self, code: &str, strings: LocaleStrings) -> Result<()> {
        let code = normalize_code(code).ok_or(LocaleError::BlankCode)?;
        self.locales.entry(code).or_default().extend(strings);
        Ok(())
    }

    /// Merge a JSON document of the form `{ "<code>": { "<text_key>": "..." } }`.
    ///
    /// The document is validated as a whole before anything is merged.
    pub fn merge_json(&mut self, json: &str) -> Result<()> {
        let raw: BTreeMap<String, BTreeMap<String, String>> =
            serde_json::from_str(json).map_err(LocaleError::Json)?;

        let mut staged = Vec::with_capacity(raw.len());
        for (code, texts) in raw {
            if normalize_code(&code).is_none() {
                return Err(LocaleError::BlankCode);
            }

            let mut strings = LocaleStrings::new();
            for (key, text) in texts {
                let key = TextKey::from_str(&key).map_err(|_| LocaleError::UnknownKey {
                    locale: code.clone(),
                    key: key.clone(),
                })?;
                strings.insert(key, text);
            }
            staged.push((code, strings));
        }

        for (code, strings) in staged {
            self.insert(&code, strings)?;
        }
        Ok(())
    }

    /// Pick the strings for a snapshot's locale code.
    pub fn resolve(&self, code: Option<&str>) -> ResolvedLocale<'_> {
        let fallback = self.locales.get(&self.default_code);

        let requested = code.and_then(normalize_code);
        let matched = requested.as_deref().and_then(|requested| {
            self.locales
                .iter()
                .filter(|(known, _)| requested.starts_with(known.as_str()))
                .max_by_key(|(known, _)| known.len())
        });

        match matched {
            Some((known, strings)) => ResolvedLocale {
                code: known,
                strings: Some(strings),
                fallback,
            },
            None => {
                if let Some(requested) = requested {
                    tracing::debug!(
                        "Unknown locale code {:?}, using {}",
                        requested,
                        self.default_code
                    );
                }
                ResolvedLocale {
                    code: &self.default_code,
                    strings: fallback,
                    fallback,
                }
            }
        }
    }
}

/// Strings selected for one render pass.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedLocale<'a> {
    code: &'a str,
    strings: Option<&'a LocaleStrings>,
    fallback: Option<&'a LocaleStrings>,
}

impl<'a> ResolvedLocale<'a> {
    /// Registered code that was selected.
    pub fn code(&self) -> &'a str {
        self.code
    }

    /// Look up a text; total over [`TextKey`].
    pub fn text(&self, key: TextKey) -> &'a str {
        self.strings
            .and_then(|strings| strings.get(key))
            .or_else(|| self.fallback.and_then(|strings| strings.get(key)))
            .unwrap_or_else(|| key.korean())
    }
}

fn normalize_code(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_prefix_is_case_insensitive() {
        let table = LocaleTable::builtin();
        for code in ["en", "EN", "en-US", "En_gb", "english"] {
            assert_eq!(table.resolve(Some(code)).code(), "en", "code {code}");
        }
    }

    #[test]
    fn unknown_and_blank_codes_use_korean() {
        let table = LocaleTable::builtin();
        for code in [None, Some(""), Some("   "), Some("ja"), Some("fr-FR"), Some("e")] {
            let resolved = table.resolve(code);
            assert_eq!(resolved.code(), "ko", "code {code:?}");
            assert_eq!(resolved.text(TextKey::TodoLabel), "할 일");
        }
    }

    #[test]
    fn longest_registered_prefix_wins() {
        let mut table = LocaleTable::builtin();
        table
            .insert("en-gb", LocaleStrings::new().with(TextKey::TodoLabel, "TO-DO"))
            .unwrap();

        let british = table.resolve(Some("en-GB"));
        assert_eq!(british.code(), "en-gb");
        assert_eq!(british.text(TextKey::TodoLabel), "TO-DO");

        let american = table.resolve(Some("en-US"));
        assert_eq!(american.text(TextKey::TodoLabel), "TODO");
    }

    #[test]
    fn partial_locale_falls_back_to_default() {
        let mut table = LocaleTable::builtin();
        table
            .insert("ja", LocaleStrings::new().with(TextKey::TodoLabel, "やること"))
            .unwrap();

        let resolved = table.resolve(Some("ja-JP"));
        assert_eq!(resolved.text(TextKey::TodoLabel), "やること");
        assert_eq!(resolved.text(TextKey::TimetableLabel), "시간표");
    }

    #[test]
    fn merge_json_overrides_and_adds() {
        let mut table = LocaleTable::builtin();
        table
            .merge_json(r#"{"EN": {"ics_label": "Campus events"}, "ja": {"todo_label": "タスク"}}"#)
            .unwrap();

        assert_eq!(
            table.resolve(Some("en")).text(TextKey::IcsLabel),
            "Campus events"
        );
        assert_eq!(table.resolve(Some("en")).text(TextKey::TodoLabel), "TODO");
        assert_eq!(table.codes().collect::<Vec<_>>(), vec!["en", "ja", "ko"]);
    }

    #[test]
    fn merge_json_rejects_unknown_key_without_partial_merge() {
        let mut table = LocaleTable::builtin();
        let err = table
            .merge_json(r#"{"ja": {"todo_label": "タスク"}, "zz": {"headline": "x"}}"#)
            .unwrap_err();

        assert!(matches!(err, LocaleError::UnknownKey { ref key, .. } if key == "headline"));
        assert!(!table.codes().any(|code| code == "ja"));
    }

    #[test]
    fn merge_json_rejects_malformed_documents() {
        let mut table = LocaleTable::builtin();
        assert!(matches!(
            table.merge_json("[1, 2]"),
            Err(LocaleError::Json(_))
        ));
        assert!(matches!(
            table.merge_json(r#"{" ": {"todo_label": "x"}}"#),
            Err(LocaleError::BlankCode)
        ));
    }
}
