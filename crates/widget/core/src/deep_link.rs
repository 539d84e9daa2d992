//! Deep links opened by widget taps.
//!
//! The URI shapes are consumed by the application's router and must stay
//! bit-exact:
//!
//! ```text
//! <scheme>://nav/tab?target={home|todo|timetable|calendar}
//! <scheme>://todo/complete?id={url-encoded-identifier}
//! ```
use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Scheme registered by the application.
pub const DEFAULT_SCHEME: &str = "campusmate";

/// Bytes left unescaped in query components, matching the host platform's
/// URI component encoder (alphanumerics plus `_-!.~'()*`).
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'-')
    .remove(b'!')
    .remove(b'.')
    .remove(b'~')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

/// In-app tab the navigation links point at.
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
pub enum NavTarget {
    Home,
    Todo,
    Timetable,
    Calendar,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeepLink {
    /// Switch the application to a tab.
    Nav { target: NavTarget },
    /// Mark a todo as completed.
    CompleteTodo { id: String },
}

impl DeepLink {
    pub fn nav(target: NavTarget) -> Self {
        DeepLink::Nav { target }
    }

    pub fn complete_todo(id: impl Into<String>) -> Self {
        DeepLink::CompleteTodo { id: id.into() }
    }

    /// Render the link under `scheme`; a blank scheme uses [`DEFAULT_SCHEME`].
    pub fn to_uri(&self, scheme: &str) -> String {
        let scheme = match scheme.trim() {
            "" => DEFAULT_SCHEME,
            trimmed => trimmed,
        };

        match self {
            DeepLink::Nav { target } => format!("{scheme}://nav/tab?target={target}"),
            DeepLink::CompleteTodo { id } => format!(
                "{scheme}://todo/complete?id={}",
                utf8_percent_encode(id, COMPONENT_ENCODE_SET)
            ),
        }
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri(DEFAULT_SCHEME))
    }
}
