//! Rendering rules for the CampusMate home-screen widget.
//!
//! `widget-core` turns the key/value snapshot written by the main application
//! into a declarative widget description: text assignments, the visibility of
//! the "complete primary todo" action, and the deep links each tappable region
//! opens. Everything here is pure; rendering the same snapshot always yields
//! the same [`WidgetContent`].
//!
//! Modules are organized by responsibility:
//! - [`snapshot`] decodes raw store entries into a [`WidgetSnapshot`]
//! - [`locale`] holds the locale string table and code resolution
//! - [`deep_link`] builds the URIs consumed by the application router
//! - [`view`] describes the rendered surface handed to the host shell
//! - [`render`] ties them together in [`WidgetRenderer`]
pub mod deep_link;
pub mod error;
pub mod locale;
pub mod render;
pub mod snapshot;
pub mod view;

pub use deep_link::{DEFAULT_SCHEME, DeepLink, NavTarget};
pub use error::LocaleError;
pub use locale::{DEFAULT_LOCALE, LocaleStrings, LocaleTable, ResolvedLocale, TextKey};
pub use render::{ELLIPSIS, TITLE_MAX_CHARS, WidgetRenderer, render};
pub use snapshot::{SnapshotEntries, WidgetSnapshot};
pub use view::{RenderedWidget, TapTarget, TextField, Visibility, WidgetContent, WidgetInstanceId};
