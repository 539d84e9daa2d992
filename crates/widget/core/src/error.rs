//! Errors raised while loading external locale tables.
//!
//! Rendering itself never fails; only merging a user-supplied locale file can.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("locale table is not valid JSON")]
    Json(#[source] serde_json::Error),

    #[error("locale code must not be blank")]
    BlankCode,

    #[error("unknown text key {key:?} in locale {locale:?}")]
    UnknownKey { locale: String, key: String },
}

pub type Result<T> = std::result::Result<T, LocaleError>;
