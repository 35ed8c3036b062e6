//! Localized display text.
//!
//! A [`LocalizedText`] is either one string for every language or a
//! [`Translations`] mapping resolved against the active language.

mod language;
mod localized;
mod translations;

pub use language::{document_language, resolve_language, DEFAULT_LANGUAGE};
pub use localized::{get_localized_string, LocalizedText};
pub use translations::Translations;
