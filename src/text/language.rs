//! Active language resolution.

use crate::dom::StyleTree;

/// Language used when none is declared.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Return `language`, or [`DEFAULT_LANGUAGE`] when it is missing or empty.
pub fn resolve_language(language: Option<&str>) -> &str {
    match language {
        Some(lang) if !lang.is_empty() => lang,
        _ => DEFAULT_LANGUAGE,
    }
}

/// Read the active language from the `lang` attribute of the tree's root element.
pub fn document_language<T: StyleTree>(tree: &T) -> String {
    resolve_language(tree.root_lang().as_deref()).to_string()
}
