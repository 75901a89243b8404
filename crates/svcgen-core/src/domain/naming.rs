//! Identifier shortening and source-name normalization.
//!
//! # Design
//!
//! Every function here is total — no error path, any string input produces an
//! answer. `shorten` is also idempotent: aliases map to themselves, so the
//! builder can re-shorten without guarding.

/// Synonym table consulted before the suffix fallback.
///
/// Values must themselves be fixed points of [`shorten`] (idempotence).
const SYNONYMS: &[(&str, &str)] = &[
    ("context", "ctx"),
    ("request", "req"),
    ("response", "res"),
    ("error", "err"),
    ("service", "svc"),
    ("services", "svcs"),
];

/// Source-file suffixes stripped by [`trim_file_suffixes`].
///
/// Each suffix is checked exactly once, in this order. "foo_grpc.pb.go"
/// reduces fully only because ".go" and ".pb" come before "_grpc".
const FILE_SUFFIXES: &[&str] = &[".go", ".pb", ".gw", ".connect", "_grpc", "_service"];

/// Map a type or parameter name to its short display alias.
///
/// Lower-cases the input, consults the synonym table, then falls back to the
/// generic request/response aliases for `…Request` / `…Response` names, and
/// finally returns the lower-cased word unchanged.
pub fn shorten(word: &str) -> String {
    let word = word.to_lowercase();

    if let Some((_, alias)) = SYNONYMS.iter().find(|(key, _)| *key == word) {
        return (*alias).to_string();
    }

    if word.ends_with("request") {
        return "req".to_string();
    }

    if word.ends_with("response") {
        return "res".to_string();
    }

    word
}

/// Strip the known generated-source suffixes from a file name.
pub fn trim_file_suffixes(name: &str) -> String {
    let mut name = name;
    for suffix in FILE_SUFFIXES {
        name = name.strip_suffix(suffix).unwrap_or(name);
    }
    name.to_string()
}

/// Lower-case only the first character.
///
/// Inputs shorter than two characters are fully lower-cased.
pub fn lower_first(name: &str) -> String {
    if name.chars().count() < 2 {
        return name.to_lowercase();
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip one trailing "Server" or "Service" token.
pub fn trim_service_suffix(name: &str) -> &str {
    name.strip_suffix("Server")
        .or_else(|| name.strip_suffix("Service"))
        .unwrap_or(name)
}

/// Package name for a generated file: the last segment of its output
/// directory.
pub fn package_from_dir(dir: &std::path::Path) -> String {
    dir.file_name()
        .and_then(|segment| segment.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| "main".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn shorten_uses_synonym_table() {
        assert_eq!(shorten("context"), "ctx");
        assert_eq!(shorten("Context"), "ctx");
        assert_eq!(shorten("request"), "req");
        assert_eq!(shorten("response"), "res");
        assert_eq!(shorten("error"), "err");
        assert_eq!(shorten("Service"), "svc");
        assert_eq!(shorten("services"), "svcs");
    }

    #[test]
    fn shorten_falls_back_to_suffix_rules() {
        assert_eq!(shorten("CreateRequest"), "req");
        assert_eq!(shorten("ListWidgetsResponse"), "res");
    }

    #[test]
    fn shorten_passes_unknown_words_through_lowercased() {
        assert_eq!(shorten("Widget"), "widget");
        assert_eq!(shorten(""), "");
    }

    #[test]
    fn shorten_is_idempotent() {
        for word in ["Context", "CreateRequest", "Widget", "svc", "", "ctx"] {
            let once = shorten(word);
            assert_eq!(shorten(&once), once, "not idempotent for {word:?}");
        }
    }

    #[test]
    fn trim_file_suffixes_reduces_generated_names() {
        assert_eq!(trim_file_suffixes("foo_grpc.pb.go"), "foo");
        assert_eq!(trim_file_suffixes("foo.pb.go"), "foo");
        assert_eq!(trim_file_suffixes("foo.go"), "foo");
    }

    #[test]
    fn trim_file_suffixes_leaves_plain_names_unchanged() {
        assert_eq!(trim_file_suffixes("foo"), "foo");
        assert_eq!(trim_file_suffixes(""), "");
    }

    #[test]
    fn trim_file_suffixes_checks_each_suffix_once() {
        // "_service" sits before ".go" in the name, so a single ordered pass
        // cannot reach it.
        assert_eq!(trim_file_suffixes("foo_service_grpc.go"), "foo_service");
    }

    #[test]
    fn lower_first_lowers_only_the_head() {
        assert_eq!(lower_first("Service"), "service");
        assert_eq!(lower_first("WidgetService"), "widgetService");
    }

    #[test]
    fn lower_first_short_inputs_fully_lowered() {
        assert_eq!(lower_first("A"), "a");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn trim_service_suffix_strips_one_token() {
        assert_eq!(trim_service_suffix("WidgetServer"), "Widget");
        assert_eq!(trim_service_suffix("WidgetService"), "Widget");
        // Only one token per call.
        assert_eq!(trim_service_suffix("WidgetServiceServer"), "WidgetService");
        assert_eq!(trim_service_suffix("Widget"), "Widget");
    }

    #[test]
    fn package_from_dir_takes_last_segment() {
        assert_eq!(package_from_dir(Path::new("handlers/v1")), "v1");
        assert_eq!(package_from_dir(Path::new("services")), "services");
        assert_eq!(package_from_dir(Path::new("/")), "main");
    }
}
