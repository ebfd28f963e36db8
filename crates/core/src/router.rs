//! Language routing: which language a URL path is in, and where the same
//! page lives in another language.
//!
//! Everything here is a pure function of the path. Actual navigation is
//! delegated to a [`Navigator`] supplied by the host.

use crate::types::Language;
use std::fmt;

/// Normalize a URL path: exactly one leading slash, no trailing slash
/// except for the root itself.
pub fn normalize_path(path: &str) -> String {
    let rest = path.trim().trim_start_matches('/');
    let rest = rest.trim_end_matches('/');
    format!("/{rest}")
}

/// Language a path is served in.
///
/// The alternate language is active when the normalized path is its prefix
/// or starts with the prefix followed by `/`. Anything else is the default.
pub fn detect_language(path: &str) -> Language {
    let path = normalize_path(path);
    Language::ALL
        .into_iter()
        .find(|lang| match lang.url_prefix() {
            Some(prefix) => has_prefix(&path, prefix),
            None => false,
        })
        .unwrap_or(Language::DEFAULT)
}

fn has_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Remove any alternate-language prefix, yielding the language-neutral
/// path. The bare prefix maps to `/`.
pub fn strip_language_prefix(path: &str) -> String {
    let path = normalize_path(path);
    for prefix in Language::ALL.iter().filter_map(|lang| lang.url_prefix()) {
        if path == prefix {
            return "/".to_string();
        }
        if let Some(rest) = path.strip_prefix(prefix)
            && rest.starts_with('/')
        {
            return rest.to_string();
        }
    }
    path
}

/// Equivalent of `path` in `target`.
///
/// Idempotent: applying it twice with the same target gives the same path.
pub fn path_for_language(path: &str, target: Language) -> String {
    let base = strip_language_prefix(path);
    match target.url_prefix() {
        None => base,
        Some(prefix) if base == "/" => prefix.to_string(),
        Some(prefix) => format!("{prefix}{base}"),
    }
}

/// A browser location split into its parts.
///
/// `query` and `hash` are stored without their leading `?` / `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: String,
    pub hash: String,
}

impl Location {
    /// Split an href such as `/el/contact?ref=nav#form`.
    pub fn parse(href: &str) -> Self {
        let (rest, hash) = match href.split_once('#') {
            Some((rest, hash)) => (rest, hash),
            None => (href, ""),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, query),
            None => (rest, ""),
        };
        Self {
            path: normalize_path(path),
            query: query.to_string(),
            hash: hash.to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.hash.is_empty() {
            write!(f, "#{}", self.hash)?;
        }
        Ok(())
    }
}

/// Host navigation primitive (client-side router, HTTP redirect, ...)
pub trait Navigator {
    fn navigate(&mut self, to: &Location);
}

/// Location to move to when switching `current` to `target`, or `None`
/// when the page is already in that language.
pub fn switch_target(current: &Location, target: Language) -> Option<Location> {
    if detect_language(&current.path) == target {
        return None;
    }
    Some(Location {
        path: path_for_language(&current.path, target),
        query: current.query.clone(),
        hash: current.hash.clone(),
    })
}

/// Switch the visitor to `target`, keeping query string and fragment.
///
/// Returns whether a navigation was issued.
pub fn switch_language<N: Navigator + ?Sized>(
    navigator: &mut N,
    current: &Location,
    target: Language,
) -> bool {
    match switch_target(current, target) {
        Some(to) => {
            tracing::debug!(from = %current, to = %to, "switching language");
            navigator.navigate(&to);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_PATHS: &[&str] = &["/", "/product", "/pricing", "/contact", "/about", "/404", "/a/b/c"];

    #[derive(Default)]
    struct RecordingNavigator {
        visited: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, to: &Location) {
            self.visited.push(to.to_string());
        }
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("contact"), "/contact");
        assert_eq!(normalize_path("/contact/"), "/contact");
        assert_eq!(normalize_path("//el//"), "/el");
        assert_eq!(normalize_path("/a/b/"), "/a/b");
    }

    #[test]
    fn test_detect_language_scenarios() {
        assert_eq!(detect_language("/el/contact"), Language::Gr);
        assert_eq!(detect_language("/contact"), Language::En);
        assert_eq!(detect_language("/el"), Language::Gr);
        assert_eq!(detect_language("/el/"), Language::Gr);
        assert_eq!(detect_language("el/pricing"), Language::Gr);
        assert_eq!(detect_language("/elephant"), Language::En);
        assert_eq!(detect_language("/"), Language::En);
    }

    #[test]
    fn test_path_for_language_scenarios() {
        assert_eq!(path_for_language("/el/contact", Language::En), "/contact");
        assert_eq!(path_for_language("/", Language::Gr), "/el");
        assert_eq!(path_for_language("/el", Language::En), "/");
        assert_eq!(path_for_language("/contact", Language::Gr), "/el/contact");
        assert_eq!(path_for_language("/el/contact", Language::Gr), "/el/contact");
    }

    #[test]
    fn test_path_for_language_round_trip() {
        for base in BASE_PATHS {
            for lang in Language::ALL {
                let localized = path_for_language(base, lang);
                assert_eq!(detect_language(&localized), lang, "{base} -> {localized}");
                assert_eq!(
                    path_for_language(&localized, Language::DEFAULT),
                    *base,
                    "{base} via {lang}"
                );
            }
        }
    }

    #[test]
    fn test_path_for_language_idempotent() {
        for base in BASE_PATHS {
            for lang in Language::ALL {
                let once = path_for_language(base, lang);
                assert_eq!(path_for_language(&once, lang), once);
            }
        }
    }

    #[test]
    fn test_location_parse_and_display() {
        let loc = Location::parse("/el/contact/?ref=nav&x=1#form");
        assert_eq!(loc.path, "/el/contact");
        assert_eq!(loc.query, "ref=nav&x=1");
        assert_eq!(loc.hash, "form");
        assert_eq!(loc.to_string(), "/el/contact?ref=nav&x=1#form");

        let bare = Location::parse("/pricing");
        assert_eq!(bare.to_string(), "/pricing");

        let hash_only = Location::parse("/#top");
        assert_eq!(hash_only.query, "");
        assert_eq!(hash_only.to_string(), "/#top");
    }

    #[test]
    fn test_switch_language_carries_query_and_hash() {
        let mut nav = RecordingNavigator::default();
        let current = Location::parse("/contact?utm_source=ad#form");

        assert!(switch_language(&mut nav, &current, Language::Gr));
        assert_eq!(nav.visited, vec!["/el/contact?utm_source=ad#form"]);
    }

    #[test]
    fn test_switch_language_noop_for_same_language() {
        let mut nav = RecordingNavigator::default();
        let current = Location::parse("/el/pricing");

        assert!(!switch_language(&mut nav, &current, Language::Gr));
        assert!(nav.visited.is_empty());
    }

    #[test]
    fn test_switch_language_from_alternate_root() {
        let mut nav = RecordingNavigator::default();
        assert!(switch_language(&mut nav, &Location::parse("/el?x=1"), Language::En));
        assert_eq!(nav.visited, vec!["/?x=1"]);
    }
}
