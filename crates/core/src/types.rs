use serde::{Deserialize, Serialize};
use std::fmt;

/// Site language
///
/// `En` is the default: it is the translation fallback and the URL form that
/// carries no language prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Gr,
}

impl Language {
    pub const DEFAULT: Language = Language::En;
    pub const ALL: [Language; 2] = [Language::En, Language::Gr];

    /// Short code used in config files and catalogue names
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Gr => "gr",
        }
    }

    /// Value for `<html lang>` and `hreflang`
    pub const fn html_tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Gr => "el",
        }
    }

    /// Open Graph locale
    pub const fn og_locale(self) -> &'static str {
        match self {
            Language::En => "en_US",
            Language::Gr => "el_GR",
        }
    }

    /// URL prefix segment, `None` for the default language
    pub const fn url_prefix(self) -> Option<&'static str> {
        match self {
            Language::En => None,
            Language::Gr => Some("/el"),
        }
    }

    pub const fn is_default(self) -> bool {
        matches!(self, Language::En)
    }

    /// Parse a language code. Accepts the HTML tag as well (`el`).
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "gr" | "el" => Some(Language::Gr),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Colour scheme a page is rendered with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Everything a render function needs to know about the visitor's choices.
///
/// Passed explicitly to every page and head renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub language: Language,
    pub theme: Theme,
}

impl RenderContext {
    pub fn new(language: Language, theme: Theme) -> Self {
        Self { language, theme }
    }
}

/// Logical page, independent of language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteId {
    Home,
    Product,
    Pricing,
    Contact,
    About,
    NotFound,
}

impl RouteId {
    pub const ALL: [RouteId; 6] = [
        RouteId::Home,
        RouteId::Product,
        RouteId::Pricing,
        RouteId::Contact,
        RouteId::About,
        RouteId::NotFound,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RouteId::Home => "home",
            RouteId::Product => "product",
            RouteId::Pricing => "pricing",
            RouteId::Contact => "contact",
            RouteId::About => "about",
            RouteId::NotFound => "not-found",
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
