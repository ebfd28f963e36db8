//! Translation store and resolver.
//!
//! Catalogues are nested JSON objects, one per language, addressed with
//! dotted keys (`contact.form.submit`). Lookups fall back to the default
//! language, then to the key itself, and never fail.

use crate::error::{Error, Result};
use crate::types::Language;
use serde_json::Value;
use std::fs;
use std::path::Path;

const EN_JSON: &str = include_str!("../locales/en.json");
const GR_JSON: &str = include_str!("../locales/gr.json");

/// Per-language nested string catalogues
#[derive(Debug, Clone)]
pub struct Translations {
    en: Value,
    gr: Value,
}

impl Translations {
    /// Catalogues compiled into the binary
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            en: parse_catalogue(EN_JSON, Language::En)?,
            gr: parse_catalogue(GR_JSON, Language::Gr)?,
        })
    }

    /// Load `<code>.json` catalogues from a directory.
    ///
    /// A language without a file keeps its embedded catalogue.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut translations = Self::embedded()?;
        for language in Language::ALL {
            let path = dir.join(format!("{}.json", language.code()));
            if !path.exists() {
                continue;
            }
            let content = fs::read_to_string(&path)?;
            let catalogue = parse_catalogue(&content, language)?;
            tracing::debug!(path = %path.display(), "loaded catalogue");
            *translations.catalogue_mut(language) = catalogue;
        }
        Ok(translations)
    }

    /// Build from already-parsed catalogues
    pub fn from_values(en: Value, gr: Value) -> Self {
        Self { en, gr }
    }

    pub fn catalogue(&self, language: Language) -> &Value {
        match language {
            Language::En => &self.en,
            Language::Gr => &self.gr,
        }
    }

    fn catalogue_mut(&mut self, language: Language) -> &mut Value {
        match language {
            Language::En => &mut self.en,
            Language::Gr => &mut self.gr,
        }
    }

    /// Resolve `key` for `language`.
    ///
    /// If the active catalogue is missing any segment of the key, the whole
    /// key is looked up again in the default catalogue. A miss there, or a
    /// walk that ends on something other than a string, yields `key`.
    pub fn translate<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        let segments: Vec<&str> = key.split('.').collect();

        let found = match walk(self.catalogue(language), &segments) {
            Some(value) => Some(value),
            None if language.is_default() => None,
            None => {
                tracing::debug!(key, %language, "translation missing, using default language");
                walk(self.catalogue(Language::DEFAULT), &segments)
            }
        };

        match found {
            Some(Value::String(text)) => text.as_str(),
            Some(_) => {
                tracing::debug!(key, "translation key names a section, not a string");
                key
            }
            None => {
                tracing::debug!(key, "missing translation key");
                key
            }
        }
    }

    /// Resolve one of the keys the site renders
    pub fn text(&self, language: Language, key: UiKey) -> &str {
        self.translate(language, key.as_str())
    }

    /// Dotted keys of every leaf in a catalogue, sorted
    pub fn leaf_keys(&self, language: Language) -> Vec<String> {
        let mut keys = Vec::new();
        collect_leaves(self.catalogue(language), "", &mut keys);
        keys.sort();
        keys
    }

    /// Whether `key` resolves to a string in `language` without fallback
    pub fn has_string(&self, language: Language, key: &str) -> bool {
        let segments: Vec<&str> = key.split('.').collect();
        matches!(
            walk(self.catalogue(language), &segments),
            Some(Value::String(_))
        )
    }
}

fn parse_catalogue(content: &str, language: Language) -> Result<Value> {
    let value: Value = serde_json::from_str(content)?;
    if !value.is_object() {
        return Err(Error::InvalidData(format!(
            "Catalogue for '{}' must be a JSON object",
            language
        )));
    }
    Ok(value)
}

fn walk<'a>(root: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(root, |value, segment| value.as_object()?.get(*segment))
}

fn collect_leaves(value: &Value, prefix: &str, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                collect_leaves(child, &key, out);
            }
        }
        _ if !prefix.is_empty() => out.push(prefix.to_string()),
        _ => {}
    }
}

/// Every translation key the generated pages render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiKey {
    NavHome,
    NavProduct,
    NavPricing,
    NavAbout,
    NavContact,
    NavGetEarlyAccess,
    HomeHeroTitle,
    HomeHeroSubtitle,
    ProductHeroTitle,
    ProductHeroSubtitle,
    PricingHeroTitle,
    PricingHeroSubtitle,
    ContactHeroTitle,
    ContactHeroSubtitle,
    AboutHeroTitle,
    AboutHeroSubtitle,
    NotFoundTitle,
    NotFoundReturnHome,
    FooterTagline,
    CopyrightNotice,
    LanguageLabel,
    LanguageEnglish,
    LanguageGreek,
}

impl UiKey {
    pub const ALL: &'static [UiKey] = &[
        UiKey::NavHome,
        UiKey::NavProduct,
        UiKey::NavPricing,
        UiKey::NavAbout,
        UiKey::NavContact,
        UiKey::NavGetEarlyAccess,
        UiKey::HomeHeroTitle,
        UiKey::HomeHeroSubtitle,
        UiKey::ProductHeroTitle,
        UiKey::ProductHeroSubtitle,
        UiKey::PricingHeroTitle,
        UiKey::PricingHeroSubtitle,
        UiKey::ContactHeroTitle,
        UiKey::ContactHeroSubtitle,
        UiKey::AboutHeroTitle,
        UiKey::AboutHeroSubtitle,
        UiKey::NotFoundTitle,
        UiKey::NotFoundReturnHome,
        UiKey::FooterTagline,
        UiKey::CopyrightNotice,
        UiKey::LanguageLabel,
        UiKey::LanguageEnglish,
        UiKey::LanguageGreek,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            UiKey::NavHome => "nav.home",
            UiKey::NavProduct => "nav.product",
            UiKey::NavPricing => "nav.pricing",
            UiKey::NavAbout => "nav.about",
            UiKey::NavContact => "nav.contact",
            UiKey::NavGetEarlyAccess => "nav.getEarlyAccess",
            UiKey::HomeHeroTitle => "home.heroTitle",
            UiKey::HomeHeroSubtitle => "home.heroSubtitle",
            UiKey::ProductHeroTitle => "product.heroTitle",
            UiKey::ProductHeroSubtitle => "product.heroSubtitle",
            UiKey::PricingHeroTitle => "pricing.heroTitle",
            UiKey::PricingHeroSubtitle => "pricing.heroSubtitle",
            UiKey::ContactHeroTitle => "contact.heroTitle",
            UiKey::ContactHeroSubtitle => "contact.heroSubtitle",
            UiKey::AboutHeroTitle => "about.heroTitle",
            UiKey::AboutHeroSubtitle => "about.heroSubtitle",
            UiKey::NotFoundTitle => "notFound.title",
            UiKey::NotFoundReturnHome => "notFound.returnHome",
            UiKey::FooterTagline => "footer.tagline",
            UiKey::CopyrightNotice => "common.copyrightNotice",
            UiKey::LanguageLabel => "language.label",
            UiKey::LanguageEnglish => "language.english",
            UiKey::LanguageGreek => "language.greek",
        }
    }
}
