// Site validation: catalogues, route table, SEO table and URL configuration

use omnyo_site_core::router::detect_language;
use omnyo_site_core::{Language, RouteId, SiteConfig, SiteEnv, Translations, UiKey, seo_entry};
use std::collections::BTreeSet;
use url::Url;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn validate_site(
    config: &SiteConfig,
    translations: &Translations,
    env: &SiteEnv,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_catalogues(translations, &mut report);
    check_route_table(&mut report);
    check_seo_table(&mut report);
    check_urls(config, env, &mut report);

    report
}

fn check_catalogues(translations: &Translations, report: &mut ValidationReport) {
    let default = Language::DEFAULT;

    for key in UiKey::ALL {
        if !translations.has_string(default, key.as_str()) {
            report.errors.push(format!(
                "Catalogue '{}' is missing rendered key '{}'",
                default,
                key.as_str()
            ));
        }
    }

    let default_keys: BTreeSet<String> = translations.leaf_keys(default).into_iter().collect();

    for language in Language::ALL {
        let keys = translations.leaf_keys(language);

        for key in &keys {
            if !translations.has_string(language, key) {
                report.errors.push(format!(
                    "Catalogue '{}' key '{}' is not a string",
                    language, key
                ));
            }
        }

        if language == default {
            report.info.push(format!(
                "Catalogue '{}': {} keys",
                language,
                keys.len()
            ));
            continue;
        }

        let own: BTreeSet<String> = keys.into_iter().collect();
        let missing: Vec<&String> = default_keys.difference(&own).collect();
        let orphans: Vec<&String> = own.difference(&default_keys).collect();

        for key in &missing {
            report.warnings.push(format!(
                "Catalogue '{}' is missing '{}', backfilled from '{}'",
                language, key, default
            ));
        }
        for key in &orphans {
            report.warnings.push(format!(
                "Catalogue '{}' key '{}' does not exist in '{}'",
                language, key, default
            ));
        }

        report.info.push(format!(
            "Catalogue '{}': {} keys, {} backfilled",
            language,
            own.len(),
            missing.len()
        ));
    }
}

fn check_route_table(report: &mut ValidationReport) {
    for route in RouteId::ALL {
        for language in Language::ALL {
            let path = route.path(language);
            if detect_language(path) != language {
                report.errors.push(format!(
                    "Route '{}' path '{}' is detected as '{}', not '{}'",
                    route,
                    path,
                    detect_language(path),
                    language
                ));
            }

            if let Some(prefix) = language.url_prefix() {
                let base = route.path(Language::DEFAULT);
                let expected = if base == "/" {
                    prefix.to_string()
                } else {
                    format!("{prefix}{base}")
                };
                if path != expected {
                    report.errors.push(format!(
                        "Route '{}' path '{}' for '{}' should be '{}'",
                        route, path, language, expected
                    ));
                }
            }
        }
    }

    report.info.push(format!(
        "Routes: {} pages in {} languages",
        RouteId::ALL.len(),
        Language::ALL.len()
    ));
}

fn check_seo_table(report: &mut ValidationReport) {
    let mut indexable = 0;
    for route in RouteId::ALL {
        for language in Language::ALL {
            let entry = seo_entry(route, language);
            if entry.canonical_path != route.path(language) {
                report.errors.push(format!(
                    "SEO entry '{}/{}' canonical path '{}' does not match route '{}'",
                    route,
                    language,
                    entry.canonical_path,
                    route.path(language)
                ));
            }
            if entry.title.trim().is_empty() {
                report
                    .errors
                    .push(format!("SEO entry '{}/{}' has an empty title", route, language));
            }
            if entry.description.trim().is_empty() {
                report.errors.push(format!(
                    "SEO entry '{}/{}' has an empty description",
                    route, language
                ));
            }
            if entry.is_indexable() {
                indexable += 1;
            }
        }
    }

    report
        .info
        .push(format!("Sitemap: {} indexable pages", indexable));
}

fn check_urls(config: &SiteConfig, env: &SiteEnv, report: &mut ValidationReport) {
    if let Some(site_url) = &env.site_url
        && !has_tuple_origin(site_url)
    {
        report.warnings.push(format!(
            "SITE_URL '{}' does not parse as a URL, it will be used verbatim",
            site_url
        ));
    }

    if !has_tuple_origin(&config.site.url) {
        report.warnings.push(format!(
            "site.url '{}' does not parse as a URL, it will be used verbatim",
            config.site.url
        ));
    }

    if !config.site.theme_color.starts_with('#') {
        report.warnings.push(format!(
            "site.theme_color '{}' is not a hex colour",
            config.site.theme_color
        ));
    }
}

fn has_tuple_origin(raw: &str) -> bool {
    Url::parse(raw.trim())
        .map(|url| url.origin().is_tuple())
        .unwrap_or(false)
}
