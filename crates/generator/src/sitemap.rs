//! Sitemap generation.
//!
//! Lists every indexable page in every language:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://omnyo.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use chrono::NaiveDate;
use omnyo_site_core::{Language, RouteId, SiteUrls, seo_entry};
use std::borrow::Cow;

pub const SITEMAP_FILE: &str = "sitemap.xml";

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
}

impl Sitemap {
    /// One entry per indexable (route, language) pair, in route order
    pub fn build(urls: &SiteUrls, lastmod: NaiveDate) -> Self {
        let mut entries = Vec::new();
        for route in RouteId::ALL {
            for language in Language::ALL {
                let entry = seo_entry(route, language);
                if !entry.is_indexable() {
                    tracing::debug!(%route, %language, "skipping non-indexable page");
                    continue;
                }
                entries.push(UrlEntry {
                    loc: urls.absolute(entry.canonical_path),
                    lastmod,
                });
            }
        }
        Self { urls: entries }
    }

    pub fn entries(&self) -> &[UrlEntry] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 96);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in &self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&entry.lastmod.format("%Y-%m-%d").to_string());
            xml.push_str("</lastmod>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnyo_site_core::SiteEnv;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn urls(site_url: &str) -> SiteUrls {
        SiteUrls::resolve(&SiteEnv::default().with_site_url(site_url), "https://omnyo.com")
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("https://omnyo.com/"), "https://omnyo.com/");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<x>"), "&lt;x&gt;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_has_one_entry_per_indexable_pair() {
        let sitemap = Sitemap::build(&urls("https://example.com"), date());

        let indexable = RouteId::ALL
            .iter()
            .flat_map(|route| Language::ALL.map(|lang| seo_entry(*route, lang)))
            .filter(|entry| entry.is_indexable())
            .count();
        assert_eq!(sitemap.len(), indexable);
        assert_eq!(sitemap.len(), 10);
    }

    #[test]
    fn test_sitemap_excludes_not_found() {
        let sitemap = Sitemap::build(&urls("https://example.com"), date());
        let xml = sitemap.to_xml();

        assert!(!xml.contains("/404"));
        assert!(
            sitemap
                .entries()
                .iter()
                .all(|e| !e.loc.ends_with("/404"))
        );
    }

    #[test]
    fn test_sitemap_locations() {
        let sitemap = Sitemap::build(&urls("https://example.com/app/"), date());
        let locs: Vec<&str> = sitemap.entries().iter().map(|e| e.loc.as_str()).collect();

        assert_eq!(locs[0], "https://example.com/app/");
        assert_eq!(locs[1], "https://example.com/app/el");
        assert!(locs.contains(&"https://example.com/app/pricing"));
        assert!(locs.contains(&"https://example.com/app/el/contact"));
    }

    #[test]
    fn test_sitemap_xml_shape() {
        let xml = Sitemap::build(&urls("https://example.com"), date()).to_xml();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("  <url>\n    <loc>https://example.com/</loc>\n    <lastmod>2025-03-14</lastmod>\n  </url>\n"));
        assert_eq!(xml.matches("<url>").count(), 10);
        assert_eq!(xml.matches("<lastmod>2025-03-14</lastmod>").count(), 10);
        assert!(xml.ends_with("</urlset>\n"));
    }
}
