//! robots.txt generation.

use omnyo_site_core::SiteUrls;

pub const ROBOTS_FILE: &str = "robots.txt";

/// robots.txt allowing every crawler and pointing at the sitemap
pub fn robots_txt(urls: &SiteUrls) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/{}\n",
        urls.root(),
        crate::sitemap::SITEMAP_FILE
    )
}
