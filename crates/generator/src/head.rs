//! Document head: title, canonical and alternate links, robots, Open Graph,
//! Twitter card, JSON-LD and the analytics loader.

use crate::Site;
use crate::html::html_escape;
use omnyo_site_core::seo::{HreflangLink, SeoEntry, StructuredData, hreflang_links};
use omnyo_site_core::{Language, RenderContext, RouteId, seo_entry};
use serde_json::{Value, json};
use std::fmt::Write;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Render the `<head>` inner markup for one page
pub fn render_head(site: &Site, route: RouteId, ctx: RenderContext) -> String {
    let entry = seo_entry(route, ctx.language);
    let urls = &site.urls;
    let canonical = urls.absolute(entry.canonical_path);
    let indexable = entry.is_indexable();
    let robots = html_escape(&entry.robots_directive_string());

    let mut head = String::with_capacity(4096);
    head.push_str("    <meta charset=\"UTF-8\">\n");
    head.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(head, "    <title>{}</title>", html_escape(entry.title));
    push_meta(&mut head, "name", "description", entry.description);
    let _ = writeln!(
        head,
        "    <link rel=\"canonical\" href=\"{}\">",
        html_escape(&canonical)
    );

    if indexable {
        for HreflangLink { hreflang, href } in hreflang_links(route, urls) {
            let _ = writeln!(
                head,
                "    <link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">",
                hreflang,
                html_escape(&href)
            );
        }
    }

    for bot in ["robots", "googlebot", "bingbot"] {
        let _ = writeln!(head, "    <meta name=\"{}\" content=\"{}\">", bot, robots);
    }

    let theme_color = html_escape(&site.config.site.theme_color);
    for scheme in ["light", "dark"] {
        let _ = writeln!(
            head,
            "    <meta name=\"theme-color\" content=\"{}\" media=\"(prefers-color-scheme: {})\">",
            theme_color, scheme
        );
    }

    if let Some(token) = &site.config.verification.google {
        push_meta(&mut head, "name", "google-site-verification", token);
    }
    if let Some(token) = &site.config.verification.bing {
        push_meta(&mut head, "name", "msvalidate.01", token);
    }

    push_meta(&mut head, "property", "og:site_name", &site.config.site.name);
    push_meta(&mut head, "property", "og:type", "website");
    push_meta(&mut head, "property", "og:url", &canonical);
    push_meta(&mut head, "property", "og:title", entry.og_title);
    push_meta(&mut head, "property", "og:description", entry.og_description);
    push_meta(&mut head, "property", "og:image", &urls.absolute(entry.og_image));
    push_meta(&mut head, "property", "og:image:alt", entry.og_image_alt);
    push_meta(
        &mut head,
        "property",
        "og:image:width",
        &entry.og_image_width.to_string(),
    );
    push_meta(
        &mut head,
        "property",
        "og:image:height",
        &entry.og_image_height.to_string(),
    );
    push_meta(&mut head, "property", "og:locale", ctx.language.og_locale());
    if indexable {
        for other in Language::ALL.into_iter().filter(|l| *l != ctx.language) {
            push_meta(&mut head, "property", "og:locale:alternate", other.og_locale());
        }
    }

    push_meta(&mut head, "name", "twitter:card", "summary_large_image");
    push_meta(&mut head, "name", "twitter:title", entry.twitter_title);
    push_meta(&mut head, "name", "twitter:description", entry.twitter_description);
    push_meta(
        &mut head,
        "name",
        "twitter:image",
        &urls.absolute(entry.twitter_image),
    );

    for schema in structured_data(site, route, ctx.language, &entry) {
        let _ = writeln!(
            head,
            "    <script type=\"application/ld+json\">{}</script>",
            script_safe_json(&schema)
        );
    }

    if let Some(id) = &site.config.analytics.ga4_id {
        head.push_str(&analytics_snippet(id));
    }

    head
}

fn push_meta(head: &mut String, attr: &str, key: &str, content: &str) {
    let _ = writeln!(
        head,
        "    <meta {}=\"{}\" content=\"{}\">",
        attr,
        key,
        html_escape(content)
    );
}

/// `</script>` inside a JSON string must not end the element
fn script_safe_json(value: &Value) -> String {
    value.to_string().replace('<', "\\u003c")
}

/// JSON-LD blocks for a page.
///
/// Organization and WebSite are always present. BreadcrumbList and
/// SoftwareApplication follow the entry's markers.
pub fn structured_data(
    site: &Site,
    route: RouteId,
    language: Language,
    entry: &SeoEntry,
) -> Vec<Value> {
    let urls = &site.urls;
    let info = &site.config.site;
    let site_url = urls.absolute("/");
    let canonical = urls.absolute(entry.canonical_path);

    let mut schemas = vec![
        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "Organization",
            "name": info.name,
            "url": site_url,
            "logo": urls.absolute(&info.logo),
            "description": info.description,
            "sameAs": [site.config.social.linkedin, site.config.social.instagram],
        }),
        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "WebSite",
            "name": info.name,
            "url": site_url,
            "inLanguage": language.html_tag(),
        }),
    ];

    if entry.wants(StructuredData::Breadcrumbs) && route != RouteId::Home {
        let home = seo_entry(RouteId::Home, language);
        schemas.push(json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "BreadcrumbList",
            "itemListElement": [
                {
                    "@type": "ListItem",
                    "position": 1,
                    "name": home.breadcrumb.unwrap_or("Home"),
                    "item": urls.absolute(RouteId::Home.path(language)),
                },
                {
                    "@type": "ListItem",
                    "position": 2,
                    "name": entry.breadcrumb.unwrap_or(entry.title),
                    "item": canonical,
                },
            ],
        }));
    }

    if entry.wants(StructuredData::SoftwareApplication) && route == RouteId::Product {
        schemas.push(json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "SoftwareApplication",
            "name": info.name,
            "applicationCategory": "BusinessApplication",
            "operatingSystem": "Web",
            "description": entry.description,
            "url": canonical,
        }));
    }

    schemas
}

/// GA4 loader for a measurement id, IP anonymized
pub fn analytics_snippet(ga4_id: &str) -> String {
    let id = html_escape(ga4_id);
    format!(
        r#"    <script async src="https://www.googletagmanager.com/gtag/js?id={id}"></script>
    <script>
      window.dataLayer = window.dataLayer || [];
      function gtag(){{dataLayer.push(arguments);}}
      gtag('js', new Date());
      gtag('config', '{id}', {{ anonymize_ip: true }});
    </script>
"#
    )
}
