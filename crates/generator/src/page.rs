//! Static page shells, one per route and language.
//!
//! A shell carries the full head, the translated navigation, a language
//! toggle, the page heading and the footer. The client application takes
//! over from there.

use crate::Site;
use crate::head::render_head;
use crate::html::html_escape;
use omnyo_site_core::router::path_for_language;
use omnyo_site_core::{Language, RenderContext, RouteId, Translations, UiKey};
use std::fmt::Write;

/// Navigation order in the header
const NAV: [(RouteId, UiKey); 5] = [
    (RouteId::Home, UiKey::NavHome),
    (RouteId::Product, UiKey::NavProduct),
    (RouteId::Pricing, UiKey::NavPricing),
    (RouteId::About, UiKey::NavAbout),
    (RouteId::Contact, UiKey::NavContact),
];

/// Output file for a route path: `/` is `index.html`, anything else
/// `<path>/index.html`.
pub fn page_file(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "index.html".to_string()
    } else {
        format!("{trimmed}/index.html")
    }
}

/// Link target for a route path, under the site base path
pub fn site_href(site: &Site, path: &str) -> String {
    let base = site.urls.base_path();
    if base.is_empty() {
        path.to_string()
    } else if path == "/" {
        format!("{base}/")
    } else {
        format!("{base}{path}")
    }
}

/// Complete HTML document for `route` in `ctx.language`.
///
/// `is_preview` appends the live reload script used by the preview server.
pub fn render_page(site: &Site, route: RouteId, ctx: RenderContext, is_preview: bool) -> String {
    let t = &site.translations;
    let lang = ctx.language;
    let path = route.path(lang);

    let main = match route {
        RouteId::NotFound => format!(
            r#"    <main class="not-found">
      <h1>404</h1>
      <p>{}</p>
      <a href="{}">{}</a>
    </main>"#,
            html_escape(t.text(lang, UiKey::NotFoundTitle)),
            html_escape(&site_href(site, RouteId::Home.path(lang))),
            html_escape(t.text(lang, UiKey::NotFoundReturnHome)),
        ),
        _ => {
            let (title, subtitle) = hero_keys(route);
            format!(
                r#"    <main id="root" data-route="{}">
      <h1>{}</h1>
      <p>{}</p>
    </main>"#,
                route,
                html_escape(t.text(lang, title)),
                html_escape(t.text(lang, subtitle)),
            )
        }
    };

    let reload_script = if is_preview { RELOAD_SCRIPT } else { "" };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang_tag}" class="{theme}">
<head>
{head}</head>
<body>
{header}
{main}
{footer}
{reload_script}</body>
</html>
"#,
        lang_tag = lang.html_tag(),
        theme = ctx.theme.as_str(),
        head = render_head(site, route, ctx),
        header = render_header(site, route, path, lang),
        footer = render_footer(site, lang),
    )
}

fn hero_keys(route: RouteId) -> (UiKey, UiKey) {
    match route {
        RouteId::Home | RouteId::NotFound => (UiKey::HomeHeroTitle, UiKey::HomeHeroSubtitle),
        RouteId::Product => (UiKey::ProductHeroTitle, UiKey::ProductHeroSubtitle),
        RouteId::Pricing => (UiKey::PricingHeroTitle, UiKey::PricingHeroSubtitle),
        RouteId::Contact => (UiKey::ContactHeroTitle, UiKey::ContactHeroSubtitle),
        RouteId::About => (UiKey::AboutHeroTitle, UiKey::AboutHeroSubtitle),
    }
}

fn render_header(site: &Site, current: RouteId, path: &str, lang: Language) -> String {
    let t = &site.translations;
    let mut nav = String::new();
    for (route, key) in NAV {
        let aria = if route == current {
            r#" aria-current="page""#
        } else {
            ""
        };
        let _ = writeln!(
            nav,
            r#"        <a href="{}"{}>{}</a>"#,
            html_escape(&site_href(site, route.path(lang))),
            aria,
            html_escape(t.text(lang, key))
        );
    }

    format!(
        r#"    <header>
      <a class="brand" href="{home}">{name}</a>
      <nav>
{nav}      </nav>
{toggle}
      <a class="cta" href="{contact}">{cta}</a>
    </header>"#,
        home = html_escape(&site_href(site, RouteId::Home.path(lang))),
        name = html_escape(&site.config.site.name),
        toggle = render_language_toggle(site, t, path, lang),
        contact = html_escape(&site_href(site, RouteId::Contact.path(lang))),
        cta = html_escape(t.text(lang, UiKey::NavGetEarlyAccess)),
    )
}

/// Radio group linking to the current page in every language
fn render_language_toggle(site: &Site, t: &Translations, path: &str, lang: Language) -> String {
    let mut toggle = format!(
        r#"      <div class="language-toggle" role="radiogroup" aria-label="{}">"#,
        html_escape(t.text(lang, UiKey::LanguageLabel))
    );
    toggle.push('\n');
    for target in Language::ALL {
        let label = match target {
            Language::En => UiKey::LanguageEnglish,
            Language::Gr => UiKey::LanguageGreek,
        };
        let _ = writeln!(
            toggle,
            r#"        <a role="radio" aria-checked="{}" aria-label="{}" hreflang="{}" href="{}">{}</a>"#,
            target == lang,
            html_escape(t.text(lang, label)),
            target.html_tag(),
            html_escape(&site_href(site, &path_for_language(path, target))),
            target.code().to_ascii_uppercase()
        );
    }
    toggle.push_str("      </div>");
    toggle
}

fn render_footer(site: &Site, lang: Language) -> String {
    let t = &site.translations;
    format!(
        r#"    <footer>
      <p class="tagline">{}</p>
      <a href="{}" rel="noopener noreferrer" aria-label="Instagram">Instagram</a>
      <a href="{}" rel="noopener noreferrer" aria-label="LinkedIn">LinkedIn</a>
      <p class="copyright">{}</p>
    </footer>"#,
        html_escape(t.text(lang, UiKey::FooterTagline)),
        html_escape(&site.config.social.instagram),
        html_escape(&site.config.social.linkedin),
        html_escape(t.text(lang, UiKey::CopyrightNotice)),
    )
}

const RELOAD_SCRIPT: &str = r#"    <script>
      // Live reload via Server-Sent Events
      const eventSource = new EventSource('/_reload');
      eventSource.onmessage = () => location.reload();
      eventSource.onerror = () => eventSource.close();
    </script>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_site;
    use omnyo_site_core::{SiteEnv, SiteUrls, Theme};

    fn render(route: RouteId, language: Language, theme: Theme) -> String {
        render_page(&test_site(), route, RenderContext::new(language, theme), false)
    }

    #[test]
    fn test_page_file() {
        assert_eq!(page_file("/"), "index.html");
        assert_eq!(page_file("/el"), "el/index.html");
        assert_eq!(page_file("/el/contact"), "el/contact/index.html");
        assert_eq!(page_file("/pricing"), "pricing/index.html");
    }

    #[test]
    fn test_page_uses_render_context() {
        let html = render(RouteId::Pricing, Language::Gr, Theme::Dark);
        assert!(html.contains(r#"<html lang="el" class="dark">"#));
        assert!(html.contains("<h1>Εγγραφείτε στο πιλοτικό μας πρόγραμμα</h1>"));
        assert!(html.contains(r#"<a href="/el/pricing" aria-current="page">Τιμολόγηση</a>"#));

        let html = render(RouteId::Pricing, Language::En, Theme::Light);
        assert!(html.contains(r#"<html lang="en" class="light">"#));
        assert!(html.contains(r#"<a href="/pricing" aria-current="page">Pricing</a>"#));
    }

    #[test]
    fn test_language_toggle_links() {
        let html = render(RouteId::Contact, Language::En, Theme::Light);
        assert!(html.contains(r#"aria-checked="true" aria-label="English" hreflang="en" href="/contact">EN</a>"#));
        assert!(html.contains(r#"aria-checked="false" aria-label="Greek" hreflang="el" href="/el/contact">GR</a>"#));
        assert!(html.contains(r#"role="radiogroup" aria-label="Select language""#));
    }

    #[test]
    fn test_translated_navigation() {
        let html = render(RouteId::Home, Language::Gr, Theme::Light);
        assert!(html.contains(r#"<a href="/el" aria-current="page">Αρχική</a>"#));
        assert!(html.contains("Επιλογή γλώσσας"));
    }

    #[test]
    fn test_not_found_page() {
        let html = render(RouteId::NotFound, Language::En, Theme::Light);
        assert!(html.contains("<p>Oops! Page not found</p>"));
        assert!(html.contains(r#"<a href="/">Return to Home</a>"#));
        assert!(html.contains(r#"content="noindex, nofollow""#));
    }

    #[test]
    fn test_links_respect_base_path() {
        let mut site = test_site();
        site.urls = SiteUrls::resolve(
            &SiteEnv::default().with_site_url("https://example.com/app/"),
            "https://omnyo.com",
        );
        assert_eq!(site_href(&site, "/"), "/app/");
        assert_eq!(site_href(&site, "/el/contact"), "/app/el/contact");

        let html = render_page(
            &site,
            RouteId::About,
            RenderContext::new(Language::En, Theme::Light),
            false,
        );
        assert!(html.contains(r#"href="/app/el/about""#));
    }

    #[test]
    fn test_preview_reload_script() {
        let site = test_site();
        let ctx = RenderContext::new(Language::En, Theme::Light);
        assert!(!render_page(&site, RouteId::Home, ctx, false).contains("/_reload"));
        assert!(render_page(&site, RouteId::Home, ctx, true).contains("new EventSource('/_reload')"));
    }
}
