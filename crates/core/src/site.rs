//! Site origin and base path resolution, and absolute URL building.
//!
//! Both values come from an ordered list of resolvers over [`SiteEnv`];
//! the first resolver that answers wins. Malformed URLs degrade to string
//! handling instead of failing.

use url::Url;

/// Origin used when nothing else is configured
pub const FALLBACK_SITE_URL: &str = "https://omnyo.com";

pub const SITE_URL_VAR: &str = "SITE_URL";
pub const BASE_PATH_VAR: &str = "BASE_PATH";

/// Environment inputs for URL resolution. Blank values are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteEnv {
    /// Explicit site URL override, may carry a path (`https://x.com/app/`)
    pub site_url: Option<String>,
    /// Explicit base path override
    pub base_path: Option<String>,
    /// Origin of the host currently serving the site, when known
    pub host_origin: Option<String>,
}

impl SiteEnv {
    /// Read the overrides from the process environment
    pub fn from_env() -> Self {
        Self {
            site_url: non_blank(std::env::var(SITE_URL_VAR).ok()),
            base_path: non_blank(std::env::var(BASE_PATH_VAR).ok()),
            host_origin: None,
        }
    }

    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = non_blank(Some(url.into()));
        self
    }

    pub fn with_base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = non_blank(Some(path.into()));
        self
    }

    pub fn with_host_origin(mut self, origin: impl Into<String>) -> Self {
        self.host_origin = non_blank(Some(origin.into()));
        self
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

type Resolver = fn(&SiteEnv) -> Option<String>;

/// Candidate raw URLs for the origin, in priority order
const ORIGIN_CHAIN: &[Resolver] = &[explicit_site_url, host_origin];

/// Base path candidates, in priority order
const BASE_PATH_CHAIN: &[Resolver] = &[base_path_override, site_url_path];

fn explicit_site_url(env: &SiteEnv) -> Option<String> {
    env.site_url.clone()
}

fn host_origin(env: &SiteEnv) -> Option<String> {
    env.host_origin.clone()
}

fn base_path_override(env: &SiteEnv) -> Option<String> {
    env.base_path.as_deref().map(normalize_base_path)
}

fn site_url_path(env: &SiteEnv) -> Option<String> {
    let parsed = Url::parse(env.site_url.as_deref()?.trim()).ok()?;
    // an opaque URL is used verbatim as the origin, so it has no path of its own
    if !parsed.origin().is_tuple() {
        return None;
    }
    Some(normalize_base_path(parsed.path()))
}

fn first_answer(chain: &[Resolver], env: &SiteEnv) -> Option<String> {
    chain.iter().find_map(|resolve| resolve(env))
}

/// Origin (`scheme://host[:port]`) the site is served from.
///
/// `fallback` is used when neither an explicit site URL nor a host origin
/// is available.
pub fn resolve_origin(env: &SiteEnv, fallback: &str) -> String {
    let raw = first_answer(ORIGIN_CHAIN, env).unwrap_or_else(|| fallback.to_string());
    match Url::parse(raw.trim()) {
        Ok(parsed) if parsed.origin().is_tuple() => parsed.origin().ascii_serialization(),
        _ => {
            tracing::warn!(url = %raw, "site URL does not parse, using it verbatim");
            raw.trim().trim_end_matches('/').to_string()
        }
    }
}

/// Path prefix the whole site is served under; empty for the root.
pub fn resolve_base_path(env: &SiteEnv) -> String {
    first_answer(BASE_PATH_CHAIN, env).unwrap_or_default()
}

/// Strip trailing slashes, collapse `/` to empty and ensure a single
/// leading slash otherwise.
fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Resolved origin and base path, fixed for one build or render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrls {
    origin: String,
    base_path: String,
}

impl SiteUrls {
    pub fn resolve(env: &SiteEnv, fallback: &str) -> Self {
        Self {
            origin: resolve_origin(env, fallback),
            base_path: resolve_base_path(env),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Origin plus base path, no trailing slash
    pub fn root(&self) -> String {
        format!("{}{}", self.origin, self.base_path)
    }

    /// Absolute URL for a site-relative path.
    ///
    /// Already-absolute `http(s)://` input is returned unchanged, so the
    /// operation is idempotent. The root path yields a trailing `/`.
    pub fn absolute(&self, path: &str) -> String {
        if is_absolute_http(path) {
            return path.to_string();
        }
        let relative = path.trim().trim_start_matches('/');
        format!("{}/{}", self.root(), relative)
    }
}

fn is_absolute_http(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(env: SiteEnv) -> SiteUrls {
        SiteUrls::resolve(&env, FALLBACK_SITE_URL)
    }

    #[test]
    fn test_site_url_with_path() {
        let env = SiteEnv::default().with_site_url("https://example.com/app/");
        assert_eq!(resolve_origin(&env, FALLBACK_SITE_URL), "https://example.com");
        assert_eq!(resolve_base_path(&env), "/app");
        assert_eq!(urls(env).absolute("/pricing"), "https://example.com/app/pricing");
    }

    #[test]
    fn test_origin_fallback_order() {
        let env = SiteEnv::default().with_host_origin("http://localhost:8080");
        assert_eq!(resolve_origin(&env, FALLBACK_SITE_URL), "http://localhost:8080");

        let env = env.with_site_url("https://example.com");
        assert_eq!(resolve_origin(&env, FALLBACK_SITE_URL), "https://example.com");

        assert_eq!(
            resolve_origin(&SiteEnv::default(), FALLBACK_SITE_URL),
            "https://omnyo.com"
        );
    }

    #[test]
    fn test_unparseable_origin_used_verbatim() {
        let env = SiteEnv::default().with_site_url("example.com///");
        assert_eq!(resolve_origin(&env, FALLBACK_SITE_URL), "example.com");
        assert_eq!(resolve_base_path(&env), "");
    }

    #[test]
    fn test_opaque_site_url_has_no_base_path() {
        let env = SiteEnv::default().with_site_url("localhost:8080");
        assert_eq!(resolve_origin(&env, FALLBACK_SITE_URL), "localhost:8080");
        assert_eq!(resolve_base_path(&env), "");
        assert_eq!(urls(env).absolute("/sitemap.xml"), "localhost:8080/sitemap.xml");

        let env = SiteEnv::default().with_site_url("localhost:8080/app/");
        assert_eq!(resolve_origin(&env, FALLBACK_SITE_URL), "localhost:8080/app");
        assert_eq!(resolve_base_path(&env), "");
        assert_eq!(urls(env).absolute("/pricing"), "localhost:8080/app/pricing");
    }

    #[test]
    fn test_base_path_override_wins() {
        let env = SiteEnv::default()
            .with_site_url("https://example.com/app/")
            .with_base_path("/docs/");
        assert_eq!(resolve_base_path(&env), "/docs");
    }

    #[test]
    fn test_base_path_root_override_collapses_to_empty() {
        // an explicit "/" still beats the site URL path
        let env = SiteEnv::default()
            .with_site_url("https://example.com/app")
            .with_base_path("/");
        assert_eq!(resolve_base_path(&env), "");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let env = SiteEnv::default().with_site_url("  ").with_base_path("");
        assert_eq!(env, SiteEnv::default());
    }

    #[test]
    fn test_base_path_gets_leading_slash() {
        let env = SiteEnv::default().with_base_path("app/");
        assert_eq!(resolve_base_path(&env), "/app");
    }

    #[test]
    fn test_absolute_root_ends_with_slash() {
        let plain = urls(SiteEnv::default().with_site_url("https://example.com"));
        assert_eq!(plain.absolute("/"), "https://example.com/");

        let nested = urls(SiteEnv::default().with_site_url("https://example.com/app"));
        assert_eq!(nested.absolute("/"), "https://example.com/app/");
        assert_eq!(nested.absolute(""), "https://example.com/app/");
    }

    #[test]
    fn test_absolute_never_doubles_slashes() {
        let u = urls(
            SiteEnv::default()
                .with_site_url("https://example.com/")
                .with_base_path("//app//"),
        );
        assert_eq!(u.absolute("//pricing"), "https://example.com/app/pricing");
        assert_eq!(u.absolute("pricing"), "https://example.com/app/pricing");
    }

    #[test]
    fn test_absolute_is_idempotent() {
        let u = urls(SiteEnv::default().with_site_url("https://example.com/app"));
        for path in ["/", "/pricing", "/el/contact", "/og/og-home.png", "about"] {
            let once = u.absolute(path);
            assert_eq!(u.absolute(&once), once);
        }
        assert_eq!(u.absolute("HTTPS://cdn.example.com/x.png"), "HTTPS://cdn.example.com/x.png");
    }
}
