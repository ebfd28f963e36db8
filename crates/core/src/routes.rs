//! Route table: logical pages to language-specific URL paths.

use crate::router::{detect_language, normalize_path};
use crate::types::{Language, RouteId};

/// Paths for one route, one per language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePaths {
    pub en: &'static str,
    pub gr: &'static str,
}

impl RoutePaths {
    pub const fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Gr => self.gr,
        }
    }
}

/// Route table lookup. Total over the closed `RouteId` set.
pub const fn routes(route: RouteId) -> RoutePaths {
    match route {
        RouteId::Home => RoutePaths { en: "/", gr: "/el" },
        RouteId::Product => RoutePaths {
            en: "/product",
            gr: "/el/product",
        },
        RouteId::Pricing => RoutePaths {
            en: "/pricing",
            gr: "/el/pricing",
        },
        RouteId::Contact => RoutePaths {
            en: "/contact",
            gr: "/el/contact",
        },
        RouteId::About => RoutePaths {
            en: "/about",
            gr: "/el/about",
        },
        RouteId::NotFound => RoutePaths {
            en: "/404",
            gr: "/el/404",
        },
    }
}

impl RouteId {
    /// Path of this route in `language`
    pub const fn path(self, language: Language) -> &'static str {
        routes(self).get(language)
    }
}

/// Map a URL path to the page that serves it.
///
/// Unknown paths resolve to the not-found page in the language the path
/// carries, which is what the SPA's catch-all route renders.
pub fn resolve_route(path: &str) -> (RouteId, Language) {
    let normalized = normalize_path(path);
    let language = detect_language(&normalized);
    let route = RouteId::ALL
        .into_iter()
        .find(|route| route.path(language) == normalized)
        .unwrap_or(RouteId::NotFound);
    (route, language)
}

/// Paths handed to the prerenderer, in render order.
///
/// Every page per language first, the not-found pages last.
pub fn prerender_routes() -> Vec<&'static str> {
    let mut paths = Vec::with_capacity(RouteId::ALL.len() * Language::ALL.len());
    for language in Language::ALL {
        for route in RouteId::ALL {
            if route != RouteId::NotFound {
                paths.push(route.path(language));
            }
        }
    }
    for language in Language::ALL {
        paths.push(RouteId::NotFound.path(language));
    }
    paths
}
